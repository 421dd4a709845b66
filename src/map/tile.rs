//! Tiles and the tile grid.

use serde::{Deserialize, Serialize};

use crate::core::Coord;

/// A single map cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Floor,
    Wall,
}

impl Tile {
    /// Floors can be walked on; walls never.
    #[must_use]
    pub const fn is_walkable(self) -> bool {
        matches!(self, Tile::Floor)
    }

    /// Walls block sight.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        matches!(self, Tile::Wall)
    }

    /// Conventional roguelike glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Tile::Floor => '.',
            Tile::Wall => '#',
        }
    }
}

/// Cells in a `width` by `height` grid; negative sides count as empty.
#[must_use]
pub fn cell_count(width: i32, height: i32) -> usize {
    width.max(0) as usize * height.max(0) as usize
}

/// Fixed-size grid of tiles addressed by `(x, y)`.
///
/// Out-of-bounds reads return `None` rather than panicking; callers treat
/// "outside the map" like an impassable wall.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: i32,
    height: i32,
    /// Column-major: index = x * height + y.
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Create a grid filled with one tile.
    #[must_use]
    pub fn filled(width: i32, height: i32, tile: Tile) -> Self {
        let len = cell_count(width, height);
        Self {
            width: width.max(0),
            height: height.max(0),
            tiles: vec![tile; len],
        }
    }

    /// Build a grid from rows of glyphs (`#` wall, anything else floor).
    ///
    /// Rows shorter than the first are padded with walls.
    ///
    /// ```
    /// use simple_roguelike::map::{Tile, TileGrid};
    /// use simple_roguelike::core::Coord;
    ///
    /// let grid = TileGrid::from_rows(&["###", "#.#", "###"]);
    /// assert_eq!(grid.tile(Coord::new(1, 1)), Some(Tile::Floor));
    /// assert_eq!(grid.tile(Coord::new(0, 1)), Some(Tile::Wall));
    /// ```
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
        let mut grid = Self::filled(width, height, Tile::Wall);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate().take(width as usize) {
                if c != '#' {
                    grid.set(Coord::new(x as i32, y as i32), Tile::Floor);
                }
            }
        }
        grid
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Storage holds exactly one tile per cell.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.width >= 0 && self.height >= 0 && self.tiles.len() == cell_count(self.width, self.height)
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    /// Linear index of an in-bounds coordinate.
    #[must_use]
    pub fn index(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord)
            .then(|| coord.x as usize * self.height as usize + coord.y as usize)
    }

    /// Coordinate of a linear index.
    #[must_use]
    pub fn coord_of(&self, index: usize) -> Coord {
        let h = self.height.max(1) as usize;
        Coord::new((index / h) as i32, (index % h) as i32)
    }

    /// Tile at `coord`, or `None` outside the map.
    #[must_use]
    pub fn tile(&self, coord: Coord) -> Option<Tile> {
        self.index(coord).map(|i| self.tiles[i])
    }

    /// Overwrite a tile. Out-of-bounds writes are ignored.
    pub fn set(&mut self, coord: Coord, tile: Tile) {
        if let Some(i) = self.index(coord) {
            self.tiles[i] = tile;
        }
    }

    /// In bounds and a floor.
    #[must_use]
    pub fn is_walkable(&self, coord: Coord) -> bool {
        self.tile(coord).is_some_and(Tile::is_walkable)
    }

    /// Out of bounds counts as opaque.
    #[must_use]
    pub fn is_opaque(&self, coord: Coord) -> bool {
        self.tile(coord).map_or(true, Tile::is_opaque)
    }

    /// All floor coordinates in column-major order.
    #[must_use]
    pub fn floor_coords(&self) -> Vec<Coord> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_walkable())
            .map(|(i, _)| self.coord_of(i))
            .collect()
    }

    /// Render as rows of glyphs, top row first.
    #[must_use]
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.tile(Coord::new(x, y)).map_or(' ', Tile::glyph))
                    .collect()
            })
            .collect()
    }
}
