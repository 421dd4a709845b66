//! Property tests for level generation, field of view, and distance maps.

use proptest::prelude::*;

use simple_roguelike::core::{Coord, GameRng};
use simple_roguelike::fov::compute_fov;
use simple_roguelike::map::{MapGenerator, Tile, TileGrid};
use simple_roguelike::pathfinding::{DijkstraMap, PathFinder};

fn generate(seed: u64, width: i32, height: i32) -> simple_roguelike::map::GameMap {
    let mut rng = GameRng::new(seed);
    MapGenerator::new()
        .generate_map(width, height, 3, 3, &mut rng)
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The outer ring is always wall.
    #[test]
    fn border_is_wall(seed in any::<u64>(), width in 5i32..60, height in 5i32..60) {
        let map = generate(seed, width, height);
        for x in 0..width {
            prop_assert_eq!(map.grid.tile(Coord::new(x, 0)), Some(Tile::Wall));
            prop_assert_eq!(map.grid.tile(Coord::new(x, height - 1)), Some(Tile::Wall));
        }
        for y in 0..height {
            prop_assert_eq!(map.grid.tile(Coord::new(0, y)), Some(Tile::Wall));
            prop_assert_eq!(map.grid.tile(Coord::new(width - 1, y)), Some(Tile::Wall));
        }
    }

    /// Every floor cell is reachable from the player.
    #[test]
    fn floor_is_connected(seed in any::<u64>(), width in 5i32..60, height in 5i32..60) {
        let map = generate(seed, width, height);
        let mut paths = DijkstraMap::from_grid(&map.grid);
        paths.set_goal(map.player.position);
        paths.scan();

        for coord in map.grid.floor_coords() {
            prop_assert!(paths.distance(coord).is_some(), "{} unreachable", coord);
        }
    }

    /// Entities stand on distinct floor cells.
    #[test]
    fn entities_on_distinct_floor(seed in any::<u64>()) {
        let map = generate(seed, 40, 40);
        let mut cells: Vec<Coord> = std::iter::once(map.player.position)
            .chain(map.enemies.iter().map(|e| e.position))
            .chain(map.items.iter().map(|i| i.position))
            .collect();
        for &c in &cells {
            prop_assert!(map.grid.is_walkable(c));
        }
        let total = cells.len();
        cells.sort();
        cells.dedup();
        prop_assert_eq!(cells.len(), total);
    }

    /// Same seed, same level.
    #[test]
    fn generation_is_deterministic(seed in any::<u64>()) {
        prop_assert_eq!(generate(seed, 40, 40), generate(seed, 40, 40));
    }

    /// The origin is lit at full strength and nothing beyond the radius is.
    #[test]
    fn fov_stays_within_radius(seed in any::<u64>(), radius in 1u32..12) {
        let map = generate(seed, 40, 40);
        let origin = map.player.position;
        let fov = compute_fov(&map.grid, origin, radius);

        prop_assert!((fov.light(origin) - 1.0).abs() < f64::EPSILON);
        for coord in fov.visible_coords() {
            prop_assert!(coord.euclidean(origin) < f64::from(radius));
            let light = fov.light(coord);
            prop_assert!(light > 0.0 && light <= 1.0);
        }
    }

    /// Following the distance map always reaches the goal by shortest steps.
    #[test]
    fn paths_descend_to_goal(seed in any::<u64>()) {
        let map = generate(seed, 40, 40);
        let goal = map.player.position;
        let mut paths = DijkstraMap::from_grid(&map.grid);
        paths.set_goal(goal);
        paths.scan();

        for enemy in &map.enemies {
            let Some(steps) = paths.distance(enemy.position) else {
                continue;
            };
            let path = paths.find_path(enemy.position, usize::MAX);
            prop_assert_eq!(path.len(), steps as usize);
            prop_assert_eq!(path.last().copied().unwrap_or(enemy.position), goal);
            let mut prev = enemy.position;
            for &step in &path {
                prop_assert_eq!(prev.manhattan(step), 1);
                prev = step;
            }
        }
    }
}

#[test]
fn test_fov_wall_blocks_corridor() {
    let grid = TileGrid::from_rows(&[
        "#########",
        "#...#...#",
        "#...#...#",
        "#########",
    ]);
    let fov = compute_fov(&grid, Coord::new(2, 1), 8);
    assert!(fov.is_visible(Coord::new(4, 1)));
    assert!(!fov.is_visible(Coord::new(6, 1)));
}
