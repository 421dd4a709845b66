use criterion::{black_box, criterion_group, criterion_main, Criterion};
use simple_roguelike::core::{GameConfig, GameRng, PlayerAction};
use simple_roguelike::fov::compute_fov;
use simple_roguelike::game::GameController;
use simple_roguelike::map::MapGenerator;
use simple_roguelike::pathfinding::DijkstraMap;

fn bench_generation(c: &mut Criterion) {
    let generator = MapGenerator::new();
    let mut group = c.benchmark_group("Generation");

    group.bench_function("generate_map 50x50", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let mut rng = GameRng::new(seed);
            black_box(generator.generate_map(50, 50, 20, 10, &mut rng))
        });
    });

    group.finish();
}

fn bench_sight_and_paths(c: &mut Criterion) {
    let mut rng = GameRng::new(42);
    let map = MapGenerator::new()
        .generate_map(50, 50, 20, 10, &mut rng)
        .expect("default level generates");
    let origin = map.player.position;

    let mut group = c.benchmark_group("Per-turn");

    group.bench_function("compute_fov r=8", |b| {
        b.iter(|| black_box(compute_fov(&map.grid, origin, 8)));
    });

    group.bench_function("dijkstra scan", |b| {
        b.iter(|| {
            let mut paths = DijkstraMap::from_grid(&map.grid);
            paths.set_goal(origin);
            paths.scan();
            black_box(paths)
        });
    });

    group.bench_function("full turn", |b| {
        let game = GameController::new(GameConfig::default().with_seed(42))
            .expect("default config is valid");
        b.iter(|| {
            let mut game = game.clone();
            black_box(game.handle_action(PlayerAction::Wait))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_generation, bench_sight_and_paths);
criterion_main!(benches);
