use criterion::{black_box, criterion_group, criterion_main, Criterion};
use related_games_engine::{
    catalog::{slugify, Catalog, CatalogSource, StaticSource},
    core::Game,
};

fn create_games(count: usize) -> Vec<Game> {
    (0..count)
        .map(|i| {
            Game::new(format!("game-{}", i), format!("Game {}", i))
                .with_genres(["Action RPG", "Open World"])
                .with_developers([format!("Studio {}", i % 25)])
                .with_platforms(["PC", "Nintendo Switch"])
                .with_rating("8.5")
        })
        .collect()
}

fn bench_catalog_load(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let source = StaticSource::new(create_games(1_000));

    c.bench_function("catalog_from_source_1000", |b| {
        b.to_async(&runtime).iter(|| async {
            black_box(Catalog::from_source(&source as &dyn CatalogSource).await.unwrap())
        });
    });

    let json = serde_json::to_string(&create_games(1_000)).unwrap();
    c.bench_function("catalog_from_json_1000", |b| {
        b.iter(|| black_box(Catalog::from_json(&json).unwrap()));
    });
}

fn bench_browse(c: &mut Criterion) {
    let catalog = Catalog::new(create_games(1_000)).unwrap();

    c.bench_function("games_by_developer_1000", |b| {
        b.iter(|| black_box(catalog.games_by_developer("studio-7")));
    });

    c.bench_function("slugify", |b| {
        b.iter(|| black_box(slugify("Bethesda  Game Studios")));
    });
}

criterion_group!(benches, bench_catalog_load, bench_browse);
criterion_main!(benches);
