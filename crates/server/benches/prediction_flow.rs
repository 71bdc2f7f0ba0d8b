//! Benchmarks for the prediction chain
//!
//! Run with: cargo bench --package server
//!
//! This benchmarks a full recommend call (validation, primary prediction,
//! and every enrichment step) over an in-memory artifact store.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use artifact_store::{ArtifactRole, ArtifactStore};
use models::{columns, Artifact, Encoder, OutputRow, Predictor};
use server::PredictionOrchestrator;

fn build_store() -> Arc<ArtifactStore> {
    let heroes: Vec<String> = (0..500).map(|i| format!("Hero {}", i)).collect();
    let genres: Vec<String> = (0..50).map(|i| format!("Genre {}", i)).collect();
    let titles: Vec<String> = (0..500).map(|i| format!("Movie {}", i)).collect();

    let mut store = ArtifactStore::empty();
    store.insert(
        ArtifactRole::HeroEncoder,
        Artifact::Encoder(Encoder::fit(columns::HERO_NAME, heroes.iter())),
    );
    store.insert(
        ArtifactRole::HeroPredictor,
        Artifact::Predictor(Predictor::from_rows(
            titles.iter().map(|t| OutputRow::Text(t.clone())).collect(),
        )),
    );
    store.insert(
        ArtifactRole::GenreEncoder,
        Artifact::Encoder(Encoder::fit(columns::GENRES, genres.iter())),
    );
    store.insert(
        ArtifactRole::GenrePredictor,
        Artifact::Predictor(Predictor::from_rows(
            titles
                .iter()
                .take(50)
                .map(|t| OutputRow::Text(t.clone()))
                .collect(),
        )),
    );
    store.insert(
        ArtifactRole::TitleEncoder,
        Artifact::Encoder(Encoder::fit(columns::TITLE, titles.iter())),
    );
    store.insert(
        ArtifactRole::TitlePredictor,
        Artifact::Predictor(Predictor::from_rows(
            (0..500)
                .map(|i| OutputRow::Triple(i as f64 * 1e6, i as f64 * 3e6, i as f64))
                .collect(),
        )),
    );
    store.insert(
        ArtifactRole::RuntimePredictor,
        Artifact::Predictor(Predictor::from_rows(
            (0..500).map(|i| OutputRow::Scalar(90.0 + i as f64 % 60.0)).collect(),
        )),
    );
    store.insert(
        ArtifactRole::HeroFromTitlePredictor,
        Artifact::Predictor(Predictor::from_rows(
            heroes.iter().map(|h| OutputRow::Text(h.clone())).collect(),
        )),
    );

    Arc::new(store)
}

fn bench_hero_recommend(c: &mut Criterion) {
    let orchestrator = PredictionOrchestrator::new(build_store());

    c.bench_function("recommend_hero", |b| {
        b.iter(|| {
            let recommendation =
                orchestrator.recommend(black_box("Hero"), black_box("Hero 42"));
            black_box(recommendation)
        })
    });
}

fn bench_genre_recommend(c: &mut Criterion) {
    let orchestrator = PredictionOrchestrator::new(build_store());

    c.bench_function("recommend_genre", |b| {
        b.iter(|| {
            let recommendation =
                orchestrator.recommend(black_box("Genre"), black_box("Genre 7"));
            black_box(recommendation)
        })
    });
}

criterion_group!(benches, bench_hero_recommend, bench_genre_recommend);
criterion_main!(benches);
