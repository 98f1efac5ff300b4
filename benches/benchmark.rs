// Performance benchmarks for engine construction and recommendation
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use zapgenius::prelude::*;

const APPS: [&str; 12] = [
    "Slack", "Gmail", "Google Drive", "Google Sheets", "Trello", "Jira",
    "HubSpot", "GitHub", "Typeform", "Mailchimp", "Calendar", "LinkedIn",
];

const ACTIONS: [&str; 6] = ["Send", "Save", "Create", "Sync", "Post", "Archive"];

fn generate_catalog(size: usize) -> Catalog {
    let templates = (0..size)
        .map(|i| {
            let from = APPS[i % APPS.len()];
            let to = APPS[(i * 7 + 3) % APPS.len()];
            let action = ACTIONS[i % ACTIONS.len()];
            Template::new(format!("{action} {from} items to {to} batch {i}"))
                .with_apps([from, to])
        })
        .collect();
    Catalog::new(templates)
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [100, 1000, 5000].iter() {
        let catalog = generate_catalog(*size);
        group.bench_with_input(BenchmarkId::new("engine", size), &catalog, |b, catalog| {
            b.iter(|| RankingEngine::new(TfIdfVectorizer::new(), black_box(catalog.clone())).unwrap());
        });
    }

    group.finish();
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    for size in [100, 1000, 5000].iter() {
        let engine = RankingEngine::new(TfIdfVectorizer::new(), generate_catalog(*size)).unwrap();
        group.bench_with_input(BenchmarkId::new("top10", size), &engine, |b, engine| {
            b.iter(|| {
                engine
                    .recommend(black_box("save gmail attachments to google drive"), 10)
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_recommend);
criterion_main!(benches);
