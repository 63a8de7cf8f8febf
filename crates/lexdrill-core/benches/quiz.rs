use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lexdrill_core::quiz::{is_playable, QuizEngine};
use lexdrill_core::statistics::{list_stats, mastery_breakdown};
use lexdrill_core::store::WordStore;

fn make_store(words: usize) -> WordStore {
    let mut store = WordStore::new();
    for i in 0..words {
        let meanings = [format!("meaning-{i}"), format!("alt-{i}")];
        store
            .add_word(&format!("word-{i}"), &meanings, "Bench")
            .expect("unique bench word");
        store
            .record_answer(&format!("word-{i}"), i % 3 != 0)
            .expect("word just added");
    }
    store
}

fn bench_generate_item(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_item");

    for size in [4, 100, 1000] {
        let store = make_store(size);
        let mut engine = QuizEngine::seeded(42);
        group.bench_function(format!("words={size}"), |b| {
            b.iter(|| {
                engine
                    .generate_item(black_box(&store), black_box("Bench"))
                    .map(|item| item.correct_slot)
            })
        });
    }

    group.finish();
}

fn bench_is_playable(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_playable");
    let store = make_store(1000);

    group.bench_function("playable", |b| {
        b.iter(|| is_playable(black_box(&store), black_box("Bench")))
    });

    group.bench_function("missing_list", |b| {
        b.iter(|| is_playable(black_box(&store), black_box("Missing")))
    });

    group.finish();
}

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");
    let store = make_store(1000);

    group.bench_function("list_stats", |b| {
        b.iter(|| list_stats(black_box(&store), black_box("Bench")))
    });

    group.bench_function("mastery_breakdown", |b| {
        b.iter(|| mastery_breakdown(black_box(&store), black_box(Some("Bench"))))
    });

    group.finish();
}

criterion_group!(benches, bench_generate_item, bench_is_playable, bench_statistics);
criterion_main!(benches);
