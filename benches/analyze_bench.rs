use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tagscope::algo::analyze::TagCorpusAnalyzer;
use tagscope::algo::corpus::{ItemRecord, TagCorpus};
use tagscope::algo::{cooccur, hierarchy, similar};

/// Generate synthetic tagged items for benchmarking.
fn generate_items(n: usize) -> Vec<ItemRecord> {
    let stems = [
        "rust", "python", "javascript", "go", "java", "database", "devops", "security", "cloud",
        "mobile",
    ];
    (0..n)
        .map(|i| {
            let stem = stems[i % stems.len()];
            let mut tags = vec![stem.to_string(), format!("{stem}-topic-{}", i % 40)];
            if i % 7 == 0 {
                tags.push(format!("one-off-tag-{i}"));
            }
            if i % 11 == 0 {
                tags.clear(); // keep an uncategorized share in the mix
            }
            ItemRecord {
                title: format!("Item {i} about {stem}"),
                description: format!("Synthetic description for {stem} content, entry {i}"),
                tags,
            }
        })
        .collect()
}

fn bench_corpus_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("corpus_build");
    for size in [100, 1000, 5000] {
        let items = generate_items(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| black_box(TagCorpus::from_items(items)))
        });
    }
    group.finish();
}

fn bench_pairwise_scans(c: &mut Criterion) {
    // The similarity and hierarchy passes are quadratic in distinct tags;
    // 5000 items here yield a few hundred distinct tags.
    let items = generate_items(5000);
    let corpus = TagCorpus::from_items(&items);

    c.bench_function("similar/5000_items", |b| {
        b.iter(|| black_box(similar::find_similar(&corpus)))
    });
    c.bench_function("hierarchy/5000_items", |b| {
        b.iter(|| black_box(hierarchy::detect_hierarchies(&corpus)))
    });
    c.bench_function("cooccur/5000_items", |b| {
        b.iter(|| black_box(cooccur::find_cooccurrences(&items, &corpus)))
    });
}

fn bench_full_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    for size in [100, 1000] {
        let items = generate_items(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| {
                let analyzer = TagCorpusAnalyzer::new(items.clone());
                black_box(analyzer.analyze())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_corpus_build,
    bench_pairwise_scans,
    bench_full_analysis
);
criterion_main!(benches);
