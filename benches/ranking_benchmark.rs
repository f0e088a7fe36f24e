use criterion::{black_box, criterion_group, criterion_main, Criterion};
use report_match_engine::{
    find_match_candidates, CandidateDocument, MatchEngine, MatchOptions, ScorerKind,
};

fn create_test_candidates(count: usize) -> Vec<CandidateDocument> {
    (0..count)
        .map(|i| {
            let doc = CandidateDocument::new(i.to_string(), format!("Student Essay {} (final).docx", i));
            if i % 2 == 0 {
                doc.with_normalized(format!("student essay {} (final)", i))
            } else {
                doc
            }
        })
        .collect()
}

fn create_test_reports(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("Student Essay {} (final) (1).pdf", i * 3))
        .collect()
}

fn bench_ranking(c: &mut Criterion) {
    let candidates_10 = create_test_candidates(10);
    let candidates_100 = create_test_candidates(100);
    let candidates_1000 = create_test_candidates(1000);

    c.bench_function("rank_10", |b| {
        b.iter(|| black_box(find_match_candidates("student essay 5.pdf", &candidates_10, 60)));
    });

    c.bench_function("rank_100", |b| {
        b.iter(|| black_box(find_match_candidates("student essay 50.pdf", &candidates_100, 60)));
    });

    c.bench_function("rank_1000", |b| {
        b.iter(|| black_box(find_match_candidates("student essay 500.pdf", &candidates_1000, 60)));
    });
}

fn bench_preview(c: &mut Criterion) {
    let candidates = create_test_candidates(200);
    let reports = create_test_reports(50);

    let native = MatchEngine::new();
    let fallback = MatchEngine::with_options(MatchOptions {
        scorer: ScorerKind::Rapidfuzz,
        ..MatchOptions::default()
    })
    .unwrap();

    c.bench_function("preview_50x200_levenshtein", |b| {
        b.iter(|| black_box(native.preview_matches(&reports, &candidates)));
    });

    c.bench_function("preview_50x200_rapidfuzz", |b| {
        b.iter(|| black_box(fallback.preview_matches(&reports, &candidates)));
    });

    c.bench_function("preview_50x200_parallel", |b| {
        b.iter(|| black_box(native.preview_matches_par(&reports, &candidates)));
    });
}

criterion_group!(benches, bench_ranking, bench_preview);
criterion_main!(benches);
