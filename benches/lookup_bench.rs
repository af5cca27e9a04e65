use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use wordplay::lexicon::{find_emordnilaps, LengthPresence};
use wordplay::{binary_search, AnalysisConfig, Analyzer, SignatureIndex, WordStore};

/// Sorted synthetic dictionary of distinct six-letter words
fn synthetic_dictionary(count: usize) -> Vec<String> {
    let mut words: Vec<String> = (0..count)
        .map(|mut n| {
            let mut word = String::with_capacity(6);
            for _ in 0..6 {
                word.push((b'a' + (n % 26) as u8) as char);
                n /= 26;
            }
            word
        })
        .collect();
    words.sort();
    words
}

fn bench_binary_search(c: &mut Criterion) {
    let words = synthetic_dictionary(200_000);
    let probes: Vec<&String> = words.iter().step_by(997).collect();

    let mut group = c.benchmark_group("binary_search");
    group.throughput(Throughput::Elements(probes.len() as u64));
    group.bench_function("hits", |b| {
        b.iter(|| {
            for probe in &probes {
                black_box(binary_search(probe, words.as_slice()));
            }
        })
    });
    group.finish();
}

fn bench_signature_index(c: &mut Criterion) {
    let store = WordStore::from_words(synthetic_dictionary(100_000), 100_000).unwrap();
    let lengths: LengthPresence = [6usize].into_iter().collect();

    let mut group = c.benchmark_group("signature_index");
    group.sample_size(10); // WHY: heap sort of 100k candidates per iteration
    group.bench_function("build", |b| {
        b.iter(|| black_box(SignatureIndex::build(&store, &lengths)))
    });
    group.finish();
}

fn bench_emordnilaps(c: &mut Criterion) {
    let store = WordStore::from_words(synthetic_dictionary(100_000), 100_000).unwrap();

    let mut group = c.benchmark_group("emordnilaps");
    group.sample_size(10);
    group.bench_function("scan", |b| b.iter(|| black_box(find_emordnilaps(&store, 10))));
    group.finish();
}

fn bench_full_analysis(c: &mut Criterion) {
    let dictionary = synthetic_dictionary(50_000);
    let sample: Vec<String> = dictionary
        .iter()
        .step_by(7)
        .map(|w| w.to_uppercase())
        .collect();
    let analyzer = Analyzer::new(AnalysisConfig::default());

    let mut group = c.benchmark_group("analysis");
    group.sample_size(10);
    group.bench_function("run", |b| {
        b.iter(|| black_box(analyzer.run(dictionary.clone(), &sample).unwrap()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_binary_search,
    bench_signature_index,
    bench_emordnilaps,
    bench_full_analysis
);
criterion_main!(benches);
