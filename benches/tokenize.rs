use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput};
use wordpiece::{TokenizerConfig, Vocabulary, WordPiece};

fn build_vocabulary() -> Vocabulary {
    let mut tokens: Vec<String> = vec!["[UNK]".to_owned()];
    for word in [
        "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "penguin", "flight",
        "token", "piece", "word", ",", ".", "!", "?",
    ] {
        tokens.push(word.to_owned());
    }
    for suffix in ["s", "ed", "ing", "less", "er", "iz", "ation"] {
        tokens.push(format!("##{suffix}"));
    }
    Vocabulary::from_tokens(tokens)
}

fn build_text() -> String {
    // Mix of direct hits, continuation splits, and out-of-vocabulary words.
    let sentence = "The quick brown fox jumps over the lazy dog, flightless penguins watch. \
                    Tokens, pieces and words! Zugzwang? ";
    sentence.repeat(256)
}

fn bench_tokenize(c: &mut Criterion) {
    let vocab = build_vocabulary();
    let text = build_text();
    let tokenizer = WordPiece::new(vocab, TokenizerConfig::default()).expect("configuration");

    let mut group = c.benchmark_group("tokenize_text");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.sampling_mode(SamplingMode::Flat);
    group.bench_function(BenchmarkId::from_parameter("KiB_27"), |b| {
        b.iter(|| {
            let tokens = tokenizer.tokenize(black_box(&text));
            let _ = black_box(tokens);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
