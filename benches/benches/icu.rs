use benches::group;
use criterion::{criterion_group, criterion_main, Criterion};
use icu_normalizer::{ComposingNormalizer, DecomposingNormalizer};

group!("./../test_data/texts", nfc, "nfc", "icu", ComposingNormalizer::new_nfc());

group!("./../test_data/texts", nfd, "nfd", "icu", DecomposingNormalizer::new_nfd());

group!(
    "./../test_data/texts_decomposed",
    dec,
    "dec",
    "icu",
    ComposingNormalizer::new_nfc()
);

criterion_group!(benches, nfc, nfd, dec);
criterion_main!(benches);
