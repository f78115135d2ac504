use icu_normalizer::{ComposingNormalizer, DecomposingNormalizer};
use unicode_streaming::StreamingNormalizer;
use unicode_ucd_source::NORMALIZATION_TESTS;

use crate::text;

/// сравниваем с результатами нормализации ICU
#[test]
fn icu_texts()
{
    let nfc = StreamingNormalizer::nfc();
    let nfd = StreamingNormalizer::nfd();
    let nfkc = StreamingNormalizer::nfkc();
    let nfkd = StreamingNormalizer::nfkd();

    let icu_nfc = ComposingNormalizer::new_nfc();
    let icu_nfd = DecomposingNormalizer::new_nfd();
    let icu_nfkc = ComposingNormalizer::new_nfkc();
    let icu_nfkd = DecomposingNormalizer::new_nfkd();

    for data in crate::data::files() {
        let source = data.1.as_str();

        assert_eq!(nfc.normalize(source), icu_nfc.normalize(source), "nfc - {}", data.0);
        assert_eq!(nfd.normalize(source), icu_nfd.normalize(source), "nfd - {}", data.0);
        assert_eq!(nfkc.normalize(source), icu_nfkc.normalize(source), "nfkc - {}", data.0);
        assert_eq!(nfkd.normalize(source), icu_nfkd.normalize(source), "nfkd - {}", data.0);
    }
}

/// исходные колонки тестов UCD против ICU
#[test]
fn icu_ucd_sources()
{
    let nfc = StreamingNormalizer::nfc();
    let nfd = StreamingNormalizer::nfd();

    let icu_nfc = ComposingNormalizer::new_nfc();
    let icu_nfd = DecomposingNormalizer::new_nfd();

    for t in NORMALIZATION_TESTS.iter() {
        let source = text(&t.c1);

        assert_eq!(
            nfc.normalize(&source),
            icu_nfc.normalize(&source),
            "nfc, {} {}",
            t.line,
            t.description
        );
        assert_eq!(
            nfd.normalize(&source),
            icu_nfd.normalize(&source),
            "nfd, {} {}",
            t.line,
            t.description
        );
    }
}
