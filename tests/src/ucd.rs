use std::collections::HashSet;

use unicode_streaming::StreamingNormalizer;
use unicode_ucd_source::{NormalizationTest, NORMALIZATION_TESTS};

use crate::text;

macro_rules! test {
    ($left: expr, $right: expr, $normalizer: expr, $test: expr, $str: expr) => {
        assert_eq!(
            text(&$left),
            $normalizer.normalize(&text(&$right)),
            stringify!($str),
            $test.line,
            $test.description
        );
    };
}

/// тесты NFC нормализации из UCD
#[test]
fn ucd_test_nfc()
{
    // c2 == toNFC(c1) == toNFC(c2) == toNFC(c3)
    // c4 == toNFC(c4) == toNFC(c5)

    let tests: &Vec<NormalizationTest> = &NORMALIZATION_TESTS;
    let normalizer = StreamingNormalizer::nfc();

    for t in tests {
        test!(t.c2, t.c1, normalizer, t, "{} {}: c2 == toNFC(c1)");
        test!(t.c2, t.c2, normalizer, t, "{} {}: c2 == toNFC(c2)");
        test!(t.c2, t.c3, normalizer, t, "{} {}: c2 == toNFC(c3)");
        test!(t.c4, t.c4, normalizer, t, "{} {}: c4 == toNFC(c4)");
        test!(t.c4, t.c5, normalizer, t, "{} {}: c4 == toNFC(c5)");
    }
}

/// тесты NFD нормализации из UCD
#[test]
fn ucd_test_nfd()
{
    // c3 == toNFD(c1) == toNFD(c2) == toNFD(c3)
    // c5 == toNFD(c4) == toNFD(c5)

    let tests: &Vec<NormalizationTest> = &NORMALIZATION_TESTS;
    let normalizer = StreamingNormalizer::nfd();

    for t in tests {
        test!(t.c3, t.c1, normalizer, t, "{} {}: c3 == toNFD(c1)");
        test!(t.c3, t.c2, normalizer, t, "{} {}: c3 == toNFD(c2)");
        test!(t.c3, t.c3, normalizer, t, "{} {}: c3 == toNFD(c3)");
        test!(t.c5, t.c4, normalizer, t, "{} {}: c5 == toNFD(c4)");
        test!(t.c5, t.c5, normalizer, t, "{} {}: c5 == toNFD(c5)");
    }
}

/// тесты NFKC нормализации из UCD
#[test]
fn ucd_test_nfkc()
{
    // c4 == toNFKC(c1) == toNFKC(c2) == toNFKC(c3) == toNFKC(c4) == toNFKC(c5)

    let tests: &Vec<NormalizationTest> = &NORMALIZATION_TESTS;
    let normalizer = StreamingNormalizer::nfkc();

    for t in tests {
        test!(t.c4, t.c1, normalizer, t, "{} {}: c4 == toNFKC(c1)");
        test!(t.c4, t.c2, normalizer, t, "{} {}: c4 == toNFKC(c2)");
        test!(t.c4, t.c3, normalizer, t, "{} {}: c4 == toNFKC(c3)");
        test!(t.c4, t.c4, normalizer, t, "{} {}: c4 == toNFKC(c4)");
        test!(t.c4, t.c5, normalizer, t, "{} {}: c4 == toNFKC(c5)");
    }
}

/// тесты NFKD нормализации из UCD
#[test]
fn ucd_test_nfkd()
{
    // c5 == toNFKD(c1) == toNFKD(c2) == toNFKD(c3) == toNFKD(c4) == toNFKD(c5)

    let tests: &Vec<NormalizationTest> = &NORMALIZATION_TESTS;
    let normalizer = StreamingNormalizer::nfkd();

    for t in tests {
        test!(t.c5, t.c1, normalizer, t, "{} {}: c5 == toNFKD(c1)");
        test!(t.c5, t.c2, normalizer, t, "{} {}: c5 == toNFKD(c2)");
        test!(t.c5, t.c3, normalizer, t, "{} {}: c5 == toNFKD(c3)");
        test!(t.c5, t.c4, normalizer, t, "{} {}: c5 == toNFKD(c4)");
        test!(t.c5, t.c5, normalizer, t, "{} {}: c5 == toNFKD(c5)");
    }
}

/// кодпоинты, не перечисленные в @Part1, нормализуются сами в себя во всех
/// четырёх формах; проверяется через кодпоинтный API, чтобы покрыть суррогаты
#[test]
fn ucd_test_unlisted_codepoints_stability()
{
    let listed: HashSet<u32> = NORMALIZATION_TESTS
        .iter()
        .filter(|t| t.part.starts_with("@Part1"))
        .map(|t| t.c1[0])
        .collect();

    let normalizers = [
        StreamingNormalizer::nfc(),
        StreamingNormalizer::nfd(),
        StreamingNormalizer::nfkc(),
        StreamingNormalizer::nfkd(),
    ];

    for code in 0 ..= 0x10FFFF_u32 {
        if listed.contains(&code) {
            continue;
        }

        let input = [code];

        for normalizer in normalizers.iter() {
            assert_eq!(normalizer.normalize_codepoints(&input), input, "U+{:04X}", code);
        }
    }
}
