#[macro_use]
extern crate lazy_static;

mod compositions;
mod decompositions;
mod properties;
mod quick_checks;
mod unicode;

pub use unicode::Codepoint;
pub use unicode::PropertiesError;
pub use unicode::UNICODE;

pub use properties::combining;
pub use properties::properties;
pub use properties::quick_check;
pub use properties::CodepointProperties;
pub use properties::PROPERTIES;

pub use properties::NFC_QC_MAYBE;
pub use properties::NFC_QC_NO;
pub use properties::NFD_QC_NO;
pub use properties::NFKC_QC_MAYBE;
pub use properties::NFKC_QC_NO;
pub use properties::NFKD_QC_NO;

pub use decompositions::canonical_decomposition;
pub use decompositions::decomposition;

pub use compositions::composition;
pub use compositions::is_composition_exclusion;
pub use compositions::COMPOSITION_EXCLUSIONS;

pub use normalization_tests::NormalizationTest;
pub use normalization_tests::NORMALIZATION_TESTS;
