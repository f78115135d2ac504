use crate::quick_checks::fill_quick_checks;
use crate::UNICODE;

/// флаги быстрых проверок; у форм декомпозиции статуса Maybe не бывает
pub const NFC_QC_NO: u8 = 0b_000001;
pub const NFC_QC_MAYBE: u8 = 0b_000010;
pub const NFKC_QC_NO: u8 = 0b_000100;
pub const NFKC_QC_MAYBE: u8 = 0b_001000;
pub const NFD_QC_NO: u8 = 0b_010000;
pub const NFKD_QC_NO: u8 = 0b_100000;

/// свойства кодпоинта, используемые нормализацией, упакованные в два байта
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodepointProperties
{
    /// класс канонического комбинирования
    pub combining: u8,
    /// битовая маска флагов быстрых проверок
    pub quick_check: u8,
}

/// размер таблицы - все кодпоинты Unicode
const TABLE_SIZE: usize = 0x110000;

lazy_static! {
    /// свойства кодпоинтов одним плоским массивом
    pub static ref PROPERTIES: Vec<CodepointProperties> = properties_table();
}

fn properties_table() -> Vec<CodepointProperties>
{
    let mut table = vec![CodepointProperties::default(); TABLE_SIZE];

    for codepoint in UNICODE.values() {
        table[codepoint.code as usize].combining = codepoint.ccc;
    }

    fill_quick_checks(&mut table);

    table
}

/// свойства кодпоинта; за пределами таблицы - стартер со статусом Yes
#[inline]
pub fn properties(code: u32) -> CodepointProperties
{
    match PROPERTIES.get(code as usize) {
        Some(&properties) => properties,
        None => CodepointProperties::default(),
    }
}

/// класс канонического комбинирования кодпоинта
#[inline]
pub fn combining(code: u32) -> u8
{
    properties(code).combining
}

/// флаги быстрых проверок кодпоинта
#[inline]
pub fn quick_check(code: u32) -> u8
{
    properties(code).quick_check
}
