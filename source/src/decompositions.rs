use std::collections::HashMap;

use crate::UNICODE;

// полная декомпозиция разворачивается потребителем через стек, поэтому таблицы
// хранят одноуровневые отображения как они записаны в UnicodeData.txt

lazy_static! {
    /// одноуровневые канонические декомпозиции
    static ref CANONICAL_DECOMPOSITIONS: HashMap<u32, Vec<u32>> = canonical();

    /// одноуровневые декомпозиции совместимости (включая канонические)
    static ref COMPAT_DECOMPOSITIONS: HashMap<u32, Vec<u32>> = compat();
}

fn canonical() -> HashMap<u32, Vec<u32>>
{
    UNICODE
        .values()
        .filter(|codepoint| !codepoint.decomposition.is_empty() && !codepoint.is_compat)
        .map(|codepoint| (codepoint.code, codepoint.decomposition.clone()))
        .collect()
}

fn compat() -> HashMap<u32, Vec<u32>>
{
    UNICODE
        .values()
        .filter(|codepoint| !codepoint.decomposition.is_empty())
        .map(|codepoint| (codepoint.code, codepoint.decomposition.clone()))
        .collect()
}

/// одноуровневая каноническая декомпозиция кодпоинта; пустой слайс - декомпозиции нет
#[inline]
pub fn canonical_decomposition(code: u32) -> &'static [u32]
{
    match CANONICAL_DECOMPOSITIONS.get(&code) {
        Some(codes) => codes,
        None => &[],
    }
}

/// одноуровневая декомпозиция совместимости кодпоинта; пустой слайс - декомпозиции нет
#[inline]
pub fn decomposition(code: u32) -> &'static [u32]
{
    match COMPAT_DECOMPOSITIONS.get(&code) {
        Some(codes) => codes,
        None => &[],
    }
}
