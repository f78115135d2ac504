use std::collections::HashMap;

use crate::UNICODE;

lazy_static! {
    /// исключения композиции
    pub static ref COMPOSITION_EXCLUSIONS: Vec<u32> = composition_exclusions();

    /// первичные композиты по парам кодпоинтов
    static ref COMPOSITION_PAIRS: HashMap<u64, u32> = pairs();
}

const DATA: &str = include_str!("./../data/ucd/14.0.0/CompositionExclusions.txt");

/// разбор CompositionExclusions.txt из UCD
/// исключения композиции не могут быть вычислены, этот список составляется
/// консорциумом Unicode в ручном режиме
fn composition_exclusions() -> Vec<u32>
{
    let mut exclusions = vec![];

    for line in DATA.lines() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (code, _) = line.split_once('#').unwrap();
        let code = u32::from_str_radix(code.trim(), 16).unwrap();

        exclusions.push(code);
    }

    exclusions
}

/// является ли кодпоинт исключением композиции?
pub fn is_composition_exclusion(code: u32) -> bool
{
    COMPOSITION_EXCLUSIONS.contains(&code)
}

/// хешмап пар для композиции: канонические декомпозиции из двух кодпоинтов,
/// за вычетом исключений. слоги хангыль комбинируются алгоритмически и в
/// таблице отсутствуют
fn pairs() -> HashMap<u64, u32>
{
    let mut map: HashMap<u64, u32> = HashMap::new();

    for codepoint in UNICODE.values() {
        if codepoint.decomposition.len() != 2 || codepoint.is_compat {
            continue;
        }

        if COMPOSITION_EXCLUSIONS.contains(&codepoint.code) {
            continue;
        }

        // композиты-нестартеры и декомпозиции, начинающиеся с нестартера,
        // исключаются по определению первичного композита
        if codepoint.is_nonstarter() {
            continue;
        }

        let first = codepoint.decomposition[0];

        let first_is_starter = match UNICODE.get(&first) {
            Some(codepoint) => codepoint.is_starter(),
            None => true,
        };

        if !first_is_starter {
            continue;
        }

        map.insert(pair_key(first, codepoint.decomposition[1]), codepoint.code);
    }

    map
}

#[inline]
fn pair_key(first: u32, second: u32) -> u64
{
    (first as u64) << 32 | second as u64
}

/// первичный композит пары кодпоинтов, если он существует
#[inline]
pub fn composition(first: u32, second: u32) -> Option<u32>
{
    COMPOSITION_PAIRS.get(&pair_key(first, second)).copied()
}
