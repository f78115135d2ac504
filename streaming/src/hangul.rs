use crate::buffer::CodepointBuffer;
use crate::codepoint::Codepoint;

// слоги хангыль (U+AC00..=U+D7A3) не имеют табличной декомпозиции: слог
// раскладывается на чамо L + V (+ T) и собирается обратно арифметикой

/// начало блока слогов хангыль
const S_BASE: u32 = 0xAC00;
/// начало блока ведущих согласных чамо
const L_BASE: u32 = 0x1100;
/// начало блока гласных чамо
const V_BASE: u32 = 0x1161;
/// блок завершающих согласных минус один: T-индекс 0 означает слог LV
const T_BASE: u32 = 0x11A7;
/// количество ведущих согласных
const L_COUNT: u32 = 19;
/// количество гласных
const V_COUNT: u32 = 21;
/// количество кодпоинтов на блок LV
const T_COUNT: u32 = 28;
/// количество гласных * количество кодпоинтов на блок LV
const N_COUNT: u32 = V_COUNT * T_COUNT;
/// количество слогов хангыль в Unicode
const S_COUNT: u32 = L_COUNT * N_COUNT;

/// кодпоинт - слог хангыль?
#[inline(always)]
pub fn is_hangul_syllable(code: u32) -> bool
{
    code.wrapping_sub(S_BASE) < S_COUNT
}

/// алгоритмическая декомпозиция слога хангыль: L + V или L + V + T.
/// вызывается только для слогов, все чамо - стартеры
#[inline(always)]
pub fn decompose_hangul_syllable(code: u32, buffer: &mut CodepointBuffer)
{
    let si = code - S_BASE;

    buffer.push(Codepoint::from_code(L_BASE + si / N_COUNT));
    buffer.push(Codepoint::from_code(V_BASE + (si % N_COUNT) / T_COUNT));

    let t = T_BASE + si % T_COUNT;

    if t != T_BASE {
        buffer.push(Codepoint::from_code(t));
    }
}

/// алгоритмическая композиция пары кодпоинтов хангыль: L + V или LV + T
#[inline(always)]
pub fn compose_hangul(first: u32, second: u32) -> Option<u32>
{
    let l = first.wrapping_sub(L_BASE);
    let v = second.wrapping_sub(V_BASE);

    if l < L_COUNT && v < V_COUNT {
        return Some(S_BASE + (l * V_COUNT + v) * T_COUNT);
    }

    let lv = first.wrapping_sub(S_BASE);
    let t = second.wrapping_sub(T_BASE);

    if lv < S_COUNT && lv % T_COUNT == 0 && t > 0 && t < T_COUNT {
        return Some(first + t);
    }

    None
}
