/// заменяющий символ для некорректных последовательностей
pub const REPLACEMENT: u32 = 0xFFFD;

/// маска, использующаяся для получения битов значения первого байта UTF-8
const FIRST_BYTE_VALUE_MASK: u8 = 0x7F;
/// маска, исключающая 2 старших бита в 2, 3, 4 байтах последовательности UTF-8
const CONT_MASK: u8 = 0x3F;

/// количество байт последовательности UTF-8 по первому байту; 0 - байт не
/// может начинать последовательность
#[inline(always)]
fn sequence_width(first: u8) -> usize
{
    match first {
        0 ..= 0x7F => 1,
        0xC2 ..= 0xDF => 2,
        0xE0 ..= 0xEF => 3,
        0xF0 ..= 0xF4 => 4,
        _ => 0,
    }
}

/// убираем старшие биты первого байта UTF-8 последовательности
#[inline(always)]
fn utf8_first_byte(byte: u8, width: u32) -> u32
{
    (byte & (FIRST_BYTE_VALUE_MASK >> width)) as u32
}

/// убираем 2 старших бита у следующего байта и комбинируем с предыдущим значением
#[inline(always)]
fn utf8_acc_cont_byte(code: u32, byte: u8) -> u32
{
    (code << 6) | (byte & CONT_MASK) as u32
}

/// прочитать кодпоинт по байтовому индексу и сдвинуть индекс. вход может быть
/// некорректным: обрезанная, перекодированная длинная или суррогатная
/// последовательность даёт U+FFFD и сдвиг на один байт
pub fn decode_codepoint(bytes: &[u8], pos: &mut usize) -> u32
{
    let first = bytes[*pos];
    let width = sequence_width(first);

    if width == 1 {
        *pos += 1;

        return first as u32;
    }

    if width == 0 || *pos + width > bytes.len() {
        *pos += 1;

        return REPLACEMENT;
    }

    let mut code = utf8_first_byte(first, width as u32);

    for offset in 1 .. width {
        let byte = bytes[*pos + offset];

        if byte & 0xC0 != 0x80 {
            *pos += 1;

            return REPLACEMENT;
        }

        code = utf8_acc_cont_byte(code, byte);
    }

    let valid = match width {
        2 => code >= 0x80,
        3 => code >= 0x800 && !(0xD800 ..= 0xDFFF).contains(&code),
        _ => (0x10000 ..= 0x10FFFF).contains(&code),
    };

    if !valid {
        *pos += 1;

        return REPLACEMENT;
    }

    *pos += width;

    code
}
