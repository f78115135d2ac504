use unicode_ucd_source as ucd;

use crate::buffer::CodepointBuffer;
use crate::codepoint::Codepoint;
use crate::hangul;

/// вид декомпозиции
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompositionKind
{
    /// каноническая (NFD, NFC)
    Canonical,
    /// совместимости (NFKD, NFKC)
    Compatibility,
}

impl DecompositionKind
{
    /// одноуровневая табличная декомпозиция кодпоинта
    #[inline(always)]
    fn mapping(&self, code: u32) -> &'static [u32]
    {
        match self {
            Self::Canonical => ucd::canonical_decomposition(code),
            Self::Compatibility => ucd::decomposition(code),
        }
    }
}

/// полная декомпозиция одного кодпоинта в буфер вызывающего, без аллокаций.
/// элементы табличной декомпозиции могут сами иметь декомпозицию, поэтому
/// разворачиваем через рабочий стек; записанные со стека листья идут в
/// обратном порядке, в конце буфер переворачивается
pub fn decompose_into(code: u32, kind: DecompositionKind, buffer: &mut CodepointBuffer)
{
    debug_assert!(buffer.is_empty());

    if hangul::is_hangul_syllable(code) {
        hangul::decompose_hangul_syllable(code, buffer);
        return;
    }

    let mut stack = CodepointBuffer::new();

    stack.push(Codepoint::from_code(code));

    while let Some(entry) = stack.pop() {
        let mapping = kind.mapping(entry.code());

        match mapping.is_empty() {
            // лист - табличной декомпозиции нет, кодпоинт попадает в результат
            true => {
                let code = entry.code();
                buffer.push(Codepoint::from_code_and_ccc(code, ucd::combining(code)));
            }
            false => {
                for &code in mapping {
                    stack.push(Codepoint::from_code(code));
                }
            }
        }
    }

    buffer.reverse();
}
