use unicode_ucd_source as ucd;

use crate::buffer::CodepointBuffer;
use crate::codepoint::Codepoint;
use crate::codepoint::CGJ;
use crate::composition::canonic_sort;
use crate::composition::canonical_composition;
use crate::decomposition::decompose_into;
use crate::decomposition::DecompositionKind;
use crate::quick_check::is_allowed;
use crate::quick_check::QcStatus;

/// форма нормализации Unicode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationForm
{
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

impl NormalizationForm
{
    /// вид декомпозиции формы
    #[inline(always)]
    pub(crate) fn decomposition_kind(&self) -> DecompositionKind
    {
        match self {
            Self::Nfc | Self::Nfd => DecompositionKind::Canonical,
            Self::Nfkc | Self::Nfkd => DecompositionKind::Compatibility,
        }
    }

    /// форма выполняет композицию?
    #[inline(always)]
    pub(crate) fn composes(&self) -> bool
    {
        matches!(self, Self::Nfc | Self::Nfkc)
    }
}

/// ленивый нормализующий итератор. окно нормализации - буфер фиксированной
/// ёмкости: сброс происходит на безопасной границе (стартер со статусом Yes),
/// а при её отсутствии - когда в буфере остаётся один свободный слот, так что
/// память не зависит от длины входа
pub struct Normalized<I>
where
    I: Iterator<Item = u32>,
{
    iter: core::iter::Fuse<I>,
    form: NormalizationForm,
    /// декомпозиция текущего кодпоинта входа
    dcp: CodepointBuffer,
    dcp_pos: usize,
    /// окно нормализации; после сброса выдаётся в выход
    out: CodepointBuffer,
    emit_pos: usize,
    emitting: bool,
    /// сброс произошёл внутри последовательности нестартеров: следующее окно
    /// начинается с U+034F, чтобы при повторной нормализации кодпоинты не
    /// переупорядочивались через границу сброса
    cgj_pending: bool,
    /// CCC последнего кодпоинта, попавшего в окно
    last_ccc: u8,
}

impl<I> Normalized<I>
where
    I: Iterator<Item = u32>,
{
    pub(crate) fn new(iter: I, form: NormalizationForm) -> Self
    {
        Self {
            iter: iter.fuse(),
            form,
            dcp: CodepointBuffer::new(),
            dcp_pos: 0,
            out: CodepointBuffer::new(),
            emit_pos: 0,
            emitting: false,
            cgj_pending: false,
            last_ccc: 0,
        }
    }

    /// завершить окно: переупорядочить, для композитных форм - скомбинировать,
    /// перевести буфер в режим выдачи
    fn flush(&mut self)
    {
        canonic_sort(&mut self.out);

        if self.form.composes() {
            canonical_composition(&mut self.out);
        }

        self.emitting = true;
        self.emit_pos = 0;
    }
}

impl<I> Iterator for Normalized<I>
where
    I: Iterator<Item = u32>,
{
    type Item = u32;

    fn next(&mut self) -> Option<u32>
    {
        loop {
            // выдача завершённого окна
            if self.emitting {
                if self.emit_pos < self.out.len() {
                    let code = self.out[self.emit_pos].code();
                    self.emit_pos += 1;

                    return Some(code);
                }

                self.emitting = false;
                self.out.clear();

                if self.cgj_pending {
                    self.cgj_pending = false;
                    self.out.push(Codepoint::from_code(CGJ));
                }
            }

            // перенос декомпозиции текущего кодпоинта в окно
            if self.dcp_pos < self.dcp.len() {
                let codepoint = self.dcp[self.dcp_pos];
                let ccc = codepoint.ccc();

                // стартер со статусом Yes не взаимодействует с предыдущими
                // кодпоинтами ни в одной форме - безопасная граница сброса
                let safe_break = codepoint.is_starter()
                    && is_allowed(ucd::quick_check(codepoint.code()), self.form) == QcStatus::Yes;

                if (safe_break && !self.out.is_empty()) || self.out.capacity_left() == 1 {
                    // сброс по переполнению внутри последовательности нестартеров
                    // вынужденный - помечаем его
                    self.cgj_pending = self.last_ccc != 0 && codepoint.is_nonstarter();
                    self.flush();

                    continue;
                }

                self.last_ccc = ccc;
                self.out.push(codepoint);
                self.dcp_pos += 1;

                continue;
            }

            // декомпозиция следующего кодпоинта входа
            match self.iter.next() {
                Some(code) => {
                    self.dcp.clear();
                    self.dcp_pos = 0;

                    decompose_into(code, self.form.decomposition_kind(), &mut self.dcp);
                }
                None => {
                    if self.out.is_empty() {
                        return None;
                    }

                    self.cgj_pending = false;
                    self.flush();
                }
            }
        }
    }
}
