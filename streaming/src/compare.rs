use unicode_ucd_source as ucd;

use crate::buffer::CodepointBuffer;
use crate::composition::canonic_sort;
use crate::decomposition::decompose_into;
use crate::decomposition::DecompositionKind;
use crate::normalize::NormalizationForm;
use crate::quick_check::is_allowed;
use crate::quick_check::QcStatus;
use crate::utf8;

/// NFD-поток одной из сравниваемых сторон: окно декомпозиции от безопасной
/// границы до безопасной границы
struct NfdWindow<'a>
{
    bytes: &'a [u8],
    pos: usize,
    /// декомпозиция текущего кодпоинта
    dcp: CodepointBuffer,
    dcp_pos: usize,
    /// набранное окно
    out: CodepointBuffer,
}

impl<'a> NfdWindow<'a>
{
    fn new(bytes: &'a [u8]) -> Self
    {
        Self {
            bytes,
            pos: 0,
            dcp: CodepointBuffer::new(),
            dcp_pos: 0,
            out: CodepointBuffer::new(),
        }
    }

    /// набрать окно до безопасной границы или почти полного буфера.
    /// кодпоинт на границе не включается - он откроет следующее окно
    fn fill(&mut self)
    {
        loop {
            while self.dcp_pos < self.dcp.len() {
                let codepoint = self.dcp[self.dcp_pos];

                let safe_break = codepoint.is_starter()
                    && is_allowed(ucd::quick_check(codepoint.code()), NormalizationForm::Nfd)
                        == QcStatus::Yes;

                if (safe_break && !self.out.is_empty()) || self.out.capacity_left() == 1 {
                    return;
                }

                self.out.push(codepoint);
                self.dcp_pos += 1;
            }

            if self.pos >= self.bytes.len() {
                return;
            }

            let code = utf8::decode_codepoint(self.bytes, &mut self.pos);

            self.dcp.clear();
            self.dcp_pos = 0;

            decompose_into(code, DecompositionKind::Canonical, &mut self.dcp);
        }
    }

    /// сторона исчерпана?
    fn is_done(&self) -> bool
    {
        self.pos >= self.bytes.len() && self.dcp_pos >= self.dcp.len() && self.out.is_empty()
    }
}

/// каноническая эквивалентность двух UTF-8 байтовых срезов без построения
/// полных NFD-форм: синхронные окна декомпозиции переупорядочиваются и
/// сравниваются попарно, с ранним выходом при несовпадении
pub fn cmp_nfd(a: &[u8], b: &[u8]) -> bool
{
    let mut left = NfdWindow::new(a);
    let mut right = NfdWindow::new(b);

    loop {
        left.fill();
        right.fill();

        canonic_sort(&mut left.out);
        canonic_sort(&mut right.out);

        if left.out != right.out {
            return false;
        }

        left.out.clear();
        right.out.clear();

        if left.is_done() && right.is_done() {
            return true;
        }
    }
}
