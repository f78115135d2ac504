//! Потоковая нормализация Unicode: NFC, NFD, NFKC, NFKD (UAX #15) и
//! каноническое сравнение строк.
//!
//! Нормализатор работает окнами в буферах фиксированной ёмкости: память не
//! зависит от длины входа, в том числе на патологических последовательностях
//! нестартеров. Вынужденная граница сброса внутри такой последовательности
//! помечается кодпоинтом U+034F COMBINING GRAPHEME JOINER, благодаря чему
//! результат остаётся стабильной нормальной формой.

pub use codepoint::CGJ;
pub use compare::cmp_nfd;
pub use normalize::NormalizationForm;
pub use normalize::Normalized;
pub use quick_check::QcStatus;

mod buffer;
mod codepoint;
mod compare;
mod composition;
mod decomposition;
mod hangul;
mod normalize;
mod quick_check;
mod utf8;

/// потоковый нормализатор выбранной формы
pub struct StreamingNormalizer
{
    form: NormalizationForm,
}

impl StreamingNormalizer
{
    pub fn new(form: NormalizationForm) -> Self
    {
        Self { form }
    }

    /// NFC-нормализатор
    pub fn nfc() -> Self
    {
        Self::new(NormalizationForm::Nfc)
    }

    /// NFD-нормализатор
    pub fn nfd() -> Self
    {
        Self::new(NormalizationForm::Nfd)
    }

    /// NFKC-нормализатор
    pub fn nfkc() -> Self
    {
        Self::new(NormalizationForm::Nfkc)
    }

    /// NFKD-нормализатор
    pub fn nfkd() -> Self
    {
        Self::new(NormalizationForm::Nfkd)
    }

    /// нормализация строки
    #[inline(never)]
    pub fn normalize(&self, input: &str) -> String
    {
        let mut result = String::with_capacity(input.len());

        for code in self.normalize_iter(input.chars().map(u32::from)) {
            write_char(&mut result, code);
        }

        result
    }

    /// нормализация последовательности кодпоинтов из диапазона [0, 0x10FFFF].
    /// суррогаты свойств не имеют и проходят без изменений
    pub fn normalize_codepoints(&self, input: &[u32]) -> Vec<u32>
    {
        let mut result = Vec::with_capacity(input.len());

        result.extend(self.normalize_iter(input.iter().copied()));

        result
    }

    /// ленивая нормализация итератора кодпоинтов; память ограничена
    /// буферами фиксированной ёмкости
    pub fn normalize_iter<I>(&self, iter: I) -> Normalized<I>
    where
        I: Iterator<Item = u32>,
    {
        Normalized::new(iter, self.form)
    }

    /// быстрая проверка строки без декомпозиции
    pub fn quick_check(&self, input: &str) -> QcStatus
    {
        quick_check::quick_check(input.chars().map(u32::from), self.form)
    }

    /// быстрая проверка последовательности кодпоинтов без декомпозиции
    pub fn quick_check_codepoints(&self, input: &[u32]) -> QcStatus
    {
        quick_check::quick_check(input.iter().copied(), self.form)
    }

    /// true гарантирует, что строка нормализована; false её ненормализованность
    /// не доказывает: статус Maybe считается отрицательным ответом
    pub fn is_normalized(&self, input: &str) -> bool
    {
        self.quick_check(input) == QcStatus::Yes
    }

    /// вариант [`Self::is_normalized`] для последовательности кодпоинтов
    pub fn is_normalized_codepoints(&self, input: &[u32]) -> bool
    {
        self.quick_check_codepoints(input) == QcStatus::Yes
    }
}

/// NFC-нормализация строки
pub fn to_nfc(input: &str) -> String
{
    StreamingNormalizer::nfc().normalize(input)
}

/// NFD-нормализация строки
pub fn to_nfd(input: &str) -> String
{
    StreamingNormalizer::nfd().normalize(input)
}

/// NFKC-нормализация строки
pub fn to_nfkc(input: &str) -> String
{
    StreamingNormalizer::nfkc().normalize(input)
}

/// NFKD-нормализация строки
pub fn to_nfkd(input: &str) -> String
{
    StreamingNormalizer::nfkd().normalize(input)
}

/// строка уже в NFC? Maybe считается отрицательным ответом
pub fn is_nfc(input: &str) -> bool
{
    StreamingNormalizer::nfc().is_normalized(input)
}

/// строка уже в NFD?
pub fn is_nfd(input: &str) -> bool
{
    StreamingNormalizer::nfd().is_normalized(input)
}

/// строка уже в NFKC? Maybe считается отрицательным ответом
pub fn is_nfkc(input: &str) -> bool
{
    StreamingNormalizer::nfkc().is_normalized(input)
}

/// строка уже в NFKD?
pub fn is_nfkd(input: &str) -> bool
{
    StreamingNormalizer::nfkd().is_normalized(input)
}

/// дописать кодпоинт в результат. выход нормализации скалярных значений -
/// скалярные значения
#[inline(always)]
fn write_char(result: &mut String, code: u32)
{
    result.push(unsafe { char::from_u32_unchecked(code) });
}
