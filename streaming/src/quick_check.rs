use unicode_ucd_source as ucd;

use crate::normalize::NormalizationForm;

/// результат быстрой проверки нормализованности
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QcStatus
{
    /// последовательность нормализована
    Yes,
    /// последовательность не нормализована
    No,
    /// без полной нормализации ответить нельзя
    Maybe,
}

/// пары (маска, статус) формы: срабатывает первая подошедшая, иначе Yes.
/// у форм декомпозиции статуса Maybe нет - обе пары дают No
#[inline(always)]
pub(crate) fn masks(form: NormalizationForm) -> [(u8, QcStatus); 2]
{
    match form {
        NormalizationForm::Nfc => {
            [(ucd::NFC_QC_NO, QcStatus::No), (ucd::NFC_QC_MAYBE, QcStatus::Maybe)]
        }
        NormalizationForm::Nfkc => {
            [(ucd::NFKC_QC_NO, QcStatus::No), (ucd::NFKC_QC_MAYBE, QcStatus::Maybe)]
        }
        NormalizationForm::Nfd => [(ucd::NFD_QC_NO, QcStatus::No), (ucd::NFD_QC_NO, QcStatus::No)],
        NormalizationForm::Nfkd => {
            [(ucd::NFKD_QC_NO, QcStatus::No), (ucd::NFKD_QC_NO, QcStatus::No)]
        }
    }
}

/// статус кодпоинта в форме по его флагам быстрой проверки
#[inline(always)]
pub(crate) fn is_allowed(quick_check: u8, form: NormalizationForm) -> QcStatus
{
    for (mask, status) in masks(form) {
        if quick_check & mask != 0 {
            return status;
        }
    }

    QcStatus::Yes
}

/// быстрая проверка "вход уже в форме form?" за один проход без декомпозиции.
/// Yes гарантирует нормализованность, No - её отсутствие
pub fn quick_check<I>(input: I, form: NormalizationForm) -> QcStatus
where
    I: Iterator<Item = u32>,
{
    let mut last_ccc = 0u8;
    let mut status = QcStatus::Yes;

    for code in input {
        let props = ucd::properties(code);

        // нестартеры обязаны идти по неубыванию CCC
        if props.combining != 0 && last_ccc > props.combining {
            return QcStatus::No;
        }

        match is_allowed(props.quick_check, form) {
            QcStatus::Yes => (),
            QcStatus::No => return QcStatus::No,
            QcStatus::Maybe => status = QcStatus::Maybe,
        }

        last_ccc = props.combining;
    }

    status
}
