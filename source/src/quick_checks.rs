use crate::properties::*;

const DATA: &str = include_str!("./../data/ucd/14.0.0/DerivedNormalizationProps.txt");

/// разбор DerivedNormalizationProps.txt: флаги быстрых проверок N / M по формам.
/// не перечисленные в файле кодпоинты имеют статус Yes во всех формах
pub(crate) fn fill_quick_checks(table: &mut [CodepointProperties])
{
    for line in DATA.lines() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let entry = match line.split_once('#') {
            Some((entry, _)) => entry,
            None => line,
        };

        let mut fields = entry.split(';');

        let codes = fields.next().unwrap().trim();
        let property = fields.next().unwrap().trim();
        let value = fields.next().unwrap().trim();

        let flag = match (property, value) {
            ("NFD_QC", "N") => NFD_QC_NO,
            ("NFC_QC", "N") => NFC_QC_NO,
            ("NFC_QC", "M") => NFC_QC_MAYBE,
            ("NFKD_QC", "N") => NFKD_QC_NO,
            ("NFKC_QC", "N") => NFKC_QC_NO,
            ("NFKC_QC", "M") => NFKC_QC_MAYBE,
            _ => continue,
        };

        let (from, to) = match codes.split_once("..") {
            Some((from, to)) => (from, to),
            None => (codes, codes),
        };

        let from = u32::from_str_radix(from, 16).unwrap();
        let to = u32::from_str_radix(to, 16).unwrap();

        for code in from ..= to {
            table[code as usize].quick_check |= flag;
        }
    }
}
