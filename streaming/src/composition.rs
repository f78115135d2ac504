use unicode_ucd_source as ucd;

use crate::buffer::CodepointBuffer;
use crate::codepoint::Codepoint;
use crate::hangul;

/// каноническое переупорядочивание: стабильная сортировка нестартеров по CCC.
/// буфер не длиннее 32 кодпоинтов, поэтому пузырёк с ранним выходом.
/// переставляются только соседние пары, где оба кодпоинта - нестартеры,
/// стоящие не по порядку (правило D108); стартеры - границы сортировки
pub fn canonic_sort(buffer: &mut CodepointBuffer)
{
    if buffer.len() < 2 {
        return;
    }

    loop {
        let mut swapped = false;

        for i in 1 .. buffer.len() {
            let previous = buffer[i - 1].ccc();
            let current = buffer[i].ccc();

            if previous > current && current > 0 {
                buffer.swap(i - 1, i);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}

/// каноническая композиция на месте (D117): нестартеры и следующие стартеры
/// последовательно комбинируются с последним стартером, композит замещает его
pub fn canonical_composition(buffer: &mut CodepointBuffer)
{
    let mut last_starter: Option<usize> = None;
    let mut last_ccc = 0u8;
    let mut pos = 0;

    for i in 0 .. buffer.len() {
        let codepoint = buffer[i];

        // чамо V / T и слоги LV комбинируются алгоритмически; стартер должен
        // стоять непосредственно перед текущим кодпоинтом
        if let Some(starter) = last_starter {
            if starter + 1 == pos {
                if let Some(syllable) = hangul::compose_hangul(buffer[starter].code(), codepoint.code())
                {
                    buffer[starter] = Codepoint::from_code(syllable);
                    last_ccc = 0;
                    continue;
                }
            }
        }

        let ccc = codepoint.ccc();

        let starter = match last_starter {
            Some(starter) => starter,
            None => {
                if ccc == 0 {
                    last_starter = Some(pos);
                }

                buffer[pos] = codepoint;
                pos += 1;
                last_ccc = ccc;

                continue;
            }
        };

        // нестартер с CCC не выше предыдущего заблокирован от стартера (D115)
        let blocked = last_ccc >= ccc && last_ccc > 0;

        if !blocked {
            if let Some(combined) = ucd::composition(buffer[starter].code(), codepoint.code()) {
                debug_assert!(ucd::combining(combined) == 0);

                buffer[starter] = Codepoint::from_code(combined);
                last_ccc = 0;

                continue;
            }
        }

        if ccc == 0 {
            last_starter = Some(pos);
        }

        buffer[pos] = codepoint;
        pos += 1;
        last_ccc = ccc;
    }

    buffer.set_len(pos);
}
