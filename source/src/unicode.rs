use std::collections::HashMap;

lazy_static! {
    /// таблица кодпоинтов Unicode
    pub static ref UNICODE: HashMap<u32, Codepoint> = unicode();
}

const DATA: &str = include_str!("./../data/ucd/14.0.0/UnicodeData.txt");

/// кодпоинт Unicode: колонки UnicodeData.txt, относящиеся к нормализации
#[derive(Debug, Clone)]
pub struct Codepoint
{
    /// код символа
    pub code: u32,
    /// класс канонического комбинирования (canonical combining class)
    pub ccc: u8,
    /// декомпозиция записана с тегом, т.е. является декомпозицией совместимости
    pub is_compat: bool,
    /// одноуровневая декомпозиция: элементы могут иметь свою декомпозицию
    pub decomposition: Vec<u32>,
}

impl Codepoint
{
    #[inline]
    pub fn is_starter(&self) -> bool
    {
        self.ccc == 0
    }

    #[inline]
    pub fn is_nonstarter(&self) -> bool
    {
        self.ccc != 0
    }
}

#[derive(Debug, PartialEq)]
pub enum PropertiesError
{
    UnknownPropertyValue,
}

impl From<core::num::ParseIntError> for PropertiesError
{
    fn from(_: core::num::ParseIntError) -> Self
    {
        Self::UnknownPropertyValue
    }
}

/// декомпозиция из пятой колонки UnicodeData.txt: опциональный тег в угловых
/// скобках, затем кодпоинты
#[derive(Debug, Clone, Default)]
struct Decomposition
{
    is_compat: bool,
    codes: Vec<u32>,
}

impl TryFrom<&str> for Decomposition
{
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        let mut is_compat = false;
        let mut codes = vec![];

        for entry in value.split_whitespace() {
            if entry.starts_with('<') {
                is_compat = true;
                continue;
            }

            codes.push(u32::from_str_radix(entry, 16)?);
        }

        Ok(Self { is_compat, codes })
    }
}

/// разбор UnicodeData.txt из UCD и составление хешмапа свойств символов Unicode
fn unicode() -> HashMap<u32, Codepoint>
{
    let mut map: HashMap<u32, Codepoint> = HashMap::new();

    for line in DATA.lines() {
        let props: Vec<&str> = line.split(';').collect();

        let code = u32::from_str_radix(props[0], 16).unwrap();
        let name = props[1];

        // диапазоны, записанные парами First / Last - CJK и тангутские иероглифы,
        // слоги хангыль, Private Use, суррогаты. данных нормализации они не несут:
        // CCC = 0, табличной декомпозиции нет (слоги хангыль декомпозируются
        // алгоритмически)
        if name.starts_with('<') && (name != "<control>") {
            continue;
        }

        // CCC и декомпозиция с тегом
        let ccc: u8 = props[3].parse().unwrap();
        let decomposition = Decomposition::try_from(props[5]).unwrap();

        map.insert(
            code,
            Codepoint {
                code,
                ccc,
                is_compat: decomposition.is_compat,
                decomposition: decomposition.codes,
            },
        );
    }

    map
}
