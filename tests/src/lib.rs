mod data;
mod icu;
mod ucd;

/// колонка теста UCD как строка
pub fn text(codes: &[u32]) -> String
{
    codes.iter().map(|&code| char::from_u32(code).unwrap()).collect()
}
