/// COMBINING GRAPHEME JOINER - маркер вынужденной границы сброса
pub const CGJ: u32 = 0x34F;

/// кодпоинт в виде u32, где CCC хранится в младшем байте
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Codepoint(u32);

impl core::fmt::Debug for Codepoint
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{{ code: U+{:04X}, ccc: {} }}", self.0 >> 8, self.0 as u8)
    }
}

impl Codepoint
{
    #[inline(always)]
    pub fn code(&self) -> u32
    {
        self.0 >> 8
    }

    #[inline(always)]
    pub fn ccc(&self) -> u8
    {
        self.0 as u8
    }

    #[inline(always)]
    pub fn is_starter(&self) -> bool
    {
        self.0 as u8 == 0
    }

    #[inline(always)]
    pub fn is_nonstarter(&self) -> bool
    {
        self.0 as u8 != 0
    }

    #[inline(always)]
    pub const fn from_code_and_ccc(code: u32, ccc: u8) -> Self
    {
        Self(code << 8 | (ccc as u32))
    }

    #[inline(always)]
    pub const fn from_code(code: u32) -> Self
    {
        Self(code << 8)
    }
}
