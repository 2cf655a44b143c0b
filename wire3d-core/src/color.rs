/// Packed 24-bit RGB colors and the named palette
use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while_m_n},
    combinator::{all_consuming, map_res, opt},
    IResult,
};
use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;

/// An RGB color packed as `0x00RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);

    const NAMED: [(&'static str, Color); 8] = [
        ("black", Color::BLACK),
        ("white", Color::WHITE),
        ("red", Color::RED),
        ("green", Color::GREEN),
        ("blue", Color::BLUE),
        ("cyan", Color::CYAN),
        ("yellow", Color::YELLOW),
        ("magenta", Color::MAGENTA),
    ];

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Bits above the low 24 are discarded.
    pub const fn from_packed(value: u32) -> Self {
        Self(value & 0x00FF_FFFF)
    }

    pub const fn packed(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    pub const fn to_rgb_bytes(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for Color {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some((_, color)) = Color::NAMED
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
        {
            return Ok(*color);
        }

        all_consuming(parse_hex_color)(trimmed)
            .map(|(_, color)| color)
            .map_err(|_| RenderError::invalid_color(s))
    }
}

fn parse_hex_color(input: &str) -> IResult<&str, Color> {
    let (input, _) = opt(alt((tag("#"), tag_no_case("0x"))))(input)?;
    let (input, packed) = map_res(
        take_while_m_n(6, 6, |c: char| c.is_ascii_hexdigit()),
        |digits| u32::from_str_radix(digits, 16),
    )(input)?;
    Ok((input, Color::from_packed(packed)))
}
