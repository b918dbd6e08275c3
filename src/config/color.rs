use std::fmt;

use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map_res, opt},
    IResult, Parser,
};
use printpdf::{Color, Rgb};

use crate::error::ConfigError;

/// An 8-bit RGB color as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CardColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_tuple(rgb: (u8, u8, u8)) -> Self {
        Self::new(rgb.0, rgb.1, rgb.2)
    }

    pub fn to_rgb(self) -> Rgb {
        Rgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            None,
        )
    }

    pub fn to_pdf_color(self) -> Color {
        Color::Rgb(self.to_rgb())
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn hex_digits(count: usize) -> impl FnMut(&str) -> IResult<&str, &str> {
    move |input| take_while_m_n(count, count, |c: char| c.is_ascii_hexdigit()).parse(input)
}

/// Two hex digits: "F5"
fn hex_byte(input: &str) -> IResult<&str, u8> {
    map_res(hex_digits(2), |s: &str| u8::from_str_radix(s, 16)).parse(input)
}

/// One hex digit doubled: "F" -> 0xFF
fn short_hex_byte(input: &str) -> IResult<&str, u8> {
    map_res(hex_digits(1), |s: &str| {
        u8::from_str_radix(s, 16).map(|v| v * 0x11)
    })
    .parse(input)
}

fn long_form(input: &str) -> IResult<&str, CardColor> {
    let (input, (r, g, b)) = all_consuming((hex_byte, hex_byte, hex_byte)).parse(input)?;
    Ok((input, CardColor::new(r, g, b)))
}

fn short_form(input: &str) -> IResult<&str, CardColor> {
    let (input, (r, g, b)) =
        all_consuming((short_hex_byte, short_hex_byte, short_hex_byte)).parse(input)?;
    Ok((input, CardColor::new(r, g, b)))
}

/// Parse a hex color: "#RRGGBB", "RRGGBB", "#RGB" or "RGB"
pub fn parse_hex_color(input: &str) -> Result<CardColor, ConfigError> {
    let trimmed = input.trim();
    let (digits, _) = opt(char::<&str, nom::error::Error<&str>>('#'))
        .parse(trimmed)
        .map_err(|_| ConfigError::InvalidColor(input.to_string()))?;

    let parsed = match digits.len() {
        6 => long_form(digits),
        3 => short_form(digits),
        _ => return Err(ConfigError::InvalidColor(input.to_string())),
    };

    parsed
        .map(|(_, color)| color)
        .map_err(|_| ConfigError::InvalidColor(input.to_string()))
}
