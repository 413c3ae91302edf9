use super::color::ColorToken;
use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
use std::io::IsTerminal;

/// Translates abstract color tokens into output text.
pub trait Paint {
    fn paint(&self, token: ColorToken, text: &str) -> String;
}

/// Emits ANSI SGR sequences, with a full reset (`ESC[0m`) after every
/// colored field.
pub struct Ansi;

/// No-op painter for piped or explicitly uncolored output.
pub struct Plain;

/// Pick the painter for stdout. On Linux the terminal needs no mode
/// switch first; color is simply dropped when output is not a terminal.
pub fn for_stdout(no_color: bool) -> Box<dyn Paint> {
    if no_color || !std::io::stdout().is_terminal() {
        Box::new(Plain)
    } else {
        Box::new(Ansi)
    }
}

impl Paint for Plain {
    fn paint(&self, _token: ColorToken, text: &str) -> String {
        text.to_string()
    }
}

impl Paint for Ansi {
    fn paint(&self, token: ColorToken, text: &str) -> String {
        let (color, attr) = resolve(token);
        match attr {
            Some(a) => format!("{}{}{}{}", SetForegroundColor(color), SetAttribute(a), text, ResetColor),
            None    => format!("{}{}{}", SetForegroundColor(color), text, ResetColor),
        }
    }
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb {
        r: ((hex >> 16) & 0xFF) as u8,
        g: ((hex >>  8) & 0xFF) as u8,
        b: ( hex        & 0xFF) as u8,
    }
}

fn resolve(token: ColorToken) -> (Color, Option<Attribute>) {
    match token {
        ColorToken::Default      => (Color::Reset, None),
        ColorToken::Dim          => (Color::DarkGrey, None),
        ColorToken::Cyan         => (Color::Cyan, None),
        ColorToken::Magenta      => (Color::Magenta, None),
        ColorToken::Blue         => (Color::Blue, None),
        ColorToken::BoldRed      => (Color::Red, Some(Attribute::Bold)),
        ColorToken::Red          => (Color::DarkRed, None),
        ColorToken::BrightRed    => (Color::Red, None),
        ColorToken::Orange       => (rgb(0xff8700), None),
        ColorToken::Yellow       => (Color::DarkYellow, None),
        ColorToken::BrightYellow => (Color::Yellow, None),
        ColorToken::CyanGreen    => (rgb(0x00d7af), None),
        ColorToken::DimGreen     => (Color::DarkGreen, Some(Attribute::Dim)),
        ColorToken::Green        => (Color::DarkGreen, None),
        ColorToken::BrightGreen  => (Color::Green, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_is_a_no_op() {
        assert_eq!(Plain.paint(ColorToken::BoldRed, "sda1"), "sda1");
    }

    #[test]
    fn ansi_wraps_and_resets() {
        let s = Ansi.paint(ColorToken::Cyan, "sdb1");
        assert!(s.starts_with('\x1b'));
        assert!(s.contains("sdb1"));
        assert!(s.ends_with("\x1b[0m"));
    }

    #[test]
    fn bold_red_carries_the_bold_attribute() {
        let (_, attr) = resolve(ColorToken::BoldRed);
        assert_eq!(attr, Some(Attribute::Bold));
        let (_, attr) = resolve(ColorToken::Red);
        assert_eq!(attr, None);
    }
}
