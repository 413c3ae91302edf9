use crate::config::UsageBand;
use crate::models::volume::VolumeType;

/// Platform-independent display color. Resolved into escape sequences (or
/// nothing at all) by a `Paint` implementation at render time; no raw
/// escape strings appear outside `ui::paint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Default,
    Dim,
    Cyan,
    Magenta,
    Blue,
    BoldRed,
    Red,
    BrightRed,
    Orange,
    Yellow,
    BrightYellow,
    CyanGreen,
    DimGreen,
    Green,
    BrightGreen,
}

impl ColorToken {
    /// Lenient name lookup for config values; unknown names fall back to
    /// the terminal default.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dim"           => Self::Dim,
            "cyan"          => Self::Cyan,
            "magenta"       => Self::Magenta,
            "blue"          => Self::Blue,
            "bold-red"      => Self::BoldRed,
            "red"           => Self::Red,
            "bright-red"    => Self::BrightRed,
            "orange"        => Self::Orange,
            "yellow"        => Self::Yellow,
            "bright-yellow" => Self::BrightYellow,
            "cyan-green"    => Self::CyanGreen,
            "dim-green"     => Self::DimGreen,
            "green"         => Self::Green,
            "bright-green"  => Self::BrightGreen,
            _               => Self::Default,
        }
    }
}

/// Drive-name color by volume type.
pub fn type_color(t: VolumeType) -> ColorToken {
    match t {
        VolumeType::Removable => ColorToken::Cyan,
        VolumeType::Network   => ColorToken::Magenta,
        VolumeType::Optical   => ColorToken::Blue,
        VolumeType::Fixed     => ColorToken::Default,
        VolumeType::Other     => ColorToken::Dim,
    }
}

/// Usage color from the band table: highest threshold first, first band
/// whose `min_pct` the floored percentage reaches wins.
pub fn usage_color(bands: &[UsageBand], pct: f64) -> ColorToken {
    let p = pct.max(0.0).floor() as u32;
    bands
        .iter()
        .find(|b| p >= b.min_pct as u32)
        .map(|b| ColorToken::from_name(&b.color))
        .unwrap_or(ColorToken::Default)
}
