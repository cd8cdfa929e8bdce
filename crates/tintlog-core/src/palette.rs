//! Semantic colors and their per-target tokens

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;
use crate::level::LogLevel;

/// Rendering target, chosen once per logger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Terminal output with inline ANSI escape codes, file sink available
    Server,
    /// Browser console with `%c` placeholders and CSS style arguments
    Browser,
}

impl Target {
    /// Target for the current build: `Browser` on wasm32, `Server` elsewhere
    pub fn detect() -> Self {
        if cfg!(target_arch = "wasm32") {
            Target::Browser
        } else {
            Target::Server
        }
    }
}

impl Default for Target {
    fn default() -> Self {
        Self::detect()
    }
}

/// Target-specific representation of a [`Color`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    /// ANSI color index, rendered as `ESC[3<n>m`
    Ansi(u8),
    /// CSS named color
    Css(&'static str),
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorToken::Ansi(index) => write!(f, "{}", index),
            ColorToken::Css(name) => f.write_str(name),
        }
    }
}

/// Semantic color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Grey,
    White,
    #[default]
    Default,
}

impl Color {
    /// Every palette entry
    pub const ALL: [Color; 10] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::Grey,
        Color::White,
        Color::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Blue => "Blue",
            Color::Magenta => "Magenta",
            Color::Cyan => "Cyan",
            Color::Grey => "Grey",
            Color::White => "White",
            Color::Default => "Default",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.as_str() == name)
    }

    /// ANSI foreground index; White and Default both map to 9
    pub fn ansi(&self) -> u8 {
        match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::Grey => 7,
            Color::White | Color::Default => 9,
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            Color::Black | Color::Default => "Black",
            Color::Red => "IndianRed",
            Color::Green => "LimeGreen",
            Color::Yellow => "Orange",
            Color::Blue => "RoyalBlue",
            Color::Magenta => "Orchid",
            Color::Cyan => "SkyBlue",
            Color::Grey => "DimGrey",
            Color::White => "White",
        }
    }

    pub fn token(&self, target: Target) -> ColorToken {
        match target {
            Target::Server => ColorToken::Ansi(self.ansi()),
            Target::Browser => ColorToken::Css(self.css()),
        }
    }

    /// Color a level is rendered with
    pub fn for_level(level: LogLevel) -> Self {
        LEVEL_COLORS[level.ordinal() as usize]
    }
}

/// Indexed by level ordinal
const LEVEL_COLORS: [Color; 5] = [
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Red,
    Color::Default,
];

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| LogError::UnknownColor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_per_target() {
        assert_eq!(Color::Grey.token(Target::Server), ColorToken::Ansi(7));
        assert_eq!(Color::Grey.token(Target::Browser), ColorToken::Css("DimGrey"));
        assert_eq!(Color::Default.token(Target::Server), ColorToken::Ansi(9));
        assert_eq!(Color::Default.token(Target::Browser), ColorToken::Css("Black"));
        assert_eq!(Color::Red.token(Target::Browser).to_string(), "IndianRed");
        assert_eq!(Color::Blue.token(Target::Server).to_string(), "4");
    }

    #[test]
    fn test_level_colors() {
        assert_eq!(Color::for_level(LogLevel::Debug), Color::Cyan);
        assert_eq!(Color::for_level(LogLevel::Info), Color::Green);
        assert_eq!(Color::for_level(LogLevel::Warn), Color::Yellow);
        assert_eq!(Color::for_level(LogLevel::Error), Color::Red);
        assert_eq!(Color::for_level(LogLevel::None), Color::Default);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Magenta".parse::<Color>().unwrap(), Color::Magenta);
        assert!(matches!("Teal".parse::<Color>(), Err(LogError::UnknownColor(_))));
        for color in Color::ALL {
            assert_eq!(Color::from_name(color.as_str()), Some(color));
        }
    }

    #[test]
    fn test_detect_native_target() {
        #[cfg(not(target_arch = "wasm32"))]
        assert_eq!(Target::detect(), Target::Server);
        #[cfg(target_arch = "wasm32")]
        assert_eq!(Target::detect(), Target::Browser);
    }
}
