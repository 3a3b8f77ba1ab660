use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// Grid letter color
    pub letter: Color,
    /// Cursor cell background
    pub cursor_bg: Color,
    /// Selection preview background
    pub preview_bg: Color,
    /// Found cell background
    pub found_bg: Color,
    /// Found cell letter color
    pub found_fg: Color,
    /// Words not yet found
    pub word: Color,
    /// Found (struck) words
    pub word_found: Color,
    /// Words the generator could not place
    pub word_missing: Color,
    /// Success/complete color
    pub success: Color,
    /// Info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            letter: Color::Rgb { r: 235, g: 235, b: 245 },
            cursor_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            preview_bg: Color::Rgb { r: 120, g: 100, b: 40 },
            found_bg: Color::Rgb { r: 30, g: 110, b: 70 },
            found_fg: Color::Rgb { r: 255, g: 255, b: 255 },
            word: Color::Rgb { r: 200, g: 205, b: 220 },
            word_found: Color::Rgb { r: 90, g: 200, b: 130 },
            word_missing: Color::Rgb { r: 255, g: 90, b: 90 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 180, g: 180, b: 195 },
            letter: Color::Rgb { r: 20, g: 20, b: 30 },
            cursor_bg: Color::Rgb { r: 180, g: 200, b: 255 },
            preview_bg: Color::Rgb { r: 255, g: 225, b: 140 },
            found_bg: Color::Rgb { r: 150, g: 220, b: 170 },
            found_fg: Color::Rgb { r: 10, g: 60, b: 20 },
            word: Color::Rgb { r: 50, g: 50, b: 70 },
            word_found: Color::Rgb { r: 40, g: 140, b: 60 },
            word_missing: Color::Rgb { r: 200, g: 50, b: 50 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            border: Color::Grey,
            letter: Color::White,
            cursor_bg: Color::Blue,
            preview_bg: Color::DarkYellow,
            found_bg: Color::DarkGreen,
            found_fg: Color::White,
            word: Color::White,
            word_found: Color::Green,
            word_missing: Color::Red,
            success: Color::Green,
            info: Color::Grey,
            key: Color::Yellow,
        }
    }

    /// Look a theme up by name, falling back to dark
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().replace('-', "_").as_str() {
            "light" => Self::light(),
            "high_contrast" | "contrast" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}
