//! Color themes for the canvas word search

use serde::{Deserialize, Serialize};

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn as_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn as_css_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Color theme for the puzzle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Page background
    pub background: Color,
    /// Grid lines
    pub grid_lines: Color,
    /// Unselected cell background
    pub cell_bg: Color,
    /// Letter color
    pub letter: Color,
    /// Cells under the line being dragged
    pub preview_bg: Color,
    /// Cells of found words
    pub found_bg: Color,
    /// Letters on found cells
    pub found_text: Color,
    /// Title and subtitle
    pub header_text: Color,
    /// Word list entries still to find
    pub word_text: Color,
    /// Word list entries already found
    pub word_found_text: Color,
    /// Words that never made it onto the grid
    pub word_missing_text: Color,
    /// Toast text
    pub message_text: Color,
    /// Toast background
    pub message_bg: Color,
    /// Completion banner
    pub complete_color: Color,
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            background: Color::new(24, 24, 32),
            grid_lines: Color::new(60, 60, 80),
            cell_bg: Color::new(32, 32, 44),
            letter: Color::new(200, 200, 220),
            preview_bg: Color::new(70, 100, 150),
            found_bg: Color::new(40, 110, 60),
            found_text: Color::new(230, 255, 230),
            header_text: Color::new(230, 230, 240),
            word_text: Color::new(160, 160, 180),
            word_found_text: Color::new(100, 255, 150),
            word_missing_text: Color::new(255, 100, 100),
            message_text: Color::new(255, 220, 100),
            message_bg: Color::new(48, 48, 64),
            complete_color: Color::new(100, 255, 150),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            background: Color::new(245, 245, 250),
            grid_lines: Color::new(180, 180, 200),
            cell_bg: Color::new(255, 255, 255),
            letter: Color::new(20, 20, 40),
            preview_bg: Color::new(180, 210, 255),
            found_bg: Color::new(200, 240, 200),
            found_text: Color::new(20, 90, 40),
            header_text: Color::new(20, 20, 40),
            word_text: Color::new(60, 60, 80),
            word_found_text: Color::new(50, 180, 80),
            word_missing_text: Color::new(220, 50, 50),
            message_text: Color::new(180, 120, 0),
            message_bg: Color::new(230, 240, 255),
            complete_color: Color::new(50, 180, 80),
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            background: Color::new(0, 0, 0),
            grid_lines: Color::new(100, 100, 100),
            cell_bg: Color::new(0, 0, 0),
            letter: Color::new(255, 255, 255),
            preview_bg: Color::new(0, 80, 160),
            found_bg: Color::new(0, 100, 0),
            found_text: Color::new(255, 255, 0),
            header_text: Color::new(255, 255, 255),
            word_text: Color::new(200, 200, 200),
            word_found_text: Color::new(0, 255, 0),
            word_missing_text: Color::new(255, 0, 0),
            message_text: Color::new(255, 255, 0),
            message_bg: Color::new(40, 40, 60),
            complete_color: Color::new(0, 255, 0),
        }
    }

    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "high_contrast" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}
