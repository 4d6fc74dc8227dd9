//! Color palette for the chat panel
//!
//! Muted colors shared by the widgets and the demo host.

use ratatui::style::Color;

/// Block borders
pub const BORDER: Color = Color::Rgb(100, 110, 130);
/// Panel background
pub const SURFACE: Color = Color::Rgb(30, 32, 40);
/// Selected row and open trigger background
pub const SURFACE_HIGHLIGHT: Color = Color::Rgb(50, 55, 70);

/// Body text
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
/// Secondary text
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
/// Hints and placeholders
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

/// Overlay background
pub const OVERLAY_BG: Color = Color::Rgb(25, 27, 35);
/// Trigger and input background
pub const INPUT_BG: Color = Color::Rgb(35, 40, 50);

/// Model mark
pub const ACCENT_MODEL: Color = Color::Rgb(217, 119, 87);
/// Check mark and success messages
pub const ACCENT_POSITIVE: Color = Color::Rgb(120, 180, 120);
/// Stop glyph and error messages
pub const ACCENT_NEGATIVE: Color = Color::Rgb(200, 100, 100);
