use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(140, 115, 200);
pub const HEADER_BG: Color = Color::Rgb(25, 25, 38);
pub const STATUS_BG: Color = Color::Rgb(30, 30, 40);
pub const SEPARATOR: Color = Color::Rgb(55, 55, 75);
pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
pub const BODY_TEXT: Color = Color::Rgb(220, 220, 230);
pub const BORDER_COLOR: Color = Color::Rgb(70, 70, 95);
pub const ACTIVE_BORDER: Color = Color::Rgb(120, 120, 180);
pub const UNREVEALED_BORDER: Color = Color::Rgb(38, 38, 55);
pub const TAG_COLOR: Color = Color::Yellow;
pub const LINK_COLOR: Color = Color::Cyan;
pub const TOGGLE_COLOR: Color = Color::Rgb(140, 115, 200);
pub const DISABLED: Color = Color::Rgb(60, 60, 80);
pub const ERROR_FG: Color = Color::Rgb(255, 107, 107);
pub const SECTION_HEADER_FG: Color = Color::White;
