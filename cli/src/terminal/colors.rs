use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 200, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 200, b: 90 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 220, g: 220, b: 220 };

pub const DOMAIN: Color = Color::TrueColor { r: 170, g: 140, b: 255 };
pub const IP_ADDR: Color = Color::TrueColor { r: 100, g: 220, b: 160 };

pub const ADDED: Color = Color::Green;
pub const REMOVED: Color = Color::Red;
