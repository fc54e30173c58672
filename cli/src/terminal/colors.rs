use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const POSITIVE_CHARGE: Color = Color::BrightRed;
pub const NEGATIVE_CHARGE: Color = Color::BrightBlue;
