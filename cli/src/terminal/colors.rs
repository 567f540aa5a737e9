use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const NUMBER: Color = Color::BrightYellow;
pub const PRIZE: Color = Color::Yellow;
pub const PROFIT: Color = Color::Green;
pub const LOSS: Color = Color::Red;
