use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x001db954);
pub const BACKGROUND: Color = Color::from_u32(0x00121212);
pub const SURFACE: Color = Color::from_u32(0x00282828);
pub const TEXT: Color = Color::from_u32(0x00ffffff);
pub const MUTED: Color = Color::from_u32(0x00b3b3b3);
