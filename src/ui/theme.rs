use egui::Color32;

pub const BG_PRIMARY: Color32 = Color32::from_rgb(0x0a, 0x0e, 0x27);
pub const BG_CARD: Color32 = Color32::from_rgb(0x1a, 0x23, 0x32);
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(0x00, 0xff, 0x88);
pub const ACCENT_RED: Color32 = Color32::from_rgb(0xff, 0x47, 0x57);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x88, 0x92, 0xb0);
