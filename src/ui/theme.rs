//! Theme constants for the Othello GUI

use egui::Color32;

// Board colors - classic green felt
pub const BOARD_BG: Color32 = Color32::from_rgb(0, 188, 140);
pub const GRID_LINE: Color32 = Color32::from_rgb(0, 0, 0);
pub const COORD_LABEL: Color32 = Color32::from_rgb(20, 60, 45);

// Disc colors
pub const DARK_DISC: Color32 = Color32::from_rgb(20, 20, 24);
pub const DARK_DISC_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const LIGHT_DISC: Color32 = Color32::from_rgb(250, 250, 252);
pub const LIGHT_DISC_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const FLIP_RING: Color32 = Color32::from_rgb(255, 200, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn legal_hint() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 70)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const DISC_RADIUS_RATIO: f32 = 0.42;
pub const HINT_RADIUS_RATIO: f32 = 0.12;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
