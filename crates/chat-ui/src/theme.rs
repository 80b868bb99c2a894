//! UI theme constants — light slate palette

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(248, 250, 252);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(241, 245, 249);
pub const BG_SURFACE: Color32 = Color32::WHITE;
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(15, 23, 42);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(71, 85, 105);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(148, 163, 184);
pub const BORDER: Color32 = Color32::from_rgb(226, 232, 240);
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const BUTTON_DARK: Color32 = Color32::from_rgb(30, 41, 59);

pub const SUCCESS_BG: Color32 = Color32::from_rgb(240, 253, 244);
pub const SUCCESS_FG: Color32 = Color32::from_rgb(22, 101, 52);
pub const ERROR_BG: Color32 = Color32::from_rgb(254, 242, 242);
pub const ERROR_FG: Color32 = Color32::from_rgb(153, 27, 27);
pub const INFO_BG: Color32 = Color32::from_rgb(239, 246, 255);
pub const INFO_FG: Color32 = Color32::from_rgb(30, 64, 175);
pub const WARNING_BG: Color32 = Color32::from_rgb(254, 252, 232);
pub const WARNING_FG: Color32 = Color32::from_rgb(133, 77, 14);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(8);
pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(10);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

/// Apply the light theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = false;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SURFACE;
    style.visuals.extreme_bg_color = BG_SURFACE;

    style.visuals.widgets.inactive.bg_fill = BG_SECONDARY;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_SECONDARY;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = BUTTON_DARK;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, BG_SURFACE);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.25);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
