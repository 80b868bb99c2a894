//! Toast overlay — bottom-right stack of short-lived notifications.

use egui::{self, Align2, RichText, Vec2};

use chat_types::toast::{Toast, ToastKind};

use crate::theme::*;

/// Render all toasts over the main content. Returns the id of a toast the
/// user dismissed this frame, if any.
pub fn toast_overlay(ctx: &egui::Context, toasts: &[Toast]) -> Option<u64> {
    if toasts.is_empty() {
        return None;
    }

    let mut dismissed = None;

    egui::Area::new(egui::Id::new("toast_overlay"))
        .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-16.0, -16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            // Newest at the bottom
            for toast in toasts {
                let (bg, fg) = kind_colors(toast.kind);
                egui::Frame::default()
                    .fill(bg)
                    .stroke(egui::Stroke::new(1.0, BORDER))
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(kind_icon(toast.kind)).color(fg));
                            ui.label(RichText::new(&toast.message).color(fg).small());
                            let close = ui
                                .add(egui::Button::new(RichText::new("✕").small()).frame(false));
                            if close.clicked() {
                                dismissed = Some(toast.id);
                            }
                        });
                    });
                ui.add_space(4.0);
            }
        });

    dismissed
}

fn kind_colors(kind: ToastKind) -> (egui::Color32, egui::Color32) {
    match kind {
        ToastKind::Success => (SUCCESS_BG, SUCCESS_FG),
        ToastKind::Error => (ERROR_BG, ERROR_FG),
        ToastKind::Info => (INFO_BG, INFO_FG),
        ToastKind::Warning => (WARNING_BG, WARNING_FG),
    }
}

fn kind_icon(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "✔",
        ToastKind::Error => "✖",
        ToastKind::Info => "ℹ",
        ToastKind::Warning => "⚠",
    }
}
