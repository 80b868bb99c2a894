//! Chat panel — message bubbles, thinking indicator, and input row.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use chat_types::message::{Message, Role};

use crate::state::UiState;
use crate::theme::*;

/// Render the chat panel. Returns Some(message) when the user submits.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    messages: Option<&[Message]>,
) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new("X Intelligence")
                            .color(TEXT_PRIMARY)
                            .size(22.0),
                    );
                    ui.label(
                        RichText::new("Real-time insights powered by live data")
                            .color(TEXT_SECONDARY)
                            .small(),
                    );
                });
                ui.add_space(6.0);
                ui.separator();

                let available_height = ui.available_height() - 56.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| match messages {
                        None | Some([]) => {
                            ui.add_space(available_height * 0.4);
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    RichText::new("Start a conversation by asking a question")
                                        .color(TEXT_MUTED)
                                        .small(),
                                );
                            });
                        }
                        Some(messages) => {
                            for message in messages {
                                render_bubble(ui, message, state.is_loading);
                                ui.add_space(6.0);
                            }
                        }
                    });

                ui.add_space(6.0);

                // Input row
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Ask anything...")
                        .desired_width(ui.available_width() - 82.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add_enabled(!state.is_loading, input);

                    let send_label = if state.is_loading { "Thinking..." } else { "Send" };
                    let send_btn = ui.add_enabled(
                        state.can_send(),
                        egui::Button::new(RichText::new(send_label).color(BG_SURFACE))
                            .fill(BUTTON_DARK)
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(76.0, 0.0)),
                    );

                    let enter = response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if (enter && state.can_send()) || send_btn.clicked() {
                        let text = state.input_text.trim().to_string();
                        submitted = Some(text);
                        state.input_text.clear();
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

fn render_bubble(ui: &mut egui::Ui, message: &Message, is_loading: bool) {
    match message.role {
        Role::User => {
            ui.with_layout(Layout::right_to_left(Align::TOP), |ui| {
                egui::Frame::default()
                    .fill(BUTTON_DARK)
                    .corner_radius(BUBBLE_ROUNDING)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.set_max_width(ui.available_width() * 0.75);
                        ui.label(RichText::new(&message.content).color(BG_SURFACE));
                    });
            });
        }
        Role::Assistant => {
            ui.with_layout(Layout::left_to_right(Align::TOP), |ui| {
                egui::Frame::default()
                    .fill(BG_SURFACE)
                    .stroke(egui::Stroke::new(1.0, BORDER))
                    .corner_radius(BUBBLE_ROUNDING)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.set_max_width(ui.available_width() * 0.75);
                        if message.content.is_empty() && is_loading {
                            // Placeholder still streaming in
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(
                                    RichText::new("Thinking...").color(TEXT_MUTED).small(),
                                );
                            });
                        } else {
                            ui.label(RichText::new(&message.content).color(TEXT_PRIMARY));
                        }
                    });
            });
        }
    }
}
