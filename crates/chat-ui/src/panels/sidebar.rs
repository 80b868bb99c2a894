//! Sidebar panel — conversation list with new/switch/rename/delete.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use chat_types::conversation::ConversationSummary;

use crate::state::UiState;
use crate::theme::*;

/// An intent emitted by the sidebar. The app applies it to the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarAction {
    NewChat,
    Switch(String),
    Delete(String),
    Rename(String, String),
}

/// Render the sidebar. Returns at most one action per frame.
pub fn sidebar_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    conversations: &[ConversationSummary],
    active_id: Option<&str>,
) -> Option<SidebarAction> {
    let mut action = None;

    ui.vertical(|ui| {
        ui.add_space(4.0);
        ui.label(
            RichText::new("X Intelligence")
                .color(TEXT_PRIMARY)
                .strong()
                .size(15.0),
        );
        ui.separator();

        let new_chat = ui.add_sized(
            Vec2::new(ui.available_width(), 32.0),
            egui::Button::new(RichText::new("＋ New Chat").color(BG_SURFACE))
                .fill(BUTTON_DARK)
                .corner_radius(PANEL_ROUNDING),
        );
        if new_chat.clicked() {
            action = Some(SidebarAction::NewChat);
        }

        ui.add_space(8.0);
        ui.label(
            RichText::new("RECENT CHATS")
                .color(TEXT_SECONDARY)
                .small()
                .strong(),
        );

        if conversations.is_empty() {
            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("No conversations yet").color(TEXT_MUTED).small());
                ui.label(
                    RichText::new("Start a new chat to begin")
                        .color(TEXT_MUTED)
                        .small(),
                );
            });
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for convo in conversations {
                    if state.is_editing(&convo.id) {
                        if let Some(a) = render_rename_row(ui, state) {
                            action = Some(a);
                        }
                    } else if let Some(a) = render_row(ui, state, convo, active_id) {
                        action = Some(a);
                    }
                    ui.add_space(2.0);
                }
            });
    });

    action
}

fn render_rename_row(ui: &mut egui::Ui, state: &mut UiState) -> Option<SidebarAction> {
    let mut action = None;

    let response = ui.add(
        egui::TextEdit::singleline(&mut state.edit_title)
            .hint_text("Conversation title")
            .desired_width(ui.available_width()),
    );
    response.request_focus();

    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    let escape = ui.input(|i| i.key_pressed(egui::Key::Escape));

    if escape {
        state.cancel_rename();
    } else if enter {
        // Blank titles fall through as a plain cancel
        if let Some((id, title)) = state.take_rename() {
            action = Some(SidebarAction::Rename(id, title));
        }
    } else if response.lost_focus() {
        // Clicking elsewhere saves, like blur on a text input
        if let Some((id, title)) = state.take_rename() {
            action = Some(SidebarAction::Rename(id, title));
        } else {
            state.cancel_rename();
        }
    }

    action
}

fn render_row(
    ui: &mut egui::Ui,
    state: &mut UiState,
    convo: &ConversationSummary,
    active_id: Option<&str>,
) -> Option<SidebarAction> {
    let mut action = None;
    let is_active = active_id == Some(convo.id.as_str());

    let fill = if is_active { BG_SURFACE } else { BG_SECONDARY };
    egui::Frame::default()
        .fill(fill)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let title_color = if is_active { TEXT_PRIMARY } else { TEXT_SECONDARY };
                let mut text = RichText::new(truncate_label(&convo.title)).color(title_color);
                if is_active {
                    text = text.strong();
                }
                let label = ui.add(
                    egui::Label::new(text)
                        .sense(egui::Sense::click())
                        .truncate(),
                );
                if label.clicked() {
                    action = Some(SidebarAction::Switch(convo.id.clone()));
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let delete = ui
                        .add(egui::Button::new(RichText::new("🗑").small()).frame(false))
                        .on_hover_text("Delete");
                    if delete.clicked() {
                        action = Some(SidebarAction::Delete(convo.id.clone()));
                    }

                    let rename = ui
                        .add(egui::Button::new(RichText::new("✏").small()).frame(false))
                        .on_hover_text("Rename");
                    if rename.clicked() {
                        state.begin_rename(&convo.id, &convo.title);
                    }
                });
            });
        });

    action
}

/// Sidebar rows have limited width; keep labels from wrapping.
fn truncate_label(title: &str) -> String {
    const MAX: usize = 28;
    if title.chars().count() > MAX {
        let cut: String = title.chars().take(MAX).collect();
        format!("{}…", cut)
    } else {
        title.to_string()
    }
}
