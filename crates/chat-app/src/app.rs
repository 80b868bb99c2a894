//! Main egui application — composes the panels and drives streamed turns.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, Align2, CentralPanel, SidePanel, Vec2};

use chat_core::event_bus::EventBus;
use chat_core::ingest::run_turn;
use chat_core::ports::ChatTransport;
use chat_core::repository::ConversationRepository;
use chat_core::toast_queue::ToastQueue;
use chat_platform::http::HttpChatTransport;
use chat_platform::store::auto_detect_store;
use chat_platform::time::schedule_toast_expiry;
use chat_types::event::ChatEvent;
use chat_types::toast::{ToastKind, TOAST_DURATION_MS};
use chat_ui::panels::{chat, sidebar, toasts, SidebarAction};
use chat_ui::state::UiState;
use chat_ui::theme;

/// The main application state
pub struct ChatApp {
    ui_state: UiState,
    event_bus: EventBus,
    repository: Rc<RefCell<ConversationRepository>>,
    transport: Rc<dyn ChatTransport>,
    toasts: Rc<RefCell<ToastQueue>>,
    first_frame: bool,
}

impl ChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, endpoint: Option<String>) -> Self {
        let store = auto_detect_store();
        let repository = Rc::new(RefCell::new(ConversationRepository::new(store)));
        let transport: Rc<dyn ChatTransport> = match endpoint {
            Some(endpoint) => Rc::new(HttpChatTransport::new(endpoint)),
            None => Rc::new(HttpChatTransport::default()),
        };

        Self {
            ui_state: UiState::new(),
            event_bus: EventBus::new(),
            repository,
            transport,
            toasts: Rc::new(RefCell::new(ToastQueue::new())),
            first_frame: true,
        }
    }

    /// Push a toast and schedule its expiry. A late timer after a manual
    /// dismissal is a no-op because ids are never reused.
    fn push_toast(&self, message: &str, kind: ToastKind, ctx: &egui::Context) {
        let id = self.toasts.borrow_mut().push(message, kind);
        let ctx = ctx.clone();
        schedule_toast_expiry(self.toasts.clone(), id, TOAST_DURATION_MS, move || {
            ctx.request_repaint();
        });
    }

    /// Apply one drained event to the repository and UI flags. Deltas are
    /// addressed by the id stamped on the event, so a stream keeps updating
    /// its own conversation even after the user switches away.
    fn apply_event(&mut self, event: ChatEvent, ctx: &egui::Context) {
        match event {
            ChatEvent::TurnStarted { .. } => {
                self.ui_state.is_loading = true;
            }
            ChatEvent::AssistantDelta {
                conversation_id,
                content,
            } => {
                self.repository
                    .borrow_mut()
                    .update_last_assistant_message(&conversation_id, &content);
            }
            ChatEvent::TurnCompleted { .. } => {
                self.ui_state.is_loading = false;
            }
            ChatEvent::TurnFailed {
                conversation_id,
                message,
            } => {
                self.repository
                    .borrow_mut()
                    .update_last_assistant_message(&conversation_id, &message);
                self.ui_state.is_loading = false;
                self.push_toast("Failed to get a response", ToastKind::Error, ctx);
            }
        }
    }

    fn apply_sidebar_action(&mut self, action: SidebarAction, ctx: &egui::Context) {
        match action {
            SidebarAction::NewChat => {
                self.repository.borrow_mut().create_conversation();
            }
            SidebarAction::Switch(id) => {
                self.repository.borrow_mut().select_conversation(&id);
            }
            SidebarAction::Delete(id) => {
                self.repository.borrow_mut().delete_conversation(&id);
                self.push_toast("Conversation deleted", ToastKind::Success, ctx);
            }
            SidebarAction::Rename(id, title) => {
                self.repository.borrow_mut().rename_conversation(&id, &title);
                self.push_toast("Conversation renamed", ToastKind::Success, ctx);
            }
        }
    }

    /// Record the user message, seed the assistant placeholder, and kick
    /// off the streamed turn (fire-and-forget).
    fn dispatch_message(&mut self, text: String, ctx: &egui::Context) {
        let conversation_id = {
            let mut repo = self.repository.borrow_mut();
            let active = repo.active_id().map(str::to_string);
            let id = repo.append_user_message(active.as_deref(), &text);
            repo.append_assistant_placeholder(&id);
            id
        };
        self.ui_state.is_loading = true;

        let transport = self.transport.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            run_turn(transport.as_ref(), &bus, &conversation_id, &text).await;
            ctx.request_repaint();
        });
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from any in-flight turn; superseded deltas are
        // dropped since each one carries the full accumulator
        let events = self.event_bus.drain_coalesced();
        if !events.is_empty() {
            for event in events {
                self.apply_event(event, ctx);
            }
            ctx.request_repaint();
        }

        if self.ui_state.is_loading {
            ctx.request_repaint();
        }

        // ── Sidebar ──────────────────────────────────────────
        let mut pending_action = None;
        if self.ui_state.sidebar_open {
            SidePanel::left("sidebar")
                .default_width(240.0)
                .resizable(false)
                .show(ctx, |ui| {
                    let repo = self.repository.borrow();
                    let summaries = repo.summaries();
                    let active_id = repo.active_id().map(str::to_string);
                    drop(repo);
                    pending_action = sidebar::sidebar_panel(
                        ui,
                        &mut self.ui_state,
                        &summaries,
                        active_id.as_deref(),
                    );
                });
        }
        if let Some(action) = pending_action {
            self.apply_sidebar_action(action, ctx);
        }

        // ── Chat ─────────────────────────────────────────────
        let mut submitted = None;
        CentralPanel::default().show(ctx, |ui| {
            let repo = self.repository.clone();
            let repo = repo.borrow();
            let messages = repo.active().map(|c| c.messages.as_slice());
            submitted = chat::chat_panel(ui, &mut self.ui_state, messages);
        });
        if let Some(text) = submitted {
            self.dispatch_message(text, ctx);
        }

        // ── Sidebar toggle (over the content, top-left) ──────
        egui::Area::new(egui::Id::new("sidebar_toggle"))
            .anchor(Align2::LEFT_TOP, Vec2::new(8.0, 8.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                if ui.button("☰").clicked() {
                    self.ui_state.sidebar_open = !self.ui_state.sidebar_open;
                }
            });

        // ── Toasts ───────────────────────────────────────────
        let dismissed = {
            let toasts = self.toasts.borrow();
            toasts::toast_overlay(ctx, toasts.toasts())
        };
        if let Some(id) = dismissed {
            self.toasts.borrow_mut().remove(id);
        }
    }
}
