//! UI-level state that drives rendering.
//! A thin projection over the repository: input text, the loading flag
//! for the in-flight turn, and transient sidebar editing state.

/// State visible to UI panels
pub struct UiState {
    /// Input field content
    pub input_text: String,
    /// True from request dispatch until stream completion or failure;
    /// disables resend and shows the thinking indicator
    pub is_loading: bool,
    /// Conversation currently being renamed in the sidebar, if any
    pub editing_id: Option<String>,
    /// Working copy of the title while renaming
    pub edit_title: String,
    /// Whether the sidebar is expanded (narrow layouts collapse it)
    pub sidebar_open: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            is_loading: false,
            editing_id: None,
            edit_title: String::new(),
            sidebar_open: true,
        }
    }

    /// Enter rename mode for a conversation, seeding the edit box with
    /// the current title.
    pub fn begin_rename(&mut self, id: &str, current_title: &str) {
        self.editing_id = Some(id.to_string());
        self.edit_title = current_title.to_string();
    }

    /// Leave rename mode, returning the trimmed pending title when it is
    /// non-blank. A blank edit produces no rename.
    pub fn take_rename(&mut self) -> Option<(String, String)> {
        let id = self.editing_id.take()?;
        let title = self.edit_title.trim().to_string();
        self.edit_title.clear();
        if title.is_empty() {
            None
        } else {
            Some((id, title))
        }
    }

    pub fn cancel_rename(&mut self) {
        self.editing_id = None;
        self.edit_title.clear();
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing_id.as_deref() == Some(id)
    }

    /// Whether the current input can be submitted.
    pub fn can_send(&self) -> bool {
        !self.input_text.trim().is_empty() && !self.is_loading
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
