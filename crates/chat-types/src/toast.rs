use serde::{Deserialize, Serialize};

/// How long a toast stays on screen before auto-dismissal.
pub const TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

/// A short-lived status notification.
///
/// Ids come from a monotonic counter, not a timestamp, so two toasts
/// created in the same tick still get distinct ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}
