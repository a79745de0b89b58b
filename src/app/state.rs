//! Application state definitions
//!
//! Everything the screen shows besides the engine itself: the current input
//! mode, the status line and whether the help overlay is open.

use crate::engine::Dispatch;
use crate::theme::StatusKind;

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current input mode
    pub mode: AppMode,
    /// Status message for user feedback
    pub status_message: String,
    /// How the status message should be styled
    pub status_kind: StatusKind,
    /// Outcome of the last command sent to the engine
    pub last_dispatch: Option<Dispatch>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// First help line shown while the overlay is open
    pub help_scroll: u16,
}

/// Application input modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Keys map to calculator commands
    Normal,
    /// Waiting for a variable name to store X under
    StoreName,
    /// Waiting for a variable name to recall into X
    RecallName,
}

impl AppMode {
    /// Display name, used by the help overlay
    pub fn title(&self) -> &'static str {
        match self {
            Self::Normal => "Calculator",
            Self::StoreName => "Store variable",
            Self::RecallName => "Recall variable",
        }
    }

    /// Whether the next keypress is read as a variable name
    pub fn is_prompt(&self) -> bool {
        matches!(self, Self::StoreName | Self::RecallName)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Normal,
            status_message: "Ready. Press ? for help".to_string(),
            status_kind: StatusKind::Info,
            last_dispatch: None,
            help_visible: false,
            help_scroll: 0,
        }
    }
}

impl AppState {
    /// Set the status line
    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status_kind = kind;
        self.status_message = message.into();
    }

    /// Record a dispatch outcome and describe it on the status line
    pub fn record_dispatch(&mut self, label: &str, dispatch: Dispatch) {
        match &dispatch {
            Dispatch::Applied => self.set_status(StatusKind::Info, label.to_string()),
            Dispatch::NotImplemented(_) | Dispatch::Unrecognized(_) => {
                self.set_status(StatusKind::Warning, format!("{}: {}", label, dispatch))
            }
        }
        self.last_dispatch = Some(dispatch);
    }
}
