use std::sync::{Mutex, PoisonError};

use crate::domain::ModalState;

// Single-slot holder for the pending error shown in the modal.
// A new error overwrites the previous one; there is no queue.
#[derive(Default)]
pub struct NotificationStore {
    state: Mutex<ModalState>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_modal(&self, message: impl Into<String>) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.error_message = message.into();
        state.is_open = true;
    }

    // Hides the modal. The message stays readable after close.
    pub fn close_modal(&self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_open = false;
    }

    pub fn snapshot(&self) -> ModalState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_open(&self) -> bool {
        self.snapshot().is_open
    }

    pub fn error_message(&self) -> String {
        self.snapshot().error_message
    }
}
