use crate::domain::session::Navigator;
use std::sync::{Mutex, PoisonError};

/// Navigator for a single HTTP exchange: a forced navigation is remembered
/// and later answered with a redirect instead of the page.
#[derive(Debug, Default)]
pub struct PendingRedirect {
    target: Mutex<Option<String>>,
}

impl PendingRedirect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Option<String> {
        self.target
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl Navigator for PendingRedirect {
    fn navigate(&self, path: &str) {
        *self.target.lock().unwrap_or_else(PoisonError::into_inner) = Some(path.to_string());
    }
}
