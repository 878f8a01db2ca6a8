use std::io::{self, Write};

use crate::form::FormTarget;

/// What the user sees after a submit attempt.
pub trait Feedback {
    /// Blocking notification.
    fn alert(&self, message: &str);

    /// Full-page navigation.
    fn navigate(&self, location: &str);
}

/// Prints alerts and navigation targets to stdout.
pub struct ConsoleFeedback {
    target: FormTarget,
}

impl ConsoleFeedback {
    pub fn new(target: FormTarget) -> Self {
        Self { target }
    }
}

impl Feedback for ConsoleFeedback {
    fn alert(&self, message: &str) {
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{message}") {
            log::warn!("couldn't write alert: {e}");
        }
    }

    fn navigate(&self, location: &str) {
        let url = self.target.resolve(location);
        log::info!("redirecting to {url}");

        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "-> {url}") {
            log::warn!("couldn't write redirect: {e}");
        }
    }
}
