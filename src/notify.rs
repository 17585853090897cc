//! Collaborator interfaces for surfacing submission outcomes.
//!
//! The form core never draws an alert or changes the page itself; it calls
//! these traits and lets the embedding presentation decide what that means.
//! Tests substitute recording doubles, the CLI driver uses the log-backed
//! implementations below.

use tracing::{error, info};

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Title shown when account creation succeeds.
pub const REGISTER_SUCCESS_TITLE: &str = "Registration successful";
/// Title shown when account creation fails.
pub const REGISTER_FAILURE_TITLE: &str = "Registration failed";

/// Home route, entered once a successful registration is acknowledged.
pub const HOME_ROUTE: &str = "/";
/// Generic error route, entered once a failed registration is acknowledged.
pub const ERROR_ROUTE: &str = "/error404";

/// Presents a notification to the user.
pub trait Notifier: Send + Sync {
    /// Show the notification and return once the user has acknowledged it.
    fn notify(&self, title: &str, body: &str, severity: Severity);
}

/// Moves the user to another route.
pub trait Router: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Notifier that writes to the log instead of a screen; acknowledgment is
/// immediate.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, title: &str, body: &str, severity: Severity) {
        match severity {
            Severity::Success => info!("{}: {}", title, body),
            Severity::Error => error!("{}: {}", title, body),
        }
    }
}

/// Router that only records where the user would have gone.
#[derive(Debug, Default)]
pub struct LogRouter;

impl Router for LogRouter {
    fn navigate(&self, route: &str) {
        info!("Navigating to {}", route);
    }
}
