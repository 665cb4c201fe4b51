//! Add-to-cart notifications
//!
//! The cart tells an injected [`CartObserver`] about every successful add.
//! Delivery is fire-and-forget: a failed notification is logged and the
//! cart mutation stands.

use thiserror::Error;

/// Toast-style message describing an add
#[derive(Debug, Clone, PartialEq)]
pub struct CartNotice {
    pub title: String,
    pub description: String,
}

impl CartNotice {
    pub fn added(name: &str, variant: &str, quantity: u32) -> Self {
        Self {
            title: "Added to cart!".to_string(),
            description: format!("{} ({}) x{}", name, variant, quantity),
        }
    }
}

#[derive(Debug, Error)]
#[error("notification not delivered: {0}")]
pub struct NotifyError(pub String);

/// Receives add-to-cart notices. Called after the cart entry is released,
/// so an implementation may read the carts again.
pub trait CartObserver: Send + Sync {
    fn notify(&self, notice: &CartNotice) -> Result<(), NotifyError>;
}

/// Hands `notice` to `observer`, logging a failed delivery
pub fn deliver(observer: &dyn CartObserver, notice: &CartNotice) {
    if let Err(e) = observer.notify(notice) {
        tracing::warn!(error = %e, "Cart notification dropped");
    }
}

/// Default observer: emits each notice as a log event
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl CartObserver for LogObserver {
    fn notify(&self, notice: &CartNotice) -> Result<(), NotifyError> {
        tracing::info!(title = %notice.title, "{}", notice.description);
        Ok(())
    }
}
