//! Card options context for the desktop app.
//!
//! `main` resolves the options once from the config file and command
//! line; the root component hands them to the tree via context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_card_options);
//!
//! // In child components
//! let options = use_card_options();
//! ```

use std::sync::OnceLock;

use biolink_core::CardOptions;
use dioxus::prelude::*;

static CARD_OPTIONS: OnceLock<CardOptions> = OnceLock::new();

/// Store the resolved options. Only the first call wins.
pub fn set_card_options(options: CardOptions) {
    if CARD_OPTIONS.set(options).is_err() {
        tracing::warn!("card options already set, ignoring");
    }
}

/// Resolved options, or the stock card if `main` never set any
pub fn get_card_options() -> CardOptions {
    CARD_OPTIONS.get().cloned().unwrap_or_default()
}

/// Hook to access the card options from context.
pub fn use_card_options() -> CardOptions {
    use_context::<CardOptions>()
}
