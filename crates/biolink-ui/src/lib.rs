//! Biolink Card UI Components
//!
//! Dioxus components for the biolink profile card. All behavior lives in
//! `biolink-core`; the components here own the signals, wire DOM events
//! into the core state machines and render the result.
//!
//! ## Styling
//!
//! Components emit semantic class names (`biolink-card`,
//! `profile-picture__dot`, `secondary-panel`, ...) plus a few animation
//! utility classes (`animate-pulse`, `animate-ping`, `animate-bounce`).
//! The stylesheet is supplied by the host application.

pub mod components;

pub use components::*;
