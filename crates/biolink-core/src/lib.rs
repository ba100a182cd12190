//! Biolink Card Core Library
//!
//! Framework-free logic behind the biolink profile card.
//!
//! ## Overview
//!
//! The card is a hover-reactive panel: it tilts toward the pointer while
//! hovered, pings a status dot while the picture is hovered, and shows a
//! secondary panel that is either a static label or a simulated presence
//! feed. Everything here is pure state and derivation except
//! [`PresenceSimulator`], which owns a timer task.
//!
//! ## Quick Start
//!
//! ```ignore
//! use biolink_core::{CardStyle, HoverEvent, HoverState, HoverTarget, PointerTracker, CardRect};
//!
//! let mut hover = HoverState::new();
//! let mut tracker = PointerTracker::new();
//!
//! hover.apply(HoverTarget::Card, HoverEvent::Enter);
//! let pos = tracker.record(420.0, 310.0, &CardRect::new(200.0, 100.0, 448.0, 520.0));
//!
//! let style = CardStyle::derive(pos, hover.is_card_hovered(), (150.0, 200.0));
//! println!("{}", style.to_inline_style());
//! ```

pub mod config;
pub mod error;
pub mod hover;
pub mod pointer;
pub mod presence;
pub mod profile;
pub mod tilt;

// Re-exports
pub use config::{HostConfig, ImageConfig, ImageSource, CONFIG_FILE_NAME};
pub use error::{BiolinkError, BiolinkResult};
pub use hover::{HoverEvent, HoverState, HoverTarget, PING_CLASS};
pub use pointer::{CardRect, PointerPosition, PointerTracker};
pub use presence::{
    active_simulators, Activity, PresenceSimulator, PresenceStatus, DEFAULT_PERIOD,
};
pub use profile::{
    CardOptions, Profile, SecondaryPanel, SimulatedPanelConfig, SocialKind, SocialLink,
    StaticPanelConfig,
};
pub use tilt::{CardStyle, Glow, Tilt, TiltOrigin, FIXED_CENTER};
