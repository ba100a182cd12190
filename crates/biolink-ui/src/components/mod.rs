//! Card components
//!
//! Everything is driven by [`biolink_core`] state; these files only map
//! that state onto markup and classes.

mod biolink_card;
mod icons;
mod profile_picture;
mod secondary_panel;
mod social_links;
mod tilt_card;

pub use biolink_card::*;
pub use icons::*;
pub use profile_picture::*;
pub use secondary_panel::*;
pub use social_links::*;
pub use tilt_card::*;
