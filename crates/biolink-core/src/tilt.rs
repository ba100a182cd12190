//! Tilt derivation
//!
//! Turns the tracked pointer position into the card's inline style:
//! a perspective rotation while hovered and one of two glow presets.

use serde::Deserialize;

use crate::pointer::PointerPosition;

/// Pointer offset (px) per degree of rotation
pub const TILT_DAMPING: f64 = 10.0;

/// Perspective distance applied before rotating
pub const PERSPECTIVE_PX: u32 = 1000;

/// Rotation origin used by the fixed mode, in card-local pixels
pub const FIXED_CENTER: (f64, f64) = (150.0, 200.0);

pub const CARD_TRANSITION: &str = "transform 0.1s ease-out, box-shadow 0.3s ease-in-out";

/// Where the tilt pivots from.
///
/// `Fixed` keeps the (150, 200) offsets the card has always used, which
/// only line up with the real center for one card size. `Measured` uses
/// the card's actual center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TiltOrigin {
    #[default]
    Fixed,
    Measured,
}

impl TiltOrigin {
    /// Pivot point for a card of the given size.
    ///
    /// Measured mode falls back to the fixed center until a size is known.
    pub fn center(&self, card_size: Option<(f64, f64)>) -> (f64, f64) {
        match (self, card_size) {
            (TiltOrigin::Measured, Some((w, h))) => (w / 2.0, h / 2.0),
            _ => FIXED_CENTER,
        }
    }
}

/// Rotation pair in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn from_pointer(pos: PointerPosition, center: (f64, f64)) -> Self {
        // + 0.0 folds -0.0 into 0.0 so the CSS never reads "-0deg"
        Self {
            rotate_y: (pos.x - center.0) / TILT_DAMPING + 0.0,
            rotate_x: -(pos.y - center.1) / TILT_DAMPING + 0.0,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "perspective({}px) rotateY({}deg) rotateX({}deg)",
            PERSPECTIVE_PX, self.rotate_y, self.rotate_x
        )
    }
}

/// Box-shadow preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glow {
    #[default]
    Idle,
    Hovered,
}

impl Glow {
    pub fn css(&self) -> &'static str {
        match self {
            Glow::Idle => "0 0 15px 2px rgba(0, 162, 255, 0.3)",
            Glow::Hovered => "0 0 25px 5px rgba(0, 162, 255, 0.5)",
        }
    }
}

/// Everything the card root needs for its inline style on one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub tilt: Option<Tilt>,
    pub glow: Glow,
}

impl CardStyle {
    /// Derive the style for one render. No tilt is produced while the
    /// card is not hovered, whatever the last pointer position was.
    pub fn derive(pos: PointerPosition, hovered: bool, center: (f64, f64)) -> Self {
        if hovered {
            Self {
                tilt: Some(Tilt::from_pointer(pos, center)),
                glow: Glow::Hovered,
            }
        } else {
            Self {
                tilt: None,
                glow: Glow::Idle,
            }
        }
    }

    pub fn transform_css(&self) -> String {
        self.tilt
            .map(|t| t.to_css())
            .unwrap_or_else(|| "none".to_string())
    }

    /// Full inline `style` attribute value
    pub fn to_inline_style(&self) -> String {
        format!(
            "transform: {}; transition: {}; box-shadow: {};",
            self.transform_css(),
            CARD_TRANSITION,
            self.glow.css()
        )
    }
}
