//! Card content and options
//!
//! Static biographical content plus the options that select the
//! secondary panel and profile image.

use std::time::Duration;

use crate::presence::{PresenceStatus, DEFAULT_PERIOD};
use crate::tilt::TiltOrigin;

pub const DEFAULT_PROFILE_IMAGE: &str = "/placeholder.svg?height=80&width=80";
pub const DEFAULT_STATIC_IMAGE: &str = "/python-logo.png";
pub const DEFAULT_STATIC_LABEL: &str = "Python";

/// Biographical text shown on the card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub display_name: String,
    pub tagline: String,
    pub location: String,
    /// The zap counter next to the picture
    pub counter: u32,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            display_name: "Exo".to_string(),
            tagline: "XXIII:V".to_string(),
            location: "United Kingdom".to_string(),
            counter: 182,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Discord,
    GitHub,
}

impl SocialKind {
    pub fn label(&self) -> &'static str {
        match self {
            SocialKind::Discord => "Discord",
            SocialKind::GitHub => "GitHub",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
}

/// The two link icons along the bottom of the card
pub fn default_social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            kind: SocialKind::Discord,
            href: "#".to_string(),
        },
        SocialLink {
            kind: SocialKind::GitHub,
            href: "#".to_string(),
        },
    ]
}

/// Fixed image + label panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPanelConfig {
    pub image_url: String,
    pub label: String,
}

impl Default for StaticPanelConfig {
    fn default() -> Self {
        Self {
            image_url: DEFAULT_STATIC_IMAGE.to_string(),
            label: DEFAULT_STATIC_LABEL.to_string(),
        }
    }
}

/// Presence panel fed by the simulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedPanelConfig {
    pub initial: PresenceStatus,
    pub period: Duration,
}

impl Default for SimulatedPanelConfig {
    fn default() -> Self {
        Self {
            initial: PresenceStatus::default(),
            period: DEFAULT_PERIOD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecondaryPanel {
    Static(StaticPanelConfig),
    Simulated(SimulatedPanelConfig),
}

impl Default for SecondaryPanel {
    fn default() -> Self {
        SecondaryPanel::Simulated(SimulatedPanelConfig::default())
    }
}

/// Everything that varies between card instances
#[derive(Debug, Clone, PartialEq)]
pub struct CardOptions {
    pub profile_image_url: String,
    pub secondary_panel: SecondaryPanel,
    pub tilt_origin: TiltOrigin,
    pub profile: Profile,
    pub social_links: Vec<SocialLink>,
}

impl CardOptions {
    /// Card with a static secondary panel and the given profile image
    pub fn with_static_panel(profile_image_url: impl Into<String>) -> Self {
        Self {
            profile_image_url: profile_image_url.into(),
            secondary_panel: SecondaryPanel::Static(StaticPanelConfig::default()),
            ..Self::default()
        }
    }
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            profile_image_url: DEFAULT_PROFILE_IMAGE.to_string(),
            secondary_panel: SecondaryPanel::default(),
            tilt_origin: TiltOrigin::default(),
            profile: Profile::default(),
            social_links: default_social_links(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_card_uses_simulated_presence() {
        let options = CardOptions::default();
        assert_eq!(options.profile_image_url, DEFAULT_PROFILE_IMAGE);
        match options.secondary_panel {
            SecondaryPanel::Simulated(cfg) => assert_eq!(cfg.period, Duration::from_secs(30)),
            other => panic!("unexpected panel: {:?}", other),
        }
    }

    #[test]
    fn static_panel_shows_python_logo() {
        let options = CardOptions::with_static_panel("https://example.com/a.png");
        assert_eq!(options.profile_image_url, "https://example.com/a.png");
        assert_eq!(
            options.secondary_panel,
            SecondaryPanel::Static(StaticPanelConfig {
                image_url: "/python-logo.png".to_string(),
                label: "Python".to_string(),
            })
        );
    }

    #[test]
    fn social_links_order() {
        let kinds: Vec<_> = default_social_links().iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![SocialKind::Discord, SocialKind::GitHub]);
    }
}
