//! Biolink Card
//!
//! The complete profile card, configured by [`CardOptions`]:
//! - Tilting shell with glow backdrop
//! - Picture with hover ping and the zap counter
//! - Name, tagline and location
//! - Secondary panel (static label or simulated presence)
//! - Social links

use biolink_core::{CardOptions, HoverState};
use dioxus::prelude::*;

use super::{Icon, IconKind, ProfilePicture, SecondaryPanelView, SocialLinks, TiltCard};

/// Properties for the BiolinkCard component
#[derive(Clone, PartialEq, Props)]
pub struct BiolinkCardProps {
    pub options: CardOptions,
}

/// Full biolink card
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     BiolinkCard {
///         options: CardOptions::with_static_panel("https://example.com/a.png"),
///     }
/// }
/// ```
#[component]
pub fn BiolinkCard(props: BiolinkCardProps) -> Element {
    let hover = use_signal(HoverState::new);
    let options = props.options;
    let profile = options.profile.clone();

    rsx! {
        TiltCard {
            hover: hover,
            tilt_origin: options.tilt_origin,

            // Picture + counter
            div { class: "biolink-card__header",
                ProfilePicture {
                    src: options.profile_image_url.clone(),
                    hover: hover,
                }
                div { class: "biolink-card__counter",
                    Icon { kind: IconKind::Zap, class: "icon--yellow animate-pulse".to_string() }
                    span { class: "counter-value animate-pulse", "{profile.counter}" }
                }
            }

            // Bio
            div { class: "biolink-card__bio",
                h2 { class: "biolink-card__name",
                    "{profile.display_name} "
                    Icon {
                        kind: IconKind::Rocket,
                        class: "icon--yellow animate-bounce".to_string(),
                    }
                    " "
                    Icon { kind: IconKind::Zap, class: "icon--blue animate-pulse".to_string() }
                }
                p { class: "biolink-card__tagline animate-pulse", "{profile.tagline}" }
                p { class: "biolink-card__location",
                    Icon { kind: IconKind::MapPin, class: "icon--red".to_string() }
                    " {profile.location}"
                }
            }

            SecondaryPanelView { panel: options.secondary_panel.clone() }

            SocialLinks { links: options.social_links.clone() }
        }
    }
}
