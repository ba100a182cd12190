//! Social link row along the bottom of the card.

use biolink_core::{SocialKind, SocialLink};
use dioxus::prelude::*;

use super::{Icon, IconKind};

fn icon_for(kind: SocialKind) -> IconKind {
    match kind {
        SocialKind::Discord => IconKind::MessageCircle,
        SocialKind::GitHub => IconKind::Github,
    }
}

#[component]
pub fn SocialLinks(links: Vec<SocialLink>) -> Element {
    let items: Vec<(&'static str, String, IconKind)> = links
        .iter()
        .map(|link| (link.kind.label(), link.href.clone(), icon_for(link.kind)))
        .collect();

    rsx! {
        div { class: "social-links",
            for (label, href, icon) in items {
                a {
                    key: "{label}",
                    class: "social-link group",
                    href: "{href}",
                    "aria-label": "{label}",
                    Icon {
                        kind: icon,
                        class: "social-link__icon".to_string(),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_match_services() {
        assert_eq!(icon_for(SocialKind::Discord), IconKind::MessageCircle);
        assert_eq!(icon_for(SocialKind::GitHub), IconKind::Github);
    }
}
