//! Profile Picture Component
//!
//! Avatar with a status dot that pings while the picture is hovered.

use biolink_core::{HoverEvent, HoverState, HoverTarget};
use dioxus::prelude::*;

/// Status dot classes for the current hover state
pub fn status_dot_class(hover: &HoverState) -> String {
    let ping = hover.ping_class();
    if ping.is_empty() {
        "profile-picture__dot".to_string()
    } else {
        format!("profile-picture__dot {}", ping)
    }
}

/// Properties for the ProfilePicture component
#[derive(Clone, PartialEq, Props)]
pub struct ProfilePictureProps {
    /// Image URL, rendered as given
    pub src: String,
    /// Shared hover state; this component drives the picture machine
    pub hover: Signal<HoverState>,
    #[props(default = 80)]
    pub size: u32,
}

#[component]
pub fn ProfilePicture(props: ProfilePictureProps) -> Element {
    let mut hover = props.hover;
    let dot_class = status_dot_class(&hover.read());
    let size = props.size;

    rsx! {
        div {
            class: "profile-picture",
            onmouseenter: move |_| {
                hover.write().apply(HoverTarget::Picture, HoverEvent::Enter);
            },
            onmouseleave: move |_| {
                hover.write().apply(HoverTarget::Picture, HoverEvent::Leave);
            },
            img {
                class: "profile-picture__img animate-pulse",
                src: "{props.src}",
                alt: "Profile",
                width: "{size}",
                height: "{size}",
            }
            div { class: "{dot_class}" }
        }
    }
}
