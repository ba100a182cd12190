//! Tilt Card
//!
//! The card shell: tracks the pointer over its own bounding box and
//! tilts toward it while hovered. The listeners are element attributes,
//! so they go away with the element.

use std::cell::Cell;
use std::rc::Rc;

use biolink_core::{
    CardRect, CardStyle, HoverEvent, HoverState, HoverTarget, PointerTracker, TiltOrigin,
};
use dioxus::prelude::*;

/// Properties for the TiltCard component
#[derive(Clone, PartialEq, Props)]
pub struct TiltCardProps {
    /// Shared hover state; this component drives the card machine
    pub hover: Signal<HoverState>,
    /// Pivot for the tilt
    #[props(default)]
    pub tilt_origin: TiltOrigin,
    pub children: Element,
}

/// Hover-reactive card shell with a glow backdrop
///
/// # Example
///
/// ```rust,ignore
/// let hover = use_signal(HoverState::new);
/// rsx! {
///     TiltCard { hover,
///         p { "content" }
///     }
/// }
/// ```
#[component]
pub fn TiltCard(props: TiltCardProps) -> Element {
    let mut hover = props.hover;
    let mut tracker = use_signal(PointerTracker::new);
    let mut card_el: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    // Issued per move; measurements may resolve out of order
    let next_seq = use_hook(|| Rc::new(Cell::new(0u64)));

    let snapshot = tracker();
    let center = props.tilt_origin.center(snapshot.card_size());
    let card_style =
        CardStyle::derive(snapshot.position(), hover.read().is_card_hovered(), center)
            .to_inline_style();

    rsx! {
        div {
            class: "biolink-card",
            style: "{card_style}",
            onmounted: move |evt: MountedEvent| card_el.set(Some(evt.data())),
            onmouseenter: move |_| {
                hover.write().apply(HoverTarget::Card, HoverEvent::Enter);
            },
            onmouseleave: move |_| {
                hover.write().apply(HoverTarget::Card, HoverEvent::Leave);
            },
            onmousemove: move |evt: MouseEvent| {
                let client = evt.client_coordinates();
                let Some(el) = card_el() else {
                    return;
                };
                let seq = next_seq.get() + 1;
                next_seq.set(seq);
                // Re-measure on every move; the tilt itself shifts the box
                spawn(async move {
                    match el.get_client_rect().await {
                        Ok(r) => {
                            if seq <= tracker.peek().last_seq() {
                                return;
                            }
                            let rect =
                                CardRect::new(r.origin.x, r.origin.y, r.size.width, r.size.height);
                            tracker.write().record_sample(seq, client.x, client.y, &rect);
                        }
                        Err(e) => tracing::debug!("card rect unavailable: {:?}", e),
                    }
                });
            },

            // Animated glow
            div { class: "biolink-card__glow" }

            div { class: "biolink-card__content", {props.children} }
        }
    }
}
