//! Mount/unmount lifecycle tests
//!
//! The simulator counter is process-wide, so everything that starts a
//! simulator lives in this one test.

#![allow(non_snake_case)]

use biolink_core::{active_simulators, CardOptions, SimulatedPanelConfig};
use biolink_ui::{BiolinkCard, PresencePanel};
use dioxus::prelude::*;

fn PanelRoot() -> Element {
    rsx! {
        PresencePanel { config: SimulatedPanelConfig::default() }
    }
}

fn CardRoot() -> Element {
    rsx! {
        BiolinkCard { options: CardOptions::default() }
    }
}

fn StaticCardRoot() -> Element {
    rsx! {
        BiolinkCard { options: CardOptions::with_static_panel("/me.png") }
    }
}

async fn settle() -> usize {
    for _ in 0..50 {
        if active_simulators() == 0 {
            break;
        }
        tokio::task::yield_now().await;
    }
    active_simulators()
}

#[tokio::test]
async fn unmount_releases_presence_timer() {
    assert_eq!(active_simulators(), 0);

    // Bare panel
    let mut dom = VirtualDom::new(PanelRoot);
    dom.rebuild_in_place();
    assert_eq!(active_simulators(), 1);
    drop(dom);
    assert_eq!(settle().await, 0, "panel timer outlived unmount");

    // Whole card
    let mut dom = VirtualDom::new(CardRoot);
    dom.rebuild_in_place();
    assert_eq!(active_simulators(), 1);
    drop(dom);
    assert_eq!(settle().await, 0, "card timer outlived unmount");

    // Static card never starts one
    let mut dom = VirtualDom::new(StaticCardRoot);
    dom.rebuild_in_place();
    assert_eq!(active_simulators(), 0);
    drop(dom);
}
