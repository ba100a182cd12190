use biolink_ui::BiolinkCard;
use dioxus::prelude::*;

use crate::context::{get_card_options, use_card_options};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the card options, then renders the card.
#[component]
pub fn App() -> Element {
    use_context_provider(get_card_options);

    rsx! {
        style { {GLOBAL_STYLES} }
        Stage {}
    }
}

/// Full-window backdrop that centers the card
#[component]
fn Stage() -> Element {
    let options = use_card_options();

    rsx! {
        main { class: "stage",
            BiolinkCard { options: options }
        }
    }
}
