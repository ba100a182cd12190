//! Hover state machines
//!
//! Two independent two-state machines, one for the card and one for the
//! profile picture. Both start "not hovered" and only move on
//! enter/leave events from their own element.

/// Element a hover event came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    Card,
    Picture,
}

/// Pointer crossing an element boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEvent {
    Enter,
    Leave,
}

/// Class added to the status dot while the picture is hovered
pub const PING_CLASS: &str = "animate-ping";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    card: bool,
    picture: bool,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event to the machine for `target`.
    ///
    /// Returns whether the flag actually changed.
    pub fn apply(&mut self, target: HoverTarget, event: HoverEvent) -> bool {
        let flag = match target {
            HoverTarget::Card => &mut self.card,
            HoverTarget::Picture => &mut self.picture,
        };
        let next = event == HoverEvent::Enter;
        let changed = *flag != next;
        *flag = next;
        changed
    }

    pub fn is_card_hovered(&self) -> bool {
        self.card
    }

    pub fn is_picture_hovered(&self) -> bool {
        self.picture
    }

    /// Ping indicator class for the status dot, empty when idle
    pub fn ping_class(&self) -> &'static str {
        if self.picture {
            PING_CLASS
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unhovered() {
        let state = HoverState::new();
        assert!(!state.is_card_hovered());
        assert!(!state.is_picture_hovered());
        assert_eq!(state.ping_class(), "");
    }

    #[test]
    fn picture_ping_follows_enter_and_leave() {
        let mut state = HoverState::new();
        assert!(state.apply(HoverTarget::Picture, HoverEvent::Enter));
        assert_eq!(state.ping_class(), PING_CLASS);
        assert!(state.apply(HoverTarget::Picture, HoverEvent::Leave));
        assert_eq!(state.ping_class(), "");
    }

    #[test]
    fn machines_are_independent() {
        let mut state = HoverState::new();
        state.apply(HoverTarget::Card, HoverEvent::Enter);
        assert!(state.is_card_hovered());
        assert!(!state.is_picture_hovered());

        state.apply(HoverTarget::Picture, HoverEvent::Enter);
        state.apply(HoverTarget::Card, HoverEvent::Leave);
        assert!(!state.is_card_hovered());
        assert!(state.is_picture_hovered());
    }

    #[test]
    fn repeated_event_is_not_a_change() {
        let mut state = HoverState::new();
        assert!(!state.apply(HoverTarget::Card, HoverEvent::Leave));
        assert!(state.apply(HoverTarget::Card, HoverEvent::Enter));
        assert!(!state.apply(HoverTarget::Card, HoverEvent::Enter));
    }
}
