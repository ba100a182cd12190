//! Pointer tracking relative to the card's bounding box.

/// Cursor offset from the card's top-left corner, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset of a client-space pointer from the card's current top-left.
    ///
    /// The rect must be re-read on every move: once tilted, the card's
    /// bounding box shifts under the pointer.
    pub fn relative_to(client_x: f64, client_y: f64, rect: &CardRect) -> Self {
        Self {
            x: client_x - rect.left,
            y: client_y - rect.top,
        }
    }
}

/// Bounding box of the card in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Size as `(width, height)`
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Whether a card-local position lies inside the box (edges inclusive)
    pub fn contains(&self, pos: PointerPosition) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }
}

/// Latest pointer sample plus the card size it was measured against.
///
/// Samples can be measured asynchronously and land out of order, so each
/// one carries a sequence number and anything older than the last
/// applied sample is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerTracker {
    position: PointerPosition,
    card_size: Option<(f64, f64)>,
    last_seq: u64,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sample that is newer than anything seen so far.
    pub fn record(&mut self, client_x: f64, client_y: f64, rect: &CardRect) -> PointerPosition {
        self.last_seq += 1;
        self.apply(client_x, client_y, rect)
    }

    /// Record sample `seq`, ignoring it if a later one was already applied.
    ///
    /// Returns the new local position, or `None` for a stale sample.
    pub fn record_sample(
        &mut self,
        seq: u64,
        client_x: f64,
        client_y: f64,
        rect: &CardRect,
    ) -> Option<PointerPosition> {
        if seq <= self.last_seq {
            return None;
        }
        self.last_seq = seq;
        Some(self.apply(client_x, client_y, rect))
    }

    fn apply(&mut self, client_x: f64, client_y: f64, rect: &CardRect) -> PointerPosition {
        self.position = PointerPosition::relative_to(client_x, client_y, rect);
        self.card_size = Some(rect.size());
        self.position
    }

    /// Sequence number of the last applied sample
    pub fn last_seq(&self) -> u64 {
        self.last_seq
    }

    pub fn position(&self) -> PointerPosition {
        self.position
    }

    /// Card size from the last sample, if any sample was taken
    pub fn card_size(&self) -> Option<(f64, f64)> {
        self.card_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_from_rect_origin() {
        let rect = CardRect::new(100.0, 50.0, 448.0, 520.0);
        let pos = PointerPosition::relative_to(250.0, 250.0, &rect);
        assert_eq!(pos, PointerPosition::new(150.0, 200.0));
    }

    #[test]
    fn pointer_left_of_card_goes_negative() {
        let rect = CardRect::new(100.0, 50.0, 448.0, 520.0);
        let pos = PointerPosition::relative_to(90.0, 40.0, &rect);
        assert_eq!(pos, PointerPosition::new(-10.0, -10.0));
        assert!(!rect.contains(pos));
    }

    #[test]
    fn contains_is_edge_inclusive() {
        let rect = CardRect::new(0.0, 0.0, 300.0, 400.0);
        assert!(rect.contains(PointerPosition::new(0.0, 0.0)));
        assert!(rect.contains(PointerPosition::new(300.0, 400.0)));
        assert!(!rect.contains(PointerPosition::new(300.5, 10.0)));
    }

    #[test]
    fn tracker_starts_at_origin_without_size() {
        let tracker = PointerTracker::new();
        assert_eq!(tracker.position(), PointerPosition::default());
        assert_eq!(tracker.card_size(), None);
    }

    #[test]
    fn tracker_keeps_latest_sample() {
        let mut tracker = PointerTracker::new();
        tracker.record(10.0, 10.0, &CardRect::new(0.0, 0.0, 300.0, 400.0));
        let pos = tracker.record(40.0, 70.0, &CardRect::new(20.0, 20.0, 310.0, 410.0));
        assert_eq!(pos, PointerPosition::new(20.0, 50.0));
        assert_eq!(tracker.position(), pos);
        assert_eq!(tracker.card_size(), Some((310.0, 410.0)));
    }

    #[test]
    fn late_measurement_does_not_overwrite_newer_sample() {
        let rect = CardRect::new(0.0, 0.0, 300.0, 400.0);
        let mut tracker = PointerTracker::new();

        // Sample 2 resolves first, then sample 1 straggles in
        assert_eq!(
            tracker.record_sample(2, 120.0, 80.0, &rect),
            Some(PointerPosition::new(120.0, 80.0))
        );
        assert_eq!(tracker.record_sample(1, 10.0, 10.0, &rect), None);
        assert_eq!(tracker.position(), PointerPosition::new(120.0, 80.0));
        assert_eq!(tracker.last_seq(), 2);
    }

    #[test]
    fn repeated_sequence_is_stale() {
        let rect = CardRect::new(0.0, 0.0, 300.0, 400.0);
        let mut tracker = PointerTracker::new();
        assert!(tracker.record_sample(1, 5.0, 5.0, &rect).is_some());
        assert!(tracker.record_sample(1, 50.0, 50.0, &rect).is_none());
        assert!(tracker.record_sample(3, 50.0, 50.0, &rect).is_some());
        assert_eq!(tracker.position(), PointerPosition::new(50.0, 50.0));
    }
}
