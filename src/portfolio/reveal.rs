use crate::portfolio::card::CardId;
use std::collections::{BTreeSet, HashSet};

/// Axis-aligned box in document pixels. Origin may be negative for
/// content scrolled off to the left or top.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    fn intersect(&self, other: &Bounds) -> Bounds {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = (self.x + self.width).min(other.x + other.width);
        let bottom = (self.y + self.height).min(other.y + other.height);
        Bounds::new(left, top, (right - left).max(0.0), (bottom - top).max(0.0))
    }
}

/// Fraction of `target` inside `viewport` once the viewport's bottom edge is
/// pulled in by `bottom_margin`.
pub fn intersection_ratio(target: Bounds, viewport: Bounds, bottom_margin: f32) -> f32 {
    let area = target.area();
    if area <= 0.0 {
        return 0.0;
    }
    let root = Bounds {
        height: (viewport.height - bottom_margin).max(0.0),
        ..viewport
    };
    target.intersect(&root).area() / area
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntersectionSupport {
    Available,
    Unavailable,
}

#[derive(Debug, Clone, Copy)]
pub struct Intersection {
    pub id: CardId,
    pub ratio: f32,
}

pub struct RevealController {
    threshold: f32,
    pending: BTreeSet<CardId>,
    visible: HashSet<CardId>,
    support: Option<IntersectionSupport>,
}

impl RevealController {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            pending: BTreeSet::new(),
            visible: HashSet::new(),
            support: None,
        }
    }

    /// Returns true when the card was newly added to the watch set.
    pub fn register(&mut self, id: CardId) -> bool {
        if self.visible.contains(&id) {
            return false;
        }
        if self.support == Some(IntersectionSupport::Unavailable) {
            self.visible.insert(id);
            return false;
        }
        self.pending.insert(id)
    }

    pub fn start(&mut self, support: IntersectionSupport) {
        self.support = Some(support);
        if support == IntersectionSupport::Unavailable {
            tracing::info!(count = self.pending.len(), "intersection unavailable, revealing all cards");
            self.visible.extend(std::mem::take(&mut self.pending));
        }
    }

    /// Feeds intersection reports; returns the cards revealed by this batch.
    pub fn observe<I>(&mut self, entries: I) -> Vec<CardId>
    where
        I: IntoIterator<Item = Intersection>,
    {
        if self.support != Some(IntersectionSupport::Available) {
            return Vec::new();
        }
        let mut revealed = Vec::new();
        for entry in entries {
            if entry.ratio > 0.0 && entry.ratio >= self.threshold && self.pending.remove(&entry.id) {
                self.visible.insert(entry.id);
                revealed.push(entry.id);
            }
        }
        revealed
    }

    pub fn is_visible(&self, id: CardId) -> bool {
        self.visible.contains(&id)
    }

    pub fn is_pending(&self, id: CardId) -> bool {
        self.pending.contains(&id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: usize, ratio: f32) -> Intersection {
        Intersection { id: CardId(id), ratio }
    }

    #[test]
    fn ratio_full_partial_and_outside() {
        let viewport = Bounds::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(intersection_ratio(Bounds::new(10.0, 10.0, 20.0, 20.0), viewport, 0.0), 1.0);
        assert_eq!(intersection_ratio(Bounds::new(0.0, 90.0, 10.0, 20.0), viewport, 0.0), 0.5);
        assert_eq!(intersection_ratio(Bounds::new(0.0, 200.0, 10.0, 10.0), viewport, 0.0), 0.0);
        assert_eq!(intersection_ratio(Bounds::new(150.0, 0.0, 10.0, 10.0), viewport, 0.0), 0.0);
    }

    #[test]
    fn bottom_margin_delays_trigger() {
        let viewport = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let target = Bounds::new(0.0, 70.0, 10.0, 20.0);
        assert_eq!(intersection_ratio(target, viewport, 0.0), 1.0);
        assert_eq!(intersection_ratio(target, viewport, 40.0), 0.0);
    }

    #[test]
    fn zero_area_target_never_intersects() {
        let viewport = Bounds::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(intersection_ratio(Bounds::new(5.0, 5.0, 0.0, 10.0), viewport, 0.0), 0.0);
    }

    #[test]
    fn fires_once_at_threshold() {
        let mut reveal = RevealController::new(0.1);
        reveal.register(CardId(1));
        reveal.start(IntersectionSupport::Available);

        assert!(reveal.observe([hit(1, 0.05)]).is_empty());
        assert!(!reveal.is_visible(CardId(1)));

        assert_eq!(reveal.observe([hit(1, 0.1)]), vec![CardId(1)]);
        assert!(reveal.is_visible(CardId(1)));
        assert!(reveal.observe([hit(1, 1.0)]).is_empty());
        assert_eq!(reveal.pending_count(), 0);
    }

    #[test]
    fn double_register_does_not_double_fire() {
        let mut reveal = RevealController::new(0.1);
        assert!(reveal.register(CardId(3)));
        assert!(!reveal.register(CardId(3)));
        reveal.start(IntersectionSupport::Available);
        assert_eq!(reveal.observe([hit(3, 0.5), hit(3, 0.5)]), vec![CardId(3)]);
        assert!(!reveal.register(CardId(3)));
        assert!(reveal.observe([hit(3, 0.5)]).is_empty());
    }

    #[test]
    fn unregistered_cards_are_ignored() {
        let mut reveal = RevealController::new(0.1);
        reveal.start(IntersectionSupport::Available);
        assert!(reveal.observe([hit(9, 1.0)]).is_empty());
        assert!(!reveal.is_visible(CardId(9)));
    }

    #[test]
    fn nothing_fires_before_start() {
        let mut reveal = RevealController::new(0.1);
        reveal.register(CardId(1));
        assert!(reveal.observe([hit(1, 1.0)]).is_empty());
        assert!(reveal.is_pending(CardId(1)));
    }

    #[test]
    fn unavailable_reveals_everything_immediately() {
        let mut reveal = RevealController::new(0.1);
        reveal.register(CardId(1));
        reveal.register(CardId(2));
        reveal.start(IntersectionSupport::Unavailable);
        assert!(reveal.is_visible(CardId(1)));
        assert!(reveal.is_visible(CardId(2)));
        assert_eq!(reveal.pending_count(), 0);

        reveal.register(CardId(3));
        assert!(reveal.is_visible(CardId(3)));
        assert!(reveal.observe([hit(3, 1.0)]).is_empty());
    }
}
