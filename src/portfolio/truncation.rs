use crate::portfolio::card::{BodyState, Card, CardId, FooterItem, ToggleLabel};

/// Used when a card reports no collapsed-height budget of its own.
pub const DEFAULT_BUDGET_PX: f32 = 100.0;

/// Rendered-height measurements for a card body.
pub trait Measure {
    /// Height of the full body text with no height constraint applied.
    fn natural_height(&self, card: &Card) -> f32;
    /// Maximum height of the body while collapsed.
    fn collapsed_budget(&self, card: &Card) -> Option<f32>;
}

/// Accordion over one group of cards: at most one body is expanded.
#[derive(Debug, Default)]
pub struct TruncationController {
    slack: f32,
    group: Vec<CardId>,
    open: Option<CardId>,
}

impl TruncationController {
    pub fn new(slack: f32) -> Self {
        Self {
            slack: slack.max(0.0),
            group: Vec::new(),
            open: None,
        }
    }

    pub fn open(&self) -> Option<CardId> {
        self.open
    }

    /// Re-derives truncation for `cards`, replacing previously injected toggles.
    pub fn apply<M: Measure>(&mut self, cards: &mut [Card], measure: &M) {
        self.group = cards.iter().map(|c| c.id).collect();
        self.open = None;

        for card in cards.iter_mut() {
            card.footer.retain(|item| !matches!(item, FooterItem::Toggle(_)));

            let natural = measure.natural_height(card);
            let budget = measure.collapsed_budget(card).unwrap_or(DEFAULT_BUDGET_PX);
            if natural <= budget + self.slack {
                card.body_state = BodyState::Unconstrained;
                continue;
            }

            card.body_state = BodyState::Collapsed;
            let toggle = FooterItem::Toggle(ToggleLabel::ReadMore);
            match card.footer.iter().position(|item| matches!(item, FooterItem::Link(_))) {
                Some(link_idx) => card.footer.insert(link_idx, toggle),
                None => card.footer.push(toggle),
            }
        }
    }

    /// Handles a click on `id`'s toggle. Returns false if the card has none.
    pub fn toggle(&mut self, cards: &mut [Card], id: CardId) -> bool {
        if !self.group.contains(&id) {
            return false;
        }
        let was_collapsed = match cards.iter().find(|c| c.id == id) {
            Some(card) if card.toggle().is_some() => card.body_state == BodyState::Collapsed,
            _ => return false,
        };

        for card in cards.iter_mut().filter(|c| self.group.contains(&c.id)) {
            if card.toggle().is_some() {
                card.body_state = BodyState::Collapsed;
                set_label(card, ToggleLabel::ReadMore);
            }
        }
        self.open = None;

        if was_collapsed {
            if let Some(card) = cards.iter_mut().find(|c| c.id == id) {
                card.body_state = BodyState::Expanded;
                set_label(card, ToggleLabel::ReadLess);
                self.open = Some(id);
            }
        }
        true
    }
}

fn set_label(card: &mut Card, label: ToggleLabel) {
    for item in card.footer.iter_mut() {
        if let FooterItem::Toggle(current) = item {
            *current = label;
        }
    }
}
