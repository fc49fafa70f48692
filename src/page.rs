use crate::config::CellSize;
use crate::portfolio::card::{BodyState, Card, CardId};
use crate::portfolio::carousel::CardGeometry;
use crate::portfolio::reveal::Bounds;
use crate::portfolio::truncation::Measure;
use crate::ui::wrap_lines;
use ratatui::layout::{Constraint, Layout, Rect};

/// Horizontal space between neighbouring cards, in cells.
pub const CARD_GAP: u16 = 2;
/// Left/right inset of card rows from the terminal edge.
pub const SIDE_INSET: u16 = 2;
/// Border (2) + title + tags + actions.
pub const CARD_CHROME_ROWS: u16 = 5;
const SECTION_GAP: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn width_px(&self, cell: &CellSize) -> u32 {
        u32::from(self.cols) * u32::from(cell.width_px)
    }
}

/// Terminal text measurement for card bodies of a fixed inner width.
pub struct TextMetrics {
    pub inner_width: u16,
    pub cell: CellSize,
    pub collapsed_lines: u16,
}

impl TextMetrics {
    pub fn for_card_width(card_width: u16, cell: CellSize, collapsed_lines: u16) -> Self {
        Self {
            inner_width: card_width.saturating_sub(2),
            cell,
            collapsed_lines,
        }
    }

    pub fn body_lines(&self, card: &Card) -> usize {
        wrap_lines(&card.body, self.inner_width as usize).len()
    }
}

impl Measure for TextMetrics {
    fn natural_height(&self, card: &Card) -> f32 {
        self.body_lines(card) as f32 * f32::from(self.cell.height_px)
    }

    fn collapsed_budget(&self, _card: &Card) -> Option<f32> {
        Some(f32::from(self.collapsed_lines) * f32::from(self.cell.height_px))
    }
}

/// Column rects for `count` equal cards across `width`, starting at x = 0.
pub fn card_columns(x: u16, width: u16, count: usize) -> Vec<Rect> {
    if count == 0 || width == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::horizontal(constraints)
        .spacing(CARD_GAP)
        .split(Rect::new(x, 0, width, 1))
        .to_vec()
}

pub fn track_width(viewport: Viewport) -> u16 {
    viewport.cols.saturating_sub(SIDE_INSET * 2)
}

/// Lays out one page of the track and reads back the first card's
/// geometry, in cells.
pub fn measure_track(viewport: Viewport, per_page: usize) -> Option<CardGeometry> {
    let columns = card_columns(SIDE_INSET, track_width(viewport), per_page);
    let first = columns.first()?;
    if first.width == 0 {
        return None;
    }
    let gap = match columns.get(1) {
        Some(second) => second.x.saturating_sub(first.right()),
        None => CARD_GAP,
    };
    Some(CardGeometry {
        width: f32::from(first.width),
        margin: 0.0,
        gap: f32::from(gap),
    })
}

pub fn card_height(card: &Card, metrics: &TextMetrics) -> u16 {
    let natural = metrics.body_lines(card) as u16;
    let body = match card.body_state {
        BodyState::Collapsed => natural.min(metrics.collapsed_lines),
        BodyState::Unconstrained | BodyState::Expanded => natural,
    };
    CARD_CHROME_ROWS + body
}

/// Rectangle in document cells. `x` may run past the right edge for
/// carousel cards on other pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocRect {
    pub x: i32,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl DocRect {
    pub fn to_bounds(self, cell: &CellSize) -> Bounds {
        let cw = f32::from(cell.width_px);
        let ch = f32::from(cell.height_px);
        Bounds::new(
            self.x as f32 * cw,
            f32::from(self.y) * ch,
            f32::from(self.width) * cw,
            f32::from(self.height) * ch,
        )
    }

    pub fn as_rect(self) -> Option<Rect> {
        u16::try_from(self.x)
            .ok()
            .map(|x| Rect::new(x, self.y, self.width, self.height))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GithubSection {
    Hidden,
    Message,
    Carousel,
}

pub struct PageInput<'a> {
    pub viewport: Viewport,
    pub about_lines: u16,
    pub highlights: &'a [Card],
    pub repos: &'a [Card],
    pub github: GithubSection,
    pub per_page: usize,
    pub card_advance: f32,
    pub offset: f32,
    pub nav_visible: bool,
    pub cell: CellSize,
    pub collapsed_lines: u16,
}

#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub highlights_heading: u16,
    pub highlight_cards: Vec<(CardId, DocRect)>,
    pub github_heading: Option<u16>,
    pub message_row: Option<u16>,
    pub track: Option<Rect>,
    pub track_cards: Vec<(CardId, DocRect)>,
    pub nav_row: Option<u16>,
    pub height: u16,
}

impl PageLayout {
    pub fn compute(input: &PageInput<'_>) -> Self {
        let mut layout = PageLayout::default();
        let width = track_width(input.viewport);
        let mut y = input.about_lines + SECTION_GAP;

        if !input.highlights.is_empty() {
            layout.highlights_heading = y;
            y += 2;
            let per_row = input.per_page.clamp(1, input.highlights.len());
            let columns = card_columns(SIDE_INSET, width, per_row);
            for row in input.highlights.chunks(per_row) {
                let mut row_height = 0;
                for (card, col) in row.iter().zip(&columns) {
                    let metrics =
                        TextMetrics::for_card_width(col.width, input.cell, input.collapsed_lines);
                    let h = card_height(card, &metrics);
                    row_height = row_height.max(h);
                    layout.highlight_cards.push((
                        card.id,
                        DocRect {
                            x: i32::from(col.x),
                            y,
                            width: col.width,
                            height: h,
                        },
                    ));
                }
                y += row_height + SECTION_GAP;
            }
        }

        if input.github == GithubSection::Hidden {
            layout.height = y;
            return layout;
        }

        layout.github_heading = Some(y);
        y += 2;

        if input.github == GithubSection::Message || input.card_advance <= 0.0 {
            layout.message_row = Some(y);
            layout.height = y + 1 + SECTION_GAP;
            return layout;
        }

        let card_width = (input.card_advance as u16).saturating_sub(CARD_GAP);
        let metrics = TextMetrics::for_card_width(card_width, input.cell, input.collapsed_lines);
        let track_height = input
            .repos
            .iter()
            .map(|c| card_height(c, &metrics))
            .max()
            .unwrap_or(CARD_CHROME_ROWS);
        for (i, card) in input.repos.iter().enumerate() {
            let x = f32::from(SIDE_INSET) + i as f32 * input.card_advance - input.offset;
            layout.track_cards.push((
                card.id,
                DocRect {
                    x: x.round() as i32,
                    y,
                    width: card_width,
                    height: card_height(card, &metrics),
                },
            ));
        }
        layout.track = Some(Rect::new(SIDE_INSET, y, width, track_height));
        y += track_height;

        if input.nav_visible {
            layout.nav_row = Some(y);
            y += 1;
        }
        layout.height = y + SECTION_GAP;
        layout
    }

    pub fn card_rect(&self, id: CardId) -> Option<DocRect> {
        self.highlight_cards
            .iter()
            .chain(&self.track_cards)
            .find(|(card_id, _)| *card_id == id)
            .map(|(_, rect)| *rect)
    }

    pub fn max_scroll(&self, body_rows: u16) -> u16 {
        self.height.saturating_sub(body_rows)
    }
}
