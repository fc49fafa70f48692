use crate::config::{Breakpoints, PageContainers};
use crate::error::{FolioError, Result};
use std::ops::Range;

pub fn cards_per_page(viewport_width_px: u32, breakpoints: &Breakpoints) -> usize {
    if viewport_width_px <= breakpoints.mobile {
        1
    } else if viewport_width_px <= breakpoints.tablet {
        2
    } else {
        3
    }
}

pub fn total_pages(card_count: usize, cards_per_page: usize) -> usize {
    if cards_per_page == 0 {
        return 0;
    }
    card_count.div_ceil(cards_per_page)
}

/// Measured size of the first laid-out card in the track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardGeometry {
    pub width: f32,
    pub margin: f32,
    pub gap: f32,
}

impl CardGeometry {
    pub fn advance(&self) -> f32 {
        self.width + self.margin + self.gap
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselState {
    pub cards_per_page: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub card_advance: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDot {
    pub page: usize,
    pub label: String,
}

/// Result of the last render: what the presentation layer should draw.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CarouselView {
    pub offset: f32,
    pub active_dot: Option<usize>,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub controls_visible: bool,
    pub visible_cards: Range<usize>,
}

pub struct CarouselController {
    breakpoints: Breakpoints,
    card_count: usize,
    state: Option<CarouselState>,
    dots: Vec<PageDot>,
    view: CarouselView,
}

impl CarouselController {
    pub fn new(breakpoints: Breakpoints) -> Self {
        Self {
            breakpoints,
            card_count: 0,
            state: None,
            dots: Vec::new(),
            view: CarouselView::default(),
        }
    }

    /// Sets up pagination over `card_count` cards. On an empty list or a
    /// missing container the carousel stays inert with navigation hidden.
    pub fn initialize(
        &mut self,
        card_count: usize,
        viewport_width_px: u32,
        geometry: Option<CardGeometry>,
        containers: &PageContainers,
    ) -> bool {
        if let Err(e) = check_containers(containers) {
            tracing::warn!(error = %e, "skipping carousel setup");
            self.reset();
            return false;
        }
        if card_count == 0 {
            tracing::info!("skipping carousel setup: no cards");
            self.reset();
            return false;
        }

        self.card_count = card_count;
        self.state = Some(self.compute(viewport_width_px, geometry, 0));
        self.build_dots();
        self.render();
        tracing::debug!(state = ?self.state, "carousel initialized");
        true
    }

    /// Layout recomputation after the viewport has settled on a new size.
    pub fn recompute(&mut self, viewport_width_px: u32, geometry: Option<CardGeometry>) {
        let Some(old) = self.state else {
            return;
        };
        let new = self.compute(viewport_width_px, geometry, old.current_page);
        self.state = Some(new);
        if new.total_pages != old.total_pages {
            self.build_dots();
        }
        tracing::debug!(
            cards_per_page = new.cards_per_page,
            total_pages = new.total_pages,
            current_page = new.current_page,
            "carousel recomputed"
        );
        self.render();
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        match self.state.as_mut() {
            Some(state) if page < state.total_pages => {
                state.current_page = page;
            }
            _ => return false,
        }
        self.render();
        true
    }

    pub fn next(&mut self) -> bool {
        match self.state {
            Some(state) if state.current_page + 1 < state.total_pages => {
                self.go_to_page(state.current_page + 1)
            }
            _ => false,
        }
    }

    pub fn previous(&mut self) -> bool {
        match self.state {
            Some(state) if state.current_page > 0 => self.go_to_page(state.current_page - 1),
            _ => false,
        }
    }

    pub fn state(&self) -> Option<&CarouselState> {
        self.state.as_ref()
    }

    pub fn view(&self) -> &CarouselView {
        &self.view
    }

    pub fn dots(&self) -> &[PageDot] {
        &self.dots
    }

    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    fn compute(
        &self,
        viewport_width_px: u32,
        geometry: Option<CardGeometry>,
        current_page: usize,
    ) -> CarouselState {
        let per_page = cards_per_page(viewport_width_px, &self.breakpoints);
        let pages = total_pages(self.card_count, per_page);
        CarouselState {
            cards_per_page: per_page,
            total_pages: pages,
            current_page: current_page.min(pages.saturating_sub(1)),
            card_advance: geometry.map(|g| g.advance()).unwrap_or(0.0),
        }
    }

    fn build_dots(&mut self) {
        let pages = self.state.map(|s| s.total_pages).unwrap_or(0);
        self.dots = if pages > 1 {
            (0..pages)
                .map(|page| PageDot {
                    page,
                    label: format!("Go to slide {}", page + 1),
                })
                .collect()
        } else {
            Vec::new()
        };
    }

    fn render(&mut self) {
        let Some(state) = self.state else {
            self.view = CarouselView::default();
            return;
        };
        if state.total_pages == 0 || state.card_advance <= 0.0 {
            self.view = CarouselView::default();
            return;
        }

        let per_page = state.cards_per_page.max(1);
        let first = state.current_page * per_page;
        self.view = CarouselView {
            offset: (state.current_page * per_page) as f32 * state.card_advance,
            active_dot: self.dots.iter().position(|d| d.page == state.current_page),
            prev_disabled: state.current_page == 0,
            next_disabled: state.current_page + 1 >= state.total_pages,
            controls_visible: state.total_pages > 1,
            visible_cards: first..(first + per_page).min(self.card_count),
        };
    }

    fn reset(&mut self) {
        self.card_count = 0;
        self.state = None;
        self.dots.clear();
        self.view = CarouselView::default();
    }
}

fn check_containers(containers: &PageContainers) -> Result<()> {
    let required = [
        ("track", containers.track),
        ("prev", containers.prev),
        ("next", containers.next),
        ("dots", containers.dots),
    ];
    match required.iter().find(|(_, present)| !present) {
        Some((name, _)) => Err(FolioError::MissingContainer(*name)),
        None => Ok(()),
    }
}
