use crate::config::{Config, PageContainers};
use crate::event::AppEvent;
use crate::github::types::Record;
use crate::page::{
    card_columns, measure_track, track_width, DocRect, GithubSection, PageInput, PageLayout,
    TextMetrics, Viewport, SIDE_INSET,
};
use crate::portfolio::card::{project_records, Card, CardId};
use crate::portfolio::carousel::{cards_per_page, CardGeometry, CarouselController};
use crate::portfolio::reveal::{intersection_ratio, Bounds, Intersection, IntersectionSupport, RevealController};
use crate::portfolio::source::{self, LoadState};
use crate::portfolio::truncation::TruncationController;
use crate::ui::{
    card_view::CardView,
    carousel_nav::CarouselNav,
    header_bar::HeaderBar,
    help_panel::HelpPanel,
    input::{self, Action},
    status_bar::StatusBar,
    theme, wrap_lines,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
    Frame,
};
use unicode_width::UnicodeWidthStr;

const HEADER_ROWS: u16 = 1;
const STATUS_ROWS: u16 = 1;
const HIGHLIGHTS_HEADING: &str = "Highlighted Projects";
const GITHUB_HEADING: &str = "More on GitHub";

pub struct App {
    pub config: Config,
    pub viewport: Viewport,
    pub highlights: Vec<Card>,
    pub repos: Vec<Card>,
    pub load_state: LoadState,
    pub reveal: RevealController,
    pub carousel: CarouselController,
    highlight_accordion: TruncationController,
    repo_accordion: TruncationController,

    pub scroll_y: u16,
    pub focus: Option<CardId>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, viewport: Viewport) -> Self {
        let highlights: Vec<Card> = config
            .highlights
            .iter()
            .enumerate()
            .map(|(i, h)| Card::from_highlight(CardId(i), h))
            .collect();

        let load_state = if containers_complete(&config.page) {
            LoadState::Loading
        } else {
            tracing::warn!(containers = ?config.page, "carousel containers missing, skipping fetch");
            LoadState::Unavailable
        };

        let support = if config.reveal.enabled {
            IntersectionSupport::Available
        } else {
            IntersectionSupport::Unavailable
        };

        let mut app = Self {
            reveal: RevealController::new(config.reveal.threshold),
            carousel: CarouselController::new(config.breakpoints),
            highlight_accordion: TruncationController::new(config.truncation.slack_px),
            repo_accordion: TruncationController::new(config.truncation.slack_px),
            config,
            viewport,
            highlights,
            repos: Vec::new(),
            load_state,
            scroll_y: 0,
            focus: None,
            show_help: false,
            should_quit: false,
        };

        for card in &app.highlights {
            app.reveal.register(card.id);
        }
        app.apply_highlight_truncation();
        app.reveal.start(support);
        app.observe_visibility();
        app
    }

    pub fn wants_fetch(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => {
                let action = input::map_key(key, self.show_help);
                self.handle_action(action);
            }
            AppEvent::Resize(cols, rows) => self.on_resize(cols, rows),
            AppEvent::ResizeSettled => self.on_resize_settled(),
            AppEvent::ReposLoaded(result) => self.on_repos_loaded(result),
        }
    }

    pub fn on_repos_loaded(&mut self, result: std::result::Result<Vec<Record>, String>) {
        let (state, records) = source::resolve(result, &self.config.highlighted_repo);
        if let LoadState::Failed(ref e) = state {
            tracing::warn!(error = %e, "showing repository load failure");
        }
        self.load_state = state;

        self.repos = project_records(&records, self.highlights.len());
        for card in &self.repos {
            self.reveal.register(card.id);
        }

        // Cards must be laid out before the carousel reads their geometry.
        let geometry = measure_track(self.viewport, self.per_page());
        self.apply_repo_truncation(geometry);
        if !self.repos.is_empty() {
            self.carousel.initialize(
                self.repos.len(),
                self.viewport_width_px(),
                geometry,
                &self.config.page,
            );
        }
        self.observe_visibility();
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.viewport = Viewport { cols, rows };
        self.clamp_scroll();
        self.observe_visibility();
    }

    pub fn on_resize_settled(&mut self) {
        let geometry = measure_track(self.viewport, self.per_page());
        self.carousel.recompute(self.viewport_width_px(), geometry);
        self.apply_highlight_truncation();
        self.apply_repo_truncation(geometry);
        self.clamp_scroll();
        self.observe_visibility();
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = true,
            Action::ClosePopup => self.show_help = false,
            Action::ScrollDown => self.scroll_by(1),
            Action::ScrollUp => self.scroll_by(-1),
            Action::PageDown => self.scroll_by(i32::from(self.body_rows().saturating_sub(1))),
            Action::PageUp => self.scroll_by(-i32::from(self.body_rows().saturating_sub(1))),
            Action::PrevSlide => {
                if self.carousel.previous() {
                    self.after_slide();
                }
            }
            Action::NextSlide => {
                if self.carousel.next() {
                    self.after_slide();
                }
            }
            Action::GoToSlide(page) => {
                if self.carousel.go_to_page(page) {
                    self.after_slide();
                }
            }
            Action::FocusNext => self.move_focus(1),
            Action::FocusPrev => self.move_focus(-1),
            Action::ToggleReadMore => self.toggle_focused(),
            Action::None => {}
        }
    }

    fn after_slide(&mut self) {
        let visible = self.visible_repo_ids();
        if let Some(id) = self.focus {
            if self.repos.iter().any(|c| c.id == id) && !visible.contains(&id) {
                self.focus = visible.first().copied();
            }
        }
        self.observe_visibility();
    }

    fn toggle_focused(&mut self) {
        let Some(id) = self.focus else {
            return;
        };
        let toggled = if self.highlights.iter().any(|c| c.id == id) {
            self.highlight_accordion.toggle(&mut self.highlights, id)
        } else {
            self.repo_accordion.toggle(&mut self.repos, id)
        };
        if toggled {
            self.clamp_scroll();
            self.observe_visibility();
        }
    }

    fn move_focus(&mut self, step: isize) {
        let focusable = self.focusable();
        if focusable.is_empty() {
            self.focus = None;
            return;
        }
        let next = match self.focus.and_then(|id| focusable.iter().position(|f| *f == id)) {
            Some(pos) => (pos as isize + step).rem_euclid(focusable.len() as isize) as usize,
            None if step < 0 => focusable.len() - 1,
            None => 0,
        };
        self.focus = Some(focusable[next]);
        if let Some(rect) = self.layout().card_rect(focusable[next]) {
            self.ensure_visible(rect);
        }
    }

    /// Revealed highlight cards plus the revealed cards on the current slide.
    fn focusable(&self) -> Vec<CardId> {
        self.highlights
            .iter()
            .map(|c| c.id)
            .chain(self.visible_repo_ids())
            .filter(|id| self.reveal.is_visible(*id))
            .collect()
    }

    fn visible_repo_ids(&self) -> Vec<CardId> {
        let range = self.carousel.view().visible_cards.clone();
        self.repos
            .get(range)
            .map(|cards| cards.iter().map(|c| c.id).collect())
            .unwrap_or_default()
    }

    pub fn focused_card(&self) -> Option<&Card> {
        let id = self.focus?;
        self.highlights
            .iter()
            .chain(&self.repos)
            .find(|c| c.id == id)
    }

    fn per_page(&self) -> usize {
        cards_per_page(self.viewport_width_px(), &self.config.breakpoints)
    }

    fn viewport_width_px(&self) -> u32 {
        self.viewport.width_px(&self.config.cell)
    }

    fn body_rows(&self) -> u16 {
        self.viewport.rows.saturating_sub(HEADER_ROWS + STATUS_ROWS)
    }

    fn apply_highlight_truncation(&mut self) {
        if self.highlights.is_empty() {
            return;
        }
        let per_row = self.per_page().clamp(1, self.highlights.len());
        let columns = card_columns(SIDE_INSET, track_width(self.viewport), per_row);
        let Some(first) = columns.first() else {
            return;
        };
        let metrics = TextMetrics::for_card_width(
            first.width,
            self.config.cell,
            self.config.truncation.collapsed_lines,
        );
        self.highlight_accordion.apply(&mut self.highlights, &metrics);
    }

    fn apply_repo_truncation(&mut self, geometry: Option<CardGeometry>) {
        let Some(geometry) = geometry else {
            return;
        };
        let metrics = TextMetrics::for_card_width(
            geometry.width as u16,
            self.config.cell,
            self.config.truncation.collapsed_lines,
        );
        self.repo_accordion.apply(&mut self.repos, &metrics);
    }

    fn about_lines(&self) -> Vec<String> {
        let mut lines = vec![self.config.name.clone()];
        let width = track_width(self.viewport) as usize;
        if !self.config.tagline.is_empty() {
            lines.extend(wrap_lines(&self.config.tagline, width));
        }
        lines
    }

    fn github_section(&self) -> GithubSection {
        match self.load_state {
            LoadState::Loaded(_) if self.carousel.is_active() => GithubSection::Carousel,
            LoadState::Unavailable if !self.config.page.loading => GithubSection::Hidden,
            _ => GithubSection::Message,
        }
    }

    pub fn layout(&self) -> PageLayout {
        let state = self.carousel.state();
        let view = self.carousel.view();
        PageLayout::compute(&PageInput {
            viewport: self.viewport,
            about_lines: self.about_lines().len() as u16,
            highlights: &self.highlights,
            repos: &self.repos,
            github: self.github_section(),
            per_page: state.map(|s| s.cards_per_page).unwrap_or_else(|| self.per_page()),
            card_advance: state.map(|s| s.card_advance).unwrap_or(0.0),
            offset: view.offset,
            nav_visible: view.controls_visible,
            cell: self.config.cell,
            collapsed_lines: self.config.truncation.collapsed_lines,
        })
    }

    /// Reports current card intersections to the reveal controller.
    pub fn observe_visibility(&mut self) {
        let layout = self.layout();
        let cell = self.config.cell;
        let viewport = DocRect {
            x: 0,
            y: self.scroll_y,
            width: self.viewport.cols,
            height: self.body_rows(),
        }
        .to_bounds(&cell);
        let margin = f32::from(self.config.reveal.bottom_margin_px);

        let mut entries: Vec<Intersection> = layout
            .highlight_cards
            .iter()
            .map(|(id, rect)| Intersection {
                id: *id,
                ratio: intersection_ratio(rect.to_bounds(&cell), viewport, margin),
            })
            .collect();

        if let Some(track) = layout.track {
            // The track clips cards on other slides.
            let clip = Bounds {
                x: f32::from(track.x) * f32::from(cell.width_px),
                width: f32::from(track.width) * f32::from(cell.width_px),
                ..viewport
            };
            entries.extend(layout.track_cards.iter().map(|(id, rect)| Intersection {
                id: *id,
                ratio: intersection_ratio(rect.to_bounds(&cell), clip, margin),
            }));
        }

        let revealed = self.reveal.observe(entries);
        if !revealed.is_empty() {
            tracing::debug!(?revealed, pending = self.reveal.pending_count(), "cards revealed");
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        let max = i32::from(self.layout().max_scroll(self.body_rows()));
        let next = (i32::from(self.scroll_y) + delta).clamp(0, max.max(0));
        self.scroll_y = next as u16;
        self.observe_visibility();
    }

    fn clamp_scroll(&mut self) {
        let max = self.layout().max_scroll(self.body_rows());
        self.scroll_y = self.scroll_y.min(max);
    }

    fn ensure_visible(&mut self, rect: DocRect) {
        let body = self.body_rows();
        if body == 0 {
            return;
        }
        if rect.y < self.scroll_y {
            self.scroll_y = rect.y;
        } else if rect.y + rect.height > self.scroll_y + body {
            self.scroll_y = (rect.y + rect.height).saturating_sub(body).min(rect.y);
        }
        self.observe_visibility();
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::vertical([
            Constraint::Length(HEADER_ROWS),
            Constraint::Min(1),
            Constraint::Length(STATUS_ROWS),
        ])
        .split(area);

        let repo_count = match self.load_state {
            LoadState::Loaded(n) => Some(n),
            _ => None,
        };
        frame.render_widget(
            HeaderBar {
                name: &self.config.name,
                owner: &self.config.owner,
                repo_count,
            },
            chunks[0],
        );

        let layout = self.layout();
        let doc_area = Rect::new(0, 0, area.width, layout.height.max(chunks[1].height));
        let mut doc = Buffer::empty(doc_area);
        self.render_document(&layout, &mut doc);

        let body = chunks[1];
        let buf = frame.buffer_mut();
        for row in 0..body.height {
            let src_y = self.scroll_y.saturating_add(row);
            if src_y >= doc_area.height {
                break;
            }
            for col in 0..body.width.min(doc_area.width) {
                buf[(body.x + col, body.y + row)] = doc[(col, src_y)].clone();
            }
        }

        let total = self.carousel.state().map(|s| s.total_pages).unwrap_or(0);
        let page = self
            .carousel
            .state()
            .filter(|_| total > 0)
            .map(|s| (s.current_page + 1, total));
        let max_scroll = layout.max_scroll(body.height);
        let scroll_percent = if max_scroll == 0 {
            100
        } else {
            (u32::from(self.scroll_y) * 100 / u32::from(max_scroll)) as u16
        };
        frame.render_widget(
            StatusBar {
                load_message: self.load_state.message(),
                load_failed: self.load_state.is_failure(),
                page,
                focused_title: self.focused_card().map(|c| c.title.as_str()),
                scroll_percent,
            },
            chunks[2],
        );

        if self.show_help {
            frame.render_widget(HelpPanel, area);
        }
    }

    fn render_document(&self, layout: &PageLayout, buf: &mut Buffer) {
        let width = buf.area.width;
        let heading = Style::default()
            .fg(theme::SECTION_HEADER_FG)
            .add_modifier(Modifier::BOLD);

        for (i, line) in self.about_lines().iter().enumerate() {
            let style = if i == 0 {
                Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::DIM_TEXT)
            };
            buf.set_line(SIDE_INSET, i as u16, &Line::from(Span::styled(line.as_str(), style)), width);
        }

        if !self.highlights.is_empty() {
            buf.set_line(
                SIDE_INSET,
                layout.highlights_heading,
                &Line::from(Span::styled(HIGHLIGHTS_HEADING, heading)),
                width,
            );
        }
        for card in &self.highlights {
            if let Some(rect) = layout.card_rect(card.id).and_then(DocRect::as_rect) {
                self.card_view(card).render(rect, buf);
            }
        }

        if let Some(y) = layout.github_heading {
            buf.set_line(SIDE_INSET, y, &Line::from(Span::styled(GITHUB_HEADING, heading)), width);
        }

        if let (Some(y), Some(msg)) = (layout.message_row, self.load_state.message()) {
            let fg = if self.load_state.is_failure() {
                theme::ERROR_FG
            } else {
                theme::DIM_TEXT
            };
            let x = width.saturating_sub(UnicodeWidthStr::width(msg) as u16) / 2;
            buf.set_line(x, y, &Line::from(Span::styled(msg, Style::default().fg(fg))), width);
        }

        if let Some(track) = layout.track {
            let range = self.carousel.view().visible_cards.clone();
            for card in self.repos.get(range).unwrap_or_default() {
                let Some(rect) = layout.card_rect(card.id).and_then(DocRect::as_rect) else {
                    continue;
                };
                if rect.x < track.x || rect.x >= track.right() {
                    continue;
                }
                // Column rounding can push the last card a cell past the track.
                let clipped = Rect {
                    width: rect.width.min(track.right() - rect.x),
                    ..rect
                };
                self.card_view(card).render(clipped, buf);
            }
            if let Some(y) = layout.nav_row {
                CarouselNav {
                    view: self.carousel.view(),
                    dots: self.carousel.dots(),
                }
                .render(Rect::new(track.x, y, track.width, 1), buf);
            }
        }
    }

    fn card_view<'a>(&self, card: &'a Card) -> CardView<'a> {
        CardView {
            card,
            revealed: self.reveal.is_visible(card.id),
            focused: self.focus == Some(card.id),
            collapsed_lines: self.config.truncation.collapsed_lines,
        }
    }
}

fn containers_complete(page: &PageContainers) -> bool {
    page.loading && page.track && page.prev && page.next && page.dots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::card::BodyState;
    use crate::portfolio::source::{EMPTY_MESSAGE, FAILED_MESSAGE, MISSING_STRUCTURE_MESSAGE};
    use crate::test_utils::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    /// 8 px cells: 87 cols is 696 px, 150 cols is 1200 px.
    const NARROW: Viewport = Viewport { cols: 87, rows: 60 };
    const WIDE: Viewport = Viewport { cols: 150, rows: 60 };

    fn app(viewport: Viewport) -> App {
        let config = Config {
            highlights: Vec::new(),
            ..Config::default()
        };
        App::new(config, viewport)
    }

    fn records(n: usize) -> Vec<Record> {
        (0..n).map(|i| make_record(&format!("repo-{i}"))).collect()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn page(app: &App) -> usize {
        app.carousel.state().unwrap().current_page
    }

    #[test]
    fn narrow_viewport_steps_through_seven_slides() {
        let mut app = app(NARROW);
        app.on_repos_loaded(Ok(records(7)));
        let state = *app.carousel.state().unwrap();
        assert_eq!(state.cards_per_page, 1);
        assert_eq!(state.total_pages, 7);

        for _ in 0..6 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(page(&app), 6);
        press(&mut app, KeyCode::Right);
        assert_eq!(page(&app), 6);
    }

    #[test]
    fn wide_viewport_shows_three_then_two() {
        let mut app = app(WIDE);
        app.on_repos_loaded(Ok(records(5)));
        let state = *app.carousel.state().unwrap();
        assert_eq!(state.cards_per_page, 3);
        assert_eq!(state.total_pages, 2);
        assert_eq!(app.carousel.view().visible_cards, 0..3);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.carousel.view().visible_cards, 3..5);
        assert!(app.carousel.view().next_disabled);
    }

    #[test]
    fn fetch_failure_shows_message_and_no_cards() {
        let mut app = app(WIDE);
        assert!(app.wants_fetch());
        app.on_repos_loaded(Err("connection refused".to_string()));
        assert_eq!(app.load_state.message(), Some(FAILED_MESSAGE));
        assert!(app.repos.is_empty());
        assert!(!app.carousel.is_active());
        assert!(app.layout().message_row.is_some());
        assert!(!app.wants_fetch());
    }

    #[test]
    fn all_filtered_shows_empty_message() {
        let mut app = app(WIDE);
        let mut fork = make_record("fork");
        fork.fork = true;
        app.on_repos_loaded(Ok(vec![
            fork,
            make_record("Neural-Machine-Translation-Eng-Arb"),
        ]));
        assert_eq!(app.load_state.message(), Some(EMPTY_MESSAGE));
        assert!(app.repos.is_empty());
        assert!(!app.carousel.is_active());
    }

    #[test]
    fn missing_containers_skip_fetch() {
        let config = Config {
            page: PageContainers {
                prev: false,
                ..PageContainers::default()
            },
            ..Config::default()
        };
        let app = App::new(config, WIDE);
        assert!(!app.wants_fetch());
        assert_eq!(app.load_state.message(), Some(MISSING_STRUCTURE_MESSAGE));
        assert_eq!(app.github_section(), GithubSection::Message);
    }

    #[test]
    fn cards_below_the_fold_reveal_on_scroll() {
        let config = Config {
            highlights: (0..6)
                .map(|i| crate::config::Highlight {
                    title: format!("h{i}"),
                    description: "short".to_string(),
                    tags: vec![],
                    link: None,
                })
                .collect(),
            ..Config::default()
        };
        let mut app = App::new(config, Viewport { cols: 87, rows: 12 });
        assert!(app.reveal.is_visible(CardId(0)));
        assert!(!app.reveal.is_visible(CardId(5)));

        for _ in 0..80 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert!(app.reveal.is_visible(CardId(5)));

        for _ in 0..80 {
            press(&mut app, KeyCode::Char('k'));
        }
        assert!(app.reveal.is_visible(CardId(5)));
    }

    #[test]
    fn other_slides_reveal_when_navigated_to() {
        let mut app = app(WIDE);
        app.on_repos_loaded(Ok(records(5)));
        let first = app.repos[0].id;
        let fourth = app.repos[3].id;
        assert!(app.reveal.is_visible(first));
        assert!(!app.reveal.is_visible(fourth));

        press(&mut app, KeyCode::Right);
        assert!(app.reveal.is_visible(fourth));
    }

    #[test]
    fn reveal_disabled_shows_everything() {
        let mut config = Config::default();
        config.reveal.enabled = false;
        let mut app = App::new(config, WIDE);
        app.on_repos_loaded(Ok(records(7)));
        assert!(app.repos.iter().all(|c| app.reveal.is_visible(c.id)));
    }

    #[test]
    fn enter_on_focused_card_is_an_accordion() {
        let mut app = app(WIDE);
        let mut recs = records(3);
        for r in &mut recs {
            r.description = Some("lorem ipsum dolor sit amet ".repeat(20));
        }
        app.on_repos_loaded(Ok(recs));
        assert!(app.repos.iter().all(|c| c.toggle().is_some()));

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.repos[0].body_state, BodyState::Expanded);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.repos[0].body_state, BodyState::Collapsed);
        assert_eq!(app.repos[1].body_state, BodyState::Expanded);
        let expanded = app
            .repos
            .iter()
            .filter(|c| c.body_state == BodyState::Expanded)
            .count();
        assert_eq!(expanded, 1);

        press(&mut app, KeyCode::Enter);
        assert!(app.repos.iter().all(|c| c.body_state == BodyState::Collapsed));
    }

    #[test]
    fn settled_resize_clamps_slide() {
        let mut app = app(NARROW);
        app.on_repos_loaded(Ok(records(7)));
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(page(&app), 6);

        app.handle_event(AppEvent::Resize(WIDE.cols, WIDE.rows));
        assert_eq!(page(&app), 6);
        app.handle_event(AppEvent::ResizeSettled);
        let state = *app.carousel.state().unwrap();
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.current_page, 2);
        assert_eq!(app.carousel.dots().len(), 3);
    }

    #[test]
    fn renders_failure_and_cards() {
        let mut app = app(WIDE);
        app.on_repos_loaded(Ok(records(5)));
        let backend = TestBackend::new(WIDE.cols, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buf = terminal.backend().buffer().clone();
        let text: String = (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains(GITHUB_HEADING));
        assert!(text.contains("repo 0"));
        assert!(text.contains("repo 2"));
        assert!(!text.contains("repo 3"));

        let mut failed = App::new(Config::default(), WIDE);
        failed.on_repos_loaded(Err("boom".to_string()));
        terminal.draw(|f| failed.render(f)).unwrap();
        let buf = terminal.backend().buffer().clone();
        let text: String = (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains(FAILED_MESSAGE));
    }
}
