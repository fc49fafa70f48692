use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    pub load_message: Option<&'a str>,
    pub load_failed: bool,
    /// (current, total) carousel page, 1-based for display.
    pub page: Option<(usize, usize)>,
    pub focused_title: Option<&'a str>,
    pub scroll_percent: u16,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::STATUS_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let sep = || {
            Span::styled(
                "\u{2502}",
                Style::default().fg(theme::BORDER_COLOR).bg(theme::STATUS_BG),
            )
        };

        let mut spans = vec![Span::styled(" ", bg)];

        if let Some(msg) = self.load_message {
            let fg = if self.load_failed {
                theme::ERROR_FG
            } else {
                theme::DIM_TEXT
            };
            spans.push(Span::styled(format!("{msg} "), Style::default().fg(fg).bg(theme::STATUS_BG)));
            spans.push(sep());
        }

        if let Some((current, total)) = self.page {
            spans.push(Span::styled(
                format!(" page {current}/{total} "),
                Style::default()
                    .fg(theme::ACCENT)
                    .bg(theme::STATUS_BG)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(sep());
        }

        if let Some(title) = self.focused_title {
            spans.push(Span::styled(format!(" {title} "), bg));
            spans.push(sep());
        }

        spans.push(Span::styled(
            format!(" {}% ", self.scroll_percent),
            Style::default().fg(theme::DIM_TEXT).bg(theme::STATUS_BG),
        ));

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
