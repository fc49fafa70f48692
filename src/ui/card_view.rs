use crate::portfolio::card::{BodyState, Card, FooterItem};
use crate::ui::{theme, truncate_with_ellipsis, wrap_lines};
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

pub struct CardView<'a> {
    pub card: &'a Card,
    pub revealed: bool,
    pub focused: bool,
    pub collapsed_lines: u16,
}

impl<'a> Widget for CardView<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        // Not yet scrolled into view: only a faint outline.
        if !self.revealed {
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::UNREVEALED_BORDER))
                .render(area, buf);
            return;
        }

        let border = if self.focused {
            theme::ACTIVE_BORDER
        } else {
            theme::BORDER_COLOR
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);

        let w = inner.width as usize;
        let mut y = inner.y;
        let bottom = inner.bottom();

        let title = truncate_with_ellipsis(&self.card.title, w);
        buf.set_line(
            inner.x,
            y,
            &Line::from(Span::styled(
                title,
                Style::default()
                    .fg(theme::SECTION_HEADER_FG)
                    .add_modifier(Modifier::BOLD),
            )),
            inner.width,
        );
        y += 1;

        let lines = wrap_lines(&self.card.body, w);
        let shown = match self.card.body_state {
            BodyState::Collapsed => lines.len().min(self.collapsed_lines as usize),
            BodyState::Unconstrained | BodyState::Expanded => lines.len(),
        };
        let cut = shown < lines.len();
        for (i, line) in lines.iter().take(shown).enumerate() {
            if y + 2 >= bottom {
                break;
            }
            let text = if cut && i + 1 == shown {
                truncate_with_ellipsis(&format!("{line} \u{2026}"), w)
            } else {
                line.clone()
            };
            buf.set_line(
                inner.x,
                y,
                &Line::from(Span::styled(text, Style::default().fg(theme::BODY_TEXT))),
                inner.width,
            );
            y += 1;
        }

        let tags_y = bottom.saturating_sub(2);
        let actions_y = bottom.saturating_sub(1);
        let tag_line = self.card.tag_line();
        if !tag_line.is_empty() && tags_y >= inner.y + 1 {
            buf.set_line(
                inner.x,
                tags_y,
                &Line::from(Span::styled(
                    truncate_with_ellipsis(&tag_line, w),
                    Style::default().fg(theme::TAG_COLOR),
                )),
                inner.width,
            );
        }

        let mut spans = Vec::new();
        for item in &self.card.footer {
            match item {
                FooterItem::Tags(_) => {}
                FooterItem::Toggle(label) => {
                    let mut style = Style::default()
                        .fg(theme::TOGGLE_COLOR)
                        .add_modifier(Modifier::BOLD);
                    if self.focused {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    spans.push(Span::styled(format!("[{}]", label.text()), style));
                    spans.push(Span::raw(" "));
                }
                FooterItem::Link(link) => {
                    spans.push(Span::styled(
                        format!("{} \u{2197}", link.label),
                        Style::default()
                            .fg(theme::LINK_COLOR)
                            .add_modifier(Modifier::UNDERLINED),
                    ));
                    spans.push(Span::raw(" "));
                }
            }
        }
        if !spans.is_empty() && actions_y > inner.y {
            buf.set_line(inner.x, actions_y, &Line::from(spans), inner.width);
        }
    }
}
