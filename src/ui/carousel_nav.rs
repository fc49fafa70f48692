use crate::portfolio::carousel::{CarouselView, PageDot};
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

const PREV: &str = "\u{2039} prev";
const NEXT: &str = "next \u{203a}";

pub struct CarouselNav<'a> {
    pub view: &'a CarouselView,
    pub dots: &'a [PageDot],
}

fn button_style(disabled: bool) -> Style {
    if disabled {
        Style::default().fg(theme::DISABLED)
    } else {
        Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
    }
}

impl<'a> Widget for CarouselNav<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        if !self.view.controls_visible || area.height == 0 {
            return;
        }
        let area_w = area.width as usize;

        buf.set_line(
            area.x,
            area.y,
            &Line::from(Span::styled(PREV, button_style(self.view.prev_disabled))),
            area.width,
        );

        let next_w = UnicodeWidthStr::width(NEXT);
        if area_w > next_w {
            buf.set_line(
                area.x + (area_w - next_w) as u16,
                area.y,
                &Line::from(Span::styled(NEXT, button_style(self.view.next_disabled))),
                next_w as u16,
            );
        }

        let spans: Vec<Span> = self
            .dots
            .iter()
            .map(|dot| {
                if Some(dot.page) == self.view.active_dot {
                    Span::styled("\u{25cf} ", Style::default().fg(theme::ACCENT))
                } else {
                    Span::styled("\u{25cb} ", Style::default().fg(theme::DIM_TEXT))
                }
            })
            .collect();
        let dots_w = self.dots.len() * 2;
        let side = UnicodeWidthStr::width(PREV).max(next_w) + 1;
        if dots_w > 0 && dots_w + side * 2 <= area_w {
            let x = area.x + ((area_w - dots_w) / 2) as u16;
            buf.set_line(x, area.y, &Line::from(spans), dots_w as u16);
        }
    }
}
