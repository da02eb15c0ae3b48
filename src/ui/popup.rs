//! Help popup overlay listing the current key bindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::config::{Action, AppConfig};

/// Keys handled inside the forms, which are not configurable.
const FORM_KEYS: &[(&str, &str)] = &[
    ("Next / Prev Field", "Tab/Shift+Tab"),
    ("Change Payer", "←/→"),
    ("Submit Form", "Enter"),
    ("Back to List", "Esc"),
];

pub struct HelpPopup<'a> {
    pub config: &'a AppConfig,
}

impl<'a> Widget for HelpPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // actions + form keys + 2 headings + 4 blanks/hint + 2 border
        let height = (Action::ALL.len() + FORM_KEYS.len()) as u16 + 8;
        let popup = centered_fixed(52, height, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let heading = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let key_style = Style::default().fg(Color::Yellow);
        let dim = Style::default().fg(Color::DarkGray);
        let width = inner.width as usize;

        let row = |label: &str, keys: String| {
            let label_col = format!("   {label:<24}");
            let keys_width = width.saturating_sub(label_col.chars().count()).max(1);
            Line::from(vec![
                Span::raw(label_col),
                Span::styled(format!("{keys:>keys_width$}"), key_style),
            ])
        };

        let mut lines = vec![Line::from(Span::styled(" Friend list", heading))];
        for &action in Action::ALL {
            lines.push(row(action.label(), self.config.display_bindings(action)));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(" Forms", heading)));
        for &(label, keys) in FORM_KEYS {
            lines.push(row(label, keys.to_string()));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled("  Esc: close", dim)));

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
