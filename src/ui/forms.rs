//! Widgets for the add-friend and split-bill forms.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::app::forms::{AddField, AddFriendForm, SplitBillForm, SplitField};
use crate::core::balance::format_amount;
use crate::core::split::Payer;

use super::theme::Theme;

fn field_lines(label: &str, value: &str, focused: bool, cursor: bool) -> [Line<'static>; 2] {
    let marker = if focused { "▸ " } else { "  " };
    let caret = if focused && cursor { "▏" } else { "" };
    [
        Line::from(Span::styled(format!("{marker}{label}"), Theme::label_style())),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{value}{caret}"), Theme::input_style(focused)),
        ]),
    ]
}

fn render_in_block(block: Block<'_>, lines: Vec<Line<'static>>, area: Rect, buf: &mut Buffer) {
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(inner, buf);
}

// ───────────────────────────────────────── add friend ────────

pub struct AddFriendFormWidget<'a> {
    pub form: &'a AddFriendForm,
    pub has_focus: bool,
    pub block: Block<'a>,
}

impl<'a> Widget for AddFriendFormWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focus = |field: AddField| self.has_focus && self.form.focus == field;
        let mut lines = vec![Line::raw("")];
        lines.extend(field_lines("Friend name", &self.form.name, focus(AddField::Name), true));
        lines.push(Line::raw(""));
        lines.extend(field_lines("Image URL", &self.form.image, focus(AddField::Image), true));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(" Add ", Theme::button_style())));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Tab: next field  Enter: add  Esc: back to list",
            Theme::hint_style(),
        )));

        render_in_block(self.block, lines, area, buf);
    }
}

// ───────────────────────────────────────── split bill ────────

pub struct SplitBillFormWidget<'a> {
    pub form: &'a SplitBillForm,
    pub friend_name: &'a str,
    pub has_focus: bool,
    pub block: Block<'a>,
}

impl<'a> Widget for SplitBillFormWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focus = |field: SplitField| self.has_focus && self.form.focus == field;
        let friend_expense = self.form.friend_expense().map(format_amount).unwrap_or_default();

        let mut lines = vec![
            Line::from(Span::styled(
                format!("Split a bill with {}", self.friend_name),
                Theme::title_style(),
            )),
            Line::raw(""),
        ];
        lines.extend(field_lines("Bill value", self.form.bill_text(), focus(SplitField::Bill), true));
        lines.extend(field_lines(
            "Your expense",
            self.form.user_expense_text(),
            focus(SplitField::UserExpense),
            true,
        ));
        lines.push(Line::from(Span::styled(
            format!("  {}'s expense", self.friend_name),
            Theme::disabled_style(),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {friend_expense}"),
            Theme::disabled_style(),
        )));

        let payer = match self.form.payer {
            Payer::User => "You".to_string(),
            Payer::Friend => self.friend_name.to_string(),
        };
        lines.extend(field_lines(
            "Who is paying the bill?",
            &format!("◂ {payer} ▸"),
            focus(SplitField::Payer),
            false,
        ));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(" Split bill ", Theme::button_style())));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Tab: next field  ←/→: payer  Enter: split  Esc: back to list",
            Theme::hint_style(),
        )));

        render_in_block(self.block, lines, area, buf);
    }
}
