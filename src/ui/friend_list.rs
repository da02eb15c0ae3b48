//! Ratatui widget that renders the friends of a [`Ledger`] with their
//! balance messages.
//!
//! [`Ledger`]: crate::core::ledger::Ledger

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, StatefulWidget, Widget},
};

use crate::core::balance::BalanceStatus;
use crate::core::ledger::{Friend, FriendId};

use super::theme::Theme;

/// Screen rows used by one friend: name, avatar, balance.
const ROWS_PER_FRIEND: u16 = 3;

// ───────────────────────────────────────── state ─────────────

/// Cursor and scroll offset, both counted in friends.
#[derive(Debug, Default)]
pub struct FriendListState {
    pub selected: usize,
    pub offset: usize,
}

impl FriendListState {
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the cursor visible when `visible` friends fit on screen.
    pub fn clamp_scroll(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible {
            self.offset = self.selected - visible + 1;
        }
    }
}

// ───────────────────────────────────────── widget ────────────

pub struct FriendList<'a> {
    friends: &'a [Friend],
    selected_id: Option<FriendId>,
    currency: &'a str,
    block: Option<Block<'a>>,
    show_cursor: bool,
}

impl<'a> FriendList<'a> {
    pub fn new(friends: &'a [Friend], currency: &'a str) -> Self {
        Self {
            friends,
            selected_id: None,
            currency,
            block: None,
            show_cursor: true,
        }
    }

    /// Friend whose split form is open; gets the "Close" button.
    pub fn selected(mut self, id: Option<FriendId>) -> Self {
        self.selected_id = id;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn show_cursor(mut self, show: bool) -> Self {
        self.show_cursor = show;
        self
    }

    fn friend_lines(&self, friend: &Friend, at_cursor: bool, width: u16) -> [Line<'static>; 3] {
        let is_selected = self.selected_id == Some(friend.id);
        let marker = if at_cursor { "▸ " } else { "  " };
        let button = if is_selected { "[Close]" } else { "[Select]" };

        let name_style = if is_selected {
            Theme::active_friend_style().patch(Theme::name_style())
        } else {
            Theme::name_style()
        };
        let name_style = if at_cursor {
            name_style.patch(Theme::cursor_style())
        } else {
            name_style
        };

        let used = marker.chars().count() + friend.name.chars().count() + button.len();
        let pad = (width as usize).saturating_sub(used);

        let status = BalanceStatus::of(friend.balance);
        [
            Line::from(vec![
                Span::styled(marker, name_style),
                Span::styled(friend.name.clone(), name_style),
                Span::raw(" ".repeat(pad)),
                Span::styled(button, Theme::button_style()),
            ]),
            Line::from(Span::styled(format!("  {}", friend.image), Theme::image_style())),
            Line::from(Span::styled(
                format!("  {}", status.message(&friend.name, self.currency)),
                Theme::balance_style(status),
            )),
        ]
    }
}

impl<'a> StatefulWidget for FriendList<'a> {
    type State = FriendListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let inner = match self.block {
            Some(ref block) => {
                let inner = block.inner(area);
                block.clone().render(area, buf);
                inner
            }
            None => area,
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.friends.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No friends yet. Press a to add one.",
                Theme::hint_style(),
            )))
            .render(inner, buf);
            return;
        }

        state.selected = state.selected.min(self.friends.len() - 1);
        let visible = (inner.height / ROWS_PER_FRIEND).max(1) as usize;
        state.clamp_scroll(visible);

        let rows = self
            .friends
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(visible);

        for (i, (idx, friend)) in rows.enumerate() {
            let at_cursor = self.show_cursor && idx == state.selected;
            let top = inner.y + i as u16 * ROWS_PER_FRIEND;
            for (dy, line) in self.friend_lines(friend, at_cursor, inner.width).iter().enumerate() {
                let y = top + dy as u16;
                if y >= inner.y + inner.height {
                    break;
                }
                buf.set_line(inner.x, y, line, inner.width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_in_bounds() {
        let mut state = FriendListState::default();
        state.select_prev();
        assert_eq!(state.selected, 0);
        state.select_next(2);
        state.select_next(2);
        assert_eq!(state.selected, 1);
        state.select_next(0);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn scroll_follows_cursor() {
        let mut state = FriendListState {
            selected: 5,
            offset: 0,
        };
        state.clamp_scroll(3);
        assert_eq!(state.offset, 3);
        state.selected = 1;
        state.clamp_scroll(3);
        assert_eq!(state.offset, 1);
    }
}
