//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! Rendering only reads the ledger; every mutation goes through
//! [`crate::app::handler`].

pub mod forms;
pub mod friend_list;
pub mod layout;
pub mod popup;
pub mod theme;

use ratatui::{
    layout::Alignment,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::state::{ActiveView, AppState, OpenForm, PaneFocus};

use self::forms::{AddFriendFormWidget, SplitBillFormWidget};
use self::friend_list::FriendList;
use self::layout::AppLayout;
use self::popup::HelpPopup;
use self::theme::Theme;

/// Draw one full frame from the current state.
pub fn draw(frame: &mut Frame, state: &mut AppState) {
    let layout = AppLayout::from_area(frame.area());
    let list_focused = state.pane_focus == PaneFocus::List || state.open_form().is_none();

    let list_block = Block::default()
        .title(format!(" Friends ({}) ", state.ledger.len()))
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style(list_focused));
    let list = FriendList::new(state.ledger.friends(), &state.config.currency)
        .selected(state.ledger.selected_id())
        .show_cursor(list_focused)
        .block(list_block);
    frame.render_stateful_widget(list, layout.list_area, &mut state.list_state);

    let footer_label = if state.ledger.is_add_form_open() {
        " Close "
    } else {
        " Add friend "
    };
    frame.render_widget(
        Paragraph::new(Span::styled(footer_label, Theme::button_style())).alignment(Alignment::Right),
        layout.list_footer_area,
    );

    let form_block = |title: &'static str| {
        Block::default()
            .title(title)
            .title_style(Theme::title_style())
            .borders(Borders::ALL)
            .border_style(Theme::border_style(!list_focused))
    };
    match state.open_form() {
        Some(OpenForm::AddFriend) => frame.render_widget(
            AddFriendFormWidget {
                form: &state.add_form,
                has_focus: !list_focused,
                block: form_block(" Add friend "),
            },
            layout.form_area,
        ),
        Some(OpenForm::SplitBill(id)) => {
            let name = state.ledger.get(id).map(|f| f.name.as_str()).unwrap_or_default();
            frame.render_widget(
                SplitBillFormWidget {
                    form: &state.split_form,
                    friend_name: name,
                    has_focus: !list_focused,
                    block: form_block(" Split bill "),
                },
                layout.form_area,
            );
        }
        None => frame.render_widget(
            Paragraph::new("Select a friend to split a bill, or press a to add one.")
                .style(Theme::hint_style())
                .block(Block::default().borders(Borders::ALL).border_style(Theme::border_style(false))),
            layout.form_area,
        ),
    }

    let hint = state.config.status_bar_hint();
    let status_text = state.status_message.as_deref().unwrap_or(&hint);
    frame.render_widget(
        Paragraph::new(status_text).style(Theme::status_bar_style()),
        layout.status_area,
    );

    if state.active_view == ActiveView::Help {
        frame.render_widget(HelpPopup { config: &state.config }, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::app::handler;
    use crate::config::AppConfig;
    use crate::core::ledger::{FriendId, Ledger};
    use crate::core::seed::sample_friends;

    fn state() -> AppState {
        AppState::new(Ledger::from_friends(sample_friends()).unwrap(), AppConfig::default())
    }

    fn render(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| draw(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn footer_row(state: &mut AppState) -> String {
        let footer = AppLayout::from_area(ratatui::layout::Rect::new(0, 0, 100, 24)).list_footer_area;
        let screen = render(state);
        let line = screen.lines().nth(footer.y as usize).unwrap_or_default();
        line.chars().take(footer.width as usize).collect()
    }

    #[test]
    fn footer_button_follows_add_form() {
        let mut s = state();
        let closed = footer_row(&mut s);
        assert!(closed.contains("Add friend"));
        assert!(!closed.contains("Close"));

        handler::toggle_add_form(&mut s);
        let open = footer_row(&mut s);
        assert!(open.contains("Close"));
        assert!(!open.contains("Add friend"));

        handler::toggle_add_form(&mut s);
        assert!(footer_row(&mut s).contains("Add friend"));
    }

    #[test]
    fn list_shows_balance_messages() {
        let screen = render(&mut state());
        assert!(screen.contains("You owe Clark 7€"));
        assert!(screen.contains("Sarah owes you 20€"));
        assert!(screen.contains("You are even with Anthony"));
        assert!(screen.contains("Friends (3)"));
        assert!(screen.contains("[Select]"));
    }

    #[test]
    fn split_form_shows_derived_friend_expense() {
        let mut s = state();
        handler::select_friend(&mut s, FriendId::new(933372));
        s.split_form.set_bill("100");
        s.split_form.set_user_expense("30");

        let screen = render(&mut s);
        assert!(screen.contains("Split a bill with Sarah"));
        assert!(screen.contains("Sarah's expense"));
        assert!(screen.contains("70"));
        assert!(screen.contains("[Close]"));
    }

    #[test]
    fn add_form_renders_default_image() {
        let mut s = state();
        handler::toggle_add_form(&mut s);
        let screen = render(&mut s);
        assert!(screen.contains("Friend name"));
        assert!(screen.contains("https://i.pravatar.cc/48"));
    }

    #[test]
    fn status_message_replaces_hint() {
        let mut s = state();
        s.status_message = Some("enter the bill value".into());
        let screen = render(&mut s);
        assert!(screen.contains("enter the bill value"));
        assert!(!screen.contains("add friend |"));
    }

    #[test]
    fn help_popup_lists_bindings() {
        let mut s = state();
        s.active_view = ActiveView::Help;
        let screen = render(&mut s);
        assert!(screen.contains("Friend list"));
        assert!(screen.contains("Select / Close Friend"));
    }

    #[test]
    fn empty_ledger_shows_hint() {
        let mut s = AppState::new(Ledger::new(), AppConfig::default());
        let screen = render(&mut s);
        assert!(screen.contains("No friends yet"));
    }
}
