//! Input handling — maps key events to ledger operations.
//!
//! The friend list uses the configurable bindings from [`AppConfig`]; the
//! forms take raw text, so their keys are fixed.
//!
//! [`AppConfig`]: crate::config::AppConfig

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Action;
use crate::core::balance::BalanceStatus;
use crate::core::ledger::FriendId;

use super::forms::SplitBillForm;
use super::state::{ActiveView, AppState, OpenForm, PaneFocus};

/// Process a key event, dispatching based on the active view and focus.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Help => handle_help_key(state, key),
        ActiveView::Main => match (state.pane_focus, state.open_form()) {
            (PaneFocus::Form, Some(OpenForm::AddFriend)) => handle_add_form_key(state, key),
            (PaneFocus::Form, Some(OpenForm::SplitBill(_))) => handle_split_form_key(state, key),
            _ => handle_list_key(state, key),
        },
    }
}

// ── Intents ─────────────────────────────────────────────────────

/// Show or hide the add-friend form.  Opening it moves focus to the form.
pub fn toggle_add_form(state: &mut AppState) {
    state.ledger.toggle_add_form();
    state.pane_focus = if state.ledger.is_add_form_open() {
        PaneFocus::Form
    } else {
        PaneFocus::List
    };
}

/// Select a friend (or close it when already selected).  A fresh split
/// form is opened for a newly selected friend.
pub fn select_friend(state: &mut AppState, id: FriendId) {
    match state.ledger.select_friend(id) {
        Ok(Some(_)) => {
            state.split_form = SplitBillForm::default();
            state.pane_focus = PaneFocus::Form;
        }
        Ok(None) => state.pane_focus = PaneFocus::List,
        Err(e) => tracing::warn!("select_friend: {e}"),
    }
}

/// Validate the add-friend form and append the friend.
pub fn submit_add_friend(state: &mut AppState) {
    let (name, image) = match state.add_form.validate() {
        Ok(fields) => fields,
        Err(e) => {
            tracing::debug!("add friend rejected: {e}");
            state.status_message = Some(e.to_string());
            return;
        }
    };

    let friend = state
        .ledger
        .add_friend_with(name, |id| format!("{image}?={id}"));
    state.status_message = Some(format!("Added {}", friend.name));

    state.add_form.reset();
    state.list_state.selected = state.ledger.len() - 1;
    state.pane_focus = PaneFocus::List;
}

/// Validate the split form and apply it to the selected friend.  Without a
/// selection nothing is sent to the ledger.
pub fn submit_split(state: &mut AppState) {
    if state.ledger.selected_id().is_none() {
        return;
    }
    let split = match state.split_form.split() {
        Ok(split) => split,
        Err(e) => {
            tracing::debug!("split rejected: {e}");
            state.status_message = Some(e.to_string());
            return;
        }
    };

    match state.ledger.split_bill(split.delta()) {
        Ok(friend) => {
            tracing::debug!(%split, "split submitted");
            let message = BalanceStatus::of(friend.balance).message(&friend.name, &state.config.currency);
            state.status_message = Some(message);
            state.split_form = SplitBillForm::default();
            state.pane_focus = PaneFocus::List;
        }
        Err(e) => {
            tracing::warn!("split_bill: {e}");
            state.status_message = Some(e.to_string());
        }
    }
}

/// Close whichever form is open and return focus to the list.
fn close_open_form(state: &mut AppState) {
    match state.open_form() {
        Some(OpenForm::AddFriend) => toggle_add_form(state),
        Some(OpenForm::SplitBill(id)) => select_friend(state, id),
        None => {}
    }
    state.pane_focus = PaneFocus::List;
}

// ── Friend list (configurable bindings) ─────────────────────────

fn handle_list_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Home => {
            state.list_state.selected = 0;
            return;
        }
        KeyCode::End => {
            state.list_state.selected = state.ledger.len().saturating_sub(1);
            return;
        }
        _ => {}
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };
    state.status_message = None;

    match action {
        Action::Quit => state.should_quit = true,
        Action::ShowHelp => state.active_view = ActiveView::Help,
        Action::MoveUp => state.list_state.select_prev(),
        Action::MoveDown => state.list_state.select_next(state.ledger.len()),
        Action::SelectFriend => {
            if let Some(id) = state.cursor_friend() {
                select_friend(state, id);
            }
        }
        Action::ToggleAddForm => toggle_add_form(state),
        Action::FocusForm => {
            if state.open_form().is_some() {
                state.pane_focus = PaneFocus::Form;
            }
        }
        Action::CloseForm => close_open_form(state),
    }
}

// ── Forms (fixed keys) ──────────────────────────────────────────

fn is_text_input(key: KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            Some(ch)
        }
        _ => None,
    }
}

fn handle_add_form_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.pane_focus = PaneFocus::List,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            state.add_form.next_field();
        }
        KeyCode::Backspace => state.add_form.pop_char(),
        KeyCode::Enter => submit_add_friend(state),
        _ => {
            if let Some(ch) = is_text_input(key) {
                state.add_form.push_char(ch);
            }
        }
    }
}

fn handle_split_form_key(state: &mut AppState, key: KeyEvent) {
    use super::forms::SplitField;

    match key.code {
        KeyCode::Esc => state.pane_focus = PaneFocus::List,
        KeyCode::Tab | KeyCode::Down => state.split_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => state.split_form.prev_field(),
        KeyCode::Left | KeyCode::Right if state.split_form.focus == SplitField::Payer => {
            state.split_form.toggle_payer();
        }
        KeyCode::Char(' ') if state.split_form.focus == SplitField::Payer => {
            state.split_form.toggle_payer();
        }
        KeyCode::Backspace => state.split_form.pop_char(),
        KeyCode::Enter => submit_split(state),
        _ => {
            if let Some(ch) = is_text_input(key) {
                state.split_form.push_char(ch);
            }
        }
    }
}

// ── Help popup ──────────────────────────────────────────────────

fn handle_help_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
            state.active_view = ActiveView::Main;
        }
        _ => {}
    }
}
