//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use crate::config::AppConfig;
use crate::core::ledger::{FriendId, Ledger};
use crate::ui::friend_list::FriendListState;

use super::forms::{AddFriendForm, SplitBillForm};

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Main,
    Help,
}

/// Which pane receives key input in the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneFocus {
    #[default]
    List,
    Form,
}

/// Form currently shown next to the friend list, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenForm {
    AddFriend,
    SplitBill(FriendId),
}

pub struct AppState {
    /// Friends, balances, selection, and add-form visibility.
    pub ledger: Ledger,
    /// Cursor and scroll offset in the friend list.
    pub list_state: FriendListState,
    pub add_form: AddFriendForm,
    pub split_form: SplitBillForm,
    pub pane_focus: PaneFocus,
    pub active_view: ActiveView,
    pub config: AppConfig,
    /// Last validation or confirmation message, shown in the bottom bar.
    pub status_message: Option<String>,
    /// Controls the main event loop.
    pub should_quit: bool,
}

impl AppState {
    pub fn new(ledger: Ledger, config: AppConfig) -> Self {
        Self {
            ledger,
            list_state: FriendListState::default(),
            add_form: AddFriendForm::new(config.default_image.clone()),
            split_form: SplitBillForm::default(),
            pane_focus: PaneFocus::default(),
            active_view: ActiveView::default(),
            config,
            status_message: None,
            should_quit: false,
        }
    }

    /// The add form and the split form never show together: selecting a
    /// friend closes the add form inside the ledger.
    pub fn open_form(&self) -> Option<OpenForm> {
        if self.ledger.is_add_form_open() {
            Some(OpenForm::AddFriend)
        } else {
            self.ledger.selected_id().map(OpenForm::SplitBill)
        }
    }

    /// Id of the friend under the list cursor.
    pub fn cursor_friend(&self) -> Option<FriendId> {
        self.ledger.friends().get(self.list_state.selected).map(|f| f.id)
    }
}
