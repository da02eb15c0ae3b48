//! In-memory ledger of friends and their running balances.
//!
//! The [`Ledger`] owns every [`Friend`] record plus the two pieces of UI
//! state the operations touch: which friend is selected and whether the
//! "add friend" form is open.  Records are only ever handed out by shared
//! reference, so a balance can change through [`Ledger::split_bill`] and
//! nothing else.

use std::fmt;

use thiserror::Error;

// ───────────────────────────────────────── ids ───────────────

/// Opaque identifier of a friend, unique within one ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FriendId(u64);

impl FriendId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ───────────────────────────────────────── records ───────────

/// A person with whom expenses are shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    /// Avatar URL.
    pub image: String,
    /// Net amount owed.  Negative: the user owes this friend.  Positive:
    /// this friend owes the user.
    pub balance: f64,
}

impl Friend {
    pub fn new(id: FriendId, name: impl Into<String>, image: impl Into<String>, balance: f64) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            balance,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("no friend with id {0}")]
    UnknownFriend(FriendId),
    #[error("duplicate friend id {0}")]
    DuplicateId(FriendId),
    #[error("no friend is selected")]
    NoSelection,
    #[error("amount {0} is not a finite number")]
    NonFiniteAmount(f64),
}

// ───────────────────────────────────────── ledger ────────────

#[derive(Debug, Clone)]
pub struct Ledger {
    friends: Vec<Friend>,
    selected: Option<FriendId>,
    add_form_open: bool,
    /// Next id handed out by `add_friend`.  Always above every id in use.
    next_id: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            friends: Vec::new(),
            selected: None,
            add_form_open: false,
            next_id: 1,
        }
    }

    /// Build a ledger from pre-existing records, keeping their order.
    pub fn from_friends(friends: Vec<Friend>) -> Result<Self, LedgerError> {
        let mut ledger = Self::new();
        for friend in friends {
            if ledger.get(friend.id).is_some() {
                return Err(LedgerError::DuplicateId(friend.id));
            }
            if !friend.balance.is_finite() {
                return Err(LedgerError::NonFiniteAmount(friend.balance));
            }
            ledger.next_id = ledger.next_id.max(friend.id.get().saturating_add(1));
            ledger.friends.push(friend);
        }
        Ok(ledger)
    }

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    pub fn get(&self, id: FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id == id)
    }

    pub fn position(&self, id: FriendId) -> Option<usize> {
        self.friends.iter().position(|f| f.id == id)
    }

    pub fn selected_id(&self) -> Option<FriendId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Friend> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn is_add_form_open(&self) -> bool {
        self.add_form_open
    }

    /// Append a new friend with a zero balance and close the add form.
    pub fn add_friend(&mut self, name: impl Into<String>, image: impl Into<String>) -> &Friend {
        let image = image.into();
        self.add_friend_with(name, |_| image)
    }

    /// Like [`Ledger::add_friend`], but the avatar URL is derived from the
    /// freshly assigned id.
    pub fn add_friend_with(
        &mut self,
        name: impl Into<String>,
        image: impl FnOnce(FriendId) -> String,
    ) -> &Friend {
        let id = FriendId(self.next_id);
        self.next_id += 1;

        let friend = Friend::new(id, name, image(id), 0.0);
        tracing::info!(id = %friend.id, name = %friend.name, "friend added");
        self.friends.push(friend);
        self.add_form_open = false;

        let idx = self.friends.len() - 1;
        &self.friends[idx]
    }

    pub fn toggle_add_form(&mut self) {
        self.add_form_open = !self.add_form_open;
    }

    /// Select `id`, or deselect it when it is already the selection.
    ///
    /// Returns the newly selected friend, or `None` after a deselect.  The
    /// add form is closed either way.
    pub fn select_friend(&mut self, id: FriendId) -> Result<Option<&Friend>, LedgerError> {
        let idx = self.position(id).ok_or(LedgerError::UnknownFriend(id))?;
        self.add_form_open = false;

        if self.selected == Some(id) {
            tracing::debug!(%id, "friend deselected");
            self.selected = None;
            return Ok(None);
        }

        tracing::debug!(%id, "friend selected");
        self.selected = Some(id);
        Ok(Some(&self.friends[idx]))
    }

    /// Apply `delta` to the selected friend's balance and clear the
    /// selection.  The sign convention belongs to the caller, see
    /// [`crate::core::split::Split::delta`].
    pub fn split_bill(&mut self, delta: f64) -> Result<&Friend, LedgerError> {
        let id = self.selected.ok_or(LedgerError::NoSelection)?;
        if !delta.is_finite() {
            return Err(LedgerError::NonFiniteAmount(delta));
        }
        let idx = self.position(id).ok_or(LedgerError::UnknownFriend(id))?;

        let friend = &mut self.friends[idx];
        let balance = friend.balance + delta;
        if !balance.is_finite() {
            return Err(LedgerError::NonFiniteAmount(balance));
        }
        friend.balance = balance;
        self.selected = None;

        tracing::info!(%id, delta, balance, "bill split");
        Ok(&self.friends[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clark() -> Friend {
        Friend::new(FriendId::new(118836), "Clark", "https://i.pravatar.cc/48?u=118836", -7.0)
    }

    #[test]
    fn add_friend_appends_with_zero_balance() {
        let mut ledger = Ledger::from_friends(vec![clark()]).unwrap();
        let id = ledger.add_friend("Dana", "https://i.pravatar.cc/48").id;

        assert_eq!(ledger.len(), 2);
        let added = &ledger.friends()[1];
        assert_eq!(added.id, id);
        assert_eq!(added.name, "Dana");
        assert_eq!(added.balance, 0.0);
        assert_ne!(id, FriendId::new(118836));
    }

    #[test]
    fn ids_are_assigned_past_seeded_ids() {
        let mut ledger = Ledger::from_friends(vec![clark()]).unwrap();
        let id = ledger.add_friend("Dana", "x").id;
        assert!(id.get() > 118836);
    }

    #[test]
    fn add_friend_closes_form() {
        let mut ledger = Ledger::new();
        ledger.toggle_add_form();
        assert!(ledger.is_add_form_open());
        ledger.add_friend("Dana", "x");
        assert!(!ledger.is_add_form_open());
    }

    #[test]
    fn add_friend_with_derives_image_from_id() {
        let mut ledger = Ledger::new();
        let friend = ledger.add_friend_with("Dana", |id| format!("https://i.pravatar.cc/48?={id}"));
        assert_eq!(friend.image, format!("https://i.pravatar.cc/48?={}", friend.id));
    }

    #[test]
    fn from_friends_rejects_duplicates() {
        let err = Ledger::from_friends(vec![clark(), clark()]).unwrap_err();
        assert_eq!(err, LedgerError::DuplicateId(FriendId::new(118836)));
    }

    #[test]
    fn selecting_twice_deselects() {
        let mut ledger = Ledger::from_friends(vec![clark()]).unwrap();
        let id = FriendId::new(118836);

        assert!(ledger.select_friend(id).unwrap().is_some());
        assert_eq!(ledger.selected_id(), Some(id));
        assert!(ledger.select_friend(id).unwrap().is_none());
        assert_eq!(ledger.selected_id(), None);
    }

    #[test]
    fn selecting_another_friend_switches() {
        let mut ledger = Ledger::new();
        let a = ledger.add_friend("A", "x").id;
        let b = ledger.add_friend("B", "x").id;

        ledger.select_friend(a).unwrap();
        ledger.select_friend(b).unwrap();
        assert_eq!(ledger.selected_id(), Some(b));
    }

    #[test]
    fn selecting_closes_add_form() {
        let mut ledger = Ledger::from_friends(vec![clark()]).unwrap();
        ledger.toggle_add_form();
        ledger.select_friend(FriendId::new(118836)).unwrap();
        assert!(!ledger.is_add_form_open());
    }

    #[test]
    fn selecting_unknown_id_is_an_error() {
        let mut ledger = Ledger::new();
        ledger.toggle_add_form();
        let err = ledger.select_friend(FriendId::new(42)).unwrap_err();
        assert_eq!(err, LedgerError::UnknownFriend(FriendId::new(42)));
        assert!(ledger.is_add_form_open());
    }

    #[test]
    fn split_applies_delta_and_clears_selection() {
        let mut ledger = Ledger::from_friends(vec![clark()]).unwrap();
        ledger.add_friend("Dana", "x");
        ledger.select_friend(FriendId::new(118836)).unwrap();

        let balance = ledger.split_bill(10.0).unwrap().balance;
        assert_eq!(balance, 3.0);
        assert_eq!(ledger.selected_id(), None);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.friends()[1].balance, 0.0);
    }

    #[test]
    fn split_without_selection_is_refused() {
        let mut ledger = Ledger::from_friends(vec![clark()]).unwrap();
        assert_eq!(ledger.split_bill(10.0).unwrap_err(), LedgerError::NoSelection);
        assert_eq!(ledger.friends()[0].balance, -7.0);
    }

    #[test]
    fn split_rejects_nan() {
        let mut ledger = Ledger::from_friends(vec![clark()]).unwrap();
        ledger.select_friend(FriendId::new(118836)).unwrap();
        assert!(matches!(
            ledger.split_bill(f64::NAN),
            Err(LedgerError::NonFiniteAmount(_))
        ));
        assert_eq!(ledger.selected_id(), Some(FriendId::new(118836)));
        assert_eq!(ledger.friends()[0].balance, -7.0);
    }
}
