//! Input-side form models for "add friend" and "split a bill".
//!
//! These hold the raw text the user is typing and perform the boundary
//! checks (presence, numeric input, the expense clamp) before anything
//! reaches the [`Ledger`](crate::core::ledger::Ledger).

use thiserror::Error;

use crate::core::split::{self, Payer, Split, SplitError};

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("friend name is required")]
    EmptyName,
    #[error("image URL is required")]
    EmptyImage,
}

// ───────────────────────────────────────── add friend ────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddField {
    #[default]
    Name,
    Image,
}

#[derive(Debug, Clone)]
pub struct AddFriendForm {
    pub name: String,
    pub image: String,
    pub focus: AddField,
    default_image: String,
}

impl AddFriendForm {
    pub fn new(default_image: impl Into<String>) -> Self {
        let default_image = default_image.into();
        Self {
            name: String::new(),
            image: default_image.clone(),
            focus: AddField::default(),
            default_image,
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            AddField::Name => &mut self.name,
            AddField::Image => &mut self.image,
        }
    }

    pub fn push_char(&mut self, ch: char) {
        self.field_mut().push(ch);
    }

    pub fn pop_char(&mut self) {
        self.field_mut().pop();
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            AddField::Name => AddField::Image,
            AddField::Image => AddField::Name,
        };
    }

    /// Trimmed `(name, image)`, or the first missing field.
    pub fn validate(&self) -> Result<(String, String), FormError> {
        let name = self.name.trim();
        let image = self.image.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }
        if image.is_empty() {
            return Err(FormError::EmptyImage);
        }
        Ok((name.to_string(), image.to_string()))
    }

    /// Clear the name and restore the default image.
    pub fn reset(&mut self) {
        self.name.clear();
        self.image = self.default_image.clone();
        self.focus = AddField::Name;
    }
}

// ───────────────────────────────────────── split bill ────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitField {
    #[default]
    Bill,
    UserExpense,
    Payer,
}

impl SplitField {
    const ORDER: [SplitField; 3] = [SplitField::Bill, SplitField::UserExpense, SplitField::Payer];

    fn step(self, forward: bool) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let len = Self::ORDER.len();
        let next = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
        Self::ORDER[next]
    }
}

#[derive(Debug, Clone, Default)]
pub struct SplitBillForm {
    bill: String,
    user_expense: String,
    pub payer: Payer,
    pub focus: SplitField,
}

impl SplitBillForm {
    pub fn bill_text(&self) -> &str {
        &self.bill
    }

    pub fn user_expense_text(&self) -> &str {
        &self.user_expense
    }

    pub fn bill(&self) -> Option<f64> {
        parse_amount(&self.bill).flatten()
    }

    pub fn user_expense(&self) -> Option<f64> {
        parse_amount(&self.user_expense).flatten()
    }

    /// Derived, never stored.
    pub fn friend_expense(&self) -> Option<f64> {
        split::friend_expense(self.bill(), self.user_expense())
    }

    /// Replace the bill text.  Non-numeric input is ignored.
    pub fn set_bill(&mut self, text: &str) -> bool {
        if parse_amount(text).is_none() {
            return false;
        }
        self.bill = text.to_string();
        true
    }

    /// Replace the user's expense.  Ignored, keeping the previous value,
    /// when the text is not numeric or exceeds the current bill.
    pub fn set_user_expense(&mut self, text: &str) -> bool {
        let Some(value) = parse_amount(text) else {
            return false;
        };
        let bill = self.bill().unwrap_or(0.0);
        if value.unwrap_or(0.0) > bill {
            tracing::debug!(expense = text, bill, "expense above bill ignored");
            return false;
        }
        self.user_expense = text.to_string();
        true
    }

    /// Type a character into the focused field.  Returns whether the
    /// edit was accepted.
    pub fn push_char(&mut self, ch: char) -> bool {
        match self.focus {
            SplitField::Bill => {
                let text = format!("{}{ch}", self.bill);
                self.set_bill(&text)
            }
            SplitField::UserExpense => {
                let text = format!("{}{ch}", self.user_expense);
                self.set_user_expense(&text)
            }
            SplitField::Payer => false,
        }
    }

    pub fn pop_char(&mut self) {
        match self.focus {
            SplitField::Bill => {
                self.bill.pop();
            }
            SplitField::UserExpense => {
                self.user_expense.pop();
            }
            SplitField::Payer => {}
        }
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.step(true);
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.step(false);
    }

    pub fn toggle_payer(&mut self) {
        self.payer = self.payer.toggle();
    }

    pub fn split(&self) -> Result<Split, SplitError> {
        Split::new(self.bill(), self.user_expense(), self.payer)
    }
}

/// Whole-unit digits accepted in an amount.
const MAX_WHOLE_DIGITS: usize = 12;
/// Amounts are entered in cents at most.
const MAX_FRACTION_DIGITS: usize = 2;

/// `Some(None)` for empty text, `Some(Some(v))` for a non-negative decimal,
/// `None` for anything else.  Only digits and a single `.` are accepted, so
/// `inf`, `nan`, signs and exponents never parse.  At most two decimals
/// keep every balance a whole number of cents.
fn parse_amount(text: &str) -> Option<Option<f64>> {
    if text.is_empty() {
        return Some(None);
    }
    let digits_only = text.chars().all(|c| c.is_ascii_digit() || c == '.');
    if !digits_only || text.matches('.').count() > 1 {
        return None;
    }
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    if whole.len() > MAX_WHOLE_DIGITS || fraction.len() > MAX_FRACTION_DIGITS {
        return None;
    }
    if text == "." {
        return Some(Some(0.0));
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite()).map(Some)
}
