//! Bill split computation.
//!
//! A [`Split`] is built from the total bill, the part the user consumed, and
//! who paid.  It turns those into the signed delta that
//! [`Ledger::split_bill`](crate::core::ledger::Ledger::split_bill) applies to
//! the selected friend.

use std::fmt;

use thiserror::Error;

/// Who paid the whole bill upfront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Payer {
    #[default]
    User,
    Friend,
}

impl Payer {
    pub fn toggle(self) -> Self {
        match self {
            Payer::User => Payer::Friend,
            Payer::Friend => Payer::User,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SplitError {
    #[error("enter the bill value")]
    MissingBill,
    #[error("enter your expense")]
    MissingUserExpense,
    #[error("your expense ({expense}) exceeds the bill ({bill})")]
    ExpenseExceedsBill { expense: f64, bill: f64 },
    #[error("amount {0} is not a finite number")]
    NonFinite(f64),
}

/// A validated split of one bill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    bill: f64,
    user_expense: f64,
    payer: Payer,
}

impl Split {
    /// Validate the inputs.  Unset and zero amounts are both "missing".
    pub fn new(bill: Option<f64>, user_expense: Option<f64>, payer: Payer) -> Result<Self, SplitError> {
        let bill = present(bill).ok_or(SplitError::MissingBill)?;
        let user_expense = present(user_expense).ok_or(SplitError::MissingUserExpense)?;

        for v in [bill, user_expense] {
            if !v.is_finite() {
                return Err(SplitError::NonFinite(v));
            }
        }
        if user_expense > bill {
            return Err(SplitError::ExpenseExceedsBill {
                expense: user_expense,
                bill,
            });
        }

        Ok(Self {
            bill,
            user_expense,
            payer,
        })
    }

    pub fn bill(&self) -> f64 {
        self.bill
    }

    pub fn user_expense(&self) -> f64 {
        self.user_expense
    }

    pub fn payer(&self) -> Payer {
        self.payer
    }

    pub fn friend_expense(&self) -> f64 {
        self.bill - self.user_expense
    }

    /// Change to the friend's balance.  Positive when the user paid (the
    /// friend now owes their share), negative when the friend paid.
    pub fn delta(&self) -> f64 {
        match self.payer {
            Payer::User => self.friend_expense(),
            Payer::Friend => -self.user_expense,
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let who = match self.payer() {
            Payer::User => "you",
            Payer::Friend => "friend",
        };
        write!(f, "bill {} (yours {}), paid by {who}", self.bill(), self.user_expense())
    }
}

/// The friend's share as shown while the form is being filled in.  Empty
/// until a bill is entered; a missing user expense counts as zero.
pub fn friend_expense(bill: Option<f64>, user_expense: Option<f64>) -> Option<f64> {
    let bill = present(bill)?;
    Some(bill - user_expense.unwrap_or(0.0))
}

fn present(v: Option<f64>) -> Option<f64> {
    v.filter(|v| *v != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_pays_friend_owes_their_share() {
        let split = Split::new(Some(100.0), Some(30.0), Payer::User).unwrap();
        assert_eq!(split.friend_expense(), 70.0);
        assert_eq!(split.delta(), 70.0);
    }

    #[test]
    fn friend_pays_user_owes_their_share() {
        let split = Split::new(Some(100.0), Some(30.0), Payer::Friend).unwrap();
        assert_eq!(split.delta(), -30.0);
    }

    #[test]
    fn missing_or_zero_bill_is_rejected() {
        assert_eq!(
            Split::new(None, Some(30.0), Payer::User),
            Err(SplitError::MissingBill)
        );
        assert_eq!(
            Split::new(Some(0.0), Some(30.0), Payer::User),
            Err(SplitError::MissingBill)
        );
    }

    #[test]
    fn missing_or_zero_expense_is_rejected() {
        assert_eq!(
            Split::new(Some(100.0), None, Payer::User),
            Err(SplitError::MissingUserExpense)
        );
        assert_eq!(
            Split::new(Some(100.0), Some(0.0), Payer::Friend),
            Err(SplitError::MissingUserExpense)
        );
    }

    #[test]
    fn expense_above_bill_is_rejected() {
        assert_eq!(
            Split::new(Some(100.0), Some(150.0), Payer::User),
            Err(SplitError::ExpenseExceedsBill {
                expense: 150.0,
                bill: 100.0
            })
        );
    }

    #[test]
    fn whole_bill_on_user_leaves_friend_nothing() {
        let split = Split::new(Some(40.0), Some(40.0), Payer::User).unwrap();
        assert_eq!(split.delta(), 0.0);
    }

    #[test]
    fn preview_of_friend_expense() {
        assert_eq!(friend_expense(None, Some(10.0)), None);
        assert_eq!(friend_expense(Some(100.0), None), Some(100.0));
        assert_eq!(friend_expense(Some(100.0), Some(30.0)), Some(70.0));
    }

    #[test]
    fn display_describes_the_split() {
        let split = Split::new(Some(100.0), Some(30.0), Payer::Friend).unwrap();
        assert_eq!(split.to_string(), "bill 100 (yours 30), paid by friend");
    }

    #[test]
    fn payer_toggles() {
        assert_eq!(Payer::default(), Payer::User);
        assert_eq!(Payer::User.toggle(), Payer::Friend);
        assert_eq!(Payer::Friend.toggle(), Payer::User);
    }
}
