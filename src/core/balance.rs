//! Classify a balance into "you owe", "owes you", or "even" and render the
//! message shown under each friend.

/// Sign of a balance together with its magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BalanceStatus {
    /// The user owes the friend this much.
    YouOwe(f64),
    /// The friend owes the user this much.
    OwesYou(f64),
    Even,
}

impl BalanceStatus {
    /// Amounts are compared at cent precision, so float residue such as
    /// `0.1 + 0.2 - 0.3` reads as even.
    pub fn of(balance: f64) -> Self {
        let cents = round_cents(balance);
        if cents < 0.0 {
            BalanceStatus::YouOwe(-cents)
        } else if cents > 0.0 {
            BalanceStatus::OwesYou(cents)
        } else {
            BalanceStatus::Even
        }
    }

    pub fn message(&self, name: &str, currency: &str) -> String {
        match *self {
            BalanceStatus::YouOwe(amount) => {
                format!("You owe {name} {}{currency}", format_amount(amount))
            }
            BalanceStatus::OwesYou(amount) => {
                format!("{name} owes you {}{currency}", format_amount(amount))
            }
            BalanceStatus::Even => format!("You are even with {name}"),
        }
    }
}

/// Render an amount without trailing zeros (`7`, `3.5`, `0.25`).
pub fn format_amount(amount: f64) -> String {
    let rounded = round_cents(amount);
    // Avoid printing "-0".
    if rounded == 0.0 {
        return "0".into();
    }
    format!("{rounded}")
}

/// Values this large have no fractional cents left to round, and scaling
/// them could overflow.
const ROUNDING_LIMIT: f64 = 1e15;

fn round_cents(v: f64) -> f64 {
    if v.abs() >= ROUNDING_LIMIT {
        return v;
    }
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_balance_means_user_owes() {
        let status = BalanceStatus::of(-7.0);
        assert_eq!(status, BalanceStatus::YouOwe(7.0));
        assert_eq!(status.message("Clark", "€"), "You owe Clark 7€");
    }

    #[test]
    fn positive_balance_means_friend_owes() {
        let status = BalanceStatus::of(20.0);
        assert_eq!(status.message("Sarah", "€"), "Sarah owes you 20€");
    }

    #[test]
    fn zero_balance_is_even() {
        assert_eq!(BalanceStatus::of(0.0).message("Anthony", "€"), "You are even with Anthony");
        assert_eq!(BalanceStatus::of(-0.0), BalanceStatus::Even);
    }

    #[test]
    fn float_residue_is_even() {
        assert_eq!(BalanceStatus::of(0.1 + 0.2 - 0.3), BalanceStatus::Even);
    }

    #[test]
    fn huge_balances_stay_finite() {
        let status = BalanceStatus::of(1.7e308);
        assert_eq!(status, BalanceStatus::OwesYou(1.7e308));
        assert!(!format_amount(-1.7e308).contains("inf"));
    }

    #[test]
    fn smallest_enterable_amount_is_not_even() {
        assert_eq!(BalanceStatus::of(0.01), BalanceStatus::OwesYou(0.01));
        assert_eq!(BalanceStatus::of(-0.01).message("Anthony", "€"), "You owe Anthony 0.01€");
    }

    #[test]
    fn amounts_drop_trailing_zeros() {
        assert_eq!(format_amount(3.0), "3");
        assert_eq!(format_amount(3.5), "3.5");
        assert_eq!(format_amount(0.1 + 0.2), "0.3");
        assert_eq!(format_amount(-0.001), "0");
    }
}
