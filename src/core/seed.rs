//! Sample friends loaded at startup unless `--empty` is passed.

use super::ledger::{Friend, FriendId};

/// Base URL for generated avatars.
pub const AVATAR_BASE: &str = "https://i.pravatar.cc/48";

pub fn sample_friends() -> Vec<Friend> {
    [(118836, "Clark", -7.0), (933372, "Sarah", 20.0), (499476, "Anthony", 0.0)]
        .into_iter()
        .map(|(id, name, balance)| {
            Friend::new(
                FriendId::new(id),
                name,
                format!("{AVATAR_BASE}?u={id}"),
                balance,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ledger::Ledger;

    #[test]
    fn sample_friends_form_a_valid_ledger() {
        let ledger = Ledger::from_friends(sample_friends()).unwrap();
        let names: Vec<&str> = ledger.friends().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Clark", "Sarah", "Anthony"]);
        assert_eq!(ledger.friends()[0].image, "https://i.pravatar.cc/48?u=118836");
    }
}
