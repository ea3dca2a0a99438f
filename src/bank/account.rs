use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer account holding the chronological movement history.
///
/// Movements are signed amounts: positive entries are deposits, negative
/// entries are withdrawals. The list is append-only; display ordering is a
/// projection concern (see [`crate::bank::engine`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub owner: String,
    pub username: String,
    pub pin: u32,
    pub interest_rate: f64,
    pub movements: Vec<f64>,
}

impl Account {
    /// Creates an account for `owner`, deriving the login username.
    ///
    /// The owner name must contain at least one word.
    pub fn new(owner: impl Into<String>, pin: u32, interest_rate: f64) -> Self {
        let owner = owner.into();
        let username = derive_username(&owner);
        Self {
            id: Uuid::new_v4(),
            owner,
            username,
            pin,
            interest_rate,
            movements: Vec::new(),
        }
    }

    pub fn with_movements(mut self, movements: Vec<f64>) -> Self {
        self.movements = movements;
        self
    }

    /// Appends a deposit (positive entry) to the history.
    pub fn record_deposit(&mut self, amount: f64) {
        self.movements.push(amount);
    }

    /// Appends a withdrawal (negative entry) to the history.
    pub fn record_withdrawal(&mut self, amount: f64) {
        self.movements.push(-amount);
    }
}

/// Lowercased initials of each word in the owner's name, concatenated.
///
/// "Jonas Schmedtmann" becomes "js". Stable for the account's lifetime.
pub fn derive_username(owner: &str) -> String {
    owner
        .to_lowercase()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_initials_lowercased() {
        assert_eq!(derive_username("Jonas Schmedtmann"), "js");
        assert_eq!(derive_username("Steven Thomas Williams"), "stw");
        assert_eq!(derive_username("Sarah Smith"), "ss");
    }

    #[test]
    fn derivation_collapses_extra_whitespace() {
        assert_eq!(derive_username("  Jessica   Davis "), "jd");
    }

    #[test]
    fn new_account_starts_empty() {
        let account = Account::new("Jessica Davis", 2222, 1.5);
        assert_eq!(account.username, "jd");
        assert!(account.movements.is_empty());
    }

    #[test]
    fn recording_keeps_chronological_order() {
        let mut account = Account::new("Sarah Smith", 4444, 1.0);
        account.record_deposit(430.0);
        account.record_withdrawal(50.0);
        account.record_deposit(90.0);
        assert_eq!(account.movements, vec![430.0, -50.0, 90.0]);
    }
}
