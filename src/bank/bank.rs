use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::Account;

/// The active account set.
///
/// Seeded once at startup; accounts are only ever removed (by closing),
/// never created, while the process runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bank {
    pub accounts: Vec<Account>,
}

impl Bank {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// The four demo accounts every session starts from.
    pub fn demo() -> Self {
        Self::new(vec![
            Account::new("Jonas Schmedtmann", 1111, 1.2).with_movements(vec![
                200.0, 450.0, -400.0, 3000.0, -650.0, -130.0, 70.0, 1300.0,
            ]),
            Account::new("Jessica Davis", 2222, 1.5).with_movements(vec![
                5000.0, 3400.0, -150.0, -790.0, -3210.0, -1000.0, 8500.0, -30.0,
            ]),
            Account::new("Steven Thomas Williams", 3333, 0.7).with_movements(vec![
                200.0, -200.0, 340.0, -300.0, -20.0, 50.0, 400.0, -460.0,
            ]),
            Account::new("Sarah Smith", 4444, 1.0)
                .with_movements(vec![430.0, 1000.0, 700.0, 50.0, 90.0]),
        ])
    }

    /// Linear scan by username; with duplicate derived usernames the first
    /// seeded account wins.
    pub fn find_by_username(&self, username: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.username == username)
    }

    pub fn find_by_username_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.username == username)
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn account_mut(&mut self, id: Uuid) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    /// Removes an account permanently. Every other account keeps its
    /// identity; there is no soft delete or undo.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.accounts.len();
        self.accounts.retain(|account| account.id != id);
        self.accounts.len() != before
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_bank_has_four_accounts_with_derived_usernames() {
        let bank = Bank::demo();
        assert_eq!(bank.len(), 4);
        let usernames: Vec<&str> = bank
            .accounts
            .iter()
            .map(|account| account.username.as_str())
            .collect();
        assert_eq!(usernames, vec!["js", "jd", "stw", "ss"]);
    }

    #[test]
    fn lookup_misses_return_none() {
        let bank = Bank::demo();
        assert!(bank.find_by_username("zz").is_none());
    }

    #[test]
    fn duplicate_usernames_resolve_to_the_first_seeded_account() {
        let bank = Bank::new(vec![
            Account::new("Jane Smith", 1234, 1.0).with_movements(vec![100.0]),
            Account::new("John Stewart", 5678, 1.0).with_movements(vec![200.0]),
        ]);
        let hit = bank.find_by_username("js").expect("first match");
        assert_eq!(hit.owner, "Jane Smith");
    }

    #[test]
    fn removal_leaves_other_accounts_untouched() {
        let mut bank = Bank::demo();
        let id = bank.find_by_username("jd").unwrap().id;
        assert!(bank.remove(id));
        assert!(!bank.remove(id));
        assert_eq!(bank.len(), 3);
        assert!(bank.find_by_username("js").is_some());
        assert!(bank.find_by_username("stw").is_some());
        assert!(bank.find_by_username("ss").is_some());
    }
}
