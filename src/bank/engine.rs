//! Pure derivation of balance, summary, and display projections.
//!
//! Nothing in this module mutates an account; handlers append movements and
//! then capture a fresh [`AccountSnapshot`] for the view.

use serde::{Deserialize, Serialize};

use super::account::Account;

/// Minimum per-deposit interest contribution that counts toward the total.
const INTEREST_PAYOUT_FLOOR: f64 = 1.0;

/// Income, expense, and interest totals derived from a movement history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub income: f64,
    pub expense: f64,
    pub interest: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl MovementKind {
    pub fn of(amount: f64) -> Self {
        if amount > 0.0 {
            Self::Deposit
        } else {
            Self::Withdrawal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
        }
    }
}

/// One row of the displayed movement list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementView {
    /// 1-based row number in display order. A sorted projection renumbers
    /// rows rather than carrying chronological positions along.
    pub sequence: usize,
    pub amount: f64,
    pub kind: MovementKind,
}

/// The refreshed state a successful command hands to the view: display rows,
/// recomputed balance, and the summary triple. Values only; the view owns all
/// string formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub owner: String,
    pub username: String,
    pub movements: Vec<MovementView>,
    pub balance: f64,
    pub summary: Summary,
    pub sorted: bool,
}

/// Sum of all movements; an empty history has balance 0.
pub fn balance(movements: &[f64]) -> f64 {
    movements.iter().sum()
}

/// Aggregates the summary triple.
///
/// Interest accrues per deposit at `interest_rate` percent, and a deposit's
/// contribution is dropped entirely when it comes to less than
/// [`INTEREST_PAYOUT_FLOOR`]. The filter applies before summing, never to the
/// total.
pub fn summarize(movements: &[f64], interest_rate: f64) -> Summary {
    let income = movements.iter().filter(|m| **m > 0.0).sum();
    let expense: f64 = movements.iter().filter(|m| **m < 0.0).sum();
    let interest = movements
        .iter()
        .filter(|m| **m > 0.0)
        .map(|deposit| deposit * interest_rate / 100.0)
        .filter(|payout| *payout >= INTEREST_PAYOUT_FLOOR)
        .sum();
    Summary {
        income,
        expense: expense.abs(),
        interest,
    }
}

/// Builds the display rows, either chronological or sorted ascending by
/// value. The input is never reordered in place; sorting works on a copy.
/// Row numbers follow display position, so toggling the sort renumbers rows.
pub fn project(movements: &[f64], sorted: bool) -> Vec<MovementView> {
    let mut display: Vec<f64> = movements.to_vec();
    if sorted {
        display.sort_by(|a, b| a.partial_cmp(b).expect("movement amounts are finite"));
    }
    display
        .iter()
        .enumerate()
        .map(|(index, amount)| MovementView {
            sequence: index + 1,
            amount: *amount,
            kind: MovementKind::of(*amount),
        })
        .collect()
}

/// Captures the full view payload for one account.
pub fn snapshot(account: &Account, sorted: bool) -> AccountSnapshot {
    AccountSnapshot {
        owner: account.owner.clone(),
        username: account.username.clone(),
        movements: project(&account.movements, sorted),
        balance: balance(&account.movements),
        summary: summarize(&account.movements, account.interest_rate),
        sorted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOVEMENTS: [f64; 8] = [200.0, 450.0, -400.0, 3000.0, -650.0, -130.0, 70.0, 1300.0];

    #[test]
    fn balance_is_the_arithmetic_sum() {
        assert_eq!(balance(&MOVEMENTS), 3840.0);
        assert_eq!(balance(&[]), 0.0);
    }

    #[test]
    fn income_minus_expense_equals_balance() {
        let summary = summarize(&MOVEMENTS, 1.2);
        assert_eq!(summary.income, 5020.0);
        assert_eq!(summary.expense, 1180.0);
        assert_eq!(summary.income - summary.expense, balance(&MOVEMENTS));
    }

    #[test]
    fn interest_floor_filters_each_deposit_not_the_total() {
        // 100 at 0.5% yields 0.50 and is dropped; 1000 at 0.5% yields 5.
        let summary = summarize(&[100.0, 1000.0], 0.5);
        assert_eq!(summary.interest, 5.0);

        // At 1.2% every deposit of the reference history clears the floor
        // except 70 (0.84).
        let summary = summarize(&MOVEMENTS, 1.2);
        let expected = (200.0 + 450.0 + 3000.0 + 1300.0) * 1.2 / 100.0;
        assert!((summary.interest - expected).abs() < 1e-9);
    }

    #[test]
    fn deposit_of_1000_at_1_2_percent_is_included() {
        let summary = summarize(&[1000.0], 1.2);
        assert_eq!(summary.interest, 12.0);
    }

    #[test]
    fn empty_history_summary_is_all_zero() {
        let summary = summarize(&[], 1.5);
        assert_eq!(summary.income, 0.0);
        assert_eq!(summary.expense, 0.0);
        assert_eq!(summary.interest, 0.0);
    }

    #[test]
    fn projection_never_mutates_the_input() {
        let movements = MOVEMENTS.to_vec();
        let sorted = project(&movements, true);
        let unsorted = project(&movements, false);
        assert_eq!(movements, MOVEMENTS.to_vec());
        assert_eq!(sorted.len(), movements.len());
        let chronological: Vec<f64> = unsorted.iter().map(|row| row.amount).collect();
        assert_eq!(chronological, movements);
    }

    #[test]
    fn sorted_projection_is_ascending() {
        let rows = project(&MOVEMENTS, true);
        let amounts: Vec<f64> = rows.iter().map(|row| row.amount).collect();
        let mut expected = MOVEMENTS.to_vec();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(amounts, expected);
    }

    #[test]
    fn sorted_projection_renumbers_rows() {
        // Documented behavior: row numbers follow display position, so the
        // smallest value becomes row 1 when sorted instead of keeping its
        // chronological number.
        let rows = project(&[200.0, -400.0, 70.0], true);
        assert_eq!(rows[0].amount, -400.0);
        assert_eq!(rows[0].sequence, 1);
        assert_eq!(rows[2].amount, 200.0);
        assert_eq!(rows[2].sequence, 3);
    }

    #[test]
    fn rows_classify_deposits_and_withdrawals() {
        let rows = project(&[200.0, -400.0], false);
        assert_eq!(rows[0].kind, MovementKind::Deposit);
        assert_eq!(rows[1].kind, MovementKind::Withdrawal);
    }

    #[test]
    fn toggling_back_restores_chronological_order() {
        let movements = vec![3.0, 1.0, 2.0];
        let _sorted = project(&movements, true);
        let restored = project(&movements, false);
        let amounts: Vec<f64> = restored.iter().map(|row| row.amount).collect();
        assert_eq!(amounts, movements);
    }
}
