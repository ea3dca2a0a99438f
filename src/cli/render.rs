//! Turns snapshots into terminal output. Row order is newest first, the way
//! a statement reads; the numbering comes from the snapshot untouched.

use colored::Colorize;

use crate::bank::{AccountSnapshot, LoginReceipt, MovementKind};
use crate::config::Config;
use crate::currency::format_amount;

use super::output;

pub fn render_welcome(receipt: &LoginReceipt) {
    let first_name = receipt
        .owner
        .split_whitespace()
        .next()
        .unwrap_or(&receipt.owner);
    output::success(format!("Welcome back, {first_name}"));
}

pub fn render_snapshot(snapshot: &AccountSnapshot, config: &Config) {
    let order = if snapshot.sorted {
        "sorted by amount"
    } else {
        "most recent first"
    };
    output::section(format!("Movements ({order})"));
    for row in snapshot.movements.iter().rev() {
        let label = format!("{:>3} {:<10}", row.sequence, row.kind.label());
        let label = match row.kind {
            MovementKind::Deposit => label.green().to_string(),
            MovementKind::Withdrawal => label.red().to_string(),
        };
        println!("{label} {:>12}", format_amount(row.amount, config));
    }

    output::section("Balance");
    println!("{}", format_amount(snapshot.balance, config));

    output::section("Summary");
    println!("In       {:>12}", format_amount(snapshot.summary.income, config));
    println!("Out      {:>12}", format_amount(snapshot.summary.expense, config));
    println!("Interest {:>12}", format_amount(snapshot.summary.interest, config));
}
