//! Command handlers bridging raw view input and the account set.
//!
//! Every handler validates first and mutates second; a rejected command
//! returns a [`CommandError`] and leaves both the bank and the session
//! exactly as they were.

use tracing::{debug, info};

use crate::errors::CommandError;

use super::bank::Bank;
use super::engine::{self, AccountSnapshot};
use super::session::Session;

/// Fraction of a requested loan that some past movement must reach.
const LOAN_COLLATERAL_RATIO: f64 = 0.10;

/// What a successful login hands back to the view.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginReceipt {
    pub owner: String,
    pub snapshot: AccountSnapshot,
}

/// Stateless command executor, in the style of the service layer: the bank
/// and session always come in as arguments.
pub struct Teller;

impl Teller {
    /// Authenticates by username and PIN and makes the account current.
    ///
    /// A correct repeated login is idempotent; a failed one leaves any
    /// existing session in place.
    pub fn login(
        bank: &Bank,
        session: &mut Session,
        username: &str,
        pin: &str,
    ) -> Result<LoginReceipt, CommandError> {
        let username = username.trim();
        let account = bank
            .find_by_username(username)
            .ok_or(CommandError::AuthenticationFailed)?;
        if parse_pin(pin) != Some(account.pin) {
            debug!(username, "login rejected");
            return Err(CommandError::AuthenticationFailed);
        }
        session.begin(account.id);
        info!(username, "login accepted");
        Ok(LoginReceipt {
            owner: account.owner.clone(),
            snapshot: engine::snapshot(account, session.sorted()),
        })
    }

    /// Moves `amount` from the current account to `to`.
    ///
    /// The debit and credit are applied back to back with no fallible step
    /// between them; either both entries land or neither does.
    pub fn transfer(
        bank: &mut Bank,
        session: &Session,
        to: &str,
        amount: &str,
    ) -> Result<AccountSnapshot, CommandError> {
        let sender_id = session.current().ok_or(CommandError::NoSession)?;
        let amount = parse_amount(amount)?;

        let sender_ix = bank
            .accounts
            .iter()
            .position(|account| account.id == sender_id)
            .ok_or(CommandError::NoSession)?;
        let receiver_ix = bank
            .accounts
            .iter()
            .position(|account| account.username == to.trim())
            .ok_or(CommandError::RecipientNotFound)?;

        let sender = &bank.accounts[sender_ix];
        if engine::balance(&sender.movements) < amount {
            return Err(CommandError::InsufficientBalance);
        }
        if receiver_ix == sender_ix {
            return Err(CommandError::SelfTransferForbidden);
        }

        bank.accounts[sender_ix].record_withdrawal(amount);
        bank.accounts[receiver_ix].record_deposit(amount);
        info!(
            from = %bank.accounts[sender_ix].username,
            to = %bank.accounts[receiver_ix].username,
            amount,
            "transfer applied"
        );
        Ok(engine::snapshot(&bank.accounts[sender_ix], session.sorted()))
    }

    /// Grants a loan when some past movement reaches a tenth of the request.
    pub fn request_loan(
        bank: &mut Bank,
        session: &Session,
        amount: &str,
    ) -> Result<AccountSnapshot, CommandError> {
        let id = session.current().ok_or(CommandError::NoSession)?;
        let amount = parse_amount(amount)?;
        let account = bank.account_mut(id).ok_or(CommandError::NoSession)?;
        let eligible = account
            .movements
            .iter()
            .any(|movement| *movement >= amount * LOAN_COLLATERAL_RATIO);
        if !eligible {
            debug!(username = %account.username, amount, "loan rejected");
            return Err(CommandError::LoanNotEligible);
        }
        account.record_deposit(amount);
        info!(username = %account.username, amount, "loan granted");
        Ok(engine::snapshot(account, session.sorted()))
    }

    /// Removes the current account from the set and ends the session.
    ///
    /// The confirmation inputs must match the current account exactly;
    /// closing someone else's account is not a thing.
    pub fn close_account(
        bank: &mut Bank,
        session: &mut Session,
        username: &str,
        pin: &str,
    ) -> Result<(), CommandError> {
        let id = session.current().ok_or(CommandError::NoSession)?;
        let account = bank.account(id).ok_or(CommandError::NoSession)?;
        if username.trim() != account.username || parse_pin(pin) != Some(account.pin) {
            return Err(CommandError::AuthorizationFailed);
        }
        let username = account.username.clone();
        bank.remove(id);
        session.end();
        info!(%username, "account closed");
        Ok(())
    }

    /// Flips the display ordering and re-projects; account data is untouched.
    pub fn toggle_sort(
        bank: &Bank,
        session: &mut Session,
    ) -> Result<AccountSnapshot, CommandError> {
        let id = session.current().ok_or(CommandError::NoSession)?;
        let account = bank.account(id).ok_or(CommandError::NoSession)?;
        let sorted = session.toggle_sort();
        Ok(engine::snapshot(account, sorted))
    }

    /// Re-emits the current snapshot without mutating anything.
    pub fn statement(bank: &Bank, session: &Session) -> Result<AccountSnapshot, CommandError> {
        let id = session.current().ok_or(CommandError::NoSession)?;
        let account = bank.account(id).ok_or(CommandError::NoSession)?;
        Ok(engine::snapshot(account, session.sorted()))
    }
}

fn parse_pin(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

fn parse_amount(raw: &str) -> Result<f64, CommandError> {
    let amount: f64 = raw.trim().parse().map_err(|_| CommandError::InvalidAmount)?;
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(CommandError::InvalidAmount)
    }
}
