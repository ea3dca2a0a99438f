pub mod account;
#[allow(clippy::module_inception)]
pub mod bank;
pub mod commands;
pub mod engine;
pub mod session;

pub use account::{derive_username, Account};
pub use bank::Bank;
pub use commands::{LoginReceipt, Teller};
pub use engine::{AccountSnapshot, MovementKind, MovementView, Summary};
pub use session::Session;
