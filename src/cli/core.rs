//! Shell context, command registry, and dispatch.

use std::{
    io,
    sync::{Arc, RwLock},
};

use chrono::Local;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    bank::{Bank, Session, Teller},
    config::{Config, ConfigManager},
    currency::format_banner_date,
    errors::{BankError, CommandError},
};

use super::{io as cli_io, render};

/// Furthest edit distance still offered as a "did you mean" suggestion.
const SUGGESTION_DISTANCE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Fatal shell failures; command rejections never end up here.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub(crate) struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
}

pub(crate) const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "login",
        usage: "login <username> [pin]",
        summary: "Authenticate and display the account",
    },
    CommandSpec {
        name: "statement",
        usage: "statement",
        summary: "Redisplay movements, balance, and summary",
    },
    CommandSpec {
        name: "transfer",
        usage: "transfer <username> <amount>",
        summary: "Send money to another account",
    },
    CommandSpec {
        name: "loan",
        usage: "loan <amount>",
        summary: "Request a loan against past movements",
    },
    CommandSpec {
        name: "sort",
        usage: "sort",
        summary: "Toggle between sorted and chronological display",
    },
    CommandSpec {
        name: "close",
        usage: "close <username> [pin]",
        summary: "Close the current account permanently",
    },
    CommandSpec {
        name: "help",
        usage: "help",
        summary: "List available commands",
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        summary: "Leave the shell",
    },
];

/// Owns everything a running shell needs: the seeded bank behind its lock,
/// the session, and the loaded view config.
pub struct ShellContext {
    mode: CliMode,
    bank: Arc<RwLock<Bank>>,
    session: Session,
    config: Config,
    theme: ColorfulTheme,
    pub running: bool,
    pub last_command: Option<String>,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::new().and_then(|manager| manager.load())?;
        cli_io::apply_config(&config);

        Ok(Self {
            mode,
            bank: Arc::new(RwLock::new(Bank::demo())),
            session: Session::new(),
            config,
            theme: ColorfulTheme::default(),
            running: true,
            last_command: None,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn command_names() -> Vec<&'static str> {
        COMMANDS.iter().map(|spec| spec.name).collect()
    }

    pub(crate) fn banner(&self) {
        if self.mode != CliMode::Interactive {
            return;
        }
        super::output::section("Bank Core Demo");
        cli_io::print_info(format_banner_date(Local::now()));
        cli_io::print_info("Type `help` to list commands.");
    }

    pub(crate) fn prompt(&self) -> String {
        let bank = self.bank.read().expect("bank lock poisoned");
        match self
            .session
            .current()
            .and_then(|id| bank.account(id))
            .map(|account| account.username.clone())
        {
            Some(username) => format!("{username}@bank> "),
            None => "bank> ".to_string(),
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        args: &[&str],
    ) -> Result<LoopControl, CliError> {
        match command {
            "login" => self.cmd_login(args)?,
            "statement" => self.cmd_statement(),
            "transfer" => self.cmd_transfer(args),
            "loan" => self.cmd_loan(args),
            "sort" => self.cmd_sort(),
            "close" => self.cmd_close(args)?,
            "help" => self.cmd_help(),
            "exit" | "quit" => {
                cli_io::print_info("Goodbye.");
                return Ok(LoopControl::Exit);
            }
            unknown => self.unknown_command(unknown),
        }
        Ok(LoopControl::Continue)
    }

    fn cmd_login(&mut self, args: &[&str]) -> Result<(), CliError> {
        let Some(username) = args.first() else {
            usage("login");
            return Ok(());
        };
        let pin = match args.get(1) {
            Some(pin) => pin.to_string(),
            None if self.mode == CliMode::Interactive => {
                cli_io::prompt_pin(&self.theme, &format!("PIN for {username}"))?
            }
            None => {
                usage("login");
                return Ok(());
            }
        };

        let outcome = {
            let bank = self.bank.read().expect("bank lock poisoned");
            Teller::login(&bank, &mut self.session, username, &pin)
        };
        match outcome {
            Ok(receipt) => {
                self.clear_screen();
                render::render_welcome(&receipt);
                render::render_snapshot(&receipt.snapshot, &self.config);
            }
            Err(err) => reject(err),
        }
        Ok(())
    }

    fn cmd_statement(&self) {
        let outcome = {
            let bank = self.bank.read().expect("bank lock poisoned");
            Teller::statement(&bank, &self.session)
        };
        match outcome {
            Ok(snapshot) => render::render_snapshot(&snapshot, &self.config),
            Err(err) => reject(err),
        }
    }

    fn cmd_transfer(&self, args: &[&str]) {
        let (Some(to), Some(amount)) = (args.first(), args.get(1)) else {
            return usage("transfer");
        };
        let outcome = {
            let mut bank = self.bank.write().expect("bank lock poisoned");
            Teller::transfer(&mut bank, &self.session, to, amount)
        };
        match outcome {
            Ok(snapshot) => {
                cli_io::print_success(format!("Transferred {amount} to {to}."));
                render::render_snapshot(&snapshot, &self.config);
            }
            Err(err) => reject(err),
        }
    }

    fn cmd_loan(&self, args: &[&str]) {
        let Some(amount) = args.first() else {
            return usage("loan");
        };
        let outcome = {
            let mut bank = self.bank.write().expect("bank lock poisoned");
            Teller::request_loan(&mut bank, &self.session, amount)
        };
        match outcome {
            Ok(snapshot) => {
                cli_io::print_success(format!("Loan of {amount} approved."));
                render::render_snapshot(&snapshot, &self.config);
            }
            Err(err) => reject(err),
        }
    }

    fn cmd_sort(&mut self) {
        let outcome = {
            let bank = self.bank.read().expect("bank lock poisoned");
            Teller::toggle_sort(&bank, &mut self.session)
        };
        match outcome {
            Ok(snapshot) => render::render_snapshot(&snapshot, &self.config),
            Err(err) => reject(err),
        }
    }

    fn cmd_close(&mut self, args: &[&str]) -> Result<(), CliError> {
        let Some(username) = args.first() else {
            usage("close");
            return Ok(());
        };
        let pin = match args.get(1) {
            Some(pin) => pin.to_string(),
            None if self.mode == CliMode::Interactive => {
                cli_io::prompt_pin(&self.theme, &format!("PIN for {username}"))?
            }
            None => {
                usage("close");
                return Ok(());
            }
        };
        if self.mode == CliMode::Interactive {
            let confirmed = cli_io::confirm_action(
                &self.theme,
                &format!("Permanently close account `{username}`?"),
                false,
            )?;
            if !confirmed {
                cli_io::print_info("Account left open.");
                return Ok(());
            }
        }

        let outcome = {
            let mut bank = self.bank.write().expect("bank lock poisoned");
            Teller::close_account(&mut bank, &mut self.session, username, &pin)
        };
        match outcome {
            Ok(()) => {
                self.clear_screen();
                cli_io::print_success(format!("Account {username} closed."));
            }
            Err(err) => reject(err),
        }
        Ok(())
    }

    fn cmd_help(&self) {
        super::output::section("Commands");
        for spec in COMMANDS {
            println!("{:<28} {}", spec.usage, spec.summary);
        }
    }

    fn unknown_command(&self, name: &str) {
        match suggest(name) {
            Some(candidate) => cli_io::print_warning(format!(
                "Unknown command `{name}`. Did you mean `{candidate}`?"
            )),
            None => cli_io::print_warning(format!(
                "Unknown command `{name}`. Type `help` to list commands."
            )),
        }
    }

    fn clear_screen(&self) {
        if self.mode != CliMode::Interactive {
            return;
        }
        let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
    }
}

fn usage(name: &str) {
    if let Some(spec) = COMMANDS.iter().find(|spec| spec.name == name) {
        cli_io::print_warning(format!("Usage: {}", spec.usage));
    }
}

fn reject(err: CommandError) {
    cli_io::print_warning(err.to_string());
}

fn suggest(name: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .map(|spec| (spec.name, levenshtein(name, spec.name)))
        .filter(|(_, distance)| *distance <= SUGGESTION_DISTANCE)
        .min_by_key(|(_, distance)| *distance)
        .map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_typos_get_a_suggestion() {
        assert_eq!(suggest("trnsfer"), Some("transfer"));
        assert_eq!(suggest("lgin"), Some("login"));
    }

    #[test]
    fn distant_input_gets_no_suggestion() {
        assert_eq!(suggest("abracadabra"), None);
    }

    #[test]
    fn registry_covers_the_dispatch_table() {
        let names = ShellContext::command_names();
        for expected in ["login", "statement", "transfer", "loan", "sort", "close"] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }
}
