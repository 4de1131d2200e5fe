//! Console session
//!
//! Reads one command per line, runs it against the registry and writes the
//! report to the output. Registry notices are collected through a
//! [`RecordingChannel`] and printed after each command, so the outcome of a
//! mutating operation is reported exactly once whether it succeeded or not.

use std::io::{BufRead, Write};

use domain_billing::{report, BillingRegistry, Notice, RecordingChannel, RegistryBuilder, SharedRegistry};

use crate::command::{Command, HELP};
use crate::error::ConsoleError;

pub const PROMPT: &str = "> ";
pub const ADMIN_REQUIRED: &str = "Administrator login required.";
pub const ADMIN_GRANTED: &str = "Admin login successful.";
pub const ADMIN_DENIED: &str = "Invalid admin credentials.";
pub const LOGGED_OUT: &str = "Logged out.";
pub const NOTHING_GENERATED: &str = "No consumer is eligible for a new bill.";

/// Whether the session keeps reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive session over one registry
pub struct Session<W> {
    registry: SharedRegistry,
    notices: RecordingChannel,
    out: W,
    admin: bool,
    prompt: bool,
}

impl<W: Write> Session<W> {
    /// Builds the registry from `builder`, routing its notices to `out`
    pub fn new(builder: RegistryBuilder, out: W) -> Self {
        let notices = RecordingChannel::new();
        let registry = builder.channel(notices.clone()).build();
        Self {
            registry: SharedRegistry::new(registry),
            notices,
            out,
            admin: false,
            prompt: false,
        }
    }

    /// Writes a prompt before each line read by [`Session::run`]
    pub fn with_prompt(mut self) -> Self {
        self.prompt = true;
        self
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs commands until end of input or `quit`
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<(), ConsoleError> {
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(self.out, "{}", PROMPT)?;
                self.out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            if self.execute(&line?)? == Flow::Quit {
                break;
            }
        }
        tracing::debug!("console session finished");
        Ok(())
    }

    /// Parses and runs a single line
    pub fn execute(&mut self, line: &str) -> Result<Flow, ConsoleError> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        match Command::parse(line) {
            Ok(command) => self.dispatch(command),
            Err(error) => {
                tracing::debug!(%error, "unparsable command");
                writeln!(self.out, "{}", error)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow, ConsoleError> {
        if command.requires_admin() && !self.admin {
            writeln!(self.out, "{}", ADMIN_REQUIRED)?;
            return Ok(Flow::Continue);
        }

        match command {
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Register(request) => {
                let _ = self.registry.register_consumer(request);
            }
            Command::Bill { username } => {
                let summary = self.registry.with(|registry| registry.consumer_bill(&username).ok());
                writeln!(self.out, "{}", report::bill_summary(summary.as_ref()))?;
            }
            Command::Pay { username, amount } => {
                let _ = self.registry.pay_bill(&username, amount);
            }
            Command::History { username } => {
                let text = self.registry.with(|registry| {
                    report::transaction_history(&username, &registry.transaction_history(&username))
                });
                writeln!(self.out, "{}", text)?;
            }
            Command::AdminLogin { username, password } => {
                self.admin = self.registry.admin_login(&username, &password);
                let message = if self.admin { ADMIN_GRANTED } else { ADMIN_DENIED };
                writeln!(self.out, "{}", message)?;
            }
            Command::Logout => {
                self.admin = false;
                writeln!(self.out, "{}", LOGGED_OUT)?;
            }
            Command::Consumers => {
                let text = self.registry.with(|registry| report::consumers(registry.list_consumers()));
                writeln!(self.out, "{}", text)?;
            }
            Command::OpenBill { username, fixed_charge } => {
                let _ = self.registry.issue_opening_bill(&username, fixed_charge);
            }
            Command::Generate => {
                let generated = self.registry.generate_monthly_bills();
                let had_consumers = self.registry.with(|registry| !registry.list_consumers().is_empty());
                if generated.is_empty() && had_consumers {
                    writeln!(self.out, "{}", NOTHING_GENERATED)?;
                }
            }
            Command::Bills => {
                let text = self.registry.with(|registry| report::all_bills(registry.all_bills()));
                writeln!(self.out, "{}", text)?;
            }
            Command::Statuses => {
                let text = self
                    .registry
                    .with(|registry| report::paid_and_pending(&registry.bills_by_status()));
                writeln!(self.out, "{}", text)?;
            }
            Command::Delete { username } => {
                let _ = self.registry.delete_consumer(&username);
            }
        }

        self.flush_notices()?;
        Ok(Flow::Continue)
    }

    fn flush_notices(&mut self) -> Result<(), ConsoleError> {
        for notice in self.notices.take() {
            writeln!(self.out, "{}", notice)?;
            if let Notice::BillGenerated { .. } = notice {
                writeln!(self.out)?;
            }
        }
        Ok(())
    }
}

impl Session<Vec<u8>> {
    /// Session writing into memory, used for scripted runs
    pub fn buffered(builder: RegistryBuilder) -> Self {
        Self::new(builder, Vec::new())
    }

    /// Everything written so far
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}

impl Default for Session<Vec<u8>> {
    fn default() -> Self {
        Self::buffered(BillingRegistry::builder())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Money;
    use domain_billing::{FixedMeter, MeterReading};

    fn session() -> Session<Vec<u8>> {
        let builder = BillingRegistry::builder().meter(FixedMeter(MeterReading::new(10, Money::from_dollars(5))));
        Session::buffered(builder)
    }

    #[test]
    fn test_admin_commands_need_login() {
        let mut session = session();
        session.execute("consumers").unwrap();
        assert_eq!(session.output(), format!("{}\n", ADMIN_REQUIRED));

        session.execute("admin admin admin").unwrap();
        assert!(session.is_admin());
        session.execute("logout").unwrap();
        assert!(!session.is_admin());
    }

    #[test]
    fn test_quit_stops_run() {
        let mut session = session();
        session.run("help\nquit\nadmin admin admin\n".as_bytes()).unwrap();
        assert!(!session.is_admin());
        assert!(session.output().starts_with("Commands:"));
    }

    #[test]
    fn test_parse_errors_are_reported() {
        let mut session = session();
        assert_eq!(session.execute("pay alice").unwrap(), Flow::Continue);
        assert!(session.output().contains("Missing argument <amount> for 'pay'"));
    }
}
