//! Command parsing
//!
//! One command per line, whitespace separated. The address is the only
//! free-text field, so it comes last in `register` and takes the rest of the
//! line.

use core_kernel::Money;
use domain_consumer::NewConsumer;

use crate::error::CommandError;

/// Help text listing every command
pub const HELP: &str = "\
Commands:
  register <user> <pass> <first> <last> <mobile> <email> <address...>
  bill <user>                 show the latest bill
  pay <user> <amount>         pay the latest bill
  history <user>              show every bill of the consumer
  admin <user> <pass>         log in as administrator
  logout                      leave administrator mode
Administrator commands:
  consumers                   list all consumers
  open <user> <fixed-charge>  issue a consumer's opening bill
  generate                    generate monthly bills
  bills                       list all bills
  statuses                    list paid and pending bills
  delete <user>               delete a consumer
  help | quit | exit";

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Register(NewConsumer),
    Bill { username: String },
    Pay { username: String, amount: Money },
    History { username: String },
    AdminLogin { username: String, password: String },
    Logout,
    Consumers,
    OpenBill { username: String, fixed_charge: Money },
    Generate,
    Bills,
    Statuses,
    Delete { username: String },
    Quit,
}

impl Command {
    /// Parses one input line
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let lowered = name.to_ascii_lowercase();
        let mut args = Args { command: &lowered, words };

        let command = match lowered.as_str() {
            "help" | "?" => Command::Help,
            "register" => {
                let username = args.next("user")?;
                let password = args.next("pass")?;
                let first_name = args.next("first")?;
                let last_name = args.next("last")?;
                let mobile_number = args.next("mobile")?;
                let email = args.next("email")?;
                let address = args.rest("address")?;
                Command::Register(
                    NewConsumer::new(username, password)
                        .with_name(first_name, last_name)
                        .with_mobile_number(mobile_number)
                        .with_email(email)
                        .with_address(address),
                )
            }
            "bill" => Command::Bill { username: args.next("user")?.to_string() },
            "pay" => Command::Pay {
                username: args.next("user")?.to_string(),
                amount: args.next("amount")?.parse()?,
            },
            "history" => Command::History { username: args.next("user")?.to_string() },
            "admin" => Command::AdminLogin {
                username: args.next("user")?.to_string(),
                password: args.next("pass")?.to_string(),
            },
            "logout" => Command::Logout,
            "consumers" => Command::Consumers,
            "open" => Command::OpenBill {
                username: args.next("user")?.to_string(),
                fixed_charge: args.next("fixed-charge")?.parse()?,
            },
            "generate" => Command::Generate,
            "bills" => Command::Bills,
            "statuses" => Command::Statuses,
            "delete" => Command::Delete { username: args.next("user")?.to_string() },
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(name.to_string())),
        };
        Ok(command)
    }

    /// Commands reserved for a logged-in administrator
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            Command::Consumers
                | Command::OpenBill { .. }
                | Command::Generate
                | Command::Bills
                | Command::Statuses
                | Command::Delete { .. }
        )
    }
}

struct Args<'c, I> {
    command: &'c str,
    words: I,
}

impl<'a, I: Iterator<Item = &'a str>> Args<'_, I> {
    fn next(&mut self, argument: &'static str) -> Result<&'a str, CommandError> {
        self.words.next().ok_or_else(|| CommandError::MissingArgument {
            command: self.command.to_string(),
            argument,
        })
    }

    fn rest(&mut self, argument: &'static str) -> Result<String, CommandError> {
        let rest: Vec<&str> = self.words.by_ref().collect();
        if rest.is_empty() {
            return Err(CommandError::MissingArgument {
                command: self.command.to_string(),
                argument,
            });
        }
        Ok(rest.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_takes_rest_as_address() {
        let command = Command::parse("register alice pw Alice Liddell 555-0100 a@x.io 1 Rabbit Hole").unwrap();
        let Command::Register(request) = command else {
            panic!("expected register");
        };
        assert_eq!(request.username, "alice");
        assert_eq!(request.address, "1 Rabbit Hole");
        assert_eq!(request.email, "a@x.io");
    }

    #[test]
    fn test_pay_parses_amount() {
        assert_eq!(
            Command::parse("pay alice $125.63").unwrap(),
            Command::Pay {
                username: "alice".to_string(),
                amount: Money::from_cents(12563),
            }
        );
        assert!(matches!(Command::parse("pay alice lots"), Err(CommandError::InvalidAmount(_))));
    }

    #[test]
    fn test_missing_argument_names_it() {
        assert_eq!(
            Command::parse("pay alice"),
            Err(CommandError::MissingArgument {
                command: "pay".to_string(),
                argument: "amount",
            })
        );
        assert_eq!(
            Command::parse("delete"),
            Err(CommandError::MissingArgument {
                command: "delete".to_string(),
                argument: "user",
            })
        );
    }

    #[test]
    fn test_empty_and_unknown() {
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
        assert_eq!(Command::parse("frobnicate"), Err(CommandError::Unknown("frobnicate".to_string())));
    }

    #[test]
    fn test_admin_commands() {
        assert!(Command::parse("GENERATE").unwrap().requires_admin());
        assert!(!Command::parse("history alice").unwrap().requires_admin());
    }
}
