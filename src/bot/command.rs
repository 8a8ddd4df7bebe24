//! Parsing of raw input lines into commands.

/// A parsed assistant command.
///
/// Arguments are taken from the lower-cased input, so names are always stored in
/// lower case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add <name> <phone>`
    Add { name: String, phone: String },
    /// `change <name> <phone>`
    Change { name: String, phone: String },
    /// `phone <name>`
    Phone { name: String },
    /// `show all`
    ShowAll,
    /// `search`; the query is asked for separately
    Search,
    /// `birthday <name> <YYYY-MM-DD>`
    Birthday { name: String, date: String },
    /// `days <name>`
    Days { name: String },
    /// `good bye`, `close` or `exit`
    Exit,
    /// A known command with the wrong number of arguments
    InvalidFormat,
    /// Anything else
    Unknown,
}

impl Command {
    /// Parse one input line.
    pub fn parse(line: &str) -> Self {
        let line = line.to_lowercase();

        match line.as_str() {
            "hello" => return Self::Hello,
            "show all" => return Self::ShowAll,
            "search" => return Self::Search,
            "good bye" | "close" | "exit" => return Self::Exit,
            _ => {}
        }

        if line.starts_with("add ") {
            return match split_pair(&line) {
                Some((name, phone)) => Self::Add { name, phone },
                None => Self::InvalidFormat,
            };
        }
        if line.starts_with("change ") {
            return match split_pair(&line) {
                Some((name, phone)) => Self::Change { name, phone },
                None => Self::InvalidFormat,
            };
        }
        if line.starts_with("birthday ") {
            return match split_pair(&line) {
                Some((name, date)) => Self::Birthday { name, date },
                None => Self::InvalidFormat,
            };
        }
        if let Some(name) = line.strip_prefix("phone ") {
            return Self::Phone {
                name: name.to_string(),
            };
        }
        if let Some(name) = line.strip_prefix("days ") {
            return Self::Days {
                name: name.to_string(),
            };
        }

        Self::Unknown
    }
}

/// Split `<keyword> <first> <rest>` on single spaces into at most three pieces.
///
/// The last piece keeps any further spaces.
fn split_pair(line: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = line.splitn(3, ' ').collect();
    match parts.as_slice() {
        [_, first, rest] => Some((first.to_string(), rest.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("hello"), Command::Hello);
        assert_eq!(Command::parse("HeLLo"), Command::Hello);
        assert_eq!(Command::parse("show all"), Command::ShowAll);
        assert_eq!(Command::parse("search"), Command::Search);
        assert_eq!(Command::parse("good bye"), Command::Exit);
        assert_eq!(Command::parse("Close"), Command::Exit);
        assert_eq!(Command::parse("EXIT"), Command::Exit);
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            Command::parse("add Alice 1234567890"),
            Command::Add {
                name: "alice".to_string(),
                phone: "1234567890".to_string()
            }
        );
        assert_eq!(Command::parse("add alice"), Command::InvalidFormat);
        assert_eq!(Command::parse("add"), Command::Unknown);
    }

    #[test]
    fn test_parse_keeps_rest_in_last_argument() {
        assert_eq!(
            Command::parse("change bob 555 555"),
            Command::Change {
                name: "bob".to_string(),
                phone: "555 555".to_string()
            }
        );
        assert_eq!(
            Command::parse("add  1234567890"),
            Command::Add {
                name: String::new(),
                phone: "1234567890".to_string()
            }
        );
    }

    #[test]
    fn test_parse_phone_and_days() {
        assert_eq!(
            Command::parse("phone Alice"),
            Command::Phone {
                name: "alice".to_string()
            }
        );
        assert_eq!(
            Command::parse("days bob"),
            Command::Days {
                name: "bob".to_string()
            }
        );
        assert_eq!(Command::parse("phone"), Command::Unknown);
    }

    #[test]
    fn test_parse_birthday() {
        assert_eq!(
            Command::parse("birthday alice 1990-07-15"),
            Command::Birthday {
                name: "alice".to_string(),
                date: "1990-07-15".to_string()
            }
        );
        assert_eq!(Command::parse("birthday alice"), Command::InvalidFormat);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Command::parse(""), Command::Unknown);
        assert_eq!(Command::parse("show"), Command::Unknown);
        assert_eq!(Command::parse("hello there"), Command::Unknown);
        assert_eq!(Command::parse("."), Command::Unknown);
    }
}
