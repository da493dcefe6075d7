use std::path::PathBuf;
use std::str::FromStr;

use marhaba_types::UiEvent;

/// One line of terminal input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ui(UiEvent),
    Import {
        path: PathBuf,
        password: Option<String>,
    },
    Help,
    Quit,
}

impl Command {
    pub fn help() -> &'static str {
        "Available commands:\n  \
         \\a            - Show all topics\n  \
         \\t            - List topics\n  \
         \\c <n>        - Show topic number <n>\n  \
         \\i <file> [pw] - Import a spreadsheet\n  \
         \\h            - Show this help message\n  \
         \\q            - Quit\n  \
         <text>        - Search all terms (empty line clears the search)"
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_end_matches(['\r', '\n']);
        if !s.starts_with('\\') {
            return Ok(Command::Ui(UiEvent::SearchText(s.to_string())));
        }

        let mut parts = s.split_whitespace();
        let name = parts.next().unwrap_or_default();
        match name {
            "\\a" => Ok(Command::Ui(UiEvent::ShowAll)),
            "\\t" => Ok(Command::Ui(UiEvent::ListTopics)),
            "\\h" => Ok(Command::Help),
            "\\q" => Ok(Command::Quit),
            "\\c" => {
                let number: usize = parts
                    .next()
                    .and_then(|n| n.parse().ok())
                    .filter(|n| *n > 0)
                    .ok_or_else(|| "Usage: \\c <topic number>".to_string())?;
                Ok(Command::Ui(UiEvent::SelectCategory(number - 1)))
            }
            "\\i" => {
                let path = parts
                    .next()
                    .ok_or_else(|| "Usage: \\i <file> [password]".to_string())?;
                Ok(Command::Import {
                    path: PathBuf::from(path),
                    password: parts.next().map(str::to_string),
                })
            }
            _ => Err("Unknown command".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_search() {
        assert_eq!(
            "Mar".parse::<Command>().unwrap(),
            Command::Ui(UiEvent::SearchText("Mar".into()))
        );
        assert_eq!(
            "good morning\r\n".parse::<Command>().unwrap(),
            Command::Ui(UiEvent::SearchText("good morning".into()))
        );
    }

    #[test]
    fn empty_line_clears_search() {
        assert_eq!(
            "".parse::<Command>().unwrap(),
            Command::Ui(UiEvent::SearchText(String::new()))
        );
    }

    #[test]
    fn topic_numbers_are_one_based() {
        assert_eq!(
            "\\c 1".parse::<Command>().unwrap(),
            Command::Ui(UiEvent::SelectCategory(0))
        );
        assert!("\\c 0".parse::<Command>().is_err());
        assert!("\\c two".parse::<Command>().is_err());
        assert!("\\c".parse::<Command>().is_err());
    }

    #[test]
    fn import_with_optional_password() {
        assert_eq!(
            "\\i data.xlsx".parse::<Command>().unwrap(),
            Command::Import {
                path: "data.xlsx".into(),
                password: None,
            }
        );
        assert_eq!(
            "\\i data.xlsx Upload@Excel".parse::<Command>().unwrap(),
            Command::Import {
                path: "data.xlsx".into(),
                password: Some("Upload@Excel".into()),
            }
        );
        assert!("\\i".parse::<Command>().is_err());
    }

    #[test]
    fn simple_commands() {
        assert_eq!("\\a".parse::<Command>().unwrap(), Command::Ui(UiEvent::ShowAll));
        assert_eq!("\\t".parse::<Command>().unwrap(), Command::Ui(UiEvent::ListTopics));
        assert_eq!("\\h".parse::<Command>().unwrap(), Command::Help);
        assert_eq!("\\q".parse::<Command>().unwrap(), Command::Quit);
        assert!("\\z".parse::<Command>().is_err());
    }
}
