use std::fmt;

use sl_core::Locale;

/// One line typed at the shell prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Missing arguments stay empty so the flow can report them.
    Login { email: String, password: String },
    Reset { email: String },
    Logout,
    DeleteAccount,
    List,
    /// `None` submits the current draft.
    Add { title: Option<String> },
    /// `None` shows the current draft.
    Draft { title: Option<String> },
    Lang(Locale),
    ChangePassword,
    Register,
    Back,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    Unknown(String),
    MissingLanguage,
    UnsupportedLanguage(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => f.write_str("empty command"),
            ParseError::Unknown(name) => write!(f, "unknown command: {name} (try `help`)"),
            ParseError::MissingLanguage => f.write_str("usage: lang <pt|en|es>"),
            ParseError::UnsupportedLanguage(code) => write!(f, "unsupported language: {code}"),
        }
    }
}

impl std::error::Error for ParseError {}

pub const HELP: &str = "\
commands:
  login <email> <password>   sign in
  reset <email>              send a password reset email
  logout                     sign out
  delete-account             delete the signed-in account
  list                       reload the shopping list
  add [title]                add an item (defaults to the draft)
  draft [title]              set or show the draft title
  lang <pt|en|es>            switch the interface language
  change-password            open the change-password screen
  register                   open the registration screen
  back                       return to the previous screen
  help                       show this help
  quit                       exit";

fn rest_after<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let rest = line.trim_start()[name.len()..].trim();
    if rest.is_empty() {
        None
    } else {
        Some(rest)
    }
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(ParseError::Empty)?;

        let command = match name {
            "login" => Command::Login {
                email: words.next().unwrap_or_default().to_string(),
                password: words.next().unwrap_or_default().to_string(),
            },
            "reset" => Command::Reset {
                email: words.next().unwrap_or_default().to_string(),
            },
            "logout" => Command::Logout,
            "delete-account" => Command::DeleteAccount,
            "list" => Command::List,
            "add" => Command::Add {
                title: rest_after(line, name).map(str::to_string),
            },
            "draft" => Command::Draft {
                title: rest_after(line, name).map(str::to_string),
            },
            "lang" => {
                let code = words.next().ok_or(ParseError::MissingLanguage)?;
                let locale = code
                    .parse()
                    .map_err(|_| ParseError::UnsupportedLanguage(code.to_string()))?;
                Command::Lang(locale)
            }
            "change-password" => Command::ChangePassword,
            "register" => Command::Register,
            "back" => Command::Back,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}
