//! Line commands understood by the terminal front end.

use thiserror::Error;

pub const HELP: &str = "\
Commands:
  title <text>      set the new post's title
  content <text>    set the new post's content
  add               submit the new post
  edit <n>          open post n in the edit form
  etitle <text>     set the edited title
  econtent <text>   set the edited content
  update            submit the edit
  cancel            close the edit form without saving
  delete <n>        delete post n
  refresh           reload posts from the server
  help              show this text
  quit              exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Title(String),
    Content(String),
    Add,
    Edit(usize),
    EditTitle(String),
    EditContent(String),
    Update,
    Cancel,
    Delete(usize),
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("`{0}` expects a post number, counting from 1")]
    BadIndex(&'static str),
}

impl Command {
    /// Parse one input line. Text arguments keep their inner spacing.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "title" => Command::Title(rest.to_string()),
            "content" => Command::Content(rest.to_string()),
            "add" => Command::Add,
            "edit" => Command::Edit(index(rest, "edit")?),
            "etitle" => Command::EditTitle(rest.to_string()),
            "econtent" => Command::EditContent(rest.to_string()),
            "update" => Command::Update,
            "cancel" => Command::Cancel,
            "delete" => Command::Delete(index(rest, "delete")?),
            "refresh" | "" => Command::Refresh,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

/// 1-based card number to 0-based position.
fn index(arg: &str, command: &'static str) -> Result<usize, CommandError> {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(CommandError::BadIndex(command)),
    }
}
