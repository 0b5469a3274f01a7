//! Input lines from the terminal

use othello_core::Coord;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Restart, optionally switching players (`new [black] [white]`)
    NewGame {
        black: Option<String>,
        white: Option<String>,
    },
    /// Human move in board notation
    Place(Coord),
    ShowBoard,
    ShowHistory,
    /// Write the current game record as JSON
    Save(PathBuf),
    ListPlayers,
    Help,
    Quit,
}

/// Player names may contain spaces, so they are separated by commas or
/// `vs`: `new Human, Edge Bot` or `new random vs deep score`.
fn split_players(rest: &str) -> (Option<String>, Option<String>) {
    let rest = rest.trim();
    if rest.is_empty() {
        return (None, None);
    }
    let (black, white) = match rest.split_once(',').or_else(|| rest.split_once(" vs ")) {
        Some((b, w)) => (b.trim(), Some(w.trim())),
        None => (rest, None),
    };
    let some = |s: &str| (!s.is_empty()).then(|| s.to_string());
    (some(black), white.and_then(some))
}

impl FromStr for Message {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match word.to_ascii_lowercase().as_str() {
            "new" | "restart" => {
                let (black, white) = split_players(rest);
                Ok(Message::NewGame { black, white })
            }
            "board" | "b" => Ok(Message::ShowBoard),
            "history" | "h" => Ok(Message::ShowHistory),
            "save" => {
                let path = rest.trim();
                if path.is_empty() {
                    Err("usage: save PATH".to_string())
                } else {
                    Ok(Message::Save(PathBuf::from(path)))
                }
            }
            "players" | "list" => Ok(Message::ListPlayers),
            "help" | "?" => Ok(Message::Help),
            "quit" | "exit" | "q" => Ok(Message::Quit),
            _ => word
                .parse::<Coord>()
                .map(Message::Place)
                .map_err(|_| format!("unknown command {line:?}, try `help`")),
        }
    }
}

pub const HELP: &str = "\
commands:
  <coord>              play a move, e.g. d3
  new [black, white]   restart, optionally with new players
  board                show the board
  history              show the move history
  save PATH            write the game record as JSON
  players              list selectable players
  quit                 leave";
