//! REPL line parsing.
//!
//! A line is either a colon command or a whitespace-separated list of raw
//! key names:
//!
//! ```text
//! 4 4 * 0        keys under the active layout
//! :lang          next language
//! :mode          next typing mode
//! :layout        next layout
//! :esc           cancel / refresh
//! :btn 9         press on-screen button 9
//! :suggest a|b|c replace the suggestion slots
//! :show          print the view
//! :json          print the view as JSON
//! ```

use std::str::FromStr;

use keypad_core::SLOTS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Keys(Vec<String>),
    Language,
    Mode,
    Layout,
    Cancel,
    Button(usize),
    Suggest([String; SLOTS]),
    Show,
    Json,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let Some(rest) = line.strip_prefix(':') else {
            return Ok(Self::Keys(line.split_whitespace().map(str::to_string).collect()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name {
            "lang" => Ok(Self::Language),
            "mode" => Ok(Self::Mode),
            "layout" => Ok(Self::Layout),
            "esc" => Ok(Self::Cancel),
            "show" => Ok(Self::Show),
            "json" => Ok(Self::Json),
            "btn" => arg
                .parse()
                .map(Self::Button)
                .map_err(|_| format!("':btn' expects a key position, got '{arg}'")),
            "suggest" => {
                let mut slots: [String; SLOTS] = Default::default();
                let parts: Vec<&str> = arg.split('|').collect();
                if parts.len() > SLOTS {
                    return Err(format!("':suggest' takes at most {SLOTS} candidates"));
                }
                for (slot, part) in slots.iter_mut().zip(parts) {
                    *slot = part.trim().to_string();
                }
                Ok(Self::Suggest(slots))
            }
            other => Err(format!("unknown command ':{other}'")),
        }
    }
}
