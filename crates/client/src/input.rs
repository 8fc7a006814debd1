//! Input processing for the terminal client.
//!
//! Owns the text-to-command mapping so the app loop never deals with raw
//! lines.

use std::str::FromStr;

/// Verb of a command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
enum Verb {
    Help,
    Heroes,
    Bosses,
    Shop,
    Status,
    Fight,
    Attack,
    Item,
    Buy,
    Unlock,
    Flee,
    ResetProgress,
    Quit,
}

/// High-level outcome of parsing one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    ListHeroes,
    ListBosses,
    Shop,
    Status,
    Fight { hero: String, boss: String },
    /// Zero-based attack slot.
    Attack(usize),
    UseItem(String),
    Buy(String),
    UnlockHero(String),
    UnlockBoss(String),
    Flee,
    ResetProgress,
    Quit,
    /// Blank line.
    None,
}

/// Why a line was not understood. The message is shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ParseError(pub String);

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(Command::None);
        };
        let verb = Verb::from_str(first)
            .map_err(|_| ParseError(format!("unknown command '{first}', try 'help'")))?;

        let mut arg = |what: &str| {
            words
                .next()
                .map(str::to_owned)
                .ok_or_else(|| ParseError(format!("{verb} needs {what}")))
        };

        let command = match verb {
            Verb::Help => Command::Help,
            Verb::Heroes => Command::ListHeroes,
            Verb::Bosses => Command::ListBosses,
            Verb::Shop => Command::Shop,
            Verb::Status => Command::Status,
            Verb::Fight => Command::Fight {
                hero: arg("a hero id")?,
                boss: arg("a boss id")?,
            },
            Verb::Attack => {
                let raw = arg("an attack number")?;
                match raw.parse::<usize>() {
                    Ok(number) if number >= 1 => Command::Attack(number - 1),
                    _ => return Err(ParseError(format!("'{raw}' is not an attack number"))),
                }
            }
            Verb::Item => Command::UseItem(arg("an item id")?),
            Verb::Buy => Command::Buy(arg("an item id")?),
            Verb::Unlock => match arg("'hero' or 'boss'")?.as_str() {
                "hero" => Command::UnlockHero(arg("a hero id")?),
                "boss" => Command::UnlockBoss(arg("a boss id")?),
                other => return Err(ParseError(format!("cannot unlock a '{other}'"))),
            },
            Verb::Flee => Command::Flee,
            Verb::ResetProgress => Command::ResetProgress,
            Verb::Quit => Command::Quit,
        };
        Ok(command)
    }
}

pub const HELP: &str = "\
Commands:
  heroes | bosses | shop | status
  fight <hero> <boss>      start a battle
  attack <n>               use attack number n
  item <id>                use an item from your bag
  buy <id>                 buy an item from the shop
  unlock hero|boss <id>    spend gold on a new hero or boss
  flee                     abandon the current battle
  reset-progress           start over from scratch
  quit";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, ParseError> {
        line.parse()
    }

    #[test]
    fn battle_commands() {
        assert_eq!(
            parse("fight knight dragon"),
            Ok(Command::Fight {
                hero: "knight".into(),
                boss: "dragon".into()
            })
        );
        assert_eq!(parse("attack 2"), Ok(Command::Attack(1)));
        assert_eq!(parse("  ITEM health-potion "), Ok(Command::UseItem("health-potion".into())));
        assert_eq!(parse("flee"), Ok(Command::Flee));
    }

    #[test]
    fn meta_commands() {
        assert_eq!(parse("unlock hero mage"), Ok(Command::UnlockHero("mage".into())));
        assert_eq!(parse("unlock boss golem"), Ok(Command::UnlockBoss("golem".into())));
        assert_eq!(parse("reset-progress"), Ok(Command::ResetProgress));
        assert_eq!(parse(""), Ok(Command::None));
    }

    #[test]
    fn bad_input_explains_itself() {
        assert_eq!(
            parse("dance"),
            Err(ParseError("unknown command 'dance', try 'help'".into()))
        );
        assert_eq!(parse("fight knight"), Err(ParseError("fight needs a boss id".into())));
        assert!(parse("attack 0").is_err());
        assert!(parse("attack x").is_err());
        assert!(parse("unlock pet cat").is_err());
    }

    #[test]
    fn parse_errors_box_into_anyhow() {
        let err: anyhow::Error = parse("dance").unwrap_err().into();
        assert_eq!(err.to_string(), "unknown command 'dance', try 'help'");
    }
}
