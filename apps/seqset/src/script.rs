//! # Script Interpreter
//!
//! Drives a `SetRegistry` from line-oriented commands:
//!
//! ```text
//! create [hash]          # new set; hash defaults to the configured provider
//! delete <id>
//! size <id>
//! insert <id> [n ...]    # no numbers = length 0, `null` = absent data
//! remove <id> [n ...]
//! clear <id>
//! contains <id> [n ...]
//! stats
//! ```
//!
//! Blank lines and `#` comments are skipped. Every executed command yields
//! exactly one `Record`.

use crate::error::AppError;
use crate::hashers;
use crate::output::{Outcome, Record};
use seqset_core::{Operation, SetId, SetRegistry};

/// Keyword standing for absent sequence data.
const NULL_KEYWORD: &str = "null";

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { hash: Option<String> },
    Delete { id: SetId },
    Size { id: SetId },
    Insert { id: SetId, data: Option<Vec<u64>> },
    Remove { id: SetId, data: Option<Vec<u64>> },
    Clear { id: SetId },
    Contains { id: SetId, data: Option<Vec<u64>> },
    Stats,
}

impl Command {
    /// Parse a line. Returns `Ok(None)` for blank lines and comments.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let code = line.split('#').next().unwrap_or_default();
        let mut tokens = code.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = tokens.collect();

        let command = match name.to_ascii_lowercase().as_str() {
            "create" => match rest.as_slice() {
                [] => Self::Create { hash: None },
                [hash] => Self::Create {
                    hash: Some((*hash).to_string()),
                },
                _ => return Err("create takes at most one hash function name".to_string()),
            },
            "delete" => Self::Delete {
                id: parse_id_only(name, &rest)?,
            },
            "size" => Self::Size {
                id: parse_id_only(name, &rest)?,
            },
            "clear" => Self::Clear {
                id: parse_id_only(name, &rest)?,
            },
            "insert" => {
                let (id, data) = parse_id_and_data(name, &rest)?;
                Self::Insert { id, data }
            }
            "remove" => {
                let (id, data) = parse_id_and_data(name, &rest)?;
                Self::Remove { id, data }
            }
            "contains" => {
                let (id, data) = parse_id_and_data(name, &rest)?;
                Self::Contains { id, data }
            }
            "stats" if rest.is_empty() => Self::Stats,
            "stats" => return Err("stats takes no arguments".to_string()),
            other => return Err(format!("unknown command '{}'", other)),
        };
        Ok(Some(command))
    }

    /// Name used in output records.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => Operation::Create.as_str(),
            Self::Delete { .. } => Operation::Delete.as_str(),
            Self::Size { .. } => Operation::Size.as_str(),
            Self::Insert { .. } => Operation::Insert.as_str(),
            Self::Remove { .. } => Operation::Remove.as_str(),
            Self::Clear { .. } => Operation::Clear.as_str(),
            Self::Contains { .. } => Operation::Contains.as_str(),
            Self::Stats => "stats",
        }
    }
}

fn parse_id(command: &str, token: Option<&&str>) -> Result<SetId, String> {
    let token = token.ok_or_else(|| format!("{} requires a set id", command))?;
    token
        .parse::<u64>()
        .map(SetId)
        .map_err(|_| format!("invalid set id '{}'", token))
}

fn parse_id_only(command: &str, rest: &[&str]) -> Result<SetId, String> {
    if rest.len() > 1 {
        return Err(format!("{} takes exactly one set id", command));
    }
    parse_id(command, rest.first())
}

fn parse_id_and_data(command: &str, rest: &[&str]) -> Result<(SetId, Option<Vec<u64>>), String> {
    let id = parse_id(command, rest.first())?;
    let values = rest.get(1..).unwrap_or_default();

    if values.first().is_some_and(|t| t.eq_ignore_ascii_case(NULL_KEYWORD)) {
        if values.len() > 1 {
            return Err(format!("'{}' cannot be followed by values", NULL_KEYWORD));
        }
        return Ok((id, None));
    }

    let data = values
        .iter()
        .map(|t| {
            t.parse::<u64>()
                .map_err(|_| format!("invalid sequence element '{}'", t))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((id, Some(data)))
}

// =============================================================================
// INTERPRETER
// =============================================================================

/// Executes commands against one registry that lives as long as the interpreter.
#[derive(Debug)]
pub struct Interpreter {
    registry: SetRegistry,
    default_hash: String,
}

impl Interpreter {
    /// Create an interpreter over an empty registry.
    ///
    /// Fails if `default_hash` names no provider.
    pub fn new(default_hash: impl Into<String>) -> Result<Self, AppError> {
        let default_hash = default_hash.into();
        hashers::lookup(&default_hash)?;
        Ok(Self {
            registry: SetRegistry::new(),
            default_hash,
        })
    }

    /// Read-only view of the registry.
    #[must_use]
    pub fn registry(&self) -> &SetRegistry {
        &self.registry
    }

    /// Execute one command. `line` is recorded in the result.
    pub fn execute(&mut self, line: usize, command: &Command) -> Result<Record, AppError> {
        let reg = &mut self.registry;
        let (set, outcome) = match command {
            Command::Create { hash } => {
                let name = hash.as_deref().unwrap_or(&self.default_hash);
                let function = hashers::lookup(name)?;
                (None, Outcome::Id(reg.create(function)))
            }
            Command::Delete { id } => {
                reg.delete(*id);
                (Some(*id), Outcome::Done)
            }
            Command::Size { id } => (Some(*id), Outcome::Count(reg.size(*id))),
            Command::Insert { id, data } => {
                (Some(*id), Outcome::Flag(reg.insert(*id, data.as_deref())))
            }
            Command::Remove { id, data } => {
                (Some(*id), Outcome::Flag(reg.remove(*id, data.as_deref())))
            }
            Command::Clear { id } => {
                reg.clear(*id);
                (Some(*id), Outcome::Done)
            }
            Command::Contains { id, data } => {
                (Some(*id), Outcome::Flag(reg.contains(*id, data.as_deref())))
            }
            Command::Stats => (None, Outcome::Stats(reg.stats())),
        };

        tracing::trace!(line, command = command.name(), %outcome, "executed");

        Ok(Record {
            line,
            command: command.name().to_string(),
            set,
            outcome,
        })
    }

    /// Parse and execute one source line.
    ///
    /// Returns `Ok(None)` for blank lines and comments.
    pub fn execute_line(&mut self, line: usize, text: &str) -> Result<Option<Record>, AppError> {
        let command =
            Command::parse(text).map_err(|message| AppError::Parse { line, message })?;
        command.map(|c| self.execute(line, &c)).transpose()
    }

    /// Execute a whole script, stopping at the first error.
    pub fn run_script(&mut self, source: &str) -> Result<Vec<Record>, AppError> {
        let mut records = Vec::new();
        for (index, text) in source.lines().enumerate() {
            if let Some(record) = self.execute_line(index + 1, text)? {
                records.push(record);
            }
        }
        Ok(records)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_blank_and_comment() {
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse("   # just a note"), Ok(None));
    }

    #[test]
    fn parse_create_variants() {
        assert_eq!(Command::parse("create"), Ok(Some(Command::Create { hash: None })));
        assert_eq!(
            Command::parse("CREATE sum"),
            Ok(Some(Command::Create {
                hash: Some("sum".to_string())
            }))
        );
        assert!(Command::parse("create a b").is_err());
    }

    #[test]
    fn parse_sequence_forms() {
        assert_eq!(
            Command::parse("insert 1 7 9 # trailing"),
            Ok(Some(Command::Insert {
                id: SetId(1),
                data: Some(vec![7, 9])
            }))
        );
        assert_eq!(
            Command::parse("contains 2"),
            Ok(Some(Command::Contains {
                id: SetId(2),
                data: Some(vec![])
            }))
        );
        assert_eq!(
            Command::parse("remove 3 null"),
            Ok(Some(Command::Remove {
                id: SetId(3),
                data: None
            }))
        );
    }

    #[test]
    fn parse_errors() {
        assert!(Command::parse("insert").is_err());
        assert!(Command::parse("insert x 1").is_err());
        assert!(Command::parse("insert 1 -4").is_err());
        assert!(Command::parse("insert 1 null 2").is_err());
        assert!(Command::parse("size 1 2").is_err());
        assert!(Command::parse("stats now").is_err());
        assert!(Command::parse("frobnicate 1").is_err());
    }

    #[test]
    fn interpreter_rejects_unknown_default() {
        assert!(matches!(
            Interpreter::new("crc32"),
            Err(AppError::UnknownHash(_))
        ));
    }

    #[test]
    fn execute_line_reports_line_number() {
        let mut interp = Interpreter::new("fnv1a").expect("interp");
        let err = interp.execute_line(7, "insert one").expect_err("parse error");
        assert!(matches!(err, AppError::Parse { line: 7, .. }));
    }
}
