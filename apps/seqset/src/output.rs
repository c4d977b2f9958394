//! # Output Records
//!
//! The result of one script command, rendered as plain text or as a
//! single-line JSON object.

use crate::error::AppError;
use seqset_core::{RegistryStats, SetId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a command answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// `create`: the new identifier (0 on failure).
    Id(SetId),
    /// `size`: number of sequences.
    Count(usize),
    /// `insert`, `remove`, `contains`: the boolean answer.
    Flag(bool),
    /// `delete`, `clear`: no answer.
    Done,
    /// `stats`: registry-wide counters.
    Stats(RegistryStats),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Count(n) => write!(f, "{}", n),
            Self::Flag(b) => write!(f, "{}", b),
            Self::Done => f.write_str("ok"),
            Self::Stats(s) => write!(
                f,
                "sets={} sequences={} empty_sets={} next_id={}",
                s.sets, s.sequences, s.empty_sets, s.next_id
            ),
        }
    }
}

/// One executed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// 1-based source line.
    pub line: usize,
    /// Command name (`create`, `insert`, ..., `stats`).
    pub command: String,
    /// Target set, for commands that take one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub set: Option<SetId>,
    pub outcome: Outcome,
}

impl Record {
    /// Render as text (`insert 1 -> true`) or JSON.
    pub fn render(&self, json: bool) -> Result<String, AppError> {
        if json {
            return Ok(serde_json::to_string(self)?);
        }
        Ok(match self.set {
            Some(set) => format!("{} {} -> {}", self.command, set, self.outcome),
            None => format!("{} -> {}", self.command, self.outcome),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_rendering() {
        let record = Record {
            line: 3,
            command: "insert".to_string(),
            set: Some(SetId(1)),
            outcome: Outcome::Flag(true),
        };
        assert_eq!(record.render(false).expect("render"), "insert 1 -> true");

        let record = Record {
            line: 1,
            command: "create".to_string(),
            set: None,
            outcome: Outcome::Id(SetId(0)),
        };
        assert_eq!(record.render(false).expect("render"), "create -> 0");
    }

    #[test]
    fn json_rendering_is_single_line() {
        let record = Record {
            line: 2,
            command: "size".to_string(),
            set: Some(SetId(4)),
            outcome: Outcome::Count(12),
        };
        let json = record.render(true).expect("render");
        assert!(!json.contains('\n'));
        assert_eq!(
            json,
            r#"{"line":2,"command":"size","set":4,"outcome":{"kind":"count","value":12}}"#
        );
    }
}
