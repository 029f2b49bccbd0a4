//! Declarative extraction rules.
//!
//! A rule says where the rows of one record kind live in a page and which
//! descendant of each row holds each field. Rules carry no behavior; they
//! are compiled into selectors by [`crate::collector::CompiledRuleSet`].

use crate::data::RecordKind;

/// Where the candidate rows of a rule are searched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowScope {
    /// Every element matching `container` that has a `caption` descendant
    /// whose text contains `text` (case-sensitive).
    Captioned {
        container: &'static str,
        caption: &'static str,
        text: &'static str,
    },
    /// The `index`-th (0-based, document order) element matching `table`.
    NthTable { table: &'static str, index: usize },
}

/// Names one field and the selector, scoped to the matched row, whose
/// first match supplies its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub selector: &'static str,
}

impl FieldRule {
    pub const fn new(name: &'static str, selector: &'static str) -> Self {
        FieldRule { name, selector }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRule {
    pub kind: RecordKind,
    pub scope: RowScope,
    /// Selector for the rows inside the scope.
    pub row: &'static str,
    /// A row is skipped unless it has a descendant matching this.
    pub row_has: &'static str,
    pub fields: Vec<FieldRule>,
}

pub mod ncaa {
    use super::*;

    pub const DEFAULT_URL: &str = "https://stats.ncaa.org/teams/557367";

    const STATS_TABLE: &str = "table.mytable";

    pub fn schedule() -> ExtractionRule {
        ExtractionRule {
            kind: RecordKind::Schedule,
            scope: RowScope::Captioned {
                container: "fieldset",
                caption: "legend",
                text: "Schedule/Results",
            },
            row: "tr",
            row_has: "td",
            fields: vec![
                FieldRule::new("date", "td:nth-child(1)"),
                FieldRule::new("opponent", "td:nth-child(2) a"),
                FieldRule::new("result", "td:nth-child(3) a"),
                FieldRule::new("attendance", "td:nth-child(4)"),
            ],
        }
    }

    pub fn team_stats() -> ExtractionRule {
        ExtractionRule {
            kind: RecordKind::TeamStat,
            scope: RowScope::NthTable {
                table: STATS_TABLE,
                index: 0,
            },
            row: "tr",
            row_has: "td",
            fields: vec![
                FieldRule::new("stat", "td:nth-child(1)"),
                FieldRule::new("rank", "td:nth-child(2)"),
                FieldRule::new("value", "td:nth-child(3)"),
            ],
        }
    }

    pub fn individual_leaders() -> ExtractionRule {
        ExtractionRule {
            kind: RecordKind::IndividualLeader,
            scope: RowScope::NthTable {
                table: STATS_TABLE,
                index: 1,
            },
            row: "tr",
            row_has: "td",
            fields: vec![
                FieldRule::new("stat", "td:nth-child(1)"),
                FieldRule::new("player", "td:nth-child(2) a"),
                FieldRule::new("value", "td:nth-child(3)"),
            ],
        }
    }

    /// The three rules for an NCAA team page.
    pub fn rules() -> Vec<ExtractionRule> {
        vec![schedule(), team_stats(), individual_leaders()]
    }
}
