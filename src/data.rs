use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// A record type that renders as one row of a titled table.
pub trait Table {
    /// Section title, e.g. `Team Stats`.
    const TITLE: &'static str;
    /// Column labels in declared field order.
    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<&str>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleResult {
    pub date: String,
    pub opponent: String,
    pub result: String,
    pub attendance: String,
}

impl Table for ScheduleResult {
    const TITLE: &'static str = "Schedule/Results";
    const COLUMNS: &'static [&'static str] = &["Date", "Opponent", "Result", "Attendance"];

    fn cells(&self) -> Vec<&str> {
        vec![
            self.date.as_str(),
            self.opponent.as_str(),
            self.result.as_str(),
            self.attendance.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamStat {
    pub stat: String,
    pub rank: String,
    pub value: String,
}

impl Table for TeamStat {
    const TITLE: &'static str = "Team Stats";
    const COLUMNS: &'static [&'static str] = &["Stat", "Rank", "Value"];

    fn cells(&self) -> Vec<&str> {
        vec![self.stat.as_str(), self.rank.as_str(), self.value.as_str()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndividualLeader {
    pub stat: String,
    pub player: String,
    pub value: String,
}

impl Table for IndividualLeader {
    const TITLE: &'static str = "Individual Leaders";
    const COLUMNS: &'static [&'static str] = &["Stat", "Player", "Value"];

    fn cells(&self) -> Vec<&str> {
        vec![self.stat.as_str(), self.player.as_str(), self.value.as_str()]
    }
}

/// Which sequence of a [`ScrapeReport`] a rule feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Schedule,
    TeamStat,
    IndividualLeader,
}

impl RecordKind {
    pub fn name(self) -> &'static str {
        match self {
            RecordKind::Schedule => ScheduleResult::TITLE,
            RecordKind::TeamStat => TeamStat::TITLE,
            RecordKind::IndividualLeader => IndividualLeader::TITLE,
        }
    }

    pub fn field_count(self) -> usize {
        match self {
            RecordKind::Schedule => ScheduleResult::COLUMNS.len(),
            RecordKind::TeamStat => TeamStat::COLUMNS.len(),
            RecordKind::IndividualLeader => IndividualLeader::COLUMNS.len(),
        }
    }

    /// Builds a record from field values in declared order. Missing
    /// trailing values become empty strings.
    pub fn build(self, fields: Vec<String>) -> Record {
        let mut fields = fields.into_iter();
        let mut next = || fields.next().unwrap_or_default();
        match self {
            RecordKind::Schedule => Record::Schedule(ScheduleResult {
                date: next(),
                opponent: next(),
                result: next(),
                attendance: next(),
            }),
            RecordKind::TeamStat => Record::TeamStat(TeamStat {
                stat: next(),
                rank: next(),
                value: next(),
            }),
            RecordKind::IndividualLeader => Record::IndividualLeader(IndividualLeader {
                stat: next(),
                player: next(),
                value: next(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Schedule(ScheduleResult),
    TeamStat(TeamStat),
    IndividualLeader(IndividualLeader),
}

/// The three sequences produced by one scrape, in document order.
///
/// Only the collector appends to it. Once a scrape returns, the report is
/// shared behind an `Arc` and never mutated again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScrapeReport {
    pub schedule_results: Vec<ScheduleResult>,
    pub team_stats: Vec<TeamStat>,
    pub individual_leaders: Vec<IndividualLeader>,
}

impl ScrapeReport {
    pub(crate) fn push(&mut self, record: Record) {
        match record {
            Record::Schedule(r) => self.schedule_results.push(r),
            Record::TeamStat(r) => self.team_stats.push(r),
            Record::IndividualLeader(r) => self.individual_leaders.push(r),
        }
    }

    pub fn len(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Schedule => self.schedule_results.len(),
            RecordKind::TeamStat => self.team_stats.len(),
            RecordKind::IndividualLeader => self.individual_leaders.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.schedule_results.is_empty()
            && self.team_stats.is_empty()
            && self.individual_leaders.is_empty()
    }
}

fn write_section<T: Table>(f: &mut fmt::Formatter<'_>, rows: &[T]) -> fmt::Result {
    writeln!(f, "{}:", T::TITLE)?;
    for row in rows {
        let line = T::COLUMNS
            .iter()
            .zip(row.cells())
            .map(|(column, cell)| {
                // one line per record, even for multi-line cells
                format!("{}: {}", column, cell.split_whitespace().join(" "))
            })
            .join(", ");
        writeln!(f, "{}", line)?;
    }
    Ok(())
}

impl fmt::Display for ScrapeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_section(f, &self.schedule_results)?;
        writeln!(f)?;
        write_section(f, &self.team_stats)?;
        writeln!(f)?;
        write_section(f, &self.individual_leaders)
    }
}
