use crate::{
    data::{Record, RecordKind, ScrapeReport},
    rules::{ExtractionRule, RowScope},
    ScrapeError,
};
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use tracing::debug;

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: selector.to_string(),
        reason: format!("{:?}", e),
    })
}

/// Trimmed text of the first element under `el` matching `selector`, or an
/// empty string when nothing matches.
pub fn child_text(el: ElementRef<'_>, selector: &Selector) -> String {
    el.select(selector)
        .next()
        .map(|child| child.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

#[derive(Debug)]
enum CompiledScope {
    Captioned {
        container: Selector,
        caption: Selector,
        text: &'static str,
    },
    NthTable {
        table: Selector,
        index: usize,
    },
}

#[derive(Debug)]
pub struct CompiledRule {
    kind: RecordKind,
    scope: CompiledScope,
    row: Selector,
    row_has: Selector,
    fields: Vec<Selector>,
}

impl CompiledRule {
    pub fn compile(rule: &ExtractionRule) -> Result<Self, ScrapeError> {
        let expected = rule.kind.field_count();
        if rule.fields.len() != expected {
            return Err(ScrapeError::FieldCount {
                kind: rule.kind.name(),
                expected,
                got: rule.fields.len(),
            });
        }

        let scope = match &rule.scope {
            RowScope::Captioned {
                container,
                caption,
                text,
            } => CompiledScope::Captioned {
                container: parse_selector(container)?,
                caption: parse_selector(caption)?,
                text: *text,
            },
            RowScope::NthTable { table, index } => CompiledScope::NthTable {
                table: parse_selector(table)?,
                index: *index,
            },
        };

        Ok(CompiledRule {
            kind: rule.kind,
            scope,
            row: parse_selector(rule.row)?,
            row_has: parse_selector(rule.row_has)?,
            fields: rule
                .fields
                .iter()
                .map(|f| parse_selector(f.selector))
                .collect::<Result<_, _>>()?,
        })
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    fn scopes<'a>(&self, doc: &'a Html) -> Vec<ElementRef<'a>> {
        match &self.scope {
            CompiledScope::Captioned {
                container,
                caption,
                text,
            } => doc
                .select(container)
                .filter(|el| {
                    el.select(caption)
                        .any(|c| c.text().collect::<String>().contains(text))
                })
                .collect(),
            CompiledScope::NthTable { table, index } => {
                doc.select(table).nth(*index).into_iter().collect()
            }
        }
    }

    /// Matching rows in document order. A row reachable through two nested
    /// scopes is yielded once.
    pub fn rows<'a>(&'a self, doc: &'a Html) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        let mut seen = HashSet::new();
        self.scopes(doc)
            .into_iter()
            .flat_map(move |scope| scope.select(&self.row))
            .filter(move |row| row.select(&self.row_has).next().is_some())
            .filter(move |row| seen.insert(row.id()))
    }

    pub fn extract(&self, row: ElementRef<'_>) -> Record {
        let fields = self.fields.iter().map(|sel| child_text(row, sel)).collect();
        self.kind.build(fields)
    }
}

/// A validated set of rules, at most one per record kind.
#[derive(Debug)]
pub struct CompiledRuleSet {
    rules: Vec<CompiledRule>,
}

impl CompiledRuleSet {
    pub fn new(rules: &[ExtractionRule]) -> Result<Self, ScrapeError> {
        let mut kinds = HashSet::new();
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            if !kinds.insert(rule.kind) {
                return Err(ScrapeError::DuplicateRule(rule.kind.name()));
            }
            compiled.push(CompiledRule::compile(rule)?);
        }
        Ok(CompiledRuleSet { rules: compiled })
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Walks every rule over `doc` and returns the filled report.
    pub fn collect(&self, doc: &Html) -> ScrapeReport {
        let mut report = ScrapeReport::default();
        for rule in &self.rules {
            for row in rule.rows(doc) {
                report.push(rule.extract(row));
            }
            debug!(
                "Collected {} {} rows",
                report.len(rule.kind),
                rule.kind.name()
            );
        }
        report
    }
}
