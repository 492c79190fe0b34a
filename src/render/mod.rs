//! Turns request state into something a terminal can show.

mod table;

use std::fmt;

use log::warn;

use crate::query::{QueryResult, RequestState};

pub use table::{Column, TableBlock};

pub const PLACEHOLDER: &str = "Response will appear here...";
pub const LOADING: &str =
    "Processing your query... (Note: The first query might take a bit longer as the server starts up)";
pub const EMPTY_RESULT: &str = "No results.";

/// Summary prose, one entry per line. Every `\n` starts a new line, trailing ones included.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryBlock {
    pub lines: Vec<String>,
}

impl SummaryBlock {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text
                .split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
                .collect(),
        }
    }
}

/// The two independent parts of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub table: Option<TableBlock>,
    pub summary: Option<SummaryBlock>,
}

impl ResultView {
    pub fn from_result(result: &QueryResult) -> Self {
        let table = TableBlock::from_records(result.records());
        if let Some(table) = &table {
            let mismatched = table.schema_mismatches();
            if !mismatched.is_empty() {
                warn!(
                    "{} of {} rows do not match the first row's fields, rendering with the first row's columns",
                    mismatched.len(),
                    table.rows.len()
                );
            }
        }
        Self {
            table,
            summary: result.summary_text().map(SummaryBlock::new),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_none() && self.summary.is_none()
    }
}

/// What the response area shows for a given [`RequestState`].
#[derive(Debug, Clone, PartialEq)]
pub enum StateView {
    Placeholder,
    Loading,
    Failure(String),
    Result(ResultView),
}

impl StateView {
    pub fn from_state(state: &RequestState) -> Self {
        match state {
            RequestState::Idle => StateView::Placeholder,
            RequestState::Loading => StateView::Loading,
            RequestState::Failure(message) => StateView::Failure(message.clone()),
            RequestState::Success(result) => StateView::Result(ResultView::from_result(result)),
        }
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "{EMPTY_RESULT}");
        }
        if let Some(table) = &self.table {
            writeln!(f, "Results")?;
            write!(f, "{table}")?;
        }
        if let Some(summary) = &self.summary {
            if self.table.is_some() {
                writeln!(f)?;
            }
            writeln!(f, "Summary")?;
            for line in &summary.lines {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for StateView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateView::Placeholder => writeln!(f, "{PLACEHOLDER}"),
            StateView::Loading => writeln!(f, "{LOADING}"),
            StateView::Failure(message) => writeln!(f, "{message}"),
            StateView::Result(view) => write!(f, "{view}"),
        }
    }
}
