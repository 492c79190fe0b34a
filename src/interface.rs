//! The query page: input text, submit action, response area and reference table.

use std::fmt;

use crate::query::{QueryBackend, QueryLifecycle, RequestState, Submission};
use crate::reference::{COLUMN_MAPPINGS, ColumnMapping, reference_table};
use crate::render::StateView;

pub struct QueryInterface<B> {
    input: String,
    lifecycle: QueryLifecycle<B>,
}

impl<B> QueryInterface<B> {
    pub fn new(backend: B) -> Self {
        Self {
            input: String::new(),
            lifecycle: QueryLifecycle::new(backend),
        }
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// The submit trigger is disabled while a request is in flight.
    pub fn submit_enabled(&self) -> bool {
        !self.lifecycle.is_loading()
    }

    pub fn state(&self) -> RequestState {
        self.lifecycle.state()
    }

    pub fn lifecycle(&self) -> &QueryLifecycle<B> {
        &self.lifecycle
    }

    pub fn screen(&self) -> Screen {
        Screen {
            response: StateView::from_state(&self.lifecycle.state()),
            reference: COLUMN_MAPPINGS,
        }
    }
}

impl<B: QueryBackend> QueryInterface<B> {
    pub async fn submit(&self) -> Submission {
        if !self.submit_enabled() {
            return Submission::Busy;
        }
        self.lifecycle.submit(&self.input).await
    }
}

impl<B> Drop for QueryInterface<B> {
    fn drop(&mut self) {
        self.lifecycle.liveness().unmount();
    }
}

/// Everything the page shows at one moment.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub response: StateView,
    pub reference: &'static [ColumnMapping],
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Response")?;
        write!(f, "{}", self.response)?;
        writeln!(f)?;
        writeln!(f, "Column Mapping Reference")?;
        write!(f, "{}", reference_table(self.reference))
    }
}
