use super::QueryResult;

/// Status of the most recent query. Exactly one variant is active.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    /// Nothing submitted yet, or the result was cleared.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    Success(QueryResult),
    Failure(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn result(&self) -> Option<&QueryResult> {
        match self {
            RequestState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failure(message) => Some(message),
            _ => None,
        }
    }
}
