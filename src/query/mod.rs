//! Query submission: response model, request state and the controller that drives it.

mod backend;
mod lifecycle;
mod result;
mod state;

pub use backend::{HttpBackend, QueryBackend};
pub use lifecycle::{Liveness, QueryLifecycle, Submission};
pub use result::{QueryResult, Record};
pub use state::RequestState;
