//! Trigger-event model and parsing for workflow invocations.

pub mod events;
pub mod parser;

pub use events::{PullRequestEvent, PushEvent, TriggerEvent};
pub use parser::{parse_event, EventParseError};
