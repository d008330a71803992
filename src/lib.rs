//! Deployment dispatch - a GitHub Action that turns repository events into
//! GitHub deployment-creation calls.
//!
//! Pushes to the main branch deploy production and every staging namespace
//! not reserved by an open pull request's `staging/<namespace>` label;
//! pull-request events deploy the namespaces the PR's own labels name; an
//! explicitly parameterized invocation deploys exactly what it asks for.

pub mod dispatch;
pub mod events;
pub mod github;
pub mod inputs;
pub mod outputs;
pub mod resolve;
pub mod run;
pub mod types;
