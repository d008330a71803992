//! Core domain types for deployment dispatch.
//!
//! The fundamental types used throughout the crate, designed to encode the
//! environment-validity invariants via the type system.

pub mod environment;
pub mod ids;

pub use environment::{DeploymentEnvironment, Environment, EnvironmentError};
pub use ids::{RepoId, Sha};
