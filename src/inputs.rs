//! Action inputs and invocation-mode selection.
//!
//! The runner passes action inputs as `INPUT_<NAME>` environment variables;
//! an unset variable and an empty one are equivalent. Everything else about
//! the invocation (event name, payload path, repository owner) comes from
//! the standard `GITHUB_*` context variables.
//!
//! Mode selection is all-or-nothing: if every deployment-selecting input is
//! empty the run is event-driven, and if any is set the run is explicit and
//! the required inputs must all be present. A half-filled set of inputs is
//! an error, never a guess at intent.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading inputs or the runner context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// An explicit invocation is missing one of its required inputs.
    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    /// A `GITHUB_*` context variable the run depends on is absent.
    #[error("missing workflow context variable: {0}")]
    MissingContext(&'static str),
}

/// The raw action inputs, one field per `INPUT_*` variable.
#[derive(Debug, Clone, Default)]
pub struct ActionInputs {
    pub app: String,
    pub environment: String,
    pub namespace: String,
    pub sha: String,
    pub git_ref: String,
    pub token: String,
}

/// How this run was invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// No deployment-selecting inputs: dispatch from the triggering event.
    EventDriven,

    /// Deploy exactly what the inputs name.
    Explicit(ExplicitInvocation),
}

/// A fully validated explicit invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplicitInvocation {
    /// The repository name to deploy.
    pub app: String,
    /// The environment kind string (validated later by construction).
    pub environment: String,
    /// The namespace, possibly empty for singleton kinds.
    pub namespace: String,
    /// The target reference: `SHA` wins over `REF` when both are set.
    pub git_ref: String,
}

fn env_or_empty(name: &str) -> String {
    env::var(name).unwrap_or_default()
}

impl ActionInputs {
    /// Reads all inputs from the environment.
    pub fn from_env() -> Self {
        ActionInputs {
            app: env_or_empty("INPUT_APP"),
            environment: env_or_empty("INPUT_ENVIRONMENT"),
            namespace: env_or_empty("INPUT_NAMESPACE"),
            sha: env_or_empty("INPUT_SHA"),
            git_ref: env_or_empty("INPUT_REF"),
            token: env_or_empty("INPUT_GITHUB_ACCESS_TOKEN"),
        }
    }

    /// The API credential, required in every mode.
    pub fn token(&self) -> Result<&str, InputError> {
        if self.token.is_empty() {
            return Err(InputError::MissingInput("GITHUB_ACCESS_TOKEN"));
        }
        Ok(&self.token)
    }

    /// Classifies the invocation.
    ///
    /// The token never participates in mode selection; it is required either
    /// way.
    pub fn mode(&self) -> Result<Mode, InputError> {
        let selecting = [
            &self.app,
            &self.environment,
            &self.namespace,
            &self.sha,
            &self.git_ref,
        ];
        if selecting.iter().all(|value| value.is_empty()) {
            return Ok(Mode::EventDriven);
        }

        if self.app.is_empty() {
            return Err(InputError::MissingInput("APP"));
        }
        if self.environment.is_empty() {
            return Err(InputError::MissingInput("ENVIRONMENT"));
        }
        let git_ref = if !self.sha.is_empty() {
            self.sha.clone()
        } else if !self.git_ref.is_empty() {
            self.git_ref.clone()
        } else {
            return Err(InputError::MissingInput("SHA or REF"));
        };

        Ok(Mode::Explicit(ExplicitInvocation {
            app: self.app.clone(),
            environment: self.environment.clone(),
            namespace: self.namespace.clone(),
            git_ref,
        }))
    }
}

/// The triggering event, as named by the runner.
#[derive(Debug, Clone)]
pub struct EventContext {
    pub event_name: String,
    pub event_path: PathBuf,
}

impl EventContext {
    pub fn from_env() -> Result<Self, InputError> {
        let event_name =
            env::var("GITHUB_EVENT_NAME").map_err(|_| InputError::MissingContext("GITHUB_EVENT_NAME"))?;
        let event_path =
            env::var("GITHUB_EVENT_PATH").map_err(|_| InputError::MissingContext("GITHUB_EVENT_PATH"))?;
        Ok(EventContext {
            event_name,
            event_path: PathBuf::from(event_path),
        })
    }
}

/// The owner of the repository this workflow runs in.
///
/// `GITHUB_REPOSITORY_OWNER` is set by the runner; the owner half of
/// `GITHUB_REPOSITORY` is the fallback.
pub fn repository_owner() -> Result<String, InputError> {
    if let Ok(owner) = env::var("GITHUB_REPOSITORY_OWNER") {
        if !owner.is_empty() {
            return Ok(owner);
        }
    }
    if let Ok(full) = env::var("GITHUB_REPOSITORY") {
        if let Some((owner, _)) = full.split_once('/') {
            if !owner.is_empty() {
                return Ok(owner.to_string());
            }
        }
    }
    Err(InputError::MissingContext("GITHUB_REPOSITORY_OWNER"))
}
