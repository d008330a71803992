//! Deployment environment kinds and the validated `(kind, namespace)` pair.
//!
//! Environments form a closed set: `admin`, `redirects`, `staging`, and
//! `production`. Only `staging` hosts multiple concurrent namespaces; all
//! other kinds are singletons and carry no namespace.
//!
//! The canonical string form (`staging/magenta`, `production`) is used both
//! as the environment value sent to the GitHub deployments API and as the
//! naming convention for repository labels, so parsing and printing must
//! round-trip exactly.

use std::fmt;

use thiserror::Error;

/// A recognized deployment environment kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Environment {
    Admin,
    Redirects,
    Staging,
    Production,
}

impl Environment {
    /// Label names starting with this prefix declare a staging namespace.
    pub const STAGING_LABEL_PREFIX: &'static str = "staging/";

    /// Parses an environment name, returning `None` for anything outside
    /// the closed set (including the empty string).
    pub fn parse(name: &str) -> Option<Environment> {
        match name {
            "admin" => Some(Environment::Admin),
            "redirects" => Some(Environment::Redirects),
            "staging" => Some(Environment::Staging),
            "production" => Some(Environment::Production),
            _ => None,
        }
    }

    /// Whether this kind hosts multiple concurrent namespaces.
    ///
    /// Only staging does; every other kind is a singleton deployment target.
    pub fn has_multiple_namespaces(self) -> bool {
        matches!(self, Environment::Staging)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Admin => "admin",
            Environment::Redirects => "redirects",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from constructing a [`DeploymentEnvironment`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvironmentError {
    /// The kind string is not a member of the recognized set.
    #[error("invalid environment: '{0}'")]
    InvalidEnvironment(String),

    /// The kind requires a namespace but the supplied one is empty.
    #[error("invalid namespace: '{0}'")]
    InvalidNamespace(String),
}

/// A validated deployment target: an environment kind plus, for staging,
/// the namespace within it.
///
/// Construction is the single validation path for every source of
/// environments (explicit inputs, repository labels, pull-request labels,
/// the synthetic production target for main-branch pushes), so a malformed
/// value can never reach a deployment-creation call.
///
/// Derived equality and ordering coincide with canonical-string equality:
/// the `(kind, namespace)` pair maps injectively onto the canonical form, so
/// a `BTreeSet<DeploymentEnvironment>` de-duplicates by canonical string.
///
/// The only wire representation is the canonical string via [`fmt::Display`];
/// the struct shape itself never crosses a serialization boundary.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeploymentEnvironment {
    environment: Environment,
    namespace: Option<String>,
}

impl DeploymentEnvironment {
    /// Validates and constructs a deployment environment.
    ///
    /// A namespace supplied for a singleton kind is discarded, not rejected:
    /// explicit invocations may pass a leftover `NAMESPACE` input alongside
    /// `ENVIRONMENT=production` and still mean the singleton target.
    pub fn new(kind: &str, namespace: &str) -> Result<Self, EnvironmentError> {
        let environment = Environment::parse(kind)
            .ok_or_else(|| EnvironmentError::InvalidEnvironment(kind.to_string()))?;

        let namespace = if environment.has_multiple_namespaces() {
            if namespace.is_empty() {
                return Err(EnvironmentError::InvalidNamespace(namespace.to_string()));
            }
            Some(namespace.to_string())
        } else {
            None
        };

        Ok(DeploymentEnvironment {
            environment,
            namespace,
        })
    }

    /// The singleton production target, for synthesizing the main-branch
    /// push deployment without round-tripping through string validation.
    pub fn production() -> Self {
        DeploymentEnvironment {
            environment: Environment::Production,
            namespace: None,
        }
    }

    /// Parses a label name in canonical form (`staging/magenta`).
    ///
    /// The name is split on the first `/`; a missing namespace segment
    /// becomes the empty string, so `staging` and `staging/` both fail with
    /// [`EnvironmentError::InvalidNamespace`].
    pub fn from_label(name: &str) -> Result<Self, EnvironmentError> {
        let (kind, namespace) = match name.split_once('/') {
            Some((kind, namespace)) => (kind, namespace),
            None => (name, ""),
        };
        Self::new(kind, namespace)
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// The staging namespace, if this kind carries one.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}

impl fmt::Display for DeploymentEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{}/{}", self.environment, namespace),
            None => write!(f, "{}", self.environment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod environment {
        use super::*;

        #[test]
        fn parses_all_recognized_kinds() {
            assert_eq!(Environment::parse("admin"), Some(Environment::Admin));
            assert_eq!(
                Environment::parse("redirects"),
                Some(Environment::Redirects)
            );
            assert_eq!(Environment::parse("staging"), Some(Environment::Staging));
            assert_eq!(
                Environment::parse("production"),
                Some(Environment::Production)
            );
        }

        #[test]
        fn rejects_unknown_and_empty_names() {
            assert_eq!(Environment::parse("unknown"), None);
            assert_eq!(Environment::parse(""), None);
            assert_eq!(Environment::parse("Staging"), None);
        }

        #[test]
        fn only_staging_has_multiple_namespaces() {
            assert!(Environment::Staging.has_multiple_namespaces());
            assert!(!Environment::Admin.has_multiple_namespaces());
            assert!(!Environment::Redirects.has_multiple_namespaces());
            assert!(!Environment::Production.has_multiple_namespaces());
        }
    }

    mod deployment_environment {
        use super::*;

        #[test]
        fn production_retains_no_namespace() {
            let env = DeploymentEnvironment::new("production", "").unwrap();
            assert_eq!(env.environment(), Environment::Production);
            assert_eq!(env.namespace(), None);
        }

        #[test]
        fn namespace_discarded_for_singleton_kinds() {
            let env = DeploymentEnvironment::new("production", "magenta").unwrap();
            assert_eq!(env.namespace(), None);
            assert_eq!(env.to_string(), "production");
        }

        #[test]
        fn staging_retains_namespace() {
            let env = DeploymentEnvironment::new("staging", "magenta").unwrap();
            assert_eq!(env.environment(), Environment::Staging);
            assert_eq!(env.namespace(), Some("magenta"));
        }

        #[test]
        fn blank_environment_is_invalid() {
            let err = DeploymentEnvironment::new("", "").unwrap_err();
            assert_eq!(err, EnvironmentError::InvalidEnvironment(String::new()));
            assert_eq!(err.to_string(), "invalid environment: ''");
        }

        #[test]
        fn unknown_environment_is_invalid() {
            let err = DeploymentEnvironment::new("unknown", "").unwrap_err();
            assert_eq!(err.to_string(), "invalid environment: 'unknown'");
        }

        #[test]
        fn staging_with_blank_namespace_is_invalid() {
            let err = DeploymentEnvironment::new("staging", "").unwrap_err();
            assert_eq!(err, EnvironmentError::InvalidNamespace(String::new()));
            assert_eq!(err.to_string(), "invalid namespace: ''");
        }

        #[test]
        fn canonical_string_for_production() {
            let env = DeploymentEnvironment::new("production", "").unwrap();
            assert_eq!(env.to_string(), "production");
        }

        #[test]
        fn canonical_string_for_staging() {
            let env = DeploymentEnvironment::new("staging", "magenta").unwrap();
            assert_eq!(env.to_string(), "staging/magenta");
        }

        #[test]
        fn from_label_splits_on_first_separator() {
            let env = DeploymentEnvironment::from_label("staging/magenta").unwrap();
            assert_eq!(env.namespace(), Some("magenta"));

            // Everything after the first separator is the namespace.
            let env = DeploymentEnvironment::from_label("staging/a/b").unwrap();
            assert_eq!(env.namespace(), Some("a/b"));
        }

        #[test]
        fn from_label_without_namespace_segment() {
            let err = DeploymentEnvironment::from_label("staging").unwrap_err();
            assert_eq!(err, EnvironmentError::InvalidNamespace(String::new()));

            let err = DeploymentEnvironment::from_label("staging/").unwrap_err();
            assert_eq!(err, EnvironmentError::InvalidNamespace(String::new()));
        }
    }

    fn arb_deployment_environment() -> impl Strategy<Value = DeploymentEnvironment> {
        prop_oneof![
            Just(DeploymentEnvironment::new("admin", "").unwrap()),
            Just(DeploymentEnvironment::new("redirects", "").unwrap()),
            Just(DeploymentEnvironment::new("production", "").unwrap()),
            "[a-z0-9-]{1,12}".prop_map(|ns| DeploymentEnvironment::new("staging", &ns).unwrap()),
        ]
    }

    proptest! {
        #[test]
        fn label_round_trip(env in arb_deployment_environment()) {
            let parsed = DeploymentEnvironment::from_label(&env.to_string()).unwrap();
            prop_assert_eq!(parsed, env);
        }
    }
}
