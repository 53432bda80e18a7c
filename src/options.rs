use crate::constants::MAX_AGE_DISABLED;
use crate::origin::PatternError;
use crate::policy::OriginPolicy;
use indexmap::IndexMap;
use thiserror::Error;

/// Ordered table of origin policies.
///
/// Policies are consulted in insertion order and the first one whose origins
/// match the request wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsOptions {
    pub enabled: bool,
    pub policies: IndexMap<String, OriginPolicy>,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            policies: IndexMap::new(),
        }
    }
}

impl CorsOptions {
    /// Appends a policy under `key`. Re-using a key replaces the policy but keeps its position.
    pub fn with_policy<S: Into<String>>(mut self, key: S, policy: OriginPolicy) -> Self {
        self.policies.insert(key.into(), policy);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (key, policy) in &self.policies {
            if let Some(method) = policy.allowed_methods.first_invalid() {
                return Err(ValidationError::InvalidMethod {
                    policy: key.clone(),
                    method: method.to_string(),
                });
            }

            if policy.allowed_headers.has_empty_entry() {
                return Err(ValidationError::EmptyAllowedHeader {
                    policy: key.clone(),
                });
            }

            if policy
                .exposed_headers
                .iter()
                .any(|header| header.trim().is_empty())
            {
                return Err(ValidationError::EmptyExposedHeader {
                    policy: key.clone(),
                });
            }

            if policy.max_age < MAX_AGE_DISABLED {
                return Err(ValidationError::InvalidMaxAge {
                    policy: key.clone(),
                    value: policy.max_age,
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("policy '{policy}' allows method '{method}', which is not a valid HTTP method token")]
    InvalidMethod { policy: String, method: String },
    #[error("policy '{policy}' lists an empty allowed header name")]
    EmptyAllowedHeader { policy: String },
    #[error("policy '{policy}' lists an empty exposed header name")]
    EmptyExposedHeader { policy: String },
    #[error("policy '{policy}' has max age {value}; use -1 to disable the header")]
    InvalidMaxAge { policy: String, value: i64 },
    #[error("policy '{policy}' has an invalid allowed origin '{origin}'")]
    InvalidOriginPattern {
        policy: String,
        origin: String,
        #[source]
        source: PatternError,
    },
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
