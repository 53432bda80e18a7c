//! Deserializable CORS configuration.
//!
//! ```yaml
//! enabled: true
//! configurations:
//!   web:
//!     allowed-origins: ["https://app.example.com", "https://.*\\.example\\.com"]
//!     allowed-methods: [GET, POST]
//!     allowed-headers: "*"
//!     exposed-headers: [X-Request-Id]
//!     allow-credentials: false
//!     max-age: 600
//! ```
//!
//! Keys keep their declaration order, which is the order policies are matched in.

use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::WILDCARD;
use crate::exposed_headers::ExposedHeaders;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::{AllowedOrigins, OriginMatcher};
use crate::policy::OriginPolicy;
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CorsSettings {
    pub enabled: bool,
    pub configurations: IndexMap<String, PolicySettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PolicySettings {
    #[serde(alias = "allowed-origins", alias = "allowedOrigins")]
    pub allowed_origins: ListSetting,
    #[serde(alias = "allowed-methods", alias = "allowedMethods")]
    pub allowed_methods: ListSetting,
    #[serde(alias = "allowed-headers", alias = "allowedHeaders")]
    pub allowed_headers: ListSetting,
    #[serde(alias = "exposed-headers", alias = "exposedHeaders")]
    pub exposed_headers: Vec<String>,
    #[serde(alias = "allow-credentials", alias = "allowCredentials")]
    pub allow_credentials: bool,
    #[serde(alias = "max-age", alias = "maxAge")]
    pub max_age: i64,
}

impl Default for PolicySettings {
    fn default() -> Self {
        let defaults = OriginPolicy::default();
        Self {
            allowed_origins: ListSetting::Any,
            allowed_methods: ListSetting::Any,
            allowed_headers: ListSetting::Any,
            exposed_headers: Vec::new(),
            allow_credentials: defaults.allow_credentials,
            max_age: defaults.max_age,
        }
    }
}

/// A list-valued setting that may also mean "anything".
///
/// `null`, `"*"` and `["*"]` all mean anything; any other string or list is taken literally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ListSetting {
    #[default]
    Any,
    One(String),
    Many(Vec<String>),
}

impl ListSetting {
    /// `None` stands for "anything".
    fn into_values(self) -> Option<Vec<String>> {
        match self {
            Self::Any => None,
            Self::One(value) if value == WILDCARD => None,
            Self::One(value) => Some(vec![value]),
            Self::Many(values) if values.len() == 1 && values[0] == WILDCARD => None,
            Self::Many(values) => Some(values),
        }
    }
}

impl CorsSettings {
    pub fn into_options(self) -> Result<CorsOptions, ValidationError> {
        CorsOptions::try_from(self)
    }
}

impl PolicySettings {
    fn into_policy(self, key: &str) -> Result<OriginPolicy, ValidationError> {
        let allowed_origins = match self.allowed_origins.into_values() {
            None => AllowedOrigins::Any,
            Some(values) => values
                .into_iter()
                .map(|origin| {
                    OriginMatcher::new(origin.as_str()).map_err(|source| {
                        ValidationError::InvalidOriginPattern {
                            policy: key.to_string(),
                            origin,
                            source,
                        }
                    })
                })
                .collect::<Result<Vec<_>, _>>()?
                .into(),
        };

        Ok(OriginPolicy {
            allowed_origins,
            allowed_methods: self
                .allowed_methods
                .into_values()
                .map_or(AllowedMethods::Any, AllowedMethods::List),
            allowed_headers: self
                .allowed_headers
                .into_values()
                .map_or(AllowedHeaders::Any, AllowedHeaders::List),
            exposed_headers: ExposedHeaders::from(self.exposed_headers),
            allow_credentials: self.allow_credentials,
            max_age: self.max_age,
        })
    }
}

impl TryFrom<CorsSettings> for CorsOptions {
    type Error = ValidationError;

    fn try_from(settings: CorsSettings) -> Result<Self, Self::Error> {
        let mut policies = IndexMap::with_capacity(settings.configurations.len());
        for (key, policy) in settings.configurations {
            let policy = policy.into_policy(&key)?;
            policies.insert(key, policy);
        }

        let options = CorsOptions {
            enabled: settings.enabled,
            policies,
        };
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;
