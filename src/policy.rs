use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::MAX_AGE_DISABLED;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::AllowedOrigins;

const DEFAULT_MAX_AGE: i64 = 1800;

/// CORS rules for one configured origin key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OriginPolicy {
    pub allowed_origins: AllowedOrigins,
    pub allowed_methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub allow_credentials: bool,
    /// Seconds a preflight result may be cached. [`MAX_AGE_DISABLED`] omits the header.
    pub max_age: i64,
}

impl Default for OriginPolicy {
    fn default() -> Self {
        Self {
            allowed_origins: AllowedOrigins::Any,
            allowed_methods: AllowedMethods::Any,
            allowed_headers: AllowedHeaders::Any,
            exposed_headers: ExposedHeaders::default(),
            allow_credentials: true,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

impl OriginPolicy {
    pub(crate) fn max_age_header_value(&self) -> Option<String> {
        (self.max_age > MAX_AGE_DISABLED).then(|| self.max_age.to_string())
    }
}
