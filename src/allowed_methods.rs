use crate::util::is_http_token;

/// Methods a policy permits, checked against the request method or the
/// preflight `Access-Control-Request-Method`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum AllowedMethods {
    /// Every method token is permitted.
    #[default]
    Any,
    /// Only the listed method tokens are permitted. Comparison is case-sensitive.
    List(Vec<String>),
}

impl AllowedMethods {
    /// Construct an explicit list of allowed methods.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn allows_method(&self, method: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(values) => values.iter().any(|allowed| allowed == method),
        }
    }

    /// Returns the first configured entry that is not a valid HTTP method token.
    pub(crate) fn first_invalid(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::List(values) => values
                .iter()
                .map(String::as_str)
                .find(|value| !is_http_token(value)),
        }
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
