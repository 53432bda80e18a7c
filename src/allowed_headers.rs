/// Request headers a policy permits during preflight.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AllowedHeaders {
    /// Every requested header is permitted.
    #[default]
    Any,
    List(Vec<String>),
}

impl AllowedHeaders {
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

    /// Every requested header (trimmed) must equal a configured entry exactly.
    /// An empty request list is always allowed.
    pub fn allows_headers(&self, requested: &[&str]) -> bool {
        match self {
            Self::Any => true,
            Self::List(allowed) => requested.iter().all(|header| {
                let header = header.trim();
                allowed.iter().any(|allowed_header| allowed_header == header)
            }),
        }
    }

    pub(crate) fn has_empty_entry(&self) -> bool {
        match self {
            Self::Any => false,
            Self::List(values) => values.iter().any(|value| value.trim().is_empty()),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
