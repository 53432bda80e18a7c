use std::ops::Deref;

/// Response headers the browser may expose to the calling script.
///
/// Entries are emitted verbatim and in configured order, one
/// `Access-Control-Expose-Headers` instance per entry.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExposedHeaders {
    values: Vec<String>,
}

impl ExposedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl Deref for ExposedHeaders {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl From<Vec<String>> for ExposedHeaders {
    fn from(values: Vec<String>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
