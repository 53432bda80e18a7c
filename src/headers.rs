/// Ordered header writes making up one response annotation.
pub type Headers = Vec<Header>;

/// How a header is written to the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderWrite {
    /// Replace any existing value.
    Set,
    /// Add another instance alongside existing values.
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: &'static str,
    pub value: String,
    pub write: HeaderWrite,
}

impl Header {
    pub fn set<V: Into<String>>(name: &'static str, value: V) -> Self {
        Self {
            name,
            value: value.into(),
            write: HeaderWrite::Set,
        }
    }

    pub fn append<V: Into<String>>(name: &'static str, value: V) -> Self {
        Self {
            name,
            value: value.into(),
            write: HeaderWrite::Append,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(8)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: Vec::with_capacity(estimate),
        }
    }

    pub(crate) fn set<V: Into<String>>(&mut self, name: &'static str, value: V) {
        self.headers.push(Header::set(name, value));
    }

    pub(crate) fn append<V: Into<String>>(&mut self, name: &'static str, value: V) {
        self.headers.push(Header::append(name, value));
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        self.headers.extend(other.headers);
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
