//! Capabilities the hosting server provides to the engine.
//!
//! The engine only needs to read a method and headers from a request, and to
//! create a response or add headers to one. Implementations are provided for
//! the [`http`] crate's request and response types, which covers hyper, axum
//! and tower based servers.

use crate::headers::{Header, HeaderWrite};
use crate::util::split_header_list;
use http::header::{HeaderName, HeaderValue};
use http::{Request, Response, StatusCode};
use tracing::warn;

/// Read access to an inbound request.
pub trait CorsRequest {
    fn method(&self) -> &str;

    /// First value of `name`, looked up case-insensitively.
    fn header(&self, name: &str) -> Option<&str>;

    /// Every value of `name` in arrival order.
    fn header_all(&self, name: &str) -> Vec<&str>;

    /// Comma-separated items across every occurrence of `name`, or `None` when absent.
    fn header_list(&self, name: &str) -> Option<Vec<&str>> {
        let values = self.header_all(name);
        if values.is_empty() {
            None
        } else {
            Some(split_header_list(values))
        }
    }
}

/// Write access to an outbound response.
pub trait CorsResponse {
    /// A fresh response with an empty body.
    fn with_status(status: u16) -> Self
    where
        Self: Sized;

    fn set_status(&mut self, status: u16);

    /// Replaces every existing value of `name`.
    fn set_header(&mut self, name: &str, value: &str);

    /// Adds another instance of `name`, keeping existing values.
    fn append_header(&mut self, name: &str, value: &str);
}

impl<T> CorsRequest for &T
where
    T: CorsRequest + ?Sized,
{
    fn method(&self) -> &str {
        (**self).method()
    }

    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }

    fn header_all(&self, name: &str) -> Vec<&str> {
        (**self).header_all(name)
    }
}

/// Writes an annotation to a response in order.
pub fn apply_headers<R>(headers: &[Header], response: &mut R)
where
    R: CorsResponse + ?Sized,
{
    for entry in headers {
        match entry.write {
            HeaderWrite::Set => response.set_header(entry.name, &entry.value),
            HeaderWrite::Append => response.append_header(entry.name, &entry.value),
        }
    }
}

impl<B> CorsRequest for Request<B> {
    fn method(&self) -> &str {
        Request::method(self).as_str()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers()
            .get(name)
            .map(|value| header_text(name, value))
    }

    fn header_all(&self, name: &str) -> Vec<&str> {
        self.headers()
            .get_all(name)
            .iter()
            .map(|value| header_text(name, value))
            .collect()
    }
}

/// Stands in for a request header value that is not valid UTF-8.
///
/// It is neither a method token nor a valid header name, so the header
/// still counts as present and fails method and header-list checks.
pub const UNDECODABLE_VALUE: &str = "\u{FFFD}";

fn header_text<'a>(name: &str, value: &'a HeaderValue) -> &'a str {
    match std::str::from_utf8(value.as_bytes()) {
        Ok(text) => text,
        Err(_) => {
            warn!(header = name, "request header value is not valid UTF-8");
            UNDECODABLE_VALUE
        }
    }
}

impl<B> CorsResponse for Response<B>
where
    B: Default,
{
    fn with_status(status: u16) -> Self {
        let mut response = Response::new(B::default());
        response.set_status(status);
        response
    }

    fn set_status(&mut self, status: u16) {
        match StatusCode::from_u16(status) {
            Ok(code) => *self.status_mut() = code,
            Err(_) => warn!(status, "ignoring invalid response status"),
        }
    }

    fn set_header(&mut self, name: &str, value: &str) {
        if let Some((name, value)) = header_pair(name, value) {
            self.headers_mut().insert(name, value);
        }
    }

    fn append_header(&mut self, name: &str, value: &str) {
        if let Some((name, value)) = header_pair(name, value) {
            self.headers_mut().append(name, value);
        }
    }
}

fn header_pair(name: &str, value: &str) -> Option<(HeaderName, HeaderValue)> {
    match (HeaderName::try_from(name), HeaderValue::from_bytes(value.as_bytes())) {
        (Ok(name), Ok(value)) => Some((name, value)),
        _ => {
            warn!(header = name, value, "dropping header that is not representable");
            None
        }
    }
}

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;
