use crate::constants::{header, method};
use crate::host::CorsRequest;

/// The parts of an inbound request that CORS negotiation reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    /// Parsed `Access-Control-Request-Headers`, `None` when the header is absent.
    pub access_control_request_headers: Option<Vec<&'a str>>,
}

impl<'a> RequestContext<'a> {
    pub fn from_request<R>(request: &'a R) -> Self
    where
        R: CorsRequest + ?Sized,
    {
        Self {
            method: request.method(),
            origin: request.header(header::ORIGIN),
            access_control_request_method: request.header(header::ACCESS_CONTROL_REQUEST_METHOD),
            access_control_request_headers: request
                .header_list(header::ACCESS_CONTROL_REQUEST_HEADERS),
        }
    }

    pub fn has_origin(&self) -> bool {
        self.origin.is_some()
    }

    /// `OPTIONS` carrying `Access-Control-Request-Method`, whatever its value.
    pub fn is_preflight(&self) -> bool {
        self.method == method::OPTIONS && self.access_control_request_method.is_some()
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
