use crate::constants::status;
use crate::headers::{Header, Headers};
use std::fmt;

/// Why a preflight request was refused by its matched policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreflightRejectionReason {
    MethodNotAllowed { requested_method: String },
    HeadersNotAllowed { requested_headers: Vec<String> },
    /// `Access-Control-Request-Method` was present but blank.
    MissingAccessControlRequestMethod,
    /// `Access-Control-Request-Method` was not a method token.
    InvalidAccessControlRequestMethod { value: String },
}

impl fmt::Display for PreflightRejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MethodNotAllowed { requested_method } => {
                write!(f, "method '{requested_method}' not allowed")
            }
            Self::HeadersNotAllowed { requested_headers } => {
                write!(f, "headers '{}' not allowed", requested_headers.join(", "))
            }
            Self::MissingAccessControlRequestMethod => {
                write!(f, "Access-Control-Request-Method header is empty")
            }
            Self::InvalidAccessControlRequestMethod { value } => {
                write!(f, "Access-Control-Request-Method '{value}' is not a method token")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightRejection {
    /// Configuration key of the policy that matched the origin.
    pub policy: String,
    pub reason: PreflightRejectionReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleRejectionReason {
    MethodNotAllowed { method: String },
}

impl fmt::Display for SimpleRejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MethodNotAllowed { method } => write!(f, "method '{method}' not allowed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRejection {
    pub policy: String,
    pub reason: SimpleRejectionReason,
}

/// Outcome of evaluating one request.
///
/// Rejections always map to `403 Forbidden` with no body and no CORS headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// Answer with `200 OK` carrying `headers`; the downstream handler must not run.
    PreflightAccepted { policy: String, headers: Headers },
    PreflightRejected(PreflightRejection),
    /// Run the downstream handler, then apply `headers` to its response.
    SimpleAccepted { policy: String, headers: Headers },
    SimpleRejected(SimpleRejection),
    /// No origin, CORS disabled, or no policy matched; pass the request through untouched.
    NotApplicable,
}

impl CorsDecision {
    /// Status of the short-circuit response, `None` when the downstream handler runs.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::PreflightAccepted { .. } => Some(status::OK),
            Self::PreflightRejected(_) | Self::SimpleRejected(_) => Some(status::FORBIDDEN),
            Self::SimpleAccepted { .. } | Self::NotApplicable => None,
        }
    }

    /// Headers to write, empty for rejections and pass-through.
    pub fn headers(&self) -> &[Header] {
        match self {
            Self::PreflightAccepted { headers, .. } | Self::SimpleAccepted { headers, .. } => {
                headers
            }
            _ => &[],
        }
    }
}
