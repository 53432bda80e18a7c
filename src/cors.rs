use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::options::{CorsOptions, ValidationError};
use crate::policy::OriginPolicy;
use crate::result::{
    CorsDecision, PreflightRejection, PreflightRejectionReason, SimpleRejection,
    SimpleRejectionReason,
};
use crate::util::is_http_token;
use tracing::{debug, trace};

/// Core CORS engine that evaluates requests against an ordered table of
/// [`OriginPolicy`] entries held in [`CorsOptions`].
///
/// The engine is immutable once built and can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Cors {
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Finds the first policy, in declaration order, whose origins match `origin`.
    ///
    /// Policies without any configured origin are skipped.
    pub fn resolve_policy(&self, origin: &str) -> Option<(&str, &OriginPolicy)> {
        self.options
            .policies
            .iter()
            .find(|(key, policy)| {
                if policy.allowed_origins.is_empty() {
                    trace!(policy = %key, "skipping policy without allowed origins");
                    return false;
                }
                let matched = policy.allowed_origins.matches(origin);
                trace!(policy = %key, origin, matched, "evaluated origin policy");
                matched
            })
            .map(|(key, policy)| (key.as_str(), policy))
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        if !self.options.enabled {
            return CorsDecision::NotApplicable;
        }

        let Some(origin) = request.origin else {
            return CorsDecision::NotApplicable;
        };

        let Some((key, policy)) = self.resolve_policy(origin) else {
            debug!(origin, method = request.method, "no CORS policy matches origin");
            return CorsDecision::NotApplicable;
        };

        if request.is_preflight() {
            Self::process_preflight(request, origin, key, policy)
        } else {
            Self::process_simple(request, origin, key, policy)
        }
    }

    fn process_preflight(
        request: &RequestContext<'_>,
        origin: &str,
        key: &str,
        policy: &OriginPolicy,
    ) -> CorsDecision {
        let requested_method = request.access_control_request_method.unwrap_or_default();

        if requested_method.trim().is_empty() {
            return Self::reject_preflight(
                origin,
                key,
                PreflightRejectionReason::MissingAccessControlRequestMethod,
            );
        }
        if !is_http_token(requested_method) {
            return Self::reject_preflight(
                origin,
                key,
                PreflightRejectionReason::InvalidAccessControlRequestMethod {
                    value: requested_method.to_string(),
                },
            );
        }

        if !policy.allowed_methods.allows_method(requested_method) {
            return Self::reject_preflight(
                origin,
                key,
                PreflightRejectionReason::MethodNotAllowed {
                    requested_method: requested_method.to_string(),
                },
            );
        }

        let requested_headers = request.access_control_request_headers.as_deref();
        if let Some(requested) = requested_headers
            && !policy.allowed_headers.allows_headers(requested)
        {
            return Self::reject_preflight(
                origin,
                key,
                PreflightRejectionReason::HeadersNotAllowed {
                    requested_headers: requested.iter().map(|name| name.to_string()).collect(),
                },
            );
        }

        let headers = HeaderBuilder::new(policy)
            .build_preflight(origin, requested_method, requested_headers)
            .into_headers();

        debug!(origin, policy = key, method = requested_method, "preflight accepted");
        CorsDecision::PreflightAccepted {
            policy: key.to_string(),
            headers,
        }
    }

    fn process_simple(
        request: &RequestContext<'_>,
        origin: &str,
        key: &str,
        policy: &OriginPolicy,
    ) -> CorsDecision {
        if !policy.allowed_methods.allows_method(request.method) {
            let reason = SimpleRejectionReason::MethodNotAllowed {
                method: request.method.to_string(),
            };
            debug!(origin, policy = key, %reason, "cross-origin request rejected");
            return CorsDecision::SimpleRejected(SimpleRejection {
                policy: key.to_string(),
                reason,
            });
        }

        let headers = HeaderBuilder::new(policy).build_simple(origin).into_headers();

        debug!(origin, policy = key, method = request.method, "cross-origin request accepted");
        CorsDecision::SimpleAccepted {
            policy: key.to_string(),
            headers,
        }
    }

    fn reject_preflight(origin: &str, key: &str, reason: PreflightRejectionReason) -> CorsDecision {
        debug!(origin, policy = key, %reason, "preflight rejected");
        CorsDecision::PreflightRejected(PreflightRejection {
            policy: key.to_string(),
            reason,
        })
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
