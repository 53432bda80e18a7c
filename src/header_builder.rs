use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::policy::OriginPolicy;

/// Builds the response headers for a request whose origin matched `policy`.
pub(crate) struct HeaderBuilder<'a> {
    policy: &'a OriginPolicy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a OriginPolicy) -> Self {
        Self { policy }
    }

    /// Preflight-only headers followed by the common ones.
    pub(crate) fn build_preflight(
        &self,
        origin: &str,
        requested_method: &str,
        requested_headers: Option<&[&str]>,
    ) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        headers.extend(self.build_methods_header(requested_method));
        headers.extend(self.build_allowed_headers(requested_headers));
        headers.extend(self.build_max_age_header());
        headers.extend(self.build_common(origin));
        headers
    }

    pub(crate) fn build_simple(&self, origin: &str) -> HeaderCollection {
        self.build_common(origin)
    }

    fn build_common(&self, origin: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        headers.extend(self.build_origin_headers(origin));
        headers.extend(self.build_exposed_headers());
        headers.extend(self.build_credentials_header());
        headers
    }

    /// The request origin is echoed even when the policy allows any origin.
    pub(crate) fn build_origin_headers(&self, origin: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(2);
        headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.append(header::VARY, header::ORIGIN);
        headers
    }

    pub(crate) fn build_methods_header(&self, requested_method: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.set(header::ACCESS_CONTROL_ALLOW_METHODS, requested_method);
        headers
    }

    pub(crate) fn build_allowed_headers(&self, requested: Option<&[&str]>) -> HeaderCollection {
        let Some(requested) = requested else {
            return HeaderCollection::new();
        };

        let mut headers = HeaderCollection::with_estimate(requested.len());
        for name in requested {
            headers.append(header::ACCESS_CONTROL_ALLOW_HEADERS, *name);
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        match self.policy.max_age_header_value() {
            Some(value) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.set(header::ACCESS_CONTROL_MAX_AGE, value);
                headers
            }
            None => HeaderCollection::new(),
        }
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        let exposed = &self.policy.exposed_headers;
        let mut headers = HeaderCollection::with_estimate(exposed.len());
        for name in exposed.iter() {
            headers.append(header::ACCESS_CONTROL_EXPOSE_HEADERS, name.as_str());
        }
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.policy.allow_credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.set(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
            headers
        } else {
            HeaderCollection::new()
        }
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
