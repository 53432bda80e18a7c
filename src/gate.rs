use crate::constants::status;
use crate::context::RequestContext;
use crate::cors::Cors;
use crate::headers::Headers;
use crate::host::{CorsRequest, CorsResponse, apply_headers};
use crate::result::CorsDecision;
use std::future::Future;

/// What the host must do with a request after evaluation.
enum GateAction<Res> {
    Respond(Res),
    Proceed(Option<Headers>),
}

impl Cors {
    /// Runs the CORS gate around a synchronous downstream handler.
    ///
    /// `proceed` is invoked only when the request passes through; rejected and
    /// preflight requests are answered here.
    pub fn filter<Req, Res, F>(&self, request: Req, proceed: F) -> Res
    where
        Req: CorsRequest,
        Res: CorsResponse,
        F: FnOnce(Req) -> Res,
    {
        match self.gate(&request) {
            GateAction::Respond(response) => response,
            GateAction::Proceed(annotation) => {
                let mut response = proceed(request);
                if let Some(headers) = annotation {
                    apply_headers(&headers, &mut response);
                }
                response
            }
        }
    }

    /// Async counterpart of [`Cors::filter`] for handlers that return a future.
    pub async fn filter_async<Req, Res, F, Fut>(&self, request: Req, proceed: F) -> Res
    where
        Req: CorsRequest,
        Res: CorsResponse,
        F: FnOnce(Req) -> Fut,
        Fut: Future<Output = Res>,
    {
        match self.gate(&request) {
            GateAction::Respond(response) => response,
            GateAction::Proceed(annotation) => {
                let mut response = proceed(request).await;
                if let Some(headers) = annotation {
                    apply_headers(&headers, &mut response);
                }
                response
            }
        }
    }

    fn gate<Req, Res>(&self, request: &Req) -> GateAction<Res>
    where
        Req: CorsRequest,
        Res: CorsResponse,
    {
        let context = RequestContext::from_request(request);
        match self.check(&context) {
            CorsDecision::NotApplicable => GateAction::Proceed(None),
            CorsDecision::SimpleAccepted { headers, .. } => GateAction::Proceed(Some(headers)),
            CorsDecision::PreflightAccepted { headers, .. } => {
                let mut response = Res::with_status(status::OK);
                apply_headers(&headers, &mut response);
                GateAction::Respond(response)
            }
            CorsDecision::PreflightRejected(_) | CorsDecision::SimpleRejected(_) => {
                GateAction::Respond(Res::with_status(status::FORBIDDEN))
            }
        }
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;
