#![allow(dead_code)]

use cors_gate_rs::{CorsDecision, Headers, PreflightRejection, SimpleRejection};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::SimpleAccepted { headers, .. } => headers,
        other => panic!("expected accepted simple request, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::PreflightAccepted { headers, .. } => headers,
        other => panic!("expected accepted preflight, got {:?}", other),
    }
}

pub fn assert_preflight_rejected(decision: CorsDecision) -> PreflightRejection {
    match decision {
        CorsDecision::PreflightRejected(rejection) => rejection,
        other => panic!("expected rejected preflight, got {:?}", other),
    }
}

pub fn assert_simple_rejected(decision: CorsDecision) -> SimpleRejection {
    match decision {
        CorsDecision::SimpleRejected(rejection) => rejection,
        other => panic!("expected rejected simple request, got {:?}", other),
    }
}

pub fn accepted_policy(decision: &CorsDecision) -> Option<&str> {
    match decision {
        CorsDecision::PreflightAccepted { policy, .. }
        | CorsDecision::SimpleAccepted { policy, .. } => Some(policy),
        CorsDecision::PreflightRejected(rejection) => Some(&rejection.policy),
        CorsDecision::SimpleRejected(rejection) => Some(&rejection.policy),
        CorsDecision::NotApplicable => None,
    }
}
