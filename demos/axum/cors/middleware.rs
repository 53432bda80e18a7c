use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::AppState;

/// Preflights and rejections are answered here; everything else runs `next`
/// and gets annotated on the way out.
pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    state
        .cors
        .filter_async(request, |request| next.run(request))
        .await
}
