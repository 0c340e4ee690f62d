use axum::{body::Body, extract::Request, http::Response, middleware::Next};

use crate::{
    middleware::normalize_uri,
    utils::{root_span::SamplingPriority, RootSpan},
};

/// Opens the `http_request` span handlers enrich through `Extension<RootSpan>`.
pub(crate) async fn trace_root(mut req: Request, next: Next) -> Response<Body> {
    let root_span = RootSpan::new(req.method().as_str(), &normalize_uri(req.uri().path()));

    req.extensions_mut().insert(root_span.clone());

    let resp = root_span.scope(next.run(req)).await;

    let status = resp.status();
    root_span.record().http_status_code(&status);

    if status.is_server_error() {
        root_span
            .record()
            .status("error")
            .sampling_priority(SamplingPriority::One);
    } else if status.is_client_error() {
        root_span.record().status("client_error");
    } else {
        root_span.record().status("ok");
    }

    resp
}
