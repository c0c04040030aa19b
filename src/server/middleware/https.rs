//! Redirects plain HTTP requests to the HTTPS listener.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

#[derive(Clone, Copy, Debug)]
pub struct HttpsRedirect {
    pub port: u16,
    /// Honor `X-Forwarded-Proto` set by a reverse proxy
    pub trust_proxy: bool,
}

/// Sends every request that did not arrive over HTTPS to `https://{host}{uri}`.
pub async fn redirect_to_https(
    State(redirect): State<HttpsRedirect>,
    req: Request,
    next: Next,
) -> Response {
    if redirect.trust_proxy && forwarded_https(req.headers()) {
        return next.run(req).await;
    }

    let Some(host) = req
        .headers()
        .get(header::HOST)
        .and_then(|host| host.to_str().ok())
        .or_else(|| req.uri().host())
    else {
        return (StatusCode::BAD_REQUEST, "Missing Host header").into_response();
    };

    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    Redirect::permanent(&https_redirect_url(host, path_and_query, redirect.port)).into_response()
}

fn forwarded_https(headers: &HeaderMap) -> bool {
    headers
        .get("x-forwarded-proto")
        .and_then(|proto| proto.to_str().ok())
        .is_some_and(|proto| proto.eq_ignore_ascii_case("https"))
}

/// Builds the HTTPS URL for a request.
///
/// Any port in `host` is replaced by `port`, which is omitted when it is 443.
pub fn https_redirect_url(host: &str, path_and_query: &str, port: u16) -> String {
    let hostname = match host.find(']') {
        Some(end) if host.starts_with('[') => &host[..=end],
        _ => host.split(':').next().unwrap_or(host),
    };

    if port == 443 {
        format!("https://{}{}", hostname, path_and_query)
    } else {
        format!("https://{}:{}{}", hostname, port, path_and_query)
    }
}
