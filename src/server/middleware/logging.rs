//! One log line per request.

use std::{net::SocketAddr, time::Instant};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{middleware::session::AuthSession, model::session::SessionIdentity};

#[derive(Clone, Copy, Debug)]
pub struct RequestLog {
    /// Take the client address from `X-Forwarded-For`
    pub trust_proxy: bool,
}

/// Logs client IP, user, method, URL, status, content length and response time.
///
/// Must run inside the session layer to see the logged in user.
pub async fn log_request(State(log): State<RequestLog>, req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0);
    let ip = client_ip(req.headers(), peer, log.trust_proxy);
    let session = req.extensions().get::<Session>().cloned();

    let response = next.run(req).await;

    let identity = match &session {
        Some(session) => AuthSession::new(session)
            .get_identity()
            .await
            .ok()
            .flatten(),
        None => None,
    };
    let length = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info!(
        "{} {} {} {} {} {} - {} ms",
        ip,
        format_user(identity.as_ref()),
        method,
        uri,
        response.status().as_u16(),
        length,
        start.elapsed().as_millis()
    );

    response
}

fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>, trust_proxy: bool) -> String {
    if trust_proxy {
        let forwarded = headers
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|ip| !ip.is_empty());

        if let Some(ip) = forwarded {
            return ip.to_string();
        }
    }

    peer.map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn format_user(identity: Option<&SessionIdentity>) -> String {
    match identity {
        Some(identity) => format!("U: {}, {}", identity.id, identity.username),
        None => "-".to_string(),
    }
}
