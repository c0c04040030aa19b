//! HTTPS listener started next to the plain HTTP listener.

use std::net::SocketAddr;

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use dioxus_logger::tracing;

use crate::server::{config::HttpsConfig, error::AppError};

/// Serves `router` over HTTPS on all interfaces until the listener fails.
///
/// The certificate and chain files are concatenated into one PEM chain.
pub async fn serve_https(router: Router, config: &HttpsConfig) -> Result<(), AppError> {
    let certificate = tokio::fs::read(&config.certificate).await?;
    let chain = tokio::fs::read(&config.chain).await?;
    let private_key = tokio::fs::read(&config.private_key).await?;

    let tls = RustlsConfig::from_pem(certificate_chain(certificate, chain), private_key).await?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    tracing::info!("HTTPS listening on {}", addr);

    axum_server::bind_rustls(addr, tls)
        .serve(router.into_make_service_with_connect_info::<SocketAddr>())
        .await?;

    Ok(())
}

fn certificate_chain(mut certificate: Vec<u8>, chain: Vec<u8>) -> Vec<u8> {
    if !certificate.ends_with(b"\n") {
        certificate.push(b'\n');
    }
    certificate.extend(chain);
    certificate
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests joining certificate files.
    ///
    /// Expected: files separated by exactly one newline
    #[test]
    fn joins_certificate_and_chain() {
        assert_eq!(certificate_chain(b"CERT".to_vec(), b"CHAIN\n".to_vec()), b"CERT\nCHAIN\n");
        assert_eq!(certificate_chain(b"CERT\n".to_vec(), b"CHAIN".to_vec()), b"CERT\nCHAIN");
    }

    /// Tests missing certificate files.
    ///
    /// Expected: Err(IoErr) before anything binds
    #[tokio::test]
    async fn missing_files_fail() {
        let config = HttpsConfig {
            port: 8443,
            private_key: "/nonexistent/key.pem".to_string(),
            certificate: "/nonexistent/cert.pem".to_string(),
            chain: "/nonexistent/chain.pem".to_string(),
        };

        let result = serve_https(Router::new(), &config).await;

        assert!(matches!(result, Err(AppError::IoErr(_))));
    }
}
