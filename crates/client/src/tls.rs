//! TLS session establishment for DNS-over-TLS (RFC 7858).

use rustls::pki_types::ServerName;
use std::sync::{Arc, LazyLock};
use tokio::net::TcpStream;
use tokio_rustls::client::TlsStream;
use tracing::debug;

use crate::error::QueryError;

/// Shared TLS config, built once and reused for all queries.
/// Certificate validation runs against the bundled webpki roots, and the
/// rustls session cache makes repeat handshakes against the same resolver
/// cheaper automatically.
static SHARED_TLS_CONFIG: LazyLock<Arc<rustls::ClientConfig>> = LazyLock::new(|| {
    let mut root_store = rustls::RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    Arc::new(config)
});

/// TCP connect plus TLS handshake against `host:port`, presenting
/// `server_name` for SNI and certificate validation.
pub(crate) async fn connect(
    host: &str,
    port: u16,
    server_name: &str,
) -> Result<TlsStream<TcpStream>, QueryError> {
    let connector = tokio_rustls::TlsConnector::from(SHARED_TLS_CONFIG.clone());
    let sni = ServerName::try_from(server_name.to_string())?;

    let tcp_stream = TcpStream::connect((host, port)).await?;
    tcp_stream.set_nodelay(true)?;

    let tls_stream = connector.connect(sni, tcp_stream).await?;
    debug!(server = %host, port = port, servername = %server_name, "TLS connection established");

    Ok(tls_stream)
}
