use std::sync::Arc;

/// Fully resolved inputs for a single DNS-over-TLS query.
///
/// Produced by `QueryArgs::normalize`; every string field is non-blank and
/// the port is non-zero by construction.
#[derive(Debug, Clone)]
pub struct QueryParams {
    pub host: Arc<str>,
    pub server_name: Arc<str>,
    pub name: Arc<str>,
    pub record_class: Arc<str>,
    pub record_type: Arc<str>,
    pub port: u16,
}
