//! One-shot DNS-over-TLS (RFC 7858) stub client.
//!
//! Accepts three call shapes, normalizes them against resolver defaults,
//! sends a single recursive query over a fresh TLS connection and decodes
//! the length-prefixed response.
//!
//! ```no_run
//! use dotstub_client::query;
//!
//! # async fn run() -> Result<(), dotstub_client::QueryError> {
//! // Bare name: Cloudflare defaults fill in the rest.
//! let answer = query("example.com").await?;
//! for address in answer.addresses() {
//!     println!("{address}");
//! }
//!
//! // Or pick the resolver explicitly.
//! let answer = query(("9.9.9.9", "dns.quad9.net", "example.com")).await?;
//! # let _ = answer;
//! # Ok(())
//! # }
//! ```

mod answer;
mod codec;
mod error;
mod pin;
mod session;
mod tls;

pub use answer::DnsAnswer;
pub use error::QueryError;
pub use pin::spki_pin;

pub use dotstub_domain::{ArgumentError, QueryArgs, QueryOptions, QueryParams, ResolverDefaults};

/// Queries the default resolver (Cloudflare) with any accepted call shape.
///
/// A bare name fills every other field from the defaults; a
/// `(host, server_name, name)` tuple or a [`QueryOptions`] record
/// overrides them.
pub async fn query(args: impl Into<QueryArgs>) -> Result<DnsAnswer, QueryError> {
    query_with(args, &ResolverDefaults::CLOUDFLARE).await
}

/// Queries with an explicit set of resolver defaults.
pub async fn query_with(
    args: impl Into<QueryArgs>,
    defaults: &ResolverDefaults,
) -> Result<DnsAnswer, QueryError> {
    let params = args.into().normalize(defaults)?;
    session::execute(&params).await
}

/// Runs a single query for an already normalized parameter set, skipping
/// shape dispatch and defaulting entirely.
pub async fn execute(params: &QueryParams) -> Result<DnsAnswer, QueryError> {
    session::execute(params).await
}
