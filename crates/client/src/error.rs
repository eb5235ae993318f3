use dotstub_domain::ArgumentError;
use hickory_proto::ProtoError;
use rustls::pki_types::InvalidDnsNameError;
use thiserror::Error;

/// Everything that can go wrong between a call shape and a decoded answer.
///
/// Transport failures carry the underlying `std::io::Error` unchanged so
/// callers can still match on `ErrorKind`.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error(transparent)]
    Arguments(#[from] ArgumentError),

    #[error("Invalid TLS server name: {0}")]
    ServerName(#[from] InvalidDnsNameError),

    #[error(transparent)]
    Transport(#[from] std::io::Error),

    #[error("DNS wire format error: {0}")]
    Codec(#[from] ProtoError),

    #[error("Malformed response: declared length {declared} is below the 12 byte DNS header")]
    MalformedResponse { declared: u16 },

    #[error("Peer certificate error: {0}")]
    Certificate(String),
}
