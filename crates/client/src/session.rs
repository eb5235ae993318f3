//! One-shot query sessions: connect, send, reassemble, decode.
//!
//! Every call opens a fresh TLS connection, writes a single framed query,
//! accumulates stream chunks until the declared frame is complete, then
//! closes the connection and decodes the buffered bytes. Sessions share
//! no state, so concurrent calls cannot observe each other.

use bytes::BytesMut;
use dotstub_domain::QueryParams;
use std::io;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::debug;

use crate::answer::DnsAnswer;
use crate::codec::{decode_response, encode_query, LENGTH_PREFIX, MIN_MESSAGE_LEN};
use crate::error::QueryError;
use crate::{pin, tls};

/// Runs one complete query session for `params`.
pub(crate) async fn execute(params: &QueryParams) -> Result<DnsAnswer, QueryError> {
    let id = rand::random::<u16>();
    let wire = encode_query(params, id)?;

    let mut stream = tls::connect(&params.host, params.port, &params.server_name).await?;

    match stream.get_ref().1.peer_certificates().and_then(|certs| certs.first()) {
        Some(leaf) => match pin::spki_pin(leaf.as_ref()) {
            Ok(pin) => debug!(servername = %params.server_name, pin = %pin, "Peer SPKI pin"),
            Err(e) => debug!(servername = %params.server_name, error = %e, "SPKI pin unavailable"),
        },
        None => debug!(servername = %params.server_name, "No peer certificate presented"),
    }

    debug!(
        host = %params.host,
        port = params.port,
        id = id,
        name = %params.name,
        "Sending DoT query"
    );

    let frame = exchange(&mut stream, &wire).await?;
    let message = decode_response(&frame)?;

    if message.id() != id {
        debug!(
            expected = id,
            received = message.id(),
            "Response id does not match query id"
        );
    }

    debug!(
        name = %params.name,
        response_len = frame.len(),
        rcode = ?message.response_code(),
        "DoT response received"
    );

    Ok(DnsAnswer::from(message))
}

/// Writes one framed query and reads back one framed response.
///
/// Generic over the stream so the framing logic is testable without a
/// network; the real caller hands in a TLS stream.
pub(crate) async fn exchange<S>(stream: &mut S, wire: &[u8]) -> Result<BytesMut, QueryError>
where
    S: AsyncReadExt + AsyncWriteExt + Unpin,
{
    stream.write_all(wire).await?;
    stream.flush().await?;

    let frame = read_framed(stream).await?;

    // One connection per query: close as soon as the frame is complete.
    let _ = stream.shutdown().await;

    Ok(frame)
}

/// Accumulates stream chunks until exactly one framed message is buffered.
///
/// The declared length is latched as soon as the two prefix bytes have
/// arrived; the frame is complete when the buffer holds the prefix plus
/// exactly that many body bytes. A declared length below the DNS header
/// size can never become a valid message and fails immediately.
async fn read_framed<S>(stream: &mut S) -> Result<BytesMut, QueryError>
where
    S: AsyncReadExt + Unpin,
{
    let mut buf = BytesMut::with_capacity(4096);
    let mut expected: Option<usize> = None;

    loop {
        let read = stream.read_buf(&mut buf).await?;
        if read == 0 {
            return Err(QueryError::Transport(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "connection closed before a complete DNS response frame arrived",
            )));
        }

        if expected.is_none() && buf.len() >= LENGTH_PREFIX {
            let declared = u16::from_be_bytes([buf[0], buf[1]]);
            if usize::from(declared) < MIN_MESSAGE_LEN {
                return Err(QueryError::MalformedResponse { declared });
            }
            expected = Some(LENGTH_PREFIX + usize::from(declared));
        }

        if expected == Some(buf.len()) {
            return Ok(buf);
        }
    }
}
