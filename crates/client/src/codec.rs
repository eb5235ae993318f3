//! DNS wire codec
//!
//! Builds query messages and decodes responses with `hickory-proto`, and
//! applies the two byte big-endian length prefix that frames every message
//! on a stream transport (RFC 1035 §4.2.2, reused unchanged by DoT).

use dotstub_domain::QueryParams;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

use crate::error::QueryError;

/// Stream framing: two length bytes in front of every message.
pub(crate) const LENGTH_PREFIX: usize = 2;

/// A DNS header alone is 12 bytes; a declared length below this can never
/// be a real message.
pub(crate) const MIN_MESSAGE_LEN: usize = 12;

/// Builds the framed wire form of a recursive query for `params`.
///
/// The returned buffer already carries the length prefix and is written to
/// the stream as-is.
pub(crate) fn encode_query(params: &QueryParams, id: u16) -> Result<Vec<u8>, QueryError> {
    let name = Name::from_str(&params.name)?;
    let record_type = RecordType::from_str(&params.record_type)?;
    let record_class = DNSClass::from_str(&params.record_class)?;

    let mut question = Query::new();
    question.set_name(name);
    question.set_query_type(record_type);
    question.set_query_class(record_class);

    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(question);

    let mut body = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut body);
    message.emit(&mut encoder)?;

    let mut framed = Vec::with_capacity(LENGTH_PREFIX + body.len());
    framed.extend_from_slice(&(body.len() as u16).to_be_bytes());
    framed.extend_from_slice(&body);
    Ok(framed)
}

/// Decodes a complete framed response, prefix included.
pub(crate) fn decode_response(frame: &[u8]) -> Result<Message, QueryError> {
    let body = frame.get(LENGTH_PREFIX..).unwrap_or_default();
    Ok(Message::from_vec(body)?)
}
