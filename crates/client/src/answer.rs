use hickory_proto::op::{Message, OpCode, Query, ResponseCode};
use hickory_proto::rr::{RData, Record};
use std::net::IpAddr;

/// A decoded response: header fields, flags and all four record sections.
#[derive(Debug, Clone)]
pub struct DnsAnswer {
    pub id: u16,

    pub op_code: OpCode,

    pub response_code: ResponseCode,

    pub authoritative: bool,

    pub truncated: bool,

    pub recursion_desired: bool,

    pub recursion_available: bool,

    pub authentic_data: bool,

    pub checking_disabled: bool,

    pub questions: Vec<Query>,

    pub answers: Vec<Record>,

    pub authorities: Vec<Record>,

    pub additionals: Vec<Record>,
}

impl From<Message> for DnsAnswer {
    fn from(message: Message) -> Self {
        Self {
            id: message.id(),
            op_code: message.op_code(),
            response_code: message.response_code(),
            authoritative: message.authoritative(),
            truncated: message.truncated(),
            recursion_desired: message.recursion_desired(),
            recursion_available: message.recursion_available(),
            authentic_data: message.authentic_data(),
            checking_disabled: message.checking_disabled(),
            questions: message.queries().to_vec(),
            answers: message.answers().to_vec(),
            authorities: message.name_servers().to_vec(),
            additionals: message.additionals().to_vec(),
        }
    }
}

impl DnsAnswer {
    /// All A and AAAA addresses in the answer section, in answer order.
    pub fn addresses(&self) -> Vec<IpAddr> {
        self.answers
            .iter()
            .filter_map(|record| match record.data() {
                RData::A(a) => Some(IpAddr::V4(a.0)),
                RData::AAAA(aaaa) => Some(IpAddr::V6(aaaa.0)),
                _ => None,
            })
            .collect()
    }

    /// Smallest TTL across the answer section.
    pub fn min_ttl(&self) -> Option<u32> {
        self.answers.iter().map(Record::ttl).min()
    }

    pub fn is_nxdomain(&self) -> bool {
        self.response_code == ResponseCode::NXDomain
    }

    pub fn is_nodata(&self) -> bool {
        self.response_code == ResponseCode::NoError && self.answers.is_empty()
    }

    pub fn is_server_error(&self) -> bool {
        matches!(
            self.response_code,
            ResponseCode::ServFail | ResponseCode::Refused | ResponseCode::NotImp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::op::MessageType;
    use hickory_proto::rr::rdata::{A, AAAA, CNAME};
    use hickory_proto::rr::Name;
    use std::net::{Ipv4Addr, Ipv6Addr};
    use std::str::FromStr;

    fn answer_record(name: &str, ttl: u32, data: RData) -> Record {
        Record::from_rdata(Name::from_str(name).unwrap(), ttl, data)
    }

    fn response_with_answers(records: Vec<Record>) -> Message {
        let mut message = Message::new(0x0102, MessageType::Response, OpCode::Query);
        message.set_recursion_desired(true);
        message.set_recursion_available(true);
        for record in records {
            message.add_answer(record);
        }
        message
    }

    #[test]
    fn test_addresses_collects_a_and_aaaa() {
        let message = response_with_answers(vec![
            answer_record(
                "example.com.",
                300,
                RData::A(A(Ipv4Addr::new(93, 184, 216, 34))),
            ),
            answer_record("example.com.", 120, RData::AAAA(AAAA(Ipv6Addr::LOCALHOST))),
            answer_record(
                "example.com.",
                60,
                RData::CNAME(CNAME(Name::from_str("alias.example.com.").unwrap())),
            ),
        ]);

        let answer = DnsAnswer::from(message);

        assert_eq!(
            answer.addresses(),
            vec![
                IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34)),
                IpAddr::V6(Ipv6Addr::LOCALHOST),
            ]
        );
        assert_eq!(answer.min_ttl(), Some(60));
        assert_eq!(answer.answers.len(), 3);
        assert!(!answer.is_nodata());
    }

    #[test]
    fn test_header_flags_carried_over() {
        let answer = DnsAnswer::from(response_with_answers(vec![]));

        assert_eq!(answer.id, 0x0102);
        assert_eq!(answer.op_code, OpCode::Query);
        assert!(answer.recursion_desired);
        assert!(answer.recursion_available);
        assert!(!answer.authoritative);
        assert!(!answer.truncated);
    }

    #[test]
    fn test_nxdomain_and_nodata() {
        let mut message = Message::new(7, MessageType::Response, OpCode::Query);
        message.set_response_code(ResponseCode::NXDomain);

        let answer = DnsAnswer::from(message);
        assert!(answer.is_nxdomain());
        assert!(!answer.is_nodata());
        assert!(answer.min_ttl().is_none());

        let empty = DnsAnswer::from(Message::new(8, MessageType::Response, OpCode::Query));
        assert!(empty.is_nodata());
        assert!(!empty.is_nxdomain());
    }

    #[test]
    fn test_server_error_codes() {
        for code in [
            ResponseCode::ServFail,
            ResponseCode::Refused,
            ResponseCode::NotImp,
        ] {
            let mut message = Message::new(1, MessageType::Response, OpCode::Query);
            message.set_response_code(code);
            assert!(DnsAnswer::from(message).is_server_error());
        }

        let noerror = Message::new(2, MessageType::Response, OpCode::Query);
        assert!(!DnsAnswer::from(noerror).is_server_error());
    }
}
