use crate::dns::wire::message::decode_section;
use crate::dns::wire::{Header, Question, HEADER_SIZE};
use rootwalk_domain::{names_equal, DomainError};
use std::net::Ipv4Addr;
use tracing::debug;

/// What a name server told us about the queried name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// IN A answers for the queried name.
    Answer(Vec<Ipv4Addr>),
    /// No answer; delegation data to continue with.
    Referral {
        /// Addresses from IN A records in the additional section.
        glue: Vec<Ipv4Addr>,
        /// Hosts named by IN NS records in the authority section.
        name_servers: Vec<String>,
    },
}

/// Validates `bytes` as the response to query `expected_id` for `domain`
/// and classifies it.
///
/// Sections are decoded in wire order. Once the answer section yields an
/// address the remaining sections are not read.
pub fn inspect_response(
    bytes: &[u8],
    expected_id: u16,
    domain: &str,
) -> Result<ResponseOutcome, DomainError> {
    let header = Header::decode(bytes)?;
    header.verify(expected_id)?;

    let (question, question_len) = Question::decode(bytes, HEADER_SIZE)?;
    if !names_equal(&question.name, domain) {
        return Err(DomainError::QuestionMismatch {
            expected: domain.to_string(),
            found: question.name,
        });
    }

    let (answers, offset) =
        decode_section(bytes, HEADER_SIZE + question_len, header.answer_count)?;

    if header.is_truncated() {
        debug!(domain = %domain, "Response truncated, using the records that fit");
    }

    let addresses: Vec<Ipv4Addr> = answers.iter().filter_map(|r| r.ipv4()).collect();
    if !addresses.is_empty() {
        debug!(
            domain = %domain,
            answers = addresses.len(),
            authoritative = header.is_authoritative(),
            "Answer received"
        );
        return Ok(ResponseOutcome::Answer(addresses));
    }

    let (authorities, offset) = decode_section(bytes, offset, header.authority_count)?;
    let (additionals, _) = decode_section(bytes, offset, header.additional_count)?;

    let glue: Vec<Ipv4Addr> = additionals.iter().filter_map(|r| r.ipv4()).collect();
    let name_servers: Vec<String> = authorities
        .iter()
        .filter_map(|r| r.name_server().map(str::to_string))
        .collect();

    debug!(
        domain = %domain,
        answers = answers.len(),
        authority = authorities.len(),
        name_servers = name_servers.len(),
        glue = glue.len(),
        "Referral received"
    );

    Ok(ResponseOutcome::Referral { glue, name_servers })
}
