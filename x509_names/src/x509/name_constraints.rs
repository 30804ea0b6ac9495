// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Name Constraints enforcement (RFC 5280 Section 4.2.1.10)
//!
//! ```asn1
//! NameConstraints ::= SEQUENCE {
//!      permittedSubtrees       [0]     GeneralSubtrees OPTIONAL,
//!      excludedSubtrees        [1]     GeneralSubtrees OPTIONAL }
//!
//! GeneralSubtrees ::= SEQUENCE SIZE (1..MAX) OF GeneralSubtree
//!
//! GeneralSubtree ::= SEQUENCE {
//!      base                    GeneralName,
//!      minimum         [0]     BaseDistance DEFAULT 0,
//!      maximum         [1]     BaseDistance OPTIONAL }
//! ```
//!
//! Supported constraint forms are dNSName, iPAddress and directoryName.
//! rfc822Name constraints are a hard failure, any other form makes every
//! presented name of that form non-conforming. `minimum`/`maximum` must be
//! absent.

extern crate alloc;

use alloc::format;

use crate::certificate::name::{GeneralName, GeneralNameType};
use crate::certificate::{Certificate, EndEntityOrCa};
use crate::error::{ConstraintError, Error, ParseError, Result};
use crate::reader::{self, Reader, CONSTRUCTED, CONTEXT_SPECIFIC, SEQUENCE, SET};
use crate::x509::dns_id::{is_valid_dns_id, presented_dns_id_matches, IdRole};
use crate::x509::oids::KeyPurposeId;
use crate::x509::search::{search_names, FallBackToCommonName, MatchResult};

/// Which list of GeneralSubtrees is being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subtrees {
    Permitted,
    Excluded,
}

impl Subtrees {
    fn tag(self) -> u8 {
        match self {
            Subtrees::Permitted => CONTEXT_SPECIFIC | CONSTRUCTED,
            Subtrees::Excluded => CONTEXT_SPECIFIC | CONSTRUCTED | 1,
        }
    }
}

// ============================================================================
// Chain enforcement
// ============================================================================

/// Enforce one CA's encoded NameConstraints value on the certificates it
/// issued, directly or indirectly.
///
/// `subordinates` runs from the constrained CA's immediate subordinate down
/// to the end entity. When validating for `ServerAuth` the end entity's
/// subject CN is checked as a DNS name or IPv4 address too, unless it has
/// dNSName or iPAddress SAN entries.
pub fn check_name_constraints<'a, 'b, I>(
    encoded_name_constraints: &[u8],
    subordinates: I,
    required_eku: KeyPurposeId,
) -> Result<()>
where
    'a: 'b,
    I: IntoIterator<Item = &'b Certificate<'a>>,
{
    for child in subordinates {
        let fallback = if child.end_entity_or_ca() == EndEntityOrCa::EndEntity
            && required_eku == KeyPurposeId::ServerAuth
        {
            FallBackToCommonName::Yes
        } else {
            FallBackToCommonName::No
        };

        match search_names(
            child.subject_alt_name(),
            child.subject(),
            GeneralNameType::NameConstraints,
            encoded_name_constraints,
            fallback,
        )? {
            MatchResult::Match | MatchResult::NoNamesOfGivenType => {}
            MatchResult::Mismatch => {
                log::trace!("subject common name violates name constraints");
                return Err(Error::not_permitted("subject common name"));
            }
        }
    }
    Ok(())
}

// ============================================================================
// Single name check
// ============================================================================

/// Check one presented identifier against an encoded NameConstraints
/// value. `presented_id` is the GeneralName value, or the encoded subject
/// Name for `DirectoryName`.
pub fn check_presented_id_conforms_to_constraints(
    presented_type: GeneralNameType,
    presented_id: &[u8],
    encoded_name_constraints: &[u8],
) -> Result<()> {
    let constraints = reader::expect_tag_and_value_at_end(encoded_name_constraints, SEQUENCE)?;
    let mut constraints = Reader::new(constraints)?;

    // RFC 5280: conforming CAs MUST NOT issue an empty NameConstraints.
    if constraints.at_end() {
        return Err(Error::ParseError(ParseError::EmptySequence(
            "nameConstraints",
        )));
    }

    check_subtrees(
        &mut constraints,
        Subtrees::Permitted,
        presented_type,
        presented_id,
    )?;
    check_subtrees(
        &mut constraints,
        Subtrees::Excluded,
        presented_type,
        presented_id,
    )?;
    constraints.end()
}

fn check_subtrees(
    constraints: &mut Reader<'_>,
    subtrees: Subtrees,
    presented_type: GeneralNameType,
    presented_id: &[u8],
) -> Result<()> {
    if !constraints.peek(subtrees.tag()) {
        return Ok(());
    }
    let list = constraints.expect_tag_and_value(subtrees.tag())?;
    let mut list = Reader::new(list)?;
    if list.at_end() {
        return Err(Error::ParseError(ParseError::EmptySequence(
            "GeneralSubtrees",
        )));
    }

    let mut has_permitted_match = false;
    let mut has_permitted_mismatch = false;

    while !list.at_end() {
        let base = reader::nested(&mut list, SEQUENCE, GeneralName::read)?;
        if base.name_type != presented_type {
            continue;
        }

        let matches = match presented_type {
            GeneralNameType::DnsName => {
                let matches =
                    presented_dns_id_matches(presented_id, IdRole::NameConstraint, base.value);
                // An unparseable dNSName constraint excludes or fails to
                // permit everything.
                if !matches && !is_valid_dns_id(base.value, IdRole::NameConstraint) {
                    return Err(Error::ConstraintError(ConstraintError::InvalidConstraint(
                        format!("dNSName {}", base.value.escape_ascii()),
                    )));
                }
                matches
            }
            GeneralNameType::IpAddress => {
                match_presented_ip_address_with_constraint(presented_id, base.value)?
            }
            GeneralNameType::DirectoryName => {
                match_presented_directory_name_with_constraint(subtrees, presented_id, base.value)?
            }
            GeneralNameType::Rfc822Name => {
                return Err(Error::internal("rfc822Name name constraints are not supported"));
            }
            GeneralNameType::OtherName
            | GeneralNameType::X400Address
            | GeneralNameType::EdiPartyName
            | GeneralNameType::Uri
            | GeneralNameType::RegisteredId => {
                return Err(Error::ConstraintError(ConstraintError::UnsupportedNameForm(
                    format!("{:?}", presented_type),
                )));
            }
            GeneralNameType::NameConstraints => {
                return Err(Error::internal(
                    "name constraints pseudo-type used as a constraint base",
                ));
            }
        };

        match subtrees {
            Subtrees::Permitted => {
                if matches {
                    has_permitted_match = true;
                } else {
                    has_permitted_mismatch = true;
                }
            }
            Subtrees::Excluded => {
                if matches {
                    log::trace!("{:?} name matches an excluded subtree", presented_type);
                    return Err(Error::excluded(format!("{:?}", presented_type)));
                }
            }
        }
    }

    // Permitted subtrees of this type exist but none of them matched.
    if has_permitted_mismatch && !has_permitted_match {
        log::trace!("{:?} name is outside all permitted subtrees", presented_type);
        return Err(Error::not_permitted(format!("{:?}", presented_type)));
    }

    Ok(())
}

/// Match a presented address (4 or 16 bytes) against an address/mask
/// constraint (8 or 32 bytes). Families must agree to match.
fn match_presented_ip_address_with_constraint(
    presented: &[u8],
    constraint: &[u8],
) -> Result<bool> {
    if presented.len() != 4 && presented.len() != 16 {
        return Err(Error::invalid_der(format!(
            "iPAddress of {} bytes",
            presented.len()
        )));
    }
    if constraint.len() != 8 && constraint.len() != 32 {
        return Err(Error::invalid_der(format!(
            "iPAddress constraint of {} bytes",
            constraint.len()
        )));
    }
    if presented.len() * 2 != constraint.len() {
        return Ok(false);
    }

    let (address, mask) = constraint.split_at(presented.len());
    Ok(presented
        .iter()
        .zip(address)
        .zip(mask)
        .all(|((p, a), m)| (p ^ a) & m == 0))
}

/// Match a presented Name against a directoryName constraint by RDN
/// prefix. RDNs are compared as raw bytes with no normalization.
fn match_presented_directory_name_with_constraint(
    subtrees: Subtrees,
    presented_id: &[u8],
    constraint: &[u8],
) -> Result<bool> {
    let constraint_rdns = reader::expect_tag_and_value_at_end(constraint, SEQUENCE)?;
    let presented_rdns = reader::expect_tag_and_value_at_end(presented_id, SEQUENCE)?;
    let mut constraint_rdns = Reader::new(constraint_rdns)?;
    let mut presented_rdns = Reader::new(presented_rdns)?;

    if subtrees == Subtrees::Excluded {
        // Excluded directoryName subtrees are not evaluated: any such
        // constraint rejects every name.
        if !constraint_rdns.at_end() || !presented_rdns.at_end() {
            return Err(Error::excluded("directoryName"));
        }
        return Ok(true);
    }

    loop {
        if constraint_rdns.at_end() {
            return Ok(true);
        }
        if presented_rdns.at_end() {
            return Ok(false);
        }
        let constraint_rdn = constraint_rdns.expect_tag_and_value(SET)?;
        let presented_rdn = presented_rdns.expect_tag_and_value(SET)?;
        if constraint_rdn != presented_rdn {
            return Ok(false);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
