// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Identity search over a certificate's names (RFC 6125)
//!
//! One walk serves two purposes:
//! - hostname/IP matching: find a presented identifier equal to the
//!   reference identifier
//! - name constraint enforcement: check every presented identifier, and the
//!   subject as a directoryName, against an encoded NameConstraints value
//!
//! In both modes the subject CN is consulted as a legacy DNS name or IPv4
//! address only when the certificate carries no dNSName or iPAddress SAN
//! entries and the caller allows the fallback.

extern crate alloc;

use crate::certificate::name::{
    AttributeTypeAndValue, GeneralNameType, GeneralNames, Name,
};
use crate::certificate::{Certificate, EndEntityOrCa};
use crate::error::{Error, NameError, Result};
use crate::reader::{PRINTABLE_STRING, TELETEX_STRING, UTF8_STRING};
use crate::x509::dns_id::{
    is_valid_presented_dns_id, is_valid_reference_dns_id, presented_dns_id_matches, IdRole,
};
use crate::x509::ip_address::{parse_ipv4_address, parse_ipv6_address};
use crate::x509::name_constraints::check_presented_id_conforms_to_constraints;

/// Outcome of searching a certificate's names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// No presented identifier of the reference type was found.
    NoNamesOfGivenType,
    /// Identifiers of the reference type exist, none matched.
    Mismatch,
    /// An identifier matched.
    Match,
}

/// Whether the subject CN may stand in for missing SAN entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallBackToCommonName {
    No,
    Yes,
}

/// Search the names of a certificate for `reference_id`.
///
/// `reference_type` is `DnsName` or `IpAddress` for identity matching, or
/// `NameConstraints` with `reference_id` holding an encoded NameConstraints
/// value. In name constraint mode any violation is returned as an error and
/// `Mismatch` is only produced by the CN fallback.
pub fn search_names(
    subject_alt_name: Option<&[u8]>,
    subject: &[u8],
    reference_type: GeneralNameType,
    reference_id: &[u8],
    fallback: FallBackToCommonName,
) -> Result<MatchResult> {
    let mut result = MatchResult::NoNamesOfGivenType;
    let mut has_dns_or_ip = false;

    if let Some(san) = subject_alt_name {
        for name in GeneralNames::from_der(san)? {
            let name = name?;
            if reference_type == GeneralNameType::NameConstraints {
                check_presented_id_conforms_to_constraints(
                    name.name_type,
                    name.value,
                    reference_id,
                )?;
            } else if name.name_type == reference_type {
                if match_presented_id_with_reference_id(name.name_type, name.value, reference_id)?
                {
                    log::trace!("reference identifier matched {}", name);
                    return Ok(MatchResult::Match);
                }
                result = MatchResult::Mismatch;
            }
            if matches!(
                name.name_type,
                GeneralNameType::DnsName | GeneralNameType::IpAddress
            ) {
                has_dns_or_ip = true;
            }
        }
    }

    if reference_type == GeneralNameType::NameConstraints {
        check_presented_id_conforms_to_constraints(
            GeneralNameType::DirectoryName,
            subject,
            reference_id,
        )?;
    }

    // RFC 6125 Section 6.4.4: the CN is only a fallback for certificates
    // without DNS or IP SAN entries.
    if has_dns_or_ip || fallback == FallBackToCommonName::No {
        return Ok(result);
    }

    log::trace!("falling back to subject common name");
    search_common_names(subject, reference_type, reference_id, result)
}

/// Walk every CN in `subject`. The last CN decides the outcome.
fn search_common_names(
    subject: &[u8],
    reference_type: GeneralNameType,
    reference_id: &[u8],
    mut result: MatchResult,
) -> Result<MatchResult> {
    let subject = Name::from_der(subject)?;
    for rdn in subject.rdns()? {
        for attribute in rdn?.attributes()? {
            let attribute = attribute?;
            if attribute.is_common_name() {
                result = match_common_name(&attribute, reference_type, reference_id)?;
            }
        }
    }
    Ok(result)
}

fn match_common_name(
    attribute: &AttributeTypeAndValue<'_>,
    reference_type: GeneralNameType,
    reference_id: &[u8],
) -> Result<MatchResult> {
    let (value_tag, value) = attribute.value()?;

    // PrintableString cannot legally hold '*', but wildcard CNs encoded that
    // way are common and are matched like any other string.
    if !matches!(value_tag, PRINTABLE_STRING | UTF8_STRING | TELETEX_STRING) {
        return Ok(MatchResult::NoNamesOfGivenType);
    }

    if is_valid_presented_dns_id(value) {
        return match reference_type {
            GeneralNameType::NameConstraints => {
                conforms_to_constraints(GeneralNameType::DnsName, value, reference_id)
            }
            GeneralNameType::DnsName => {
                if match_presented_id_with_reference_id(
                    GeneralNameType::DnsName,
                    value,
                    reference_id,
                )? {
                    Ok(MatchResult::Match)
                } else {
                    Ok(MatchResult::Mismatch)
                }
            }
            _ => Ok(MatchResult::NoNamesOfGivenType),
        };
    }

    if let Some(ipv4) = parse_ipv4_address(value) {
        return match reference_type {
            GeneralNameType::NameConstraints => {
                conforms_to_constraints(GeneralNameType::IpAddress, &ipv4, reference_id)
            }
            GeneralNameType::IpAddress => {
                if match_presented_id_with_reference_id(
                    GeneralNameType::IpAddress,
                    &ipv4,
                    reference_id,
                )? {
                    Ok(MatchResult::Match)
                } else {
                    Ok(MatchResult::Mismatch)
                }
            }
            _ => Ok(MatchResult::NoNamesOfGivenType),
        };
    }

    // Neither a DNS name nor an IPv4 address: not an identifier at all.
    Ok(MatchResult::NoNamesOfGivenType)
}

/// Constraint check for a CN-derived identifier. A violation is a
/// `Mismatch` rather than an error; the caller decides what that means.
fn conforms_to_constraints(
    presented_type: GeneralNameType,
    presented_id: &[u8],
    encoded_name_constraints: &[u8],
) -> Result<MatchResult> {
    match check_presented_id_conforms_to_constraints(
        presented_type,
        presented_id,
        encoded_name_constraints,
    ) {
        Ok(()) => Ok(MatchResult::Match),
        Err(err @ Error::InternalError(_)) => Err(err),
        Err(err) => {
            log::trace!("common name does not conform to name constraints: {}", err);
            Ok(MatchResult::Mismatch)
        }
    }
}

fn match_presented_id_with_reference_id(
    name_type: GeneralNameType,
    presented_id: &[u8],
    reference_id: &[u8],
) -> Result<bool> {
    match name_type {
        GeneralNameType::DnsName => Ok(presented_dns_id_matches(
            presented_id,
            IdRole::ReferenceId,
            reference_id,
        )),
        GeneralNameType::IpAddress => Ok(presented_id == reference_id),
        other => Err(Error::internal(alloc::format!(
            "reference identifier matching is not defined for {:?}",
            other
        ))),
    }
}

// ============================================================================
// Hostname verification - RFC 6125 Section 6
// ============================================================================

/// Verify that a DER end-entity certificate is valid for `hostname`.
///
/// `hostname` is a DNS name (optionally absolute), a dotted-quad IPv4
/// address, or an IPv6 address without brackets or zone.
pub fn check_cert_hostname(cert_der: &[u8], hostname: &str) -> Result<()> {
    let cert = Certificate::from_der(cert_der, EndEntityOrCa::EndEntity)?;
    check_hostname(&cert, hostname)
}

/// [`check_cert_hostname`] over an already-located certificate view.
pub fn check_hostname(cert: &Certificate<'_>, hostname: &str) -> Result<()> {
    let hostname = hostname.as_bytes();

    let result = if is_valid_reference_dns_id(hostname) {
        search_names(
            cert.subject_alt_name(),
            cert.subject(),
            GeneralNameType::DnsName,
            hostname,
            FallBackToCommonName::Yes,
        )?
    } else if let Some(ipv6) = parse_ipv6_address(hostname) {
        // An IPv6 address never appears in a CN.
        search_names(
            cert.subject_alt_name(),
            cert.subject(),
            GeneralNameType::IpAddress,
            &ipv6,
            FallBackToCommonName::No,
        )?
    } else if let Some(ipv4) = parse_ipv4_address(hostname) {
        search_names(
            cert.subject_alt_name(),
            cert.subject(),
            GeneralNameType::IpAddress,
            &ipv4,
            FallBackToCommonName::Yes,
        )?
    } else {
        log::trace!("invalid reference identifier {}", hostname.escape_ascii());
        return Err(Error::bad_cert_domain(NameError::InvalidReferenceId));
    };

    match result {
        MatchResult::Match => Ok(()),
        MatchResult::Mismatch => {
            log::trace!("no presented identifier matches {}", hostname.escape_ascii());
            Err(Error::bad_cert_domain(NameError::NoMatchingName))
        }
        MatchResult::NoNamesOfGivenType => {
            log::trace!("no presented identifiers for {}", hostname.escape_ascii());
            Err(Error::bad_cert_domain(NameError::NoNamesOfGivenType))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
