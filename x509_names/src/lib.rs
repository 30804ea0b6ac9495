// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! X.509 Name Matching and Name Constraints
//!
//! A no_std-compatible library deciding whether a certificate is valid for
//! a hostname or IP address, and whether the names in a chain conform to
//! the name constraints of the CAs above them. Uses `der` for length
//! decoding and works on borrowed DER throughout.
//!
//! # Features
//! - RFC 6125 hostname and IP address verification with legacy CN fallback
//! - RFC 5280 name constraints for dNSName, iPAddress and directoryName
//! - Strict DNS-ID, IPv4 and IPv6 reference identifier syntax
//!
//! # Example
//! ```no_run
//! use x509_names::check_cert_hostname;
//!
//! # fn example(cert_der: &[u8]) -> x509_names::Result<()> {
//! check_cert_hostname(cert_der, "www.example.com")?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod certificate;
pub mod chain;
pub mod error;
pub mod reader;
pub mod x509;

pub use certificate::name::{GeneralName, GeneralNameType, GeneralNames};
pub use certificate::{Certificate, EndEntityOrCa};
pub use chain::CertificateChain;
pub use error::{Error, Result, Verdict};
pub use x509::{
    check_cert_hostname, check_hostname, check_name_constraints,
    check_presented_id_conforms_to_constraints, is_valid_presented_dns_id,
    is_valid_reference_dns_id, parse_ipv4_address, parse_ipv6_address,
    presented_dns_id_matches_reference_dns_id, search_names, FallBackToCommonName, KeyPurposeId,
    MatchResult,
};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::x509::{FallBackToCommonName, KeyPurposeId, MatchResult};
    pub use crate::{Certificate, CertificateChain, EndEntityOrCa, Error, Result};
}
