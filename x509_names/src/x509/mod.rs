// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Identity matching and name constraint enforcement.
//!
//! This module provides RFC 6125 hostname/IP verification and RFC 5280
//! name constraint checking over the name views in [`crate::certificate`].

pub mod dns_id;
pub mod ip_address;
pub mod name_constraints;
pub mod oids;
pub mod search;

pub use dns_id::{
    is_valid_presented_dns_id, is_valid_reference_dns_id,
    presented_dns_id_matches_reference_dns_id,
};
pub use ip_address::{parse_ipv4_address, parse_ipv6_address};
pub use name_constraints::{check_name_constraints, check_presented_id_conforms_to_constraints};
pub use oids::KeyPurposeId;
pub use search::{
    check_cert_hostname, check_hostname, search_names, FallBackToCommonName, MatchResult,
};
