// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! OID constants for the extensions name checking reads, and key purposes
//!
//! # References
//! - RFC 5280 Section 4.2.1.6 (Subject Alternative Name)
//! - RFC 5280 Section 4.2.1.10 (Name Constraints)

use const_oid::ObjectIdentifier;

// ============================================================================
// Extension OIDs - RFC 5280 Section 4.2
// ============================================================================

/// Subject Alternative Name - 2.5.29.17
pub const SUBJECT_ALT_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.17");

/// Name Constraints - 2.5.29.30
pub const NAME_CONSTRAINTS: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.30");

/// The key purpose a chain is being validated for.
///
/// Name constraint enforcement only distinguishes `ServerAuth`: it is the
/// one purpose for which an end-entity subject CN is treated as a hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPurposeId {
    AnyExtendedKeyUsage,
    ServerAuth,
    ClientAuth,
    CodeSigning,
    EmailProtection,
    OcspSigning,
}
