// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! DER builders for test certificates.
//!
//! Certificates built here are structurally valid but unsigned; name
//! checking never looks at signatures, keys or validity.

pub const SEQUENCE: u8 = 0x30;
pub const SET: u8 = 0x31;
pub const OID: u8 = 0x06;
pub const UTF8_STRING: u8 = 0x0C;
pub const PRINTABLE_STRING: u8 = 0x13;
pub const TELETEX_STRING: u8 = 0x14;
pub const BMP_STRING: u8 = 0x1E;

const CN_OID: [u8; 3] = [0x55, 0x04, 0x03];
const O_OID: [u8; 3] = [0x55, 0x04, 0x0A];
const SAN_OID: [u8; 3] = [0x55, 0x1D, 0x11];
const NAME_CONSTRAINTS_OID: [u8; 3] = [0x55, 0x1D, 0x1E];
// ecdsa-with-SHA256
const SIGNATURE_OID: [u8; 8] = [0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x04, 0x03, 0x02];

/// Route library logging to the test harness. RUST_LOG selects the level.
pub fn setup_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Encode one TLV with a minimal DER length.
pub fn tlv(tag: u8, value: &[u8]) -> Vec<u8> {
    let mut out = vec![tag];
    let len = value.len();
    if len < 0x80 {
        out.push(len as u8);
    } else if len <= 0xFF {
        out.extend_from_slice(&[0x81, len as u8]);
    } else {
        assert!(len <= 0xFFFF);
        out.extend_from_slice(&[0x82, (len >> 8) as u8, len as u8]);
    }
    out.extend_from_slice(value);
    out
}

pub fn sequence(parts: &[Vec<u8>]) -> Vec<u8> {
    tlv(SEQUENCE, &parts.concat())
}

// ============================================================================
// Names
// ============================================================================

/// One attribute in its own RDN.
pub fn rdn(oid: &[u8], value_tag: u8, value: &[u8]) -> Vec<u8> {
    let ava = sequence(&[tlv(OID, oid), tlv(value_tag, value)]);
    tlv(SET, &ava)
}

pub fn cn(value: &str) -> Vec<u8> {
    rdn(&CN_OID, UTF8_STRING, value.as_bytes())
}

pub fn cn_with_tag(value_tag: u8, value: &[u8]) -> Vec<u8> {
    rdn(&CN_OID, value_tag, value)
}

pub fn organization(value: &str) -> Vec<u8> {
    rdn(&O_OID, UTF8_STRING, value.as_bytes())
}

/// An encoded Name from already-encoded RDNs.
pub fn name(rdns: &[Vec<u8>]) -> Vec<u8> {
    sequence(rdns)
}

// ============================================================================
// GeneralNames
// ============================================================================

pub fn dns_name(value: &str) -> Vec<u8> {
    tlv(0x82, value.as_bytes())
}

pub fn ip_address(octets: &[u8]) -> Vec<u8> {
    tlv(0x87, octets)
}

pub fn rfc822_name(value: &str) -> Vec<u8> {
    tlv(0x81, value.as_bytes())
}

pub fn uri(value: &str) -> Vec<u8> {
    tlv(0x86, value.as_bytes())
}

pub fn directory_name(encoded_name: &[u8]) -> Vec<u8> {
    tlv(0xA4, encoded_name)
}

/// A subjectAltName extension value.
pub fn subject_alt_name(names: &[Vec<u8>]) -> Vec<u8> {
    sequence(names)
}

/// A NameConstraints extension value. Empty lists are omitted.
pub fn name_constraints(permitted: &[Vec<u8>], excluded: &[Vec<u8>]) -> Vec<u8> {
    let subtrees = |tag: u8, bases: &[Vec<u8>]| {
        let list: Vec<Vec<u8>> = bases.iter().map(|base| tlv(SEQUENCE, base)).collect();
        tlv(tag, &list.concat())
    };
    let mut value = Vec::new();
    if !permitted.is_empty() {
        value.extend(subtrees(0xA0, permitted));
    }
    if !excluded.is_empty() {
        value.extend(subtrees(0xA1, excluded));
    }
    tlv(SEQUENCE, &value)
}

// ============================================================================
// Certificates
// ============================================================================

/// Builder for an unsigned v3 certificate.
#[derive(Debug, Clone, Default)]
pub struct CertBuilder {
    subject: Vec<u8>,
    subject_alt_name: Option<Vec<u8>>,
    name_constraints: Option<Vec<u8>>,
}

impl CertBuilder {
    pub fn new(subject: Vec<u8>) -> Self {
        CertBuilder {
            subject,
            ..Default::default()
        }
    }

    pub fn subject_alt_name(mut self, names: &[Vec<u8>]) -> Self {
        self.subject_alt_name = Some(subject_alt_name(names));
        self
    }

    pub fn raw_subject_alt_name(mut self, value: Vec<u8>) -> Self {
        self.subject_alt_name = Some(value);
        self
    }

    pub fn name_constraints(mut self, value: Vec<u8>) -> Self {
        self.name_constraints = Some(value);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let algorithm = sequence(&[tlv(OID, &SIGNATURE_OID)]);
        let issuer = name(&[cn("Test Issuer")]);
        let validity = sequence(&[
            tlv(0x17, b"260101000000Z"),
            tlv(0x17, b"360101000000Z"),
        ]);
        let spki = sequence(&[algorithm.clone(), tlv(0x03, &[0x00, 0x04, 0x01, 0x02])]);

        let mut extensions = Vec::new();
        if let Some(san) = &self.subject_alt_name {
            extensions.push(sequence(&[tlv(OID, &SAN_OID), tlv(0x04, san)]));
        }
        if let Some(nc) = &self.name_constraints {
            extensions.push(sequence(&[
                tlv(OID, &NAME_CONSTRAINTS_OID),
                tlv(0x01, &[0xFF]),
                tlv(0x04, nc),
            ]));
        }

        let mut tbs = vec![
            tlv(0xA0, &tlv(0x02, &[0x02])),
            tlv(0x02, &[0x01, 0x23]),
            algorithm.clone(),
            issuer,
            validity,
            self.subject.clone(),
            spki,
        ];
        if !extensions.is_empty() {
            tbs.push(tlv(0xA3, &sequence(&extensions)));
        }

        sequence(&[sequence(&tbs), algorithm, tlv(0x03, &[0x00, 0x30, 0x00])])
    }
}
