// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Minimal X.509 certificate view for name checking.
//!
//! Only the pieces of a certificate that identity matching and name
//! constraint enforcement consume are located:
//! - the encoded subject Name
//! - the subjectAltName extension value, if present
//! - the nameConstraints extension value, if present
//!
//! Signatures, validity, keys and every other extension are skipped without
//! interpretation; validating those is the job of path building.
//!
//! # Examples
//!
//! ```no_run
//! use x509_names::{Certificate, EndEntityOrCa};
//!
//! # fn example(der_bytes: &[u8]) -> x509_names::Result<()> {
//! let cert = Certificate::from_der(der_bytes, EndEntityOrCa::EndEntity)?;
//! if let Some(san) = cert.subject_alt_name() {
//!     println!("SAN extension is {} bytes", san.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod name;

extern crate alloc;

use crate::error::{Error, ParseError, Result};
use crate::reader::{
    self, Reader, BIT_STRING, BOOLEAN, CONSTRUCTED, CONTEXT_SPECIFIC, INTEGER, OBJECT_IDENTIFIER,
    OCTET_STRING, SEQUENCE,
};
use crate::x509::oids;

/// Whether a certificate is the end-entity or an issuing CA in its chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndEntityOrCa {
    EndEntity,
    Ca,
}

// TBSCertificate field tags - RFC 5280 Section 4.1
const VERSION_TAG: u8 = CONTEXT_SPECIFIC | CONSTRUCTED;
const ISSUER_UNIQUE_ID_TAG: u8 = CONTEXT_SPECIFIC | 1;
const SUBJECT_UNIQUE_ID_TAG: u8 = CONTEXT_SPECIFIC | 2;
const EXTENSIONS_TAG: u8 = CONTEXT_SPECIFIC | CONSTRUCTED | 3;

/// The name-bearing parts of one certificate, borrowed from its DER.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certificate<'a> {
    subject: &'a [u8],
    subject_alt_name: Option<&'a [u8]>,
    name_constraints: Option<&'a [u8]>,
    end_entity_or_ca: EndEntityOrCa,
}

impl<'a> Certificate<'a> {
    /// Build a view from already-located parts.
    ///
    /// `subject` is the complete encoded Name (SEQUENCE TLV). The extension
    /// values are the contents of the extnValue OCTET STRINGs.
    pub fn from_parts(
        subject: &'a [u8],
        subject_alt_name: Option<&'a [u8]>,
        name_constraints: Option<&'a [u8]>,
        end_entity_or_ca: EndEntityOrCa,
    ) -> Self {
        Certificate {
            subject,
            subject_alt_name,
            name_constraints,
            end_entity_or_ca,
        }
    }

    /// Locate the subject and the name extensions in a DER certificate.
    pub fn from_der(der: &'a [u8], end_entity_or_ca: EndEntityOrCa) -> Result<Self> {
        let certificate = reader::expect_tag_and_value_at_end(der, SEQUENCE)?;
        let mut certificate = Reader::new(certificate)?;
        let tbs = certificate.expect_tag_and_value(SEQUENCE)?;
        certificate.expect_tag_and_value(SEQUENCE)?; // signatureAlgorithm
        certificate.expect_tag_and_value(BIT_STRING)?; // signatureValue
        certificate.end()?;

        let mut tbs = Reader::new(tbs)?;
        if tbs.peek(VERSION_TAG) {
            tbs.expect_tag_and_value(VERSION_TAG)?;
        }
        tbs.expect_tag_and_value(INTEGER)?; // serialNumber
        tbs.expect_tag_and_value(SEQUENCE)?; // signature
        tbs.expect_tag_and_value(SEQUENCE)?; // issuer
        tbs.expect_tag_and_value(SEQUENCE)?; // validity
        let subject = tbs.expect_tag_and_tlv(SEQUENCE)?;
        tbs.expect_tag_and_value(SEQUENCE)?; // subjectPublicKeyInfo
        if tbs.peek(ISSUER_UNIQUE_ID_TAG) {
            tbs.expect_tag_and_value(ISSUER_UNIQUE_ID_TAG)?;
        }
        if tbs.peek(SUBJECT_UNIQUE_ID_TAG) {
            tbs.expect_tag_and_value(SUBJECT_UNIQUE_ID_TAG)?;
        }

        let mut cert = Certificate::from_parts(subject, None, None, end_entity_or_ca);
        if tbs.peek(EXTENSIONS_TAG) {
            let extensions = tbs.expect_tag_and_value(EXTENSIONS_TAG)?;
            cert.read_extensions(extensions)?;
        }
        tbs.end()?;

        log::trace!(
            "certificate view: subject {} bytes, SAN {}, nameConstraints {}",
            cert.subject.len(),
            cert.subject_alt_name.is_some(),
            cert.name_constraints.is_some()
        );
        Ok(cert)
    }

    /// Walk `extensions` ([3] EXPLICIT Extensions content) and capture the
    /// two extensions this crate cares about.
    fn read_extensions(&mut self, extensions: &'a [u8]) -> Result<()> {
        let extensions = reader::expect_tag_and_value_at_end(extensions, SEQUENCE)?;
        let mut extensions = Reader::new(extensions)?;
        while !extensions.at_end() {
            reader::nested(&mut extensions, SEQUENCE, |extension| {
                let oid = extension.expect_tag_and_value(OBJECT_IDENTIFIER)?;
                if extension.peek(BOOLEAN) {
                    extension.expect_tag_and_value(BOOLEAN)?; // critical
                }
                let value = extension.expect_tag_and_value(OCTET_STRING)?;

                if oid == oids::SUBJECT_ALT_NAME.as_bytes() {
                    if self.subject_alt_name.is_some() {
                        return Err(Error::ParseError(ParseError::DuplicateExtension(
                            "subjectAltName",
                        )));
                    }
                    self.subject_alt_name = Some(value);
                } else if oid == oids::NAME_CONSTRAINTS.as_bytes() {
                    if self.name_constraints.is_some() {
                        return Err(Error::ParseError(ParseError::DuplicateExtension(
                            "nameConstraints",
                        )));
                    }
                    self.name_constraints = Some(value);
                }
                Ok(())
            })?;
        }
        Ok(())
    }

    /// The complete encoded subject Name.
    pub fn subject(&self) -> &'a [u8] {
        self.subject
    }

    /// The subjectAltName extension value, if present.
    pub fn subject_alt_name(&self) -> Option<&'a [u8]> {
        self.subject_alt_name
    }

    /// The nameConstraints extension value, if present.
    pub fn name_constraints(&self) -> Option<&'a [u8]> {
        self.name_constraints
    }

    /// This certificate's position in its chain.
    pub fn end_entity_or_ca(&self) -> EndEntityOrCa {
        self.end_entity_or_ca
    }
}

// ============================================================================
// Tests
// ============================================================================
