// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Certificate chain types.
//!
//! This module provides the `CertificateChain` type for representing
//! an ordered sequence of certificate views from leaf to root, and for
//! enforcing every CA's name constraints over the certificates below it.

extern crate alloc;

use alloc::vec::Vec;

use crate::certificate::{Certificate, EndEntityOrCa};
use crate::error::{Error, ParseError, Result};
use crate::reader::{Reader, SEQUENCE};
use crate::x509::name_constraints::check_name_constraints;
use crate::x509::oids::KeyPurposeId;

// ============================================================================
// Certificate Chain
// ============================================================================

/// A certificate chain, ordered from leaf (end-entity) to root (trust anchor).
#[derive(Debug, Clone)]
pub struct CertificateChain<'a> {
    /// The certificates in the chain, from leaf to root
    pub certificates: Vec<Certificate<'a>>,
}

impl<'a> CertificateChain<'a> {
    /// Create a new certificate chain
    pub fn new(certificates: Vec<Certificate<'a>>) -> Self {
        Self { certificates }
    }

    /// Create a chain with a single certificate
    pub fn single(cert: Certificate<'a>) -> Self {
        Self {
            certificates: alloc::vec![cert],
        }
    }

    /// Parse concatenated DER certificates, leaf first.
    ///
    /// The first certificate is the end entity, every later one a CA.
    pub fn from_concatenated_der(data: &'a [u8]) -> Result<Self> {
        let mut reader = Reader::new(data)?;
        let mut certificates = Vec::new();
        while !reader.at_end() {
            let der = reader.expect_tag_and_tlv(SEQUENCE)?;
            let role = if certificates.is_empty() {
                EndEntityOrCa::EndEntity
            } else {
                EndEntityOrCa::Ca
            };
            certificates.push(Certificate::from_der(der, role)?);
        }
        if certificates.is_empty() {
            return Err(Error::ParseError(ParseError::EmptySequence(
                "certificate chain",
            )));
        }
        log::trace!("parsed chain of {} certificates", certificates.len());
        Ok(Self { certificates })
    }

    /// Add a certificate to the chain
    pub fn push(&mut self, cert: Certificate<'a>) {
        self.certificates.push(cert);
    }

    /// Get the leaf (end-entity) certificate
    pub fn leaf(&self) -> Option<&Certificate<'a>> {
        self.certificates.first()
    }

    /// Get the root (trust anchor) certificate
    pub fn root(&self) -> Option<&Certificate<'a>> {
        self.certificates.last()
    }

    /// Get the chain length
    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    /// Check if the chain is empty
    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    /// Get an iterator over the certificates
    pub fn iter(&self) -> core::slice::Iter<'_, Certificate<'a>> {
        self.certificates.iter()
    }

    /// Enforce the name constraints of every CA in the chain on all the
    /// certificates it issued, directly or through intermediates.
    ///
    /// Constraints on the leaf itself constrain nothing and are ignored.
    pub fn check_name_constraints(&self, required_eku: KeyPurposeId) -> Result<()> {
        for (index, issuer) in self.certificates.iter().enumerate().skip(1) {
            if let Some(name_constraints) = issuer.name_constraints() {
                log::trace!(
                    "enforcing name constraints of chain[{}] on {} subordinates",
                    index,
                    index
                );
                check_name_constraints(
                    name_constraints,
                    self.certificates[..index].iter().rev(),
                    required_eku,
                )?;
            }
        }
        Ok(())
    }
}
