// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! GeneralName and Distinguished Name views for name checking.
//!
//! This module provides zero-copy views over the name structures that
//! identity matching and name constraint enforcement walk:
//! - GeneralName type tags (RFC 5280 Section 4.2.1.6)
//! - GeneralNames enumeration over a SubjectAltName value
//! - RDNSequence / RelativeDistinguishedName / AttributeTypeAndValue
//!
//! Values are borrowed from the certificate; string values are never decoded
//! into Rust strings, the matchers work on raw bytes.

extern crate alloc;

use core::fmt;

use const_oid::ObjectIdentifier;

use crate::error::{Error, ParseError, Result};
use crate::reader::{
    self, Reader, CONSTRUCTED, CONTEXT_SPECIFIC, OBJECT_IDENTIFIER, SEQUENCE, SET,
};

// ============================================================================
// Attribute Type OIDs (RFC 5280, Appendix A.1)
// ============================================================================

/// Common Name (CN) - 2.5.4.3
pub const CN: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.3");

// ============================================================================
// GeneralName - RFC 5280 Section 4.2.1.6
// ============================================================================

/// The kind of a GeneralName.
///
/// `NameConstraints` is not a real GeneralName choice. It marks a search
/// whose "reference identifier" is an encoded NameConstraints extension,
/// so it has no tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralNameType {
    /// otherName `[0]`
    OtherName,
    /// rfc822Name `[1]`
    Rfc822Name,
    /// dNSName `[2]`
    DnsName,
    /// x400Address `[3]`
    X400Address,
    /// directoryName `[4]` (EXPLICIT, so always constructed)
    DirectoryName,
    /// ediPartyName `[5]`
    EdiPartyName,
    /// uniformResourceIdentifier `[6]`
    Uri,
    /// iPAddress `[7]`
    IpAddress,
    /// registeredID `[8]`
    RegisteredId,
    /// Pseudo-type for name constraint searches
    NameConstraints,
}

/// Every real GeneralName choice, in tag number order.
const GENERAL_NAME_TYPES: [GeneralNameType; 9] = [
    GeneralNameType::OtherName,
    GeneralNameType::Rfc822Name,
    GeneralNameType::DnsName,
    GeneralNameType::X400Address,
    GeneralNameType::DirectoryName,
    GeneralNameType::EdiPartyName,
    GeneralNameType::Uri,
    GeneralNameType::IpAddress,
    GeneralNameType::RegisteredId,
];

impl GeneralNameType {
    /// Map a GeneralName tag byte to its type. Each type has exactly one
    /// accepted tag; any other byte is not a GeneralName.
    pub fn from_tag(tag: u8) -> Option<Self> {
        GENERAL_NAME_TYPES
            .iter()
            .copied()
            .find(|name_type| name_type.tag() == Some(tag))
    }

    /// The tag this type is read with. Only directoryName carries the
    /// constructed bit. `None` for the name constraints pseudo-type.
    pub fn tag(self) -> Option<u8> {
        match self {
            GeneralNameType::OtherName => Some(CONTEXT_SPECIFIC),
            GeneralNameType::Rfc822Name => Some(CONTEXT_SPECIFIC | 1),
            GeneralNameType::DnsName => Some(CONTEXT_SPECIFIC | 2),
            GeneralNameType::X400Address => Some(CONTEXT_SPECIFIC | 3),
            GeneralNameType::DirectoryName => Some(CONTEXT_SPECIFIC | CONSTRUCTED | 4),
            GeneralNameType::EdiPartyName => Some(CONTEXT_SPECIFIC | 5),
            GeneralNameType::Uri => Some(CONTEXT_SPECIFIC | 6),
            GeneralNameType::IpAddress => Some(CONTEXT_SPECIFIC | 7),
            GeneralNameType::RegisteredId => Some(CONTEXT_SPECIFIC | 8),
            GeneralNameType::NameConstraints => None,
        }
    }
}

/// A single GeneralName: its type and its raw value bytes.
///
/// For `DirectoryName` the value is the encoded Name (a SEQUENCE TLV),
/// for the other types it is the implicitly tagged content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneralName<'a> {
    pub name_type: GeneralNameType,
    pub value: &'a [u8],
}

impl<'a> GeneralName<'a> {
    /// Read one GeneralName. An unknown tag is a DER error.
    pub fn read(reader: &mut Reader<'a>) -> Result<Self> {
        let (tag, value) = reader.read_tag_and_value()?;
        let name_type = GeneralNameType::from_tag(tag).ok_or_else(|| {
            Error::invalid_der(alloc::format!("unknown GeneralName tag 0x{:02x}", tag))
        })?;
        Ok(GeneralName { name_type, value })
    }
}

impl fmt::Display for GeneralName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name_type {
            GeneralNameType::DnsName => write!(f, "DNS:{}", self.value.escape_ascii()),
            GeneralNameType::Rfc822Name => write!(f, "email:{}", self.value.escape_ascii()),
            GeneralNameType::Uri => write!(f, "URI:{}", self.value.escape_ascii()),
            GeneralNameType::IpAddress => match self.value.len() {
                4 => write!(
                    f,
                    "IP:{}.{}.{}.{}",
                    self.value[0], self.value[1], self.value[2], self.value[3]
                ),
                16 => {
                    write!(f, "IP:")?;
                    for (i, pair) in self.value.chunks(2).enumerate() {
                        if i > 0 {
                            write!(f, ":")?;
                        }
                        write!(f, "{:x}", u16::from_be_bytes([pair[0], pair[1]]))?;
                    }
                    Ok(())
                }
                _ => write!(f, "IP:<invalid>"),
            },
            GeneralNameType::DirectoryName => write!(f, "DirName:<{} bytes>", self.value.len()),
            other => write!(f, "{:?}:<unsupported>", other),
        }
    }
}

/// Enumerator over the GeneralNames of a SubjectAltName value.
///
/// Yields each entry in encoded order. After the first error the iterator
/// is exhausted. Build a fresh one with [`GeneralNames::from_der`] to
/// restart.
pub struct GeneralNames<'a> {
    reader: Reader<'a>,
    failed: bool,
}

impl<'a> GeneralNames<'a> {
    /// Start enumerating `encoded`, which must be exactly one non-empty
    /// SEQUENCE.
    pub fn from_der(encoded: &'a [u8]) -> Result<Self> {
        let value = reader::expect_tag_and_value_at_end(encoded, SEQUENCE)?;
        if value.is_empty() {
            return Err(Error::ParseError(ParseError::EmptySequence(
                "subjectAltName",
            )));
        }
        Ok(GeneralNames {
            reader: Reader::new(value)?,
            failed: false,
        })
    }
}

impl<'a> Iterator for GeneralNames<'a> {
    type Item = Result<GeneralName<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.reader.at_end() {
            return None;
        }
        let name = GeneralName::read(&mut self.reader);
        if name.is_err() {
            self.failed = true;
        }
        Some(name)
    }
}

// ============================================================================
// Name (RDNSequence) - RFC 5280 Section 4.1.2.4
// ============================================================================

/// Values of consecutive elements that must all carry `tag`.
struct Elements<'a> {
    reader: Reader<'a>,
    tag: u8,
    failed: bool,
}

impl<'a> Iterator for Elements<'a> {
    type Item = Result<&'a [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.reader.at_end() {
            return None;
        }
        let value = self.reader.expect_tag_and_value(self.tag);
        if value.is_err() {
            self.failed = true;
        }
        Some(value)
    }
}

/// A distinguished name: the content of an RDNSequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Name<'a> {
    rdns: &'a [u8],
}

impl<'a> Name<'a> {
    /// View `encoded`, which must be exactly one SEQUENCE. The sequence may
    /// be empty.
    pub fn from_der(encoded: &'a [u8]) -> Result<Self> {
        let rdns = reader::expect_tag_and_value_at_end(encoded, SEQUENCE)?;
        Ok(Name { rdns })
    }

    /// True when the name has no RDNs.
    pub fn is_empty(&self) -> bool {
        self.rdns.is_empty()
    }

    /// The RDNs in encoded order.
    pub fn rdns(&self) -> Result<impl Iterator<Item = Result<RelativeDistinguishedName<'a>>>> {
        let elements = Elements {
            reader: Reader::new(self.rdns)?,
            tag: SET,
            failed: false,
        };
        Ok(elements.map(|value| value.map(|attributes| RelativeDistinguishedName { attributes })))
    }
}

/// One RDN: the content of a SET OF AttributeTypeAndValue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeDistinguishedName<'a> {
    attributes: &'a [u8],
}

impl<'a> RelativeDistinguishedName<'a> {
    /// The raw SET content. Two RDNs are equal exactly when these bytes are.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.attributes
    }

    /// The attributes in encoded order. An empty SET is a DER error.
    pub fn attributes(
        &self,
    ) -> Result<impl Iterator<Item = Result<AttributeTypeAndValue<'a>>>> {
        if self.attributes.is_empty() {
            return Err(Error::ParseError(ParseError::EmptySequence(
                "RelativeDistinguishedName",
            )));
        }
        let elements = Elements {
            reader: Reader::new(self.attributes)?,
            tag: SEQUENCE,
            failed: false,
        };
        Ok(elements.map(|value| value.and_then(AttributeTypeAndValue::from_value)))
    }
}

/// One attribute of an RDN.
///
/// Only the attribute type is decoded eagerly. The value is read on demand
/// so that attributes nobody asks about are skipped without inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeTypeAndValue<'a> {
    oid: &'a [u8],
    rest: &'a [u8],
}

impl<'a> AttributeTypeAndValue<'a> {
    /// Parse the content of an AttributeTypeAndValue SEQUENCE.
    pub fn from_value(value: &'a [u8]) -> Result<Self> {
        let mut reader = Reader::new(value)?;
        let oid = reader.expect_tag_and_value(OBJECT_IDENTIFIER)?;
        let rest = reader.skip_to_end()?;
        Ok(AttributeTypeAndValue { oid, rest })
    }

    /// True for the id-at-commonName attribute.
    pub fn is_common_name(&self) -> bool {
        self.oid == CN.as_bytes()
    }

    /// The value's raw tag byte and content. The value must be the only
    /// thing after the attribute type.
    pub fn value(&self) -> Result<(u8, &'a [u8])> {
        let mut reader = Reader::new(self.rest)?;
        let value = reader.read_tag_and_value()?;
        reader.end()?;
        Ok(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
