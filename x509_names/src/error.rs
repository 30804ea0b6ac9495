// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Error types for name matching and name constraint enforcement
//!
//! Every failure falls into one of four verdicts: malformed DER, a hostname
//! mismatch, a name constraint violation, or an internal invariant violation.
//! Compatible with both `std` and `no_std` environments.

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;

/// Result type alias for name checking operations
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for name matching and name constraint checking
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Malformed DER structure (BadDer)
    ParseError(ParseError),

    /// Name constraint violation (CertNotInNameSpace)
    ConstraintError(ConstraintError),

    /// Hostname or IP address mismatch (BadCertDomain)
    NameError(NameError),

    /// Internal invariant violation; never expected from well-formed calls
    InternalError(String),
}

/// Errors that occur while reading DER structures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Invalid DER encoding
    InvalidDer(String),

    /// Unexpected end of input
    UnexpectedEof,

    /// Invalid tag encountered
    InvalidTag { expected: u8, found: u8 },

    /// Invalid or unsupported length encoding
    InvalidLength(String),

    /// Bytes left over after a value that must consume its input
    TrailingData,

    /// A SEQUENCE or SET that must not be empty was empty
    EmptySequence(&'static str),

    /// An extension this crate reads appeared more than once
    DuplicateExtension(&'static str),

    /// Error from der crate
    DerError(String),
}

/// Errors raised by name constraint enforcement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    /// Permitted subtrees of the name's type exist but none matched
    NameNotPermitted(String),

    /// An excluded subtree matched the name
    NameExcluded(String),

    /// A constraint base is not a valid constraint of its type
    InvalidConstraint(String),

    /// The constraint names a form that is never constrained
    UnsupportedNameForm(String),
}

/// Errors raised by hostname and IP address matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The reference identifier is neither a DNS name nor an IP address
    InvalidReferenceId,

    /// Presented identifiers of the reference type exist but none matched
    NoMatchingName,

    /// No presented identifier of the reference type exists
    NoNamesOfGivenType,
}

/// The closed set of verdicts a caller acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The certificate or constraint extension is malformed
    MalformedCertificate,
    /// The certificate is not valid for the reference identifier
    NameMismatch,
    /// The certificate violates a name constraint
    NotInNameSpace,
    /// A defect in this library or in how it was called
    Internal,
}

// ============================================================================
// Error Display Implementation (works in both std and no_std)
// ============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParseError(e) => write!(f, "Parse error: {}", e),
            Error::ConstraintError(e) => write!(f, "Name constraint violation: {}", e),
            Error::NameError(e) => write!(f, "Name error: {}", e),
            Error::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidDer(msg) => write!(f, "Invalid DER encoding: {}", msg),
            ParseError::UnexpectedEof => write!(f, "Unexpected end of input"),
            ParseError::InvalidTag { expected, found } => {
                write!(
                    f,
                    "Invalid tag: expected 0x{:02x}, found 0x{:02x}",
                    expected, found
                )
            }
            ParseError::InvalidLength(msg) => write!(f, "Invalid length: {}", msg),
            ParseError::TrailingData => write!(f, "Trailing data after value"),
            ParseError::EmptySequence(what) => write!(f, "Empty {}", what),
            ParseError::DuplicateExtension(name) => write!(f, "Duplicate extension: {}", name),
            ParseError::DerError(msg) => write!(f, "DER error: {}", msg),
        }
    }
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintError::NameNotPermitted(name) => write!(f, "Name not permitted: {}", name),
            ConstraintError::NameExcluded(name) => write!(f, "Name excluded: {}", name),
            ConstraintError::InvalidConstraint(msg) => write!(f, "Invalid constraint: {}", msg),
            ConstraintError::UnsupportedNameForm(form) => {
                write!(f, "Constraint on unsupported name form: {}", form)
            }
        }
    }
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::InvalidReferenceId => {
                write!(f, "Reference identifier is not a DNS name or IP address")
            }
            NameError::NoMatchingName => {
                write!(f, "Certificate is not valid for the requested name")
            }
            NameError::NoNamesOfGivenType => {
                write!(f, "Certificate has no names of the requested type")
            }
        }
    }
}

// ============================================================================
// std::error::Error implementation (when std feature is enabled)
// ============================================================================

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// ============================================================================
// Conversions from external crate errors
// ============================================================================

/// Convert from der crate errors
impl From<der::Error> for Error {
    fn from(err: der::Error) -> Self {
        Error::ParseError(ParseError::DerError(err.to_string()))
    }
}

// ============================================================================
// Helper constructors and classification
// ============================================================================

impl Error {
    /// Create a parse error for invalid DER
    pub fn invalid_der<S: Into<String>>(msg: S) -> Self {
        Error::ParseError(ParseError::InvalidDer(msg.into()))
    }

    /// Create a parse error for a mismatched tag
    pub fn invalid_tag(expected: u8, found: u8) -> Self {
        Error::ParseError(ParseError::InvalidTag { expected, found })
    }

    /// Create a name-not-permitted constraint violation
    pub fn not_permitted<S: Into<String>>(name: S) -> Self {
        Error::ConstraintError(ConstraintError::NameNotPermitted(name.into()))
    }

    /// Create a name-excluded constraint violation
    pub fn excluded<S: Into<String>>(name: S) -> Self {
        Error::ConstraintError(ConstraintError::NameExcluded(name.into()))
    }

    /// Create a hostname mismatch error
    pub fn bad_cert_domain(kind: NameError) -> Self {
        Error::NameError(kind)
    }

    /// Create an internal error and report it through the logger.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        let msg = msg.into();
        log::error!("internal invariant violated: {}", msg);
        Error::InternalError(msg)
    }

    /// Classify this error into the verdict a caller acts on.
    pub fn verdict(&self) -> Verdict {
        match self {
            Error::ParseError(_) => Verdict::MalformedCertificate,
            Error::ConstraintError(_) => Verdict::NotInNameSpace,
            Error::NameError(_) => Verdict::NameMismatch,
            Error::InternalError(_) => Verdict::Internal,
        }
    }

    /// Malformed DER structure
    pub fn is_bad_der(&self) -> bool {
        self.verdict() == Verdict::MalformedCertificate
    }

    /// Hostname or IP address mismatch
    pub fn is_bad_cert_domain(&self) -> bool {
        self.verdict() == Verdict::NameMismatch
    }

    /// Name constraint violation
    pub fn is_cert_not_in_name_space(&self) -> bool {
        self.verdict() == Verdict::NotInNameSpace
    }
}

// ============================================================================
// Tests
// ============================================================================
