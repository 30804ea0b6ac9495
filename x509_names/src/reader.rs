// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Bounded DER cursor
//!
//! A thin layer over [`der::SliceReader`] that reads tag/length/value triples
//! without interpreting the tag. The structures walked here (GeneralNames,
//! RDN sequences, constraint subtrees) use context-specific and universal
//! string tags that the name code wants to see raw, so only the length is
//! delegated to `der`.
//!
//! Every value handed out is a borrowed sub-span of the input; nothing is
//! copied.

extern crate alloc;

use crate::error::{Error, ParseError, Result};
use der::{Decode, Length, Reader as _, SliceReader};

// Universal tags used by the name code
pub const BOOLEAN: u8 = 0x01;
pub const INTEGER: u8 = 0x02;
pub const BIT_STRING: u8 = 0x03;
pub const OCTET_STRING: u8 = 0x04;
pub const OBJECT_IDENTIFIER: u8 = 0x06;
pub const UTF8_STRING: u8 = 0x0C;
pub const PRINTABLE_STRING: u8 = 0x13;
pub const TELETEX_STRING: u8 = 0x14;
pub const SEQUENCE: u8 = 0x30;
pub const SET: u8 = 0x31;

pub const CONTEXT_SPECIFIC: u8 = 0x80;
pub const CONSTRUCTED: u8 = 0x20;

/// Whether an outer SEQUENCE OF / SET OF may have no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyAllowed {
    No,
    Yes,
}

/// Forward-only cursor over a DER byte span.
pub struct Reader<'a> {
    input: &'a [u8],
    inner: SliceReader<'a>,
}

impl<'a> Reader<'a> {
    /// Create a reader over `input`.
    pub fn new(input: &'a [u8]) -> Result<Self> {
        Ok(Reader {
            input,
            inner: SliceReader::new(input)?,
        })
    }

    /// True when every byte has been consumed.
    pub fn at_end(&self) -> bool {
        self.inner.is_finished()
    }

    /// True when the next byte equals `tag`. Never consumes.
    pub fn peek(&self, tag: u8) -> bool {
        self.inner.peek_byte() == Some(tag)
    }

    /// Consume one byte.
    pub fn read_byte(&mut self) -> Result<u8> {
        if self.at_end() {
            return Err(Error::ParseError(ParseError::UnexpectedEof));
        }
        Ok(self.inner.read_byte()?)
    }

    /// Consume `len` bytes and return them.
    pub fn skip(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(Error::ParseError(ParseError::UnexpectedEof));
        }
        Ok(self.inner.read_slice(Length::try_from(len)?)?)
    }

    /// Consume and return everything left.
    pub fn skip_to_end(&mut self) -> Result<&'a [u8]> {
        let len = self.remaining();
        self.skip(len)
    }

    /// Read one element, returning its raw tag byte and its value bytes.
    ///
    /// High tag numbers (low five bits all set) are rejected.
    pub fn read_tag_and_value(&mut self) -> Result<(u8, &'a [u8])> {
        let tag = self.read_byte()?;
        if tag & 0x1F == 0x1F {
            return Err(Error::invalid_der("high tag number form is not supported"));
        }
        let length = Length::decode(&mut self.inner)?;
        let len = usize::try_from(length)?;
        if len > self.remaining() {
            return Err(Error::ParseError(ParseError::InvalidLength(
                alloc::format!("{} bytes declared, {} available", len, self.remaining()),
            )));
        }
        let value = self.inner.read_slice(length)?;
        Ok((tag, value))
    }

    /// Read one element that must carry `tag`, returning its value bytes.
    pub fn expect_tag_and_value(&mut self, tag: u8) -> Result<&'a [u8]> {
        let (found, value) = self.read_tag_and_value()?;
        if found != tag {
            return Err(Error::invalid_tag(tag, found));
        }
        Ok(value)
    }

    /// Read one element that must carry `tag`, returning the whole encoded
    /// element (tag, length and value).
    pub fn expect_tag_and_tlv(&mut self, tag: u8) -> Result<&'a [u8]> {
        let start = self.consumed();
        self.expect_tag_and_value(tag)?;
        let end = self.consumed();
        Ok(&self.input[start..end])
    }

    /// Require that the reader is exhausted.
    pub fn end(&self) -> Result<()> {
        if !self.at_end() {
            return Err(Error::ParseError(ParseError::TrailingData));
        }
        Ok(())
    }

    fn remaining(&self) -> usize {
        usize::try_from(self.inner.remaining_len()).unwrap_or(0)
    }

    fn consumed(&self) -> usize {
        self.input.len() - self.remaining()
    }
}

/// Read `tag` and return its value, requiring that nothing follows it.
pub fn expect_tag_and_value_at_end(input: &[u8], tag: u8) -> Result<&[u8]> {
    let mut reader = Reader::new(input)?;
    let value = reader.expect_tag_and_value(tag)?;
    reader.end()?;
    Ok(value)
}

/// Read an element tagged `tag`, hand a reader over its value to `decoder`,
/// and require that `decoder` consumed all of it.
pub fn nested<'a, T, F>(reader: &mut Reader<'a>, tag: u8, decoder: F) -> Result<T>
where
    F: FnOnce(&mut Reader<'a>) -> Result<T>,
{
    let value = reader.expect_tag_and_value(tag)?;
    let mut inner = Reader::new(value)?;
    let result = decoder(&mut inner)?;
    inner.end()?;
    Ok(result)
}

/// Walk a SEQUENCE OF / SET OF: read the `outer_tag` element, then run
/// `decoder` over each `inner_tag` element inside it.
pub fn nested_of<'a, F>(
    reader: &mut Reader<'a>,
    outer_tag: u8,
    inner_tag: u8,
    empty: EmptyAllowed,
    mut decoder: F,
) -> Result<()>
where
    F: FnMut(&mut Reader<'a>) -> Result<()>,
{
    let value = reader.expect_tag_and_value(outer_tag)?;
    let mut inner = Reader::new(value)?;
    if inner.at_end() {
        return match empty {
            EmptyAllowed::Yes => Ok(()),
            EmptyAllowed::No => Err(Error::ParseError(ParseError::EmptySequence(
                "SEQUENCE OF",
            ))),
        };
    }
    while !inner.at_end() {
        nested(&mut inner, inner_tag, &mut decoder)?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
