// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Textual IP address parsing for reference identifiers.
//!
//! Only strict forms are accepted: dotted-quad IPv4 with no leading zeros,
//! and RFC 4291 IPv6 text with at most one `::` contraction and an optional
//! trailing embedded IPv4 address. Zone identifiers, prefixes and brackets
//! are not IP addresses here.

/// Parse a dotted-quad IPv4 address.
pub fn parse_ipv4_address(hostname: &[u8]) -> Option<[u8; 4]> {
    let mut input = hostname;
    Some([
        read_ipv4_component(&mut input, false)?,
        read_ipv4_component(&mut input, false)?,
        read_ipv4_component(&mut input, false)?,
        read_ipv4_component(&mut input, true)?,
    ])
}

/// Read one decimal component. Non-final components are terminated by a
/// dot, which is consumed; the final one by the end of input.
fn read_ipv4_component(input: &mut &[u8], last: bool) -> Option<u8> {
    let mut length = 0usize;
    let mut value: u16 = 0;

    loop {
        let (&b, rest) = match input.split_first() {
            Some(split) => split,
            None if last => break,
            None => return None,
        };
        *input = rest;

        match b {
            b'0'..=b'9' => {
                if value == 0 && length > 0 {
                    return None; // Leading zeros are not allowed.
                }
                value = value * 10 + u16::from(b - b'0');
                if value > 255 {
                    return None;
                }
                length += 1;
            }
            b'.' if !last => break,
            _ => return None,
        }
    }

    if length == 0 {
        return None;
    }
    u8::try_from(value).ok()
}

/// Parse an IPv6 address into its 16-byte network-order form.
pub fn parse_ipv6_address(hostname: &[u8]) -> Option<[u8; 16]> {
    let mut address = [0u8; 16];
    let mut pos = 0usize;
    let mut num_components = 0usize;
    let mut contraction_index: Option<usize> = None;

    if hostname.first() == Some(&b':') {
        if hostname.get(1) != Some(&b':') {
            return None;
        }
        pos = 2;
        contraction_index = Some(0);
    }

    loop {
        let start = pos;
        let mut component: u16 = 0;
        let mut component_length = 0usize;

        while let Some(&b) = hostname.get(pos) {
            if b == b':' {
                break;
            }
            pos += 1;
            let digit = match b {
                b'0'..=b'9' => b - b'0',
                b'a'..=b'f' => b - b'a' + 10,
                b'A'..=b'F' => b - b'A' + 10,
                b'.' => {
                    // Embedded IPv4 address: re-read this component as the
                    // start of a dotted quad filling the last 32 bits.
                    if num_components > 6 {
                        return None;
                    }
                    let ipv4 = parse_ipv4_address(&hostname[start..])?;
                    address[2 * num_components..2 * num_components + 4].copy_from_slice(&ipv4);
                    return finish_ipv6_address(address, num_components + 2, contraction_index);
                }
                _ => return None,
            };
            if component_length >= 4 {
                return None;
            }
            component_length += 1;
            component = (component << 4) | u16::from(digit);
        }

        if num_components >= 8 {
            return None;
        }

        if component_length == 0 {
            // Only a contraction at the very end leaves an empty component.
            // "::" on its own has no components on either side and is
            // rejected.
            if pos == hostname.len() && contraction_index == Some(num_components) {
                if contraction_index == Some(0) {
                    return None;
                }
                return finish_ipv6_address(address, num_components, contraction_index);
            }
            return None;
        }

        address[2 * num_components..2 * num_components + 2]
            .copy_from_slice(&component.to_be_bytes());
        num_components += 1;

        if pos == hostname.len() {
            return finish_ipv6_address(address, num_components, contraction_index);
        }

        // Consume the ':' separator.
        pos += 1;

        if hostname.get(pos) == Some(&b':') {
            if contraction_index.is_some() {
                return None; // Only one contraction is allowed.
            }
            pos += 1;
            contraction_index = Some(num_components);
            if pos == hostname.len() {
                return finish_ipv6_address(address, num_components, contraction_index);
            }
        }
    }
}

/// Expand the `::` contraction, if any, by shifting the components after
/// it to the end of the address and zero-filling the gap.
fn finish_ipv6_address(
    mut address: [u8; 16],
    num_components: usize,
    contraction_index: Option<usize>,
) -> Option<[u8; 16]> {
    if num_components > 8 {
        return None;
    }

    let contraction_index = match contraction_index {
        None => {
            return if num_components == 8 {
                Some(address)
            } else {
                None
            };
        }
        Some(index) => index,
    };

    // A contraction must stand for at least one zero component.
    if num_components >= 8 || contraction_index > num_components {
        return None;
    }

    let components_to_move = num_components - contraction_index;
    let gap = 8 - num_components;
    address.copy_within(
        2 * contraction_index..2 * num_components,
        2 * (contraction_index + gap),
    );
    address[2 * contraction_index..2 * (contraction_index + gap)].fill(0);
    debug_assert_eq!(contraction_index + gap + components_to_move, 8);

    Some(address)
}

// ============================================================================
// Tests
// ============================================================================
