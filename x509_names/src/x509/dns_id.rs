// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! DNS identifier syntax and matching (RFC 6125, RFC 5280 Section 4.2.1.10)
//!
//! The same byte grammar serves three roles:
//! - reference IDs: the hostname the application asked for; an absolute
//!   name with a trailing dot is allowed
//! - presented IDs: dNSName SAN entries and CN values; a single leading
//!   `*.` wildcard label is allowed
//! - name constraints: dNSName subtree bases; may be empty (matches every
//!   name) or start with a dot (matches strict subdomains only)
//!
//! Labels are LDH (letters, digits, hyphen) only. Comparison is ASCII
//! case-insensitive. No IDNA processing is done; `xn--` labels are compared
//! byte for byte.

/// The role a DNS identifier plays in a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdRole {
    ReferenceId,
    PresentedId,
    NameConstraint,
}

const MAX_DNS_ID_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

/// True when `hostname` can be used as a reference identifier.
pub fn is_valid_reference_dns_id(hostname: &[u8]) -> bool {
    is_valid_dns_id(hostname, IdRole::ReferenceId)
}

/// True when `hostname` is acceptable as a presented identifier.
pub fn is_valid_presented_dns_id(hostname: &[u8]) -> bool {
    is_valid_dns_id(hostname, IdRole::PresentedId)
}

/// Validate `hostname` under the rules for `role`.
pub fn is_valid_dns_id(hostname: &[u8], role: IdRole) -> bool {
    if hostname.len() > MAX_DNS_ID_LENGTH {
        return false;
    }

    if role == IdRole::NameConstraint && hostname.is_empty() {
        return true;
    }

    let mut dot_count = 0usize;
    let mut label_length = 0usize;
    let mut label_is_all_numeric = false;
    let mut label_ends_with_hyphen = false;

    // Only presented IDs may carry a wildcard, and only as the whole
    // leftmost label.
    let is_wildcard = role == IdRole::PresentedId && hostname.first() == Some(&b'*');
    let labels = if is_wildcard {
        if hostname.get(1) != Some(&b'.') {
            return false;
        }
        dot_count += 1;
        &hostname[2..]
    } else {
        hostname
    };

    if labels.is_empty() {
        return false;
    }

    for (i, &b) in labels.iter().enumerate() {
        let is_first_byte = !is_wildcard && i == 0;
        match b {
            b'-' => {
                if label_length == 0 {
                    return false; // Labels must not start with a hyphen.
                }
                label_is_all_numeric = false;
                label_ends_with_hyphen = true;
                label_length += 1;
                if label_length > MAX_LABEL_LENGTH {
                    return false;
                }
            }
            b'0'..=b'9' => {
                if label_length == 0 {
                    label_is_all_numeric = true;
                }
                label_ends_with_hyphen = false;
                label_length += 1;
                if label_length > MAX_LABEL_LENGTH {
                    return false;
                }
            }
            b'a'..=b'z' | b'A'..=b'Z' => {
                label_is_all_numeric = false;
                label_ends_with_hyphen = false;
                label_length += 1;
                if label_length > MAX_LABEL_LENGTH {
                    return false;
                }
            }
            b'.' => {
                dot_count += 1;
                if label_length == 0 && (role != IdRole::NameConstraint || !is_first_byte) {
                    return false;
                }
                if label_ends_with_hyphen {
                    return false; // Labels must not end with a hyphen.
                }
                label_length = 0;
            }
            _ => return false,
        }
    }

    // Only reference IDs may be absolute.
    if label_length == 0 && role != IdRole::ReferenceId {
        return false;
    }

    if label_ends_with_hyphen {
        return false;
    }

    // An all-numeric last label means this is an IPv4 address, not a name.
    if label_is_all_numeric {
        return false;
    }

    if is_wildcard {
        // At least three labels counting the wildcard, so "*.com" is out.
        let label_count = if label_length == 0 {
            dot_count
        } else {
            dot_count + 1
        };
        if label_count < 3 {
            return false;
        }
        if starts_with_idna_label(hostname) {
            return false;
        }
    }

    true
}

fn starts_with_idna_label(id: &[u8]) -> bool {
    id.starts_with(b"xn--")
}

/// Match a presented identifier against a reference identifier, both
/// validated in their roles first.
pub fn presented_dns_id_matches_reference_dns_id(presented: &[u8], reference: &[u8]) -> bool {
    presented_dns_id_matches(presented, IdRole::ReferenceId, reference)
}

/// Match `presented_id` against `reference_id` interpreted in
/// `reference_role`. Invalid input on either side never matches.
pub fn presented_dns_id_matches(
    presented_id: &[u8],
    reference_role: IdRole,
    reference_id: &[u8],
) -> bool {
    if !is_valid_presented_dns_id(presented_id) {
        return false;
    }
    if !is_valid_dns_id(reference_id, reference_role) {
        return false;
    }

    let mut presented = presented_id;
    let mut reference = reference_id;

    match reference_role {
        IdRole::ReferenceId => {}
        IdRole::NameConstraint => {
            if presented_id.len() > reference_id.len() {
                if reference_id.is_empty() {
                    // An empty constraint matches everything.
                    return true;
                }

                // ".example.com" matches subdomains only: align the
                // constraint with the tail of the presented ID.
                // "example.com" matches the name itself and its subdomains,
                // so the byte before the aligned tail must be a dot.
                if reference_id[0] == b'.' {
                    presented = &presented[presented_id.len() - reference_id.len()..];
                } else {
                    let skip = presented_id.len() - reference_id.len() - 1;
                    if presented[skip] != b'.' {
                        return false;
                    }
                    presented = &presented[skip + 1..];
                }
            }
        }
        IdRole::PresentedId => return false,
    }

    // A wildcard matches exactly one whole leftmost label of the reference.
    if presented.first() == Some(&b'*') {
        presented = &presented[1..];
        loop {
            match reference.split_first() {
                Some((_, rest)) => reference = rest,
                None => return false,
            }
            if reference.first() == Some(&b'.') {
                break;
            }
        }
    }

    loop {
        let (&p, presented_rest) = match presented.split_first() {
            Some(split) => split,
            None => return false,
        };
        let (&r, reference_rest) = match reference.split_first() {
            Some(split) => split,
            None => return false,
        };
        if !p.eq_ignore_ascii_case(&r) {
            return false;
        }
        presented = presented_rest;
        reference = reference_rest;
        if presented.is_empty() {
            // Presented IDs are never absolute.
            if p == b'.' {
                return false;
            }
            break;
        }
    }

    // An absolute reference ID matches the relative presented ID.
    if !reference.is_empty() {
        if reference_role != IdRole::NameConstraint {
            match reference.split_first() {
                Some((&b'.', rest)) => reference = rest,
                _ => return false,
            }
        }
        if !reference.is_empty() {
            return false;
        }
    }

    true
}

// ============================================================================
// Tests
// ============================================================================
