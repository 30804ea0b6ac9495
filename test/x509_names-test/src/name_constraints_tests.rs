// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

use x509_names::error::ConstraintError;
use x509_names::{
    check_name_constraints, check_presented_id_conforms_to_constraints, Certificate,
    EndEntityOrCa, Error, GeneralNameType, KeyPurposeId, Verdict,
};

use crate::common::*;

fn conforms(presented_type: GeneralNameType, presented: &[u8], nc: &[u8]) -> Result<(), Error> {
    check_presented_id_conforms_to_constraints(presented_type, presented, nc)
}

#[test]
fn test_ip_constraint_subnet() {
    setup_logger();
    let nc = name_constraints(&[ip_address(&[192, 0, 2, 0, 255, 255, 255, 0])], &[]);
    for last in [0u8, 1, 77, 255] {
        assert!(conforms(GeneralNameType::IpAddress, &[192, 0, 2, last], &nc).is_ok());
    }
    let err = conforms(GeneralNameType::IpAddress, &[192, 0, 3, 1], &nc).unwrap_err();
    assert_eq!(err.verdict(), Verdict::NotInNameSpace);
}

#[test]
fn test_ip_constraint_excluded_ipv6() {
    let mut constraint = [0u8; 32];
    constraint[..2].copy_from_slice(&[0x20, 0x01]);
    constraint[16..18].copy_from_slice(&[0xFF, 0xFF]);
    let nc = name_constraints(&[], &[ip_address(&constraint)]);

    let mut inside = [0u8; 16];
    inside[..2].copy_from_slice(&[0x20, 0x01]);
    inside[15] = 9;
    assert!(conforms(GeneralNameType::IpAddress, &inside, &nc)
        .unwrap_err()
        .is_cert_not_in_name_space());

    let mut outside = inside;
    outside[1] = 0x02;
    assert!(conforms(GeneralNameType::IpAddress, &outside, &nc).is_ok());

    // IPv4 names are never matched by IPv6 subtrees.
    assert!(conforms(GeneralNameType::IpAddress, &[32, 1, 0, 0], &nc).is_ok());
}

#[test]
fn test_directory_name_prefix_match() {
    let constraint = name(&[organization("Example"), cn("Team")]);
    let nc = name_constraints(&[directory_name(&constraint)], &[]);

    let exact = name(&[organization("Example"), cn("Team")]);
    let longer = name(&[organization("Example"), cn("Team"), cn("host")]);
    let shorter = name(&[organization("Example")]);
    let different = name(&[organization("Example"), cn("Tean")]);
    let case_differs = name(&[organization("example"), cn("Team")]);

    assert!(conforms(GeneralNameType::DirectoryName, &exact, &nc).is_ok());
    assert!(conforms(GeneralNameType::DirectoryName, &longer, &nc).is_ok());
    for presented in [&shorter, &different, &case_differs] {
        assert!(conforms(GeneralNameType::DirectoryName, presented, &nc)
            .unwrap_err()
            .is_cert_not_in_name_space());
    }
}

#[test]
fn test_directory_name_string_type_is_significant() {
    let constraint = name(&[cn_with_tag(PRINTABLE_STRING, b"Team")]);
    let nc = name_constraints(&[directory_name(&constraint)], &[]);
    let presented = name(&[cn_with_tag(UTF8_STRING, b"Team")]);
    assert!(conforms(GeneralNameType::DirectoryName, &presented, &nc).is_err());
}

#[test]
fn test_invalid_dns_constraint_reports_invalid_constraint() {
    let nc = name_constraints(&[dns_name("exa mple.com")], &[]);
    assert!(matches!(
        conforms(GeneralNameType::DnsName, b"www.example.com", &nc),
        Err(Error::ConstraintError(ConstraintError::InvalidConstraint(_)))
    ));
}

#[test]
fn test_end_entity_san_checked() {
    setup_logger();
    let nc = name_constraints(&[dns_name("example.com")], &[dns_name("internal.example.com")]);

    let ok_leaf = CertBuilder::new(name(&[]))
        .subject_alt_name(&[dns_name("www.example.com"), dns_name("example.com")])
        .build();
    let ok_leaf = Certificate::from_der(&ok_leaf, EndEntityOrCa::EndEntity).unwrap();
    assert!(check_name_constraints(&nc, [&ok_leaf], KeyPurposeId::ServerAuth).is_ok());

    let outside = CertBuilder::new(name(&[]))
        .subject_alt_name(&[dns_name("www.example.com"), dns_name("www.example.org")])
        .build();
    let outside = Certificate::from_der(&outside, EndEntityOrCa::EndEntity).unwrap();
    assert!(matches!(
        check_name_constraints(&nc, [&outside], KeyPurposeId::ServerAuth),
        Err(Error::ConstraintError(ConstraintError::NameNotPermitted(_)))
    ));

    let excluded = CertBuilder::new(name(&[]))
        .subject_alt_name(&[dns_name("db.internal.example.com")])
        .build();
    let excluded = Certificate::from_der(&excluded, EndEntityOrCa::EndEntity).unwrap();
    assert!(matches!(
        check_name_constraints(&nc, [&excluded], KeyPurposeId::ServerAuth),
        Err(Error::ConstraintError(ConstraintError::NameExcluded(_)))
    ));
}

#[test]
fn test_common_name_checked_only_for_server_auth_end_entity() {
    let nc = name_constraints(&[dns_name("example.com")], &[]);
    let subject = name(&[cn("www.example.org")]);

    let leaf = Certificate::from_parts(&subject, None, None, EndEntityOrCa::EndEntity);
    assert!(check_name_constraints(&nc, [&leaf], KeyPurposeId::ServerAuth)
        .unwrap_err()
        .is_cert_not_in_name_space());
    assert!(check_name_constraints(&nc, [&leaf], KeyPurposeId::AnyExtendedKeyUsage).is_ok());

    let ca = Certificate::from_parts(&subject, None, None, EndEntityOrCa::Ca);
    assert!(check_name_constraints(&nc, [&ca], KeyPurposeId::ServerAuth).is_ok());
}

#[test]
fn test_common_name_ipv4_checked_against_ip_subtrees() {
    let nc = name_constraints(&[ip_address(&[10, 0, 0, 0, 255, 0, 0, 0])], &[]);
    let inside = name(&[cn("10.1.2.3")]);
    let outside = name(&[cn("11.1.2.3")]);

    let leaf = Certificate::from_parts(&inside, None, None, EndEntityOrCa::EndEntity);
    assert!(check_name_constraints(&nc, [&leaf], KeyPurposeId::ServerAuth).is_ok());
    let leaf = Certificate::from_parts(&outside, None, None, EndEntityOrCa::EndEntity);
    assert!(check_name_constraints(&nc, [&leaf], KeyPurposeId::ServerAuth).is_err());
}

#[test]
fn test_common_name_that_is_not_a_name_is_ignored() {
    let nc = name_constraints(&[dns_name("example.com")], &[]);
    let subject = name(&[cn("Example Web Server")]);
    let leaf = Certificate::from_parts(&subject, None, None, EndEntityOrCa::EndEntity);
    assert!(check_name_constraints(&nc, [&leaf], KeyPurposeId::ServerAuth).is_ok());
}

#[test]
fn test_subject_checked_as_directory_name() {
    let permitted = name(&[organization("Example")]);
    let nc = name_constraints(&[directory_name(&permitted)], &[]);

    let inside = name(&[organization("Example"), cn("Intermediate")]);
    let outside = name(&[organization("Other"), cn("Intermediate")]);

    let ca = Certificate::from_parts(&inside, None, None, EndEntityOrCa::Ca);
    assert!(check_name_constraints(&nc, [&ca], KeyPurposeId::ServerAuth).is_ok());
    let ca = Certificate::from_parts(&outside, None, None, EndEntityOrCa::Ca);
    assert!(check_name_constraints(&nc, [&ca], KeyPurposeId::ServerAuth)
        .unwrap_err()
        .is_cert_not_in_name_space());
}

#[test]
fn test_rfc822_constraint_is_internal_error() {
    let nc = name_constraints(&[rfc822_name("example.com")], &[]);
    let san = subject_alt_name(&[rfc822_name("admin@example.com")]);
    let subject = name(&[]);
    let leaf = Certificate::from_parts(&subject, Some(&san), None, EndEntityOrCa::EndEntity);
    let err = check_name_constraints(&nc, [&leaf], KeyPurposeId::EmailProtection).unwrap_err();
    assert_eq!(err.verdict(), Verdict::Internal);
}

#[test]
fn test_malformed_constraints_are_bad_der() {
    let subject = name(&[]);
    let san = subject_alt_name(&[dns_name("www.example.com")]);
    let leaf = Certificate::from_parts(&subject, Some(&san), None, EndEntityOrCa::EndEntity);

    // Empty sequence, truncated value, and a forbidden `maximum` field.
    let mut with_maximum = dns_name("example.com");
    with_maximum.extend(tlv(0x81, &[0x02]));
    let constraints = [
        sequence(&[]),
        {
            let mut nc = name_constraints(&[dns_name("example.com")], &[]);
            nc.pop();
            nc
        },
        sequence(&[tlv(0xA0, &tlv(SEQUENCE, &with_maximum))]),
    ];
    for nc in &constraints {
        assert!(check_name_constraints(nc, [&leaf], KeyPurposeId::ServerAuth)
            .unwrap_err()
            .is_bad_der());
    }
}
