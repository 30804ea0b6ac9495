// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

use x509_names::{check_hostname, CertificateChain, KeyPurposeId};

/// Input layout: one length byte, that many bytes of hostname, then a
/// concatenated DER chain, leaf first.
fn fuzz_check_cert_hostname(data: &[u8]) {
    let Some((&hostname_len, rest)) = data.split_first() else {
        return;
    };
    let hostname_len = usize::from(hostname_len);
    if rest.len() < hostname_len {
        return;
    }
    let (hostname, chain) = rest.split_at(hostname_len);
    let Ok(hostname) = core::str::from_utf8(hostname) else {
        return;
    };

    let chain = match CertificateChain::from_concatenated_der(chain) {
        Ok(chain) => chain,
        Err(e) => {
            log::info!("chain rejected: {}", e);
            return;
        }
    };
    if let Some(leaf) = chain.leaf() {
        let result = check_hostname(leaf, hostname);
        log::info!("check_hostname({}) = {:?}", hostname, result);
        assert_eq!(result, check_hostname(leaf, hostname));
    }
    for eku in [KeyPurposeId::ServerAuth, KeyPurposeId::ClientAuth] {
        let result = chain.check_name_constraints(eku);
        log::info!("check_name_constraints({:?}) = {:?}", eku, result);
    }
}

#[cfg(not(feature = "fuzz"))]
fn main() {
    let _ = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Trace)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        // Here you can replace the single-step debugging value in the fuzzdata array.
        let fuzzdata = [
            0x0b, b'e', b'x', b'a', b'm', b'p', b'l', b'e', b'.', b'c', b'o', b'm', 0x30, 0x00,
        ];
        fuzz_check_cert_hostname(&fuzzdata);
    } else {
        let path = &args[1];
        let data = std::fs::read(path).expect("read crash file fail");
        fuzz_check_cert_hostname(&data);
    }
}

#[cfg(feature = "fuzz")]
fn main() {
    afl::fuzz!(|data: &[u8]| {
        fuzz_check_cert_hostname(data);
    });
}
