//! Target classification tests

use pingtower_checks::{
    CheckType,
    target::{classify_target, is_valid_hostname, is_valid_ipv4},
    validation::validate_target,
};

#[test]
fn test_canonical_ipv4_addresses_are_accepted() {
    for a in [0u16, 1, 9, 10, 99, 100, 199, 200, 249, 250, 255] {
        for b in [0u16, 127, 255] {
            let ip = format!("{a}.{b}.{a}.{b}");
            assert!(is_valid_ipv4(&ip), "{ip} should be a valid IPv4 address");
            assert!(classify_target(CheckType::Tcp, &ip), "{ip} should be a TCP target");
            assert!(classify_target(CheckType::Ping, &ip), "{ip} should be a ping target");
        }
    }
}

#[test]
fn test_out_of_range_or_padded_octets_are_rejected() {
    let rejected =
        ["256.0.0.1", "1.2.3.300", "999.999.999.999", "192.168.01.1", "00.1.2.3", "1.2.3.04"];
    for ip in rejected {
        assert!(!is_valid_ipv4(ip), "{ip} should not be a valid IPv4 address");
        assert!(!classify_target(CheckType::Tcp, ip), "{ip} should not be a TCP target");
    }
}

#[test]
fn test_digits_and_dots_never_pass_as_hostnames() {
    for candidate in ["1", "12.34", "1.2.3.4.5", "999.999.999.999", "1..2", ".5", "300.300."] {
        assert!(!is_valid_hostname(candidate), "{candidate} should not be a hostname");
    }
}

#[test]
fn test_malformed_ip_is_rejected_end_to_end() {
    let errors = validate_target(CheckType::Tcp, "999.999.999.999");
    assert_eq!(errors.len(), 1, "999.999.999.999 should fail as a TCP target");
    assert_eq!(errors[0].field, "target");
}

#[test]
fn test_targets_per_check_type() {
    assert!(classify_target(CheckType::Http, "https://example.com"));
    assert!(classify_target(CheckType::Http, "http://localhost:3000"));
    assert!(!classify_target(CheckType::Http, "example.com"));
    assert!(!classify_target(CheckType::Http, "ftp://example.com"));

    assert!(classify_target(CheckType::Tcp, "example.com"));
    assert!(classify_target(CheckType::Tcp, "localhost"));
    assert!(!classify_target(CheckType::Tcp, "https://example.com"));

    assert!(classify_target(CheckType::Ping, "google.com"));
    assert!(!classify_target(CheckType::Ping, "invalid..domain"));
}
