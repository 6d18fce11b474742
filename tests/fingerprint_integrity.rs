use editor_core::fingerprint::{
    FingerprintAlgorithm, FingerprintError, Fingerprinter, Md5Fingerprinter, Sha256Fingerprinter,
};

fn md5(text: &str) -> String {
    Md5Fingerprinter
        .fingerprint(Some(text))
        .unwrap()
        .as_str()
        .to_string()
}

#[test]
fn invariant_same_input_same_fingerprint() {
    let input = "Test content for hashing";
    assert_eq!(md5(input), md5(input));
    assert_eq!(md5(input), md5(&input.to_string()));
}

#[test]
fn invariant_different_input_different_fingerprint() {
    assert_ne!(md5("Original content"), md5("Modified content"));
    assert_ne!(
        md5("This is the original file content imported from disk"),
        md5("This is the EDITED file content with changes")
    );
}

#[test]
fn invariant_single_character_change_avalanche() {
    let a = md5("This is a test");
    let b = md5("This is a Test");

    assert_ne!(a, b);
    assert_eq!(a.len(), b.len());

    // A one-character edit should disturb most of the digest, not one nibble
    let differing = a.chars().zip(b.chars()).filter(|(x, y)| x != y).count();
    assert!(differing > 16, "only {differing} of 32 hex characters changed");
}

#[test]
fn invariant_md5_format() {
    for input in [
        "",
        "Test content",
        "!@#$%^&*()_+-=[]{}|;':\",./<>?",
        "مرحبا بك في المحرر النصي العربي",
        "a".repeat(10_000).as_str(),
    ] {
        let digest = md5(input);
        assert_eq!(digest.len(), 32, "digest of {input:?} has wrong length");
        assert!(
            digest.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)),
            "digest {digest} is not upper-case hex"
        );
    }
}

#[test]
fn invariant_md5_known_values() {
    assert_eq!(md5(""), "D41D8CD98F00B204E9800998ECF8427E");
    assert_eq!(md5("abc"), "900150983CD24FB0D6963F7D28E17F72");
}

#[test]
fn invariant_absent_input_rejected() {
    assert_eq!(Md5Fingerprinter.fingerprint(None), Err(FingerprintError::InvalidArgument));
    assert_eq!(Sha256Fingerprinter.fingerprint(None), Err(FingerprintError::InvalidArgument));
}

#[test]
fn invariant_sha256_format() {
    let digest = Sha256Fingerprinter.fingerprint(Some("")).unwrap();
    assert_eq!(
        digest.as_str(),
        "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn invariant_algorithm_digest_lengths() {
    for algorithm in [FingerprintAlgorithm::Md5, FingerprintAlgorithm::Sha256] {
        let fingerprinter = algorithm.fingerprinter();
        for input in ["", "x", "a much longer piece of text"] {
            let digest = fingerprinter.fingerprint(Some(input)).unwrap();
            assert_eq!(digest.len(), algorithm.digest_len());
        }
    }
}
