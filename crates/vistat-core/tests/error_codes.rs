#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use vistat_core::error::VistatError;

#[test]
fn client_codes_are_stable() {
    let cases = [
        (VistatError::BadRequest("x".into()), "BAD_REQUEST"),
        (VistatError::StoreUnconfigured, "STORE_UNCONFIGURED"),
        (VistatError::StoreUnavailable("x".into()), "STORE_UNAVAILABLE"),
        (VistatError::UnsupportedVersion, "UNSUPPORTED_VERSION"),
        (VistatError::Internal("x".into()), "INTERNAL"),
    ];
    for (err, code) in cases {
        assert_eq!(err.client_code().as_str(), code);
    }
}

#[test]
fn http_status_mapping() {
    assert_eq!(VistatError::StoreUnconfigured.http_status(), 503);
    assert_eq!(VistatError::StoreUnavailable("down".into()).http_status(), 500);
    assert_eq!(VistatError::Internal("boom".into()).http_status(), 500);
    assert_eq!(VistatError::BadRequest("bad".into()).http_status(), 400);
}
