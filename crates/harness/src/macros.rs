//! Assertion-style entry points that panic with the caller's location

/// Run the encryption check on a vector and panic on any failure.
///
/// ```ignore
/// pubkey_ok!(&vector);
/// pubkey_ok!(&vector, &HarnessConfig::halting());
/// ```
#[macro_export]
macro_rules! pubkey_ok {
    ($vector:expr) => {
        $crate::pubkey_ok!($vector, &$crate::HarnessConfig::default())
    };
    ($vector:expr, $config:expr) => {{
        let location = $crate::Location::new(file!(), line!(), column!());
        match $crate::check_encryption($vector, $config, location).and_then($crate::Report::into_result) {
            Ok(report) => report,
            Err(e) => panic!("{}", e),
        }
    }};
}

/// Run the signature check on a vector and panic on any failure.
#[macro_export]
macro_rules! pubkey_sign_ok {
    ($vector:expr) => {
        $crate::pubkey_sign_ok!($vector, &$crate::HarnessConfig::default())
    };
    ($vector:expr, $config:expr) => {{
        let location = $crate::Location::new(file!(), line!(), column!());
        match $crate::check_signature($vector, $config, location).and_then($crate::Report::into_result) {
            Ok(report) => report,
            Err(e) => panic!("{}", e),
        }
    }};
}
