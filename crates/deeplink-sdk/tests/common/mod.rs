//! Common test utilities for SDK integration tests

use deeplink_sdk::{decode, DecodeError, Request, RequestIdentifier};

/// URIs the native app sends for each request variant
pub const VALID_URIS: &[&str] = &[
    "visma-identity://login?source=severa",
    "visma-identity://confirm?source=netvisor&paymentnumber=102226",
    "visma-identity://sign?source=vismasign&documentid=105ab44",
];

/// URIs that must be rejected, with the expected error message
pub const INVALID_URIS: &[(&str, &str)] = &[
    (
        "invalid://sign?source=vismasign&documentid=105ab44",
        "Invalid scheme: invalid",
    ),
    (
        "visma-identity://invalid?source=vismasign&documentid=105ab44",
        "Invalid path: invalid",
    ),
    ("visma-identity://login", "Missing params"),
    ("visma-identity://login?source", r#"Invalid params: {"source":""}"#),
    (
        "visma-identity://confirm?source=netvisor&paymentnumber=abc",
        r#"Invalid params: {"source":"netvisor","paymentnumber":"abc"}"#,
    ),
    (
        "visma-identity://confirm?source=netvisor&paymentnumber=10.5",
        r#"Invalid params: {"source":"netvisor","paymentnumber":"10.5"}"#,
    ),
    (
        "visma-identity",
        "Invalid URI (missing path): visma-identity",
    ),
];

/// Result of decoding `uri` through both entry points
pub struct BothShapes {
    pub function: Result<Request, DecodeError>,
    pub object: Result<RequestIdentifier, DecodeError>,
}

impl BothShapes {
    pub fn decode(uri: &str) -> Self {
        Self {
            function: decode(uri),
            object: RequestIdentifier::new(uri),
        }
    }

    /// Assert both shapes succeeded with the same request
    pub fn assert_same_request(&self) -> &Request {
        let function = self.function.as_ref().expect("function form failed");
        let object = self.object.as_ref().expect("object form failed");
        assert_eq!(function, object.as_request());
        function
    }

    /// Assert both shapes failed with `message`
    pub fn assert_same_error(&self, message: &str) {
        let function = self.function.as_ref().expect_err("function form succeeded");
        let object = self.object.as_ref().expect_err("object form succeeded");
        assert_eq!(function, object);
        assert_eq!(function.to_string(), message);
    }
}
