use crate::domain::{RouteKey, RouteToken};

// the data set keys routes by short country/airport codes
#[test]
fn test_valid_codes_parse() {
    for code in ["DE", "US", "UAE", "OM", "ZRH1"] {
        let token = RouteToken::parse(code).expect("Should accept a short code");
        assert_eq!(token.as_str(), code);
    }
}

// a missing parameter arrives as an empty string, which is not a key
#[test]
fn test_empty_token_rejected() {
    assert!(RouteToken::parse("").is_err());
}

#[test]
fn test_overlong_token_rejected() {
    assert!(RouteToken::parse("ABCDEFGHIJKLM").is_err());
}

// anything that could smuggle SQL metacharacters or whitespace is rejected
// before it gets near a query
#[test]
fn test_non_alphanumeric_tokens_rejected() {
    for raw in ["D E", "DE'", "DE;--", "D\u{00C9}", "DE\n", "'; DROP TABLE map"] {
        assert!(
            RouteToken::parse(raw).is_err(),
            "Should reject token {:?}",
            raw
        );
    }
}

// tokens are matched exactly, no case folding happens on the way in
#[test]
fn test_token_case_preserved() {
    let token = RouteToken::parse("de").unwrap();
    assert_eq!(token.as_str(), "de");
}

#[test]
fn test_route_key_needs_both_tokens_valid() {
    assert!(RouteKey::parse("DE", "US").is_ok());
    assert!(RouteKey::parse("", "US").is_err());
    assert!(RouteKey::parse("DE", "U S").is_err());
}

#[test]
fn test_invalid_token_error_names_the_token() {
    let err = RouteToken::parse("D E").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("D E"));
}
