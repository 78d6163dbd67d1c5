use super::*;

#[test]
fn unauthorized_statuses_mean_anonymous() {
    assert!(ProviderError::from_status(401).is_unauthenticated());
    assert!(ProviderError::from_status(403).is_unauthenticated());
}

#[test]
fn other_failures_are_outages() {
    assert!(!ProviderError::from_status(500).is_unauthenticated());
    assert!(!ProviderError::Network("offline".to_owned()).is_unauthenticated());
    assert!(!ProviderError::Unavailable.is_unauthenticated());
}

#[test]
fn display_includes_detail() {
    assert_eq!(ProviderError::Status(502).to_string(), "unexpected status: 502");
    assert_eq!(ProviderError::Decode("eof".to_owned()).to_string(), "malformed response: eof");
}
