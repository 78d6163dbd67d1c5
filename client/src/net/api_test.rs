use super::*;

#[test]
fn endpoints_point_at_api_prefix() {
    assert_eq!(SESSION_ENDPOINT, "/api/auth/me");
    assert_eq!(LOGOUT_ENDPOINT, "/api/auth/logout");
    assert_eq!(CART_COUNT_ENDPOINT, "/api/cart/count");
}

#[test]
fn session_or_anonymous_keeps_session() {
    let session = Session { name: "Ada".to_owned(), ..Session::default() };
    assert_eq!(session_or_anonymous(Ok(session.clone())), Ok(Some(session)));
}

#[test]
fn session_or_anonymous_maps_unauthorized_to_none() {
    assert_eq!(session_or_anonymous(Err(ProviderError::Status(401))), Ok(None));
}

#[test]
fn session_or_anonymous_propagates_outage() {
    assert_eq!(
        session_or_anonymous(Err(ProviderError::Status(503))),
        Err(ProviderError::Status(503))
    );
}

