//! REST helpers backing the identity and cart providers.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since these endpoints are only meaningful in the
//! browser session that owns the cookies.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a `ProviderError` instead of panicking; the providers
//! turn errors into the anonymous / empty-cart fallback.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ProviderError;
use super::types::Session;
#[cfg(feature = "hydrate")]
use super::types::CartCount;

pub(crate) const SESSION_ENDPOINT: &str = "/api/auth/me";
pub(crate) const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub(crate) const CART_COUNT_ENDPOINT: &str = "/api/cart/count";

/// Fold an auth failure into "no session"; keep real outages as errors.
pub(crate) fn session_or_anonymous(result: Result<Session, ProviderError>) -> Result<Option<Session>, ProviderError> {
    match result {
        Ok(session) => Ok(Some(session)),
        Err(e) if e.is_unauthenticated() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Fetch the signed-in actor from `/api/auth/me`.
///
/// # Errors
///
/// Returns an error when the request fails for any reason other than the
/// visitor being anonymous.
pub async fn fetch_session() -> Result<Option<Session>, ProviderError> {
    #[cfg(feature = "hydrate")]
    {
        let fetched = async {
            let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
                .send()
                .await
                .map_err(|e| ProviderError::Network(e.to_string()))?;
            if !(200..300).contains(&resp.status()) {
                return Err(ProviderError::from_status(resp.status()));
            }
            resp.json::<Session>()
                .await
                .map_err(|e| ProviderError::Decode(e.to_string()))
        }
        .await;
        session_or_anonymous(fetched)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        session_or_anonymous(Err(ProviderError::Unavailable))
    }
}

/// End the server-side session via `POST /api/auth/logout`.
///
/// Best-effort: the caller clears local state regardless of the outcome.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            leptos::logging::warn!("logout request failed: {e}");
        }
    }
}

/// Fetch the number of items in the visitor's cart.
///
/// # Errors
///
/// Returns an error when the request fails, the status is not 2xx, or the
/// body is not a `{ "count": n }` object.
pub async fn fetch_cart_count() -> Result<u32, ProviderError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CART_COUNT_ENDPOINT)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        if !(200..300).contains(&resp.status()) {
            return Err(ProviderError::from_status(resp.status()));
        }
        let body: CartCount = resp
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;
        Ok(body.count)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ProviderError::Unavailable)
    }
}
