//! Cart summary state and the navigation badge derived from it.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::net::error::ProviderError;

/// Largest count the badge spells out; anything above renders as `"9+"`.
pub const BADGE_MAX_DISPLAY: u32 = 9;

/// Item count of the visitor's cart plus its loading flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CartState {
    pub count: u32,
    pub loading: bool,
}

impl CartState {
    pub fn pending() -> Self {
        Self { count: 0, loading: true }
    }

    /// Apply a fetch outcome; failures leave an empty cart.
    pub fn resolve(&mut self, result: Result<u32, ProviderError>) -> Option<ProviderError> {
        self.loading = false;
        match result {
            Ok(count) => {
                self.count = count;
                None
            }
            Err(e) => {
                self.count = 0;
                Some(e)
            }
        }
    }
}

/// What the cart icon shows next to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartBadge {
    Hidden,
    Loading,
    Count(String),
}

impl CartBadge {
    /// Loading wins over any count; zero hides the badge.
    pub fn from_parts(count: u32, loading: bool) -> Self {
        if loading {
            Self::Loading
        } else if count == 0 {
            Self::Hidden
        } else if count > BADGE_MAX_DISPLAY {
            Self::Count(format!("{BADGE_MAX_DISPLAY}+"))
        } else {
            Self::Count(count.to_string())
        }
    }
}
