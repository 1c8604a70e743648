#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::store::PORTFOLIO_KEY;

#[test]
fn get_is_empty_outside_the_browser() {
    assert_eq!(BrowserStore.get(PORTFOLIO_KEY), Ok(None));
}

#[test]
fn set_is_accepted_but_not_retained() {
    let mut store = BrowserStore;
    assert_eq!(store.set(PORTFOLIO_KEY, "[]"), Ok(()));
    assert_eq!(store.get(PORTFOLIO_KEY), Ok(None));
}
