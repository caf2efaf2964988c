use client::state::session::DEMO_LAWYER_EMAIL;

use super::*;

#[tokio::test]
async fn default_state_seeds_demo_lawyer() {
    let state = test_helpers::test_app_state();
    let identity = state.identity.read().await;
    assert_eq!(identity.account_count(), 1);
    assert!(identity.account(DEMO_LAWYER_EMAIL).is_some());
}

#[tokio::test]
async fn seeding_can_be_disabled() {
    let state = test_helpers::empty_app_state();
    assert_eq!(state.identity.read().await.account_count(), 0);
    assert!(!state.config.seed_demo_accounts);
}

#[tokio::test]
async fn clones_share_the_identity_store() {
    let state = test_helpers::empty_app_state();
    let other = state.clone();
    other.identity.write().await.seed_demo_accounts();
    assert_eq!(state.identity.read().await.account_count(), 1);
}
