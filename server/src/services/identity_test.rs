use time::macros::datetime;

use super::*;

const NOW: OffsetDateTime = datetime!(2024-05-01 12:00 UTC);

fn client_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        full_name: "Jane Doe".to_owned(),
        email: email.to_owned(),
        password: "hunter22".to_owned(),
        role: Role::Client,
        lawyer: None,
    }
}

fn store() -> IdentityStore {
    IdentityStore::new(Duration::hours(1))
}

// =============================================================================
// Helpers
// =============================================================================

#[test]
fn bytes_to_hex_pads_each_byte() {
    assert_eq!(bytes_to_hex(&[0x0a, 0xff]), "0aff");
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn generate_token_is_64_hex_chars_and_unique() {
    let a = generate_token();
    let b = generate_token();
    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, b);
}

#[test]
fn hash_password_depends_on_salt() {
    assert_eq!(hash_password("s1", "pw"), hash_password("s1", "pw"));
    assert_ne!(hash_password("s1", "pw"), hash_password("s2", "pw"));
    assert_eq!(hash_password("", "").len(), 64);
}

#[test]
fn normalize_email_lowercases_and_validates() {
    assert_eq!(normalize_email("  Jane@Example.COM "), Some("jane@example.com".to_owned()));
    assert_eq!(normalize_email("no-at-sign"), None);
    assert_eq!(normalize_email("@example.com"), None);
    assert_eq!(normalize_email("a@b@c"), None);
}

// =============================================================================
// Registration and credentials
// =============================================================================

#[test]
fn register_then_verify() {
    let mut store = store();
    let principal = store.register(&client_request("Jane@Example.com")).unwrap();
    assert_eq!(principal.email, "jane@example.com");
    assert_eq!(principal.display_name.as_deref(), Some("Jane Doe"));

    let verified = store.verify("jane@example.com", "hunter22").unwrap();
    assert_eq!(verified, principal);
}

#[test]
fn register_duplicate_email_is_rejected() {
    let mut store = store();
    store.register(&client_request("a@b.com")).unwrap();
    assert_eq!(store.register(&client_request("A@B.com")), Err(IdentityServiceError::AccountExists));
    assert_eq!(store.account_count(), 1);
}

#[test]
fn register_validates_input() {
    let mut store = store();
    let short = RegisterRequest { password: "abc".to_owned(), ..client_request("a@b.com") };
    assert!(matches!(store.register(&short), Err(IdentityServiceError::InvalidInput(_))));

    let nameless = RegisterRequest { full_name: " ".to_owned(), ..client_request("a@b.com") };
    assert!(matches!(store.register(&nameless), Err(IdentityServiceError::InvalidInput(_))));

    let lawyer_without_details = RegisterRequest { role: Role::Lawyer, ..client_request("a@b.com") };
    assert_eq!(
        store.register(&lawyer_without_details),
        Err(IdentityServiceError::InvalidInput("lawyer details are required"))
    );
    assert_eq!(store.account_count(), 0);
}

#[test]
fn register_lawyer_keeps_details() {
    let mut store = store();
    let details = LawyerDetails {
        bar_number: "123456".to_owned(),
        specialization: "Family Law".to_owned(),
        years_of_experience: 5,
    };
    let request = RegisterRequest { role: Role::Lawyer, lawyer: Some(details.clone()), ..client_request("l@b.com") };
    store.register(&request).unwrap();

    let account = store.account("l@b.com").unwrap();
    assert_eq!(account.role, Role::Lawyer);
    assert_eq!(account.lawyer, Some(details));
    assert_eq!(account.specialization(), Some("Family Law"));
}

#[test]
fn client_registration_drops_lawyer_details() {
    let mut store = store();
    let details = LawyerDetails { bar_number: "1".to_owned(), specialization: "x".to_owned(), years_of_experience: 1 };
    let request = RegisterRequest { lawyer: Some(details), ..client_request("c@b.com") };
    store.register(&request).unwrap();
    let account = store.account("c@b.com").unwrap();
    assert_eq!(account.lawyer, None);
    assert_eq!(account.specialization(), None);
}

#[test]
fn verify_rejects_wrong_password_and_unknown_email() {
    let mut store = store();
    store.register(&client_request("a@b.com")).unwrap();
    assert_eq!(store.verify("a@b.com", "wrong"), Err(IdentityServiceError::InvalidCredentials));
    assert_eq!(store.verify("x@b.com", "hunter22"), Err(IdentityServiceError::InvalidCredentials));
}

#[test]
fn seeded_demo_lawyer_can_sign_in() {
    let mut store = store();
    store.seed_demo_accounts();
    store.seed_demo_accounts();
    assert_eq!(store.account_count(), 1);

    let principal = store.verify(DEMO_LAWYER_EMAIL, DEMO_LAWYER_PASSWORD).unwrap();
    assert_eq!(principal.email, DEMO_LAWYER_EMAIL);
    assert_eq!(store.account(DEMO_LAWYER_EMAIL).unwrap().role, Role::Lawyer);
}

// =============================================================================
// Sessions
// =============================================================================

#[test]
fn session_resolves_until_expiry() {
    let mut store = store();
    let principal = store.register(&client_request("a@b.com")).unwrap();
    let token = store.create_session(&principal.email, NOW);

    assert_eq!(store.principal_for_token(&token, NOW + Duration::minutes(59)), Some(principal));
    assert_eq!(store.principal_for_token(&token, NOW + Duration::hours(1)), None);
    assert_eq!(store.session_count(), 0);
}

#[test]
fn unknown_token_resolves_to_none() {
    let mut store = store();
    assert_eq!(store.principal_for_token("nope", NOW), None);
}

#[test]
fn delete_session_ends_it() {
    let mut store = store();
    let principal = store.register(&client_request("a@b.com")).unwrap();
    let token = store.create_session(&principal.email, NOW);

    assert!(store.delete_session(&token));
    assert!(!store.delete_session(&token));
    assert_eq!(store.principal_for_token(&token, NOW), None);
}

#[test]
fn purge_expired_only_drops_old_sessions() {
    let mut store = store();
    let principal = store.register(&client_request("a@b.com")).unwrap();
    store.create_session(&principal.email, NOW - Duration::hours(2));
    let fresh = store.create_session(&principal.email, NOW);

    assert_eq!(store.purge_expired(NOW), 1);
    assert_eq!(store.session_count(), 1);
    assert!(store.principal_for_token(&fresh, NOW).is_some());
}
