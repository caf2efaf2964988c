use super::*;

// =============================================================
// PersistedFlags::load
// =============================================================

#[test]
fn load_from_empty_store_is_signed_out() {
    let store = MemoryFlags::new();
    assert_eq!(PersistedFlags::load(&store), PersistedFlags::default());
}

#[test]
fn load_reads_all_three_keys() {
    let store = MemoryFlags::new();
    store.set(AUTHENTICATED_KEY, "true");
    store.set(ROLE_KEY, "lawyer");
    store.set(NAME_KEY, "Ada");

    let flags = PersistedFlags::load(&store);
    assert!(flags.is_authenticated);
    assert_eq!(flags.role, Some(Role::Lawyer));
    assert_eq!(flags.user_name.as_deref(), Some("Ada"));
}

#[test]
fn load_treats_unknown_role_as_absent() {
    let store = MemoryFlags::new();
    store.set(ROLE_KEY, "admin");
    assert_eq!(PersistedFlags::load(&store).role, None);
}

#[test]
fn load_requires_literal_true_for_authenticated() {
    let store = MemoryFlags::new();
    store.set(AUTHENTICATED_KEY, "yes");
    assert!(!PersistedFlags::load(&store).is_authenticated);
}

#[test]
fn load_ignores_empty_user_name() {
    let store = MemoryFlags::new();
    store.set(NAME_KEY, "");
    assert_eq!(PersistedFlags::load(&store).user_name, None);
}

// =============================================================
// save / clear
// =============================================================

#[test]
fn save_writes_storage_spellings() {
    let store = MemoryFlags::new();
    PersistedFlags { is_authenticated: true, role: Some(Role::Client), user_name: Some("Bo".to_owned()) }.save(&store);

    assert_eq!(store.get(AUTHENTICATED_KEY).as_deref(), Some("true"));
    assert_eq!(store.get(ROLE_KEY).as_deref(), Some("client"));
    assert_eq!(store.get(NAME_KEY).as_deref(), Some("Bo"));
}

#[test]
fn save_removes_absent_values() {
    let store = MemoryFlags::new();
    store.set(AUTHENTICATED_KEY, "true");
    store.set(ROLE_KEY, "lawyer");
    store.set(NAME_KEY, "Old");

    PersistedFlags::default().save(&store);
    assert!(store.is_empty());
}

#[test]
fn clear_removes_only_flag_keys() {
    let store = MemoryFlags::new();
    store.set(AUTHENTICATED_KEY, "true");
    store.set(ROLE_KEY, "lawyer");
    store.set(NAME_KEY, "Ada");
    store.set("theme", "dark");

    PersistedFlags::clear(&store);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

// =============================================================
// Role seeding
// =============================================================

#[test]
fn failed_sign_in_on_empty_cache_leaves_no_role() {
    let store = MemoryFlags::new();
    let previous = remember_role(&store, Role::Lawyer);
    assert_eq!(previous, None);
    assert_eq!(PersistedFlags::load(&store).role, Some(Role::Lawyer));

    restore_role(&store, previous);
    assert_eq!(PersistedFlags::load(&store).role, None);
}

#[test]
fn failed_sign_in_keeps_signed_in_users_role() {
    let store = MemoryFlags::new();
    PersistedFlags { is_authenticated: true, role: Some(Role::Lawyer), user_name: Some("Ada".to_owned()) }.save(&store);

    let previous = remember_role(&store, Role::Client);
    assert_eq!(PersistedFlags::load(&store).role, Some(Role::Client));

    restore_role(&store, previous);
    let flags = PersistedFlags::load(&store);
    assert_eq!(flags.role, Some(Role::Lawyer));
    assert!(flags.is_authenticated);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_flags_outside_browser_are_inert() {
    let store = BrowserFlags;
    store.set(ROLE_KEY, "lawyer");
    assert_eq!(store.get(ROLE_KEY), None);
}
