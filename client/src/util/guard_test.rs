use super::*;

fn redirect(path: &str) -> RouteDecision {
    RouteDecision::Redirect(path.to_owned())
}

// =============================================================
// decide
// =============================================================

#[test]
fn unauthenticated_redirects_to_given_path() {
    assert_eq!(decide(false, None, None, LOGIN_PATH), redirect(LOGIN_PATH));
    assert_eq!(decide(false, None, Some(Role::Lawyer), "/custom"), redirect("/custom"));
}

#[test]
fn authenticated_without_requirement_renders() {
    assert_eq!(decide(true, Some(Role::Client), None, LOGIN_PATH), RouteDecision::Render);
}

#[test]
fn wrong_role_goes_to_landing_not_login() {
    assert_eq!(decide(true, Some(Role::Client), Some(Role::Lawyer), LOGIN_PATH), redirect(LANDING_PATH));
}

#[test]
fn matching_role_renders() {
    assert_eq!(decide(true, Some(Role::Lawyer), Some(Role::Lawyer), LOGIN_PATH), RouteDecision::Render);
}

#[test]
fn decide_is_idempotent() {
    let first = decide(true, Some(Role::Client), Some(Role::Lawyer), LOGIN_PATH);
    let second = decide(true, Some(Role::Client), Some(Role::Lawyer), LOGIN_PATH);
    assert_eq!(first, second);
}

// =============================================================
// decide_for_session / decide_access
// =============================================================

#[test]
fn loading_session_is_pending() {
    assert_eq!(decide_for_session(&Session::unknown(), None, LOGIN_PATH), RouteDecision::Pending);
    assert_eq!(decide_for_session(&Session::unknown(), Some(Role::Lawyer), LOGIN_PATH), RouteDecision::Pending);
}

#[test]
fn public_routes_render_for_everyone() {
    for session in [Session::unknown(), Session::anonymous(), Session::authenticated(Role::Client, "C")] {
        assert_eq!(decide_access(&session, Access::Public, LOGIN_PATH), RouteDecision::Render);
    }
}

#[test]
fn role_access_requires_matching_role() {
    let client = Session::authenticated(Role::Client, "C");
    let lawyer = Session::authenticated(Role::Lawyer, "L");
    let access = Access::Role(Role::Lawyer);
    assert_eq!(decide_access(&client, access, LOGIN_PATH), redirect(LANDING_PATH));
    assert_eq!(decide_access(&lawyer, access, LOGIN_PATH), RouteDecision::Render);
}

// =============================================================
// Route policy
// =============================================================

#[test]
fn access_for_known_paths() {
    assert_eq!(access_for(HOME_PATH), Access::Public);
    assert_eq!(access_for(LOGIN_PATH), Access::Public);
    assert_eq!(access_for(LANDING_PATH), Access::Authenticated);
    assert_eq!(access_for(LEGAL_AI_PATH), Access::Authenticated);
    assert_eq!(access_for(LAWYER_PATH), Access::Role(Role::Lawyer));
}

#[test]
fn access_for_normalizes_path() {
    assert_eq!(access_for("/dashboard/"), Access::Authenticated);
    assert_eq!(access_for("/cases?status=new"), Access::Authenticated);
    assert_eq!(access_for("/lawyer#clients"), Access::Role(Role::Lawyer));
    assert_eq!(access_for(""), Access::Public);
}

#[test]
fn unknown_paths_are_public() {
    assert_eq!(access_for("/no-such-page"), Access::Public);
}

#[test]
fn guest_visiting_dashboard_goes_to_login() {
    assert_eq!(decide_path(&Session::anonymous(), "/dashboard"), redirect(LOGIN_PATH));
}

#[test]
fn guest_visiting_home_renders() {
    assert_eq!(decide_path(&Session::anonymous(), "/"), RouteDecision::Render);
}

#[test]
fn client_visiting_lawyer_workspace_goes_to_dashboard() {
    let client = Session::authenticated(Role::Client, "C");
    assert_eq!(decide_path(&client, "/lawyer"), redirect(LANDING_PATH));
}

#[test]
fn every_protected_route_is_pending_while_loading() {
    for rule in ROUTE_POLICY.iter().filter(|r| r.access != Access::Public) {
        assert_eq!(decide_path(&Session::unknown(), rule.path), RouteDecision::Pending, "{}", rule.path);
    }
}
