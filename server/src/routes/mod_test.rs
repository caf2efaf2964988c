use super::*;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn api_routes_build_with_state() {
    let _router: Router = api_routes(crate::state::test_helpers::test_app_state());
}

// =============================================================================
// Leptos route list
// =============================================================================

fn generated_paths() -> Vec<String> {
    generate_route_list(client::app::App)
        .into_iter()
        .map(|route| route.path().to_owned())
        .collect()
}

#[test]
fn route_list_mounts_every_policy_path() {
    let paths = generated_paths();
    for rule in client::util::guard::ROUTE_POLICY {
        assert!(paths.iter().any(|p| p == rule.path), "{} not mounted: {paths:?}", rule.path);
    }
}

#[test]
fn route_list_has_no_paths_outside_policy() {
    let policy: Vec<&str> = client::util::guard::ROUTE_POLICY.iter().map(|rule| rule.path).collect();
    for path in generated_paths() {
        assert!(policy.contains(&path.as_str()), "{path} has no access rule");
    }
}
