use futures::executor::block_on;
use time::macros::date;

use super::*;

#[test]
fn fetch_cases_is_scoped_by_role() {
    let client = block_on(fetch_cases(Role::Client));
    let lawyer = block_on(fetch_cases(Role::Lawyer));
    assert!(client.iter().all(|c| c.client_name == "You"));
    assert!(lawyer.iter().all(|c| c.client_name != "You"));
}

#[test]
fn client_overview_bundles_fixtures() {
    let overview = block_on(fetch_client_overview(date!(2024 - 01 - 01)));
    assert_eq!(overview.cases.len(), 5);
    assert_eq!(overview.appointments.len(), 2);
    assert_eq!(overview.queries.len(), 2);
}

#[test]
fn lawyer_appointments_follow_today() {
    let today = date!(2024 - 01 - 01);
    let overview = block_on(fetch_lawyer_overview(today));
    assert_eq!(overview.clients.len(), 4);
    assert!(overview.appointments.iter().any(|a| a.at.date() == today));
}

#[test]
fn assistant_answers_with_disclaimer() {
    let reply = block_on(ask_legal_question("Can my landlord evict me?".to_owned()));
    assert!(reply.ends_with(crate::state::legal_ai::DISCLAIMER));
}
