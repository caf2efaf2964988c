use super::*;

#[test]
fn tenancy_keywords_win() {
    assert_eq!(classify("My LANDLORD won't fix the heating"), Topic::Tenancy);
    assert_eq!(classify("Can my rent go up mid-lease?"), Topic::Tenancy);
    assert_eq!(classify("Tenant rights and patent law"), Topic::Tenancy);
}

#[test]
fn ip_keywords() {
    assert_eq!(classify("How do I copyright my software?"), Topic::IntellectualProperty);
    assert_eq!(classify("protecting intellectual property"), Topic::IntellectualProperty);
    assert_eq!(classify("Patent filing costs"), Topic::IntellectualProperty);
}

#[test]
fn anything_else_is_general() {
    assert_eq!(classify("How do I form an LLC?"), Topic::General);
    assert_eq!(classify(""), Topic::General);
}

#[test]
fn every_answer_ends_with_disclaimer() {
    for question in SUGGESTED_QUESTIONS {
        assert!(answer(question).ends_with(DISCLAIMER), "{question}");
    }
}

#[test]
fn answers_differ_by_topic() {
    let tenancy = answer("landlord");
    let ip = answer("copyright");
    let general = answer("llc");
    assert!(tenancy.contains("landlord-tenant"));
    assert_ne!(tenancy, ip);
    assert_ne!(ip, general);
}
