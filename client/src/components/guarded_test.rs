use super::*;

#[test]
fn redirects_replace_the_history_entry() {
    let options = redirect_options();
    assert!(options.replace);
    assert!(options.resolve);
    assert!(options.scroll);
}
