use super::*;

#[test]
fn submit_requires_an_idle_request_slot() {
    assert!(can_submit(false, "a landing page"));
    assert!(!can_submit(true, "a landing page"));
}

#[test]
fn submit_requires_a_non_blank_prompt() {
    assert!(!can_submit(false, ""));
    assert!(!can_submit(false, "   \n"));
}
