use super::*;

#[test]
fn endpoint_matches_the_server_route() {
    assert_eq!(GENERATE_ENDPOINT, "/api/generate");
}

#[test]
fn fallback_message_carries_the_status_code() {
    assert_eq!(generate_failed_message(502), "generation request failed: 502");
}
