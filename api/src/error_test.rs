use super::*;

#[test]
fn status_401_maps_to_unauthorized() {
    assert_eq!(ApiFailure::from_status(401), ApiFailure::Unauthorized);
    assert!(ApiFailure::from_status(401).is_unauthorized());
}

#[test]
fn status_classes_map_per_taxonomy() {
    assert_eq!(ApiFailure::from_status(403), ApiFailure::Forbidden);
    assert_eq!(ApiFailure::from_status(404), ApiFailure::NotFound);
    assert_eq!(ApiFailure::from_status(429), ApiFailure::RateLimited);
    assert_eq!(ApiFailure::from_status(500), ApiFailure::Server);
    assert_eq!(ApiFailure::from_status(503), ApiFailure::Server);
}

#[test]
fn unlisted_statuses_keep_their_code() {
    assert_eq!(ApiFailure::from_status(418), ApiFailure::Http(418));
    assert_eq!(ApiFailure::from_status(409), ApiFailure::Http(409));
}

#[test]
fn only_401_is_unauthorized() {
    for status in [403, 404, 429, 500, 418] {
        assert!(!ApiFailure::from_status(status).is_unauthorized(), "status {status}");
    }
    assert!(!ApiFailure::Network("refused".to_owned()).is_unauthorized());
}

#[test]
fn user_messages_are_fixed_per_class() {
    assert_eq!(ApiFailure::Unauthorized.user_message(), "Session expired. Please login again.");
    assert_eq!(
        ApiFailure::Forbidden.user_message(),
        "You don't have permission to perform this action"
    );
    assert_eq!(ApiFailure::NotFound.user_message(), "Resource not found");
    assert_eq!(ApiFailure::RateLimited.user_message(), "Too many requests. Please try again later");
    assert_eq!(ApiFailure::Server.user_message(), "Server error. Please try again later");
}

#[test]
fn network_and_decode_fall_back_to_generic_message() {
    assert_eq!(ApiFailure::Network("timeout".to_owned()).user_message(), "An unexpected error occurred");
    assert_eq!(ApiFailure::Decode("bad json".to_owned()).user_message(), "An unexpected error occurred");
    assert_eq!(ApiFailure::Http(418).user_message(), "An unexpected error occurred");
}
