use super::*;

#[test]
fn from_body_recognizes_known_roles() {
    assert_eq!(Role::from_body("user"), Role::User);
    assert_eq!(Role::from_body("admin"), Role::Admin);
    assert_eq!(Role::from_body("admin\n"), Role::Admin);
    assert_eq!(Role::from_body(""), Role::None);
    assert_eq!(Role::from_body("none"), Role::None);
}

#[test]
fn from_body_never_elevates_unknown_strings() {
    for body in ["Admin", "ADMIN", "admn", "superuser", "root", "user admin", "\"admin\""] {
        assert_eq!(Role::from_body(body), Role::Failure, "body {body:?} must not grant a role");
    }
}

#[test]
fn only_user_and_admin_are_granted() {
    assert!(Role::User.is_granted());
    assert!(Role::Admin.is_granted());
    assert!(!Role::None.is_granted());
    assert!(!Role::Failure.is_granted());
}

#[test]
fn failure_is_distinct_from_none() {
    assert_ne!(Role::Failure, Role::None);
    assert_eq!(Role::Failure.to_string(), "failure");
    assert_eq!(Role::None.to_string(), "none");
}

#[test]
fn login_payload_uses_pascal_case_keys() {
    let payload = LoginPayload { username: "alice", password: "secret" };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json, serde_json::json!({ "Username": "alice", "Password": "secret" }));
}

#[test]
fn auth_error_messages_carry_status() {
    assert_eq!(AuthError::Rejected { status: 401 }.to_string(), "authentication rejected: status 401");
    assert_eq!(AuthError::Unauthorized { status: 403 }.to_string(), "unauthorized access: status 403");
}
