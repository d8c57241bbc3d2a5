use super::*;

#[test]
fn validate_accepts_alphanumeric_pairs() {
    for (user, pass) in [("alice", "secret1"), ("A1", "b2"), ("Z", "9"), ("root", "HUNTER2")] {
        assert!(validate(&Credentials::new(user, pass)), "expected valid for {user:?}/{pass:?}");
    }
}

#[test]
fn validate_rejects_empty_fields() {
    assert!(!validate(&Credentials::default()));
    assert!(!validate(&Credentials::new("alice", "")));
    assert!(!validate(&Credentials::new("", "secret")));
}

#[test]
fn validate_rejects_non_alphanumeric_characters() {
    for bad in ["al ice", "alice!", "al-ice", "al_ice", "alice\n", "ålice", "a.b", " "] {
        assert!(!validate(&Credentials::new(bad, "secret")), "username {bad:?} should be rejected");
        assert!(!validate(&Credentials::new("alice", bad)), "password {bad:?} should be rejected");
    }
}

#[test]
fn validate_is_idempotent() {
    let creds = Credentials::new("alice", "secret");
    assert_eq!(validate(&creds), validate(&creds));
    assert!(creds.is_valid());
}

#[test]
fn set_updates_single_field_per_keystroke() {
    let mut creds = Credentials::default();
    creds.set(Field::Username, "a");
    assert!(!creds.is_valid());
    creds.set(Field::Password, "p");
    assert!(creds.is_valid());
    creds.set(Field::Username, "a?");
    assert_eq!(creds.password, "p");
    assert!(!creds.is_valid());
}

#[test]
fn debug_redacts_password() {
    let rendered = format!("{:?}", Credentials::new("alice", "topsecret"));
    assert!(rendered.contains("alice"));
    assert!(!rendered.contains("topsecret"));
}
