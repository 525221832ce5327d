use toastkit::role::{Role, validate_role};

#[test]
fn only_exact_admin_is_privileged() {
    assert_eq!(validate_role("admin"), Role::Admin);
    for input in ["user", "", "Admin", "root", "ADMIN"] {
        assert_eq!(validate_role(input), Role::User, "input {input:?}");
    }
}

#[test]
fn classification_is_deterministic_and_idempotent() {
    for input in ["admin", "user", "guest", "\u{0}admin"] {
        let first = validate_role(input);
        assert_eq!(validate_role(input), first);
        assert_eq!(validate_role(first.as_str()), first);
    }
}

#[test]
fn default_role_is_least_privileged() {
    assert_eq!(Role::default(), Role::User);
    assert!(!validate_role("superuser").is_admin());
}
