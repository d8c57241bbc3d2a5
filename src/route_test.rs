use super::*;

#[test]
fn parse_maps_known_paths() {
    assert_eq!(RouteTarget::parse("/"), Some(RouteTarget::Anonymous));
    assert_eq!(RouteTarget::parse(""), Some(RouteTarget::Anonymous));
    assert_eq!(RouteTarget::parse("/404"), Some(RouteTarget::NotFound));
    assert_eq!(RouteTarget::parse("/u/alice"), Some(RouteTarget::UserArea("alice".into())));
    assert_eq!(RouteTarget::parse("/a/root"), Some(RouteTarget::AdminArea("root".into())));
}

#[test]
fn parse_ignores_trailing_slash_query_and_fragment() {
    assert_eq!(RouteTarget::parse("/u/alice/"), Some(RouteTarget::UserArea("alice".into())));
    assert_eq!(RouteTarget::parse("/a/root?tab=1"), Some(RouteTarget::AdminArea("root".into())));
    assert_eq!(RouteTarget::parse("/404#top"), Some(RouteTarget::NotFound));
    assert_eq!(RouteTarget::parse("/?next=/u/x"), Some(RouteTarget::Anonymous));
}

#[test]
fn parse_rejects_unmapped_paths() {
    for path in ["/xyz", "/u", "/u/", "/u//", "/a", "/u/alice/extra", "/x/alice", "u/alice", "/405"] {
        assert_eq!(RouteTarget::parse(path), None, "{path:?} should be unmapped");
    }
}

#[test]
fn role_area_is_strict() {
    assert_eq!(RouteTarget::role_area(Role::User, "u"), Some(RouteTarget::UserArea("u".into())));
    assert_eq!(RouteTarget::role_area(Role::Admin, "u"), Some(RouteTarget::AdminArea("u".into())));
    assert_eq!(RouteTarget::role_area(Role::None, "u"), None);
    assert_eq!(RouteTarget::role_area(Role::Failure, "u"), None);
}

#[test]
fn path_round_trips_through_parse() {
    for target in [
        RouteTarget::Anonymous,
        RouteTarget::UserArea("alice".into()),
        RouteTarget::AdminArea("root".into()),
        RouteTarget::NotFound,
    ] {
        assert_eq!(RouteTarget::parse(&target.path()), Some(target.clone()));
    }
}

#[test]
fn only_role_areas_are_protected() {
    assert!(RouteTarget::UserArea("a".into()).is_protected());
    assert!(RouteTarget::AdminArea("a".into()).is_protected());
    assert!(!RouteTarget::Anonymous.is_protected());
    assert!(!RouteTarget::NotFound.is_protected());
    assert_eq!(RouteTarget::AdminArea("root".into()).username(), Some("root"));
    assert_eq!(RouteTarget::NotFound.username(), None);
}

#[test]
fn decision_display_is_line_oriented() {
    assert_eq!(Decision::Allow(RouteTarget::UserArea("a".into())).to_string(), "allow /u/a");
    assert_eq!(Decision::Redirect(RouteTarget::Anonymous).to_string(), "redirect /");
    assert_eq!(Decision::Stay(Notice::LoginFailed).to_string(), "stay (login failed)");
    assert_eq!(Decision::Stay(Notice::Superseded).target(), None);
}
