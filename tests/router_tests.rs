mod common;

#[cfg(test)]
pub mod router_tests {
    use super::common::*;

    use aras_web::frontend::SiteRoutes;
    use aras_web::router::*;
    use aras_web::services::{AuthGuard, Session};
    use leptos_router::{MatchParams, RouteDefs};

    const DECLARED: [&str; 12] = [
        "/",
        "/calendar",
        "/documentation",
        "/documentation/detail/guide-42",
        "/documentation/upload",
        "/forum",
        "/forum/post",
        "/forum/42",
        "/market",
        "/market/basket-7",
        "/proverbs",
        "/proverbs/7",
    ];

    fn params(path: &str) -> Vec<(String, String)> {
        let routes = RouteDefs::new(SiteRoutes());
        let matched = routes
            .match_route(path)
            .unwrap_or_else(|| panic!("{path} should match"));

        matched
            .to_params()
            .into_iter()
            .map(|(key, value)| (key.into_owned(), value))
            .collect()
    }

    #[test]
    fn test_declared_paths_match_success() {
        let routes = RouteDefs::new(SiteRoutes());
        for path in DECLARED {
            assert!(routes.match_route(path).is_some(), "path {path}");
        }
    }

    #[test]
    fn test_unmatched_paths_fall_through_to_fallback() {
        let routes = RouteDefs::new(SiteRoutes());
        for path in [
            "/nope",
            "/forum/1/edit",
            "/calendar/2025",
            "/market/a/b",
            "/documentation/detail",
            "/admin",
        ] {
            assert!(routes.match_route(path).is_none(), "path {path}");
        }
    }

    #[test]
    fn test_match_captures_id_param() {
        assert_eq!(
            params("/documentation/detail/guide-42"),
            vec![("id".to_string(), "guide-42".to_string())]
        );
        assert_eq!(params("/proverbs/7"), vec![("id".to_string(), "7".to_string())]);
        assert_eq!(
            params("/market/basket-7"),
            vec![("id".to_string(), "basket-7".to_string())]
        );
    }

    #[test]
    fn test_forum_post_wins_over_id() {
        assert!(params("/forum/post").is_empty());
        assert_eq!(params("/forum/42"), vec![("id".to_string(), "42".to_string())]);
    }

    #[test]
    fn test_auth_guard_fails_without_session() {
        let guard = AuthGuard::default();
        assert_eq!(
            guard.can_activate(&anonymous()),
            GuardDecision::Deny {
                redirect_to: "/".into()
            }
        );
        assert_eq!(guard.condition(&anonymous()), Some(false));
        assert_eq!(guard.redirect_path(), "/");
    }

    #[test]
    fn test_auth_guard_success_with_session() {
        let guard = AuthGuard::default();
        assert_eq!(guard.can_activate(&signed_in()), GuardDecision::Allow);
        assert_eq!(guard.condition(&signed_in()), Some(true));
    }

    #[test]
    fn test_auth_guard_custom_fallback() {
        let guard = AuthGuard::new("/login");
        assert_eq!(guard.redirect_path(), "/login");
        assert_eq!(
            guard.can_activate(&anonymous()),
            GuardDecision::Deny {
                redirect_to: "/login".into()
            }
        );
    }

    #[test]
    fn test_blank_token_is_anonymous() {
        let guard = AuthGuard::default();
        let blank = Session::from_token(Some("   ".into()));
        assert!(!blank.is_authenticated());
        assert_eq!(guard.condition(&blank), Some(false));
    }

    #[test]
    fn test_predicate_guard_follows_predicate() {
        let open = PredicateGuard::new(|_: &Session| true, "/home");
        let closed = PredicateGuard::new(|_: &Session| false, "/home");

        assert!(open.can_activate(&anonymous()).is_allowed());
        assert_eq!(
            closed.can_activate(&signed_in()),
            GuardDecision::Deny {
                redirect_to: "/home".into()
            }
        );
        assert_eq!(closed.redirect_path(), "/home");
    }

    #[test]
    fn test_feature_view_titles() {
        assert_eq!(ViewId::CalendarView.title(), "Calendrier");
        assert_eq!(ViewId::ForumPost.title(), "Nouveau sujet");
        assert!(ViewId::ProverbDetail.takes_id());
        assert!(!ViewId::MarketList.takes_id());
    }
}
