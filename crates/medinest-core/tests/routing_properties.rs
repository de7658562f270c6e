//! Behavioural tests for the session-gated shell
//!
//! Tests for:
//! - Guarded routes redirect to login without a session
//! - Guarded routes render their own view with a session
//! - Login and signup render regardless of the session
//! - Mobile menu toggling and link activation
//! - Stable navigation order
//!
//! Run with:
//! ```bash
//! cargo test -p medinest-core --test routing_properties
//! ```

use medinest_core::{
    nav_entries, AppRoute, MemoryStorage, MobileMenu, Resolution, RouteTable, SessionManager,
    SessionStorage,
};

fn manager_with_flag(flag: Option<&str>) -> SessionManager<MemoryStorage> {
    let storage = match flag {
        Some(value) => MemoryStorage::with_entries([("isLoggedIn", value)]),
        None => MemoryStorage::new(),
    };
    SessionManager::new(storage)
}

mod guard {
    use super::*;

    #[test]
    fn test_guarded_paths_redirect_when_logged_out() {
        let table = RouteTable::default();

        for flag in [None, Some("false"), Some("garbage")] {
            let session = manager_with_flag(flag);
            for route in AppRoute::guarded() {
                let resolution = table.resolve(route.path(), &session);
                assert_eq!(
                    resolution,
                    Resolution::Redirect {
                        to: "/login".to_string()
                    },
                    "{} with flag {:?}",
                    route.path(),
                    flag
                );
                assert_eq!(resolution.route(), None);
            }
        }
    }

    #[test]
    fn test_guarded_paths_render_mapped_view_when_logged_in() {
        let table = RouteTable::default();
        let session = manager_with_flag(Some("true"));

        for route in AppRoute::guarded() {
            assert_eq!(table.resolve(route.path(), &session), Resolution::Render(route));
        }
    }

    #[test]
    fn test_public_paths_ignore_session() {
        let table = RouteTable::default();

        for flag in [None, Some("false"), Some("true")] {
            let session = manager_with_flag(flag);
            assert_eq!(
                table.resolve("/login", &session),
                Resolution::Render(AppRoute::Login)
            );
            assert_eq!(
                table.resolve("/signup", &session),
                Resolution::Render(AppRoute::Signup)
            );
        }
    }

    #[test]
    fn test_guard_rereads_storage_on_every_resolution() {
        let table = RouteTable::default();
        let storage = MemoryStorage::new();
        let session = SessionManager::new(storage.clone());

        assert!(table.resolve("/dashboard", &session).is_redirect());

        storage.set("isLoggedIn", "true").unwrap();
        assert_eq!(
            table.resolve("/dashboard", &session),
            Resolution::Render(AppRoute::Dashboard)
        );

        storage.remove("isLoggedIn").unwrap();
        assert!(table.resolve("/dashboard", &session).is_redirect());
    }

    #[test]
    fn test_dashboard_scenario() {
        let table = RouteTable::default();
        let storage = MemoryStorage::new();
        let session = SessionManager::new(storage.clone());

        // Key absent
        assert_eq!(
            table.resolve("/dashboard", &session),
            Resolution::Redirect {
                to: "/login".to_string()
            }
        );

        storage.set("isLoggedIn", "true").unwrap();
        let resolution = table.resolve("/dashboard", &session);
        assert_eq!(resolution, Resolution::Render(AppRoute::Dashboard));
        assert_eq!(resolution.route().map(|r| r.path()), Some("/dashboard"));
        assert_eq!(resolution.route().map(|r| r.view_name()), Some("Dashboard"));
    }

    #[test]
    fn test_sign_in_and_out_drive_the_guard() {
        let table = RouteTable::default();
        let session = manager_with_flag(None);

        session.sign_in("local-token").unwrap();
        assert_eq!(
            table.resolve("/profile", &session),
            Resolution::Render(AppRoute::Profile)
        );

        session.sign_out().unwrap();
        assert!(table.resolve("/profile", &session).is_redirect());
    }
}

mod shell {
    use super::*;

    #[test]
    fn test_menu_toggle_pair_is_identity() {
        let mut menu = MobileMenu::closed();
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());

        menu.toggle();
        let opened = menu;
        menu.toggle();
        menu.toggle();
        assert_eq!(menu, opened);
    }

    #[test]
    fn test_link_activation_closes_menu_and_navigates() {
        let table = RouteTable::default();
        let session = manager_with_flag(Some("true"));

        for entry in nav_entries() {
            for start_open in [false, true] {
                let mut menu = MobileMenu::closed();
                if start_open {
                    menu.toggle();
                }

                // Link activation: close the menu, then route to the entry
                menu.close();
                assert!(!menu.is_open());
                assert_eq!(
                    table.resolve(entry.path(), &session),
                    Resolution::Render(entry.route)
                );
            }
        }
    }

    #[test]
    fn test_navigation_order_is_stable() {
        let expected = [
            ("/", "Home"),
            ("/dashboard", "Dashboard"),
            ("/upload", "Upload Prescription"),
            ("/reminders", "Reminders"),
            ("/symptoms", "Symptoms"),
            ("/consultations", "Consultations"),
            ("/chatbot", "AI Chatbot"),
            ("/emergency", "Emergency"),
            ("/language", "Language"),
            ("/profile", "Profile"),
        ];

        for _ in 0..3 {
            let actual: Vec<_> = nav_entries().iter().map(|e| (e.path(), e.label)).collect();
            assert_eq!(actual, expected);
        }
    }
}
