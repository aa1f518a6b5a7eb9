use page_router::prelude::*;
use std::sync::Arc;

fn navigator(base: &str) -> Navigator {
    let router = PageRouter::new(
        Arc::new(RouteTable::app()),
        WebHistory::new(base).unwrap(),
    );
    Navigator::new(router)
}

#[test]
fn test_every_declared_path_resolves_to_its_view() {
    let table = RouteTable::app();

    let expected = [
        ("/", View::Home),
        ("/login", View::Login),
        ("/register", View::Register),
        ("/dev", View::Dev),
    ];

    assert_eq!(table.len(), expected.len());
    for (path, view) in expected {
        assert_eq!(table.resolve(path).map(|r| r.view), Some(view));
    }
}

#[test]
fn test_table_construction_is_idempotent() {
    let a = RouteTable::app();
    let b = RouteTable::app();

    assert_eq!(a, b);
    assert_eq!(a.routes(), b.routes());
}

#[test]
fn test_navigating_to_register_activates_register_view() {
    let mut nav = navigator("/");

    nav.push("/register");

    assert_eq!(nav.active_view(), Some(View::Register));
}

#[test]
fn test_navigating_to_undeclared_path_matches_nothing() {
    let mut nav = navigator("/");

    let navigation = nav.push("/nope");

    assert_eq!(navigation.view, None);
    assert_eq!(nav.active_view(), None);
}

#[test]
fn test_navigation_under_base() {
    let router = PageRouter::new(
        Arc::new(RouteTable::app()),
        WebHistory::new("/portal/").unwrap(),
    );

    let mut nav = Navigator::start_at(router, "/portal/login");
    assert_eq!(nav.active_view(), Some(View::Login));
    assert_eq!(nav.href(View::Register).as_deref(), Some("/portal/register"));

    nav.push("/register");
    nav.back();
    assert_eq!(nav.active_view(), Some(View::Login));
}

#[test]
fn test_custom_table_rejects_conflicting_paths() {
    let result = RouteTable::new(vec![
        Route::new("/dev", View::Dev),
        Route::new("/DEV/", View::Home),
    ]);

    assert!(matches!(result, Err(RouteError::DuplicatePath { .. })));
}
