use desktop_runtime::{
    apps, reduce_desktop, AppId, DesktopAction, DesktopState, Gesture, LaunchRequest, Point,
    RuntimeEffect, Size, WindowDescriptor, WindowId, WindowRegistry, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH,
};
use pretty_assertions::assert_eq;

fn descriptor(id: &str, position: Point, size: Size) -> WindowDescriptor {
    WindowDescriptor {
        id: WindowId::new(id),
        title: id.to_uppercase(),
        app_id: AppId::from_key("notepad"),
        initial_position: position,
        initial_size: size,
    }
}

fn open(state: &mut DesktopState, id: &str, position: Point, size: Size) {
    reduce_desktop(state, DesktopAction::Open(descriptor(id, position, size)))
        .expect("open never fails");
}

fn dispatch(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
    reduce_desktop(state, action).expect("action applies")
}

fn ids(registry: &WindowRegistry) -> Vec<&str> {
    registry.windows().iter().map(|window| window.id().as_str()).collect()
}

#[test]
fn window_count_tracks_distinct_opens_minus_closes() {
    let mut registry = WindowRegistry::new();
    let names = ["a", "b", "c", "d", "e"];
    for name in names {
        registry.open(descriptor(name, Point::new(0, 0), Size::new(300, 200)));
    }
    registry.close(&WindowId::new("b"));
    registry.close(&WindowId::new("e"));

    assert_eq!(registry.len(), names.len() - 2);
    assert_eq!(ids(&registry), vec!["a", "c", "d"]);
}

#[test]
fn opening_the_same_id_twice_keeps_one_entry_and_focuses_it() {
    let mut registry = WindowRegistry::new();
    let cmd = WindowDescriptor::for_app(AppId::from_key("cmd"));

    assert!(registry.open(cmd.clone()));
    registry.open(WindowDescriptor::for_app(AppId::from_key("paint")));
    assert!(!registry.open(cmd));

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.active_window_id(), Some(&WindowId::new("cmd")));
}

#[test]
fn closing_only_clears_focus_when_the_active_window_goes() {
    let mut registry = WindowRegistry::new();
    registry.open(descriptor("a", Point::new(0, 0), Size::new(300, 200)));
    registry.open(descriptor("b", Point::new(0, 0), Size::new(300, 200)));

    registry.close(&WindowId::new("a"));
    assert_eq!(registry.active_window_id(), Some(&WindowId::new("b")));

    registry.close(&WindowId::new("b"));
    assert_eq!(registry.active_window_id(), None);
}

#[test]
fn maximize_twice_restores_the_exact_frame() {
    let mut state = DesktopState::default();
    open(&mut state, "a", Point::new(37, 91), Size::new(333, 222));
    let toggle = || DesktopAction::ToggleMaximize {
        window_id: WindowId::new("a"),
        screen: Size::new(1280, 800),
    };

    dispatch(&mut state, toggle());
    let maximized = state.window(&WindowId::new("a")).unwrap().geometry();
    assert_eq!(maximized.position(), Point::new(0, 0));
    assert_eq!(maximized.size(), Size::new(1280, 760));

    dispatch(&mut state, toggle());
    let restored = state.window(&WindowId::new("a")).unwrap().geometry();
    assert_eq!(restored.position(), Point::new(37, 91));
    assert_eq!(restored.size(), Size::new(333, 222));
    assert!(!restored.is_maximized());
}

#[test]
fn resize_never_drops_below_the_floor() {
    let pointers = [
        Point::new(-400, -400),
        Point::new(0, 0),
        Point::new(300, 50),
        Point::new(50, 300),
        Point::new(900, 700),
    ];
    for pointer in pointers {
        let mut state = DesktopState::default();
        open(&mut state, "a", Point::new(200, 200), Size::new(400, 300));
        dispatch(
            &mut state,
            DesktopAction::BeginResize {
                window_id: WindowId::new("a"),
            },
        );
        dispatch(&mut state, DesktopAction::PointerMove { pointer });
        dispatch(&mut state, DesktopAction::PointerUp { pointer });

        let size = state.window(&WindowId::new("a")).unwrap().geometry().size();
        assert!(size.width >= MIN_WINDOW_WIDTH, "{pointer:?} gave {size:?}");
        assert!(size.height >= MIN_WINDOW_HEIGHT, "{pointer:?} gave {size:?}");
    }
}

#[test]
fn drag_keeps_the_grab_offset() {
    let mut state = DesktopState::default();
    open(&mut state, "a", Point::new(80, 80), Size::new(400, 300));

    let effects = dispatch(
        &mut state,
        DesktopAction::BeginDrag {
            window_id: WindowId::new("a"),
            pointer: Point::new(100, 100),
        },
    );
    assert_eq!(effects, vec![RuntimeEffect::TrackPointer(WindowId::new("a"))]);

    dispatch(
        &mut state,
        DesktopAction::PointerMove {
            pointer: Point::new(130, 140),
        },
    );
    let effects = dispatch(
        &mut state,
        DesktopAction::PointerUp {
            pointer: Point::new(130, 140),
        },
    );

    let geometry = state.window(&WindowId::new("a")).unwrap().geometry();
    assert_eq!(geometry.position(), Point::new(110, 120));
    assert_eq!(geometry.gesture(), Gesture::Idle);
    assert_eq!(effects, vec![RuntimeEffect::ReleasePointer(WindowId::new("a"))]);
    assert_eq!(state.pointer_owner, None);
}

#[test]
fn closing_an_inactive_window_leaves_focus_alone() {
    let mut state = DesktopState::default();
    open(&mut state, "A", Point::new(0, 0), Size::new(300, 200));
    open(&mut state, "B", Point::new(40, 40), Size::new(300, 200));
    dispatch(
        &mut state,
        DesktopAction::Focus {
            window_id: WindowId::new("A"),
        },
    );
    dispatch(
        &mut state,
        DesktopAction::Close {
            window_id: WindowId::new("B"),
        },
    );

    assert_eq!(ids(&state.registry), vec!["A"]);
    assert_eq!(state.registry.active_window_id(), Some(&WindowId::new("A")));
}

#[test]
fn unknown_application_ids_resolve_to_the_fallback() {
    let app_id = AppId::from_key("nonexistent");

    assert!(!app_id.is_known());
    assert_eq!(app_id.key(), "nonexistent");
    assert!(apps::app_module(&app_id).is_none());
    assert!(apps::app_module(&AppId::from_key("notepad")).is_some());
    assert_eq!(
        apps::resolve_app(&app_id, app_id.key()).unwrap_err(),
        apps::AppNotFoundNotice {
            text: "Application not found",
            app_key: "nonexistent".to_string(),
        }
    );
}

#[test]
fn launch_requests_open_through_the_reducer() {
    let request: LaunchRequest = serde_json::from_str(
        r#"{
            "id": "dream-1",
            "title": "Dream Journal",
            "applicationId": "notepad",
            "position": { "x": 12, "y": 34 },
            "size": { "width": 500, "height": 320 }
        }"#,
    )
    .expect("valid launch request");

    let mut state = DesktopState::default();
    dispatch(&mut state, request.into());

    let window = state.window(&WindowId::new("dream-1")).expect("opened");
    assert_eq!(window.descriptor().app_id, AppId::Journal);
    assert_eq!(window.geometry().position(), Point::new(12, 34));
    assert_eq!(window.geometry().size(), Size::new(500, 320));
}

#[test]
fn closing_mid_drag_releases_the_pointer() {
    let mut state = DesktopState::default();
    open(&mut state, "a", Point::new(0, 0), Size::new(300, 200));
    dispatch(
        &mut state,
        DesktopAction::BeginDrag {
            window_id: WindowId::new("a"),
            pointer: Point::new(10, 10),
        },
    );

    let effects = dispatch(
        &mut state,
        DesktopAction::Close {
            window_id: WindowId::new("a"),
        },
    );

    assert_eq!(effects, vec![RuntimeEffect::ReleasePointer(WindowId::new("a"))]);
    assert_eq!(state.pointer_owner, None);
    assert!(state.registry.is_empty());
}
