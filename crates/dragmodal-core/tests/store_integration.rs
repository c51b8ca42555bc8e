//! Modal Store Integration Tests
//!
//! Tests for the host-side store: wire dispatch, viewport ports and
//! subscriber notification.

use std::cell::RefCell;
use std::rc::Rc;

use dragmodal_core::{
    Action, FixedViewport, ModalError, ModalStore, MountOptions, SequentialIds, SharedViewport,
    StoreConfig,
};
use dragmodal_geometry::{Bound, Viewport};

/// Test a full session driven by JSON actions.
#[test]
fn test_json_session() {
    let mut store = ModalStore::new(FixedViewport(Viewport::new(800.0, 600.0)));

    let wire = [
        r#"{"type": "mount", "id": "a", "initialState": {"initialWidth": 400, "initialHeight": 300}}"#,
        r#"{"type": "updateMaxPosition", "id": "a", "value": {"x": 600, "y": null}}"#,
        r#"{"type": "show", "id": "a"}"#,
        r#"{"type": "drag", "id": "a", "x": 900, "y": 900}"#,
    ];
    for json in wire {
        store.dispatch_json(json).unwrap();
    }

    let a = store.state().modal("a").unwrap();
    assert_eq!((a.x, a.y), (200.0, 300.0));
    assert_eq!(
        a.max_position,
        Bound {
            x: Some(600.0),
            y: None
        }
    );
    assert_eq!(a.z_index, 2);
}

/// Test that a resize reported through the shared viewport reflows modals.
#[test]
fn test_shared_viewport_resize() {
    let viewport = SharedViewport::new(Viewport::new(1000.0, 800.0));
    let mut store = ModalStore::new(viewport.clone());

    store
        .dispatch(Action::mount("a", MountOptions::sized(300.0, 200.0).at(600.0, 500.0)))
        .unwrap();
    store.dispatch(Action::show("a")).unwrap();

    viewport.set(Viewport::new(700.0, 600.0));
    let state = store.window_resized().unwrap();

    assert_eq!(state.window_size, Viewport::new(700.0, 600.0));
    let a = state.modal("a").unwrap();
    assert_eq!((a.x, a.y), (400.0, 400.0));
}

/// Test that generated IDs mount distinct modals.
#[test]
fn test_mount_with_generated_ids() {
    let mut store = ModalStore::new(FixedViewport(Viewport::new(800.0, 600.0)));
    let mut ids = SequentialIds::default();

    let first = store.mount_new(&mut ids, MountOptions::default()).unwrap();
    let second = store.mount_new(&mut ids, MountOptions::default()).unwrap();

    assert_ne!(first, second);
    assert_eq!(store.state().len(), 2);
    assert_eq!(store.state().modal(first.as_str()).unwrap().z_index, 1);
    assert_eq!(store.state().modal(second.as_str()).unwrap().z_index, 2);
}

/// Test that a resizable mount without a size is accepted.
#[test]
fn test_mount_resizable_without_size() {
    let mut store = ModalStore::new(FixedViewport(Viewport::new(800.0, 600.0)));
    let state = store
        .mount_resizable("a", MountOptions::default())
        .unwrap();
    assert_eq!(state.modal("a").unwrap().width, None);
}

/// Test that configured limits reach the reducer.
#[test]
fn test_configured_limits() {
    let config = StoreConfig::from_json(r#"{"limits": {"minWidth": 50, "minHeight": 50}}"#).unwrap();
    let mut store = ModalStore::with_config(config, FixedViewport(Viewport::new(800.0, 600.0)));

    store
        .dispatch(Action::mount("a", MountOptions::sized(400.0, 300.0)))
        .unwrap();
    store
        .dispatch(Action::resize("a", 0.0, 0.0, 60.0, 10.0))
        .unwrap();

    let a = store.state().modal("a").unwrap();
    assert_eq!((a.width, a.height), (Some(60.0), Some(50.0)));
}

/// Test that subscribers see transitions in dispatch order.
#[test]
fn test_subscribers_see_ordered_transitions() {
    let mut store = ModalStore::new(FixedViewport(Viewport::new(800.0, 600.0)));
    let log = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&log);
    store.subscribe(move |state| sink.borrow_mut().push(state.max_z_index));

    store
        .dispatch(Action::mount("a", MountOptions::default()))
        .unwrap();
    store
        .dispatch(Action::mount("b", MountOptions::default()))
        .unwrap();
    store.dispatch(Action::focus("a")).unwrap();
    assert!(matches!(
        store.dispatch(Action::focus("zzz")),
        Err(ModalError::UnknownModal(_))
    ));

    assert_eq!(*log.borrow(), vec![1, 2, 3]);
}
