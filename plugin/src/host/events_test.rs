use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn change(value: &str) -> FieldChange {
    FieldChange { field: value.to_owned() }
}

#[test]
fn dispatch_runs_callbacks_in_subscription_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut registry = EventRegistry::new();
    for tag in ["first", "second", "third"] {
        let seen = Rc::clone(&seen);
        registry.subscribe(
            HostEvent::Change,
            Box::new(move |c: &FieldChange| seen.borrow_mut().push(format!("{tag}:{}", c.field))),
        );
    }

    let ran = registry.dispatch(HostEvent::Change, &change("v1"));

    assert_eq!(ran, 3);
    assert_eq!(*seen.borrow(), vec!["first:v1", "second:v1", "third:v1"]);
}

#[test]
fn dispatch_only_reaches_matching_event() {
    let hits = Rc::new(RefCell::new(0));
    let mut registry = EventRegistry::new();
    let counter = Rc::clone(&hits);
    registry.subscribe(HostEvent::Input, Box::new(move |_: &FieldChange| *counter.borrow_mut() += 1));

    assert_eq!(registry.dispatch(HostEvent::Change, &change("x")), 0);
    assert_eq!(*hits.borrow(), 0);
    assert_eq!(registry.dispatch(HostEvent::Input, &change("x")), 1);
    assert_eq!(*hits.borrow(), 1);
}

#[test]
fn subscribe_reports_first_listener_per_event() {
    let mut registry = EventRegistry::new();
    assert!(registry.subscribe(HostEvent::Change, Box::new(|_: &FieldChange| {})));
    assert!(!registry.subscribe(HostEvent::Change, Box::new(|_: &FieldChange| {})));
    assert!(registry.subscribe(HostEvent::Input, Box::new(|_: &FieldChange| {})));
    assert_eq!(registry.listener_count(HostEvent::Change), 2);
    assert_eq!(registry.listener_count(HostEvent::Input), 1);
}

#[test]
fn host_event_names_match_host_api() {
    assert_eq!(HostEvent::Change.as_str(), "change");
    assert_eq!(HostEvent::Input.as_str(), "input");
}
