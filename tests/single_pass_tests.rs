//! Single-pass law: an instance drains once; fresh instances agree.

use zpipe::prelude::*;

#[test]
fn test_same_instance_drains_once() {
    let data = [1, 2, 3];
    let mut e = from_slice(&data).pipe(Select::new(|x: i32| x + 1));

    let first = e.by_ref().pipe(ToVector);
    let second = e.by_ref().pipe(ToVector);

    assert_eq!(first, vec![2, 3, 4]);
    assert!(second.is_empty(), "second drain must be empty, got {second:?}");
}

#[test]
fn test_independent_instances_agree() {
    let data = [5, 6, 7, 8];
    let build = || from_slice(&data).pipe(Where::new(|x: &i32| x % 2 == 0));

    let a = build().pipe(ToVector);
    let b = build().pipe(ToVector);
    assert_eq!(a, b);
    assert_eq!(a, vec![6, 8]);
}

#[test]
fn test_clone_forks_traversal() {
    let mut e = range_to(5);
    e.advance();
    let snapshot = e.clone();

    assert_eq!(e.by_ref().pipe(ToVector), vec![1, 2, 3, 4]);
    assert!(e.over());
    assert_eq!(snapshot.pipe(ToVector), vec![1, 2, 3, 4]);
}

#[test]
fn test_rendering_consumes_unless_cloned() {
    let data = ["x", "y"];
    let mut e = from_slice(&data);

    assert_eq!(Rendered::new(e.clone()).to_string(), "[x, y]");
    assert!(!e.over());

    assert_eq!(render(e.by_ref()), "[x, y]");
    assert!(e.over());
    assert_eq!(render(e.by_ref()), "[]");
}

#[test]
#[should_panic(expected = "contract violation")]
fn test_current_after_exhaustion_panics() {
    let mut e = repeat(0, 1);
    e.by_ref().pipe(ToVector);
    e.current();
}

#[test]
#[should_panic(expected = "`advance` called on exhausted RangeEnum")]
fn test_advance_after_exhaustion_panics() {
    let mut e = range_to(1);
    e.advance();
    e.advance();
}
