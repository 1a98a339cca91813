use std::rc::Rc;

use maybe::{FirstOrNone, Maybe};

#[test]
fn test_map_then_read() {
    let value = Maybe::some("hi").map(|s| s.to_uppercase()).into_value();
    assert_eq!(value.as_deref(), Ok("HI"));
}

#[test]
fn test_map_none_stays_none() {
    let mapped = Maybe::<String>::none().map(|s| s.to_uppercase());
    assert!(!mapped.has_value());
}

#[test]
fn test_value_or_throw_returns_value() {
    let value = Maybe::some(1).value_or_throw(Rc::new("x"));
    assert_eq!(value.ok(), Some(1));
}

#[test]
fn test_value_or_throw_raises_given_error() {
    let err = Rc::new("x");
    let raised = Maybe::<i32>::none().value_or_throw(Rc::clone(&err));

    match raised {
        Err(raised) => assert!(Rc::ptr_eq(&err, &raised)),
        Ok(value) => panic!("expected the supplied error, got {value}"),
    }
}

#[test]
fn test_first_or_none_sequences() {
    assert!(!Vec::<i32>::new().first_or_none().has_value());
    assert_eq!(vec![5, 6].first_or_none().into_value(), Ok(5));
}
