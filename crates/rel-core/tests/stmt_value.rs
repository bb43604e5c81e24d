use rel_core::{Type, Value};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Value::is_a
// ---------------------------------------------------------------------------

#[test]
fn null_is_only_an_option() {
    assert!(Value::Null.is_a(&Type::option(Type::String)));
    assert!(!Value::Null.is_a(&Type::String));
    assert!(!Value::Null.is_a(&Type::I64));
}

#[test]
fn integers_fit_any_integer_type() {
    assert!(Value::I64(1).is_a(&Type::U8));
    assert!(Value::U16(1).is_a(&Type::I32));
    assert!(Value::I32(1).is_a(&Type::option(Type::I64)));
    assert!(!Value::I64(1).is_a(&Type::String));
    assert!(!Value::I64(1).is_a(&Type::F64));
}

#[test]
fn floats_fit_float_types() {
    assert!(Value::F32(1.5).is_a(&Type::F64));
    assert!(!Value::F64(1.5).is_a(&Type::I64));
}

#[test]
fn time_types_are_distinct() {
    let now = Utc::now();
    assert!(Value::DateTime(now).is_a(&Type::DateTime));
    assert!(!Value::DateTime(now).is_a(&Type::NaiveDateTime));
    assert!(Value::NaiveDateTime(now.naive_utc()).is_a(&Type::option(Type::NaiveDateTime)));
}

// ---------------------------------------------------------------------------
// Value::is_zero
// ---------------------------------------------------------------------------

#[test]
fn zero_values() {
    assert!(Value::Null.is_zero());
    assert!(Value::Bool(false).is_zero());
    assert!(Value::I64(0).is_zero());
    assert!(Value::F64(0.0).is_zero());
    assert!(Value::from("").is_zero());
    assert!(Value::Bytes(vec![]).is_zero());
    assert!(Value::Uuid(Uuid::nil()).is_zero());
    assert!(Value::DateTime(DateTime::<Utc>::default()).is_zero());
    assert!(Value::NaiveDateTime(NaiveDateTime::default()).is_zero());
    assert!(Value::Date(NaiveDate::default()).is_zero());
}

#[test]
fn non_zero_values() {
    assert!(!Value::Bool(true).is_zero());
    assert!(!Value::U8(1).is_zero());
    assert!(!Value::from("Luffy").is_zero());
    assert!(!Value::Bytes(vec![0, 1]).is_zero());
    assert!(!Value::Bytes(vec![0]).is_zero());
    assert!(!Value::Uuid(Uuid::new_v4()).is_zero());
    assert!(!Value::DateTime(Utc::now()).is_zero());
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn display() {
    assert_eq!(Value::from("Luffy").to_string(), r#""Luffy""#);
    assert_eq!(Value::Null.to_string(), "NULL");
    assert_eq!(Value::Bytes(vec![0xde, 0xad]).to_string(), "0xdead");
    assert_eq!(Value::I64(-3).to_string(), "-3");
}

#[test]
fn type_display() {
    assert_eq!(Type::option(Type::DateTime).to_string(), "Option<DateTime<Utc>>");
    assert_eq!(Type::U8.to_string(), "u8");
}
