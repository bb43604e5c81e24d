#![allow(dead_code)]

use rel::{Primitive, Record};

use chrono::{DateTime, TimeZone, Utc};

#[derive(Debug, Default, Clone, PartialEq, Primitive)]
pub struct Status(pub String);

#[derive(Debug, Default, Clone, PartialEq, Primitive)]
pub struct Notes(pub String);

#[derive(Debug, Default, Record)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i32,

    #[has_many]
    pub transactions: Vec<Transaction>,

    #[has_one]
    pub address: Address,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Record)]
pub struct Transaction {
    pub id: i64,
    pub item: String,
    pub status: Status,
    pub user_id: i64,
    pub address_id: i64,
}

#[derive(Debug, Default, Record)]
pub struct Address {
    pub id: i64,
    pub street: String,
    pub notes: Notes,
    pub user_id: Option<i64>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Fixed "now" used by every clock in these tests.
pub fn frozen() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap()
}
