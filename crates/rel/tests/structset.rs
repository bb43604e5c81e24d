mod common;

use common::{frozen, Address, Notes, Status, Transaction, User};
use rel::{apply, set, Document, FixedClock, Mutation, Record, Structset, Value, MAX_ASSOC_DEPTH};

use chrono::Duration;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn structset(skip_zero: bool) -> Structset<'static> {
    Structset::new(skip_zero).clock(Arc::new(FixedClock(frozen())))
}

fn map(record: &mut dyn rel::Reflect, skip_zero: bool) -> rel::Result<Mutation> {
    let mut doc = Document::new(record)?;
    apply(&mut doc, [structset(skip_zero)])
}

fn user_mutation(mutates: impl IntoIterator<Item = rel::Mutate>) -> Mutation {
    let mut mutation = Mutation::from_iter(mutates);
    mutation.set_assoc("transactions", Vec::<Mutation>::new());
    mutation
}

#[test]
fn maps_every_field() {
    let mut user = User {
        id: 1,
        name: "Luffy".to_string(),
        ..Default::default()
    };

    let expected = user_mutation([
        set("id", 1_i64),
        set("name", "Luffy"),
        set("age", 0_i32),
        set("created_at", frozen()),
        set("updated_at", frozen()),
    ]);

    assert_eq!(map(&mut user, false).unwrap(), expected);
    assert_eq!(user.created_at, frozen());
    assert_eq!(user.updated_at, frozen());
}

#[test]
fn zero_primary_key_is_left_out() {
    let mut user = User {
        name: "Luffy".to_string(),
        ..Default::default()
    };

    let expected = user_mutation([
        set("name", "Luffy"),
        set("age", 0_i32),
        set("created_at", frozen()),
        set("updated_at", frozen()),
    ]);

    assert_eq!(map(&mut user, false).unwrap(), expected);
}

#[test]
fn skip_zero() {
    let mut user = User {
        id: 1,
        name: "Luffy".to_string(),
        ..Default::default()
    };

    let expected = user_mutation([
        set("id", 1_i64),
        set("name", "Luffy"),
        set("created_at", frozen()),
        set("updated_at", frozen()),
    ]);

    assert_eq!(map(&mut user, true).unwrap(), expected);
}

#[test]
fn with_associations() {
    let created_at = frozen() - Duration::hours(1);
    let mut user = User {
        id: 1,
        name: "Luffy".to_string(),
        age: 20,
        transactions: vec![
            Transaction {
                id: 1,
                item: "Sword".to_string(),
                ..Default::default()
            },
            Transaction {
                id: 2,
                item: "Shield".to_string(),
                ..Default::default()
            },
        ],
        address: Address {
            id: 1,
            street: "Grove Street".to_string(),
            ..Default::default()
        },
        created_at,
        ..Default::default()
    };

    let transaction = |id: i64, item: &str| {
        Mutation::from_iter([
            set("id", id),
            set("item", item),
            set("status", Status::default()),
            set("user_id", 0_i64),
            set("address_id", 0_i64),
        ])
    };

    let mut expected = Mutation::from_iter([
        set("id", 1_i64),
        set("name", "Luffy"),
        set("age", 20_i32),
        set("created_at", created_at),
        set("updated_at", frozen()),
    ]);
    expected.set_assoc(
        "transactions",
        vec![transaction(1, "Sword"), transaction(2, "Shield")],
    );
    expected.set_assoc(
        "address",
        Mutation::from_iter([
            set("id", 1_i64),
            set("street", "Grove Street"),
            set("notes", Notes::default()),
            set("user_id", Value::Null),
            set("deleted_at", Value::Null),
        ]),
    );

    assert_eq!(map(&mut user, false).unwrap(), expected);
    assert_eq!(user.created_at, created_at);
}

#[test]
fn blank_has_one_is_not_loaded() {
    let mut user = User {
        id: 1,
        ..Default::default()
    };

    let mutation = map(&mut user, true).unwrap();

    assert!(mutation.assoc("address").is_none());
    assert!(mutation.assoc("transactions").unwrap().mutations().is_empty());
}

#[derive(Debug, Default, Record)]
#[table = "users"]
struct IntCreatedAt {
    id: i64,
    name: String,
    created_at: i64,
}

#[test]
fn timestamp_of_non_time_type_is_plain() {
    let mut user = IntCreatedAt {
        name: "Luffy".to_string(),
        created_at: 1,
        ..Default::default()
    };

    let expected = Mutation::from_iter([set("name", "Luffy"), set("created_at", 1_i64)]);

    assert_eq!(map(&mut user, false).unwrap(), expected);
    assert_eq!(user.created_at, 1);
}

#[derive(Debug, Default, Record)]
#[table = "users"]
struct UserTmp {
    id: i64,
    name: String,
    age: i32,
}

#[test]
fn copy_into_different_record() {
    let mut user = User {
        id: 1,
        name: "Luffy".to_string(),
        age: 20,
        ..Default::default()
    };
    let mut tmp = UserTmp::default();

    let mutation = {
        let mut doc = Document::new(&mut tmp).unwrap();
        let structset = Structset::copy_from(&mut user, true).unwrap();
        apply(&mut doc, [structset]).unwrap()
    };

    assert_eq!(
        mutation,
        Mutation::from_iter([set("id", 1_i64), set("name", "Luffy"), set("age", 20_i32)])
    );
    assert_eq!(tmp.id, 1);
    assert_eq!(tmp.name, "Luffy");
    assert_eq!(tmp.age, 20);
}

#[derive(Debug, Default, Record)]
#[table = "users"]
struct MissingAge {
    id: i64,
    name: String,
}

#[test]
fn copy_into_record_missing_a_field() {
    let mut user = User {
        id: 1,
        name: "Luffy".to_string(),
        age: 20,
        ..Default::default()
    };
    let mut tmp = MissingAge::default();

    let mut doc = Document::new(&mut tmp).unwrap();
    let structset = Structset::copy_from(&mut user, true).unwrap();
    let err = apply(&mut doc, [structset]).unwrap_err();

    assert!(err.is_shape_mismatch());
    assert_eq!(
        err.to_string(),
        "cannot copy User.age into MissingAge: field not declared"
    );
    drop(doc);

    // Nothing is written when the shapes do not line up.
    assert_eq!(tmp.id, 0);
    assert_eq!(tmp.name, "");
}

#[derive(Debug, Default, Record)]
#[table = "users"]
struct SmallAge {
    id: i64,
    name: String,
    age: u8,
}

#[test]
fn copy_out_of_range_writes_nothing() {
    let mut user = User {
        id: 1,
        name: "Luffy".to_string(),
        age: 300,
        ..Default::default()
    };
    let mut tmp = SmallAge::default();

    let mut doc = Document::new(&mut tmp).unwrap();
    let structset = Structset::copy_from(&mut user, true).unwrap();
    let err = apply(&mut doc, [structset]).unwrap_err();

    assert!(err.is_type_mismatch());
    assert_eq!(err.to_string(), "cannot assign i32 to SmallAge.age of type u8");
    drop(doc);

    assert_eq!(tmp.id, 0);
    assert_eq!(tmp.name, "");
}

#[derive(Debug, Default, Record)]
struct Owner {
    id: i64,
    name: String,
    blob: Vec<u8>,

    #[has_one]
    profile: Profile,
}

#[derive(Debug, Default, Record)]
struct BoxedOwner {
    id: i64,

    #[has_one(foreign_key = "owner_id")]
    profile: Box<Profile>,
}

#[derive(Debug, Default, Record)]
struct Profile {
    id: i64,
    owner_id: i64,

    #[has_many]
    tags: Vec<Tag>,
}

#[derive(Debug, Default, Record)]
struct Tag {
    id: i64,
    profile_id: i64,
    label: String,
}

#[test]
fn blank_has_one_with_nested_has_many() {
    let mut owner = Owner {
        id: 1,
        name: "Luffy".to_string(),
        ..Default::default()
    };

    let mutation = map(&mut owner, true).unwrap();

    assert!(mutation.assoc("profile").is_none());
    assert_eq!(
        mutation,
        Mutation::from_iter([set("id", 1_i64), set("name", "Luffy")])
    );

    let mut owner = BoxedOwner {
        id: 1,
        ..Default::default()
    };

    let mutation = map(&mut owner, true).unwrap();

    assert!(mutation.assoc("profile").is_none());
    assert_eq!(mutation, Mutation::from_iter([set("id", 1_i64)]));
}

#[test]
fn has_one_with_nested_records_is_loaded() {
    let mut owner = Owner {
        id: 1,
        profile: Profile {
            tags: vec![Tag {
                label: "captain".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        },
        ..Default::default()
    };

    let mutation = map(&mut owner, true).unwrap();
    let profile = mutation.assoc("profile").unwrap().as_one().unwrap();

    assert_eq!(profile.len(), 0);
    assert_eq!(
        profile.assoc("tags").unwrap().mutations(),
        [Mutation::from_iter([set("label", "captain")])]
    );
}

#[test]
fn zero_bytes_are_not_a_zero_value() {
    let mut owner = Owner {
        id: 1,
        blob: vec![0],
        ..Default::default()
    };

    assert_eq!(
        map(&mut owner, true).unwrap(),
        Mutation::from_iter([set("id", 1_i64), set("blob", vec![0_u8])])
    );

    owner.blob.clear();

    assert_eq!(
        map(&mut owner, true).unwrap(),
        Mutation::from_iter([set("id", 1_i64)])
    );
}

#[test]
fn zero_byte_array_is_a_zero_value() {
    let mut token = Token { uuid: [0; 16] };

    assert!(map(&mut token, true).unwrap().is_empty());
}

#[derive(Debug, Default, Record)]
#[table = "tokens"]
struct Token {
    #[key]
    uuid: [u8; 16],
}

#[test]
fn byte_array_primary_key() {
    let uuid = [1_u8; 16];
    let mut token = Token { uuid };

    assert_eq!(
        map(&mut token, false).unwrap(),
        Mutation::from_iter([set("uuid", uuid)])
    );
}

#[derive(Debug, Default, Record)]
struct Node {
    id: i64,

    #[has_many(foreign_key = "parent_id")]
    children: Vec<Node>,

    parent_id: i64,
}

fn chain(depth: usize) -> Node {
    let mut node = Node {
        id: 1,
        ..Default::default()
    };

    for id in 2..=depth as i64 {
        node = Node {
            id,
            children: vec![node],
            parent_id: 0,
        };
    }

    node
}

#[test]
fn nesting_within_limit() {
    let mut node = chain(MAX_ASSOC_DEPTH + 1);
    let mut mutation = map(&mut node, true).unwrap();

    let mut depth = 0;
    while let Some(child) = mutation.assoc("children").and_then(|assoc| assoc.mutations().first()) {
        mutation = child.clone();
        depth += 1;
    }

    assert_eq!(depth, MAX_ASSOC_DEPTH);
}

#[test]
fn nesting_beyond_limit() {
    let mut node = chain(MAX_ASSOC_DEPTH + 2);
    let err = map(&mut node, true).unwrap_err();

    assert!(err.is_invalid_record());
    assert_eq!(
        err.to_string(),
        format!("invalid record: Node nests associations deeper than {MAX_ASSOC_DEPTH} levels")
    );
}

#[test]
fn derived_schema() {
    let schema = User::schema();

    assert_eq!(schema.table, "users");
    assert_eq!(Address::schema().table, "addresses");
    assert_eq!(schema.primary_key, Some(0));

    let (field, association) = schema.associations().next().unwrap();
    assert_eq!(field.column(), "transactions");
    assert!(association.is_many());
    assert_eq!(association.foreign_key, "user_id");
    assert_eq!(association.target().name, "Transaction");

    let node = Node::schema();
    let (_, association) = node.associations().next().unwrap();
    assert_eq!(association.foreign_key, "parent_id");
    assert_eq!(association.target().name, "Node");
}
