#![allow(dead_code)]

use rel_core::{
    schema::{Association, Cardinality, Field},
    Error, Primitive, Record, RecordSchema, Reflect, Relation, Result, Type, Value,
};

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use std::sync::OnceLock;

/// Hand-written equivalent of what `#[derive(Record)]` expands to.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub age: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<NaiveDateTime>,
    pub pets: Vec<Pet>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub person_id: i64,
}

/// Declares an association its accessor does not expose.
#[derive(Debug, Default)]
pub struct Broken {
    pub id: i64,
}

pub fn frozen() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap()
}

impl Record for Person {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: OnceLock<RecordSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            RecordSchema::new(
                "Person",
                "people",
                vec![
                    Field::primitive(0, "id", None, Type::I64, true),
                    Field::primitive(1, "name", Some("full_name"), Type::String, false),
                    Field::primitive(2, "age", None, Type::U8, false),
                    Field::primitive(3, "created_at", None, Type::DateTime, false),
                    Field::primitive(
                        4,
                        "updated_at",
                        None,
                        Type::option(Type::NaiveDateTime),
                        false,
                    ),
                    Field::association(
                        5,
                        "pets",
                        None,
                        Association::new(Cardinality::Many, Pet::schema, "person_id", None),
                    ),
                ],
            )
        })
    }
}

impl Reflect for Person {
    fn record_schema(&self) -> &'static RecordSchema {
        Self::schema()
    }

    fn get(&self, field: usize) -> Option<Value> {
        match field {
            0 => Some(self.id.to_value()),
            1 => Some(self.name.to_value()),
            2 => Some(self.age.to_value()),
            3 => Some(self.created_at.to_value()),
            4 => Some(self.updated_at.to_value()),
            _ => None,
        }
    }

    fn is_zero(&self, field: usize) -> bool {
        match field {
            0 => Primitive::is_zero(&self.id),
            1 => Primitive::is_zero(&self.name),
            2 => Primitive::is_zero(&self.age),
            3 => Primitive::is_zero(&self.created_at),
            4 => Primitive::is_zero(&self.updated_at),
            5 => !Relation::is_loaded(&self.pets),
            _ => true,
        }
    }

    fn set(&mut self, field: usize, value: Value) -> Result<()> {
        match field {
            0 => self.id = Primitive::load(value)?,
            1 => self.name = Primitive::load(value)?,
            2 => self.age = Primitive::load(value)?,
            3 => self.created_at = Primitive::load(value)?,
            4 => self.updated_at = Primitive::load(value)?,
            _ => return Err(Error::unknown_field("Person", &field.to_string())),
        }
        Ok(())
    }

    fn relation(&self, field: usize) -> Option<&dyn Relation> {
        match field {
            5 => Some(&self.pets),
            _ => None,
        }
    }

    fn relation_mut(&mut self, field: usize) -> Option<&mut dyn Relation> {
        match field {
            5 => Some(&mut self.pets),
            _ => None,
        }
    }
}

impl Record for Pet {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: OnceLock<RecordSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            RecordSchema::new(
                "Pet",
                "pets",
                vec![
                    Field::primitive(0, "id", None, Type::I64, true),
                    Field::primitive(1, "name", None, Type::String, false),
                    Field::primitive(2, "person_id", None, Type::I64, false),
                ],
            )
        })
    }
}

impl Reflect for Pet {
    fn record_schema(&self) -> &'static RecordSchema {
        Self::schema()
    }

    fn get(&self, field: usize) -> Option<Value> {
        match field {
            0 => Some(self.id.to_value()),
            1 => Some(self.name.to_value()),
            2 => Some(self.person_id.to_value()),
            _ => None,
        }
    }

    fn is_zero(&self, field: usize) -> bool {
        match field {
            0 => Primitive::is_zero(&self.id),
            1 => Primitive::is_zero(&self.name),
            2 => Primitive::is_zero(&self.person_id),
            _ => true,
        }
    }

    fn set(&mut self, field: usize, value: Value) -> Result<()> {
        match field {
            0 => self.id = Primitive::load(value)?,
            1 => self.name = Primitive::load(value)?,
            2 => self.person_id = Primitive::load(value)?,
            _ => return Err(Error::unknown_field("Pet", &field.to_string())),
        }
        Ok(())
    }

    fn relation(&self, _field: usize) -> Option<&dyn Relation> {
        None
    }

    fn relation_mut(&mut self, _field: usize) -> Option<&mut dyn Relation> {
        None
    }
}

impl Record for Broken {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: OnceLock<RecordSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            RecordSchema::new(
                "Broken",
                "brokens",
                vec![
                    Field::primitive(0, "id", None, Type::I64, true),
                    Field::association(
                        1,
                        "pets",
                        None,
                        Association::new(Cardinality::Many, Pet::schema, "broken_id", None),
                    ),
                ],
            )
        })
    }
}

impl Reflect for Broken {
    fn record_schema(&self) -> &'static RecordSchema {
        Self::schema()
    }

    fn get(&self, field: usize) -> Option<Value> {
        (field == 0).then(|| self.id.to_value())
    }

    fn is_zero(&self, field: usize) -> bool {
        field != 0 || Primitive::is_zero(&self.id)
    }

    fn set(&mut self, field: usize, value: Value) -> Result<()> {
        if field == 0 {
            self.id = Primitive::load(value)?;
        }
        Ok(())
    }

    fn relation(&self, _field: usize) -> Option<&dyn Relation> {
        None
    }

    fn relation_mut(&mut self, _field: usize) -> Option<&mut dyn Relation> {
        None
    }
}
