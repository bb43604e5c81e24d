use super::{verify, Association, Field};
use crate::Result;

use std::{collections::HashMap, sync::OnceLock};

/// Declaration table for one record type.
///
/// Built once per type (the derive stores it in a `OnceLock`) and shared by
/// every `Document` over that type.
#[derive(Debug)]
pub struct RecordSchema {
    /// Rust type name
    pub name: &'static str,

    /// Table the record is persisted to
    pub table: &'static str,

    /// Fields in declaration order
    pub fields: Vec<Field>,

    /// Index of the primary key field
    pub primary_key: Option<usize>,

    /// Lower-cased column and field names to field index
    lookup: HashMap<String, usize>,

    /// Cached outcome of `verify`
    verified: OnceLock<Result<()>>,
}

impl RecordSchema {
    pub fn new(name: &'static str, table: &'static str, fields: Vec<Field>) -> RecordSchema {
        let primary_key = fields.iter().position(|field| field.primary_key);
        let mut lookup = HashMap::with_capacity(fields.len() * 2);

        // Column names take precedence over Rust identifiers.
        for field in &fields {
            lookup
                .entry(field.column().to_ascii_lowercase())
                .or_insert(field.index);
        }

        for field in &fields {
            lookup
                .entry(field.name.app_name.to_ascii_lowercase())
                .or_insert(field.index);
        }

        RecordSchema {
            name,
            table,
            fields,
            primary_key,
            lookup,
            verified: OnceLock::new(),
        }
    }

    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// Resolves a field by column or Rust name, ignoring ASCII case.
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        let index = match self.lookup.get(name) {
            Some(index) => *index,
            None => *self.lookup.get(&name.to_ascii_lowercase())?,
        };
        self.fields.get(index)
    }

    pub fn primary_key_field(&self) -> Option<&Field> {
        self.primary_key.and_then(|index| self.fields.get(index))
    }

    /// Fields that hold a plain value, in declaration order.
    pub fn primitives(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.is_primitive())
    }

    /// Association fields, in declaration order.
    pub fn associations(&self) -> impl Iterator<Item = (&Field, &Association)> + '_ {
        self.fields
            .iter()
            .filter_map(|field| Some((field, field.association_ty()?)))
    }

    /// Checks the declaration table, caching the outcome for later calls.
    pub fn verify(&self) -> Result<()> {
        self.verified.get_or_init(|| verify::verify(self)).clone()
    }
}
