use super::RecordSchema;
use crate::{Error, Result};

use std::collections::HashSet;

pub(super) fn verify(schema: &RecordSchema) -> Result<()> {
    if schema.fields.is_empty() {
        return Err(Error::invalid_record(format!(
            "{} declares no fields",
            schema.name
        )));
    }

    let mut columns = HashSet::with_capacity(schema.fields.len());
    let mut primary_keys = 0;

    for (position, field) in schema.fields.iter().enumerate() {
        if field.index != position {
            return Err(Error::invalid_record(format!(
                "{}.{} is declared at index {} but stored at {}",
                schema.name, field.name.app_name, field.index, position
            )));
        }

        if !columns.insert(field.column().to_ascii_lowercase()) {
            return Err(Error::invalid_record(format!(
                "{} declares column `{}` more than once",
                schema.name,
                field.column()
            )));
        }

        if field.primary_key {
            if !field.is_primitive() {
                return Err(Error::invalid_record(format!(
                    "{}.{} is an association and cannot be the primary key",
                    schema.name, field.name.app_name
                )));
            }

            primary_keys += 1;
        }
    }

    if primary_keys > 1 {
        return Err(Error::invalid_record(format!(
            "{} declares {} primary keys; at most one is supported",
            schema.name, primary_keys
        )));
    }

    Ok(())
}
