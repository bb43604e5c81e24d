use crate::{
    document::Document,
    mutation::{Mutate, Mutation},
    stmt::{Type, Value},
    structset::Structset,
    Error, Result,
};

use tracing::trace;

/// An instruction applied to a document by [`apply`].
#[derive(Debug)]
pub enum Mutator<'a> {
    /// A single field change
    Mutate(Mutate),

    /// Map the whole record (and its loaded associations)
    Structset(Structset<'a>),

    /// Override whether association changes are persisted
    Cascade(bool),
}

impl From<Mutate> for Mutator<'_> {
    fn from(value: Mutate) -> Self {
        Mutator::Mutate(value)
    }
}

impl<'a> From<Structset<'a>> for Mutator<'a> {
    fn from(value: Structset<'a>) -> Self {
        Mutator::Structset(value)
    }
}

pub fn set(field: impl Into<String>, value: impl Into<Value>) -> Mutate {
    Mutate::Set {
        field: field.into(),
        value: value.into(),
    }
}

pub fn inc(field: impl Into<String>, by: i64) -> Mutate {
    Mutate::Inc {
        field: field.into(),
        by,
    }
}

pub fn dec(field: impl Into<String>, by: i64) -> Mutate {
    Mutate::Dec {
        field: field.into(),
        by,
    }
}

pub fn set_fragment(raw: impl Into<String>, args: impl IntoIterator<Item = Value>) -> Mutate {
    Mutate::SetFragment {
        raw: raw.into(),
        args: args.into_iter().collect(),
    }
}

pub fn cascade(cascade: bool) -> Mutator<'static> {
    Mutator::Cascade(cascade)
}

/// Applies mutators to a document in order and returns the resulting mutation.
///
/// `Set` writes into the record; the last write to a field wins. `Inc`,
/// `Dec` and `SetFragment` are only recorded. The first error aborts the
/// call, although writes made before it stay in the record.
pub fn apply<'m, I>(doc: &mut Document<'_>, mutators: I) -> Result<Mutation>
where
    I: IntoIterator,
    I::Item: Into<Mutator<'m>>,
{
    let mut mutation = Mutation::new();

    for mutator in mutators {
        match mutator.into() {
            Mutator::Mutate(mutate) => apply_mutate(doc, &mut mutation, mutate)?,
            Mutator::Structset(mut structset) => {
                let mapped = structset.build(doc)?;
                mutation.merge(mapped);
            }
            Mutator::Cascade(cascade) => mutation.set_cascade(cascade),
        }
    }

    trace!(target: "rel::apply", record = doc.name(), %mutation, "applied mutators");
    Ok(mutation)
}

fn apply_mutate(doc: &mut Document<'_>, mutation: &mut Mutation, mutate: Mutate) -> Result<()> {
    let mutate = match mutate {
        Mutate::Set { field, value } => {
            doc.set_field(&field, value.clone())?;
            Mutate::Set {
                field: doc.column(&field).map_or(field, String::from),
                value,
            }
        }
        Mutate::Inc { field, by } => Mutate::Inc {
            field: integer_column(doc, &field)?.to_string(),
            by,
        },
        Mutate::Dec { field, by } => Mutate::Dec {
            field: integer_column(doc, &field)?.to_string(),
            by,
        },
        mutate @ Mutate::SetFragment { .. } => mutate,
    };

    mutation.add(mutate);
    Ok(())
}

/// Resolves the column of a field that can be incremented in storage.
fn integer_column(doc: &Document<'_>, field: &str) -> Result<&'static str> {
    let (Some(column), Some(ty)) = (doc.column(field), doc.field_type(field)) else {
        return Err(Error::unknown_field(doc.name(), field));
    };

    if !ty.is_integer() {
        return Err(Error::type_mismatch(doc.name(), column, Type::I64, ty.clone()));
    }

    Ok(column)
}
