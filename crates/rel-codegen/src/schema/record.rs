use super::{ErrorSet, Field, Name, RecordAttr};

use std::collections::HashMap;

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Type name
    pub(crate) name: Name,

    /// Table the record is persisted to
    pub(crate) table: String,

    /// Mapped fields, `#[skip]` fields excluded
    pub(crate) fields: Vec<Field>,

    /// Index of the primary key in `fields`
    pub(crate) primary_key: Option<usize>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Record> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut errs = ErrorSet::new();
        let attr = errs.check(RecordAttr::from_ast(&ast.attrs)).unwrap_or_default();
        let mut fields: Vec<Field> = vec![];

        for node in &node.named {
            if let Some(Some(field)) = errs.check(Field::from_ast(node, fields.len())) {
                fields.push(field);
            }
        }

        errs.finish()?;

        if fields.is_empty() {
            return Err(syn::Error::new_spanned(
                ast,
                "record must declare at least one field",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut columns = HashMap::new();

        for field in &fields {
            if let Some(first) = columns.insert(field.column().to_ascii_lowercase(), &field.name.ident) {
                errs.push(syn::Error::new_spanned(
                    &field.name.ident,
                    format!(
                        "column `{}` is already used by field `{}`",
                        field.column(),
                        first
                    ),
                ));
            }
        }

        let mut keyed = fields.iter().filter(|field| field.key.is_some());
        let primary_key = keyed.next().map(|field| field.index);

        for field in keyed {
            if let Some(key) = &field.key {
                errs.push(syn::Error::new_spanned(
                    key,
                    "more than one field has a #[key] attribute",
                ));
            }
        }

        errs.finish()?;

        // Without `#[key]`, a plain field stored in the `id` column is the key.
        let primary_key = primary_key.or_else(|| {
            fields
                .iter()
                .find(|field| field.is_primitive() && field.column().eq_ignore_ascii_case("id"))
                .map(|field| field.index)
        });

        let name = Name::from_ident(&ast.ident);
        let table = match attr.table {
            Some(table) => table.value(),
            None => name.table(),
        };

        Ok(Record {
            ident: ast.ident.clone(),
            name,
            table,
            fields,
            primary_key,
        })
    }
}
