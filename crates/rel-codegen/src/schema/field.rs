use super::{Association, Cardinality, Column, ErrorSet, Name};

#[derive(Debug)]
pub(crate) struct Field {
    /// Position in the record's declaration table
    pub(crate) index: usize,

    /// Field name
    pub(crate) name: Name,

    /// Set when the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// Column rename
    pub(crate) column: Option<Column>,

    /// Field type
    pub(crate) ty: FieldTy,
}

#[derive(Debug)]
pub(crate) enum FieldTy {
    Primitive(syn::Type),
    Association(Association),
}

impl Field {
    /// Parses one struct field. Returns `None` for `#[skip]` fields.
    pub(super) fn from_ast(field: &syn::Field, index: usize) -> syn::Result<Option<Field>> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut key = None;
        let mut column = None;
        let mut association = None;
        let mut skip = None;

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else {
                    key = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if column.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[column] attribute"));
                } else {
                    column = errs.check(Column::from_ast(attr));
                }
            } else if attr.path().is_ident("has_one") || attr.path().is_ident("has_many") {
                let cardinality = if attr.path().is_ident("has_many") {
                    Cardinality::Many
                } else {
                    Cardinality::One
                };

                if association.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "field has more than one association attribute",
                    ));
                } else {
                    association = errs.check(Association::from_ast(attr, cardinality, &field.ty));
                }
            } else if attr.path().is_ident("skip") {
                if !matches!(attr.meta, syn::Meta::Path(_)) {
                    errs.push(syn::Error::new_spanned(attr, "expected `#[skip]`"));
                }
                skip = Some(attr);
            }
        }

        if let Some(skip) = skip {
            if key.is_some() || column.is_some() || association.is_some() {
                errs.push(syn::Error::new_spanned(
                    skip,
                    "#[skip] cannot be combined with other field attributes",
                ));
            }

            errs.finish()?;
            return Ok(None);
        }

        if association.is_some() {
            if let Some(key) = &key {
                errs.push(syn::Error::new_spanned(
                    key,
                    "an association cannot be the primary key",
                ));
            }

            if column.is_some() {
                errs.push(syn::Error::new_spanned(
                    field,
                    "association fields cannot have a #[column] attribute",
                ));
            }
        }

        errs.finish()?;

        let ty = match association {
            Some(association) => FieldTy::Association(association),
            None => FieldTy::Primitive(field.ty.clone()),
        };

        Ok(Some(Field {
            index,
            name: Name::from_ident(ident),
            key,
            column,
            ty,
        }))
    }

    /// Column the field maps to.
    pub(crate) fn column(&self) -> String {
        match &self.column {
            Some(column) => column.name.value(),
            None => self.name.snake.clone(),
        }
    }

    /// Column name to emit when it differs from the Rust field name.
    pub(crate) fn storage_name(&self) -> Option<String> {
        let column = self.column();
        (column != self.name.raw).then_some(column)
    }

    pub(crate) fn is_primitive(&self) -> bool {
        matches!(self.ty, FieldTy::Primitive(_))
    }
}
