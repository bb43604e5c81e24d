use super::Association;
use crate::stmt::Type;

#[derive(Debug, Clone)]
pub struct Field {
    /// Position of the field in the record's declaration table
    pub index: usize,

    /// The field name
    pub name: FieldName,

    /// Primitive or association
    pub ty: FieldTy,

    /// True if the field is the record's primary key
    pub primary_key: bool,
}

#[derive(Debug, Clone)]
pub struct FieldName {
    /// Rust field identifier
    pub app_name: &'static str,

    /// Column name when it differs from the field identifier
    pub storage_name: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub enum FieldTy {
    Primitive(Type),
    Association(Association),
}

impl FieldName {
    pub fn storage_name(&self) -> &'static str {
        self.storage_name.unwrap_or(self.app_name)
    }
}

impl Field {
    pub fn primitive(
        index: usize,
        app_name: &'static str,
        storage_name: Option<&'static str>,
        ty: Type,
        primary_key: bool,
    ) -> Field {
        Field {
            index,
            name: FieldName {
                app_name,
                storage_name,
            },
            ty: FieldTy::Primitive(ty),
            primary_key,
        }
    }

    pub fn association(
        index: usize,
        app_name: &'static str,
        storage_name: Option<&'static str>,
        association: Association,
    ) -> Field {
        Field {
            index,
            name: FieldName {
                app_name,
                storage_name,
            },
            ty: FieldTy::Association(association),
            primary_key: false,
        }
    }

    /// The column name, used as the key of mutates.
    pub fn column(&self) -> &'static str {
        self.name.storage_name()
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.ty, FieldTy::Primitive(_))
    }

    /// Returns the declared type of a primitive field.
    pub fn primitive_ty(&self) -> Option<&Type> {
        match &self.ty {
            FieldTy::Primitive(ty) => Some(ty),
            FieldTy::Association(_) => None,
        }
    }

    pub fn association_ty(&self) -> Option<&Association> {
        match &self.ty {
            FieldTy::Association(association) => Some(association),
            FieldTy::Primitive(_) => None,
        }
    }
}
