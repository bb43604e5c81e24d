mod association;
pub(crate) use association::{Association, Cardinality};

mod column;
pub(crate) use column::Column;

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::{Field, FieldTy};

mod name;
pub(crate) use name::Name;

mod newtype;
pub(crate) use newtype::Newtype;

mod record;
pub(crate) use record::Record;

mod record_attr;
pub(crate) use record_attr::RecordAttr;
