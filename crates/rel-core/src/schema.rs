mod association;
pub use association::{Association, Cardinality};

mod field;
pub use field::{Field, FieldName, FieldTy};

mod record;
pub use record::RecordSchema;

mod verify;
