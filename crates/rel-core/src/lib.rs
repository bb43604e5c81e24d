pub mod adapter;
pub use adapter::Adapter;

mod clock;
pub use clock::{Clock, FixedClock, SystemClock};

mod document;
pub use document::Document;

mod error;
pub use error::Error;

pub mod mutation;
pub use mutation::{AssocMutation, Mutate, Mutation};

mod mutator;
pub use mutator::{apply, cascade, dec, inc, set, set_fragment, Mutator};

pub mod record;
pub use record::{Record, Reflect, Relation, RelationField};

pub mod schema;
pub use schema::RecordSchema;

pub mod stmt;
pub use stmt::{Primitive, Type, Value};

mod structset;
pub use structset::{Structset, MAX_ASSOC_DEPTH};

/// A Result type alias that uses rel's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
