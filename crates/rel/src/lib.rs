extern crate self as rel;

mod repo;
pub use repo::{Builder, Repository};

pub mod reltest;

pub use rel_core::{
    adapter::{self, Adapter},
    apply, cascade, dec, inc,
    mutation::{self, AssocMutation, Mutate, Mutation},
    record::{self, Record, Reflect, Relation, RelationField},
    schema::{self, RecordSchema},
    set, set_fragment,
    stmt::{self, Primitive, Type, Value},
    Clock, Document, Error, FixedClock, Mutator, Result, Structset, SystemClock, MAX_ASSOC_DEPTH,
};

pub use rel_macros::{Primitive, Record};

pub use async_trait::async_trait;

#[doc(hidden)]
pub mod codegen_support {
    pub use rel_core::{
        record::{is_blank, Record, Reflect, Relation, RelationField},
        schema::RecordSchema,
        stmt::{Primitive, Type, Value},
        Error, Result,
    };

    pub mod schema {
        pub use rel_core::schema::{Association, Cardinality, Field};
    }
}
