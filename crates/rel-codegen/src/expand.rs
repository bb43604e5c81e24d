mod primitive;
mod reflect;
mod relation;
mod schema;
mod util;

use crate::schema::{Newtype, Record};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for rel types
    rel: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let record_impl = self.expand_record_impl();
        let reflect_impl = self.expand_reflect_impl();
        let relation_impl = self.expand_relation_impl();

        wrap_in_const(quote! {
            #record_impl
            #reflect_impl
            #relation_impl
        })
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        rel: quote!(_rel::codegen_support),
    }
    .expand()
}

pub(super) fn primitive(newtype: &Newtype) -> TokenStream {
    wrap_in_const(primitive::expand(newtype, &quote!(_rel::codegen_support)))
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rel as _rel;
            #code
        };
    }
}
