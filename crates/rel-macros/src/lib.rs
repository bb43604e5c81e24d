extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(Record, attributes(key, column, has_one, has_many, table, skip))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match rel_codegen::generate_record(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

#[proc_macro_derive(Primitive)]
pub fn derive_primitive(input: TokenStream) -> TokenStream {
    match rel_codegen::generate_primitive(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
