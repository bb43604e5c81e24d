mod expand;
mod schema;

use proc_macro2::TokenStream;

/// Expands `#[derive(Record)]`.
pub fn generate_record(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let record = schema::Record::from_ast(&item)?;

    Ok(expand::record(&record))
}

/// Expands `#[derive(Primitive)]` for single-field tuple structs.
pub fn generate_primitive(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let newtype = schema::Newtype::from_ast(&item)?;

    Ok(expand::primitive(&newtype))
}
