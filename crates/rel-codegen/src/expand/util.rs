use proc_macro2::{Literal, TokenStream};
use quote::ToTokens;

/// An unsuffixed integer literal, usable as a match pattern.
pub(crate) fn int(v: usize) -> TokenStream {
    Literal::usize_unsuffixed(v).into_token_stream()
}

/// `Some("value")` or `None`.
pub(crate) fn opt_str(value: Option<&str>) -> TokenStream {
    match value {
        Some(value) => quote::quote!(Some(#value)),
        None => quote::quote!(None),
    }
}
