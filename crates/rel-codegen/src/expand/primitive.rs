use crate::schema::Newtype;

use proc_macro2::TokenStream;
use quote::quote;

/// Delegates every `Primitive` method to the wrapped type.
pub(super) fn expand(newtype: &Newtype, rel: &TokenStream) -> TokenStream {
    let ident = &newtype.ident;
    let ty = &newtype.ty;

    quote! {
        impl #rel::Primitive for #ident {
            fn ty() -> #rel::Type {
                <#ty as #rel::Primitive>::ty()
            }

            fn to_value(&self) -> #rel::Value {
                <#ty as #rel::Primitive>::to_value(&self.0)
            }

            fn load(value: #rel::Value) -> #rel::Result<Self> {
                <#ty as #rel::Primitive>::load(value).map(#ident)
            }

            fn is_zero(&self) -> bool {
                <#ty as #rel::Primitive>::is_zero(&self.0)
            }
        }

        impl From<#ident> for #rel::Value {
            fn from(value: #ident) -> Self {
                <#ty as #rel::Primitive>::to_value(&value.0)
            }
        }
    }
}
