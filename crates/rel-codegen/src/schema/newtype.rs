/// A single-field tuple struct deriving `Primitive`, e.g. `struct Status(String)`.
#[derive(Debug)]
pub(crate) struct Newtype {
    pub(crate) ident: syn::Ident,

    /// Wrapped type
    pub(crate) ty: syn::Type,
}

impl Newtype {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Newtype> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "primitive generics are not supported",
            ));
        }

        match &ast.fields {
            syn::Fields::Unnamed(fields) if fields.unnamed.len() == 1 => Ok(Newtype {
                ident: ast.ident.clone(),
                ty: fields.unnamed[0].ty.clone(),
            }),
            _ => Err(syn::Error::new_spanned(
                ast,
                "#[derive(Primitive)] requires a tuple struct with exactly one field",
            )),
        }
    }
}
