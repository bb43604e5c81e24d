use super::ErrorSet;

/// Struct-level attributes of a record.
#[derive(Debug, Default)]
pub(crate) struct RecordAttr {
    /// `#[table = "name"]`
    pub(crate) table: Option<syn::LitStr>,
}

impl RecordAttr {
    pub(super) fn from_ast(attrs: &[syn::Attribute]) -> syn::Result<RecordAttr> {
        let mut result = RecordAttr::default();
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if attr.path().is_ident("table") {
                if result.table.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[table] attribute"));
                    continue;
                }

                result.table = errs.check(parse_table(attr));
            } else if attr.path().is_ident("key") {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "#[key] goes on the primary key field, not on the struct",
                ));
            }
        }

        errs.finish()?;
        Ok(result)
    }
}

fn parse_table(attr: &syn::Attribute) -> syn::Result<syn::LitStr> {
    let syn::Meta::NameValue(meta) = &attr.meta else {
        return Err(syn::Error::new_spanned(
            attr,
            "expected `#[table = \"table_name\"]`",
        ));
    };

    let syn::Expr::Lit(syn::ExprLit {
        lit: syn::Lit::Str(lit),
        ..
    }) = &meta.value
    else {
        return Err(syn::Error::new_spanned(
            &meta.value,
            "expected `#[table = \"table_name\"]`",
        ));
    };

    Ok(lit.clone())
}
