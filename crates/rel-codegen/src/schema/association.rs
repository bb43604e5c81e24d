/// Whether the association holds one related record or a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cardinality {
    One,
    Many,
}

/// Container the related record is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Wrapper {
    /// `T`
    Inline,
    /// `Box<T>`
    Box,
    /// `Option<T>`
    Option,
    /// `Vec<T>`
    Vec,
}

/// `#[has_one]` / `#[has_many]` with optional `foreign_key` and `references`.
#[derive(Debug)]
pub(crate) struct Association {
    pub(crate) cardinality: Cardinality,

    /// Field type as written
    pub(crate) ty: syn::Type,

    /// Column on the related record holding this record's key
    pub(crate) foreign_key: Option<syn::LitStr>,

    /// Column on this record the foreign key points at
    pub(crate) references: Option<syn::LitStr>,
}

impl Association {
    pub(super) fn from_ast(
        attr: &syn::Attribute,
        cardinality: Cardinality,
        ty: &syn::Type,
    ) -> syn::Result<Association> {
        let mut foreign_key = None;
        let mut references = None;

        if let syn::Meta::List(_) = &attr.meta {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("foreign_key") {
                    if foreign_key.is_some() {
                        return Err(meta.error("duplicate `foreign_key`"));
                    }
                    foreign_key = Some(meta.value()?.parse::<syn::LitStr>()?);
                } else if meta.path.is_ident("references") {
                    if references.is_some() {
                        return Err(meta.error("duplicate `references`"));
                    }
                    references = Some(meta.value()?.parse::<syn::LitStr>()?);
                } else {
                    return Err(syn::Error::new_spanned(
                        &meta.path,
                        "expected `foreign_key` or `references`",
                    ));
                }

                Ok(())
            })?;
        }

        match (cardinality, Wrapper::from_ty(ty)) {
            (Cardinality::Many, Wrapper::Vec) => {}
            (Cardinality::One, Wrapper::Inline | Wrapper::Box | Wrapper::Option) => {}
            (Cardinality::Many, _) => {
                return Err(syn::Error::new_spanned(
                    ty,
                    "#[has_many] fields must be a `Vec<T>`",
                ))
            }
            (Cardinality::One, Wrapper::Vec) => {
                return Err(syn::Error::new_spanned(
                    ty,
                    "#[has_one] fields must be `T`, `Box<T>` or `Option<T>`",
                ))
            }
        }

        Ok(Association {
            cardinality,
            ty: ty.clone(),
            foreign_key,
            references,
        })
    }
}

impl Wrapper {
    fn from_ty(ty: &syn::Type) -> Wrapper {
        let syn::Type::Path(path) = ty else {
            return Wrapper::Inline;
        };

        let Some(segment) = path.path.segments.last() else {
            return Wrapper::Inline;
        };

        if !matches!(segment.arguments, syn::PathArguments::AngleBracketed(_)) {
            return Wrapper::Inline;
        }

        match segment.ident.to_string().as_str() {
            "Box" => Wrapper::Box,
            "Option" => Wrapper::Option,
            "Vec" => Wrapper::Vec,
            _ => Wrapper::Inline,
        }
    }
}
