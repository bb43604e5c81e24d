use super::{util, Expand};
use crate::schema::{Cardinality, Field, FieldTy};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let rel = &self.rel;
        let ident = &self.record.ident;
        let name = &self.record.name.raw;
        let table = &self.record.table;
        let fields = self.expand_fields();

        quote! {
            impl #rel::Record for #ident {
                fn schema() -> &'static #rel::RecordSchema {
                    static SCHEMA: std::sync::OnceLock<#rel::RecordSchema> = std::sync::OnceLock::new();

                    SCHEMA.get_or_init(|| #rel::RecordSchema::new(#name, #table, #fields))
                }
            }
        }
    }

    fn expand_fields(&self) -> TokenStream {
        let fields = self.record.fields.iter().map(|field| self.expand_field(field));

        quote! {
            vec![ #( #fields ),* ]
        }
    }

    fn expand_field(&self, field: &Field) -> TokenStream {
        let rel = &self.rel;
        let index = util::int(field.index);
        let app_name = &field.name.raw;
        let storage_name = util::opt_str(field.storage_name().as_deref());

        match &field.ty {
            FieldTy::Primitive(ty) => {
                let primary_key = self.record.primary_key == Some(field.index);

                quote! {
                    #rel::schema::Field::primitive(
                        #index,
                        #app_name,
                        #storage_name,
                        <#ty as #rel::Primitive>::ty(),
                        #primary_key,
                    )
                }
            }
            FieldTy::Association(association) => {
                let ty = &association.ty;

                // The related record holds `<record>_id` unless told otherwise.
                let foreign_key = match &association.foreign_key {
                    Some(foreign_key) => foreign_key.value(),
                    None => format!("{}_id", self.record.name.snake),
                };
                let references = association.references.as_ref().map(|lit| lit.value());
                let references = util::opt_str(references.as_deref());

                let cardinality = match association.cardinality {
                    Cardinality::One => quote!(#rel::schema::Cardinality::One),
                    Cardinality::Many => quote!(#rel::schema::Cardinality::Many),
                };

                quote! {
                    #rel::schema::Field::association(
                        #index,
                        #app_name,
                        #storage_name,
                        #rel::schema::Association::new(
                            #cardinality,
                            <<#ty as #rel::RelationField>::Target as #rel::Record>::schema,
                            #foreign_key,
                            #references,
                        ),
                    )
                }
            }
        }
    }
}
