use super::{util, Expand};
use crate::schema::FieldTy;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

impl Expand<'_> {
    pub(super) fn expand_reflect_impl(&self) -> TokenStream {
        let rel = &self.rel;
        let ident = &self.record.ident;
        let name = &self.record.name.raw;

        let mut get_arms = vec![];
        let mut is_zero_arms = vec![];
        let mut set_arms = vec![];
        let mut relation_arms = vec![];
        let mut relation_mut_arms = vec![];

        for field in &self.record.fields {
            let index = util::int(field.index);
            let field_ident = &field.name.ident;

            match &field.ty {
                FieldTy::Primitive(ty) => {
                    get_arms.push(quote! {
                        #index => Some(<#ty as #rel::Primitive>::to_value(&self.#field_ident)),
                    });
                    is_zero_arms.push(quote! {
                        #index => <#ty as #rel::Primitive>::is_zero(&self.#field_ident),
                    });
                    set_arms.push(quote! {
                        #index => {
                            self.#field_ident = <#ty as #rel::Primitive>::load(value)?;
                            Ok(())
                        }
                    });
                }
                FieldTy::Association(association) => {
                    let ty = &association.ty;

                    is_zero_arms.push(quote! {
                        #index => !<#ty as #rel::Relation>::is_loaded(&self.#field_ident),
                    });
                    relation_arms.push(quote! {
                        #index => Some(&self.#field_ident as &dyn #rel::Relation),
                    });
                    relation_mut_arms.push(quote! {
                        #index => Some(&mut self.#field_ident as &mut dyn #rel::Relation),
                    });
                }
            }
        }

        // A record made only of associations never reads the value.
        let value = if set_arms.is_empty() {
            format_ident!("_value")
        } else {
            format_ident!("value")
        };

        quote! {
            impl #rel::Reflect for #ident {
                fn record_schema(&self) -> &'static #rel::RecordSchema {
                    <Self as #rel::Record>::schema()
                }

                fn get(&self, field: usize) -> Option<#rel::Value> {
                    match field {
                        #( #get_arms )*
                        _ => None,
                    }
                }

                fn is_zero(&self, field: usize) -> bool {
                    match field {
                        #( #is_zero_arms )*
                        _ => true,
                    }
                }

                fn set(&mut self, field: usize, #value: #rel::Value) -> #rel::Result<()> {
                    match field {
                        #( #set_arms )*
                        _ => Err(#rel::Error::unknown_field(#name, &field.to_string())),
                    }
                }

                fn relation(&self, field: usize) -> Option<&dyn #rel::Relation> {
                    match field {
                        #( #relation_arms )*
                        _ => None,
                    }
                }

                fn relation_mut(&mut self, field: usize) -> Option<&mut dyn #rel::Relation> {
                    match field {
                        #( #relation_mut_arms )*
                        _ => None,
                    }
                }
            }
        }
    }
}
