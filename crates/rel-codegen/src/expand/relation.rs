use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Lets the record be stored inline as a has-one association of another record.
    pub(super) fn expand_relation_impl(&self) -> TokenStream {
        let rel = &self.rel;
        let ident = &self.record.ident;

        quote! {
            impl #rel::Relation for #ident {
                fn is_loaded(&self) -> bool {
                    !#rel::is_blank(self)
                }

                fn len(&self) -> usize {
                    1
                }

                fn get(&self, index: usize) -> Option<&dyn #rel::Reflect> {
                    if index == 0 {
                        Some(self as &dyn #rel::Reflect)
                    } else {
                        None
                    }
                }

                fn get_mut(&mut self, index: usize) -> Option<&mut dyn #rel::Reflect> {
                    if index == 0 {
                        Some(self as &mut dyn #rel::Reflect)
                    } else {
                        None
                    }
                }

                fn get_or_insert(&mut self, index: usize) -> Option<&mut dyn #rel::Reflect> {
                    <Self as #rel::Relation>::get_mut(self, index)
                }
            }

            impl #rel::RelationField for #ident {
                type Target = Self;

                fn cardinality() -> #rel::schema::Cardinality {
                    #rel::schema::Cardinality::One
                }
            }
        }
    }
}
