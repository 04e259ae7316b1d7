//! `#[derive(DescribeType)]` implementation.
//!
//! The derive reads the annotations of a struct at expansion time, builds its
//! [`TypeDescriptor`](datacontract_core::TypeDescriptor) and emits an
//! implementation of `datacontract::DescribeType` that returns that snapshot.
//!
//! ```ignore
//! #[derive(DescribeType)]
//! #[data_contract(name = "Person")]
//! pub struct PersonDto {
//!     #[data_member(name = "id", required)]
//!     pub person_id: u64,
//!     #[serde(rename = "displayName")]
//!     pub display_name: String,
//!     pub cache_key: String,
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use crate::{codegen::type_descriptor_to_tokens, descriptor::parse_type_descriptor};

/// Process derive input and return the expanded impl
pub fn process_derive_describe(input: &syn::DeriveInput) -> syn::Result<TokenStream> {
    let descriptor = parse_type_descriptor(input)?;
    let descriptor_tokens = type_descriptor_to_tokens(&descriptor);

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics datacontract::DescribeType for #name #ty_generics #where_clause {
            fn type_descriptor() -> datacontract::TypeDescriptor {
                #descriptor_tokens
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_derive_describe_struct() {
        let input: syn::DeriveInput = syn::parse_quote! {
            #[data_contract]
            struct User {
                #[data_member]
                name: String,
            }
        };
        let tokens = process_derive_describe(&input).unwrap().to_string();
        assert!(tokens.contains("impl datacontract :: DescribeType for User"));
        assert!(tokens.contains("fn type_descriptor ()"));
        assert!(tokens.contains("\"name\""));
    }

    #[test]
    fn test_process_derive_describe_generic() {
        let input: syn::DeriveInput = syn::parse_quote! {
            struct Container<T: Clone> where T: Default {
                value: T,
            }
        };
        let tokens = process_derive_describe(&input).unwrap().to_string();
        assert!(tokens.contains("impl < T : Clone > datacontract :: DescribeType for Container < T >"));
        assert!(tokens.contains("where T : Default"));
    }

    #[test]
    fn test_process_derive_describe_enum_is_error() {
        let input: syn::DeriveInput = syn::parse_quote! {
            enum Status {
                Active,
                Inactive,
            }
        };
        let err = process_derive_describe(&input).err().expect("should fail");
        let compile_error = err.to_compile_error().to_string();
        assert!(compile_error.contains("compile_error"));
        assert!(compile_error.contains("only be derived for structs"));
    }

    #[test]
    fn test_expanded_impl_parses_as_item() {
        let input: syn::DeriveInput = syn::parse_quote! {
            #[data_contract(name = "Renamed")]
            struct Original {
                #[serde(rename = "bar")]
                bar: String,
            }
        };
        let tokens = process_derive_describe(&input).unwrap();
        let item: syn::ItemImpl = syn::parse2(tokens).unwrap();
        assert_eq!(item.items.len(), 1);
    }
}
