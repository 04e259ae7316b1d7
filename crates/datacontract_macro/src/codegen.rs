//! Code generation utilities for the derive macro
//!
//! Converts a [`TypeDescriptor`] built at expansion time into the
//! `TokenStream` that rebuilds it at runtime.

use datacontract_core::{MemberAnnotation, MemberDescriptor, TypeDescriptor};
use proc_macro2::TokenStream;
use quote::quote;

/// Convert `TypeDescriptor` to `TokenStream`
pub fn type_descriptor_to_tokens(descriptor: &TypeDescriptor) -> TokenStream {
    let name = &descriptor.name;
    let has_contract_marker = descriptor.has_contract_marker;
    let members = descriptor.members.iter().map(member_descriptor_to_tokens);

    quote! {
        datacontract::TypeDescriptor {
            name: #name.to_string(),
            has_contract_marker: #has_contract_marker,
            members: vec![#(#members),*],
        }
    }
}

/// Convert `MemberDescriptor` to `TokenStream`
pub fn member_descriptor_to_tokens(member: &MemberDescriptor) -> TokenStream {
    let declared_name = &member.declared_name;
    let ignore_annotation = member.ignore_annotation;

    let member_annotation = match &member.member_annotation {
        Some(annotation) => {
            let tokens = member_annotation_to_tokens(annotation);
            quote! { Some(#tokens) }
        }
        None => quote! { None },
    };

    let serialization_annotation = match &member.serialization_annotation {
        Some(annotation) => {
            let name = &annotation.name;
            quote! {
                Some(datacontract::SerializationAnnotation { name: #name.to_string() })
            }
        }
        None => quote! { None },
    };

    quote! {
        datacontract::MemberDescriptor {
            declared_name: #declared_name.to_string(),
            member_annotation: #member_annotation,
            serialization_annotation: #serialization_annotation,
            ignore_annotation: #ignore_annotation,
        }
    }
}

fn member_annotation_to_tokens(annotation: &MemberAnnotation) -> TokenStream {
    let is_required = annotation.is_required;
    let name = match &annotation.name {
        Some(name) => quote! { Some(#name.to_string()) },
        None => quote! { None },
    };

    quote! {
        datacontract::MemberAnnotation {
            name: #name,
            is_required: #is_required,
        }
    }
}
