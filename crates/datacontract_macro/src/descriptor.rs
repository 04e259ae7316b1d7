//! Struct to [`TypeDescriptor`] conversion.

use datacontract_core::{MemberDescriptor, SerializationAnnotation, TypeDescriptor};
use syn::{Data, Fields};

use crate::attrs::{
    extract_data_contract, extract_data_member, extract_field_rename, extract_ignore_data_member,
    extract_rename_all, extract_skip, rename_field, strip_raw_prefix,
};

/// Build the descriptor of a derive input.
///
/// Named fields become members in declaration order. Tuple and unit structs
/// have no members. Enums and unions are rejected.
///
/// A container `#[serde(rename_all = "...")]` decides how declared names are
/// spelled, so they match the keys serde writes.
pub fn parse_type_descriptor(input: &syn::DeriveInput) -> syn::Result<TypeDescriptor> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "DescribeType can only be derived for structs",
        ));
    };

    let contract = extract_data_contract(&input.attrs)?;
    let name = contract
        .as_ref()
        .and_then(|args| args.name.as_ref())
        .map_or_else(
            || strip_raw_prefix(&input.ident.to_string()).to_string(),
            syn::LitStr::value,
        );

    let mut descriptor = TypeDescriptor::new(name);
    descriptor.has_contract_marker = contract.is_some();

    let rename_all = extract_rename_all(&input.attrs);
    if let Fields::Named(fields_named) = &data.fields {
        for field in &fields_named.named {
            descriptor
                .members
                .push(parse_member(field, rename_all.as_deref())?);
        }
    }

    Ok(descriptor)
}

fn parse_member(field: &syn::Field, rename_all: Option<&str>) -> syn::Result<MemberDescriptor> {
    let field_name = field.ident.as_ref().map_or_else(
        || "unknown".to_string(),
        |i| strip_raw_prefix(&i.to_string()).to_string(),
    );
    let declared_name = rename_all
        .and_then(|rule| rename_field(&field_name, rule))
        .unwrap_or(field_name);

    let member_annotation = extract_data_member(&field.attrs)?;
    let ignore_data_member = extract_ignore_data_member(&field.attrs)?;

    Ok(MemberDescriptor {
        declared_name,
        member_annotation,
        serialization_annotation: extract_field_rename(&field.attrs)
            .map(|name| SerializationAnnotation { name }),
        ignore_annotation: ignore_data_member || extract_skip(&field.attrs),
    })
}

#[cfg(test)]
mod tests {
    use datacontract_core::MemberAnnotation;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_struct_without_contract() {
        let input: syn::DeriveInput = syn::parse_quote! {
            struct MissingDataContract {
                #[data_member(name = "bar")]
                bar_field: String,
                r#type: String,
            }
        };
        let descriptor = parse_type_descriptor(&input).unwrap();
        assert_eq!(descriptor.name, "MissingDataContract");
        assert!(!descriptor.has_contract_marker);
        assert_eq!(descriptor.members.len(), 2);
        assert_eq!(
            descriptor.members[0],
            MemberDescriptor::new("bar_field")
                .with_member_annotation(MemberAnnotation::new().named("bar"))
        );
        assert_eq!(descriptor.members[1], MemberDescriptor::new("type"));
    }

    #[test]
    fn test_struct_with_contract_and_all_annotations() {
        let input: syn::DeriveInput = syn::parse_quote! {
            #[derive(Debug)]
            #[data_contract(name = "Person")]
            struct PersonDto {
                #[data_member(name = "req", required)]
                required: String,
                #[serde(rename = "bar")]
                bar: String,
                #[data_member]
                #[serde(skip)]
                hidden: String,
                #[data_member]
                #[ignore_data_member]
                also_hidden: String,
                plain: String,
            }
        };
        let descriptor = parse_type_descriptor(&input).unwrap();
        assert_eq!(descriptor.name, "Person");
        assert!(descriptor.has_contract_marker);
        assert_eq!(
            descriptor.members,
            vec![
                MemberDescriptor::new("required")
                    .with_member_annotation(MemberAnnotation::new().named("req").required()),
                MemberDescriptor::new("bar").with_serialization_name("bar"),
                MemberDescriptor::new("hidden")
                    .with_member_annotation(MemberAnnotation::new())
                    .ignored(),
                MemberDescriptor::new("also_hidden")
                    .with_member_annotation(MemberAnnotation::new())
                    .ignored(),
                MemberDescriptor::new("plain"),
            ]
        );
    }

    #[test]
    fn test_rename_all_spells_declared_names() {
        let input: syn::DeriveInput = syn::parse_quote! {
            #[data_contract]
            #[serde(rename_all = "camelCase")]
            struct Invoice {
                #[data_member(required)]
                invoice_number: u32,
                #[data_member(name = "total")]
                amount_due: u64,
                #[serde(rename = "issued")]
                issued_at: String,
                internal_note: String,
                r#type: String,
            }
        };
        let descriptor = parse_type_descriptor(&input).unwrap();
        assert_eq!(
            descriptor.members,
            vec![
                MemberDescriptor::new("invoiceNumber")
                    .with_member_annotation(MemberAnnotation::new().required()),
                MemberDescriptor::new("amountDue")
                    .with_member_annotation(MemberAnnotation::new().named("total")),
                MemberDescriptor::new("issuedAt").with_serialization_name("issued"),
                MemberDescriptor::new("internalNote"),
                MemberDescriptor::new("type"),
            ]
        );
    }

    #[test]
    fn test_unknown_rename_all_rule_keeps_field_names() {
        let input: syn::DeriveInput = syn::parse_quote! {
            #[serde(rename_all = "Title Case")]
            struct S {
                first_name: String,
            }
        };
        let descriptor = parse_type_descriptor(&input).unwrap();
        assert_eq!(descriptor.members, vec![MemberDescriptor::new("first_name")]);
    }

    #[rstest]
    #[case("#[data_contract] struct Wrapper(i32, String);")]
    #[case("#[data_contract] struct Empty;")]
    #[case("struct Empty {}")]
    fn test_structs_without_named_fields(#[case] src: &str) {
        let input: syn::DeriveInput = syn::parse_str(src).unwrap();
        let descriptor = parse_type_descriptor(&input).unwrap();
        assert!(descriptor.members.is_empty());
    }

    #[test]
    fn test_generic_struct_uses_bare_ident() {
        let input: syn::DeriveInput = syn::parse_quote! {
            #[data_contract]
            struct Page<T> where T: Clone {
                #[data_member]
                items: Vec<T>,
            }
        };
        let descriptor = parse_type_descriptor(&input).unwrap();
        assert_eq!(descriptor.name, "Page");
        assert_eq!(descriptor.members.len(), 1);
    }

    #[rstest]
    #[case("enum Status { Active, Inactive }", "only be derived for structs")]
    #[case("union Bits { a: u32, b: f32 }", "only be derived for structs")]
    #[case(
        "struct S { #[data_member(order = 1)] a: i32 }",
        "unknown data_member argument"
    )]
    #[case(
        "#[data_contract(namespace = \"x\")] struct S { a: i32 }",
        "unknown data_contract argument"
    )]
    #[case(
        "struct S { #[data_member] #[data_member] a: i32 }",
        "duplicate `data_member` attribute"
    )]
    fn test_parse_errors(#[case] src: &str, #[case] message: &str) {
        let input: syn::DeriveInput = syn::parse_str(src).unwrap();
        let err = parse_type_descriptor(&input).err().expect("should fail");
        assert!(
            err.to_string().contains(message),
            "unexpected error: {err}"
        );
    }
}
