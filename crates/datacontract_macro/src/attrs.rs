//! Attribute extraction for type descriptors.
//!
//! Reads the annotations that drive member selection:
//! - `#[data_contract]` on the type (contract marker, optional schema name)
//! - `#[data_member]` on a field (member annotation)
//! - `#[serde(rename = "...")]` on a field (serialization annotation)
//! - `#[serde(rename_all = "...")]` on the type (how declared names are spelled)
//! - `#[serde(skip)]`, `#[serde(skip_serializing)]` and `#[ignore_data_member]`
//!   on a field (ignore annotation)
//!
//! `data_contract` and `data_member` belong to this crate, so malformed
//! arguments are reported as errors. `serde` attributes are validated by serde's
//! own derive; unrelated or malformed serde keys are skipped here.

use datacontract_core::MemberAnnotation;
use syn::meta::ParseNestedMeta;

use crate::args::{DataContractArgs, DataMemberArgs};

/// Strips the `r#` prefix from raw identifiers.
/// E.g., `r#type` becomes `type`.
pub fn strip_raw_prefix(ident: &str) -> &str {
    ident.strip_prefix("r#").unwrap_or(ident)
}

/// Find exactly one attribute named `name`.
fn find_single<'a>(
    attrs: &'a [syn::Attribute],
    name: &str,
) -> syn::Result<Option<&'a syn::Attribute>> {
    let mut found: Option<&syn::Attribute> = None;
    for attr in attrs {
        if attr.path().is_ident(name) {
            if found.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    format!("duplicate `{name}` attribute"),
                ));
            }
            found = Some(attr);
        }
    }
    Ok(found)
}

/// Parse the arguments of a marker-style attribute that may be written bare
/// (`#[attr]`) or with a list (`#[attr(...)]`).
fn parse_marker_args<T>(attr: &syn::Attribute) -> syn::Result<T>
where
    T: syn::parse::Parse + Default,
{
    match &attr.meta {
        syn::Meta::Path(_) => Ok(T::default()),
        syn::Meta::List(_) => attr.parse_args(),
        syn::Meta::NameValue(nv) => Err(syn::Error::new_spanned(
            nv,
            "expected a parenthesized argument list",
        )),
    }
}

/// Extract the type-level contract marker.
///
/// Returns `None` if the type has no `#[data_contract]` attribute.
pub fn extract_data_contract(attrs: &[syn::Attribute]) -> syn::Result<Option<DataContractArgs>> {
    find_single(attrs, "data_contract")?
        .map(parse_marker_args::<DataContractArgs>)
        .transpose()
}

/// Extract the member annotation from field attributes.
///
/// Returns `None` if the field has no `#[data_member]` attribute.
pub fn extract_data_member(attrs: &[syn::Attribute]) -> syn::Result<Option<MemberAnnotation>> {
    let Some(attr) = find_single(attrs, "data_member")? else {
        return Ok(None);
    };
    let args: DataMemberArgs = parse_marker_args(attr)?;
    Ok(Some(MemberAnnotation {
        name: args.name.map(|lit| lit.value()),
        is_required: args.required.unwrap_or(false),
    }))
}

/// Returns true if `#[ignore_data_member]` is present
pub fn extract_ignore_data_member(attrs: &[syn::Attribute]) -> syn::Result<bool> {
    match find_single(attrs, "ignore_data_member")? {
        None => Ok(false),
        Some(attr) => {
            attr.meta.require_path_only()?;
            Ok(true)
        }
    }
}

/// Consume the value of a nested meta item we are not interested in,
/// so that `parse_nested_meta` can continue with the next item.
fn skip_meta_value(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

/// Serialize-side value of a serde key that is written either as
/// `key = "x"` or as `key(serialize = "x", deserialize = "y")`.
fn extract_serialize_value(attrs: &[syn::Attribute], key: &str) -> Option<String> {
    let mut found = None;
    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }
        let _ = attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident(key) {
                return skip_meta_value(&meta);
            }
            if meta.input.peek(syn::Token![=]) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                found = Some(lit.value());
                return Ok(());
            }
            meta.parse_nested_meta(|inner| {
                if inner.path.is_ident("serialize") {
                    let lit: syn::LitStr = inner.value()?.parse()?;
                    found = Some(lit.value());
                    Ok(())
                } else {
                    skip_meta_value(&inner)
                }
            })
        });
    }
    found
}

/// Extract the serialize-side rename from field attributes.
///
/// Handles `#[serde(rename = "x")]` and `#[serde(rename(serialize = "x"))]`.
/// A deserialize-only rename does not change the serialized name and is
/// ignored.
pub fn extract_field_rename(attrs: &[syn::Attribute]) -> Option<String> {
    extract_serialize_value(attrs, "rename")
}

/// Extract the container-level `#[serde(rename_all = "...")]` rule
pub fn extract_rename_all(attrs: &[syn::Attribute]) -> Option<String> {
    extract_serialize_value(attrs, "rename_all")
}

/// Spell a snake_case field name the way a serde `rename_all` rule does.
///
/// Returns `None` for a rule serde does not know; serde's own derive reports
/// that one.
pub fn rename_field(field_name: &str, rule: &str) -> Option<String> {
    let renamed = match rule {
        "lowercase" | "snake_case" => field_name.to_string(),
        "UPPERCASE" | "SCREAMING_SNAKE_CASE" => field_name.to_ascii_uppercase(),
        "PascalCase" => pascal_case(field_name),
        "camelCase" => {
            let pascal = pascal_case(field_name);
            let mut chars = pascal.chars();
            match chars.next() {
                Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
                None => pascal,
            }
        }
        "kebab-case" => field_name.replace('_', "-"),
        "SCREAMING-KEBAB-CASE" => field_name.to_ascii_uppercase().replace('_', "-"),
        _ => return None,
    };
    Some(renamed)
}

fn pascal_case(field_name: &str) -> String {
    let mut out = String::with_capacity(field_name.len());
    let mut capitalize = true;
    for ch in field_name.chars() {
        if ch == '_' {
            capitalize = true;
        } else if capitalize {
            out.push(ch.to_ascii_uppercase());
            capitalize = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Extract skip attribute from field attributes.
/// Returns true if `#[serde(skip)]` or `#[serde(skip_serializing)]` is present.
pub fn extract_skip(attrs: &[syn::Attribute]) -> bool {
    let mut found = false;
    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
                found = true;
                Ok(())
            } else {
                skip_meta_value(&meta)
            }
        });
    }
    found
}
