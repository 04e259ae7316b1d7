mod args;
mod attrs;
mod codegen;
mod describe_impl;
mod descriptor;

use proc_macro::TokenStream;

/// Derive macro for `DescribeType`.
///
/// Helper attributes:
/// - `#[data_contract]` / `#[data_contract(name = "...")]` on the struct
/// - `#[data_member]` / `#[data_member(name = "...", required)]` on a field
/// - `#[ignore_data_member]` on a field
/// - `#[serde(rename = "...")]`, `#[serde(skip)]` on a field
/// - `#[serde(rename_all = "...")]` on the struct
#[proc_macro_derive(
    DescribeType,
    attributes(data_contract, data_member, ignore_data_member, serde)
)]
pub fn derive_describe_type(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    match describe_impl::process_derive_describe(&input) {
        Ok(expanded) => expanded.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
