//! Arguments of the `data_contract` and `data_member` attributes.

/// `#[data_contract(name = "...")]`
#[derive(Default)]
pub struct DataContractArgs {
    pub name: Option<syn::LitStr>,
}

impl syn::parse::Parse for DataContractArgs {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut name: Option<syn::LitStr> = None;

        while !input.is_empty() {
            let ident: syn::Ident = input.parse()?;
            match ident.to_string().as_str() {
                "name" => {
                    if name.is_some() {
                        return Err(syn::Error::new(ident.span(), "duplicate `name` argument"));
                    }
                    input.parse::<syn::Token![=]>()?;
                    name = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown data_contract argument: `{other}`. Expected `name`"),
                    ));
                }
            }

            if input.peek(syn::Token![,]) {
                input.parse::<syn::Token![,]>()?;
            } else {
                break;
            }
        }

        if !input.is_empty() {
            return Err(input.error("expected `,`"));
        }

        Ok(Self { name })
    }
}

/// `#[data_member(name = "...", required)]`
///
/// `required` may also be written `required = true` / `required = false`.
#[derive(Default)]
pub struct DataMemberArgs {
    pub name: Option<syn::LitStr>,
    pub required: Option<bool>,
}

impl syn::parse::Parse for DataMemberArgs {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut name: Option<syn::LitStr> = None;
        let mut required: Option<bool> = None;

        while !input.is_empty() {
            let ident: syn::Ident = input.parse()?;
            match ident.to_string().as_str() {
                "name" => {
                    if name.is_some() {
                        return Err(syn::Error::new(ident.span(), "duplicate `name` argument"));
                    }
                    input.parse::<syn::Token![=]>()?;
                    name = Some(input.parse()?);
                }
                "required" => {
                    if required.is_some() {
                        return Err(syn::Error::new(
                            ident.span(),
                            "duplicate `required` argument",
                        ));
                    }
                    if input.peek(syn::Token![=]) {
                        input.parse::<syn::Token![=]>()?;
                        let lit: syn::LitBool = input.parse()?;
                        required = Some(lit.value);
                    } else {
                        required = Some(true);
                    }
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!(
                            "unknown data_member argument: `{other}`. Expected `name` or `required`"
                        ),
                    ));
                }
            }

            if input.peek(syn::Token![,]) {
                input.parse::<syn::Token![,]>()?;
            } else {
                break;
            }
        }

        if !input.is_empty() {
            return Err(input.error("expected `,`"));
        }

        Ok(Self { name, required })
    }
}
