//! Derive macro for the `ErrorKind` trait of `pdiff-error`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Expr, Fields, Result};

/// Derives the `ErrorKind` trait for a struct with named fields, or a unit struct.
///
/// The text of the error is given by the `error` attribute:
///
/// ```
/// use pdiff_attrs::ErrorKind;
/// use pdiff_error::ErrorKind as _;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("unknown function `{}`", name),
///     label = "called here",
///     label = "defined nowhere",
///     help = "the available functions are `ln`, `sin` and `cos`",
/// )]
/// pub struct UnknownFunction {
///     name: String,
/// }
///
/// let kind = UnknownFunction { name: String::from("tan") };
/// assert_eq!(kind.message(), "unknown function `tan`");
/// assert_eq!(kind.labels(), vec!["called here", "defined nowhere"]);
/// assert!(kind.help().is_some());
/// ```
///
/// | Key       | Meaning                                                       | Times   |
/// | --------- | ------------------------------------------------------------- | ------- |
/// | `message` | The headline of the report.                                   | once    |
/// | `label`   | The text attached to the next span of the error.              | any     |
/// | `help`    | A line telling the user what they could do to fix the error.  | at most once |
///
/// Every value is an expression evaluating to something that implements `ToString`. The fields
/// of the struct are in scope by reference, so they can be used in the expressions.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// The contents of the `error` attribute.
#[derive(Default)]
struct ErrorText {
    message: Option<Expr>,
    labels: Vec<Expr>,
    help: Option<Expr>,
}

impl ErrorText {
    fn from_attrs(input: &DeriveInput) -> Result<Self> {
        let mut text = Self::default();
        for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("error")) {
            attr.parse_nested_meta(|meta| {
                let value = meta.value()?.parse::<Expr>()?;
                if meta.path.is_ident("message") {
                    text.message = Some(value);
                } else if meta.path.is_ident("label") {
                    text.labels.push(value);
                } else if meta.path.is_ident("help") {
                    text.help = Some(value);
                } else {
                    return Err(meta.error("expected `message`, `label` or `help`"));
                }
                Ok(())
            })?;
        }
        Ok(text)
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream2> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new(input.span(), "`ErrorKind` can only be derived for structs"));
    };

    // bring the fields into scope for the expressions of the attribute
    let bind_fields = match &data.fields {
        Fields::Named(fields) => {
            let names = fields.named.iter().map(|field| &field.ident);
            quote! {
                #[allow(unused_variables)]
                let Self { #(#names),* } = self;
            }
        },
        Fields::Unit => quote! {},
        Fields::Unnamed(fields) => return Err(syn::Error::new(
            fields.span(),
            "`ErrorKind` cannot be derived for tuple structs",
        )),
    };

    let text = ErrorText::from_attrs(&input)?;
    let Some(message) = text.message else {
        return Err(syn::Error::new(input.ident.span(), "missing `message` in `#[error(...)]`"));
    };
    let labels = text.labels.iter().map(|label| quote_spanned! { label.span() =>
        ToString::to_string(&(#label))
    });
    let help = text.help.map(|help| quote! {
        fn help(&self) -> Option<String> {
            #bind_fields
            Some(ToString::to_string(&(#help)))
        }
    });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics pdiff_error::ErrorKind for #name #ty_generics #where_clause {
            fn message(&self) -> String {
                #bind_fields
                ToString::to_string(&(#message))
            }

            fn labels(&self) -> Vec<String> {
                #bind_fields
                vec![#(#labels),*]
            }

            #help
        }
    })
}
