use proc_macro2::TokenStream;
use quote::quote;
use syn::{punctuated::Punctuated, Attribute, Data, DeriveInput, Expr, Fields, MetaNameValue, Result, Token};

/// The report texts given by the `#[error(...)]` attribute.
#[derive(Default)]
struct ReportTexts {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl ReportTexts {
    fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut texts = ReportTexts::default();
        let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("error")) else {
            return Ok(texts);
        };

        let tags = attr.parse_args_with(Punctuated::<MetaNameValue, Token![,]>::parse_terminated)?;
        for tag in tags {
            let slot = match tag.path.get_ident().map(ToString::to_string).as_deref() {
                Some("message") => &mut texts.message,
                Some("labels") => &mut texts.labels,
                Some("help") => &mut texts.help,
                _ => return Err(syn::Error::new_spanned(
                    &tag.path,
                    "expected one of `message`, `labels` or `help`",
                )),
            };
            *slot = Some(tag.value);
        }
        Ok(texts)
    }
}

/// Binds the named fields of `self` as locals, so the report texts can refer to them by name.
fn bind_fields(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(&input.ident, "`ErrorKind` can only be derived for structs"));
    };

    let name = &input.ident;
    match &data.fields {
        Fields::Named(fields) => {
            let names = fields.named.iter().map(|field| &field.ident);
            Ok(quote! { let #name { #(#names),* } = self; })
        },
        Fields::Unit => Ok(TokenStream::new()),
        Fields::Unnamed(fields) => Err(syn::Error::new_spanned(
            fields,
            "`ErrorKind` cannot be derived for tuple structs",
        )),
    }
}

/// Expands `#[derive(ErrorKind)]` on the given struct.
pub fn expand(input: &DeriveInput) -> Result<TokenStream> {
    let texts = ReportTexts::from_attrs(&input.attrs)?;
    let bindings = bind_fields(input)?;

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let message = texts.message.map_or_else(|| {
        let name = name.to_string();
        quote! { #name }
    }, |message| quote! { #message });
    let labels = texts.labels.map_or_else(|| quote! { [""] }, |labels| quote! { #labels });
    let help = texts.help.map(|help| quote! { let report = report.with_help(#help); });

    Ok(quote! {
        impl #impl_generics ErrorKind for #name #ty_generics #where_clause {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #[allow(unused_variables)]
            fn message(&self) -> String {
                #bindings
                (#message).to_string()
            }

            #[allow(unused_variables)]
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #bindings
                let labels = spans.iter().zip(#labels).map(|(span, text)| {
                    let label = ariadne::Label::new((src_id, span.clone()))
                        .with_color(mathexpr_error::EXPR);
                    if text.is_empty() {
                        label
                    } else {
                        label.with_message(text)
                    }
                });
                let start = spans.first().map_or(0, |span| span.start);
                let report = ariadne::Report::build(ariadne::ReportKind::Error, src_id, start)
                    .with_message(self.message())
                    .with_labels(labels);
                #help
                report.finish()
            }
        }
    })
}
