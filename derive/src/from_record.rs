use std::collections::HashSet;

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, Field, Fields, Ident, LitStr, Result, Type,
    parse::{Parse, ParseStream},
    spanned::Spanned,
};

pub(crate) fn expand_from_record(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(Error::new(
            input.span(),
            "`FromRecord` may only be derived on structs.",
        ));
    };

    let Fields::Named(fields) = &data.fields else {
        return Err(Error::new(
            input.span(),
            "`FromRecord` may only be derived on structs with named fields.",
        ));
    };

    let fields = fields
        .named
        .iter()
        .map(FieldMetadata::parse)
        .collect::<Result<Vec<_>>>()?;

    let mut seen = HashSet::new();

    for field in &fields {
        if let Some(source) = &field.source {
            if !seen.insert(source.label.value()) {
                Err(Error::new(
                    source.label.span(),
                    "Field labels must be unique.",
                ))?
            }
        }
    }

    let initializers = fields.iter().map(|field| {
        let name = &field.name;

        match &field.source {
            Some(FieldSource {
                label,
                is_optional: true,
            }) => quote! { #name: index.get(record, #label)? },
            Some(FieldSource {
                label,
                is_optional: false,
            }) => quote! { #name: index.require(record, #label)? },
            None => quote! { #name: ::core::default::Default::default() },
        }
    });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::aileron::access::FromRecord for #name #ty_generics #where_clause {
            fn from_record(
                index: &::aileron::format::FieldIndex,
                record: &[u8],
            ) -> ::core::result::Result<Self, ::aileron::access::Error> {
                ::core::result::Result::Ok(Self {
                    #(#initializers,)*
                })
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
struct FieldMetadata {
    name: Ident,
    source: Option<FieldSource>,
}

#[derive(Debug)]
struct FieldSource {
    label: LitStr,
    is_optional: bool,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Self> {
        let name = field.ident.clone().unwrap();

        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("field")) else {
            return Ok(Self { name, source: None });
        };

        let FieldAttribute { label } = attr.meta.require_list()?.parse_args()?;

        if label.value().is_empty() {
            Err(Error::new_spanned(&label, "Field label must not be empty."))?
        }

        let is_optional = match &field.ty {
            Type::Path(path) => path
                .path
                .segments
                .last()
                .is_some_and(|segment| segment.ident == "Option"),
            _ => false,
        };

        Ok(Self {
            name,
            source: Some(FieldSource { label, is_optional }),
        })
    }
}

#[derive(Debug)]
struct FieldAttribute {
    label: LitStr,
}

impl Parse for FieldAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let label = input.parse::<LitStr>().map_err(|err| {
            Error::new(err.span(), "Field identifier must be a string literal label.")
        })?;

        Ok(Self { label })
    }
}
