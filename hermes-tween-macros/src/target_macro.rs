use std::collections::HashSet;

use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, GenericArgument, LitStr, PathArguments, Type};

const NUMERIC_TYPES: [&str; 14] = [
    "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128", "isize", "f32",
    "f64",
];

/// How a field is exposed as a property.
#[derive(Debug, PartialEq)]
enum FieldKind {
    /// Read and written as a number.
    Number,
    /// Read as an array, never written.
    List,
}

struct TargetField {
    ident: Ident,
    property: String,
    kind: FieldKind,
    ty: Type,
}

/// Expands `#[derive(Target)]`, referring to the tween crate through `crate_path`.
pub fn expand_target(input: DeriveInput, crate_path: &TokenStream2) -> syn::Result<TokenStream2> {
    let fields = target_fields(&input)?;
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let getters = fields.iter().map(|field| {
        let TargetField {
            ident, property, ..
        } = field;
        match field.kind {
            FieldKind::Number => quote! {
                #property => ::core::option::Option::Some(
                    #crate_path::utils::Value::Number(self.#ident as f64)
                ),
            },
            FieldKind::List => quote! {
                #property => ::core::option::Option::Some(
                    #crate_path::utils::Value::Array(
                        self.#ident.iter().map(|value| *value as f64).collect()
                    )
                ),
            },
        }
    });
    let setters = fields
        .iter()
        .filter(|field| field.kind == FieldKind::Number)
        .map(|field| {
            let TargetField {
                ident,
                property,
                ty,
                ..
            } = field;
            quote! {
                #property => self.#ident = value as #ty,
            }
        });

    Ok(quote! {
        impl #impl_generics #crate_path::animations::Target for #name #ty_generics #where_clause {
            fn get(&self, property: &str) -> ::core::option::Option<#crate_path::utils::Value> {
                match property {
                    #(#getters)*
                    _ => ::core::option::Option::None,
                }
            }

            #[allow(unused_variables)]
            fn set(&mut self, property: &str, value: f64) {
                match property {
                    #(#setters)*
                    _ => {}
                }
            }
        }
    })
}

fn target_fields(input: &DeriveInput) -> syn::Result<Vec<TargetField>> {
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "#[derive(Target)] requires a struct with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "#[derive(Target)] only supports structs",
            ))
        }
    };

    let mut fields = vec![];
    let mut properties = HashSet::new();
    for field in named {
        let Some(ident) = &field.ident else {
            continue;
        };

        let mut skip = false;
        let mut rename = None;
        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("target")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skip = true;
                    return Ok(());
                }
                if meta.path.is_ident("rename") {
                    let name: LitStr = meta.value()?.parse()?;
                    rename = Some(name.value());
                    return Ok(());
                }
                Err(meta.error("unsupported target attribute, expected `skip` or `rename = \"...\"`"))
            })?;
        }
        if skip {
            continue;
        }

        let kind = field_kind(&field.ty).ok_or_else(|| {
            syn::Error::new_spanned(
                &field.ty,
                "unsupported field type: expected a numeric primitive or a Vec of them (use #[target(skip)] to ignore the field)",
            )
        })?;
        let property = rename.unwrap_or_else(|| ident.unraw().to_string());
        if !properties.insert(property.clone()) {
            return Err(syn::Error::new_spanned(
                ident,
                format!("duplicate target property `{}`", property),
            ));
        }
        fields.push(TargetField {
            ident: ident.clone(),
            property,
            kind,
            ty: field.ty.clone(),
        });
    }
    Ok(fields)
}

fn field_kind(ty: &Type) -> Option<FieldKind> {
    if is_numeric(ty) {
        return Some(FieldKind::Number);
    }
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Vec" {
        return None;
    }
    match &segment.arguments {
        PathArguments::AngleBracketed(arguments) if arguments.args.len() == 1 => {
            match arguments.args.first() {
                Some(GenericArgument::Type(inner)) if is_numeric(inner) => Some(FieldKind::List),
                _ => None,
            }
        }
        _ => None,
    }
}

fn is_numeric(ty: &Type) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .get_ident()
            .map(|ident| NUMERIC_TYPES.contains(&ident.to_string().as_str()))
            .unwrap_or_default(),
        _ => false,
    }
}
