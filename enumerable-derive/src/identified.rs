//! Implementation of the `#[derive(Identified)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, Member, parse_macro_input};

/// Name of the helper attribute marking the identifier field.
const ID_ATTRIBUTE: &str = "id";

/// Main implementation of the Identified derive macro.
pub fn derive_identified_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let expanded = expand(&input).unwrap_or_else(syn::Error::into_compile_error);
    TokenStream::from(expanded)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fields = match &input.data {
        Data::Struct(data_struct) => &data_struct.fields,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Identified can only be derived for structs, not enums. Implement the trait by hand.",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Identified cannot be derived for unions.",
            ));
        }
    };

    let (member, field) = select_id_field(name, fields)?;
    let id_type = &field.ty;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::enumerable::Identified for #name #type_generics #where_clause {
            type Id = #id_type;

            #[inline]
            fn id(&self) -> &Self::Id {
                &self.#member
            }
        }
    })
}

/// Picks the identifier field: `#[id]` first, then the field named `id`,
/// then the only field of a newtype.
fn select_id_field<'a>(name: &syn::Ident, fields: &'a Fields) -> syn::Result<(Member, &'a Field)> {
    let marked: Vec<(usize, &Field)> = fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.attrs.iter().any(|attribute| attribute.path().is_ident(ID_ATTRIBUTE)))
        .collect();

    match marked.as_slice() {
        [(index, field)] => return Ok((member_of(*index, field), *field)),
        [_, (_, second), ..] => {
            return Err(syn::Error::new_spanned(
                second,
                "only one field may be marked with #[id]",
            ));
        }
        [] => {}
    }

    match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .enumerate()
            .find(|(_, field)| field.ident.as_ref().is_some_and(|ident| ident == ID_ATTRIBUTE))
            .map(|(index, field)| (member_of(index, field), field))
            .ok_or_else(|| {
                syn::Error::new_spanned(
                    name,
                    "Identified needs a field named `id` or a field marked with #[id]",
                )
            }),
        Fields::Unnamed(unnamed) if unnamed.unnamed.len() == 1 => {
            let field = &unnamed.unnamed[0];
            Ok((member_of(0, field), field))
        }
        Fields::Unnamed(_) => Err(syn::Error::new_spanned(
            name,
            "Identified on a tuple struct with several fields needs one field marked with #[id]",
        )),
        Fields::Unit => Err(syn::Error::new_spanned(
            name,
            "Identified cannot be derived for unit structs (structs with no fields).",
        )),
    }
}

fn member_of(index: usize, field: &Field) -> Member {
    field
        .ident
        .clone()
        .map_or_else(|| Member::Unnamed(index.into()), Member::Named)
}
