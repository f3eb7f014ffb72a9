use proc_macro::TokenStream;
use syn::spanned::Spanned;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Token};

use proc_macro2::Span;
use quote::quote;

#[inline]
fn default_trait_path() -> syn::Path {
    syn::parse_quote!(::rect_area::HasArea)
}

#[derive(Debug)]
struct Delegate(pub syn::Member, pub syn::Path);

impl syn::parse::Parse for Delegate {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(syn::Error::new(
                Span::call_site(),
                "expected the field to delegate to, for example: `#[delegate_area(rect)]`",
            ));
        }

        let member = input.parse::<syn::Member>()?;

        let mut path = default_trait_path();
        if input.parse::<Token![,]>().is_ok() {
            // `#[delegate_area(rect, "crate::HasArea")]`
            let lit = input.parse::<syn::LitStr>().map_err(|e| {
                syn::Error::new(e.span(), "second argument must be the trait path as a string")
            })?;
            path = lit.parse::<syn::Path>()?;
        }

        if !input.is_empty() {
            return Err(input.error("unexpected tokens after trait path"));
        }

        Ok(Delegate(member, path))
    }
}

fn field_type<'a>(item: &'a DeriveInput, member: &syn::Member) -> syn::Result<&'a syn::Type> {
    let data = match &item.data {
        Data::Struct(data) => data,
        _ => {
            return Err(syn::Error::new(
                item.ident.span(),
                "delegate_area can only be used on structs",
            ))
        }
    };

    let found = match (&data.fields, member) {
        (Fields::Named(fields), syn::Member::Named(name)) => fields
            .named
            .iter()
            .find(|f| f.ident.as_ref() == Some(name)),
        (Fields::Unnamed(fields), syn::Member::Unnamed(index)) => {
            fields.unnamed.iter().nth(index.index as usize)
        }
        _ => None,
    };

    found.map(|f| &f.ty).ok_or_else(|| {
        syn::Error::new(
            member.span(),
            format!("no such field on `{}`", item.ident),
        )
    })
}

///
/// Implements `HasArea` for a struct by forwarding `area()` to one of its
/// fields.
///
/// ```ignore
/// #[delegate_area(rect)]
/// #[derive(Debug)]
/// pub struct Square {
///     rect: Rectangle,
/// }
/// ```
///
/// will expand to
///
/// ```ignore
/// #[derive(Debug)]
/// pub struct Square {
///     rect: Rectangle,
/// }
/// impl ::rect_area::HasArea for Square {
///     #[inline]
///     fn area(&self) -> f64 { <Rectangle as ::rect_area::HasArea>::area(&self.rect) }
/// }
/// ```
///
/// An optional second argument overrides the trait path, for example
/// `#[delegate_area(0, "crate::HasArea")]` on a tuple struct.
///
#[proc_macro_attribute]
pub fn delegate_area(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attrs = parse_macro_input!(attr as Delegate);
    let item = parse_macro_input!(item as DeriveInput);

    let member = attrs.0;
    let trait_path = attrs.1;

    let field_ty = match field_type(&item, &member) {
        Ok(ty) => ty,
        Err(e) => {
            let err = e.to_compile_error();
            return quote! {
                #item
                #err
            }
            .into();
        }
    };

    let item_name = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();

    (quote! {
        #item

        impl #impl_generics #trait_path for #item_name #ty_generics #where_clause {
            #[inline]
            fn area(&self) -> f64 {
                <#field_ty as #trait_path>::area(&self.#member)
            }
        }
    })
    .into()
}
