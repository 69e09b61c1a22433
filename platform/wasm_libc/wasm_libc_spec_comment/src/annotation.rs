use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{Attribute, Item, parse_quote};

pub const BASE_URL: &str = "https://pubs.opengroup.org/onlinepubs/9799919799";

pub fn expand(link_part: &str, mut item: Item) -> syn::Result<TokenStream> {
    let full_url = format!("{BASE_URL}/{link_part}");

    let doc_line1 = format!(" See [`{link_part}`] in the POSIX spec for details.");
    let doc_line3 = format!(" [`{link_part}`]: {full_url}");

    let mut new_attrs: Vec<Attribute> = vec![
        parse_quote!(#[doc = #doc_line1]),
        parse_quote!(#[doc = ""]),
        parse_quote!(#[doc = #doc_line3]),
    ];

    let attrs = attrs_mut(&mut item)?;
    new_attrs.append(attrs);
    *attrs = new_attrs;

    Ok(item.into_token_stream())
}

fn attrs_mut(item: &mut Item) -> syn::Result<&mut Vec<Attribute>> {
    match item {
        Item::Const(v) => Ok(&mut v.attrs),
        Item::Enum(v) => Ok(&mut v.attrs),
        Item::Fn(v) => Ok(&mut v.attrs),
        Item::Mod(v) => Ok(&mut v.attrs),
        Item::Static(v) => Ok(&mut v.attrs),
        Item::Struct(v) => Ok(&mut v.attrs),
        Item::Type(v) => Ok(&mut v.attrs),
        Item::Union(v) => Ok(&mut v.attrs),
        other => Err(syn::Error::new_spanned(
            other,
            "posix_spec can only be applied to constants, functions, modules, statics or type definitions",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_strings(item: &Item) -> Vec<String> {
        let attrs = match item {
            Item::Type(v) => &v.attrs,
            Item::Const(v) => &v.attrs,
            Item::Fn(v) => &v.attrs,
            _ => unreachable!(),
        };
        attrs
            .iter()
            .filter(|a| a.path().is_ident("doc"))
            .map(|a| match &a.meta {
                syn::Meta::NameValue(nv) => match &nv.value {
                    syn::Expr::Lit(syn::ExprLit {
                        lit: syn::Lit::Str(s),
                        ..
                    }) => s.value(),
                    _ => unreachable!(),
                },
                _ => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn test_expand_type_alias() {
        let item: Item = parse_quote!(
            pub type int_fast16_t = int16_t;
        );
        let expanded: Item = syn::parse2(expand("basedefs/stdint.h.html", item).unwrap()).unwrap();
        assert_eq!(
            doc_strings(&expanded),
            vec![
                " See [`basedefs/stdint.h.html`] in the POSIX spec for details.".to_string(),
                String::new(),
                format!(" [`basedefs/stdint.h.html`]: {BASE_URL}/basedefs/stdint.h.html"),
            ]
        );
    }

    #[test]
    fn test_expand_keeps_existing_docs_last() {
        let item: Item = parse_quote!(
            /// Maximum value of `size_t`.
            pub const SIZE_MAX: size_t = UINT32_MAX;
        );
        let expanded: Item = syn::parse2(expand("basedefs/stdint.h.html", item).unwrap()).unwrap();
        let docs = doc_strings(&expanded);
        assert_eq!(docs.len(), 4);
        assert_eq!(docs[3], " Maximum value of `size_t`.");
    }

    #[test]
    fn test_expand_function() {
        let item: Item = parse_quote!(
            pub extern "C" fn imaxabs(_j: intmax_t) -> intmax_t {
                todo!()
            }
        );
        let expanded: Item = syn::parse2(expand("functions/imaxabs.html", item).unwrap()).unwrap();
        assert!(doc_strings(&expanded)[2].ends_with("/functions/imaxabs.html"));
    }

    #[test]
    fn test_expand_rejects_use() {
        let item: Item = parse_quote!(
            use crate::stdint::int16_t;
        );
        assert!(expand("basedefs/stdint.h.html", item).is_err());
    }
}
