use proc_macro::TokenStream;
use syn::{LitStr, parse_macro_input};

mod annotation;

/// Prepends a doc paragraph linking the given page of the POSIX specification.
///
/// ```ignore
/// #[posix_spec("basedefs/stdint.h.html")]
/// pub type int_fast16_t = int16_t;
/// ```
#[proc_macro_attribute]
pub fn posix_spec(attr: TokenStream, item: TokenStream) -> TokenStream {
    let link_part = parse_macro_input!(attr as LitStr);
    let item = parse_macro_input!(item as syn::Item);

    annotation::expand(&link_part.value(), item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
