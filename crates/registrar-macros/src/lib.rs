//! # Registrar Macros
//!
//! Procedural macros for declaring factory entities.
//!
//! ## Available Macros
//!
//! - `#[registered]` - Stamp a type with the name it registers under

use darling::{ast::NestedMeta, FromMeta};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Registered attribute arguments.
#[derive(Debug, FromMeta)]
struct RegisteredArgs {
    name: String,
}

/// Stamp a type with its registered name.
///
/// The item is emitted unchanged, together with an implementation of
/// `registrar_core::Registered`. Register it with `Factory::register::<T>()`.
///
/// # Example
///
/// ```ignore
/// use registrar_core::registered;
///
/// #[registered(name = "csv")]
/// struct CsvReader {
///     delimiter: char,
/// }
///
/// Readers::register::<CsvReader>();
/// ```
#[proc_macro_attribute]
pub fn registered(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attr_args = match NestedMeta::parse_meta_list(attr.into()) {
        Ok(v) => v,
        Err(e) => return TokenStream::from(e.to_compile_error()),
    };

    let args = match RegisteredArgs::from_list(&attr_args) {
        Ok(v) => v,
        Err(e) => return TokenStream::from(e.write_errors()),
    };

    let input = parse_macro_input!(item as DeriveInput);

    if args.name.is_empty() {
        return syn::Error::new_spanned(&input.ident, "registered name must not be empty")
            .to_compile_error()
            .into();
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let name = &args.name;

    let expanded = quote! {
        #input

        impl #impl_generics ::registrar_core::Registered for #ident #ty_generics #where_clause {
            const REGISTERED_NAME: &'static str = #name;
        }
    };

    TokenStream::from(expanded)
}
