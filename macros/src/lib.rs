//! Derive macros for the TodoMVC store
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `todomvc_core::action::Action` for action enums
//!
//! # Example
//!
//! ```ignore
//! use todomvc_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     #[command]
//!     AddTodo { text: String },
//!
//!     #[event]
//!     TodoAdded { id: u64, text: String },
//! }
//!
//! assert!(TodoAction::AddTodo { text: "test".into() }.is_command());
//! assert_eq!(TodoAction::TodoAdded { id: 1, text: "test".into() }.name(), "TodoAdded");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Variant};

/// Derive macro for Action enums
///
/// Implements `todomvc_core::action::Action`:
/// - `kind()` - `ActionKind::Command` or `ActionKind::Event` per variant marker
/// - `name()` - The variant name, for logs and metric labels
///
/// # Attributes
///
/// - `#[command]` - Mark a variant as a command
/// - `#[event]` - Mark a variant as an event
///
/// Every variant must carry exactly one of the two markers.
///
/// # Panics
///
/// This macro produces a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - A variant has both `#[command]` and `#[event]`
/// - A variant has neither
#[proc_macro_derive(Action, attributes(command, event))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_action(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Builds the `Action` impl, or the error to report at the offending tokens
fn expand_action(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "#[derive(Action)] can only be used on enums",
        ));
    };

    let mut kind_arms = Vec::with_capacity(data_enum.variants.len());
    let mut name_arms = Vec::with_capacity(data_enum.variants.len());

    for variant in &data_enum.variants {
        let is_command = has_attribute(&variant.attrs, "command");
        let is_event = has_attribute(&variant.attrs, "event");

        let kind = match (is_command, is_event) {
            (true, false) => quote! { ::todomvc_core::action::ActionKind::Command },
            (false, true) => quote! { ::todomvc_core::action::ActionKind::Event },
            (true, true) => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "Variant cannot be both #[command] and #[event]",
                ));
            }
            (false, false) => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "Variant must be marked #[command] or #[event]",
                ));
            }
        };

        let pattern = variant_pattern(variant);
        let variant_name = variant.ident.to_string();
        kind_arms.push(quote! { #pattern => #kind, });
        name_arms.push(quote! { #pattern => #variant_name, });
    }

    // An empty enum has no values, so `match *self {}` is exhaustive
    let (kind_body, name_body) = if data_enum.variants.is_empty() {
        (quote! { match *self {} }, quote! { match *self {} })
    } else {
        (
            quote! { match self { #(#kind_arms)* } },
            quote! { match self { #(#name_arms)* } },
        )
    };

    Ok(quote! {
        impl #impl_generics ::todomvc_core::action::Action for #name #ty_generics #where_clause {
            fn kind(&self) -> ::todomvc_core::action::ActionKind {
                #kind_body
            }

            fn name(&self) -> &'static str {
                #name_body
            }
        }
    })
}

/// Wildcard pattern matching any value of the variant
fn variant_pattern(variant: &Variant) -> proc_macro2::TokenStream {
    let ident = &variant.ident;
    match &variant.fields {
        Fields::Named(_) => quote! { Self::#ident { .. } },
        Fields::Unnamed(_) => quote! { Self::#ident(..) },
        Fields::Unit => quote! { Self::#ident },
    }
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn error_of(input: &DeriveInput) -> String {
        match expand_action(input) {
            Ok(tokens) => panic!("expected a compile error, got: {tokens}"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn rejects_structs() {
        let input: DeriveInput = parse_quote! {
            struct NotAnEnum {
                value: u32,
            }
        };
        assert_eq!(error_of(&input), "#[derive(Action)] can only be used on enums");
    }

    #[test]
    fn rejects_variant_marked_twice() {
        let input: DeriveInput = parse_quote! {
            enum Confused {
                #[command]
                #[event]
                Both,
            }
        };
        assert_eq!(
            error_of(&input),
            "Variant cannot be both #[command] and #[event]"
        );
    }

    #[test]
    fn rejects_unmarked_variant() {
        let input: DeriveInput = parse_quote! {
            enum Incomplete {
                #[command]
                Start,
                Finish,
            }
        };
        assert_eq!(
            error_of(&input),
            "Variant must be marked #[command] or #[event]"
        );
    }

    #[test]
    fn expands_marked_variants() {
        let input: DeriveInput = parse_quote! {
            enum Counter {
                #[command]
                Increment { by: u32 },
                #[event]
                Incremented(u32),
            }
        };
        let expanded = expand_action(&input).map(|tokens| tokens.to_string());

        let Ok(expanded) = expanded else {
            panic!("expected the impl to expand");
        };
        assert!(expanded.contains("ActionKind :: Command"));
        assert!(expanded.contains("ActionKind :: Event"));
        assert!(expanded.contains("\"Incremented\""));
    }
}
