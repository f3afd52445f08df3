//! Implementation of the `#[lift]` attribute macro.
//!
//! # Generated Code Structure
//!
//! For
//!
//! ```text
//! #[lift]
//! fn foo(x: i64, y: Option<i64>, #[rest] rest: Args) -> i64 { ... }
//! ```
//!
//! the macro keeps `foo` (with `#[rest]` removed) and generates:
//!
//! ```text
//! fn foo_lifted() -> ::argshape::Function {
//!     ::argshape::Function::with_params("foo", &["x", "y"], move |__argshape_arguments: ::argshape::Args| {
//!         let x = <i64 as ::argshape::FromValue>::from_value(__argshape_arguments.get(0))
//!             .map_err(|mismatch| mismatch.in_call("foo", 0))?;
//!         let y = <Option<i64> as ::argshape::FromValue>::from_value(__argshape_arguments.get(1))
//!             .map_err(|mismatch| mismatch.in_call("foo", 1))?;
//!         let rest: Args = __argshape_arguments.into_iter().skip(2).collect();
//!         ::core::result::Result::Ok(::argshape::Value::from(foo(x, y, rest)))
//!     })
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::spanned::Spanned;
use syn::{FnArg, Ident, ItemFn, Pat, PatType, PathArguments, Type};

struct Parameter {
    identifier: Ident,
    parameter_type: Type,
}

struct Parameters {
    positional: Vec<Parameter>,
    rest: Option<Parameter>,
}

pub fn lift_impl(attribute: TokenStream, item: TokenStream) -> TokenStream {
    let expanded = match expand_lift(attribute.into(), item.into()) {
        Ok(tokens) => tokens,
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

pub fn expand_lift(attribute: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    if !attribute.is_empty() {
        return Err(syn::Error::new(
            attribute.span(),
            "#[lift] does not take arguments",
        ));
    }

    let mut function: ItemFn = syn::parse2(item)?;
    validate_signature(&function)?;
    let parameters = collect_parameters(&mut function)?;

    let lifted = generate_lifted_function(&function, &parameters);

    Ok(quote! {
        #function
        #lifted
    })
}

fn validate_signature(function: &ItemFn) -> syn::Result<()> {
    let signature = &function.sig;

    if let Some(asyncness) = &signature.asyncness {
        return Err(syn::Error::new(
            asyncness.span(),
            "#[lift] does not support async functions",
        ));
    }
    if let Some(constness) = &signature.constness {
        return Err(syn::Error::new(
            constness.span(),
            "#[lift] does not support const functions",
        ));
    }
    if let Some(unsafety) = &signature.unsafety {
        return Err(syn::Error::new(
            unsafety.span(),
            "#[lift] does not support unsafe functions",
        ));
    }
    if !signature.generics.params.is_empty() {
        return Err(syn::Error::new(
            signature.generics.span(),
            "#[lift] does not support generic functions",
        ));
    }
    if let Some(variadic) = &signature.variadic {
        return Err(syn::Error::new(
            variadic.span(),
            "#[lift] does not support C variadic functions",
        ));
    }

    Ok(())
}

fn take_rest_attribute(parameter: &mut PatType) -> bool {
    let before = parameter.attrs.len();
    parameter
        .attrs
        .retain(|attribute| !attribute.path().is_ident("rest"));
    parameter.attrs.len() != before
}

/// Accepts `Args` under any path, such as `argshape::Args`.
fn is_args_type(parameter_type: &Type) -> bool {
    match parameter_type {
        Type::Path(path) => path.qself.is_none()
            && path
                .path
                .segments
                .last()
                .is_some_and(|segment| {
                    segment.ident == "Args" && matches!(segment.arguments, PathArguments::None)
                }),
        Type::Paren(inner) => is_args_type(&inner.elem),
        Type::Group(inner) => is_args_type(&inner.elem),
        _ => false,
    }
}

fn collect_parameters(function: &mut ItemFn) -> syn::Result<Parameters> {
    let input_count = function.sig.inputs.len();
    let mut positional = Vec::with_capacity(input_count);
    let mut rest = None;

    for (index, input) in function.sig.inputs.iter_mut().enumerate() {
        let parameter = match input {
            FnArg::Receiver(receiver) => {
                return Err(syn::Error::new(
                    receiver.span(),
                    "#[lift] can only be applied to free functions",
                ));
            }
            FnArg::Typed(parameter) => parameter,
        };

        let is_rest = take_rest_attribute(parameter);

        let identifier = match parameter.pat.as_ref() {
            Pat::Ident(pattern) if pattern.by_ref.is_none() && pattern.subpat.is_none() => {
                pattern.ident.clone()
            }
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "#[lift] requires parameters to be plain identifiers",
                ));
            }
        };

        let collected = Parameter {
            identifier,
            parameter_type: parameter.ty.as_ref().clone(),
        };

        if is_rest {
            if index + 1 != input_count {
                return Err(syn::Error::new(
                    parameter.span(),
                    "#[rest] must be the last parameter",
                ));
            }
            if !is_args_type(&collected.parameter_type) {
                return Err(syn::Error::new(
                    parameter.ty.span(),
                    "#[rest] parameter must have type `Args`",
                ));
            }
            rest = Some(collected);
        } else {
            positional.push(collected);
        }
    }

    Ok(Parameters { positional, rest })
}

fn generate_lifted_function(function: &ItemFn, parameters: &Parameters) -> TokenStream2 {
    let visibility = &function.vis;
    let function_identifier = &function.sig.ident;
    let function_name = function_identifier.to_string();
    let lifted_identifier = format_ident!("{}_lifted", function_identifier);
    let documentation =
        format!("Dynamic [`Function`](::argshape::Function) form of [`{function_name}`].");

    let names: Vec<String> = parameters
        .positional
        .iter()
        .map(|parameter| parameter.identifier.to_string())
        .collect();

    let conversions = parameters
        .positional
        .iter()
        .enumerate()
        .map(|(position, parameter)| {
            let identifier = &parameter.identifier;
            let parameter_type = &parameter.parameter_type;
            quote! {
                let #identifier = <#parameter_type as ::argshape::FromValue>::from_value(
                    __argshape_arguments.get(#position),
                )
                .map_err(|mismatch| mismatch.in_call(#function_name, #position))?;
            }
        });

    let positional_count = parameters.positional.len();
    let rest_binding = parameters.rest.as_ref().map(|parameter| {
        let identifier = &parameter.identifier;
        let parameter_type = &parameter.parameter_type;
        quote! {
            let #identifier: #parameter_type = __argshape_arguments
                .into_iter()
                .skip(#positional_count)
                .collect();
        }
    });

    let call_arguments = parameters
        .positional
        .iter()
        .chain(parameters.rest.iter())
        .map(|parameter| &parameter.identifier);

    quote! {
        #[doc = #documentation]
        #visibility fn #lifted_identifier() -> ::argshape::Function {
            ::argshape::Function::with_params(
                #function_name,
                &[#(#names),*],
                move |__argshape_arguments: ::argshape::Args| {
                    #(#conversions)*
                    #rest_binding
                    ::core::result::Result::Ok(::argshape::Value::from(
                        #function_identifier(#(#call_arguments),*),
                    ))
                },
            )
        }
    }
}
