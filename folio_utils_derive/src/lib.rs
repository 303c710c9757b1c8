use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemFn, ReturnType, Type};

/// Instruments a function with a [`tracing`](https://docs.rs/tracing) span
/// that records the return value at trace level and emits a `call` event
/// whenever the function is entered. Functions returning a `Result` also
/// record the error at debug level.
///
/// Arguments are forwarded to `#[tracing::instrument]`, so `skip(...)`,
/// `fields(...)` etc. work as usual.
#[proc_macro_attribute]
pub fn trace_instrument(meta: TokenStream, input: TokenStream) -> TokenStream {
    let meta = proc_macro2::TokenStream::from(meta);
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = parse_macro_input!(input as ItemFn);

    let err = returns_result(&sig.output).then(|| quote!(err(level = "debug"),));

    quote! {
        #[::tracing::instrument(level = "debug", ret(level = "trace"), #err #meta)]
        #(#attrs)*
        #vis #sig {
            ::tracing::trace!("call");
            #block
        }
    }
    .into()
}

fn returns_result(output: &ReturnType) -> bool {
    let ReturnType::Type(_, ty) = output else {
        return false;
    };
    let Type::Path(path) = &**ty else {
        return false;
    };
    path.path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "Result")
}
