//! Procedural macros for the tinytest framework
//!
//! - `#[def_test]` turns a function into a test unit type.
//! - `declare_registry!` instantiates units and records in a fixed order and
//!   binds a registry holding them.
//! - `test_main!` generates a hosted `main` that runs such a registry.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{FnArg, Ident, ItemFn, PatType, Path, ReturnType, Token, parse_macro_input};

/// Arguments of `#[def_test(...)]`: an optional suite name and an optional
/// `fixture = Type`.
#[derive(Default)]
struct TestArgs {
    suite: Option<String>,
    fixture: Option<Path>,
}

impl Parse for TestArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = TestArgs::default();

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            if ident == "fixture" && input.peek(Token![=]) {
                input.parse::<Token![=]>()?;
                args.fixture = Some(input.parse()?);
            } else if args.suite.is_none() && args.fixture.is_none() {
                args.suite = Some(ident.to_string());
            } else {
                return Err(syn::Error::new(ident.span(), "unexpected test argument"));
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

/// Marks a function as a test.
///
/// # Example
///
/// ```rust,ignore
/// use tinytest::{def_test, Fixture, TestContext};
///
/// #[def_test(math)]
/// fn addition(t: &TestContext) {
///     t.expect_eq(2 + 2, 4);
/// }
///
/// #[derive(Default)]
/// struct Counter { value: u32 }
///
/// impl Fixture for Counter {
///     fn setup(&mut self) { self.value = 1; }
/// }
///
/// #[def_test(fixture = Counter)]
/// fn starts_at_one(counter: &mut Counter, t: &TestContext) {
///     t.expect_eq(counter.value, 1);
/// }
/// ```
///
/// The function is replaced by a type of the same name implementing
/// `TestUnit` and `DeclaredTest`. List that type in `declare_registry!` or
/// `test_main!` to run it.
///
/// # Attributes
/// - `#[def_test]` - suite is the enclosing module path
/// - `#[def_test(suite)]` - suite is `suite`
/// - `#[def_test(fixture = Type)]` - fixture test, suite is the fixture's name
/// - `#[def_test(suite, fixture = Type)]` - fixture test in `suite`
#[proc_macro_attribute]
pub fn def_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as TestArgs);
    let input = parse_macro_input!(item as ItemFn);

    expand_test(args, input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_test(args: TestArgs, input: ItemFn) -> syn::Result<TokenStream2> {
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = input;

    if !matches!(sig.output, ReturnType::Default) {
        return Err(syn::Error::new_spanned(
            &sig.output,
            "test functions return nothing; failures are recorded by matchers",
        ));
    }
    if !sig.generics.params.is_empty() || sig.asyncness.is_some() {
        return Err(syn::Error::new_spanned(
            &sig,
            "test functions cannot be generic or async",
        ));
    }

    let name = &sig.ident;
    let name_str = name.to_string();
    let params = sig
        .inputs
        .iter()
        .map(|arg| match arg {
            FnArg::Typed(typed) => Ok(typed),
            FnArg::Receiver(recv) => Err(syn::Error::new_spanned(recv, "unexpected `self`")),
        })
        .collect::<syn::Result<Vec<&PatType>>>()?;

    let Some(fixture) = args.fixture else {
        let ctx = match params.as_slice() {
            [] => quote!(_: &::tinytest::TestContext<'_, '_>),
            [ctx] => quote!(#ctx),
            _ => {
                return Err(syn::Error::new_spanned(
                    &sig.inputs,
                    "expected `fn name(t: &TestContext)`",
                ));
            }
        };
        let suite = match args.suite {
            Some(suite) => quote!(#suite),
            None => quote!(::core::module_path!()),
        };

        return Ok(quote! {
            #(#attrs)*
            #[allow(non_camel_case_types)]
            #vis struct #name;

            impl ::tinytest::TestUnit for #name {
                fn execute(&mut self, #ctx) #block
            }

            impl ::tinytest::DeclaredTest for #name {
                const SUITE: &'static str = #suite;
                const NAME: &'static str = #name_str;

                fn instantiate() -> Self {
                    #name
                }
            }
        });
    };

    let (fx, ctx) = match params.as_slice() {
        [fx] => (quote!(#fx), quote!(_: &::tinytest::TestContext<'_, '_>)),
        [fx, ctx] => (quote!(#fx), quote!(#ctx)),
        _ => {
            return Err(syn::Error::new_spanned(
                &sig.inputs,
                "expected `fn name(fixture: &mut Fixture, t: &TestContext)`",
            ));
        }
    };
    let suite = match args.suite {
        Some(suite) => suite,
        None => fixture
            .segments
            .last()
            .map(|segment| segment.ident.to_string())
            .unwrap_or_default(),
    };

    Ok(quote! {
        #(#attrs)*
        #[allow(non_camel_case_types)]
        #vis struct #name {
            fixture: #fixture,
        }

        impl ::tinytest::TestUnit for #name {
            fn setup(&mut self) {
                ::tinytest::Fixture::setup(&mut self.fixture)
            }

            fn teardown(&mut self) {
                ::tinytest::Fixture::teardown(&mut self.fixture)
            }

            fn execute(&mut self, #ctx) {
                let #fx = &mut self.fixture;
                #block
            }
        }

        impl ::tinytest::DeclaredTest for #name {
            const SUITE: &'static str = #suite;
            const NAME: &'static str = #name_str;

            fn instantiate() -> Self {
                Self {
                    fixture: ::core::default::Default::default(),
                }
            }
        }
    })
}

/// `registry; test, test, ...`
struct RegistryDecl {
    name: Ident,
    tests: Punctuated<Path, Token![,]>,
}

impl Parse for RegistryDecl {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name = input.parse()?;
        input.parse::<Token![;]>()?;
        let tests = Punctuated::parse_terminated(input)?;
        Ok(RegistryDecl { name, tests })
    }
}

/// Declares one unit and one record per listed test, in list order, then
/// binds a `tinytest::Registry` named by the first argument with every record
/// appended.
///
/// Must be used in statement position; the units and records live until the
/// end of the enclosing block.
///
/// ```rust,ignore
/// tinytest::declare_registry!(registry; math::addition, math::starts_at_one);
/// let failed = tinytest::run_tests(&registry);
/// ```
#[proc_macro]
pub fn declare_registry(input: TokenStream) -> TokenStream {
    let decl = parse_macro_input!(input as RegistryDecl);
    let tests: Vec<Path> = decl.tests.into_iter().collect();

    expand_registry(&decl.name, &tests).into()
}

fn expand_registry(name: &Ident, tests: &[Path]) -> TokenStream2 {
    let units: Vec<Ident> = (0..tests.len())
        .map(|i| format_ident!("__tinytest_unit_{}", i))
        .collect();
    let cases: Vec<Ident> = (0..tests.len())
        .map(|i| format_ident!("__tinytest_case_{}", i))
        .collect();

    // Records are bound before the registry so they outlive it.
    quote! {
        #(
            let mut #units = <#tests as ::tinytest::DeclaredTest>::instantiate();
            let #cases = ::tinytest::TestCase::new(
                <#tests as ::tinytest::DeclaredTest>::SUITE,
                <#tests as ::tinytest::DeclaredTest>::NAME,
                &mut #units,
            );
        )*
        #[allow(unused_mut)]
        let mut #name = ::tinytest::Registry::new();
        #(
            #name.append(&#cases);
        )*
    }
}

/// Generates a hosted `fn main` that installs the logger, registers the
/// listed tests in order and exits with the number of failed tests.
///
/// ```rust,ignore
/// tinytest::test_main!(math::addition, math::starts_at_one);
/// ```
#[proc_macro]
pub fn test_main(input: TokenStream) -> TokenStream {
    let tests = parse_macro_input!(input with Punctuated::<Path, Token![,]>::parse_terminated);
    let tests: Vec<Path> = tests.into_iter().collect();
    let registry = format_ident!("__tinytest_registry");
    let declare = expand_registry(&registry, &tests);

    quote! {
        fn main() {
            if let ::core::result::Result::Err(e) = ::tinytest::logger::init() {
                ::std::eprintln!("{}", e);
            }
            #declare
            ::std::process::exit(::tinytest::run_tests(&#registry));
        }
    }
    .into()
}
