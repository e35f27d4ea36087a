//! Reflect derive macro implementation

use proc_macro2::{TokenStream, TokenTree};
use quote::{format_ident, quote, ToTokens};
use syn::{parse_quote, DeriveInput, GenericArgument, Ident, PathArguments, Type};

use crate::parse::{capitalize, parse_reflect, ConstraintArgs, ReflectArgs, ReflectFieldArgs};

/// Storage shape of a field type
enum Shape {
    String,
    Integer,
    Number,
    Boolean,
    Array(Box<Shape>),
    /// Another type implementing `Reflect`
    Object(Type),
}

const INTEGER_TYPES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

const SEQUENCE_TYPES: &[&str] = &["Vec", "VecDeque", "LinkedList", "HashSet", "BTreeSet"];

const WRAPPER_TYPES: &[&str] = &["Option", "Box", "Rc", "Arc"];

/// First generic type argument of a path segment
fn first_type_argument(arguments: &PathArguments) -> Option<&Type> {
    if let PathArguments::AngleBracketed(args) = arguments {
        args.args.iter().find_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        })
    } else {
        None
    }
}

fn classify(ty: &Type) -> syn::Result<Shape> {
    match ty {
        Type::Reference(reference) => classify(&reference.elem),
        Type::Paren(paren) => classify(&paren.elem),
        Type::Group(group) => classify(&group.elem),
        Type::Slice(slice) => Ok(Shape::Array(Box::new(classify(&slice.elem)?))),
        Type::Array(array) => Ok(Shape::Array(Box::new(classify(&array.elem)?))),
        Type::Path(type_path) => {
            let Some(segment) = type_path.path.segments.last() else {
                return Err(syn::Error::new_spanned(ty, "empty type path"));
            };
            let name = segment.ident.to_string();
            let inner = first_type_argument(&segment.arguments);

            match name.as_str() {
                "String" | "str" | "char" => Ok(Shape::String),
                "f32" | "f64" => Ok(Shape::Number),
                "bool" => Ok(Shape::Boolean),
                n if INTEGER_TYPES.contains(&n) => Ok(Shape::Integer),
                n if SEQUENCE_TYPES.contains(&n) => match inner {
                    Some(inner) => Ok(Shape::Array(Box::new(classify(inner)?))),
                    None => Err(syn::Error::new_spanned(ty, "sequence type without item type")),
                },
                n if WRAPPER_TYPES.contains(&n) => match inner {
                    Some(inner) => classify(inner),
                    None => Err(syn::Error::new_spanned(ty, "wrapper type without inner type")),
                },
                _ => Ok(Shape::Object(ty.clone())),
            }
        }
        _ => Err(syn::Error::new_spanned(
            ty,
            "Reflect does not support this field type",
        )),
    }
}

fn shape_tokens(shape: &Shape) -> TokenStream {
    match shape {
        Shape::String => quote! { ::typeschema_core::model::FieldType::String },
        Shape::Integer => quote! { ::typeschema_core::model::FieldType::Integer },
        Shape::Number => quote! { ::typeschema_core::model::FieldType::Number },
        Shape::Boolean => quote! { ::typeschema_core::model::FieldType::Boolean },
        Shape::Array(inner) => {
            let inner = shape_tokens(inner);
            quote! { ::typeschema_core::model::FieldType::Array(::std::boxed::Box::new(#inner)) }
        }
        Shape::Object(ty) => quote! {
            ::typeschema_core::model::FieldType::Object(
                <#ty as ::typeschema_core::model::Reflect>::TYPE_NAME.to_string()
            )
        },
    }
}

/// Object types a shape references (for recursive registration)
fn referenced_types<'a>(shape: &'a Shape, out: &mut Vec<&'a Type>) {
    match shape {
        Shape::Array(inner) => referenced_types(inner, out),
        Shape::Object(ty) => out.push(ty),
        _ => {}
    }
}

/// Check if a token stream names any of the given type parameters
fn mentions_param(tokens: TokenStream, params: &[&Ident]) -> bool {
    tokens.into_iter().any(|tree| match tree {
        TokenTree::Ident(ident) => params.iter().any(|p| **p == ident),
        TokenTree::Group(group) => mentions_param(group.stream(), params),
        _ => false,
    })
}

/// Generate the Reflect implementation
pub fn derive_reflect(input: DeriveInput) -> TokenStream {
    match parse_reflect(&input) {
        Ok(args) => generate_impl(args).unwrap_or_else(|e| e.to_compile_error()),
        Err(e) => e.write_errors(),
    }
}

fn generate_impl(args: ReflectArgs) -> syn::Result<TokenStream> {
    let struct_name = &args.ident;
    let type_name = args.name.clone().unwrap_or_else(|| struct_name.to_string());
    let fields = match &args.data {
        darling::ast::Data::Struct(fields) => &fields.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "Reflect can only be derived for structs",
            ))
        }
    };

    let mut field_infos = Vec::new();
    let mut methods = Vec::new();
    let mut shapes = Vec::new();

    for field in fields.iter().filter(|f| !f.skip) {
        let Some(property) = field.property_name() else {
            continue;
        };
        let shape = classify(&field.ty)?;
        field_infos.push(generate_field_info(&type_name, &property, field, &shape));
        methods.extend(generate_methods(&property, field, &shape));
        shapes.push(shape);
    }

    for accessor in &args.accessors.0 {
        methods.push(quote! { ::typeschema_core::model::MethodInfo::new(#accessor) });
    }

    let mut nested = Vec::new();
    for shape in &shapes {
        referenced_types(shape, &mut nested);
    }

    // Nested types built from type parameters need a Reflect bound
    let mut generics = args.generics.clone();
    let params: Vec<&Ident> = args.generics.type_params().map(|p| &p.ident).collect();
    let mut bounded: Vec<&Type> = Vec::new();
    for ty in &nested {
        if mentions_param(ty.to_token_stream(), &params) && !bounded.contains(ty) {
            bounded.push(*ty);
        }
    }
    if !bounded.is_empty() {
        let where_clause = generics.make_where_clause();
        for ty in bounded {
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::typeschema_core::model::Reflect));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let extends = match &args.extends {
        Some(base) => quote! { ::std::option::Option::Some(#base.to_string()) },
        None => quote! { ::std::option::Option::None },
    };
    let collection = args.collection;
    let nullable = args.nullable;
    let attributes = generate_attribute_spec(&args.constraints, true);

    Ok(quote! {
        impl #impl_generics ::typeschema_core::model::Reflect for #struct_name #ty_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;

            fn type_info() -> ::typeschema_core::model::TypeInfo {
                let mut info = ::typeschema_core::model::TypeInfo::new(Self::TYPE_NAME);
                info.extends = #extends;
                info.collection = #collection;
                info.nullable = #nullable;
                info.attributes = #attributes;
                info.fields = ::std::vec![#(#field_infos),*];
                info.methods = ::std::vec![#(#methods),*];
                info
            }

            fn register(registry: &mut ::typeschema_core::model::TypeRegistry) {
                if registry.contains(Self::TYPE_NAME) {
                    return;
                }
                registry.insert(Self::type_info());
                #(<#nested as ::typeschema_core::model::Reflect>::register(registry);)*
            }
        }
    })
}

fn generate_field_info(
    type_name: &str,
    property: &str,
    field: &ReflectFieldArgs,
    shape: &Shape,
) -> TokenStream {
    let ty = shape_tokens(shape);
    let ignored = field.ignore;
    // Field enums become an explicit holder rather than an `enum` constraint
    let attributes = generate_attribute_spec(&field.constraints, false);
    let enum_holder = if field.constraints.enums.0.is_empty() {
        quote! { ::std::option::Option::None }
    } else {
        let holder_name = format!("{}${}Enum", type_name, property);
        let literals = &field.constraints.enums.0;
        quote! {
            ::std::option::Option::Some(::typeschema_core::model::EnumHolder::from_literals(
                #holder_name,
                &[#(#literals),*],
            ))
        }
    };

    quote! {
        ::typeschema_core::model::FieldInfo {
            name: #property.to_string(),
            ty: #ty,
            attributes: #attributes,
            enum_holder: #enum_holder,
            ignored: #ignored,
        }
    }
}

fn generate_methods(property: &str, field: &ReflectFieldArgs, shape: &Shape) -> Vec<TokenStream> {
    let suffix = capitalize(property);
    let prefix = if matches!(shape, Shape::Boolean) { "is" } else { "get" };
    let accessor = format!("{}{}", prefix, suffix);
    let ty = shape_tokens(shape);

    let mut methods = vec![quote! {
        ::typeschema_core::model::MethodInfo::returning(#accessor, #ty)
    }];

    if !field.constraints.readonly {
        let mutator = format!("set{}", suffix);
        methods.push(quote! { ::typeschema_core::model::MethodInfo::new(#mutator) });
    }
    methods
}

fn generate_attribute_spec(args: &ConstraintArgs, with_enums: bool) -> TokenStream {
    let mut assignments = Vec::new();

    for (key, value) in [
        ("id", &args.id),
        ("title", &args.title),
        ("description", &args.description),
        ("pattern", &args.pattern),
    ] {
        if let Some(value) = value {
            let key = format_ident!("{}", key);
            assignments.push(quote! { #key: #value.to_string() });
        }
    }

    for (key, value) in [
        ("maximum", args.maximum),
        ("minimum", args.minimum),
        ("min_items", args.min_items),
        ("max_items", args.max_items),
        ("multiple_of", args.multiple_of),
        ("min_length", args.min_length),
        ("max_length", args.max_length),
    ] {
        if let Some(value) = value {
            let key = format_ident!("{}", key);
            assignments.push(quote! { #key: #value });
        }
    }

    for (key, value) in [
        ("exclusive_maximum", args.exclusive_maximum),
        ("exclusive_minimum", args.exclusive_minimum),
        ("unique_items", args.unique_items),
        ("required", args.required),
        ("readonly", args.readonly),
    ] {
        if value {
            let key = format_ident!("{}", key);
            assignments.push(quote! { #key: true });
        }
    }

    if with_enums && !args.enums.0.is_empty() {
        let literals = &args.enums.0;
        assignments.push(quote! { enums: ::std::vec![#(#literals.to_string()),*] });
    }

    if assignments.is_empty() {
        quote! { ::std::option::Option::None }
    } else {
        quote! {
            ::std::option::Option::Some(::typeschema_core::model::AttributeSpec {
                #(#assignments,)*
                ..::std::default::Default::default()
            })
        }
    }
}
