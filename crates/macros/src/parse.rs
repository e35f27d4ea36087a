//! Attribute parsing for the Reflect derive macro

use darling::ast::NestedMeta;
use darling::{FromDeriveInput, FromField, FromMeta};
use syn::{DeriveInput, Generics, Ident, Type};

/// A parenthesised list of string literals, e.g. `enums("a", "b")`
#[derive(Debug, Default, Clone)]
pub struct StringList(pub Vec<String>);

impl FromMeta for StringList {
    fn from_list(items: &[NestedMeta]) -> darling::Result<Self> {
        items
            .iter()
            .map(|item| match item {
                NestedMeta::Lit(syn::Lit::Str(s)) => Ok(s.value()),
                other => Err(darling::Error::custom("expected a string literal").with_span(other)),
            })
            .collect::<darling::Result<Vec<_>>>()
            .map(StringList)
    }
}

/// Constraint keywords shared by struct and field attributes
#[derive(Debug, Default, FromMeta)]
pub struct ConstraintArgs {
    #[darling(default)]
    pub id: Option<String>,
    #[darling(default)]
    pub title: Option<String>,
    #[darling(default)]
    pub description: Option<String>,
    #[darling(default)]
    pub pattern: Option<String>,
    #[darling(default)]
    pub maximum: Option<i64>,
    #[darling(default)]
    pub exclusive_maximum: bool,
    #[darling(default)]
    pub minimum: Option<i64>,
    #[darling(default)]
    pub exclusive_minimum: bool,
    #[darling(default)]
    pub enums: StringList,
    #[darling(default)]
    pub unique_items: bool,
    #[darling(default)]
    pub min_items: Option<i64>,
    #[darling(default)]
    pub max_items: Option<i64>,
    #[darling(default)]
    pub multiple_of: Option<i64>,
    #[darling(default)]
    pub min_length: Option<i64>,
    #[darling(default)]
    pub max_length: Option<i64>,
    #[darling(default)]
    pub required: bool,
    #[darling(default)]
    pub readonly: bool,
}

/// Parsed #[schema(...)] attributes on the struct
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(schema), supports(struct_named))]
pub struct ReflectArgs {
    /// Struct identifier
    pub ident: Ident,

    pub generics: Generics,

    /// Struct fields
    pub data: darling::ast::Data<(), ReflectFieldArgs>,

    /// Registered type name (defaults to the struct name)
    #[darling(default)]
    pub name: Option<String>,

    /// Base type name
    #[darling(default)]
    pub extends: Option<String>,

    /// Mark the type collection-like
    #[darling(default)]
    pub collection: bool,

    /// Instances may be null
    #[darling(default)]
    pub nullable: bool,

    /// Extra accessors with no backing field
    #[darling(default)]
    pub accessors: StringList,

    #[darling(flatten)]
    pub constraints: ConstraintArgs,
}

/// Parsed #[schema(...)] attributes on a field
#[derive(Debug, FromField)]
#[darling(attributes(schema))]
pub struct ReflectFieldArgs {
    /// Field identifier
    pub ident: Option<Ident>,

    /// Field type
    pub ty: Type,

    /// Property name override
    #[darling(default)]
    pub rename: Option<String>,

    /// Leave the field out of the property table entirely
    #[darling(default)]
    pub skip: bool,

    /// Keep the accessor but omit the property from schema output
    #[darling(default)]
    pub ignore: bool,

    #[darling(flatten)]
    pub constraints: ConstraintArgs,
}

impl ReflectFieldArgs {
    /// Property name before accessor prefixes are applied (camelCase)
    pub fn property_name(&self) -> Option<String> {
        if let Some(rename) = &self.rename {
            return Some(rename.clone());
        }
        let ident = self.ident.as_ref()?.to_string();
        let ident = ident.strip_prefix("r#").unwrap_or(&ident);
        let ident = ident.strip_prefix('_').unwrap_or(ident);
        Some(to_camel_case(ident))
    }
}

/// `snake_case` to `camelCase`
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, part) in name.split('_').filter(|p| !p.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(part);
        } else {
            out.push_str(&capitalize(part));
        }
    }
    out
}

/// Upper-case the first character
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parse a DeriveInput into ReflectArgs
pub fn parse_reflect(input: &DeriveInput) -> darling::Result<ReflectArgs> {
    ReflectArgs::from_derive_input(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("user_name"), "userName");
        assert_eq!(to_camel_case("age"), "age");
        assert_eq!(to_camel_case("a_b_c"), "aBC");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("userName"), "UserName");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_parse_struct_and_field_attributes() {
        let input: DeriveInput = syn::parse_quote! {
            #[schema(name = "Human", title = "A person", minimum = 5, accessors("getFullName"))]
            struct Person {
                #[schema(required, enums("a", "b"))]
                user_name: String,
                #[schema(skip)]
                cache: u8,
            }
        };

        let args = parse_reflect(&input).unwrap();
        assert_eq!(args.name.as_deref(), Some("Human"));
        assert_eq!(args.constraints.title.as_deref(), Some("A person"));
        assert_eq!(args.constraints.minimum, Some(5));
        assert_eq!(args.accessors.0, vec!["getFullName".to_string()]);

        let fields = args.data.take_struct().unwrap().fields;
        assert!(fields[0].constraints.required);
        assert_eq!(fields[0].constraints.enums.0, vec!["a", "b"]);
        assert_eq!(fields[0].property_name().as_deref(), Some("userName"));
        assert!(fields[1].skip);
    }
}
