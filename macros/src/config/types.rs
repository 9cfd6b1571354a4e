//! Type helper functions for Config derive macro.

use quote::quote;
use syn::{GenericArgument, PathArguments, Type};

/// Convert syn::Type to string representation
pub fn type_to_string(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}

/// Peel `Option<..>` and `Vec<..>` wrappers to reach the section type.
///
/// `Option<Vec<TextLink>>` -> `TextLink`
pub fn section_type(ty: &Type) -> &Type {
    let Type::Path(path) = ty else {
        return ty;
    };
    let Some(last) = path.path.segments.last() else {
        return ty;
    };
    if !matches!(last.ident.to_string().as_str(), "Option" | "Vec") {
        return ty;
    }
    match &last.arguments {
        PathArguments::AngleBracketed(args) => match args.args.first() {
            Some(GenericArgument::Type(inner)) => section_type(inner),
            _ => ty,
        },
        _ => ty,
    }
}

/// Infer section name from struct name
pub fn infer_section(name: &str) -> String {
    let name = name
        .strip_suffix("SectionConfig")
        .or_else(|| name.strip_suffix("Config"))
        .unwrap_or(name);
    to_snake_case(name)
}

/// Convert PascalCase to snake_case
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert snake_case to camelCase
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut upper = false;
    for c in s.chars() {
        if c == '_' {
            upper = !result.is_empty();
        } else if upper {
            result.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Apply a serde `rename_all` convention to a field identifier.
///
/// Only the conventions used by config structs are understood; anything
/// else leaves the identifier untouched.
pub fn apply_rename_all(ident: &str, rename_all: Option<&str>) -> String {
    match rename_all {
        Some("camelCase") => to_camel_case(ident),
        Some("kebab-case") => ident.replace('_', "-"),
        _ => ident.to_string(),
    }
}

/// Placeholder value for a commented-out key, chosen by field type.
pub fn placeholder_for_type(ty: &str) -> &'static str {
    let inner = ty
        .strip_prefix("Option<")
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(ty);
    match inner {
        "bool" => "false",
        "u8" | "u16" | "u32" | "u64" | "usize" | "i8" | "i16" | "i32" | "i64" | "isize" => "0",
        _ if inner.starts_with("Vec<") => "[]",
        _ if inner.ends_with("Map") || inner.contains("Map<") || inner == "Socials" => "{}",
        _ => "\"\"",
    }
}

/// Format example value based on field type
/// String types get quoted, others are used as-is
pub fn format_example_for_type(value: &str, ty: &str) -> String {
    match ty {
        "String" | "Option<String>" => format!("\"{}\"", value),
        _ => value.to_string(),
    }
}
