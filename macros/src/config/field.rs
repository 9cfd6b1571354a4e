//! Field information structures and parsing.

use syn::Type;

use crate::config::attr::{
    extract_doc_comment, get_custom_name, get_example_value, get_serde_rename, has_attr,
};
use crate::config::types::apply_rename_all;

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    pub toml_name: String,
    pub doc: Option<String>,
    pub example: Option<String>,
    pub skip: bool,
    pub sub: bool,
    pub ty: Type,
}

impl FieldInfo {
    /// Parse field info from a syn::Field.
    ///
    /// Key name precedence: `#[config(name)]`, `#[serde(rename)]`, then the
    /// struct's `rename_all` convention applied to the identifier.
    pub fn from_field(field: &syn::Field, rename_all: Option<&str>) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;

        let raw_name = ident.to_string();
        let raw_name = raw_name.strip_prefix("r#").unwrap_or(&raw_name).to_string();
        let toml_name = get_custom_name(attrs)
            .or_else(|| get_serde_rename(attrs))
            .unwrap_or_else(|| apply_rename_all(&raw_name, rename_all));

        Some(Self {
            name: ident.clone(),
            toml_name,
            doc: extract_doc_comment(attrs),
            example: get_example_value(attrs),
            skip: has_attr(attrs, "skip"),
            sub: has_attr(attrs, "sub"),
            ty: field.ty.clone(),
        })
    }
}
