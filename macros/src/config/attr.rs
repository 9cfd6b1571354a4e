//! Attribute parsing helpers for Config derive macro.

use syn::{Attribute, Lit, Meta};

/// Get section name from #[config(section = "xxx")].
pub fn get_section(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "config", "section")
}

/// Get custom key name from #[config(name = "xxx")].
pub fn get_custom_name(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "config", "name")
}

/// Get example value from #[config(example = "xxx")].
pub fn get_example_value(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "config", "example")
}

/// Get key name from #[serde(rename = "xxx")].
pub fn get_serde_rename(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "serde", "rename")
}

/// Get case convention from #[serde(rename_all = "xxx")].
pub fn get_serde_rename_all(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "serde", "rename_all")
}

/// Get string value from #[scope(key = "value")].
///
/// Unrelated entries (flags, `key = value` pairs, nested lists) are skipped
/// so that foreign attributes such as `#[serde(default, rename = "x")]`
/// parse cleanly.
fn get_string_attr(attrs: &[Attribute], scope: &str, key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident(scope) {
            continue;
        }
        let mut value = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
            } else {
                skip_meta_value(&meta)?;
            }
            Ok(())
        });
        if value.is_some() {
            return value;
        }
    }
    None
}

/// Check if attribute has a flag like #[config(skip)].
pub fn has_attr(attrs: &[Attribute], key: &str) -> bool {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                found = true;
            }
            skip_meta_value(&meta)?;
            Ok(())
        });
        if found {
            return true;
        }
    }
    false
}

/// Consume the value part of a nested meta item, if any.
fn skip_meta_value(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        let _: syn::Token![=] = meta.input.parse()?;
        let _: syn::Lit = meta.input.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        let _: proc_macro2::TokenStream = content.parse()?;
    }
    Ok(())
}

/// Extract doc comment from #[doc = "..."] attributes.
pub fn extract_doc_comment(attrs: &[Attribute]) -> Option<String> {
    let docs: Vec<String> = attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(nv) = &attr.meta
                && let syn::Expr::Lit(expr_lit) = &nv.value
                && let Lit::Str(s) = &expr_lit.lit
            {
                return Some(s.value());
            }
            None
        })
        .collect();

    if docs.is_empty() {
        None
    } else {
        Some(docs.join("\n").trim().to_string())
    }
}
