//! Template generation code for Config derive macro.
//!
//! Every key is emitted commented out: the consuming framework owns the
//! defaults, so a template only documents what can be set.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::FieldInfo;
use crate::config::types::{
    format_example_for_type, placeholder_for_type, section_type, type_to_string,
};

/// Generate template code (TokenStream) for fields
pub fn generate_template_code(fields: &[&FieldInfo]) -> TokenStream {
    // Plain keys first: TOML attaches them to the nearest preceding header,
    // so nested sections must come after the section's own keys.
    let leaves = fields.iter().filter(|f| !f.sub).map(|f| leaf_code(f));
    let subs = fields.iter().filter(|f| f.sub).map(|f| sub_code(f));

    quote! {
        #(#leaves)*
        #(#subs)*
    }
}

fn doc_code(info: &FieldInfo) -> TokenStream {
    match info.doc {
        Some(ref doc) => {
            let doc_str: String = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
            quote! { out.push_str(#doc_str); }
        }
        None => quote! {},
    }
}

/// Nested section: delegate to the section type's own header + template.
fn sub_code(info: &FieldInfo) -> TokenStream {
    let section_ty = section_type(&info.ty);
    quote! {
        out.push('\n');
        out.push_str(&<#section_ty>::template_with_header());
    }
}

/// Leaf key: doc lines followed by `# key = value`.
fn leaf_code(info: &FieldInfo) -> TokenStream {
    let doc = doc_code(info);
    let ty_str = type_to_string(&info.ty);
    let value = match info.example {
        Some(ref example) => format_example_for_type(example, &ty_str),
        None => placeholder_for_type(&ty_str).to_string(),
    };
    let line = format!("# {} = {}\n", info.toml_name, value);
    quote! {
        #doc
        out.push_str(#line);
    }
}
