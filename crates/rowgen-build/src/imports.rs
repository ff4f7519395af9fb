use derive_more::{Deref, IntoIterator};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use rowgen_schema::{
    naming::{PROPERTY_MODEL_TYPE, RECORD_TYPE, TABLE_MODEL_TYPE},
    property::SqlType,
};
use std::collections::BTreeSet;

///
/// Import
///
/// A runtime type the generated unit brings into scope, as
/// `use <core>::<module>::<name>;`.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Import {
    pub module: &'static str,
    pub name: &'static str,
}

impl Import {
    pub const RECORD: Self = Self::new("record", RECORD_TYPE);
    pub const PROPERTY_MODEL: Self = Self::new("property", PROPERTY_MODEL_TYPE);
    pub const TABLE_MODEL: Self = Self::new("model", TABLE_MODEL_TYPE);

    #[must_use]
    pub const fn new(module: &'static str, name: &'static str) -> Self {
        Self { module, name }
    }

    /// The property type backing columns of `sql_type`.
    #[must_use]
    pub const fn property(sql_type: SqlType) -> Self {
        Self::new("property", sql_type.property_type())
    }

    fn use_tokens(self, core: &TokenStream) -> TokenStream {
        let module = format_ident!("{}", self.module);
        let name = format_ident!("{}", self.name);

        quote!(use #core::#module::#name;)
    }
}

///
/// ImportSet
///
/// Sorted, de-duplicated imports of one generated unit. Stages add to it in
/// pipeline order; nothing is ever removed.
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq)]
pub struct ImportSet(BTreeSet<Import>);

impl ImportSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import, returning `true` if it was not already present.
    pub fn insert(&mut self, import: Import) -> bool {
        self.0.insert(import)
    }

    /// Whether a type name is in scope.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.0.iter().any(|i| i.name == name)
    }

    /// Entries present here but not in `base`.
    #[must_use]
    pub fn added_since(&self, base: &Self) -> Vec<Import> {
        self.0.difference(&base.0).copied().collect()
    }

    #[must_use]
    pub fn to_tokens(&self, core: &TokenStream) -> TokenStream {
        let uses = self.0.iter().map(|i| i.use_tokens(core));

        quote!(#(#uses)*)
    }
}
