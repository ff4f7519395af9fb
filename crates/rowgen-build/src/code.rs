//! Structured statements and expressions written by stages.
//!
//! Stages describe method bodies and initializers with these types instead of
//! raw strings; the emitter checks every constant they reference against its
//! symbol table and renders them to tokens.

use crate::error::EmitError;
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use rowgen_core::sync::RowSyncState;
use rowgen_schema::{naming::ConstName, property::SqlType};

///
/// Expr
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expr {
    /// `<PropertyType>::new(column, constraint)`, used as a field initializer.
    NewProperty {
        sql_type: SqlType,
        column: String,
        constraint: String,
    },

    /// Stored value of a property as `Option<T>`.
    Get(ConstName),

    /// Stored value of a property, falling back to its SQL default and
    /// then to `T::default()`.
    GetOrDeclared(ConstName),

    /// A method argument.
    Arg(String),

    /// Persisted code of a sync state.
    RowState(RowSyncState),
}

impl Expr {
    /// The constant this expression reads, if any.
    #[must_use]
    pub const fn constant(&self) -> Option<&ConstName> {
        match self {
            Self::Get(c) | Self::GetOrDeclared(c) => Some(c),
            _ => None,
        }
    }

    pub(crate) fn render(&self, core: &TokenStream) -> Result<TokenStream, EmitError> {
        let tokens = match self {
            Self::NewProperty {
                sql_type,
                column,
                constraint,
            } => {
                let ty = parse_ident(sql_type.property_type())?;

                quote!(#ty::new(#column, #constraint))
            }
            Self::Get(c) => {
                let c = parse_ident(c)?;

                quote!(self.record.get(&Self::#c))
            }
            Self::GetOrDeclared(c) => {
                let c = parse_ident(c)?;

                quote!(self.record.get_or_declared(&Self::#c))
            }
            Self::Arg(name) => {
                let name = parse_ident(name)?;

                quote!(#name)
            }
            Self::RowState(state) => {
                let variant = parse_ident(&state.to_string())?;

                quote!(#core::sync::RowSyncState::#variant.code())
            }
        };

        Ok(tokens)
    }
}

///
/// Stmt
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Stmt {
    /// Store a value into a property.
    Set { property: ConstName, value: Expr },

    Return(Expr),

    /// Return the receiver for chaining.
    ReturnSelf,

    /// Place a declared constant into the properties array.
    AssignSlot { index: usize, property: ConstName },
}

impl Stmt {
    /// Every constant the statement references.
    #[must_use]
    pub fn constants(&self) -> Vec<&ConstName> {
        match self {
            Self::Set { property, value } => {
                let mut refs = vec![property];
                refs.extend(value.constant());
                refs
            }
            Self::Return(expr) => expr.constant().into_iter().collect(),
            Self::ReturnSelf => Vec::new(),
            Self::AssignSlot { property, .. } => vec![property],
        }
    }

    #[must_use]
    pub const fn is_return(&self) -> bool {
        matches!(self, Self::Return(_) | Self::ReturnSelf)
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Set { .. } => "a property assignment",
            Self::Return(_) | Self::ReturnSelf => "a return",
            Self::AssignSlot { .. } => "a slot assignment",
        }
    }

    /// Render a method body statement; `tail` renders returns as the block's
    /// final expression.
    pub(crate) fn render(&self, core: &TokenStream, tail: bool) -> Result<TokenStream, EmitError> {
        let tokens = match self {
            Self::Set { property, value } => {
                let property = parse_ident(property)?;
                let value = value.render(core)?;

                quote!(self.record.set(&Self::#property, #value);)
            }
            Self::Return(expr) => {
                let expr = expr.render(core)?;

                if tail { quote!(#expr) } else { quote!(return #expr;) }
            }
            Self::ReturnSelf => {
                if tail { quote!(self) } else { quote!(return self;) }
            }
            Self::AssignSlot { .. } => return Err(EmitError::MisplacedStatement(self.kind())),
        };

        Ok(tokens)
    }
}

///
/// Receiver
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Receiver {
    Ref,
    Mut,
}

///
/// Returns
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Returns {
    Value(SqlType),
    Optional(SqlType),

    /// `&mut Self`, for chaining mutators.
    SelfMut,
}

///
/// MethodArg
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MethodArg {
    pub name: String,
    pub ty: SqlType,
}

///
/// MethodSignature
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MethodSignature {
    pub name: String,
    pub receiver: Receiver,
    pub args: Vec<MethodArg>,
    pub returns: Returns,
    pub doc: Option<String>,
}

impl MethodSignature {
    /// `fn name(&self) -> T`
    #[must_use]
    pub fn getter(name: impl Into<String>, ty: SqlType) -> Self {
        Self {
            name: name.into(),
            receiver: Receiver::Ref,
            args: Vec::new(),
            returns: Returns::Value(ty),
            doc: None,
        }
    }

    /// `fn name(&self) -> Option<T>`
    #[must_use]
    pub fn optional_getter(name: impl Into<String>, ty: SqlType) -> Self {
        Self {
            returns: Returns::Optional(ty),
            ..Self::getter(name, ty)
        }
    }

    /// `fn name(&mut self) -> &mut Self`
    #[must_use]
    pub fn mutator(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receiver: Receiver::Mut,
            args: Vec::new(),
            returns: Returns::SelfMut,
            doc: None,
        }
    }

    #[must_use]
    pub fn arg(mut self, name: impl Into<String>, ty: SqlType) -> Self {
        self.args.push(MethodArg {
            name: name.into(),
            ty,
        });
        self
    }

    #[must_use]
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Render `pub fn name(receiver, args) -> ret`, without a body.
    pub(crate) fn render(&self) -> Result<TokenStream, EmitError> {
        let name = parse_ident(&self.name)?;
        let receiver = match self.receiver {
            Receiver::Ref => quote!(&self),
            Receiver::Mut => quote!(&mut self),
        };
        let args = self
            .args
            .iter()
            .map(|arg| {
                let ident = parse_ident(&arg.name)?;
                let ty = value_type(arg.ty);

                Ok(quote!(#ident: #ty))
            })
            .collect::<Result<Vec<_>, EmitError>>()?;
        let (must_use, ret) = match self.returns {
            Returns::Value(ty) => (quote!(#[must_use]), value_type(ty)),
            Returns::Optional(ty) => {
                let ty = value_type(ty);
                (quote!(#[must_use]), quote!(::std::option::Option<#ty>))
            }
            Returns::SelfMut => (quote!(), quote!(&mut Self)),
        };
        let doc = self.doc.as_ref().map(|doc| quote!(#[doc = #doc]));

        Ok(quote! {
            #doc
            #must_use
            pub fn #name(#receiver #(, #args)*) -> #ret
        })
    }
}

/// Rust value type stored in columns of `ty`.
#[must_use]
pub fn value_type(ty: SqlType) -> TokenStream {
    match ty {
        SqlType::Blob => quote!(::std::vec::Vec<u8>),
        SqlType::Boolean => quote!(bool),
        SqlType::Integer => quote!(i32),
        SqlType::Long => quote!(i64),
        SqlType::Real => quote!(f64),
        SqlType::Text => quote!(::std::string::String),
    }
}

/// Parse a generated identifier, rejecting keywords and malformed names.
pub(crate) fn parse_ident(name: &str) -> Result<Ident, EmitError> {
    syn::parse_str::<Ident>(name).map_err(|_| EmitError::InvalidIdent(name.to_string()))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use rowgen_schema::naming::constant_name;

    fn core() -> TokenStream {
        quote!(::rowgen::core)
    }

    #[test]
    fn set_references_target_and_value() {
        let stmt = Stmt::Set {
            property: constant_name("origin_id"),
            value: Expr::Get(constant_name("row_status")),
        };

        let names: Vec<_> = stmt.constants().into_iter().map(ConstName::as_str).collect();
        assert_eq!(names, ["ORIGIN_ID", "ROW_STATUS"]);
    }

    #[test]
    fn returns_render_as_tail_or_early() {
        let stmt = Stmt::ReturnSelf;

        assert_eq!(stmt.render(&core(), true).unwrap().to_string(), "self");
        assert_eq!(
            stmt.render(&core(), false).unwrap().to_string(),
            quote!(return self;).to_string()
        );
    }

    #[test]
    fn row_state_renders_through_core_path() {
        let expr = Expr::RowState(RowSyncState::Updating);

        assert_eq!(
            expr.render(&core()).unwrap().to_string(),
            quote!(::rowgen::core::sync::RowSyncState::Updating.code()).to_string()
        );
    }

    #[test]
    fn declared_reads_go_through_sql_default() {
        let expr = Expr::GetOrDeclared(constant_name("row_status"));

        assert_eq!(
            expr.render(&core()).unwrap().to_string(),
            quote!(self.record.get_or_declared(&Self::ROW_STATUS)).to_string()
        );
    }

    #[test]
    fn slot_assignment_is_not_a_body_statement() {
        let stmt = Stmt::AssignSlot {
            index: 0,
            property: constant_name("_id"),
        };

        assert_eq!(
            stmt.render(&core(), true).unwrap_err(),
            EmitError::MisplacedStatement("a slot assignment")
        );
    }

    #[test]
    fn keywords_are_not_identifiers() {
        assert_eq!(
            parse_ident("type"),
            Err(EmitError::InvalidIdent("type".to_string()))
        );
        assert!(parse_ident("row_state").is_ok());
    }

    #[test]
    fn mutator_signature_returns_self() {
        let sig = MethodSignature::mutator("confirm_origin_insertion")
            .arg("origin_id", SqlType::Long)
            .render()
            .unwrap();

        assert_eq!(
            sig.to_string(),
            quote!(pub fn confirm_origin_insertion(&mut self, origin_id: i64) -> &mut Self)
                .to_string()
        );
    }
}
