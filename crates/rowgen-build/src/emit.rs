use crate::{
    code::{Expr, MethodSignature, Stmt, parse_ident},
    error::EmitError,
    imports::{Import, ImportSet},
    slot::SlotAllocator,
    symbol::SymbolTable,
};
use proc_macro2::{Literal, TokenStream};
use quote::quote;
use rowgen_schema::naming::ConstName;
use std::collections::BTreeMap;

///
/// Emitter
///
/// Order-preserving sink the pipeline stages write into. Field
/// declarations, slot assignments and methods appear in the generated unit
/// in the order they were written.
///

pub trait Emitter {
    /// Declare `pub const <constant>: <ty> = <initializer>;`.
    fn write_field_declaration(
        &mut self,
        ty: &str,
        constant: &ConstName,
        initializer: Expr,
    ) -> Result<(), EmitError>;

    fn begin_method(&mut self, signature: MethodSignature) -> Result<(), EmitError>;

    /// Append to the open method body, or assign a properties array slot
    /// when no method is open.
    fn write_statement(&mut self, stmt: Stmt) -> Result<(), EmitError>;

    fn finish_method(&mut self) -> Result<(), EmitError>;

    /// Begin, fill and finish a method in one call.
    fn write_method(&mut self, signature: MethodSignature, body: Vec<Stmt>) -> Result<(), EmitError> {
        self.begin_method(signature)?;
        for stmt in body {
            self.write_statement(stmt)?;
        }

        self.finish_method()
    }
}

///
/// ModelHeader
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModelHeader {
    pub type_name: String,
    pub table_name: String,
}

///
/// TokenEmitter
///
/// Renders a model unit with `quote`, checking every reference against
/// its symbol table as it is written.
///

pub struct TokenEmitter {
    header: ModelHeader,
    core: TokenStream,
    imports: ImportSet,
    symbols: SymbolTable,
    fields: Vec<TokenStream>,
    slots: BTreeMap<usize, ConstName>,
    methods: Vec<TokenStream>,
    open: Option<OpenMethod>,
}

struct OpenMethod {
    signature: MethodSignature,
    body: Vec<Stmt>,
}

impl TokenEmitter {
    #[must_use]
    pub fn new(header: ModelHeader, imports: ImportSet, core: TokenStream) -> Self {
        Self {
            header,
            core,
            symbols: SymbolTable::new(&imports),
            imports,
            fields: Vec::new(),
            slots: BTreeMap::new(),
            methods: Vec::new(),
            open: None,
        }
    }

    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Check the unit is complete and render it.
    ///
    /// Every slot reserved in `slots` must have been assigned exactly the
    /// constant it was reserved for, and nothing else may be assigned.
    pub fn finish(self, slots: &SlotAllocator) -> Result<TokenStream, EmitError> {
        if let Some(open) = &self.open {
            return Err(EmitError::UnfinishedMethod(open.signature.name.clone()));
        }

        self.verify_slots(slots)?;
        for import in [Import::RECORD, Import::PROPERTY_MODEL, Import::TABLE_MODEL] {
            self.symbols.resolve_type(import.name, "model scaffolding")?;
        }

        let core = &self.core;
        let imports = self.imports.to_tokens(core);
        let ty = parse_ident(&self.header.type_name)?;
        let table = &self.header.table_name;
        let type_doc = format!("Row of the `{table}` table.");
        let fields = &self.fields;
        let methods = &self.methods;
        let len = Literal::usize_unsuffixed(self.slots.len());
        let slot_refs = self
            .slots
            .values()
            .map(|c| parse_ident(c))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(quote! {
            #imports

            #[doc = #type_doc]
            #[derive(Clone, Debug, PartialEq)]
            pub struct #ty {
                record: Record,
            }

            impl #ty {
                #(#fields)*

                /// Every property in slot order.
                pub const PROPERTIES: [&'static dyn PropertyModel; #len] = [
                    #(&Self::#slot_refs),*
                ];

                /// A new row holding each column's SQL default.
                #[must_use]
                pub fn new() -> Self {
                    Self {
                        record: Record::with_defaults(&Self::PROPERTIES),
                    }
                }

                #(#methods)*
            }

            impl ::std::default::Default for #ty {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl TableModel for #ty {
                const TABLE_NAME: &'static str = #table;

                fn properties() -> &'static [&'static dyn PropertyModel] {
                    &Self::PROPERTIES
                }

                fn record(&self) -> &Record {
                    &self.record
                }

                fn record_mut(&mut self) -> &mut Record {
                    &mut self.record
                }

                fn from_record(record: Record) -> Self {
                    Self { record }
                }
            }
        })
    }

    fn verify_slots(&self, slots: &SlotAllocator) -> Result<(), EmitError> {
        for slot in slots.iter() {
            match self.slots.get(&slot.index) {
                None => return Err(EmitError::UnpopulatedSlot(slot.index)),
                Some(assigned) if *assigned != slot.constant => {
                    return Err(EmitError::SlotMismatch {
                        index: slot.index,
                        reserved: slot.constant.clone(),
                        assigned: assigned.clone(),
                    });
                }
                Some(_) => {}
            }
        }

        if let Some((&index, _)) = self.slots.range(slots.len()..).next() {
            return Err(EmitError::SlotOutOfRange {
                index,
                len: slots.len(),
            });
        }

        Ok(())
    }

    fn assign_slot(&mut self, index: usize, property: ConstName) -> Result<(), EmitError> {
        self.symbols.resolve_constant(&property, "PROPERTIES")?;

        if let Some(existing) = self.slots.get(&index) {
            return Err(EmitError::SlotConflict {
                index,
                existing: existing.clone(),
            });
        }
        self.slots.insert(index, property);

        Ok(())
    }
}

impl Emitter for TokenEmitter {
    fn write_field_declaration(
        &mut self,
        ty: &str,
        constant: &ConstName,
        initializer: Expr,
    ) -> Result<(), EmitError> {
        let site = constant.as_str();

        self.symbols.resolve_type(ty, site)?;
        if let Expr::NewProperty { sql_type, .. } = &initializer {
            self.symbols.resolve_type(sql_type.property_type(), site)?;
        }
        if let Some(referenced) = initializer.constant() {
            self.symbols.resolve_constant(referenced, site)?;
        }

        let ident = parse_ident(constant)?;
        let ty = parse_ident(ty)?;
        let init = initializer.render(&self.core)?;
        self.symbols.declare_constant(constant)?;

        self.fields.push(quote! {
            pub const #ident: #ty = #init;
        });

        Ok(())
    }

    fn begin_method(&mut self, signature: MethodSignature) -> Result<(), EmitError> {
        if let Some(open) = &self.open {
            return Err(EmitError::MethodAlreadyOpen {
                open: open.signature.name.clone(),
                next: signature.name,
            });
        }

        parse_ident(&signature.name)?;
        self.symbols.declare_method(&signature.name)?;
        self.open = Some(OpenMethod {
            signature,
            body: Vec::new(),
        });

        Ok(())
    }

    fn write_statement(&mut self, stmt: Stmt) -> Result<(), EmitError> {
        let Some(open) = &mut self.open else {
            return match stmt {
                Stmt::AssignSlot { index, property } => self.assign_slot(index, property),
                other => Err(EmitError::MisplacedStatement(other.kind())),
            };
        };

        if matches!(stmt, Stmt::AssignSlot { .. }) {
            return Err(EmitError::MisplacedStatement(stmt.kind()));
        }
        if open.body.last().is_some_and(Stmt::is_return) {
            return Err(EmitError::MisplacedStatement("a statement after a return"));
        }
        for constant in stmt.constants() {
            self.symbols
                .resolve_constant(constant, &open.signature.name)?;
        }
        open.body.push(stmt);

        Ok(())
    }

    fn finish_method(&mut self) -> Result<(), EmitError> {
        let open = self.open.take().ok_or(EmitError::NoOpenMethod)?;
        if !open.body.last().is_some_and(Stmt::is_return) {
            return Err(EmitError::MissingReturn(open.signature.name));
        }

        let signature = open.signature.render()?;
        let last = open.body.len() - 1;
        let body = open
            .body
            .iter()
            .enumerate()
            .map(|(i, stmt)| stmt.render(&self.core, i == last))
            .collect::<Result<Vec<_>, _>>()?;

        self.methods.push(quote! {
            #signature {
                #(#body)*
            }
        });

        Ok(())
    }
}

///
/// TESTS
///
