use crate::{error::EmitError, imports::ImportSet};
use rowgen_schema::naming::ConstName;
use std::collections::BTreeSet;

///
/// SymbolTable
///
/// Names the generated unit will have in scope: imported types, declared
/// constants and defined methods. Every reference an emitter writes is
/// checked here before it is rendered.
///

#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    types: BTreeSet<String>,
    constants: BTreeSet<ConstName>,
    methods: BTreeSet<String>,
}

impl SymbolTable {
    #[must_use]
    pub fn new(imports: &ImportSet) -> Self {
        Self {
            types: imports.iter().map(|i| i.name.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn declare_constant(&mut self, name: &ConstName) -> Result<(), EmitError> {
        if self.constants.insert(name.clone()) {
            Ok(())
        } else {
            Err(EmitError::DuplicateSymbol(name.clone()))
        }
    }

    pub fn declare_method(&mut self, name: &str) -> Result<(), EmitError> {
        if self.methods.insert(name.to_string()) {
            Ok(())
        } else {
            Err(EmitError::DuplicateMethod(name.to_string()))
        }
    }

    pub fn resolve_constant(&self, name: &ConstName, site: &str) -> Result<(), EmitError> {
        if self.constants.contains(name) {
            Ok(())
        } else {
            Err(EmitError::UndefinedSymbol {
                name: name.clone(),
                site: site.to_string(),
            })
        }
    }

    pub fn resolve_type(&self, ty: &str, site: &str) -> Result<(), EmitError> {
        if self.types.contains(ty) {
            Ok(())
        } else {
            Err(EmitError::UnresolvedType {
                ty: ty.to_string(),
                site: site.to_string(),
            })
        }
    }

    #[must_use]
    pub fn constants(&self) -> &BTreeSet<ConstName> {
        &self.constants
    }

    #[must_use]
    pub fn methods(&self) -> &BTreeSet<String> {
        &self.methods
    }
}
