use crate::{
    code::{Expr, MethodSignature, Stmt},
    emit::Emitter,
    error::EmitError,
};
use rowgen_schema::naming::ConstName;

///
/// Event
///

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Field {
        ty: String,
        constant: ConstName,
        initializer: Expr,
    },
    Begin(MethodSignature),
    Statement(Stmt),
    Finish,
}

///
/// RecordingEmitter
///
/// Accepts everything and keeps the calls in order.
///

#[derive(Debug, Default)]
pub struct RecordingEmitter {
    pub events: Vec<Event>,
}

impl RecordingEmitter {
    pub fn fields(&self) -> Vec<(&str, &str)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Field { ty, constant, .. } => Some((ty.as_str(), constant.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn methods(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Begin(sig) => Some(sig.name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Slot assignments as `(index, constant)`.
    pub fn slots(&self) -> Vec<(usize, &str)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Statement(Stmt::AssignSlot { index, property }) => {
                    Some((*index, property.as_str()))
                }
                _ => None,
            })
            .collect()
    }

    /// Body of the named method, excluding framing events.
    pub fn body(&self, method: &str) -> Vec<&Stmt> {
        let mut inside = false;
        let mut body = Vec::new();

        for event in &self.events {
            match event {
                Event::Begin(sig) => inside = sig.name == method,
                Event::Finish => inside = false,
                Event::Statement(stmt) if inside => body.push(stmt),
                _ => {}
            }
        }

        body
    }
}

impl Emitter for RecordingEmitter {
    fn write_field_declaration(
        &mut self,
        ty: &str,
        constant: &ConstName,
        initializer: Expr,
    ) -> Result<(), EmitError> {
        self.events.push(Event::Field {
            ty: ty.to_string(),
            constant: constant.clone(),
            initializer,
        });

        Ok(())
    }

    fn begin_method(&mut self, signature: MethodSignature) -> Result<(), EmitError> {
        self.events.push(Event::Begin(signature));

        Ok(())
    }

    fn write_statement(&mut self, stmt: Stmt) -> Result<(), EmitError> {
        self.events.push(Event::Statement(stmt));

        Ok(())
    }

    fn finish_method(&mut self) -> Result<(), EmitError> {
        self.events.push(Event::Finish);

        Ok(())
    }
}

///
/// FailingEmitter
///
/// Rejects the first method it is asked to begin.
///

#[derive(Debug, Default)]
pub struct FailingEmitter {
    pub fields: usize,
}

impl Emitter for FailingEmitter {
    fn write_field_declaration(
        &mut self,
        _ty: &str,
        _constant: &ConstName,
        _initializer: Expr,
    ) -> Result<(), EmitError> {
        self.fields += 1;

        Ok(())
    }

    fn begin_method(&mut self, signature: MethodSignature) -> Result<(), EmitError> {
        Err(EmitError::InvalidIdent(signature.name))
    }

    fn write_statement(&mut self, _stmt: Stmt) -> Result<(), EmitError> {
        Ok(())
    }

    fn finish_method(&mut self) -> Result<(), EmitError> {
        Err(EmitError::NoOpenMethod)
    }
}
