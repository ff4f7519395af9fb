//! Pipeline stages.
//!
//! A model is generated by running every stage through each hook in turn:
//! imports, slot reservation, fields, array initialization, then accessors.
//! Stages never see each other; everything they share goes through the
//! import set, the slot allocator and the emitter.

mod base;
mod sync;

pub use base::{BaseStage, ROW_ID_CONSTRAINT};
pub use sync::{ORIGIN_ID_CONSTRAINT, SyncStage, row_status_constraint};

use crate::{code::Stmt, emit::Emitter, error::EmitError, imports::ImportSet, slot::SlotAllocator};
use rowgen_schema::entity::EntitySpec;

///
/// Stage
///
/// One contributor to a generated model. Every hook except `name` defaults
/// to doing nothing.
///

pub trait Stage {
    /// Owner tag for the slots this stage reserves.
    fn name(&self) -> &'static str;

    fn collect_imports(&self, _spec: &EntitySpec, _imports: &mut ImportSet) {}

    fn reserve_slots(&self, _spec: &EntitySpec, _slots: &mut SlotAllocator) -> Result<(), EmitError> {
        Ok(())
    }

    fn emit_fields(&self, _spec: &EntitySpec, _emitter: &mut dyn Emitter) -> Result<(), EmitError> {
        Ok(())
    }

    /// Assign every slot this stage reserved, in index order.
    fn emit_array_initialization(
        &self,
        _spec: &EntitySpec,
        slots: &SlotAllocator,
        emitter: &mut dyn Emitter,
    ) -> Result<(), EmitError> {
        for slot in slots.owned_by(self.name()) {
            emitter.write_statement(Stmt::AssignSlot {
                index: slot.index,
                property: slot.constant.clone(),
            })?;
        }

        Ok(())
    }

    fn emit_accessors(&self, _spec: &EntitySpec, _emitter: &mut dyn Emitter) -> Result<(), EmitError> {
        Ok(())
    }
}
