use crate::{
    code::{Expr, MethodSignature, Stmt},
    emit::Emitter,
    error::EmitError,
    imports::{Import, ImportSet},
    slot::SlotAllocator,
    stage::Stage,
};
use rowgen_core::sync::RowSyncState;
use rowgen_schema::{
    entity::EntitySpec,
    naming::{
        CONFIRM_ORIGIN_INSERTION, MARK_DELETING, MARK_IDLE, MARK_UPDATING, ORIGIN_ID_COLUMN,
        ORIGIN_ID_GETTER, ROW_STATE_GETTER, ROW_STATUS_COLUMN, constant_name,
    },
    property::SqlType,
};

/// Constraint of the `origin_id` column.
pub const ORIGIN_ID_CONSTRAINT: &str = "DEFAULT 0 NOT NULL";

/// Constraint of the `row_status` column; new rows start out waiting for
/// origin confirmation.
#[must_use]
pub fn row_status_constraint() -> String {
    format!("DEFAULT {} NOT NULL", RowSyncState::default().code())
}

///
/// SyncStage
///
/// Adds the origin binding to syncable models: an `origin_id` column, a
/// `row_status` column holding a `RowSyncState` code, and the methods that
/// drive the state machine. Models that are not syncable pass through
/// untouched.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct SyncStage;

impl SyncStage {
    pub const NAME: &'static str = "sync";

    fn columns() -> [(SqlType, &'static str, String); 2] {
        [
            (SqlType::Long, ORIGIN_ID_COLUMN, ORIGIN_ID_CONSTRAINT.to_string()),
            (SqlType::Integer, ROW_STATUS_COLUMN, row_status_constraint()),
        ]
    }

    // set_state
    fn set_state(state: RowSyncState) -> Stmt {
        Stmt::Set {
            property: constant_name(ROW_STATUS_COLUMN),
            value: Expr::RowState(state),
        }
    }
}

impl Stage for SyncStage {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn collect_imports(&self, spec: &EntitySpec, imports: &mut ImportSet) {
        if !spec.syncable {
            return;
        }

        for (sql_type, ..) in Self::columns() {
            imports.insert(Import::property(sql_type));
        }
    }

    fn reserve_slots(&self, spec: &EntitySpec, slots: &mut SlotAllocator) -> Result<(), EmitError> {
        if !spec.syncable {
            return Ok(());
        }

        for (_, column, _) in Self::columns() {
            slots.reserve(Self::NAME, constant_name(column))?;
        }

        Ok(())
    }

    fn emit_fields(&self, spec: &EntitySpec, emitter: &mut dyn Emitter) -> Result<(), EmitError> {
        if !spec.syncable {
            return Ok(());
        }

        for (sql_type, column, constraint) in Self::columns() {
            emitter.write_field_declaration(
                sql_type.property_type(),
                &constant_name(column),
                Expr::NewProperty {
                    sql_type,
                    column: column.to_string(),
                    constraint,
                },
            )?;
        }

        Ok(())
    }

    fn emit_accessors(&self, spec: &EntitySpec, emitter: &mut dyn Emitter) -> Result<(), EmitError> {
        if !spec.syncable {
            return Ok(());
        }

        let origin_id = constant_name(ORIGIN_ID_COLUMN);
        let row_status = constant_name(ROW_STATUS_COLUMN);

        emitter.write_method(
            MethodSignature::getter(ORIGIN_ID_GETTER, SqlType::Long)
                .doc("Id of this row at the origin, `0` until confirmed."),
            vec![Stmt::Return(Expr::GetOrDeclared(origin_id.clone()))],
        )?;
        emitter.write_method(
            MethodSignature::mutator(CONFIRM_ORIGIN_INSERTION)
                .arg("origin_id", SqlType::Long)
                .doc("Record the origin's id for this row and mark it idle."),
            vec![
                Stmt::Set {
                    property: origin_id,
                    value: Expr::Arg("origin_id".to_string()),
                },
                Self::set_state(RowSyncState::Idle),
                Stmt::ReturnSelf,
            ],
        )?;
        emitter.write_method(
            MethodSignature::getter(ROW_STATE_GETTER, SqlType::Integer)
                .doc("Stored `RowSyncState` code, the column default when unset."),
            vec![Stmt::Return(Expr::GetOrDeclared(row_status))],
        )?;

        for (method, state) in [
            (MARK_UPDATING, RowSyncState::Updating),
            (MARK_DELETING, RowSyncState::Deleting),
            (MARK_IDLE, RowSyncState::Idle),
        ] {
            emitter.write_method(
                MethodSignature::mutator(method),
                vec![Self::set_state(state), Stmt::ReturnSelf],
            )?;
        }

        Ok(())
    }
}

///
/// TESTS
///
