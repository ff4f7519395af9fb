use crate::{
    code::{Expr, MethodSignature, Stmt},
    emit::Emitter,
    error::EmitError,
    imports::{Import, ImportSet},
    slot::SlotAllocator,
    stage::Stage,
};
use rowgen_schema::{
    entity::EntitySpec,
    naming::{ROW_ID_COLUMN, constant_name},
    property::SqlType,
};

/// Constraint of the row-id column every model carries.
pub const ROW_ID_CONSTRAINT: &str = "PRIMARY KEY AUTOINCREMENT";

///
/// BaseStage
///
/// The row id plus one typed property, getter and setter per declared
/// column.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct BaseStage;

impl BaseStage {
    pub const NAME: &'static str = "base";
}

impl Stage for BaseStage {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn collect_imports(&self, spec: &EntitySpec, imports: &mut ImportSet) {
        imports.insert(Import::RECORD);
        imports.insert(Import::PROPERTY_MODEL);
        imports.insert(Import::TABLE_MODEL);
        imports.insert(Import::property(SqlType::Long));

        for property in &spec.properties {
            imports.insert(Import::property(property.sql_type));
        }
    }

    fn reserve_slots(&self, spec: &EntitySpec, slots: &mut SlotAllocator) -> Result<(), EmitError> {
        slots.reserve(Self::NAME, constant_name(ROW_ID_COLUMN))?;
        for property in &spec.properties {
            slots.reserve(Self::NAME, property.constant_name())?;
        }

        Ok(())
    }

    fn emit_fields(&self, spec: &EntitySpec, emitter: &mut dyn Emitter) -> Result<(), EmitError> {
        emitter.write_field_declaration(
            SqlType::Long.property_type(),
            &constant_name(ROW_ID_COLUMN),
            Expr::NewProperty {
                sql_type: SqlType::Long,
                column: ROW_ID_COLUMN.to_string(),
                constraint: ROW_ID_CONSTRAINT.to_string(),
            },
        )?;

        for property in &spec.properties {
            emitter.write_field_declaration(
                property.sql_type.property_type(),
                &property.constant_name(),
                Expr::NewProperty {
                    sql_type: property.sql_type,
                    column: property.name.clone(),
                    constraint: property.constraint.clone(),
                },
            )?;
        }

        Ok(())
    }

    fn emit_accessors(&self, spec: &EntitySpec, emitter: &mut dyn Emitter) -> Result<(), EmitError> {
        let id = constant_name(ROW_ID_COLUMN);
        emitter.write_method(
            MethodSignature::optional_getter("id", SqlType::Long)
                .doc("Row id, unset until the row is stored."),
            vec![Stmt::Return(Expr::Get(id.clone()))],
        )?;
        emitter.write_method(
            MethodSignature::mutator("set_id").arg("id", SqlType::Long),
            vec![
                Stmt::Set {
                    property: id,
                    value: Expr::Arg("id".to_string()),
                },
                Stmt::ReturnSelf,
            ],
        )?;

        for property in &spec.properties {
            let constant = property.constant_name();

            emitter.write_method(
                MethodSignature::optional_getter(property.getter_name(), property.sql_type),
                vec![Stmt::Return(Expr::Get(constant.clone()))],
            )?;
            emitter.write_method(
                MethodSignature::mutator(property.setter_name()).arg("value", property.sql_type),
                vec![
                    Stmt::Set {
                        property: constant,
                        value: Expr::Arg("value".to_string()),
                    },
                    Stmt::ReturnSelf,
                ],
            )?;
        }

        Ok(())
    }
}
