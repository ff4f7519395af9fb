use crate::{
    emit::{Emitter, ModelHeader, TokenEmitter},
    error::{EmitError, Error},
    imports::ImportSet,
    slot::SlotAllocator,
    stage::{BaseStage, Stage, SyncStage},
};
use proc_macro2::TokenStream;
use rowgen_paths::CratePaths;
use rowgen_schema::entity::EntitySpec;
use tracing::{debug, info, info_span};

/// Banner written above generated units when headers are enabled.
pub const GENERATED_HEADER: &str = "// @generated by rowgen-build. Do not edit.";

///
/// ModelPlan
///
/// Everything the stages agreed on before any code is written: the import
/// set and the slot layout of the properties array.
///

#[derive(Clone, Debug)]
pub struct ModelPlan {
    pub imports: ImportSet,
    pub slots: SlotAllocator,
}

impl ModelPlan {
    #[must_use]
    pub const fn properties_array_length(&self) -> usize {
        self.slots.len()
    }
}

///
/// GeneratedModel
///

#[derive(Clone, Debug)]
pub struct GeneratedModel {
    pub entity: String,
    pub module: String,
    pub plan: ModelPlan,
    pub tokens: TokenStream,
}

impl GeneratedModel {
    #[must_use]
    pub const fn properties_array_length(&self) -> usize {
        self.plan.properties_array_length()
    }

    /// Source text of the unit, optionally preceded by the generated banner.
    #[must_use]
    pub fn to_source(&self, header: bool) -> String {
        let body = self.tokens.to_string();

        if header {
            format!("{GENERATED_HEADER}\n{body}\n")
        } else {
            format!("{body}\n")
        }
    }
}

///
/// ModelGenerator
///
/// Runs an ordered list of stages over one entity spec. Each hook runs for
/// every stage, in order, before the next hook starts.
///

pub struct ModelGenerator {
    spec: EntitySpec,
    stages: Vec<Box<dyn Stage>>,
    paths: CratePaths,
}

impl ModelGenerator {
    /// Base stage only.
    #[must_use]
    pub fn new(spec: EntitySpec) -> Self {
        Self {
            spec,
            stages: vec![Box::new(BaseStage)],
            paths: CratePaths::new(),
        }
    }

    /// Base stage followed by the sync stage.
    #[must_use]
    pub fn for_spec(spec: EntitySpec) -> Self {
        Self::new(spec).with_stage(SyncStage)
    }

    #[must_use]
    pub fn with_stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    #[must_use]
    pub fn with_paths(mut self, paths: CratePaths) -> Self {
        self.paths = paths;
        self
    }

    #[must_use]
    pub const fn spec(&self) -> &EntitySpec {
        &self.spec
    }

    #[must_use]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Validate the entity, then collect imports and reserve slots.
    pub fn plan(&self) -> Result<ModelPlan, Error> {
        self.spec.validate()?;

        let mut imports = ImportSet::new();
        let mut slots = SlotAllocator::new();

        for stage in &self.stages {
            stage.collect_imports(&self.spec, &mut imports);
            debug!(stage = stage.name(), imports = imports.len(), "collected imports");
        }
        for stage in &self.stages {
            stage.reserve_slots(&self.spec, &mut slots)?;
            debug!(stage = stage.name(), slots = slots.len(), "reserved slots");
        }

        Ok(ModelPlan { imports, slots })
    }

    /// Run the emission hooks of every stage against `emitter`.
    pub fn emit_into(&self, plan: &ModelPlan, emitter: &mut dyn Emitter) -> Result<(), EmitError> {
        for stage in &self.stages {
            stage.emit_fields(&self.spec, emitter)?;
        }
        for stage in &self.stages {
            stage.emit_array_initialization(&self.spec, &plan.slots, emitter)?;
        }
        for stage in &self.stages {
            stage.emit_accessors(&self.spec, emitter)?;
            debug!(stage = stage.name(), "emitted accessors");
        }

        Ok(())
    }

    /// Generate the model unit.
    pub fn generate(&self) -> Result<GeneratedModel, Error> {
        let span = info_span!("generate", entity = %self.spec.name);
        let _enter = span.enter();

        let plan = self.plan()?;

        let mut emitter = TokenEmitter::new(
            ModelHeader {
                type_name: self.spec.name.clone(),
                table_name: self.spec.table_name(),
            },
            plan.imports.clone(),
            self.paths.core.clone(),
        );
        self.emit_into(&plan, &mut emitter)?;
        debug!(
            constants = emitter.symbols().constants().len(),
            methods = emitter.symbols().methods().len(),
            "emission complete"
        );
        let tokens = emitter.finish(&plan.slots)?;

        info!(
            properties = plan.properties_array_length(),
            "generated model"
        );

        Ok(GeneratedModel {
            entity: self.spec.name.clone(),
            module: self.spec.module_name(),
            plan,
            tokens,
        })
    }
}

///
/// TESTS
///
