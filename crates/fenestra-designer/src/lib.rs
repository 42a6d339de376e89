//! Model lifecycle on top of the layout engine: defaults, edits and a
//! session that re-evaluates after every change.

pub mod defaults;
pub mod edit;
pub mod evaluate;
pub mod history;

use fenestra_catalog::Catalog;
use fenestra_layout::EngineConfig;
use fenestra_types::{Appearance, CadModel, OpeningDirection, OpeningType, ProductTemplate};
use tracing::{debug, info};

pub use defaults::model_from_template;
pub use edit::DesignError;
pub use evaluate::{evaluate, Evaluation};
pub use history::History;

/// An editing session for one unit.
///
/// Holds the template, the current model and its evaluation. Every edit
/// replaces the model and evaluates the replacement before returning.
#[derive(Debug)]
pub struct Designer {
    template: ProductTemplate,
    config: EngineConfig,
    model: CadModel,
    evaluation: Evaluation,
    history: History,
}

impl Designer {
    /// Start a session with the template's default model.
    pub fn new(template: ProductTemplate, config: EngineConfig) -> Self {
        let model = model_from_template(&template);
        let evaluation = evaluate(&model, &template, &config);
        info!(template = %template.id, "designer session started");
        Self {
            template,
            config,
            model,
            evaluation,
            history: History::new(),
        }
    }

    /// Start a session for a catalog template, using the catalog's engine
    /// constants.
    pub fn from_catalog(catalog: &Catalog, template_id: &str) -> Result<Self, DesignError> {
        let template = catalog
            .get(template_id)
            .ok_or_else(|| DesignError::TemplateNotFound(template_id.to_string()))?;
        Ok(Self::new(template.clone(), *catalog.engine()))
    }

    pub fn template(&self) -> &ProductTemplate {
        &self.template
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn model(&self) -> &CadModel {
        &self.model
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    /// Only valid models may be ordered.
    pub fn can_add_to_order(&self) -> bool {
        self.evaluation.validation.is_valid
    }

    /// Switch to another template. The model restarts from the new
    /// template's defaults and the undo history is dropped.
    pub fn set_template(&mut self, template: ProductTemplate) {
        info!(from = %self.template.id, to = %template.id, "template switched");
        self.model = model_from_template(&template);
        self.template = template;
        self.history.clear();
        self.reevaluate();
    }

    pub fn set_panel_count(&mut self, count: u32) {
        let next = edit::with_panel_count(&self.model, count);
        self.replace(next);
    }

    pub fn set_panel_type(&mut self, index: usize, kind: OpeningType) -> Result<(), DesignError> {
        let next = edit::with_panel_type(&self.model, index, kind)?;
        self.replace(next);
        Ok(())
    }

    pub fn set_panel_direction(
        &mut self,
        index: usize,
        direction: OpeningDirection,
    ) -> Result<(), DesignError> {
        let next = edit::with_panel_direction(&self.model, index, direction)?;
        self.replace(next);
        Ok(())
    }

    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        let next = edit::with_dimensions(&self.model, width, height);
        self.replace(next);
    }

    pub fn set_transom_height(&mut self, transom_height: u32) {
        let next = edit::with_transom_height(&self.model, transom_height);
        self.replace(next);
    }

    /// Toggle mullions. Enabling them on a series that has none is refused.
    pub fn set_mullions(&mut self, enabled: bool) -> Result<(), DesignError> {
        if enabled && !self.template.rules.allow_mullions {
            return Err(DesignError::MullionsNotAllowed {
                template_id: self.template.id.clone(),
            });
        }
        let next = edit::with_mullions(&self.model, enabled);
        self.replace(next);
        Ok(())
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        let next = edit::with_appearance(&self.model, appearance);
        self.replace(next);
    }

    /// Revert the last edit. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.model.clone()) {
            Some(previous) => {
                self.model = previous;
                self.reevaluate();
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.model.clone()) {
            Some(next) => {
                self.model = next;
                self.reevaluate();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn replace(&mut self, next: CadModel) {
        let previous = std::mem::replace(&mut self.model, next);
        self.history.record(previous);
        self.reevaluate();
    }

    fn reevaluate(&mut self) {
        self.evaluation = evaluate(&self.model, &self.template, &self.config);
        debug!(valid = self.evaluation.validation.is_valid, "session re-evaluated");
    }
}
