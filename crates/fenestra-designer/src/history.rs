use fenestra_types::CadModel;

/// Snapshots kept before the oldest is dropped.
pub const HISTORY_LIMIT: usize = 100;

/// Two-stack undo/redo history of whole-model snapshots.
///
/// Models are replaced rather than mutated, so a snapshot is all an edit
/// needs to be reversible.
#[derive(Debug, Default)]
pub struct History {
    undo: Vec<CadModel>,
    redo: Vec<CadModel>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the model an edit replaced, clearing the redo stack.
    pub fn record(&mut self, previous: CadModel) {
        if self.undo.len() == HISTORY_LIMIT {
            self.undo.remove(0);
        }
        self.undo.push(previous);
        self.redo.clear();
    }

    /// Step back: `current` moves to the redo stack and the previous
    /// snapshot is returned.
    pub fn undo(&mut self, current: CadModel) -> Option<CadModel> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    pub fn redo(&mut self, current: CadModel) -> Option<CadModel> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
