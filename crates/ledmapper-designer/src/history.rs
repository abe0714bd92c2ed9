//! Undo/redo over reduced states.

use crate::state::{Action, MappingState};

/// Most states kept on the undo stack.
pub const MAX_HISTORY: usize = 50;

/// Keeps the current [`MappingState`] plus the states it replaced.
#[derive(Debug, Clone)]
pub struct MappingHistory {
    current: MappingState,
    undo_stack: Vec<MappingState>,
    redo_stack: Vec<MappingState>,
}

impl MappingHistory {
    pub fn new(initial: MappingState) -> Self {
        Self {
            current: initial,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn current(&self) -> &MappingState {
        &self.current
    }

    /// Reduces `action` into a new current state.
    ///
    /// Actions that change nothing are not recorded.
    pub fn dispatch(&mut self, action: Action) -> &MappingState {
        let next = self.current.reduce(action);
        if next != self.current {
            let previous = std::mem::replace(&mut self.current, next);
            self.undo_stack.push(previous);
            self.redo_stack.clear();
            if self.undo_stack.len() > MAX_HISTORY {
                self.undo_stack.remove(0);
            }
        }
        &self.current
    }

    /// Undo last change
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(previous) => {
                let undone = std::mem::replace(&mut self.current, previous);
                self.redo_stack.push(undone);
                true
            }
            None => false,
        }
    }

    /// Redo last undo
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(next) => {
                let redone = std::mem::replace(&mut self.current, next);
                self.undo_stack.push(redone);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn into_current(self) -> MappingState {
        self.current
    }
}
