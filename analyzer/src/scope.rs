//! Variable scope management.

use crate::Type;
use std::collections::HashMap;
use tracing::trace;

/// A scope for variable bindings.
///
/// Frames form a chain from the outermost (index 0) to the innermost.
/// Lookups walk from the innermost frame outwards, so an inner definition
/// shadows an outer one.
#[derive(Debug, Clone)]
pub struct Scope {
    /// Stack of scope frames. Each frame maps a name to its resolved type.
    frames: Vec<HashMap<String, Type>>,
}

impl Scope {
    /// Create a new scope with a single empty frame.
    pub fn new() -> Self {
        Self {
            frames: vec![HashMap::new()],
        }
    }

    /// Create a child scope whose parent frames are those of `parent`.
    pub fn child_of(parent: Scope) -> Self {
        let mut scope = parent;
        scope.push();
        scope
    }

    /// Push a new scope frame.
    pub fn push(&mut self) {
        self.frames.push(HashMap::new());
    }

    /// Pop the current scope frame. The outermost frame is never popped.
    pub fn pop(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Define a variable in the current frame.
    /// Returns `false` if the variable is already defined in the current frame.
    pub fn define(&mut self, name: impl Into<String>, ty: Type) -> bool {
        let name = name.into();
        let depth = self.frames.len();
        let Some(frame) = self.frames.last_mut() else {
            return false;
        };
        if frame.contains_key(&name) {
            return false;
        }
        trace!(name = %name, ty = %ty, depth, "define variable");
        frame.insert(name, ty);
        true
    }

    /// Look up a variable by name, searching from innermost to outermost frame.
    pub fn lookup(&self, name: &str) -> Option<Type> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name).copied())
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}
