// Symtab - A symbol table and scope simulator for a C-like compiler front end
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Scope management for the semantic analyzer.
//!
//! The controller tracks the active scope and, for each local frame, the
//! next free frame offset. Two policies are supported:
//!
//! - [`ScopePolicy::Flat`]: a single local slot. Opening a scope replaces
//!   whatever local scope was active, closing any scope returns to Global.
//! - [`ScopePolicy::Nested`]: a stack of frames. Closing a scope returns to
//!   the enclosing frame with its offset cursor intact.

use std::fmt;
use std::str::FromStr;

use super::symbol::GLOBAL_SCOPE;

/// How opened scopes relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopePolicy {
    /// Only one local scope is tracked at a time.
    #[default]
    Flat,
    /// Scopes form a stack.
    Nested,
}

impl FromStr for ScopePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(ScopePolicy::Flat),
            "nested" => Ok(ScopePolicy::Nested),
            other => Err(format!(
                "unknown scope policy '{}' (expected 'flat' or 'nested')",
                other
            )),
        }
    }
}

impl fmt::Display for ScopePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopePolicy::Flat => write!(f, "flat"),
            ScopePolicy::Nested => write!(f, "nested"),
        }
    }
}

/// A local scope and its allocation cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The scope name.
    pub name: String,
    /// Next free offset relative to the frame base.
    pub next_offset: u32,
}

impl Frame {
    /// Create a fresh frame starting at offset 0.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            next_offset: 0,
        }
    }
}

/// Tracks the active scope.
#[derive(Debug, Clone, Default)]
pub struct ScopeController {
    policy: ScopePolicy,
    /// Open local frames, innermost last. Empty means Global.
    frames: Vec<Frame>,
}

impl ScopeController {
    /// Create a controller in the Global state.
    pub fn new(policy: ScopePolicy) -> Self {
        Self {
            policy,
            frames: Vec::new(),
        }
    }

    /// Enter a local scope with a fresh frame.
    pub fn push_scope(&mut self, name: &str) {
        if self.policy == ScopePolicy::Flat {
            self.frames.clear();
        }
        self.frames.push(Frame::new(name));
    }

    /// Leave the current local scope.
    ///
    /// Returns the name of the scope that was closed, or `None` if already
    /// in Global (a no-op).
    pub fn pop_scope(&mut self) -> Option<String> {
        let closed = self.frames.pop()?;
        if self.policy == ScopePolicy::Flat {
            self.frames.clear();
        }
        Some(closed.name)
    }

    /// Name of the active scope.
    pub fn current(&self) -> &str {
        self.frames
            .last()
            .map(|frame| frame.name.as_str())
            .unwrap_or(GLOBAL_SCOPE)
    }

    /// The active local frame, if any.
    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// The active local frame, if any (mutable).
    pub fn current_frame_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    /// Check if the Global scope is active.
    pub fn is_global(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of open local frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// The configured policy.
    pub fn policy(&self) -> ScopePolicy {
        self.policy
    }

    /// Return to Global, dropping all frames.
    pub fn reset(&mut self) {
        self.frames.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_global() {
        let scopes = ScopeController::new(ScopePolicy::Flat);
        assert!(scopes.is_global());
        assert_eq!(scopes.current(), GLOBAL_SCOPE);
        assert_eq!(scopes.current_frame(), None);
    }

    #[test]
    fn test_flat_push_replaces_local_scope() {
        let mut scopes = ScopeController::new(ScopePolicy::Flat);
        scopes.push_scope("f");
        scopes.current_frame_mut().unwrap().next_offset = 12;

        scopes.push_scope("g");
        assert_eq!(scopes.current(), "g");
        assert_eq!(scopes.depth(), 1);
        assert_eq!(scopes.current_frame().unwrap().next_offset, 0);

        assert_eq!(scopes.pop_scope(), Some("g".to_string()));
        assert!(scopes.is_global());
    }

    #[test]
    fn test_pop_in_global_is_noop() {
        let mut scopes = ScopeController::new(ScopePolicy::Flat);
        assert_eq!(scopes.pop_scope(), None);
        assert!(scopes.is_global());
    }

    #[test]
    fn test_nested_pop_restores_enclosing_frame() {
        let mut scopes = ScopeController::new(ScopePolicy::Nested);
        scopes.push_scope("outer");
        scopes.current_frame_mut().unwrap().next_offset = 8;

        scopes.push_scope("inner");
        assert_eq!(scopes.depth(), 2);
        assert_eq!(scopes.current_frame().unwrap().next_offset, 0);

        assert_eq!(scopes.pop_scope(), Some("inner".to_string()));
        assert_eq!(scopes.current(), "outer");
        assert_eq!(scopes.current_frame().unwrap().next_offset, 8);

        scopes.pop_scope();
        assert!(scopes.is_global());
    }

    #[test]
    fn test_reset() {
        let mut scopes = ScopeController::new(ScopePolicy::Nested);
        scopes.push_scope("a");
        scopes.push_scope("b");
        scopes.reset();
        assert!(scopes.is_global());
        assert_eq!(scopes.policy(), ScopePolicy::Nested);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("flat".parse::<ScopePolicy>(), Ok(ScopePolicy::Flat));
        assert_eq!("nested".parse::<ScopePolicy>(), Ok(ScopePolicy::Nested));
        assert!("stack".parse::<ScopePolicy>().is_err());
    }
}
