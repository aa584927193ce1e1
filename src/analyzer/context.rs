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

//! Analyzer configuration.
//!
//! Everything that may vary between runs without changing the analyzer's
//! code: table capacity, global base address, identifier length and the
//! scope and lookup policies.

use std::fmt;
use std::str::FromStr;

use super::allocator::DEFAULT_GLOBAL_BASE;
use super::scope::ScopePolicy;
use super::symbol_table::DEFAULT_CAPACITY;

/// Default maximum identifier length in characters.
pub const DEFAULT_MAX_IDENTIFIER_LEN: usize = 29;

/// How names are resolved in assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupPolicy {
    /// First entry with the name, in insertion order, regardless of scope.
    #[default]
    FirstMatch,
    /// Prefer the active scope, then Global, then first match.
    ScopeAware,
}

impl FromStr for LookupPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-match" => Ok(LookupPolicy::FirstMatch),
            "scope-aware" => Ok(LookupPolicy::ScopeAware),
            other => Err(format!(
                "unknown lookup policy '{}' (expected 'first-match' or 'scope-aware')",
                other
            )),
        }
    }
}

impl fmt::Display for LookupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupPolicy::FirstMatch => write!(f, "first-match"),
            LookupPolicy::ScopeAware => write!(f, "scope-aware"),
        }
    }
}

/// Configuration for an [`Analyzer`](super::Analyzer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Maximum number of symbol table entries.
    pub capacity: usize,
    /// First address of the global data segment.
    pub global_base: u32,
    /// Identifiers longer than this (in characters) are truncated.
    pub max_identifier_len: usize,
    /// How opened scopes relate to each other.
    pub scope_policy: ScopePolicy,
    /// How assignment operands are resolved.
    pub lookup_policy: LookupPolicy,
}

impl AnalyzerConfig {
    /// Set the table capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the global base address.
    pub fn with_global_base(mut self, global_base: u32) -> Self {
        self.global_base = global_base;
        self
    }

    /// Set the maximum identifier length.
    pub fn with_max_identifier_len(mut self, max_identifier_len: usize) -> Self {
        self.max_identifier_len = max_identifier_len;
        self
    }

    /// Set the scope policy.
    pub fn with_scope_policy(mut self, scope_policy: ScopePolicy) -> Self {
        self.scope_policy = scope_policy;
        self
    }

    /// Set the lookup policy.
    pub fn with_lookup_policy(mut self, lookup_policy: LookupPolicy) -> Self {
        self.lookup_policy = lookup_policy;
        self
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            global_base: DEFAULT_GLOBAL_BASE,
            max_identifier_len: DEFAULT_MAX_IDENTIFIER_LEN,
            scope_policy: ScopePolicy::Flat,
            lookup_policy: LookupPolicy::FirstMatch,
        }
    }
}
