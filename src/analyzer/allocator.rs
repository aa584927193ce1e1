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

//! Storage allocation for declared symbols.
//!
//! Globals are laid out in a single flat data segment starting at a fixed
//! base address. Locals get offsets relative to the base pointer of the
//! active frame; each frame starts at offset 0.

use super::scope::ScopeController;
use super::symbol::{Location, GLOBAL_SCOPE};

/// Default first address of the global data segment.
pub const DEFAULT_GLOBAL_BASE: u32 = 1000;

/// Hands out addresses and frame offsets.
#[derive(Debug, Clone)]
pub struct Allocator {
    /// First global address.
    base: u32,
    /// Next free global address. Never decreases during a run.
    next_global: u32,
}

impl Allocator {
    /// Create an allocator whose global segment starts at `base`.
    pub fn new(base: u32) -> Self {
        Self {
            base,
            next_global: base,
        }
    }

    /// Allocate `size` bytes in the active scope and advance its cursor.
    ///
    /// Address or offset is decided by the active scope's name alone, so a
    /// frame called `Global` still allocates in the global segment.
    /// Returns `None`, with every cursor unchanged, if the block would run
    /// past the end of the address space.
    pub fn allocate(&mut self, scopes: &mut ScopeController, size: u32) -> Option<Location> {
        if scopes.current() == GLOBAL_SCOPE {
            let address = self.next_global;
            self.next_global = address.checked_add(size)?;
            return Some(Location::Address(address));
        }

        let frame = scopes.current_frame_mut()?;
        let offset = frame.next_offset;
        frame.next_offset = offset.checked_add(size)?;
        Some(Location::Offset(offset))
    }

    /// Next free global address.
    pub fn next_global_address(&self) -> u32 {
        self.next_global
    }

    /// First global address.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Rewind the global segment to its base.
    pub fn reset(&mut self) {
        self.next_global = self.base;
    }
}

impl Default for Allocator {
    fn default() -> Self {
        Self::new(DEFAULT_GLOBAL_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::scope::ScopePolicy;

    #[test]
    fn test_global_allocation_is_linear() {
        let mut allocator = Allocator::default();
        let mut scopes = ScopeController::new(ScopePolicy::Flat);

        assert_eq!(allocator.allocate(&mut scopes, 4), Some(Location::Address(1000)));
        assert_eq!(allocator.allocate(&mut scopes, 8), Some(Location::Address(1004)));
        assert_eq!(allocator.allocate(&mut scopes, 1), Some(Location::Address(1012)));
        assert_eq!(allocator.next_global_address(), 1013);
    }

    #[test]
    fn test_local_offsets_reset_per_frame() {
        let mut allocator = Allocator::new(2000);
        let mut scopes = ScopeController::new(ScopePolicy::Flat);

        scopes.push_scope("f");
        assert_eq!(allocator.allocate(&mut scopes, 4), Some(Location::Offset(0)));
        assert_eq!(allocator.allocate(&mut scopes, 1), Some(Location::Offset(4)));

        scopes.push_scope("g");
        assert_eq!(allocator.allocate(&mut scopes, 8), Some(Location::Offset(0)));

        // Globals are untouched by local activity.
        scopes.pop_scope();
        assert_eq!(allocator.allocate(&mut scopes, 4), Some(Location::Address(2000)));
    }

    #[test]
    fn test_global_cursor_survives_scope_changes() {
        let mut allocator = Allocator::default();
        let mut scopes = ScopeController::new(ScopePolicy::Flat);

        allocator.allocate(&mut scopes, 4);
        scopes.push_scope("f");
        allocator.allocate(&mut scopes, 8);
        scopes.pop_scope();
        assert_eq!(allocator.allocate(&mut scopes, 4), Some(Location::Address(1004)));
    }

    #[test]
    fn test_frame_named_global_allocates_addresses() {
        let mut allocator = Allocator::default();
        let mut scopes = ScopeController::new(ScopePolicy::Flat);

        allocator.allocate(&mut scopes, 4);
        scopes.push_scope(GLOBAL_SCOPE);
        assert_eq!(allocator.allocate(&mut scopes, 4), Some(Location::Address(1004)));
        assert_eq!(allocator.next_global_address(), 1008);
    }

    #[test]
    fn test_global_overflow_is_rejected() {
        let mut allocator = Allocator::new(u32::MAX - 5);
        let mut scopes = ScopeController::default();

        assert_eq!(
            allocator.allocate(&mut scopes, 4),
            Some(Location::Address(u32::MAX - 5))
        );
        assert_eq!(allocator.allocate(&mut scopes, 4), None);
        assert_eq!(allocator.next_global_address(), u32::MAX - 1);

        // A smaller block still fits.
        assert_eq!(
            allocator.allocate(&mut scopes, 1),
            Some(Location::Address(u32::MAX - 1))
        );
    }

    #[test]
    fn test_frame_overflow_is_rejected() {
        let mut allocator = Allocator::default();
        let mut scopes = ScopeController::default();
        scopes.push_scope("f");
        if let Some(frame) = scopes.current_frame_mut() {
            frame.next_offset = u32::MAX - 2;
        }

        assert_eq!(allocator.allocate(&mut scopes, 8), None);
        assert_eq!(
            scopes.current_frame().map(|f| f.next_offset),
            Some(u32::MAX - 2)
        );
        assert_eq!(allocator.next_global_address(), 1000);
    }

    #[test]
    fn test_reset() {
        let mut allocator = Allocator::new(500);
        let mut scopes = ScopeController::default();
        allocator.allocate(&mut scopes, 8);
        allocator.reset();
        assert_eq!(allocator.next_global_address(), 500);
        assert_eq!(allocator.base(), 500);
    }
}
