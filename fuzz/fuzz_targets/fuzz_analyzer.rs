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

//! Fuzz target for the analyzer core.
//!
//! Drives the analyzer with structured statement sequences and checks the
//! table invariants after every step.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_analyzer -- -max_total_time=60

#![no_main]

use std::collections::HashSet;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use symtab::analyzer::{Analyzer, AnalyzerConfig, ScopePolicy};
use symtab::ast::Statement;

const NAMES: [&str; 4] = ["a", "b", "c", "d"];
const TYPES: [&str; 4] = ["int", "float", "char", "bool"];

#[derive(Debug, Arbitrary)]
enum Op {
    Declare(u8, u8),
    Open(u8),
    Close,
    Assign(u8, u8),
}

#[derive(Debug, Arbitrary)]
struct Input {
    nested: bool,
    capacity: u8,
    ops: Vec<Op>,
}

fn pick(table: &[&'static str], index: u8) -> &'static str {
    table[index as usize % table.len()]
}

fuzz_target!(|input: Input| {
    let policy = if input.nested {
        ScopePolicy::Nested
    } else {
        ScopePolicy::Flat
    };
    let config = AnalyzerConfig::default()
        .with_capacity(input.capacity as usize)
        .with_scope_policy(policy);
    let mut analyzer = Analyzer::new(config);

    for op in &input.ops {
        let statement = match op {
            Op::Declare(t, n) => Statement::declare(pick(&TYPES, *t), pick(&NAMES, *n)),
            Op::Open(n) => Statement::open_scope(pick(&NAMES, *n)),
            Op::Close => Statement::close_scope(),
            Op::Assign(t, s) => Statement::assign(pick(&NAMES, *t), pick(&NAMES, *s)),
        };
        analyzer.process(&statement);
    }

    assert!(analyzer.symbols().len() <= input.capacity as usize);

    let mut seen = HashSet::new();
    for entry in analyzer.symbols().entries() {
        assert!(seen.insert((entry.name.as_str(), entry.scope.as_str())));
    }
});
