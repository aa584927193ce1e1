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

//! Symtab CLI
//!
//! Simulates the symbol table of a C-like compiler front end.

use clap::{ArgAction, Parser};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use symtab::analyzer::{
    Analyzer, AnalyzerConfig, Collected, LookupPolicy, ScopePolicy, DEFAULT_CAPACITY,
    DEFAULT_GLOBAL_BASE, DEFAULT_MAX_IDENTIFIER_LEN,
};
use symtab::output::{format_from_extension, render, write_report, ReportFormat};
use symtab::runner::{analyze_file, run_console, RunnerError, SourceWatcher};

/// Symtab - A symbol table and scope simulator
#[derive(Parser, Debug)]
#[command(name = "symtab")]
#[command(author = "Marcel Joachim Kloubert")]
#[command(version)]
#[command(about = "A symbol table and scope simulator for a C-like compiler front end")]
#[command(long_about = r#"
Symtab reads C-style statements line by line, builds a symbol table with
global addresses and frame-relative offsets, and reports undeclared names,
duplicate declarations and type mismatches.

Recognized statements:
  int x;   float y;   char c;
  void f() {   ...   }
  a = b;   a = b + 1;

Example usage:
  symtab input.c
  symtab input.c -o table.csv
  symtab a.c b.c --scopes nested --lookup scope-aware
  symtab input.c --watch
  symtab                      (interactive console, 'exit' to finish)
"#)]
struct Cli {
    /// Source files to analyze. Each file is an independent run.
    /// Without files, statements are read from the console.
    files: Vec<PathBuf>,

    /// Also write the report to this file (.txt/.tbl or .csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the report as CSV instead of a table
    #[arg(long)]
    csv: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Maximum number of symbol table entries
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// First global address
    #[arg(long, default_value_t = DEFAULT_GLOBAL_BASE)]
    global_base: u32,

    /// Scope policy: flat or nested
    #[arg(long, default_value = "flat")]
    scopes: ScopePolicy,

    /// Lookup policy: first-match or scope-aware
    #[arg(long, default_value = "first-match")]
    lookup: LookupPolicy,

    /// Identifiers longer than this are truncated
    #[arg(long, default_value_t = DEFAULT_MAX_IDENTIFIER_LEN, value_parser = parse_identifier_len)]
    max_ident_len: usize,

    /// Re-run the analysis whenever a source file changes
    #[arg(short, long, requires = "files")]
    watch: bool,

    /// Render diagnostics with source labels
    #[arg(long)]
    pretty: bool,

    /// Disable colored diagnostics
    #[arg(long)]
    no_color: bool,
}

fn parse_identifier_len(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(len) => Ok(len),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    fn config(&self) -> AnalyzerConfig {
        AnalyzerConfig::default()
            .with_capacity(self.capacity)
            .with_global_base(self.global_base)
            .with_max_identifier_len(self.max_ident_len)
            .with_scope_policy(self.scopes)
            .with_lookup_policy(self.lookup)
    }

    fn stdout_format(&self) -> ReportFormat {
        if self.csv {
            ReportFormat::Csv
        } else {
            ReportFormat::Table
        }
    }
}

/// Where the report file goes, if anywhere.
struct ReportTarget {
    path: PathBuf,
    format: ReportFormat,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let target = match &cli.output {
        Some(path) => match format_from_extension(path) {
            Some(format) => Some(ReportTarget {
                path: path.clone(),
                format,
            }),
            None => {
                eprintln!("Error: Unknown report format. Use .txt, .tbl or .csv extension.");
                return ExitCode::from(2);
            }
        },
        None => None,
    };

    if target.is_some() && cli.files.len() > 1 {
        eprintln!("Error: --output takes a single input file.");
        return ExitCode::from(2);
    }

    let mut analyzer = Analyzer::with_sink(cli.config(), Collected::new());

    if cli.files.is_empty() {
        return match run_console_session(&cli, &mut analyzer, target.as_ref()) {
            Ok(passed) => exit_for(passed),
            Err(e) => fail(&e),
        };
    }

    let passed = match run_files(&cli, &mut analyzer, target.as_ref()) {
        Ok(passed) => passed,
        Err(e) => return fail(&e),
    };

    if cli.watch {
        return run_watch_loop(&cli, &mut analyzer, target.as_ref());
    }

    exit_for(passed)
}

fn exit_for(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn fail(error: &RunnerError) -> ExitCode {
    eprintln!("Error: {}", error);
    ExitCode::from(error.exit_code())
}

/// Analyze every input file as an independent run.
///
/// Returns `true` if every run passed.
fn run_files(
    cli: &Cli,
    analyzer: &mut Analyzer<Collected>,
    target: Option<&ReportTarget>,
) -> Result<bool, RunnerError> {
    run_paths(cli, analyzer, &cli.files, target)
}

fn run_paths(
    cli: &Cli,
    analyzer: &mut Analyzer<Collected>,
    paths: &[PathBuf],
    target: Option<&ReportTarget>,
) -> Result<bool, RunnerError> {
    let mut all_passed = true;
    for path in paths {
        all_passed &= run_file(cli, analyzer, path, target)?;
    }
    Ok(all_passed)
}

fn run_file(
    cli: &Cli,
    analyzer: &mut Analyzer<Collected>,
    path: &Path,
    target: Option<&ReportTarget>,
) -> Result<bool, RunnerError> {
    analyzer.reset();
    analyzer.sink_mut().clear();

    println!("--- Processing File: {} ---", path.display());
    let source = analyze_file(path, analyzer)?;

    let filename = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("<input>");
    print_diagnostics(cli, analyzer, &source, filename);

    finish_run(cli, analyzer, target)
}

fn run_console_session(
    cli: &Cli,
    analyzer: &mut Analyzer<Collected>,
    target: Option<&ReportTarget>,
) -> Result<bool, RunnerError> {
    let stdin = io::stdin();
    run_console(stdin.lock(), io::stdout(), analyzer)?;
    finish_run(cli, analyzer, target)
}

/// Print the report and write the report file.
fn finish_run(
    cli: &Cli,
    analyzer: &Analyzer<Collected>,
    target: Option<&ReportTarget>,
) -> Result<bool, RunnerError> {
    let report = analyzer.report();
    print!("{}", render(&report, cli.stdout_format()));

    if let Some(target) = target {
        write_report(&report, &target.path, target.format).map_err(|source| {
            RunnerError::Write {
                path: target.path.clone(),
                source,
            }
        })?;
    }

    Ok(report.passed())
}

fn print_diagnostics(cli: &Cli, analyzer: &Analyzer<Collected>, source: &str, filename: &str) {
    let color = !cli.no_color && io::stderr().is_terminal();
    for diagnostic in &analyzer.sink().diagnostics {
        if cli.pretty {
            eprint!("{}", diagnostic.render_pretty(source, filename, color));
        } else {
            eprint!("{}", diagnostic.format(source, Some(filename)));
        }
    }
}

/// Re-run the changed files on each save until the watcher fails.
fn run_watch_loop(
    cli: &Cli,
    analyzer: &mut Analyzer<Collected>,
    target: Option<&ReportTarget>,
) -> ExitCode {
    let watcher = match SourceWatcher::new(&cli.files) {
        Ok(w) => w,
        Err(e) => return fail(&e),
    };

    println!();
    println!("Watching for changes... (Press Ctrl+C to stop)");

    loop {
        let changed = match watcher.wait_for_change() {
            Ok(changed) => changed,
            Err(e) => return fail(&e),
        };

        println!();
        println!("Change detected, re-running analysis...");

        if let Err(e) = run_paths(cli, analyzer, &changed, target) {
            eprintln!("Error: {}", e);
            println!("Fix the problem and save to retry.");
            continue;
        }

        println!("Watching for changes...");
    }
}
