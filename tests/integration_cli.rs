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

//! End-to-end CLI integration tests.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::TempDir;

fn cargo_bin() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_symtab"));
    command.env_remove("RUST_LOG");
    command
}

fn write_source(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Test --help flag.
#[test]
fn test_help_flag() {
    let output = cargo_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("symtab"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--scopes"));
    assert!(stdout.contains("--lookup"));
}

/// Test --version flag.
#[test]
fn test_version_flag() {
    let output = cargo_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("symtab"));
    assert!(stdout.contains("0.1.0"));
}

#[test]
fn test_clean_file_succeeds() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "clean.c", "int x;\nfloat y;\n");

    let output = cargo_bin().arg(&source).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("FINAL SYMBOL TABLE SUMMARY (Total Entries: 2, Errors: 0)"));
    assert!(stdout.contains("COMPILATION STATUS: SUCCESS"));
}

#[test]
fn test_errors_exit_with_one() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "bad.c", "a = b;\n");

    let output = cargo_bin().arg(&source).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error[E200]"));
    assert!(stderr.contains("--> bad.c:1:1"));
}

#[test]
fn test_warnings_do_not_fail() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "warn.c", "int a;\nfloat b;\na = b;\nx = 5;\n");

    let output = cargo_bin().arg(&source).output().unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning[W100]"));
    assert!(stderr.contains("warning[W101]"));
}

#[test]
fn test_missing_file_is_io_failure() {
    let dir = TempDir::new().unwrap();

    let output = cargo_bin()
        .arg(dir.path().join("missing.c"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot open"));
}

#[test]
fn test_each_file_is_an_independent_run() {
    let dir = TempDir::new().unwrap();
    let first = write_source(&dir, "first.c", "int x;\n");
    let second = write_source(&dir, "second.c", "int x;\n");

    let output = cargo_bin().arg(&first).arg(&second).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("(Total Entries: 1, Errors: 0)").count(), 2);
}

#[test]
fn test_csv_report_file() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "input.c", "void f() {\nchar c;\n}\n");
    let report = dir.path().join("table.csv");

    let output = cargo_bin()
        .arg(&source)
        .arg("-o")
        .arg(&report)
        .output()
        .unwrap();

    assert!(output.status.success());
    let written = std::fs::read_to_string(&report).unwrap();
    assert_eq!(
        written,
        "name,type,scope,size,location,end,kind\nc,char,f,1,0,0,offset\n"
    );
}

#[test]
fn test_unknown_report_extension_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "input.c", "int x;\n");

    let output = cargo_bin()
        .arg(&source)
        .arg("-o")
        .arg(dir.path().join("table.prg"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_scope_policy_is_usage_error() {
    let output = cargo_bin().args(["--scopes", "deep"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_zero_identifier_length_is_usage_error() {
    let output = cargo_bin().args(["--max-ident-len", "0"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_capacity_flag() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "input.c", "int a;\nint b;\n");

    let output = cargo_bin()
        .arg(&source)
        .args(["--capacity", "1", "--csv"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("a,int,Global,4,1000,1003,address"));
    assert!(!stdout.contains("b,int"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error[E300]"));
}

#[test]
fn test_scope_aware_lookup_flag() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "input.c", "int x;\nvoid f() {\nfloat x;\nfloat y;\nx = y;\n");

    let first_match = cargo_bin().arg(&source).output().unwrap();
    assert!(String::from_utf8_lossy(&first_match.stderr).contains("warning[W100]"));

    let scope_aware = cargo_bin()
        .arg(&source)
        .args(["--lookup", "scope-aware"])
        .output()
        .unwrap();
    assert!(!String::from_utf8_lossy(&scope_aware.stderr).contains("warning[W100]"));
}

#[test]
fn test_console_mode() {
    let mut child = cargo_bin()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"int x;\nvoid f() {\nchar c;\nexit\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--- Interactive Console Mode ---"));
    assert!(stdout.contains("[f] > "));
    assert!(stdout.contains("(Total Entries: 2, Errors: 0)"));
}

#[test]
fn test_watch_requires_files() {
    let output = cargo_bin().arg("--watch").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}
