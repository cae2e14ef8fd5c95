//! Shared test fixtures

#![allow(dead_code)]

pub mod mock_resolver;

pub use mock_resolver::MockResolver;

use exbranch::resolver::ConflictResolver;
use exbranch::shell::{ConflictShell, Flow};

/// Dispatch one line and capture the printed output.
pub fn dispatch<R: ConflictResolver>(shell: &mut ConflictShell<R>, line: &str) -> (Flow, String) {
    let mut out = Vec::new();
    let flow = shell.dispatch(line, &mut out).expect("dispatch failed");
    (flow, String::from_utf8(out).expect("non-utf8 output"))
}
