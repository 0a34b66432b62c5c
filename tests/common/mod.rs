// tests/common/mod.rs
//! 共通テストユーティリティ

pub mod temp;

use assert_cmd::Command;

#[allow(unused_imports)]
pub use temp::TempWorkspace;

/// `linecounter` invocation with logging silenced so stderr only carries errors.
pub fn linecounter() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_linecounter"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// The three-file tree used by most scenarios: `a.ext` (3), `b.ext` (5), `c.txt` (2).
#[allow(dead_code)]
pub fn sample_workspace() -> TempWorkspace {
    let ws = TempWorkspace::new("linecounter");
    ws.create_lines("a.ext", 3);
    ws.create_lines("b.ext", 5);
    ws.create_lines("c.txt", 2);
    ws
}
