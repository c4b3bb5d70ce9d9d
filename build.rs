//! Build script for the atlassian-tools project
//!
//! Embeds build metadata used in the HTTP user-agent string.

use std::env;

/// Entry point for the build script.
fn main() {
  // Store the target triple so the runtime user-agent can report it
  println!("cargo:rustc-env=TARGET={}", env::var("TARGET").unwrap_or_default());

  // Re-run when this build script is modified
  println!("cargo:rerun-if-changed=build.rs");

  // Re-run when target architecture changes during cross-compilation
  println!("cargo:rerun-if-env-changed=TARGET");
}
