/*!
# libcxx-bazelrc: Build
*/

use argyle::KeyWordsBuilder;
use std::path::PathBuf;



/// # Build!
pub fn main() {
	println!("cargo:rerun-if-env-changed=CARGO_PKG_VERSION");

	build_cli();
}

/// # Build CLI Arguments.
///
/// Only the informational switches are keywords; the `-L`/`-I` paths are
/// glued to their prefixes and come through as plain values.
fn build_cli() {
	let mut builder = KeyWordsBuilder::default();
	builder.push_keys([
		"-h", "--help",
		"-V", "--version",
	]);
	builder.save(out_path("argyle.rs"));
}

/// # Output Path.
///
/// Append the sub-path to OUT_DIR and return it.
fn out_path(stub: &str) -> PathBuf {
	std::fs::canonicalize(std::env::var("OUT_DIR").expect("Missing OUT_DIR."))
		.expect("Missing OUT_DIR.")
		.join(stub)
}
