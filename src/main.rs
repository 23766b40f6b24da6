/*!
# libcxx-bazelrc

Generate a `libcxx.bazelrc` in the current directory, pointing Bazel at an
alternate libc++ installation. Activate it with `--config=libc++`.
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod bazelrc;
mod err;
mod paths;



use argyle::Argument;
use bazelrc::BazelrcWriter;
use dactyl::NiceElapsed;
use err::BazelrcError;
use fyi_msg::Msg;
use paths::StdlibPaths;
use std::{
	ffi::OsStr,
	path::Path,
	time::Instant,
};



/// # Main.
fn main() {
	match _main() {
		Ok(()) => {},
		Err(e @ BazelrcError::Usage) => {
			println!("{e}");
			std::process::exit(1);
		},
		Err(e @ (BazelrcError::PrintHelp | BazelrcError::PrintVersion)) => {
			println!("{e}");
		},
		Err(e) => {
			Msg::error(e.to_string()).eprint();
			std::process::exit(1);
		},
	}
}

#[inline]
/// # Actual main.
fn _main() -> Result<(), BazelrcError> {
	// Keep track of the time.
	let now = Instant::now();

	// Argyle skips empty arguments, so catch those before they can shift
	// the -L/-I positions.
	if blank_lead(std::env::args_os().skip(1)) { return Err(BazelrcError::Usage); }

	// Parse CLI arguments.
	let args = argyle::args()
		.with_keywords(include!(concat!(env!("OUT_DIR"), "/argyle.rs")));
	let paths = parse_args(args)?;

	// Save it!
	let mut buf = String::with_capacity(256);
	let out = BazelrcWriter::new(Path::new("."), &paths).write(&mut buf)?;

	Msg::success(format!(
		"Generated \x1b[2m{}\x1b[0m in {}.",
		out.display(),
		NiceElapsed::from(now),
	)).eprint();

	Ok(())
}

/// # Blank Lead?
///
/// Returns `true` if either of the first two raw arguments is empty.
fn blank_lead<I, S>(raw: I) -> bool
where I: IntoIterator<Item=S>, S: AsRef<OsStr> {
	raw.into_iter().take(2).any(|a| a.as_ref().is_empty())
}

/// # Parse Arguments.
///
/// Collect the first two values and hand them off to `StdlibPaths`. Help and
/// version only count if they turn up before that; anything after the
/// second value is ignored.
fn parse_args<I>(args: I) -> Result<StdlibPaths, BazelrcError>
where I: IntoIterator<Item=Argument> {
	let mut raw = Vec::with_capacity(2);
	for arg in args {
		match arg {
			Argument::Key("-h" | "--help") => return Err(BazelrcError::PrintHelp),
			Argument::Key("-V" | "--version") => return Err(BazelrcError::PrintVersion),

			Argument::Other(s) => { raw.push(s); },
			Argument::InvalidUtf8(_) => return Err(BazelrcError::Usage),
			_ => {},
		}

		if raw.len() == 2 { break; }
	}

	StdlibPaths::from_args(raw.as_slice())
}



#[cfg(test)]
mod test {
	use super::*;
	use std::ffi::OsString;

	/// # Other.
	fn other(s: &str) -> Argument { Argument::Other(s.to_owned()) }

	#[test]
	fn t_parse_args() {
		for (raw, lib, include) in [
			(vec![other("-L/b"), other("-I/a")], "/b", "/a"),
			(vec![other("-I/a"), other("-L/b")], "/b", "/a"),
			(vec![other("-L/b"), other("-I/a"), Argument::Key("-h")], "/b", "/a"),
			(vec![other("-I/a"), other("-L/b"), Argument::Key("--version")], "/b", "/a"),
			(
				vec![other("-L/b"), other("-I/a"), Argument::InvalidUtf8(OsString::from("-L/c"))],
				"/b",
				"/a",
			),
		] {
			let paths = parse_args(raw).expect("Parse failed.");
			assert_eq!(paths.lib(), lib);
			assert_eq!(paths.include(), include);
		}
	}

	#[test]
	fn t_parse_args_bad() {
		for (raw, expected) in [
			(Vec::new(), BazelrcError::Usage),
			(vec![other("-L/b")], BazelrcError::Usage),
			(vec![other("-L/b"), other("-L/c")], BazelrcError::Usage),
			(vec![Argument::InvalidUtf8(OsString::from("-L/b")), other("-I/a")], BazelrcError::Usage),
			(vec![other("-L/b"), Argument::InvalidUtf8(OsString::from("-I/a"))], BazelrcError::Usage),
			(vec![Argument::Key("-h")], BazelrcError::PrintHelp),
			(vec![other("-L/b"), Argument::Key("--help"), other("-I/a")], BazelrcError::PrintHelp),
			(vec![Argument::Key("-V"), other("-L/b"), other("-I/a")], BazelrcError::PrintVersion),
		] {
			assert_eq!(parse_args(raw), Err(expected));
		}
	}

	#[test]
	fn t_blank_lead() {
		let cases: [(&[&str], bool); 5] = [
			(&["", "-L/b", "-I/a"], true),
			(&["-L/b", "", "-I/a"], true),
			(&["-L/b", "-I/a", ""], false),
			(&["-L/b", "-I/a"], false),
			(&[], false),
		];

		for (raw, expected) in cases {
			assert_eq!(blank_lead(raw), expected, "Wrong answer for {raw:?}.");
		}
	}
}
