/*!
# libcxx-bazelrc: Path Arguments.
*/

use crate::BazelrcError;
use trimothy::TrimMut;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Path Flag.
///
/// The role of a `-L`/`-I` style argument.
enum PathFlag {
	/// # Library Directory (`-L`).
	Lib,

	/// # Include Directory (`-I`).
	Include,
}

impl PathFlag {
	/// # From Argument.
	///
	/// Return the role and (untrimmed) payload of the argument, if it is
	/// longer than its two-character prefix and the prefix is recognized.
	fn parse(src: &str) -> Option<(Self, &str)> {
		if src.len() <= 2 { return None; }
		if let Some(rest) = src.strip_prefix("-L") { Some((Self::Lib, rest)) }
		else if let Some(rest) = src.strip_prefix("-I") { Some((Self::Include, rest)) }
		else { None }
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Standard Library Paths.
///
/// The library and include directories of the libc++ installation, as
/// passed via `-L<PATH>` and `-I<PATH>`.
pub(super) struct StdlibPaths {
	/// # Library Directory.
	lib: String,

	/// # Include Directory.
	include: String,
}

impl StdlibPaths {
	/// # From Arguments.
	///
	/// Only the first two values are considered; they must be one `-L` and
	/// one `-I`, in either order. Anything after that is ignored.
	///
	/// ## Errors
	///
	/// Returns `BazelrcError::Usage` if there are fewer than two values, if
	/// either is unrecognized, if both share a role, or if a path is empty
	/// once trimmed.
	pub(super) fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, BazelrcError> {
		let [a, b, ..] = args else { return Err(BazelrcError::Usage); };

		let (lib, include) = match (PathFlag::parse(a.as_ref()), PathFlag::parse(b.as_ref())) {
			(Some((PathFlag::Lib, l)), Some((PathFlag::Include, i))) |
			(Some((PathFlag::Include, i)), Some((PathFlag::Lib, l))) => (l, i),
			_ => return Err(BazelrcError::Usage),
		};

		let mut lib = lib.to_owned();
		lib.trim_mut();
		let mut include = include.to_owned();
		include.trim_mut();

		if lib.is_empty() || include.is_empty() { Err(BazelrcError::Usage) }
		else { Ok(Self { lib, include }) }
	}

	/// # Library Directory.
	pub(super) fn lib(&self) -> &str { &self.lib }

	/// # Include Directory.
	pub(super) fn include(&self) -> &str { &self.include }
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_from_args() {
		let cases: [(&[&str], &str, &str); 5] = [
			(&["-L/usr/lib/libcxx", "-I/usr/include/libcxx"], "/usr/lib/libcxx", "/usr/include/libcxx"),
			(&["-I/a", "-L/b"], "/b", "/a"),
			(&["-L /b\t", "-I  /a "], "/b", "/a"),
			(&["-Lrelative/lib", "-Iinc"], "relative/lib", "inc"),
			(&["-L/b", "-I/a", "-L/ignored", "whatever"], "/b", "/a"),
		];

		for (raw, lib, include) in cases {
			let paths = StdlibPaths::from_args(raw).expect("Parse failed.");
			assert_eq!(paths.lib(), lib, "Wrong lib for {raw:?}.");
			assert_eq!(paths.include(), include, "Wrong include for {raw:?}.");
		}
	}

	#[test]
	fn t_from_args_bad() {
		let empty: [&str; 0] = [];
		assert_eq!(StdlibPaths::from_args(&empty), Err(BazelrcError::Usage));

		let cases: [&[&str]; 11] = [
			&["-L/b"],
			&["-I/a"],
			&["-L/b", "-L/c"],
			&["-I/a", "-I/c"],
			&["-L", "-I/a"],
			&["-L/b", "-I"],
			&["-L  ", "-I/a"],
			&["/b", "/a"],
			&["--lib=/b", "-I/a"],
			&["-l/b", "-i/a"],
			&["foo", "-L/b", "-I/a"],
		];

		for raw in cases {
			assert_eq!(
				StdlibPaths::from_args(raw),
				Err(BazelrcError::Usage),
				"Expected usage error for {raw:?}.",
			);
		}
	}
}
