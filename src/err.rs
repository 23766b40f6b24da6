/*!
# libcxx-bazelrc: Errors.
*/

use std::fmt;



/// # Usage Text.
///
/// This is printed to STDOUT whenever the required `-L`/`-I` pair is missing
/// or malformed.
const USAGE: &str = "This program generates a libcxx.bazelrc file in the current directory
Usage: libcxx-bazelrc -L<path to libc++.so.1> -I<path to libc++ headers: iostream, etc.>";

/// # Help Text.
const HELP: &str = concat!(
	"\x1b[38;5;199mlibcxx-bazelrc\x1b[0;38;5;69m v", env!("CARGO_PKG_VERSION"), "\x1b[0m", r"
Generate a libcxx.bazelrc pointing Bazel at an alternate libc++.

USAGE:
    libcxx-bazelrc [FLAGS] -L<PATH> -I<PATH>

FLAGS:
    -h, --help                  Prints help information.
    -V, --version               Prints version information.

ARGS:
    -L<PATH>                    Directory containing libc++.so.1.
    -I<PATH>                    Directory containing the libc++ headers
                                (iostream, etc.).

The -L and -I arguments may be given in either order. The file is written to
./libcxx.bazelrc, replacing any existing copy.
");



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Errors.
pub(super) enum BazelrcError {
	/// # Missing or Malformed -L/-I.
	Usage,

	/// # Write Error.
	Write(String),

	/// # Print Help (not really an error).
	PrintHelp,

	/// # Print Version (not really an error).
	PrintVersion,
}

impl std::error::Error for BazelrcError {}

impl fmt::Display for BazelrcError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			Self::Usage => USAGE,
			Self::Write(s) => return write!(f, "Unable to write: {s}"),
			Self::PrintHelp => HELP,
			Self::PrintVersion => concat!("libcxx-bazelrc v", env!("CARGO_PKG_VERSION")),
		};
		f.write_str(s)
	}
}
