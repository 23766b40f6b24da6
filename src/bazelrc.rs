/*!
# libcxx-bazelrc: Writer.
*/

use crate::{
	BazelrcError,
	StdlibPaths,
};
use std::{
	fmt,
	path::{
		Path,
		PathBuf,
	},
};



/// # Output File Name.
const FILE: &str = "libcxx.bazelrc";



#[derive(Debug, Clone, Copy)]
/// # Bazelrc Writer.
///
/// This struct holds everything needed to render and save the
/// `libcxx.bazelrc` file. The contents come from its `Display` impl; the
/// `write` method handles the saving.
pub(super) struct BazelrcWriter<'a> {
	/// # Output Directory.
	dir: &'a Path,

	/// # Paths.
	paths: &'a StdlibPaths,
}

impl<'a> fmt::Display for BazelrcWriter<'a> {
	/// # Write Config!
	///
	/// The config group and variable names must be reproduced exactly; Bazel
	/// picks them up via `--config=libc++`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let include = self.paths.include();
		let lib = self.paths.lib();
		writeln!(f, r#"build:libc++ --repo_env BAZEL_CXXOPTS="--stdlib=libc++:-isystem{include}""#)?;
		writeln!(f, r#"build:libc++ --repo_env BAZEL_LINKOPTS="--stdlib=libc++""#)?;
		writeln!(f, r#"build:libc++ --repo_env BAZEL_LINKLIBS="-L{lib}:-Wl,-rpath,{lib}:-lc++""#)
	}
}

impl<'a> BazelrcWriter<'a> {
	/// # New.
	pub(super) const fn new(dir: &'a Path, paths: &'a StdlibPaths) -> Self {
		Self { dir, paths }
	}

	/// # Write to File.
	///
	/// Render the config into the shared `buf` and save it to
	/// `<dir>/libcxx.bazelrc`, replacing whatever was there before.
	///
	/// ## Errors
	///
	/// Returns `BazelrcError::Write` if the file cannot be saved.
	pub(super) fn write(self, buf: &mut String) -> Result<PathBuf, BazelrcError> {
		use std::fmt::Write;

		let out_file = self.dir.join(FILE);

		buf.truncate(0);
		write!(buf, "{self}")
			.map_err(|_| BazelrcError::Write(out_file.to_string_lossy().into_owned()))?;

		write_atomic::write_file(&out_file, buf.as_bytes())
			.map_err(|_| BazelrcError::Write(out_file.to_string_lossy().into_owned()))
			.map(|()| out_file)
	}
}
