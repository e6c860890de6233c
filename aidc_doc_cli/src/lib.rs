use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate the localized application extension pages of the AIDC Toolkit site.",
	long_about = "aidc-doc walks the application extension catalog and writes one Markdown page per \
	              function and locale, an index page per namespace, and a sidebar JSON file per \
	              locale for the site generator.\n\nThe output directory of every locale is \
	              removed and rebuilt on each run. Settings are read from aidc-doc.toml, \
	              .aidc-doc.toml or .config/aidc-doc.toml in the project root."
)]
pub struct AidcDocCli {
	/// Path to the project root directory.
	#[arg(long, short)]
	pub path: Option<PathBuf>,

	/// Enable verbose output and debug logging.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}
