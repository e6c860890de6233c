use std::path::PathBuf;
use std::process;

use aidc_doc_cli::AidcDocCli;
use aidc_doc_core::AnyEmptyResult;
use aidc_doc_core::DocConfig;
use aidc_doc_core::DocumentationRenderer;
use aidc_doc_core::generate;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = AidcDocCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_logging(args.verbose, use_color);

	if let Err(e) = run(&args) {
		match e.downcast::<aidc_doc_core::DocError>() {
			Ok(doc_err) => {
				let report: miette::Report = (*doc_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(1);
	}
}

/// Log to stderr, filtered by `RUST_LOG` when set.
fn init_logging(verbose: bool, use_color: bool) {
	let default_directive = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.try_init()
		.ok();
}

fn resolve_root(args: &AidcDocCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn run(args: &AidcDocCli) -> AnyEmptyResult {
	let root = resolve_root(args);
	tracing::debug!(root = %root.display(), "resolved project root");
	let config = DocConfig::load_or_default(&root)?;
	let catalog = config.load_catalog(&root)?;

	if args.verbose {
		let methods: usize = catalog.classes.iter().map(|class| class.methods.len()).sum();
		println!(
			"Loaded catalog: {} class(es), {methods} method(s), {} categor(ies)",
			catalog.classes.len(),
			catalog.categories.len()
		);
	}

	let mut renderer = DocumentationRenderer::new(&root, &config);
	generate(&catalog, &mut renderer)?;

	println!(
		"{} {} page(s) for {} locale(s) in {}",
		colored!("Generated", green),
		renderer.pages_written(),
		renderer.locales().len(),
		root.join(&config.site_dir).display()
	);

	Ok(())
}
