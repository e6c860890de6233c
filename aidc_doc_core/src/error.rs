use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum DocError {
	#[error(transparent)]
	#[diagnostic(code(aidc_doc::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(aidc_doc::config_parse),
		help("check that aidc-doc.toml is valid TOML and only uses known keys")
	)]
	ConfigParse(String),

	#[error("failed to load catalog file `{path}`: {reason}")]
	#[diagnostic(code(aidc_doc::catalog_file))]
	CatalogFile { path: String, reason: String },

	#[error("unsupported catalog file format: `{0}`")]
	#[diagnostic(
		code(aidc_doc::unsupported_format),
		help("supported formats: json, toml, yaml, yml")
	)]
	UnsupportedCatalogFormat(String),

	#[error("failed to load locale resources for `{locale}`: {reason}")]
	#[diagnostic(code(aidc_doc::locale_resources))]
	LocaleResources { locale: String, reason: String },

	#[error("no locale resources available for `{0}`")]
	#[diagnostic(
		code(aidc_doc::missing_locale_resources),
		help("add `{0}.toml` to the configured resources directory or remove the locale")
	)]
	MissingLocaleResources(String),

	#[error("missing `{locale}` localization for `{key}`")]
	#[diagnostic(
		code(aidc_doc::missing_localization),
		help("every configured locale needs a localization in the catalog")
	)]
	MissingLocalization { locale: String, key: String },

	#[error(
		"method `{method}` has more than one driving parameter: `{first}` and `{second}`"
	)]
	#[diagnostic(
		code(aidc_doc::multiple_driving_parameters),
		help("at most one parameter of a method may accept an array or a matrix")
	)]
	MultipleDrivingParameters {
		method: String,
		first: String,
		second: String,
	},

	#[error("class `{class}` refers to unknown category `{category}`")]
	#[diagnostic(
		code(aidc_doc::unknown_category),
		help("declare the category in the catalog's `categories` list")
	)]
	UnknownCategory { class: String, category: String },

	#[error("failed to interpolate `{key}`: {reason}")]
	#[diagnostic(code(aidc_doc::interpolation))]
	Interpolation { key: String, reason: String },

	#[error("failed to serialize sidebar: {0}")]
	#[diagnostic(code(aidc_doc::serialize))]
	Serialize(String),
}

pub type DocResult<T> = Result<T, DocError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
