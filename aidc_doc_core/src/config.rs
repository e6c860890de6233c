use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::DocError;
use crate::DocResult;
use crate::descriptor::Catalog;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["aidc-doc.toml", ".aidc-doc.toml", ".config/aidc-doc.toml"];

/// Configuration loaded from an `aidc-doc.toml` file.
///
/// Every key is optional:
///
/// ```toml
/// site_dir = "site"
/// output_path = "app-extension"
/// sidebar_file = "app-extension-sidebar.json"
/// catalog = "app-extension.json"
/// default_locale = "en"
/// primary_locale = "en"
/// locales = ["en", "fr"]
/// base_path = "/v1.0"
/// resources = "locale"
///
/// [implementations]
/// excel_namespace = "AIDCT"
/// google_prefix = "aidct"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocConfig {
	/// Source directory of the site, relative to the project root.
	#[serde(default = "default_site_dir")]
	pub site_dir: PathBuf,
	/// Directory below each locale root that receives the generated pages.
	/// Must be a relative path below the locale root, since it is removed and
	/// recreated on every run.
	#[serde(default = "default_output_path")]
	pub output_path: String,
	/// File name of the sidebar written to each locale's output directory.
	#[serde(default = "default_sidebar_file")]
	pub sidebar_file: String,
	/// Catalog of descriptors, relative to the project root. The format is
	/// taken from the extension.
	#[serde(default = "default_catalog")]
	pub catalog: PathBuf,
	/// Locale served from the site root; other locales live under
	/// `<site_dir>/<locale>/`.
	#[serde(default = "default_locale")]
	pub default_locale: String,
	/// Locale used for names that cannot be localized by the host
	/// application.
	#[serde(default = "default_locale")]
	pub primary_locale: String,
	/// Locales to generate, in order.
	#[serde(default = "default_locales")]
	pub locales: Vec<String>,
	/// Prefix prepended to every sidebar link, for sites deployed below the
	/// domain root (e.g. `/v1.2`).
	#[serde(default)]
	pub base_path: String,
	/// Directory holding `<locale>.toml` files that replace or extend the
	/// built-in locale resources.
	#[serde(default)]
	pub resources: Option<PathBuf>,
	#[serde(default)]
	pub implementations: ImplementationsConfig,
}

/// Naming of the functions inside the host applications.
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ImplementationsConfig {
	/// Namespace of the Microsoft Excel add-in functions.
	#[serde(default = "default_excel_namespace")]
	pub excel_namespace: String,
	/// Prefix of the Google Sheets functions.
	#[serde(default = "default_google_prefix")]
	pub google_prefix: String,
}

impl Default for ImplementationsConfig {
	fn default() -> Self {
		Self {
			excel_namespace: default_excel_namespace(),
			google_prefix: default_google_prefix(),
		}
	}
}

impl Default for DocConfig {
	fn default() -> Self {
		Self {
			site_dir: default_site_dir(),
			output_path: default_output_path(),
			sidebar_file: default_sidebar_file(),
			catalog: default_catalog(),
			default_locale: default_locale(),
			primary_locale: default_locale(),
			locales: default_locales(),
			base_path: String::new(),
			resources: None,
			implementations: ImplementationsConfig::default(),
		}
	}
}

fn default_site_dir() -> PathBuf {
	PathBuf::from("site")
}

fn default_output_path() -> String {
	"app-extension".to_string()
}

fn default_sidebar_file() -> String {
	"app-extension-sidebar.json".to_string()
}

fn default_catalog() -> PathBuf {
	PathBuf::from("app-extension.json")
}

fn default_locale() -> String {
	"en".to_string()
}

fn default_locales() -> Vec<String> {
	vec!["en".to_string(), "fr".to_string()]
}

fn default_excel_namespace() -> String {
	"AIDCT".to_string()
}

fn default_google_prefix() -> String {
	"aidct".to_string()
}

impl DocConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if the file does not exist.
	pub fn load(root: &Path) -> DocResult<Option<DocConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::parse(&content)?;

		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	/// Like [`DocConfig::load`], falling back to the defaults when no config
	/// file exists.
	pub fn load_or_default(root: &Path) -> DocResult<DocConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}

	/// Parse and validate the TOML content of a config file.
	pub fn parse(content: &str) -> DocResult<DocConfig> {
		let config: DocConfig =
			toml::from_str(content).map_err(|e| DocError::ConfigParse(e.to_string()))?;
		config.validate()?;

		Ok(config)
	}

	fn validate(&self) -> DocResult<()> {
		if self.locales.is_empty() {
			return Err(DocError::ConfigParse(
				"at least one locale must be configured".to_string(),
			));
		}

		for (key, locale) in [
			("default_locale", &self.default_locale),
			("primary_locale", &self.primary_locale),
		] {
			if !self.locales.contains(locale) {
				return Err(DocError::ConfigParse(format!(
					"{key} `{locale}` is not one of the configured locales"
				)));
			}
		}

		validate_output_path(&self.output_path)
	}

	/// Read the catalog file and parse it according to its extension.
	pub fn load_catalog(&self, root: &Path) -> DocResult<Catalog> {
		let abs_path = root.join(&self.catalog);
		let path_display = self.catalog.display().to_string();
		let content = std::fs::read_to_string(&abs_path).map_err(|e| DocError::CatalogFile {
			path: path_display.clone(),
			reason: e.to_string(),
		})?;
		let format = abs_path
			.extension()
			.and_then(|e| e.to_str())
			.unwrap_or("")
			.to_ascii_lowercase();

		parse_catalog(&content, format.as_str(), &path_display)
	}
}

/// Reject output paths that would resolve to the locale root itself or
/// outside of it.
pub(crate) fn validate_output_path(output_path: &str) -> DocResult<()> {
	let path = Path::new(output_path);
	let mut has_directory = false;

	for component in path.components() {
		match component {
			Component::Normal(_) => has_directory = true,
			Component::CurDir => {}
			Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
				return Err(DocError::ConfigParse(format!(
					"output_path `{output_path}` must be a relative path without `..`"
				)));
			}
		}
	}

	if !has_directory {
		return Err(DocError::ConfigParse(format!(
			"output_path `{output_path}` must name a directory below the locale root"
		)));
	}

	Ok(())
}

/// Parse a catalog's content based on its format.
pub fn parse_catalog(content: &str, format: &str, path_display: &str) -> DocResult<Catalog> {
	match format {
		"json" => serde_json::from_str(content).map_err(|e| DocError::CatalogFile {
			path: path_display.to_string(),
			reason: e.to_string(),
		}),
		"toml" => toml::from_str(content).map_err(|e| DocError::CatalogFile {
			path: path_display.to_string(),
			reason: e.to_string(),
		}),
		"yaml" | "yml" => serde_yaml_ng::from_str(content).map_err(|e| DocError::CatalogFile {
			path: path_display.to_string(),
			reason: e.to_string(),
		}),
		other => Err(DocError::UnsupportedCatalogFormat(other.to_string())),
	}
}
