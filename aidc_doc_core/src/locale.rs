use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::DocError;
use crate::DocResult;
use crate::descriptor::ValueType;

/// Locales with resources compiled into the library.
pub const BUILTIN_LOCALES: [&str; 2] = ["en", "fr"];

const EN_RESOURCES: &str = include_str!("resources/en.toml");
const FR_RESOURCES: &str = include_str!("resources/fr.toml");

/// The fixed strings used to render pages in one locale.
///
/// Values may contain `{{placeholder}}` references which are filled in with
/// [`interpolate`].
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LocaleResourceSet {
	pub root_namespace_title: String,
	/// Expects `{{namespace}}`.
	pub namespace_title: String,
	pub introduction: String,
	pub implementations: String,
	pub parameters: String,
	pub name: String,
	#[serde(rename = "type")]
	pub r#type: String,
	pub description: String,
	/// Type names, indexed by [`ValueType::index`].
	pub types: [String; 4],
	pub parameters_are_optional: String,
	pub parameter_accepts_array: String,
	pub parameter_accepts_matrix: String,
	pub function_returns_array: String,
	pub function_returns_matrix: String,
	/// Expects `{{drivingParameterName}}`.
	pub function_returns_array_matrix: String,
	/// Expects `{{drivingParameterName}}`.
	pub function_returns_matrix_matrix: String,
}

impl LocaleResourceSet {
	/// Parse a resource set from TOML.
	pub fn parse(locale: &str, content: &str) -> DocResult<Self> {
		toml::from_str(content).map_err(|e| DocError::LocaleResources {
			locale: locale.to_string(),
			reason: e.to_string(),
		})
	}

	/// The resource set compiled into the library for `locale`, if any.
	pub fn builtin(locale: &str) -> Option<DocResult<Self>> {
		let content = match locale {
			"en" => EN_RESOURCES,
			"fr" => FR_RESOURCES,
			_ => return None,
		};

		Some(Self::parse(locale, content))
	}

	pub fn type_name(&self, value_type: ValueType) -> &str {
		&self.types[value_type.index()]
	}
}

/// Resource sets for every configured locale, in configuration order.
#[derive(Debug, Clone, Default)]
pub struct LocaleResources {
	sets: Vec<(String, LocaleResourceSet)>,
}

impl LocaleResources {
	/// Load the resources for `locales`.
	///
	/// A `<locale>.toml` file in `override_dir` takes precedence over the
	/// built-in set. A locale with neither is an error.
	pub fn load(locales: &[String], override_dir: Option<&Path>) -> DocResult<Self> {
		let mut sets = Vec::with_capacity(locales.len());

		for locale in locales {
			let override_path = override_dir.map(|dir| dir.join(format!("{locale}.toml")));

			let set = match override_path {
				Some(path) if path.is_file() => {
					tracing::debug!(locale, path = %path.display(), "loading locale resources");
					let content = std::fs::read_to_string(&path)?;
					LocaleResourceSet::parse(locale, &content)?
				}
				_ => {
					LocaleResourceSet::builtin(locale)
						.ok_or_else(|| DocError::MissingLocaleResources(locale.clone()))??
				}
			};

			sets.push((locale.clone(), set));
		}

		Ok(Self { sets })
	}

	pub fn get(&self, locale: &str) -> DocResult<&LocaleResourceSet> {
		self.sets
			.iter()
			.find(|(candidate, _)| candidate == locale)
			.map(|(_, set)| set)
			.ok_or_else(|| DocError::MissingLocaleResources(locale.to_string()))
	}

	pub fn len(&self) -> usize {
		self.sets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sets.is_empty()
	}
}

/// Fill in the `{{placeholder}}` references of a resource string.
///
/// A placeholder without a value is an error rather than an empty string.
pub fn interpolate(key: &str, template: &str, values: &[(&str, &str)]) -> DocResult<String> {
	let mut env = minijinja::Environment::new();
	env.set_keep_trailing_newline(true);
	env.set_undefined_behavior(minijinja::UndefinedBehavior::Strict);

	let context: BTreeMap<&str, &str> = values.iter().copied().collect();
	env.render_str(template, minijinja::Value::from_serialize(&context))
		.map_err(|e| DocError::Interpolation {
			key: key.to_string(),
			reason: e.to_string(),
		})
}
