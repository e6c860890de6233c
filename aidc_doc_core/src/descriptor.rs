//! Descriptor model for the application extension.
//!
//! A [`Catalog`] lists the categories and the classes whose methods are
//! exposed as spreadsheet functions. Each method carries its own per-locale
//! [`FunctionLocalization`], so the catalog is self-contained and can be
//! loaded from a single JSON, TOML or YAML file.
//!
//! ```json
//! {
//!   "categories": [{ "id": "arithmetic", "labels": { "en": "Arithmetic" } }],
//!   "classes": [{
//!     "name": "ArithmeticProxy",
//!     "namespace": "Math",
//!     "category": "arithmetic",
//!     "methods": [{
//!       "name": "add",
//!       "parameters": [
//!         { "name": "a", "type": "number" },
//!         { "name": "b", "type": "number" }
//!       ],
//!       "localizations": {
//!         "en": {
//!           "name": "Add",
//!           "description": "Add two numbers.",
//!           "parameters": {
//!             "a": { "name": "a", "description": "First number." },
//!             "b": { "name": "b", "description": "Second number." }
//!           }
//!         }
//!       }
//!     }]
//!   }]
//! }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::DocError;
use crate::DocResult;

/// Shape of a parameter or return value.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Multiplicity {
	/// A single value.
	#[default]
	Singleton,
	/// A single value that is never spread over a range.
	SingletonArray,
	/// A single value or an array of values.
	Array,
	/// A single value, an array of values or a matrix of values.
	Matrix,
}

impl Multiplicity {
	/// Whether a parameter with this multiplicity determines the shape of
	/// the result.
	pub fn is_driving(self) -> bool {
		matches!(self, Self::Array | Self::Matrix)
	}
}

/// Closed set of parameter value types.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ValueType {
	String,
	Number,
	Boolean,
	Any,
}

impl ValueType {
	/// Position of the type's name in a locale's `types` list.
	pub fn index(self) -> usize {
		match self {
			Self::String => 0,
			Self::Number => 1,
			Self::Boolean => 2,
			Self::Any => 3,
		}
	}
}

/// Localized name and description.
#[derive(Debug, Clone, Deserialize, Serialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Localization {
	pub name: String,
	pub description: String,
}

/// Localized strings of a single function in a single locale.
#[derive(Debug, Clone, Deserialize, Serialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FunctionLocalization {
	pub name: String,
	pub description: String,
	/// Parameter localizations keyed by parameter identifier.
	#[serde(default)]
	pub parameters: BTreeMap<String, Localization>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ParameterDescriptor {
	/// Identifier, used as the key into [`FunctionLocalization::parameters`].
	pub name: String,
	#[serde(rename = "type")]
	pub r#type: ValueType,
	#[serde(default)]
	pub multiplicity: Multiplicity,
	#[serde(default = "default_is_required")]
	pub is_required: bool,
}

fn default_is_required() -> bool {
	true
}

#[derive(Debug, Clone, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MethodDescriptor {
	pub name: String,
	/// Shape of the returned value.
	#[serde(default)]
	pub multiplicity: Multiplicity,
	/// Hidden methods are callable but never documented.
	#[serde(default)]
	pub is_hidden: bool,
	#[serde(default)]
	pub parameters: Vec<ParameterDescriptor>,
	/// Localizations keyed by locale.
	#[serde(default)]
	pub localizations: BTreeMap<String, FunctionLocalization>,
}

impl MethodDescriptor {
	/// The parameter whose shape drives the shape of the result, if any.
	///
	/// Only one parameter may accept an array or a matrix; a second one is
	/// reported as [`DocError::MultipleDrivingParameters`].
	pub fn driving_parameter(&self) -> DocResult<Option<&ParameterDescriptor>> {
		let mut driving: Option<&ParameterDescriptor> = None;

		for parameter in &self.parameters {
			if !parameter.multiplicity.is_driving() {
				continue;
			}

			if let Some(first) = driving {
				return Err(DocError::MultipleDrivingParameters {
					method: self.name.clone(),
					first: first.name.clone(),
					second: parameter.name.clone(),
				});
			}

			driving = Some(parameter);
		}

		Ok(driving)
	}

	pub fn has_optional_parameter(&self) -> bool {
		self.parameters.iter().any(|parameter| !parameter.is_required)
	}

	pub fn has_parameter_with(&self, multiplicity: Multiplicity) -> bool {
		self.parameters
			.iter()
			.any(|parameter| parameter.multiplicity == multiplicity)
	}
}

#[derive(Debug, Clone, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClassDescriptor {
	pub name: String,
	/// `None` places the class's methods in the root namespace.
	#[serde(default)]
	pub namespace: Option<String>,
	/// Identifier of a [`CategoryDescriptor`].
	pub category: String,
	#[serde(default)]
	pub methods: Vec<MethodDescriptor>,
}

/// A sidebar grouping with one label per locale.
#[derive(Debug, Clone, Deserialize, Serialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CategoryDescriptor {
	pub id: String,
	#[serde(default)]
	pub labels: BTreeMap<String, String>,
}

/// Everything the documentation is generated from.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
	#[serde(default)]
	pub categories: Vec<CategoryDescriptor>,
	#[serde(default)]
	pub classes: Vec<ClassDescriptor>,
}

impl Catalog {
	pub fn category(&self, id: &str) -> Option<&CategoryDescriptor> {
		self.categories.iter().find(|category| category.id == id)
	}
}
