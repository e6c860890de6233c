use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use crate::Catalog;
use crate::CategoryDescriptor;
use crate::ClassDescriptor;
use crate::DocConfig;
use crate::FunctionLocalization;
use crate::Localization;
use crate::MethodDescriptor;
use crate::Multiplicity;
use crate::ParameterDescriptor;
use crate::ValueType;

pub(crate) fn parameter(
	name: &str,
	multiplicity: Multiplicity,
	is_required: bool,
) -> ParameterDescriptor {
	ParameterDescriptor {
		name: name.to_string(),
		r#type: ValueType::Number,
		multiplicity,
		is_required,
	}
}

/// Localization whose parameter names equal their identifiers.
pub(crate) fn localization(
	name: &str,
	description: &str,
	parameters: &[(&str, &str)],
) -> FunctionLocalization {
	FunctionLocalization {
		name: name.to_string(),
		description: description.to_string(),
		parameters: parameters
			.iter()
			.map(|(id, description)| {
				(
					(*id).to_string(),
					Localization {
						name: (*id).to_string(),
						description: (*description).to_string(),
					},
				)
			})
			.collect(),
	}
}

pub(crate) fn method(
	name: &str,
	multiplicity: Multiplicity,
	parameters: Vec<ParameterDescriptor>,
	localizations: Vec<(&str, FunctionLocalization)>,
) -> MethodDescriptor {
	MethodDescriptor {
		name: name.to_string(),
		multiplicity,
		is_hidden: false,
		parameters,
		localizations: localizations
			.into_iter()
			.map(|(locale, localization)| (locale.to_string(), localization))
			.collect(),
	}
}

pub(crate) fn category(id: &str, labels: &[(&str, &str)]) -> CategoryDescriptor {
	CategoryDescriptor {
		id: id.to_string(),
		labels: labels
			.iter()
			.map(|(locale, label)| ((*locale).to_string(), (*label).to_string()))
			.collect::<BTreeMap<_, _>>(),
	}
}

pub(crate) fn add_method() -> MethodDescriptor {
	method(
		"add",
		Multiplicity::Singleton,
		vec![
			parameter("a", Multiplicity::Singleton, true),
			parameter("b", Multiplicity::Singleton, true),
		],
		vec![
			(
				"en",
				localization(
					"Add",
					"Add two numbers.",
					&[("a", "First number."), ("b", "Second number.")],
				),
			),
			(
				"fr",
				localization(
					"Ajouter",
					"Additionner deux nombres.",
					&[("a", "Premier nombre."), ("b", "Deuxième nombre.")],
				),
			),
		],
	)
}

pub(crate) fn hidden_method() -> MethodDescriptor {
	let mut hidden = method(
		"internalCheck",
		Multiplicity::Singleton,
		Vec::new(),
		vec![
			("en", localization("InternalCheck", "Internal use only.", &[])),
			("fr", localization("VerificationInterne", "Usage interne.", &[])),
		],
	);
	hidden.is_hidden = true;
	hidden
}

/// One `Math` namespace with one `Arithmetic` category holding `Add` and a
/// hidden method.
pub(crate) fn math_catalog() -> Catalog {
	Catalog {
		categories: vec![category(
			"arithmetic",
			&[("en", "Arithmetic"), ("fr", "Arithmétique")],
		)],
		classes: vec![ClassDescriptor {
			name: "ArithmeticProxy".to_string(),
			namespace: Some("Math".to_string()),
			category: "arithmetic".to_string(),
			methods: vec![add_method(), hidden_method()],
		}],
	}
}

/// A root namespace method returning a matrix shaped like its `values`
/// parameter.
pub(crate) fn scale_method() -> MethodDescriptor {
	method(
		"scale",
		Multiplicity::Matrix,
		vec![
			parameter("values", Multiplicity::Matrix, true),
			parameter("factor", Multiplicity::Singleton, false),
		],
		vec![
			(
				"en",
				localization(
					"Scale",
					"Multiply every value by a factor.",
					&[
						("values", "Values to scale."),
						("factor", "Factor to multiply by; defaults to 1."),
					],
				),
			),
			(
				"fr",
				localization(
					"Échelle",
					"Multiplier chaque valeur par un facteur.",
					&[
						("values", "Valeurs à multiplier."),
						("factor", "Facteur de multiplication; 1 par défaut."),
					],
				),
			),
		],
	)
}

/// Default config restricted to the given locales.
pub(crate) fn config_with_locales(locales: &[&str]) -> DocConfig {
	DocConfig {
		locales: locales.iter().map(ToString::to_string).collect(),
		..DocConfig::default()
	}
}

pub(crate) fn read(path: impl AsRef<Path>) -> String {
	std::fs::read_to_string(path.as_ref())
		.unwrap_or_else(|e| panic!("failed to read {}: {e}", path.as_ref().display()))
}

/// Every file below `dir` with its content, sorted by path.
pub(crate) fn snapshot_dir(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
	let mut files = BTreeMap::new();
	let mut pending = vec![dir.to_path_buf()];

	while let Some(current) = pending.pop() {
		for entry in std::fs::read_dir(&current).unwrap_or_else(|e| panic!("{e}")) {
			let path = entry.unwrap_or_else(|e| panic!("{e}")).path();

			if path.is_dir() {
				pending.push(path);
			} else {
				let content = std::fs::read(&path).unwrap_or_else(|e| panic!("{e}"));
				files.insert(path, content);
			}
		}
	}

	files
}
