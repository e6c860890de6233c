use std::path::Path;

use aidc_doc_core::AnyEmptyResult;
use assert_cmd::Command;
use insta_cmd::get_cargo_bin;
use serde_json::Value;
use serde_json::json;

pub fn aidc_doc_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("aidc-doc"));
	cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
	cmd
}

/// Catalog with one `Math` namespace holding `add` and a hidden method.
pub fn math_catalog() -> Value {
	json!({
		"categories": [
			{ "id": "arithmetic", "labels": { "en": "Arithmetic", "fr": "Arithmétique" } }
		],
		"classes": [{
			"name": "ArithmeticProxy",
			"namespace": "Math",
			"category": "arithmetic",
			"methods": [
				{
					"name": "add",
					"parameters": [
						{ "name": "a", "type": "number" },
						{ "name": "b", "type": "number" }
					],
					"localizations": {
						"en": {
							"name": "Add",
							"description": "Add two numbers.",
							"parameters": {
								"a": { "name": "a", "description": "First number." },
								"b": { "name": "b", "description": "Second number." }
							}
						},
						"fr": {
							"name": "Ajouter",
							"description": "Additionner deux nombres.",
							"parameters": {
								"a": { "name": "a", "description": "Premier nombre." },
								"b": { "name": "b", "description": "Deuxième nombre." }
							}
						}
					}
				},
				{
					"name": "internalCheck",
					"isHidden": true,
					"localizations": {
						"en": { "name": "InternalCheck", "description": "Internal use only." },
						"fr": { "name": "VerificationInterne", "description": "Usage interne." }
					}
				}
			]
		}]
	})
}

pub fn write_catalog(root: &Path, file_name: &str, catalog: &Value) -> AnyEmptyResult {
	std::fs::write(root.join(file_name), serde_json::to_string_pretty(catalog)?)?;
	Ok(())
}
