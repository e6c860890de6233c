use std::collections::BTreeMap;

use derive_more::Deref;
use serde::Serialize;

use crate::DocError;
use crate::DocResult;
use crate::descriptor::CategoryDescriptor;
use crate::descriptor::FunctionLocalization;
use crate::descriptor::Localization;
use crate::descriptor::MethodDescriptor;

/// A documented function and its localizations.
#[derive(Debug, Clone)]
pub struct FunctionNode {
	pub id: String,
	pub localizations: BTreeMap<String, FunctionLocalization>,
	key: String,
}

impl FunctionNode {
	pub fn new(namespace: Option<&str>, method: &MethodDescriptor) -> Self {
		let key = match namespace {
			Some(namespace) => format!("Functions.{namespace}.{}", method.name),
			None => format!("Functions.{}", method.name),
		};

		Self {
			id: method.name.clone(),
			localizations: method.localizations.clone(),
			key,
		}
	}

	pub fn localization(&self, locale: &str) -> DocResult<&FunctionLocalization> {
		self.localizations
			.get(locale)
			.ok_or_else(|| missing_localization(locale, &self.key))
	}

	pub fn parameter_localization(&self, locale: &str, parameter: &str) -> DocResult<&Localization> {
		self.localization(locale)?
			.parameters
			.get(parameter)
			.ok_or_else(|| {
				missing_localization(locale, &format!("{}.parameters.{parameter}", self.key))
			})
	}
}

/// A sidebar group of functions.
#[derive(Debug, Clone)]
pub struct CategoryNode {
	pub id: String,
	pub labels: BTreeMap<String, String>,
	pub functions: Vec<FunctionNode>,
}

impl CategoryNode {
	pub fn new(category: &CategoryDescriptor) -> Self {
		Self {
			id: category.id.clone(),
			labels: category.labels.clone(),
			functions: Vec::new(),
		}
	}

	pub fn label(&self, locale: &str) -> DocResult<&str> {
		self.labels
			.get(locale)
			.map(String::as_str)
			.ok_or_else(|| missing_localization(locale, &format!("Categories.{}", self.id)))
	}
}

#[derive(Debug, Clone, Default)]
pub struct NamespaceNode {
	/// `None` for the root namespace.
	pub name: Option<String>,
	pub categories: Vec<CategoryNode>,
}

impl NamespaceNode {
	pub fn new(name: Option<&str>) -> Self {
		Self {
			name: name.map(ToString::to_string),
			categories: Vec::new(),
		}
	}

	pub fn category(&self, id: &str) -> Option<&CategoryNode> {
		self.categories.iter().find(|category| category.id == id)
	}

	pub fn category_mut(&mut self, id: &str) -> Option<&mut CategoryNode> {
		self.categories.iter_mut().find(|category| category.id == id)
	}

	fn has_functions(&self) -> bool {
		self.categories
			.iter()
			.any(|category| !category.functions.is_empty())
	}
}

fn missing_localization(locale: &str, key: &str) -> DocError {
	DocError::MissingLocalization {
		locale: locale.to_string(),
		key: key.to_string(),
	}
}

/// A node of the site generator's sidebar.
#[derive(Debug, Clone, Serialize, Eq, PartialEq)]
pub struct SidebarItem {
	pub text: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub link: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub collapsed: Option<bool>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub items: Vec<SidebarItem>,
}

impl SidebarItem {
	pub fn group(text: impl Into<String>, items: Vec<SidebarItem>) -> Self {
		Self {
			text: text.into(),
			link: None,
			collapsed: Some(true),
			items,
		}
	}

	pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			link: Some(link.into()),
			collapsed: None,
			items: Vec::new(),
		}
	}
}

/// The navigation tree of one locale.
#[derive(Debug, Clone, Default, Deref, Serialize, Eq, PartialEq)]
#[serde(transparent)]
pub struct Sidebar(Vec<SidebarItem>);

impl Sidebar {
	/// Build the sidebar of `locale`.
	///
	/// Named namespaces become collapsed groups; categories of the root
	/// namespace are placed at the top level. Groups without functions are
	/// left out. `link` maps a namespace and a localized function name to the
	/// page's web path.
	pub fn build<F>(namespaces: &[NamespaceNode], locale: &str, link: F) -> DocResult<Self>
	where
		F: Fn(Option<&str>, &str) -> String,
	{
		let mut root = Vec::new();

		for namespace in namespaces.iter().filter(|node| node.has_functions()) {
			let mut category_items = Vec::new();

			for category in &namespace.categories {
				if category.functions.is_empty() {
					continue;
				}

				let mut function_items = Vec::with_capacity(category.functions.len());
				for function in &category.functions {
					let name = &function.localization(locale)?.name;
					function_items
						.push(SidebarItem::link(name, link(namespace.name.as_deref(), name)));
				}

				category_items.push(SidebarItem::group(category.label(locale)?, function_items));
			}

			match &namespace.name {
				Some(name) => root.push(SidebarItem::group(name, category_items)),
				None => root.extend(category_items),
			}
		}

		Ok(Self(root))
	}

	/// Pretty-printed JSON with a two-space indent.
	pub fn to_json(&self) -> DocResult<String> {
		serde_json::to_string_pretty(self).map_err(|e| DocError::Serialize(e.to_string()))
	}
}
