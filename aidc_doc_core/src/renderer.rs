use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use crate::DocError;
use crate::DocResult;
use crate::config::DocConfig;
use crate::config::ImplementationsConfig;
use crate::config::validate_output_path;
use crate::descriptor::CategoryDescriptor;
use crate::descriptor::ClassDescriptor;
use crate::descriptor::MethodDescriptor;
use crate::descriptor::Multiplicity;
use crate::descriptor::ParameterDescriptor;
use crate::generator::GeneratorCallbacks;
use crate::locale::LocaleResourceSet;
use crate::locale::LocaleResources;
use crate::locale::interpolate;
use crate::markdown::FRONT_MATTER;
use crate::markdown::render_table;
use crate::markdown::title_case;
use crate::tree::CategoryNode;
use crate::tree::FunctionNode;
use crate::tree::NamespaceNode;
use crate::tree::Sidebar;

/// Name of the page written to every namespace directory.
pub const INDEX_FILE_NAME: &str = "index.md";

const EXCEL_HOST: &str = "Microsoft Excel";
const GOOGLE_HOST: &str = "Google Sheets";

/// Writes the localized pages and sidebars of the application extension.
///
/// Every locale gets its own copy of the tree below
/// `<site_dir>/[<locale>/]<output_path>/`, with the locale segment left out
/// for the default locale.
#[derive(Debug)]
pub struct DocumentationRenderer {
	site_root: PathBuf,
	output_path: String,
	sidebar_file: String,
	base_path: String,
	default_locale: String,
	primary_locale: String,
	locales: Vec<String>,
	resources_dir: Option<PathBuf>,
	implementations: ImplementationsConfig,
	resources: LocaleResources,
	namespaces: Vec<NamespaceNode>,
	pages_written: usize,
}

impl DocumentationRenderer {
	/// Create a renderer writing below `root` as configured by `config`.
	pub fn new(root: &Path, config: &DocConfig) -> Self {
		Self {
			site_root: root.join(&config.site_dir),
			output_path: config.output_path.trim_matches('/').to_string(),
			sidebar_file: config.sidebar_file.clone(),
			base_path: config.base_path.trim_end_matches('/').to_string(),
			default_locale: config.default_locale.clone(),
			primary_locale: config.primary_locale.clone(),
			locales: config.locales.clone(),
			resources_dir: config.resources.as_ref().map(|dir| root.join(dir)),
			implementations: config.implementations.clone(),
			resources: LocaleResources::default(),
			namespaces: Vec::new(),
			pages_written: 0,
		}
	}

	/// Namespace nodes recorded so far, in traversal order.
	pub fn namespaces(&self) -> &[NamespaceNode] {
		&self.namespaces
	}

	/// Number of function pages written across all locales. Index pages are
	/// not counted.
	pub fn pages_written(&self) -> usize {
		self.pages_written
	}

	/// Configured locales, in generation order.
	pub fn locales(&self) -> &[String] {
		&self.locales
	}

	/// File-system directory of `locale`, optionally narrowed to `namespace`.
	pub fn locale_dir(&self, locale: &str, namespace: Option<&str>) -> PathBuf {
		let mut path = self.site_root.clone();

		if locale != self.default_locale {
			path.push(locale);
		}

		if !self.output_path.is_empty() {
			path.push(&self.output_path);
		}

		if let Some(namespace) = namespace {
			path.push(namespace);
		}

		path
	}

	/// Web path of `file_name` in `locale` and `namespace`.
	pub fn link(&self, locale: &str, namespace: Option<&str>, file_name: &str) -> String {
		let mut link = format!("{}/", self.base_path);

		if locale != self.default_locale {
			link.push_str(locale);
			link.push('/');
		}

		if !self.output_path.is_empty() {
			link.push_str(&self.output_path);
			link.push('/');
		}

		if let Some(namespace) = namespace {
			link.push_str(namespace);
			link.push('/');
		}

		link.push_str(file_name);
		link
	}

	fn namespace_position(&self, namespace: Option<&str>) -> Option<usize> {
		self.namespaces
			.iter()
			.position(|node| node.name.as_deref() == namespace)
	}

	/// Render the index page of `namespace` in one locale.
	pub fn render_index_page(
		resources: &LocaleResourceSet,
		namespace: Option<&str>,
	) -> DocResult<String> {
		let title = match namespace {
			Some(namespace) => {
				interpolate(
					"namespaceTitle",
					&resources.namespace_title,
					&[("namespace", namespace)],
				)?
			}
			None => resources.root_namespace_title.clone(),
		};

		Ok(format!(
			"{FRONT_MATTER}# {title}\n\n{}\n",
			resources.introduction
		))
	}

	/// Render the page of `function` in one locale.
	///
	/// The method must already have passed the driving parameter check;
	/// `driving` is its result.
	pub fn render_method_page(
		&self,
		resources: &LocaleResourceSet,
		locale: &str,
		namespace: Option<&str>,
		function: &FunctionNode,
		method: &MethodDescriptor,
		driving: Option<&ParameterDescriptor>,
	) -> DocResult<String> {
		let localization = function.localization(locale)?;
		let mut page = String::from(FRONT_MATTER);

		match namespace {
			Some(namespace) => page.push_str(&format!("# {namespace}.{}\n\n", localization.name)),
			None => page.push_str(&format!("# {}\n\n", localization.name)),
		}

		let arguments = call_arguments(locale, function, method)?;
		let excel_name = self.excel_name(namespace, &localization.name);
		let google_name = self.google_name(namespace, function)?;

		page.push_str(&format!("::: info {}\n", resources.implementations));
		page.push_str(&format!("- {EXCEL_HOST}: `{excel_name}({arguments})`\n"));
		page.push_str(&format!("- {GOOGLE_HOST}: `{google_name}({arguments})`\n"));
		page.push_str(":::\n\n");

		page.push_str(&localization.description);
		page.push('\n');

		for note in notes(resources, locale, function, method, driving)? {
			page.push('\n');
			page.push_str(&note);
			page.push('\n');
		}

		if !method.parameters.is_empty() {
			page.push_str(&format!("\n## {}\n\n", resources.parameters));

			let mut rows = Vec::with_capacity(method.parameters.len());
			for parameter in &method.parameters {
				let parameter_localization =
					function.parameter_localization(locale, &parameter.name)?;

				rows.push(vec![
					parameter_cell(&parameter_localization.name, parameter),
					resources.type_name(parameter.r#type).to_string(),
					parameter_localization.description.clone(),
				]);
			}

			page.push_str(&render_table(
				&[
					resources.name.as_str(),
					resources.r#type.as_str(),
					resources.description.as_str(),
				],
				&rows,
			));
		}

		Ok(page)
	}

	fn excel_name(&self, namespace: Option<&str>, name: &str) -> String {
		let qualified = match namespace {
			Some(namespace) => format!("{}.{namespace}.{name}", self.implementations.excel_namespace),
			None => format!("{}.{name}", self.implementations.excel_namespace),
		};

		qualified.to_uppercase()
	}

	/// Google Sheets cannot localize function names, so the primary locale's
	/// name is used in every locale.
	fn google_name(&self, namespace: Option<&str>, function: &FunctionNode) -> DocResult<String> {
		let name = &function.localization(&self.primary_locale)?.name;

		Ok(format!(
			"{}{}{}",
			self.implementations.google_prefix,
			namespace.unwrap_or_default(),
			title_case(name)
		))
	}
}

/// Explanatory sentences in their fixed order: optional parameters,
/// array parameters, matrix parameters, shape of the result.
fn notes(
	resources: &LocaleResourceSet,
	locale: &str,
	function: &FunctionNode,
	method: &MethodDescriptor,
	driving: Option<&ParameterDescriptor>,
) -> DocResult<Vec<String>> {
	let mut notes = Vec::new();
	let has_matrix_parameter = method.has_parameter_with(Multiplicity::Matrix);

	if method.has_optional_parameter() {
		notes.push(resources.parameters_are_optional.clone());
	}

	if method.has_parameter_with(Multiplicity::Array) {
		notes.push(resources.parameter_accepts_array.clone());
	}

	if has_matrix_parameter {
		notes.push(resources.parameter_accepts_matrix.clone());
	}

	match (method.multiplicity, driving) {
		(Multiplicity::Array, _) => notes.push(resources.function_returns_array.clone()),
		(Multiplicity::Matrix, None) => notes.push(resources.function_returns_matrix.clone()),
		(Multiplicity::Matrix, Some(driving)) => {
			let driving_name = &function
				.parameter_localization(locale, &driving.name)?
				.name;
			let (key, template) = if has_matrix_parameter {
				(
					"functionReturnsMatrixMatrix",
					&resources.function_returns_matrix_matrix,
				)
			} else {
				(
					"functionReturnsArrayMatrix",
					&resources.function_returns_array_matrix,
				)
			};

			notes.push(interpolate(
				key,
				template,
				&[("drivingParameterName", driving_name.as_str())],
			)?);
		}
		(Multiplicity::Singleton | Multiplicity::SingletonArray, _) => {}
	}

	Ok(notes)
}

fn write_page(path: &Path, content: &str) -> DocResult<()> {
	std::fs::write(path, content)?;
	tracing::debug!(path = %path.display(), "wrote page");

	Ok(())
}

/// Comma separated parameter names with optional ones in brackets.
fn call_arguments(
	locale: &str,
	function: &FunctionNode,
	method: &MethodDescriptor,
) -> DocResult<String> {
	let mut arguments = Vec::with_capacity(method.parameters.len());

	for parameter in &method.parameters {
		let name = &function.parameter_localization(locale, &parameter.name)?.name;

		if parameter.is_required {
			arguments.push(name.clone());
		} else {
			arguments.push(format!("[{name}]"));
		}
	}

	Ok(arguments.join(", "))
}

fn parameter_cell(name: &str, parameter: &ParameterDescriptor) -> String {
	let mut cell = if parameter.is_required {
		name.to_string()
	} else {
		format!("*{name}*")
	};

	match parameter.multiplicity {
		Multiplicity::Array => cell.push_str("<sup>*</sup>"),
		Multiplicity::Matrix => cell.push_str("<sup>**</sup>"),
		Multiplicity::Singleton | Multiplicity::SingletonArray => {}
	}

	cell
}

impl GeneratorCallbacks for DocumentationRenderer {
	fn on_initialize(&mut self) -> DocResult<()> {
		validate_output_path(&self.output_path)?;
		self.resources = LocaleResources::load(&self.locales, self.resources_dir.as_deref())?;
		self.namespaces.clear();
		self.pages_written = 0;

		// Remove everything first; the default locale's directory may contain
		// the others.
		for locale in &self.locales {
			let dir = self.locale_dir(locale, None);

			match std::fs::remove_dir_all(&dir) {
				Ok(()) => {
					tracing::debug!(path = %dir.display(), "removed previous output");
				}
				Err(e) if e.kind() == ErrorKind::NotFound => {}
				Err(e) => return Err(e.into()),
			}
		}

		for locale in &self.locales {
			std::fs::create_dir_all(self.locale_dir(locale, None))?;
		}

		Ok(())
	}

	fn on_namespace(&mut self, namespace: Option<&str>) -> DocResult<()> {
		if self.namespace_position(namespace).is_some() {
			return Ok(());
		}

		tracing::info!(namespace = namespace.unwrap_or("<root>"), "generating namespace");

		let mut pages = Vec::with_capacity(self.locales.len());
		for locale in &self.locales {
			let dir = self.locale_dir(locale, namespace);
			std::fs::create_dir_all(&dir)?;

			let content = Self::render_index_page(self.resources.get(locale)?, namespace)?;
			pages.push((dir.join(INDEX_FILE_NAME), content));
		}

		for (path, content) in pages {
			write_page(&path, &content)?;
		}

		self.namespaces.push(NamespaceNode::new(namespace));

		Ok(())
	}

	fn on_category(
		&mut self,
		namespace: Option<&str>,
		category: &CategoryDescriptor,
	) -> DocResult<()> {
		let node = CategoryNode::new(category);
		for locale in &self.locales {
			node.label(locale)?;
		}

		let position = match self.namespace_position(namespace) {
			Some(position) => position,
			None => {
				self.on_namespace(namespace)?;
				self.namespaces.len() - 1
			}
		};
		let namespace_node = &mut self.namespaces[position];

		if namespace_node.category(&category.id).is_none() {
			namespace_node.categories.push(node);
		}

		Ok(())
	}

	fn on_method(
		&mut self,
		namespace: Option<&str>,
		category: &CategoryDescriptor,
		class: &ClassDescriptor,
		method: &MethodDescriptor,
	) -> DocResult<()> {
		if method.is_hidden {
			tracing::debug!(class = %class.name, method = %method.name, "skipping hidden method");
			return Ok(());
		}

		let Some(position) = self.namespace_position(namespace) else {
			return Err(DocError::UnknownCategory {
				class: class.name.clone(),
				category: category.id.clone(),
			});
		};

		if self.namespaces[position].category(&category.id).is_none() {
			return Err(DocError::UnknownCategory {
				class: class.name.clone(),
				category: category.id.clone(),
			});
		}

		let driving = method.driving_parameter()?;
		let function = FunctionNode::new(namespace, method);

		let mut pages = Vec::with_capacity(self.locales.len());
		for locale in &self.locales {
			let resources = self.resources.get(locale)?;
			let file_name = format!("{}.md", function.localization(locale)?.name);
			let content =
				self.render_method_page(resources, locale, namespace, &function, method, driving)?;

			pages.push((self.locale_dir(locale, namespace).join(file_name), content));
		}

		for (path, content) in pages {
			if path.exists() {
				tracing::warn!(
					class = %class.name,
					method = %method.name,
					path = %path.display(),
					"overwriting a page written by another method with the same localized name"
				);
			}

			write_page(&path, &content)?;
			self.pages_written += 1;
		}

		if let Some(category_node) = self.namespaces[position].category_mut(&category.id) {
			category_node.functions.push(function);
		}

		Ok(())
	}

	fn on_finalize(&mut self, success: bool) -> DocResult<()> {
		if !success {
			tracing::warn!("generation failed, sidebars were not written");
			return Ok(());
		}

		for locale in &self.locales {
			let sidebar = Sidebar::build(&self.namespaces, locale, |namespace, name| {
				self.link(locale, namespace, &format!("{name}.md"))
			})?;

			let dir = self.locale_dir(locale, None);
			std::fs::create_dir_all(&dir)?;

			let path = dir.join(&self.sidebar_file);
			std::fs::write(&path, sidebar.to_json()?)?;
			tracing::debug!(path = %path.display(), items = sidebar.len(), "wrote sidebar");
		}

		tracing::info!(
			pages = self.pages_written,
			locales = self.locales.len(),
			"generation complete"
		);

		Ok(())
	}
}
