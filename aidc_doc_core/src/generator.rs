use crate::DocError;
use crate::DocResult;
use crate::descriptor::Catalog;
use crate::descriptor::CategoryDescriptor;
use crate::descriptor::ClassDescriptor;
use crate::descriptor::MethodDescriptor;

/// Receives the traversal of a [`Catalog`].
///
/// [`generate`] calls the methods in the order
/// `on_initialize → {on_namespace → {on_category → {on_method}*}*}* →
/// on_finalize`. The active namespace and category are always passed in,
/// so implementations never need to remember "where" the traversal is.
pub trait GeneratorCallbacks {
	/// Called once before anything else.
	fn on_initialize(&mut self) -> DocResult<()>;

	/// Called once per namespace; `None` is the root namespace.
	fn on_namespace(&mut self, namespace: Option<&str>) -> DocResult<()>;

	/// Called once per category used within `namespace`.
	fn on_category(
		&mut self,
		namespace: Option<&str>,
		category: &CategoryDescriptor,
	) -> DocResult<()>;

	/// Called for every method, hidden ones included.
	fn on_method(
		&mut self,
		namespace: Option<&str>,
		category: &CategoryDescriptor,
		class: &ClassDescriptor,
		method: &MethodDescriptor,
	) -> DocResult<()>;

	/// Called last. `success` is false when any earlier callback failed.
	fn on_finalize(&mut self, success: bool) -> DocResult<()>;
}

/// Walk `catalog`, namespaces and categories in order of first appearance.
///
/// The first error stops the traversal; `on_finalize(false)` is still called
/// and the original error is returned.
pub fn generate<C>(catalog: &Catalog, callbacks: &mut C) -> DocResult<()>
where
	C: GeneratorCallbacks + ?Sized,
{
	let result = walk(catalog, callbacks);

	if let Err(e) = &result {
		tracing::debug!(error = %e, "traversal failed");
	}

	let finalized = callbacks.on_finalize(result.is_ok());
	result.and(finalized)
}

fn walk<C>(catalog: &Catalog, callbacks: &mut C) -> DocResult<()>
where
	C: GeneratorCallbacks + ?Sized,
{
	callbacks.on_initialize()?;

	for namespace in distinct(catalog.classes.iter().map(|class| class.namespace.as_deref())) {
		callbacks.on_namespace(namespace)?;

		let classes: Vec<&ClassDescriptor> = catalog
			.classes
			.iter()
			.filter(|class| class.namespace.as_deref() == namespace)
			.collect();

		for category_id in distinct(classes.iter().map(|class| class.category.as_str())) {
			let Some(category) = catalog.category(category_id) else {
				let class = classes
					.iter()
					.find(|class| class.category == category_id)
					.map_or_else(String::new, |class| class.name.clone());

				return Err(DocError::UnknownCategory {
					class,
					category: category_id.to_string(),
				});
			};

			callbacks.on_category(namespace, category)?;

			for class in classes.iter().filter(|class| class.category == category_id) {
				for method in &class.methods {
					callbacks.on_method(namespace, category, class, method)?;
				}
			}
		}
	}

	Ok(())
}

fn distinct<T: PartialEq>(values: impl Iterator<Item = T>) -> Vec<T> {
	let mut unique = Vec::new();

	for value in values {
		if !unique.contains(&value) {
			unique.push(value);
		}
	}

	unique
}
