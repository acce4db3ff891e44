//! Typed per-request values carried next to the RQL expression.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A map holding at most one value per type.
///
/// Providers read whatever they understand (headers, a tenant, a timeout) and
/// ignore the rest. Cloning is cheap: values are shared, and an insert into a
/// clone never shows up in the original.
#[derive(Clone, Default)]
pub struct Extensions {
	map: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl Extensions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores `value`, replacing an earlier value of the same type.
	///
	/// # Examples
	///
	/// ```
	/// use exh_pagination::Extensions;
	///
	/// #[derive(Debug, PartialEq)]
	/// struct Tenant(&'static str);
	///
	/// let mut extensions = Extensions::new();
	/// extensions.insert(Tenant("acme"));
	/// extensions.insert(Tenant("globex"));
	///
	/// assert_eq!(extensions.get::<Tenant>(), Some(&Tenant("globex")));
	/// assert_eq!(extensions.len(), 1);
	/// ```
	pub fn insert<T: Send + Sync + 'static>(&mut self, value: T) {
		self.map.insert(TypeId::of::<T>(), Arc::new(value));
	}

	pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
		self.map
			.get(&TypeId::of::<T>())
			.and_then(|value| value.downcast_ref::<T>())
	}

	pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
		self.map.contains_key(&TypeId::of::<T>())
	}

	pub fn len(&self) -> usize {
		self.map.len()
	}

	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}
}

impl fmt::Debug for Extensions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Extensions").field("len", &self.map.len()).finish()
	}
}
