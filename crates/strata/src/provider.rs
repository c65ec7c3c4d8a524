//! Queryable result of a successful compilation.

use indexmap::IndexMap;

use crate::error::QueryError;
use crate::layer::{Capacity, LayerId, ZIndex};

/// The immutable, queryable outcome of compiling a rule set.
///
/// Holds the computed base index and capacity for every rule-referenced
/// layer. Nothing mutates a provider after construction, so shared
/// references are safe to read from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackProvider {
	bases: IndexMap<LayerId, ZIndex>,
	capacities: IndexMap<LayerId, Capacity>,
}

impl StackProvider {
	pub(crate) fn new(
		bases: IndexMap<LayerId, ZIndex>,
		capacities: IndexMap<LayerId, Capacity>,
	) -> Self {
		Self { bases, capacities }
	}

	/// Returns the base z-index of `layer`.
	///
	/// Shorthand for [`Self::try_get_at`] with sub-index 0.
	pub fn try_get(&self, layer: impl AsRef<str>) -> Result<ZIndex, QueryError> {
		self.try_get_at(layer, 0)
	}

	/// Returns `base + index` for stacking the `index`-th item into `layer`.
	///
	/// Fails with [`QueryError::AbsentLayer`] when no rule references
	/// `layer`, and with [`QueryError::IndexOutOfBounds`] when `index` does
	/// not fit the layer's capacity. Either failure leaves the provider
	/// untouched and usable.
	pub fn try_get_at(&self, layer: impl AsRef<str>, index: u32) -> Result<ZIndex, QueryError> {
		let name = layer.as_ref();
		let Some(base) = self.bases.get(name).copied() else {
			return Err(QueryError::AbsentLayer {
				layer: LayerId::from(name),
			});
		};
		let capacity = self.capacities.get(name).copied().unwrap_or(1);
		if index >= capacity {
			return Err(QueryError::IndexOutOfBounds {
				layer: LayerId::from(name),
				index,
				capacity,
			});
		}
		Ok(base + index)
	}

	/// Returns the base z-index of `layer`.
	///
	/// # Panics
	///
	/// Panics when no rule references `layer`. Use [`Self::try_get`] for
	/// user-controlled names.
	pub fn get(&self, layer: impl AsRef<str>) -> ZIndex {
		self.get_at(layer, 0)
	}

	/// Returns `base + index` for stacking into `layer`.
	///
	/// # Panics
	///
	/// Panics when the layer is unknown or `index` exceeds its capacity.
	/// Use [`Self::try_get_at`] for user-controlled input.
	pub fn get_at(&self, layer: impl AsRef<str>, index: u32) -> ZIndex {
		match self.try_get_at(layer, index) {
			Ok(z) => z,
			Err(err) => panic!("{err}"),
		}
	}

	/// A copy of the full base-index table, in first-seen rule order.
	///
	/// The copy is yours: mutating it cannot corrupt the provider. Feeding
	/// it back as predefined bases for the same rule set reproduces this
	/// provider's answers exactly.
	pub fn bases(&self) -> IndexMap<LayerId, ZIndex> {
		self.bases.clone()
	}

	/// The configured capacity of `layer`, if it is known.
	pub fn capacity(&self, layer: impl AsRef<str>) -> Option<Capacity> {
		self.capacities.get(layer.as_ref()).copied()
	}

	/// True when some rule references `layer`.
	pub fn contains(&self, layer: impl AsRef<str>) -> bool {
		self.bases.contains_key(layer.as_ref())
	}

	/// Allocated layers in first-seen rule order.
	pub fn layers(&self) -> impl Iterator<Item = &LayerId> {
		self.bases.keys()
	}

	/// Number of allocated layers.
	pub fn len(&self) -> usize {
		self.bases.len()
	}

	/// True when no rules were supplied.
	pub fn is_empty(&self) -> bool {
		self.bases.is_empty()
	}
}
