use crate::layer::LayerId;

/// One ordering constraint: `lower` is allocated strictly below `upper`,
/// with no overlap between their slot ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
	/// The layer that must take the smaller slot range.
	pub lower: LayerId,
	/// The layer that must sit above `lower`'s entire range.
	pub upper: LayerId,
}

impl Rule {
	/// Creates a rule stating `lower` renders below `upper`.
	pub fn new(lower: impl Into<LayerId>, upper: impl Into<LayerId>) -> Self {
		Self {
			lower: lower.into(),
			upper: upper.into(),
		}
	}

	/// True when the rule orders a layer below itself.
	pub fn is_self_referential(&self) -> bool {
		self.lower == self.upper
	}
}

impl<L, U> From<(L, U)> for Rule
where
	L: Into<LayerId>,
	U: Into<LayerId>,
{
	fn from((lower, upper): (L, U)) -> Self {
		Self::new(lower, upper)
	}
}
