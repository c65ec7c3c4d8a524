use std::borrow::Borrow;
use std::fmt;

/// Numeric ordering key handed to the consumer's stacking mechanism.
///
/// Bases are non-negative and unbounded above; the value is opaque to this
/// crate beyond its ordering.
pub type ZIndex = u32;

/// Number of contiguous numeric slots reserved for one layer.
///
/// A layer with capacity `n` can stack items at sub-indices `0..n` without
/// colliding with the next layer up.
pub type Capacity = u32;

/// Opaque name of one stacking layer. Uniqueness is by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(transparent)
)]
pub struct LayerId(String);

impl LayerId {
	/// Creates a layer id from any string-like name.
	pub fn new(name: impl Into<String>) -> Self {
		Self(name.into())
	}

	/// The raw layer name.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for LayerId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for LayerId {
	fn from(name: &str) -> Self {
		Self(name.to_owned())
	}
}

impl From<String> for LayerId {
	fn from(name: String) -> Self {
		Self(name)
	}
}

impl Borrow<str> for LayerId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for LayerId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

#[cfg(test)]
mod tests {
	use super::LayerId;

	#[test]
	fn display_renders_raw_name() {
		assert_eq!(LayerId::from("modal").to_string(), "modal");
	}

	#[test]
	fn equality_is_by_value() {
		assert_eq!(LayerId::from("bg"), LayerId::new(String::from("bg")));
		assert_ne!(LayerId::from("bg"), LayerId::from("fg"));
	}
}
