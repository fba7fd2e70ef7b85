//! Shared plumbing for single-string value objects.

/// Implements accessors, serde and `Display` for a tuple struct wrapping a
/// validated `String`.
///
/// The type must provide `fn new(impl Into<String>) -> Result<Self, ValidationError>`;
/// deserialization goes through it so invalid JSON values are rejected.
macro_rules! string_value_object {
    ($type:ident) => {
        impl $type {
            /// Get the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the underlying String.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        // Serde support - serialize as string
        impl serde::Serialize for $type {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }

        // Serde support - deserialize from string with validation
        impl<'de> serde::Deserialize<'de> for $type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                $type::new(s).map_err(serde::de::Error::custom)
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
