use serde::{Deserialize, Serialize};

/// Dimensions and crop behavior for one named size variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeSpec {
    /// Target width in pixels.
    pub width: u32,

    /// Target height in pixels. Zero means unconstrained.
    pub height: u32,

    /// Whether the variant is cropped to exactly these dimensions
    /// (`fit=crop`) or fitted within them (`fit=max`).
    pub crop: bool,
}

/// Registry of named size variants generated for every normalized record.
///
/// Entries keep their registration order. The `full` variant is always
/// appended at the photo's native dimensions and never needs registering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRegistry {
    entries: Vec<(String, SizeSpec)>,
}

impl SizeRegistry {
    /// Empty registry. Records built against it carry only `full`.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a named size. Re-registering a name replaces its spec.
    pub fn register(&mut self, name: impl Into<String>, spec: SizeSpec) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = spec;
        } else {
            self.entries.push((name, spec));
        }
    }

    /// Registered entries in registration order, excluding `full`.
    pub fn entries(&self) -> impl Iterator<Item = (&str, SizeSpec)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), *s))
    }
}

impl Default for SizeRegistry {
    /// The stock media-library sizes: `thumbnail` and `medium` cropped,
    /// `medium_large` and `large` fitted.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(
            "thumbnail",
            SizeSpec {
                width: 150,
                height: 150,
                crop: true,
            },
        );
        registry.register(
            "medium",
            SizeSpec {
                width: 300,
                height: 300,
                crop: true,
            },
        );
        registry.register(
            "medium_large",
            SizeSpec {
                width: 768,
                height: 0,
                crop: false,
            },
        );
        registry.register(
            "large",
            SizeSpec {
                width: 1024,
                height: 1024,
                crop: false,
            },
        );
        registry
    }
}
