use serde::{Deserialize, Serialize};

/// Closed set of transaction categories the factor tables cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Food,
    Clothes,
    Electronics,
    Furniture,
    Books,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Clothes,
        Category::Electronics,
        Category::Furniture,
        Category::Books,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Clothes => "Clothes",
            Category::Electronics => "Electronics",
            Category::Furniture => "Furniture",
            Category::Books => "Books",
        }
    }

    /// Resolve a client-supplied label. Unrecognized labels deliberately fall
    /// back to [`Category::Food`] instead of erroring, so a misspelled
    /// category still produces a (conservative) report. The caller can tell
    /// the two cases apart and log the fallback.
    pub fn resolve(label: &str) -> CategoryResolution {
        match label.trim() {
            "Food" => CategoryResolution::Recognized(Category::Food),
            "Clothes" => CategoryResolution::Recognized(Category::Clothes),
            "Electronics" => CategoryResolution::Recognized(Category::Electronics),
            "Furniture" => CategoryResolution::Recognized(Category::Furniture),
            "Books" => CategoryResolution::Recognized(Category::Books),
            other => CategoryResolution::Fallback {
                requested: other.to_string(),
            },
        }
    }
}

/// Outcome of mapping a free-form category label onto the closed enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryResolution {
    Recognized(Category),
    /// Unknown label remapped to the Food defaults.
    Fallback { requested: String },
}

impl CategoryResolution {
    pub fn category(&self) -> Category {
        match self {
            CategoryResolution::Recognized(category) => *category,
            CategoryResolution::Fallback { .. } => Category::Food,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, CategoryResolution::Fallback { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_labels() {
        for category in Category::ALL {
            let resolved = Category::resolve(category.label());
            assert_eq!(resolved, CategoryResolution::Recognized(category));
        }
    }

    #[test]
    fn unknown_label_falls_back_to_food() {
        let resolved = Category::resolve("Gadgets");
        assert!(resolved.is_fallback());
        assert_eq!(resolved.category(), Category::Food);
    }

    #[test]
    fn labels_are_trimmed_before_matching() {
        let resolved = Category::resolve("  Books ");
        assert_eq!(resolved.category(), Category::Books);
        assert!(!resolved.is_fallback());
    }
}
