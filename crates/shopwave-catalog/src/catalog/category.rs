//! Categories and the reference list used to resolve them.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name. Products reference their category by this name.
    pub name: String,
    /// Category image URL.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Category {
    /// Create a category without an image.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: None,
        }
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// Static, ordered list of categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CategoryDirectory {
    categories: Vec<Category>,
}

impl CategoryDirectory {
    /// Build a directory from a list of categories, keeping their order.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Find a category by id.
    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Resolve an id to its display name.
    pub fn name_of(&self, id: &CategoryId) -> Option<&str> {
        self.get(id).map(|c| c.name.as_str())
    }

    /// Resolve an id to its display name, or the empty string when unknown.
    ///
    /// Filtering on the empty name matches no well-formed product.
    pub fn filter_name(&self, id: &CategoryId) -> &str {
        self.name_of(id).unwrap_or("")
    }

    /// Iterate categories in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl FromIterator<Category> for CategoryDirectory {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
