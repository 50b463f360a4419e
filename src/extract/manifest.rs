// src/extract/manifest.rs
// =============================================================================
// The types the extractor produces and the measurer consumes.
//
// - Category: css, js or img, always in that order
// - ResourceManifest: one ordered list of absolute URLs per category
// =============================================================================

use serde::Serialize;
use std::fmt;

/// The kinds of resource we weigh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Css,
    Js,
    Img,
}

impl Category {
    /// Every category, in report order.
    pub const ALL: [Category; 3] = [Category::Css, Category::Js, Category::Img];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Css => "css",
            Category::Js => "js",
            Category::Img => "img",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Absolute resource URLs found on one page, grouped by category.
///
/// Each list keeps document order and may contain the same URL more than
/// once if the page references it more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResourceManifest {
    pub css: Vec<String>,
    pub js: Vec<String>,
    pub img: Vec<String>,
}

impl ResourceManifest {
    pub fn urls(&self, category: Category) -> &[String] {
        match category {
            Category::Css => &self.css,
            Category::Js => &self.js,
            Category::Img => &self.img,
        }
    }

    pub(crate) fn push(&mut self, category: Category, url: String) {
        match category {
            Category::Css => self.css.push(url),
            Category::Js => self.js.push(url),
            Category::Img => self.img.push(url),
        }
    }

    /// Iterates over (category, urls) in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.urls(c)))
    }

    /// Number of references across all categories, duplicates included.
    pub fn resource_count(&self) -> usize {
        self.css.len() + self.js.len() + self.img.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resource_count() == 0
    }
}
