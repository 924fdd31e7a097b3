use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// Prefix bundled template files carry in front of their stem
pub const TEMPLATE_FILE_PREFIX: &str = "meme_template_";

/// Reference to a template's background image resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TemplateId(pub u32);

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "template-{}", self.0)
    }
}

/// A background image users place text onto
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    #[serde(default)]
    pub search_terms: BTreeSet<String>,
}

impl Template {
    pub fn new(id: TemplateId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            search_terms: BTreeSet::new(),
        }
    }

    pub fn with_search_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_terms.extend(terms.into_iter().map(Into::into));
        self
    }

    /// Case-insensitive substring match over the name and every search term.
    /// `needle` must already be lowercased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .search_terms
                .iter()
                .any(|term| term.to_lowercase().contains(needle))
    }
}

/// Hand-written display data for a bundled template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMetadata {
    pub friendly_name: String,
    #[serde(default)]
    pub search_terms: BTreeSet<String>,
}

/// Metadata for bundled templates, keyed by file stem.
///
/// Files without an entry get a name and search terms derived from the stem.
#[derive(Debug, Clone, Default)]
pub struct MetadataRegistry {
    entries: HashMap<String, TemplateMetadata>,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, stem: impl Into<String>, metadata: TemplateMetadata) {
        self.entries.insert(stem.into(), metadata);
    }

    pub fn display_name(&self, filename: &str) -> String {
        let stem = template_stem(filename);
        match self.entries.get(stem) {
            Some(metadata) => metadata.friendly_name.clone(),
            None => title_case(stem),
        }
    }

    pub fn search_terms(&self, filename: &str) -> BTreeSet<String> {
        let stem = template_stem(filename);
        match self.entries.get(stem) {
            Some(metadata) => metadata.search_terms.clone(),
            None => stem
                .split('_')
                .filter(|word| !word.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }
}

/// `meme_template_distracted_boyfriend.png` -> `distracted_boyfriend`
pub fn template_stem(filename: &str) -> &str {
    let stem = filename.strip_prefix(TEMPLATE_FILE_PREFIX).unwrap_or(filename);
    match stem.rfind('.') {
        Some(dot) => &stem[..dot],
        None => stem,
    }
}

fn title_case(stem: &str) -> String {
    stem.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_strips_prefix_and_extension() {
        assert_eq!(template_stem("meme_template_two_buttons.png"), "two_buttons");
        assert_eq!(template_stem("doge.jpg"), "doge");
        assert_eq!(template_stem("meme_template_plain"), "plain");
    }

    #[test]
    fn unknown_files_get_derived_names() {
        let registry = MetadataRegistry::new();
        assert_eq!(
            registry.display_name("meme_template_distracted_boyfriend.png"),
            "Distracted Boyfriend"
        );
        let terms = registry.search_terms("meme_template_distracted_boyfriend.png");
        assert!(terms.contains("distracted"));
        assert!(terms.contains("boyfriend"));
    }

    #[test]
    fn registered_metadata_wins() {
        let mut registry = MetadataRegistry::new();
        registry.insert(
            "two_buttons",
            TemplateMetadata {
                friendly_name: "Daily Struggle".to_owned(),
                search_terms: ["choice".to_owned()].into_iter().collect(),
            },
        );

        assert_eq!(registry.display_name("meme_template_two_buttons.png"), "Daily Struggle");
        let terms = registry.search_terms("meme_template_two_buttons.png");
        assert_eq!(terms.len(), 1);
        assert!(terms.contains("choice"));
    }
}
