use parking_lot::RwLock;

use crate::template::{MetadataRegistry, Template, TemplateId};

/// Source of the templates a meme can be started from
pub trait TemplateCatalog: Send + Sync {
    fn list_available(&self) -> Vec<Template>;

    /// Case-insensitive substring search over names and search terms.
    /// A blank query returns every template.
    fn search(&self, query: &str) -> Vec<Template>;

    fn get(&self, id: TemplateId) -> Option<Template>;
}

/// Catalog backed by a list held in memory
#[derive(Debug, Default)]
pub struct InMemoryTemplateCatalog {
    templates: RwLock<Vec<Template>>,
}

impl InMemoryTemplateCatalog {
    pub fn new(templates: Vec<Template>) -> Self {
        Self {
            templates: RwLock::new(templates),
        }
    }

    /// Builds templates for bundled image files, in the given order. The
    /// position of a file in `files` becomes its template id.
    pub fn from_files<S: AsRef<str>>(files: &[S], registry: &MetadataRegistry) -> Self {
        let templates = files
            .iter()
            .zip(0u32..)
            .map(|(file, index)| {
                let file = file.as_ref();
                Template {
                    id: TemplateId(index),
                    name: registry.display_name(file),
                    search_terms: registry.search_terms(file),
                }
            })
            .collect();

        Self::new(templates)
    }

    /// Replaces the whole catalog
    pub fn load_templates(&self, templates: Vec<Template>) {
        log::debug!("Loading {} templates", templates.len());
        *self.templates.write() = templates;
    }
}

impl TemplateCatalog for InMemoryTemplateCatalog {
    fn list_available(&self) -> Vec<Template> {
        self.templates.read().clone()
    }

    fn search(&self, query: &str) -> Vec<Template> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.list_available();
        }

        self.templates
            .read()
            .iter()
            .filter(|template| template.matches(&needle))
            .cloned()
            .collect()
    }

    fn get(&self, id: TemplateId) -> Option<Template> {
        self.templates.read().iter().find(|template| template.id == id).cloned()
    }
}
