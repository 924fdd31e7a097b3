#![warn(clippy::all, rust_2018_idioms)]

pub mod action;
pub mod catalog;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod gallery;
pub mod id_generator;
pub mod share;
pub mod state;
pub mod storage;
pub mod template;
pub mod text_box;
mod util;

pub use action::{Action, ActionLog};
pub use catalog::{InMemoryTemplateCatalog, TemplateCatalog};
pub use config::EditorConfig;
pub use error::{CatalogError, ConfigError, ExportError, RenderError, ShareError, StorageError};
pub use event::{EventBus, EventHandler, SessionEvent};
pub use export::{MemeExporter, Rasterizer};
pub use gallery::MemeGallery;
pub use share::{ShareDispatcher, ShareRequest};
pub use state::{EditSession, MemeModel, StyleEditMode};
pub use storage::{InMemoryMemeStore, MemeId, MemeStore, RenderedImage, SortOrder, StoredMeme};
pub use template::{MetadataRegistry, Template, TemplateId, TemplateMetadata};
pub use text_box::{MemeFont, TextBox, TextBoxId};
