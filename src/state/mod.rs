mod model;
mod session;
mod style_edit;

pub use model::MemeModel;
pub use session::EditSession;
pub use style_edit::StyleEditMode;
