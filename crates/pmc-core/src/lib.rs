pub mod config;
pub mod logging;

pub mod editor;
pub mod error;
pub mod model;
pub mod outline;
pub mod patch;
pub mod scaffold;

pub use editor::CollectionEditor;
pub use error::CollectionError;
