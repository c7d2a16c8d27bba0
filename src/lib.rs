//! Root crate facade for the PasteView core library and server.

pub use pasteview_core::{
    config, constants, controls, fragment, gutter, languages, layout, text, AppError, Config,
    LanguageCatalog, LineFragment, LineGutter,
};
pub use pasteview_server::{create_app, error, handlers, serve_router, AppState};
