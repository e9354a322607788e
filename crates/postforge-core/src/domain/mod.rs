//! Domain entities - the core business objects.

mod export;
mod post;

pub use export::{PostExport, export_post};
pub use post::{GeneratedText, Post};
