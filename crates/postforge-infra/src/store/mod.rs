//! Post store implementations - bounded in-memory and file-per-post.

mod file;
mod memory;

pub use file::FilePostStore;
pub use memory::InMemoryPostStore;
