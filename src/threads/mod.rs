//! Thread reconstruction from a flat page of casts
//!
//! The page is indexed by hash, each cast's thread root is resolved by walking
//! same-author parent links, and casts are partitioned into root-keyed groups.

pub mod grouper;
pub mod index;
pub mod resolver;

pub use grouper::group_into_threads;
pub use grouper::ThreadGroup;
pub use index::build_cast_index;
pub use resolver::resolve_thread_root;
