pub mod path_resolver;
pub mod store;

pub use path_resolver::{MatchResult, PathResolver};
pub use store::RegistryStore;
