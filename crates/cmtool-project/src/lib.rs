pub mod layout;
pub mod package_kind;
pub mod scaffold;

pub use layout::InstallLayout;
pub use package_kind::{PackageHandle, PackageKind};
pub use scaffold::{TemplateSet, scaffold_package};
