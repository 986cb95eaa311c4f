// App layer: the site's catalogs, markup and page wiring on top of core.

pub mod business;
pub mod catalog;
pub mod forms;
pub mod installers;
pub mod render;
pub mod site;

pub use business::BusinessPage;
pub use catalog::Catalog;
pub use installers::InstallersPage;
pub use site::{submitter_from_config, Site};
