pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::ExposureConfig;

pub use crate::core::dynamic::{DynamicModel, ModelSchema};
pub use crate::core::exposer::{expose, expose_many, expose_one, ExposeAll, ExposeExt, Models};
pub use crate::core::registry::SchemaRegistry;
pub use crate::domain::model::{Exposed, Exposure};
pub use crate::domain::ports::{Exposable, FieldList};
pub use crate::utils::error::{ExposeError, Result};

#[doc(hidden)]
pub mod __reexports {
    pub use serde_json;
}
