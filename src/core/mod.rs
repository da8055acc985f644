pub mod dynamic;
pub mod exposer;
#[doc(hidden)]
pub mod macros;
pub mod registry;

pub use crate::domain::model::{Exposed, Exposure};
pub use crate::domain::ports::{Exposable, FieldList};
pub use crate::utils::error::Result;
