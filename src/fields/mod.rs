//! Field synthesis and control adapters
//!
//! Descriptors are synthesized per read from the store's current values;
//! adapters derive select/radio/file/textarea variants from them.

mod descriptor;
mod file;
mod multi;
mod textarea;

pub use descriptor::*;
pub use file::*;
pub use multi::*;
pub use textarea::*;
