//! Form store module

mod form_data;
mod form_store;

pub use form_data::*;
pub use form_store::*;
