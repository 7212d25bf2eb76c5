//! Type definitions for bizsync

mod artifact;
mod business;
mod directory;
mod error;
mod sheet;

pub use artifact::*;
pub use business::*;
pub use directory::*;
pub use error::*;
pub use sheet::*;
