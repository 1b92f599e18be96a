pub mod document;
pub mod error;
pub mod loader;
pub mod ordering;
pub mod result;

pub use document::*;
pub use error::*;
pub use loader::*;
pub use ordering::*;
pub use result::*;
