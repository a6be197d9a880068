pub mod encoding;
pub mod error;
pub mod function;

pub use encoding::*;
pub use error::*;
pub use function::*;
