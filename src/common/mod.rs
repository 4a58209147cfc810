pub mod error;
pub mod percent;
pub mod prefix;

pub use error::*;
pub use percent::*;
pub use prefix::*;
