mod core;
pub use self::core::*;
mod codec;
