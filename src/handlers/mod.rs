#[cfg(feature = "ssr")]
mod ask;
#[cfg(feature = "ssr")]
pub use ask::*;
