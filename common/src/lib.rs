#[cfg(feature = "env")]
pub mod env;
#[cfg(feature = "logger")]
pub mod logger;
#[cfg(feature = "version")]
pub mod version;
