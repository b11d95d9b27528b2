pub use anyhow::Context;
pub use tracing::{Level, debug, error, info, instrument, warn};

pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
