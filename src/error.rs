use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to allocate storage for {len} cells")]
    Alloc {
        len: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("{len} cells cannot be addressed with 1-based storage")]
    CapacityOverflow { len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
