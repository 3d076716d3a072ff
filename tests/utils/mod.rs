/// Shared setup for launchpad integration tests.
pub mod assertions;

pub use fixtures::*;

/// Common test constants
pub mod constants {
    /// Reference start time; every fixture auction opens relative to it.
    pub const START: u64 = 1_700_000_000;
    pub const OWNER_BALANCE: i128 = 1_000_000_000_000;
    pub const BUYER_BALANCE: i128 = 100_000_000_000;
}
