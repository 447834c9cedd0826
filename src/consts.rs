//! Global constants for the account-setup binary.

pub const LOG_FILE: &str = "./credcheck.log"; // Where the binary writes its log.
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info; // Minimum level written to LOG_FILE.
