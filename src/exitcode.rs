//! Standard exit codes (BSD sysexits.h compatible)

/// Data format error (e.g. invalid synthetic catalog shape)
pub const DATAERR: i32 = 65;

/// Service unavailable (database cannot be opened or queried)
pub const UNAVAILABLE: i32 = 69;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
