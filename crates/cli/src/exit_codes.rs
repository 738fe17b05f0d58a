//! CLI exit code registry.
//!
//! Single source of truth for qgrid exit codes. Exit codes are part of the
//! shell contract; agency scripts branch on them.
//!
//! | Code | Meaning                                      |
//! |------|----------------------------------------------|
//! | 0    | Success                                      |
//! | 1    | General error (layout failure, write failure)|
//! | 2    | Usage error (bad args, missing file)         |
//! | 3    | Session file invalid (parse or validation)   |
//! | 4    | `check` found warnings                       |
//! | 5    | Style sheet invalid                          |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - layout failure or output write failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing input file.
pub const EXIT_USAGE: u8 = 2;

/// Session JSON failed to parse or validate.
pub const EXIT_SESSION_INVALID: u8 = 3;

/// `check` completed but found data warnings.
pub const EXIT_CHECK_WARNINGS: u8 = 4;

/// Style TOML failed to parse.
pub const EXIT_STYLE_INVALID: u8 = 5;
