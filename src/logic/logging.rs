//! Items related to [logging](log).
//!
//! Calls to the log macros are made throughout the library, at trace and debug level.
//! No log implementation is installed by the library; the `symlog` binary uses
//! `env_logger`, so `RUST_LOG=classify=trace` narrows output to a single stage.

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [tokenizing](crate::logic::lexing)
    pub const TOKENIZE: &str = "tokenize";

    /// Logs related to the [classifier passes](crate::logic::classifying)
    pub const CLASSIFY: &str = "classify";

    /// Logs related to [building](crate::logic::building) terms and formulas
    pub const BUILD: &str = "build";

    /// Logs related to [meta-symbol matching](crate::logic::matching)
    pub const MATCH: &str = "match";

    /// Logs related to [unabbreviation](crate::logic::unabbreviation)
    pub const UNABBREVIATE: &str = "unabbreviate";

    /// Logs related to loading [language definitions](crate::logic::language)
    pub const CONFIG: &str = "config";
}
