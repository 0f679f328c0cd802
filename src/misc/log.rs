/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made at the component boundaries.
These are intended to provide useful information when extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [scanning text into tokens](crate::parser::lex).
    pub const LEX: &str = "lex";

    /// Logs related to [structuring tokens into a formula](crate::parser).
    pub const PARSE: &str = "parse";

    /// Logs related to [models and the model reader](crate::model).
    pub const MODEL: &str = "model";

    /// Logs related to [evaluation](crate::procedures).
    pub const EVALUATE: &str = "evaluate";
}
