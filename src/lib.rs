//! Declare typed command-line parameters and render a width-aware help
//! menu.
//!
//! This is **not** intended to be a complete command-line parser library.
//! It covers one focused workflow: declare `--name` parameters with typed
//! value slots, scan `argv` into them in a single best-effort pass, read
//! the results back through typed accessors, and print a help menu that
//! wraps cleanly at a given terminal width.
//!
//! For a more complete command-line parsing library, use [clap].
//!
//! We provide:
//! * A registry of flag, numeric, text and multi-choice parameters with
//!   per-slot defaults.
//! * A soft-failure parse: command-line problems become [`Diagnostic`]
//!   values and never abort the scan.
//! * A help menu with subsections, aligned description columns, choice
//!   tables and default-value lines, wrapped to a configurable width in
//!   English or French.
//!
//! We *do not* provide:
//! * Sub-commands, `--name=value` syntax, abbreviations or short-flag
//!   clustering. A parameter token matches a declared name exactly.
//! * Cross-parameter validation such as mutual exclusion.
//! * Terminal-width detection; pass the width in [`Config`].
//!
//! # Examples
//!
//! ```rust
//! use declargs::{Config, Parameters};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut params = Parameters::new(Config::default());
//!
//! params.set_description("Compute the sum of two integers provided on the command line.");
//! params.set_usage("sum [--help] --values <a> <b>");
//!
//! params.define_flag("help", "Print this help menu.")?;
//! params.define_values("values", &["a", "b"], vec![0i64, 0], "The two integers to add.", true)?;
//! params.define_choice(
//!     "mode",
//!     "mode",
//!     "fast",
//!     &[("fast", "Add quickly."), ("slow", "Add slowly.")],
//!     "How the sum is computed.",
//!     false,
//! )?;
//!
//! // Token 0 is the program invocation and is skipped.
//! let diagnostics = params.parse(["sum", "--values", "1", "2"]);
//! assert!(diagnostics.is_empty());
//!
//! if params.is_defined("help")? {
//!     println!("{}", params.help());
//! }
//!
//! let a: i64 = params.numeric_value("values", 1)?;
//! let b: i64 = params.numeric_value("values", 2)?;
//! assert_eq!(a + b, 3);
//! assert_eq!(params.choice_value("mode")?, "fast");
//! # Ok(()) }
//! ```
//!
//! # Errors and diagnostics
//!
//! Mistakes in the calling program's own setup (duplicate names, unknown
//! names, out-of-range slots, type-mismatched accessors) surface as
//! [`Error`] results carrying a structured [`ErrorKind`]. Problems with
//! the command line itself are expected and recoverable: [`parse`]
//! collects them as [`Diagnostic`]s and keeps scanning, so the registry
//! always ends up in a usable, best-effort state.
//!
//! [`parse`]: Parameters::parse
//! [clap]: https://docs.rs/clap

#![deny(missing_docs)]

use std::error;
use std::fmt;

mod help;
mod messages;
mod parser;
mod registry;
mod wrap;

pub use self::help::HelpMenu;
pub use self::messages::Lang;
pub use self::parser::Diagnostic;
pub use self::registry::{
    Config, Numeric, ParamDef, ParamValue, Parameters, ValueKind, ValueStore,
};
pub use self::wrap::wrap;

/// An error raised by declargs.
///
/// Always a programmer or configuration error; problems found on the
/// command line are [`Diagnostic`]s instead.
#[derive(Debug)]
pub struct Error {
    kind: Box<ErrorKind>,
}

impl Error {
    /// Construct a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind: Box::new(kind),
        }
    }

    /// Access the underlying error kind.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl error::Error for Error {}

/// The kind of an error.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A parameter was declared under a name that already exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use declargs::{Config, ErrorKind, Parameters};
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let mut params = Parameters::new(Config::default());
    /// params.define_flag("help", "Print this menu.")?;
    ///
    /// let error = params.define_flag("help", "Again.").unwrap_err();
    /// assert!(matches!(error.kind(), ErrorKind::DuplicateParameter { .. }));
    /// # Ok(()) }
    /// ```
    #[error("a parameter named \"{name}\" already exists")]
    DuplicateParameter {
        /// The prefixed name that collided.
        name: String,
    },

    /// A query named a parameter that was never declared.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use declargs::{Config, ErrorKind, Parameters};
    ///
    /// let params = Parameters::new(Config::default());
    /// let error = params.is_defined("missing").unwrap_err();
    /// assert!(matches!(error.kind(), ErrorKind::UnknownParameter { .. }));
    /// ```
    #[error("unknown parameter \"{name}\"")]
    UnknownParameter {
        /// The prefixed name that was looked up.
        name: String,
    },

    /// A query asked for a slot beyond the parameter's arity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use declargs::{Config, ErrorKind, Parameters};
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let mut params = Parameters::new(Config::default());
    /// params.define_values("count", &["n"], vec![0i64], "A count.", false)?;
    ///
    /// let error = params.numeric_value::<i64>("count", 2).unwrap_err();
    /// assert!(matches!(error.kind(), ErrorKind::IndexOutOfRange { .. }));
    /// # Ok(()) }
    /// ```
    #[error("parameter \"{name}\" only has {arity} values, requested value {index}")]
    IndexOutOfRange {
        /// The prefixed parameter name.
        name: String,
        /// How many slots the parameter has.
        arity: usize,
        /// The 1-based slot that was requested.
        index: usize,
    },

    /// A typed accessor was used on a parameter of an incompatible kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use declargs::{Config, ErrorKind, Parameters};
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let mut params = Parameters::new(Config::default());
    /// params.define_values("name", &["who"], vec![String::from("world")], "A name.", false)?;
    ///
    /// let error = params.numeric_value::<i64>("name", 1).unwrap_err();
    /// assert!(matches!(error.kind(), ErrorKind::UnsupportedType { .. }));
    /// # Ok(()) }
    /// ```
    #[error("values of parameter \"{name}\" have kind {kind}, which this accessor does not support")]
    UnsupportedType {
        /// The prefixed parameter name.
        name: String,
        /// The kind the parameter actually holds.
        kind: ValueKind,
    },

    /// A choice parameter's default label is missing from its table.
    #[error("default choice \"{label}\" is not declared for parameter \"{name}\"")]
    UnknownChoice {
        /// The prefixed parameter name.
        name: String,
        /// The label that is not in the table.
        label: String,
    },

    /// A parameter declared a different number of slot names and default
    /// values.
    #[error("parameter \"{name}\" declares {slots} value names but {defaults} default values")]
    ArityMismatch {
        /// The prefixed parameter name.
        name: String,
        /// How many slot names were declared.
        slots: usize,
        /// How many default values were supplied.
        defaults: usize,
    },
}
