//! The command-line scan.
//!
//! A single forward pass over the token sequence fills the registry
//! in place. Problems with the command line are expected, recoverable
//! conditions: each one becomes a [`Diagnostic`] and the scan carries on,
//! so a best-effort partial parse always completes.

use crate::messages::{self, Lang};
use crate::registry::{ParamDef, Parameters, ValueKind, ValueStore};

/// One problem found on the command line.
///
/// Diagnostics are advisory: they never stop the scan, and the registry
/// keeps whatever values it had for the slots involved.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A token matched no declared parameter name.
    UnknownParameter {
        /// The offending token.
        token: String,
    },
    /// The tokens ran out before a parameter received all its values.
    MissingValues {
        /// The prefixed parameter name.
        name: String,
        /// How many values the parameter expects.
        expected: usize,
    },
    /// A value token failed to convert to the parameter's kind.
    InvalidValue {
        /// The prefixed parameter name.
        name: String,
        /// The 1-based slot the token was meant for.
        slot: usize,
        /// The offending token.
        token: String,
        /// The kind the token failed to convert to.
        kind: ValueKind,
    },
}

impl Diagnostic {
    /// Render the diagnostic as a human-readable line in the given
    /// language.
    pub fn message(&self, lang: Lang) -> String {
        match self {
            Diagnostic::UnknownParameter { token } => messages::unknown_parameter(lang, token),
            Diagnostic::MissingValues { name, expected } => {
                messages::missing_values(lang, name, *expected)
            }
            Diagnostic::InvalidValue {
                name, token, kind, ..
            } => messages::invalid_value(lang, name, token, *kind),
        }
    }
}

impl Parameters {
    /// Parse a token sequence into the registry.
    ///
    /// The first token is the program invocation and is skipped. Each
    /// remaining token is read as a candidate parameter name: a match
    /// consumes up to arity following tokens as values, anything else is
    /// reported and skipped. The scan never backtracks and never aborts;
    /// all problems come back as [`Diagnostic`]s.
    ///
    /// A matched parameter is marked defined even when some of its value
    /// tokens were rejected; the rejected slots keep their previous
    /// values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # fn main() -> anyhow::Result<()> {
    /// let mut params = declargs::Parameters::new(declargs::Config::default());
    /// params.define_flag("verbose", "Say more.")?;
    /// params.define_values("count", &["n"], vec![0i64], "A count.", false)?;
    ///
    /// let diagnostics = params.parse(["prog", "--verbose", "--count", "5"]);
    ///
    /// assert!(diagnostics.is_empty());
    /// assert!(params.is_defined("verbose")?);
    /// assert_eq!(params.numeric_value::<i64>("count", 1)?, 5);
    /// # Ok(()) }
    /// ```
    pub fn parse<I>(&mut self, tokens: I) -> Vec<Diagnostic>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut diagnostics = Vec::new();
        let mut it = tokens.into_iter();

        // Token 0 is the program invocation.
        it.next();

        while let Some(token) = it.next() {
            let token = token.as_ref();

            let at = match self.by_name.get(token) {
                Some(&at) => at,
                None => {
                    diagnostics.push(Diagnostic::UnknownParameter {
                        token: token.to_owned(),
                    });
                    continue;
                }
            };

            let def = &mut self.params[at];

            for slot in 0..def.arity() {
                let value = match it.next() {
                    Some(value) => value,
                    None => {
                        diagnostics.push(Diagnostic::MissingValues {
                            name: def.name.clone(),
                            expected: def.arity(),
                        });
                        break;
                    }
                };

                if let Err(kind) = assign(def, slot, value.as_ref()) {
                    diagnostics.push(Diagnostic::InvalidValue {
                        name: def.name.clone(),
                        slot: slot + 1,
                        token: value.as_ref().to_owned(),
                        kind,
                    });
                }
            }

            // Defined regardless of how the slots fared.
            def.defined = true;
        }

        diagnostics
    }

    /// Parse and print every diagnostic to stderr in the configured
    /// language. Returns whether any diagnostic was emitted.
    pub fn parse_and_report<I>(&mut self, tokens: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let lang = self.config.lang;
        let diagnostics = self.parse(tokens);

        for diagnostic in &diagnostics {
            eprintln!("{}", diagnostic.message(lang));
        }

        !diagnostics.is_empty()
    }
}

/// Convert one token and write it into the slot, leaving the slot
/// untouched when conversion fails.
fn assign(def: &mut ParamDef, slot: usize, token: &str) -> Result<(), ValueKind> {
    match &mut def.values {
        ValueStore::Flag => Ok(()),
        ValueStore::Integer(v) => match token.parse() {
            Ok(value) => {
                v[slot] = value;
                Ok(())
            }
            Err(_) => Err(ValueKind::Integer),
        },
        ValueStore::Real(v) => match token.parse() {
            Ok(value) => {
                v[slot] = value;
                Ok(())
            }
            Err(_) => Err(ValueKind::Real),
        },
        ValueStore::ExtendedReal(v) => match token.parse() {
            Ok(value) => {
                v[slot] = value;
                Ok(())
            }
            Err(_) => Err(ValueKind::ExtendedReal),
        },
        ValueStore::Text(v) | ValueStore::Choice(v) => {
            v[slot] = token.to_owned();
            Ok(())
        }
    }
}
