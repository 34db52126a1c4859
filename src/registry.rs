//! The typed parameter registry.
//!
//! Parameters are declared during a build phase, filled in by a single
//! parse pass and read through typed accessors afterwards. Values of all
//! kinds live behind one [`ValueStore`] sum type, so every dispatch on a
//! parameter's kind is an exhaustive match rather than a runtime type
//! comparison.

use std::collections::HashMap;
use std::fmt;

use crate::messages::Lang;
use crate::{Error, ErrorKind};

/// The prefix prepended to every parameter name at definition time.
const NAME_PREFIX: &str = "--";

/// The closed set of value kinds a parameter's slots can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// No value at all; the parameter is a plain switch.
    Flag,
    /// A signed integer.
    Integer,
    /// A real number.
    Real,
    /// A real number with extended precision.
    ExtendedReal,
    /// Free text.
    Text,
    /// Text restricted to a declared label set.
    Choice,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Flag => "flag",
            ValueKind::Integer => "integer",
            ValueKind::Real => "real",
            ValueKind::ExtendedReal => "extended real",
            ValueKind::Text => "text",
            ValueKind::Choice => "choice",
        };
        f.write_str(name)
    }
}

/// Slot values of a single parameter, tagged by kind.
///
/// A parameter's defaults and current values are both stored this way,
/// always under the same variant and with one element per slot.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueStore {
    /// A flag holds no values.
    Flag,
    /// Integer slots.
    Integer(Vec<i64>),
    /// Real slots.
    Real(Vec<f32>),
    /// Extended-precision real slots.
    ExtendedReal(Vec<f64>),
    /// Text slots.
    Text(Vec<String>),
    /// The single slot of a choice parameter.
    Choice(Vec<String>),
}

impl ValueStore {
    /// The kind tag of this store.
    pub fn kind(&self) -> ValueKind {
        match self {
            ValueStore::Flag => ValueKind::Flag,
            ValueStore::Integer(..) => ValueKind::Integer,
            ValueStore::Real(..) => ValueKind::Real,
            ValueStore::ExtendedReal(..) => ValueKind::ExtendedReal,
            ValueStore::Text(..) => ValueKind::Text,
            ValueStore::Choice(..) => ValueKind::Choice,
        }
    }

    /// Number of slots held.
    pub fn len(&self) -> usize {
        match self {
            ValueStore::Flag => 0,
            ValueStore::Integer(v) => v.len(),
            ValueStore::Real(v) => v.len(),
            ValueStore::ExtendedReal(v) => v.len(),
            ValueStore::Text(v) => v.len(),
            ValueStore::Choice(v) => v.len(),
        }
    }

    /// Whether the store holds no slots.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for String {}
}

/// A native type that can back parameter slots.
///
/// Implemented for `i64` ([`ValueKind::Integer`]), `f32`
/// ([`ValueKind::Real`]), `f64` ([`ValueKind::ExtendedReal`]) and
/// `String` ([`ValueKind::Text`]). The kind of a parameter declared with
/// [`Parameters::define_values`] is inferred from this type. Sealed.
pub trait ParamValue: sealed::Sealed + Sized {
    /// The kind values of this type are stored under.
    const KIND: ValueKind;

    #[doc(hidden)]
    fn store(values: Vec<Self>) -> ValueStore;
}

impl ParamValue for i64 {
    const KIND: ValueKind = ValueKind::Integer;

    fn store(values: Vec<Self>) -> ValueStore {
        ValueStore::Integer(values)
    }
}

impl ParamValue for f32 {
    const KIND: ValueKind = ValueKind::Real;

    fn store(values: Vec<Self>) -> ValueStore {
        ValueStore::Real(values)
    }
}

impl ParamValue for f64 {
    const KIND: ValueKind = ValueKind::ExtendedReal;

    fn store(values: Vec<Self>) -> ValueStore {
        ValueStore::ExtendedReal(values)
    }
}

impl ParamValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn store(values: Vec<Self>) -> ValueStore {
        ValueStore::Text(values)
    }
}

/// A native type numeric slot values can be read back as.
///
/// Reading is uniform over the numeric kinds: an integer slot can be read
/// as `f64` and a real slot as `i64`, converting as needed. Sealed.
pub trait Numeric: sealed::Sealed + Copy {
    #[doc(hidden)]
    fn read(store: &ValueStore, index: usize) -> Option<Self>;
}

impl Numeric for i64 {
    fn read(store: &ValueStore, index: usize) -> Option<Self> {
        match store {
            ValueStore::Integer(v) => v.get(index).copied(),
            ValueStore::Real(v) => v.get(index).map(|x| *x as i64),
            ValueStore::ExtendedReal(v) => v.get(index).map(|x| *x as i64),
            _ => None,
        }
    }
}

impl Numeric for f32 {
    fn read(store: &ValueStore, index: usize) -> Option<Self> {
        match store {
            ValueStore::Integer(v) => v.get(index).map(|x| *x as f32),
            ValueStore::Real(v) => v.get(index).copied(),
            ValueStore::ExtendedReal(v) => v.get(index).map(|x| *x as f32),
            _ => None,
        }
    }
}

impl Numeric for f64 {
    fn read(store: &ValueStore, index: usize) -> Option<Self> {
        match store {
            ValueStore::Integer(v) => v.get(index).map(|x| *x as f64),
            ValueStore::Real(v) => v.get(index).map(|x| *x as f64),
            ValueStore::ExtendedReal(v) => v.get(index).copied(),
            _ => None,
        }
    }
}

/// One declared parameter.
#[derive(Debug, Clone)]
pub struct ParamDef {
    /// Name with the `--` prefix already applied; the registry key.
    pub(crate) name: String,
    /// Description with a trailing space appended at storage time.
    pub(crate) description: String,
    /// Display names of the expected values; the length is the arity.
    pub(crate) slot_names: Vec<String>,
    /// Default slot values.
    pub(crate) defaults: ValueStore,
    /// Current slot values, overwritten by the parse pass.
    pub(crate) values: ValueStore,
    /// Whether the parse pass matched this parameter at least once.
    pub(crate) defined: bool,
    /// Whether the help menu prints the default values.
    pub(crate) show_default: bool,
    /// Label/description pairs, present for choice parameters only.
    pub(crate) choices: Option<Vec<(String, String)>>,
}

impl ParamDef {
    /// The prefixed name, like `--count`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The kind of every slot of this parameter.
    pub fn kind(&self) -> ValueKind {
        self.values.kind()
    }

    /// Number of value slots.
    pub fn arity(&self) -> usize {
        self.slot_names.len()
    }

    /// Display names of the value slots.
    pub fn slot_names(&self) -> &[String] {
        &self.slot_names
    }

    /// The description, as stored (trailing space included).
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Default slot values.
    pub fn defaults(&self) -> &ValueStore {
        &self.defaults
    }

    /// Current slot values.
    pub fn values(&self) -> &ValueStore {
        &self.values
    }

    /// Whether the parse pass matched this parameter.
    pub fn is_defined(&self) -> bool {
        self.defined
    }

    /// Whether the help menu prints the default values.
    pub fn show_default(&self) -> bool {
        self.show_default
    }

    /// The choice table, for choice parameters.
    pub fn choices(&self) -> Option<&[(String, String)]> {
        self.choices.as_deref()
    }
}

/// Rendering configuration.
///
/// Every field affects only help-menu layout and message language, never
/// how the command line is parsed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Width the help menu must fit in.
    pub terminal_width: usize,
    /// Minimum spacing between the longest use string and a description
    /// printed on the same line.
    pub column_gap: usize,
    /// Column at which parameter and choice descriptions start.
    pub description_indent: usize,
    /// Indentation of the usage line and of each parameter's use string.
    pub params_indent: usize,
    /// Extra indentation of choice tables, relative to the description
    /// column.
    pub choice_indent: usize,
    /// Language of the rendered menu and of parse diagnostics.
    pub lang: Lang,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            terminal_width: 80,
            column_gap: 2,
            description_indent: 28,
            params_indent: 4,
            choice_indent: 4,
            lang: Lang::En,
        }
    }
}

/// The parameter registry.
///
/// Owns every [`ParamDef`] in insertion order together with the
/// subsection markers, and is the single entry point for declaring,
/// parsing and querying parameters.
///
/// # Examples
///
/// ```rust
/// use declargs::{Config, Parameters};
///
/// # fn main() -> anyhow::Result<()> {
/// let mut params = Parameters::new(Config::default());
/// params.define_values("count", &["n"], vec![0i64], "How many times to run.", true)?;
///
/// params.parse(["prog", "--count", "5"]);
///
/// assert!(params.is_defined("count")?);
/// assert_eq!(params.numeric_value::<i64>("count", 1)?, 5);
/// # Ok(()) }
/// ```
#[derive(Debug, Default)]
pub struct Parameters {
    pub(crate) config: Config,
    pub(crate) description: Option<String>,
    pub(crate) usage: Option<String>,
    /// Parameters in insertion order; the order the menu prints in.
    pub(crate) params: Vec<ParamDef>,
    /// Prefixed name to position in `params`.
    pub(crate) by_name: HashMap<String, usize>,
    /// Subsection titles and the insertion index they precede.
    pub(crate) subsections: Vec<(String, usize)>,
}

impl Parameters {
    /// Create an empty registry with the given rendering configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The rendering configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Set the program description printed at the top of the help menu.
    ///
    /// Leading and trailing whitespace is trimmed; a single trailing
    /// space is kept in storage so the wrap loop always flushes the final
    /// word.
    pub fn set_description(&mut self, description: &str) {
        self.description = Some(normalize(description));
    }

    /// Set the usage line printed under the `USAGE` header.
    pub fn set_usage(&mut self, usage: &str) {
        self.usage = Some(usage.to_owned());
    }

    /// Declare a flag parameter taking no value.
    ///
    /// The name is stored with a `--` prefix prepended; declaring a name
    /// twice fails with [`ErrorKind::DuplicateParameter`] and leaves the
    /// registry unchanged.
    ///
    /// [`ErrorKind::DuplicateParameter`]: crate::ErrorKind::DuplicateParameter
    pub fn define_flag(&mut self, name: &str, description: &str) -> Result<(), Error> {
        self.insert(ParamDef {
            name: prefixed(name),
            description: normalize(description),
            slot_names: Vec::new(),
            defaults: ValueStore::Flag,
            values: ValueStore::Flag,
            defined: false,
            show_default: false,
            choices: None,
        })
    }

    /// Declare a numeric or text parameter.
    ///
    /// The kind is inferred from the native type of `defaults`; the arity
    /// is the number of slot names, which must match the number of
    /// defaults ([`ErrorKind::ArityMismatch`] otherwise).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # fn main() -> anyhow::Result<()> {
    /// let mut params = declargs::Parameters::new(declargs::Config::default());
    /// params.define_values("point", &["x", "y"], vec![0.0f64, 0.0], "A point.", false)?;
    /// assert_eq!(params.lookup("point")?.arity(), 2);
    /// # Ok(()) }
    /// ```
    ///
    /// [`ErrorKind::ArityMismatch`]: crate::ErrorKind::ArityMismatch
    pub fn define_values<T>(
        &mut self,
        name: &str,
        slot_names: &[&str],
        defaults: Vec<T>,
        description: &str,
        show_default: bool,
    ) -> Result<(), Error>
    where
        T: ParamValue,
    {
        let name = prefixed(name);

        // Name collisions outrank every other complaint about the
        // declaration, whichever define_* raised them.
        if self.by_name.contains_key(&name) {
            return Err(Error::new(ErrorKind::DuplicateParameter { name }));
        }

        if slot_names.len() != defaults.len() {
            return Err(Error::new(ErrorKind::ArityMismatch {
                name,
                slots: slot_names.len(),
                defaults: defaults.len(),
            }));
        }

        let defaults = T::store(defaults);

        self.insert(ParamDef {
            name,
            description: normalize(description),
            slot_names: slot_names.iter().map(|s| (*s).to_owned()).collect(),
            values: defaults.clone(),
            defaults,
            defined: false,
            show_default,
            choices: None,
        })
    }

    /// Declare a single-slot parameter whose value belongs to a declared
    /// label set.
    ///
    /// The default label must appear in `choices`
    /// ([`ErrorKind::UnknownChoice`] otherwise). Choice descriptions get
    /// the same trailing-space treatment as parameter descriptions.
    ///
    /// [`ErrorKind::UnknownChoice`]: crate::ErrorKind::UnknownChoice
    pub fn define_choice(
        &mut self,
        name: &str,
        slot_name: &str,
        default_label: &str,
        choices: &[(&str, &str)],
        description: &str,
        show_default: bool,
    ) -> Result<(), Error> {
        let name = prefixed(name);

        if self.by_name.contains_key(&name) {
            return Err(Error::new(ErrorKind::DuplicateParameter { name }));
        }

        if !choices.iter().any(|(label, _)| *label == default_label) {
            return Err(Error::new(ErrorKind::UnknownChoice {
                name,
                label: default_label.to_owned(),
            }));
        }

        let defaults = ValueStore::Choice(vec![default_label.to_owned()]);

        self.insert(ParamDef {
            name,
            description: normalize(description),
            slot_names: vec![slot_name.to_owned()],
            values: defaults.clone(),
            defaults,
            defined: false,
            show_default,
            choices: Some(
                choices
                    .iter()
                    .map(|(label, desc)| ((*label).to_owned(), normalize(desc)))
                    .collect(),
            ),
        })
    }

    /// Record a subsection header to print before the next parameter
    /// declared.
    pub fn insert_subsection(&mut self, title: &str) {
        self.subsections.push((title.to_owned(), self.params.len()));
    }

    /// Look up a parameter by its unprefixed name.
    pub fn lookup(&self, name: &str) -> Result<&ParamDef, Error> {
        let key = prefixed(name);

        match self.by_name.get(&key) {
            Some(&at) => Ok(&self.params[at]),
            None => Err(Error::new(ErrorKind::UnknownParameter { name: key })),
        }
    }

    /// Parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ParamDef> {
        self.params.iter()
    }

    /// Whether the command line mentioned the parameter.
    ///
    /// Note that a parameter counts as defined even when every one of its
    /// value tokens failed to convert; inspect the diagnostics returned
    /// by [`parse`] to tell the two apart.
    ///
    /// [`parse`]: Self::parse
    pub fn is_defined(&self, name: &str) -> Result<bool, Error> {
        Ok(self.lookup(name)?.defined)
    }

    /// The current value of a text or choice slot. Slots are numbered
    /// from 1.
    pub fn text_value(&self, name: &str, slot: usize) -> Result<&str, Error> {
        let def = self.lookup(name)?;
        let at = self.slot_index(def, slot)?;

        match &def.values {
            ValueStore::Text(v) | ValueStore::Choice(v) => Ok(&v[at]),
            other => Err(Error::new(ErrorKind::UnsupportedType {
                name: def.name.clone(),
                kind: other.kind(),
            })),
        }
    }

    /// The current label of a choice parameter.
    pub fn choice_value(&self, name: &str) -> Result<&str, Error> {
        let def = self.lookup(name)?;

        match &def.values {
            ValueStore::Choice(v) => Ok(&v[0]),
            other => Err(Error::new(ErrorKind::UnsupportedType {
                name: def.name.clone(),
                kind: other.kind(),
            })),
        }
    }

    /// The current value of a numeric slot, read uniformly over the
    /// integer and real kinds. Slots are numbered from 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # fn main() -> anyhow::Result<()> {
    /// let mut params = declargs::Parameters::new(declargs::Config::default());
    /// params.define_values("count", &["n"], vec![3i64], "A count.", false)?;
    ///
    /// // An integer slot reads back as any numeric type.
    /// assert_eq!(params.numeric_value::<i64>("count", 1)?, 3);
    /// assert_eq!(params.numeric_value::<f64>("count", 1)?, 3.0);
    /// # Ok(()) }
    /// ```
    pub fn numeric_value<T>(&self, name: &str, slot: usize) -> Result<T, Error>
    where
        T: Numeric,
    {
        let def = self.lookup(name)?;
        let at = self.slot_index(def, slot)?;

        match T::read(&def.values, at) {
            Some(value) => Ok(value),
            None => Err(Error::new(ErrorKind::UnsupportedType {
                name: def.name.clone(),
                kind: def.kind(),
            })),
        }
    }

    fn slot_index(&self, def: &ParamDef, slot: usize) -> Result<usize, Error> {
        if slot == 0 || slot > def.arity() {
            return Err(Error::new(ErrorKind::IndexOutOfRange {
                name: def.name.clone(),
                arity: def.arity(),
                index: slot,
            }));
        }

        Ok(slot - 1)
    }

    fn insert(&mut self, def: ParamDef) -> Result<(), Error> {
        if self.by_name.contains_key(&def.name) {
            return Err(Error::new(ErrorKind::DuplicateParameter { name: def.name }));
        }

        self.by_name.insert(def.name.clone(), self.params.len());
        self.params.push(def);
        Ok(())
    }
}

/// Apply the name prefix once.
fn prefixed(name: &str) -> String {
    format!("{}{}", NAME_PREFIX, name)
}

/// Trim surrounding whitespace and append the single trailing space the
/// wrap loop relies on.
fn normalize(description: &str) -> String {
    let mut out = description.trim().to_owned();
    out.push(' ');
    out
}
