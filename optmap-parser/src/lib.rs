//! This crate implements a schema driven option resolver for command
//! lines.  It's dead simple, dependency free and resolves a whole command
//! line in one call.
//!
//! Unlike step-by-step argument parsers, the recognized options are
//! declared up front on a [`Schema`].  [`parse`] then consumes the raw
//! argument vector and returns every declared alias mapped to its final
//! value, together with the positional arguments that were left over.
//!
//! # Example
//!
//! ```
//! use optmap_parser::{parse, Error, Opt, Schema};
//!
//! fn main() -> Result<(), Error> {
//!     // imagine this is a tar like program
//!     let schema = Schema::new()
//!         .with(Opt::flag().long("--verbose").short("-v"))
//!         .with(Opt::value().long("--file").short("-f"));
//!
//!     let parsed = parse(&schema, ["--verbose", "-f", "archive.tar.gz", "target-dir"])?;
//!
//!     assert_eq!(parsed["--verbose"], true);
//!     assert_eq!(parsed["-v"], true);
//!     assert_eq!(parsed["--file"], "archive.tar.gz");
//!     assert_eq!(parsed.positional(), vec!["target-dir"]);
//!     Ok(())
//! }
//! ```
//!
//! Here is what's happening:
//!
//! * [`Schema::new`] creates an empty schema and [`Schema::with`] appends
//!   one declared option per call.
//! * [`Opt::flag`] declares a presence flag, [`Opt::value`] an option that
//!   takes a value.  [`Opt::long`] and [`Opt::short`] attach the aliases;
//!   both refer to the same option and always resolve to the same value.
//! * [`parse`] walks the argument vector once, left to right, and returns
//!   a [`Parsed`] result holding the resolved option map and the
//!   positional arguments.
//!
//! The argument vector is expected to already exclude the program name;
//! trim it before calling (eg: `std::env::args().skip(1)`).
//!
//! # Behavior
//!
//! Tokens are classified with a fixed priority, the first matching rule
//! wins:
//!
//! 1. A token that is non empty and starts with neither a dash nor
//!    whitespace is a positional argument.
//! 2. A single dash followed by two or more word characters (eg: `-vf`)
//!    is a chain of bundled short options.  It is expanded in place and
//!    each short option is resolved on its own, so `-vf archive.tar.gz`
//!    behaves like `-v -f archive.tar.gz`.  A lone `-x` is not a chain.
//! 3. A token containing `=` is split at the first `=` into the option
//!    name and an explicit value (eg: `--file=archive.tar.gz`).  This
//!    wins over space delimited values.
//! 4. Anything else is an option name.  Flags resolve to `true` without
//!    consuming another token.  Value taking options consume the next
//!    token if it has positional shape; `--file --verbose` will therefore
//!    not swallow `--verbose` as a value.
//!
//! When the same option is given more than once, the last value wins.
//! `--` receives no special treatment: it is an option name like any
//! other and fails resolution unless declared.
//!
//! # Defaults
//!
//! Every alias declared in the schema is present in the resolved map.
//! Options the command line never set resolve to `false` for flags, to
//! the empty string for value taking options, or to the value declared
//! with [`Opt::default_value`].  A value taking option whose value is
//! missing (end of the command line, or the next token is an option)
//! keeps its default rather than failing.
//!
//! # Limitations and Error Handling
//!
//! The resolver is deliberately permissive.  The only error it reports is
//! an option shaped token that matches no declared alias; missing values
//! fall back to defaults silently.  Option values are plain strings, and
//! validating or converting them is the caller's job.  When [`parse`]
//! fails, no partial result is returned.
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::ops::Index;

pub struct Error {
    repr: Box<ErrorRepr>,
}

impl Error {
    fn new(kind: ErrorKind) -> Error {
        Error {
            repr: Box::new(ErrorRepr { kind, token: None }),
        }
    }

    fn with_token(mut self, token: impl Into<String>) -> Error {
        self.repr.token = Some(token.into());
        self
    }

    /// Returns the kind of the error.
    pub fn kind(&self) -> ErrorKind {
        self.repr.kind
    }

    /// Returns the token that caused the error.
    ///
    /// For equals delimited tokens this is only the name portion
    /// (eg: `--bogus` for `--bogus=42`).
    pub fn token(&self) -> Option<&str> {
        self.repr.token.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind(), self.token()) {
            (ErrorKind::UnrecognizedOption, Some(token)) => {
                write!(f, "unrecognized option '{}'", token)
            }
            (ErrorKind::UnrecognizedOption, None) => write!(f, "unrecognized option"),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.kind())
            .field("token", &self.token())
            .finish()
    }
}

impl std::error::Error for Error {}

struct ErrorRepr {
    kind: ErrorKind,
    token: Option<String>,
}

/// Represents a resolution error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Emitted when an option shaped token matches no declared alias.
    UnrecognizedOption,
}

/// A resolved option value.
///
/// Values are either booleans (flags) or strings (value taking options).
/// Defaults declared with [`Opt::default_value`] use the same type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A boolean, as produced by flag style options.
    Bool(bool),
    /// A string, as produced by value taking options.
    Str(String),
}

impl Value {
    /// Returns the boolean content, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            Value::Str(_) => None,
        }
    }

    /// Returns the string content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Bool(_) => None,
            Value::Str(value) => Some(value),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Value {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Value {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Value {
        Value::Str(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(value) => value.fmt(f),
            Value::Str(value) => value.fmt(f),
        }
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

/// A single declared option.
///
/// An option is declared as either a presence flag ([`Opt::flag`]) or as
/// value taking ([`Opt::value`]), and is given its aliases with
/// [`long`](Opt::long) and [`short`](Opt::short).  Both aliases name the
/// same option; after resolution they always carry an identical value.
/// At least one alias must be set for the option to be reachable.
#[derive(Debug, Clone)]
pub struct Opt {
    long: Option<String>,
    short: Option<String>,
    flag: bool,
    default: Option<Value>,
}

impl Opt {
    /// Declares an option that takes a value.
    ///
    /// Without a value on the command line (and without a declared
    /// default) it resolves to the empty string.
    pub fn value() -> Opt {
        Opt {
            long: None,
            short: None,
            flag: false,
            default: None,
        }
    }

    /// Declares a flag style option.
    ///
    /// Flags never consume a following token.  Their presence resolves
    /// to `true`, their absence to `false`.
    pub fn flag() -> Opt {
        Opt {
            flag: true,
            ..Opt::value()
        }
    }

    /// Sets the long form alias (eg: `--verbose`).
    pub fn long(mut self, name: impl Into<String>) -> Opt {
        self.long = Some(name.into());
        self
    }

    /// Sets the short form alias (eg: `-v`).
    pub fn short(mut self, name: impl Into<String>) -> Opt {
        self.short = Some(name.into());
        self
    }

    /// Sets the value the option resolves to when the command line does
    /// not provide one.
    pub fn default_value(mut self, value: impl Into<Value>) -> Opt {
        self.default = Some(value.into());
        self
    }
}

/// An ordered collection of declared options.
///
/// A schema is built once and can be handed to [`parse`] any number of
/// times.  Resolution state lives entirely inside the parse call, so a
/// schema can be shared freely, including across threads.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    opts: Vec<Opt>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Schema {
        Schema::default()
    }

    /// Appends a declared option, builder style.
    pub fn with(mut self, opt: Opt) -> Schema {
        self.push(opt);
        self
    }

    /// Appends a declared option.
    pub fn push(&mut self, opt: Opt) {
        self.opts.push(opt);
    }

    /// Builds the alias table for one resolution pass.
    ///
    /// Aliases declared twice resolve to the later declaration.
    fn alias_table(&self) -> HashMap<&str, usize> {
        let mut table = HashMap::new();
        for (ind, opt) in self.opts.iter().enumerate() {
            if let Some(long) = opt.long.as_deref() {
                table.insert(long, ind);
            }
            if let Some(short) = opt.short.as_deref() {
                table.insert(short, ind);
            }
        }
        table
    }
}

/// The result of a resolution pass.
///
/// Holds the resolved option map and the leftover positional arguments.
/// Every alias declared in the schema is present in the map, whether or
/// not it appeared on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    options: HashMap<String, Value>,
    positional: Vec<String>,
}

impl Parsed {
    /// Looks up the resolved value for an alias.
    ///
    /// The long and the short form of an option resolve to the same
    /// value.  Returns `None` for aliases the schema never declared.
    pub fn get(&self, alias: &str) -> Option<&Value> {
        self.options.get(alias)
    }

    /// Returns the full resolved option map, keyed by alias.
    pub fn options(&self) -> &HashMap<String, Value> {
        &self.options
    }

    /// Returns the positional arguments in encounter order.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }
}

impl Index<&str> for Parsed {
    type Output = Value;

    fn index(&self, alias: &str) -> &Value {
        self.get(alias)
            .unwrap_or_else(|| panic!("alias '{}' was not declared in the schema", alias))
    }
}

/// Resolution slot for one declared option.
///
/// Explicit values always win over defaults; the distinction only exists
/// so that an option whose value turned out to be missing can fall back
/// to its declared default at finalization.
enum Binding {
    Unset,
    Default(Value),
    Explicit(Value),
}

/// Resolves a command line against a schema.
///
/// The argument vector is consumed in a single left to right pass; see
/// the crate documentation for the classification rules.  Fails with
/// [`ErrorKind::UnrecognizedOption`] when an option shaped token matches
/// no declared alias, in which case no partial result is returned.
pub fn parse<I, S>(schema: &Schema, argv: I) -> Result<Parsed, Error>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let table = schema.alias_table();
    let mut bindings: Vec<Binding> = schema
        .opts
        .iter()
        .map(|opt| match &opt.default {
            Some(value) => Binding::Default(value.clone()),
            None => Binding::Unset,
        })
        .collect();
    let mut positional = Vec::new();
    let mut queue: VecDeque<String> = argv.into_iter().map(Into::into).collect();

    while let Some(token) = queue.pop_front() {
        if is_positional(&token) {
            positional.push(token);
        } else if is_short_chain(&token) {
            // -vf becomes -v -f at the front of the queue, so each
            // bundled short option goes through regular resolution.
            for ch in token[1..].chars().rev() {
                queue.push_front(format!("-{}", ch));
            }
        } else if let Some(ind) = token.find('=') {
            let (name, value) = (&token[..ind], &token[ind + 1..]);
            let opt = lookup(&table, name)?;
            bindings[opt] = Binding::Explicit(Value::Str(value.to_string()));
        } else {
            let opt = lookup(&table, &token)?;
            if schema.opts[opt].flag {
                bindings[opt] = Binding::Explicit(Value::Bool(true));
            } else {
                match queue.pop_front() {
                    Some(next) if is_positional(&next) => {
                        bindings[opt] = Binding::Explicit(Value::Str(next));
                    }
                    // The next token is another option: put it back and
                    // leave this option on its prior state.
                    Some(next) => queue.push_front(next),
                    None => {}
                }
            }
        }
    }

    let mut options = HashMap::new();
    for (opt, binding) in schema.opts.iter().zip(bindings) {
        let value = match binding {
            Binding::Explicit(value) | Binding::Default(value) => value,
            Binding::Unset if opt.flag => Value::Bool(false),
            Binding::Unset => Value::Str(String::new()),
        };
        if let Some(long) = &opt.long {
            options.insert(long.clone(), value.clone());
        }
        if let Some(short) = &opt.short {
            options.insert(short.clone(), value);
        }
    }

    Ok(Parsed {
        options,
        positional,
    })
}

fn lookup(table: &HashMap<&str, usize>, name: &str) -> Result<usize, Error> {
    table
        .get(name)
        .copied()
        .ok_or_else(|| Error::new(ErrorKind::UnrecognizedOption).with_token(name))
}

/// A token has positional shape if it is non empty and starts with
/// neither a dash nor whitespace.
fn is_positional(token: &str) -> bool {
    match token.chars().next() {
        Some(ch) => ch != '-' && !ch.is_whitespace(),
        None => false,
    }
}

/// A token is a short option chain if a single dash is followed by two
/// or more word characters (eg: `-vf`).  A lone `-x` is not a chain and
/// goes through regular option resolution instead.
fn is_short_chain(token: &str) -> bool {
    let rest = match token.strip_prefix('-') {
        Some(rest) => rest,
        None => return false,
    };
    rest.len() >= 2 && rest.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
