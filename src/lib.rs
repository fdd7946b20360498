#![warn(clippy::pedantic)]
#![warn(clippy::complexity)]
//! Argsift - a small argument sifter
//!
//! Splits a raw argument vector into flags, keyed values and file
//! paths, then hands them back through typed accessors.
//!
//! No grouping (`-hv`), no `--key=value`, no repeated keys.

use std::{
    collections::HashMap,
    env,
    ffi::OsString,
    fmt::{self, Display},
    str::FromStr,
};

use thiserror::Error;

pub type Result<T, E = ParsingError> = core::result::Result<T, E>;

/// Error type describing the various ways
/// parsing and value retrieval can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    /// The initial iterator was empty.
    #[error("argument vector was empty")]
    Empty,

    /// An argument was not valid UTF-8.
    #[error("attempt to parse invalid utf-8")]
    InvalidString,

    /// A keyed option was the last token, so its value is absent.
    #[error("option '{option}' does not have a value")]
    MissingValue { option: String },

    /// An accessor was asked for a key that was never parsed.
    #[error("'{key}' does not exist in args")]
    KeyNotFound { key: String },

    /// The value under the key spells no boolean.
    #[error("value '{value}' for '{key}' is not a boolean")]
    InvalidBool { key: String, value: String },

    /// A converter rejected the value under the key.
    #[error("value for '{key}' could not be converted: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// A classified argument vector.
///
/// Built once by [`CommandArgs::from_env`] or
/// [`CommandArgs::from_arbitrary`]; plain data afterwards.
///
/// ```
/// use argsift::CommandArgs;
///
/// let args = CommandArgs::from_arbitrary([
///     "prog", "--retries", "3", "notes.txt", "-o", "out.txt", "-v",
/// ])?;
///
/// assert!(args.verbose);
/// assert_eq!(args.infile.as_deref(), Some("notes.txt"));
/// assert_eq!(args.outfile.as_deref(), Some("out.txt"));
/// assert_eq!(args.get_as::<u32>("retries")?, 3);
/// # Ok::<(), argsift::ParsingError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandArgs {
    name: String,

    pub help: bool,
    pub verbose: bool,
    pub infile: Option<String>,
    pub outfile: Option<String>,

    values: HashMap<String, String>,
}

impl CommandArgs {
    /// Classifies the arguments of the current process.
    ///
    /// # Errors
    ///
    /// Same quirks as [`CommandArgs::from_arbitrary`].
    pub fn from_env() -> Result<Self> {
        Self::from_arbitrary(env::args_os())
    }

    /// Classifies an arbitrary argument vector. The first element is
    /// taken as the process name, everything after it is sifted:
    /// exact flag tokens first, then dash-prefixed keys (each eating
    /// the next token as its value), everything else is the infile.
    ///
    /// # Errors
    ///
    /// `Empty` when `args` yields nothing, `InvalidString` when an
    /// element is not valid UTF-8, `MissingValue` when a keyed
    /// option is the final token.
    pub fn from_arbitrary<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut iter = args.into_iter().map(T::into);

        let name = match iter.next() {
            None => return Err(ParsingError::Empty),
            Some(os) => into_utf8(os)?,
        };

        let mut parsed = Self {
            name,
            help: false,
            verbose: false,
            infile: None,
            outfile: None,
            values: HashMap::new(),
        };

        while let Some(os) = iter.next() {
            let arg = into_utf8(os)?;

            match arg.as_str() {
                "--help" | "-h" => parsed.help = true,
                "--verbose" | "-v" => parsed.verbose = true,
                "--quiet" => parsed.verbose = false,

                _ => {
                    if let Some(key) = option_key(&arg) {
                        let key = key.to_owned();

                        // The value is whatever comes next, dashes and all.
                        let value = match iter.next() {
                            None => return Err(ParsingError::MissingValue { option: arg }),
                            Some(os) => into_utf8(os)?,
                        };

                        if key == "o" || key == "output" {
                            parsed.outfile = Some(value);
                        } else {
                            parsed.values.insert(key, value);
                        }
                    } else {
                        parsed.infile = Some(arg);
                    }
                }
            }
        }

        Ok(parsed)
    }

    /// Retrieve the name of the process
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `key` appeared as a keyed option.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Boolean value stored under `key`, in either the alpha
    /// (`true`/`false`) or the numeric (`1`/`0`) spelling.
    ///
    /// # Errors
    ///
    /// `KeyNotFound` when the key is absent, `InvalidBool` when the
    /// value spells neither.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        let raw = self.raw(key)?;

        match raw {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ParsingError::InvalidBool {
                key: key.to_owned(),
                value: raw.to_owned(),
            }),
        }
    }

    /// Runs `convert` over the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// `KeyNotFound` when the key is absent; a converter error comes
    /// back as `InvalidValue` carrying the converter's message.
    pub fn get_with<T, E, F>(&self, key: &str, convert: F) -> Result<T>
    where
        F: FnOnce(&str) -> core::result::Result<T, E>,
        E: Display,
    {
        convert(self.raw(key)?).map_err(|err| ParsingError::InvalidValue {
            key: key.to_owned(),
            reason: err.to_string(),
        })
    }

    /// [`CommandArgs::get_with`] through the type's `FromStr`.
    ///
    /// # Errors
    ///
    /// Same as [`CommandArgs::get_with`].
    pub fn get_as<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.get_with(key, str::parse::<T>)
    }

    /// Read-only view of the catch-all mapping.
    #[must_use]
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// True when nothing beyond the process name was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.help
            && !self.verbose
            && self.infile.is_none()
            && self.outfile.is_none()
            && self.values.is_empty()
    }

    fn raw(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| ParsingError::KeyNotFound {
            key: key.to_owned(),
        })
    }
}

impl Display for CommandArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "No command-line arguments.");
        }

        write!(f, "Command-line arguments are:")?;

        if self.help {
            write!(f, "\n--help")?;
        }
        if self.verbose {
            write!(f, "\n--verbose")?;
        }
        if let Some(infile) = &self.infile {
            write!(f, "\ninfile: {infile}")?;
        }
        if let Some(outfile) = &self.outfile {
            write!(f, "\noutfile: {outfile}")?;
        }

        // Sorted so the rendering is stable; the map itself stays unordered.
        let mut pairs: Vec<_> = self.values.iter().collect();
        pairs.sort();

        for (key, value) in pairs {
            write!(f, "\n{key}: {value}")?;
        }

        Ok(())
    }
}

fn into_utf8(os: OsString) -> Result<String> {
    os.into_string().map_err(|_| ParsingError::InvalidString)
}

// Splits the dash prefix off a keyed option, `--` before `-`.
// Bare tokens, a lone `-` and a lone `--` yield `None`.
fn option_key(arg: &str) -> Option<&str> {
    let key = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'))?;

    (!key.is_empty()).then_some(key)
}
