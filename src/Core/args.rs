// Minimal command-line flag parser used by the demo programs.

use std::collections::HashMap;
use std::io;

#[derive(Clone, Debug, PartialEq, Eq)]
enum ArgValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

/// A set of registered flags and the values parsed for them.
///
/// Flags are matched verbatim (`"--capacity"`, `"-v"`, ...). Boolean flags take
/// no value; integer and string flags consume the next argument.
///
/// ```
/// use dmxp_mpsc::Core::args::Args;
///
/// let mut args = Args::new();
/// args.flag("--verbose");
/// args.integer("--capacity", 1024);
/// args.parse(["--capacity", "16"]).unwrap();
///
/// assert_eq!(args.get_integer("--capacity"), Some(16));
/// assert!(!args.get_flag("--verbose"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Args {
    values: HashMap<String, ArgValue>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a boolean flag; it is `false` until seen.
    pub fn flag(&mut self, flag: &str) -> &mut Self {
        self.values.insert(flag.to_owned(), ArgValue::Bool(false));
        self
    }

    /// Register an integer option with its default value.
    pub fn integer(&mut self, flag: &str, default: i64) -> &mut Self {
        self.values.insert(flag.to_owned(), ArgValue::Int(default));
        self
    }

    /// Register a string option with its default value.
    pub fn string(&mut self, flag: &str, default: &str) -> &mut Self {
        self.values
            .insert(flag.to_owned(), ArgValue::Str(default.to_owned()));
        self
    }

    /// Parse `args` (without the program name) against the registered flags.
    ///
    /// # Returns
    /// * `Ok(())` if every argument matched a registered flag
    /// * `Err(io::Error)` of kind `InvalidInput` on the first unknown argument,
    ///   missing value or malformed integer
    pub fn parse<I, S>(&mut self, args: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            let slot = self
                .values
                .get_mut(arg)
                .ok_or_else(|| invalid(format!("Unknown argument: {arg}")))?;

            match slot {
                ArgValue::Bool(set) => *set = true,
                ArgValue::Int(value) => {
                    let raw = args
                        .next()
                        .ok_or_else(|| invalid(format!("No value for flag {arg}")))?;
                    let raw = raw.as_ref();
                    *value = raw.parse().map_err(|_| {
                        invalid(format!(
                            "Value for flag {arg} is invalid. Expected integer, found {raw}"
                        ))
                    })?;
                }
                ArgValue::Str(value) => {
                    let raw = args
                        .next()
                        .ok_or_else(|| invalid(format!("No value for flag {arg}")))?;
                    *value = raw.as_ref().to_owned();
                }
            }
        }

        Ok(())
    }

    /// `true` if the boolean flag was passed; `false` if not, or not registered as a flag.
    pub fn get_flag(&self, flag: &str) -> bool {
        matches!(self.values.get(flag), Some(ArgValue::Bool(true)))
    }

    pub fn get_integer(&self, flag: &str) -> Option<i64> {
        match self.values.get(flag) {
            Some(ArgValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_string(&self, flag: &str) -> Option<&str> {
        match self.values.get(flag) {
            Some(ArgValue::Str(value)) => Some(value),
            _ => None,
        }
    }
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}
