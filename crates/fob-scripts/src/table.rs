//! Structured commands and ordered command tables.
//!
//! A [`CommandSpec`] keeps the executable, its arguments and its environment
//! apart until the very last moment: [`CommandSpec::to_shell`] renders it
//! into a single shell-quoted string for the parallel runner, which is the
//! only place where quoting happens.
//!
//! A [`CommandTable`] maps a human-readable label (`esm`, `preact.umd.min`,
//! `lint`) to a command. Labels are unique and keep insertion order, which is
//! the order the runner displays them in.

use indexmap::IndexMap;
use std::fmt;

use crate::error::TableError;

/// A program invocation with its arguments and extra environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    env: IndexMap<String, String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: IndexMap::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set an environment variable. Setting the same name twice keeps the
    /// original position with the newer value.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn envs<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in vars {
            self.env.insert(key.into(), value.into());
        }
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn get_env(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }

    pub fn env_vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.env.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The command as individual words.
    ///
    /// When environment variables are set, the command is prefixed with
    /// `env_setter` followed by `KEY=value` words (`cross-env` style), so the
    /// assignments work in every shell the runner may use.
    pub fn to_words(&self, env_setter: &str) -> Vec<String> {
        let mut words = Vec::with_capacity(self.env.len() + self.args.len() + 2);
        if !self.env.is_empty() {
            words.push(env_setter.to_string());
            words.extend(self.env.iter().map(|(k, v)| format!("{k}={v}")));
        }
        words.push(self.program.clone());
        words.extend(self.args.iter().cloned());
        words
    }

    /// Render as one shell-quoted command line.
    pub fn to_shell(&self, env_setter: &str) -> String {
        shell_words::join(self.to_words(env_setter))
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let env = self
            .env
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .chain(std::iter::once(self.program.clone()))
            .chain(self.args.iter().cloned());
        write!(f, "{}", shell_words::join(env))
    }
}

/// Ordered, label-unique collection of commands to run side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandTable {
    entries: IndexMap<String, CommandSpec>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateKey`] if `key` is already present.
    pub fn insert(&mut self, key: impl Into<String>, spec: CommandSpec) -> Result<(), TableError> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return Err(TableError::DuplicateKey(key));
        }
        self.entries.insert(key, spec);
        Ok(())
    }

    /// Return a table with every label prefixed by `prefix`.
    pub fn prefixed(self, prefix: &str) -> Self {
        Self {
            entries: self
                .entries
                .into_iter()
                .map(|(key, spec)| (format!("{prefix}{key}"), spec))
                .collect(),
        }
    }

    /// Append `other` after `self`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateKey`] for the first label present in
    /// both tables.
    pub fn merge(mut self, other: CommandTable) -> Result<Self, TableError> {
        for (key, spec) in other.entries {
            self.insert(key, spec)?;
        }
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&CommandSpec> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CommandSpec)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
