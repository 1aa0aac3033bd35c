//! Output format descriptors.
//!
//! A format token names one rollup output flavor. Tokens may carry a
//! qualifier after the first dot: `umd.min` is the `umd` format with
//! minification turned on. The token itself stays the label of the build in
//! the command table, so `umd` and `umd.min` never collide.

/// Formats built when `--bundle` is not given.
pub const DEFAULT_FORMATS: &[&str] = &["esm", "cjs", "umd", "umd.min"];

/// One requested output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatDescriptor {
    token: String,
    name: String,
    minify: bool,
}

impl FormatDescriptor {
    /// Parse a format token such as `esm` or `umd.min`.
    ///
    /// Any non-empty qualifier enables minification; `umd.` is plain `umd`.
    pub fn parse(token: &str) -> Self {
        let (name, minify) = match token.split_once('.') {
            Some((name, qualifier)) => (name, !qualifier.is_empty()),
            None => (token, false),
        };

        Self {
            token: token.to_string(),
            name: name.to_string(),
            minify,
        }
    }

    /// The token as requested, used as the command table label.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The base format handed to rollup as `BUILD_FORMAT`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn minify(&self) -> bool {
        self.minify
    }

    /// `NODE_ENV` for this build.
    pub fn node_env(&self) -> &'static str {
        if self.minify {
            "production"
        } else {
            "development"
        }
    }
}

/// Parse a list of format tokens, skipping blank ones.
pub fn parse_formats<I, S>(tokens: I) -> Vec<FormatDescriptor>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|t| t.as_ref().trim().to_string())
        .filter(|t| !t.is_empty())
        .map(|t| FormatDescriptor::parse(&t))
        .collect()
}
