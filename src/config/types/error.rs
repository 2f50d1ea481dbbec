//! Errors raised while loading `wayfinder.toml`.

use super::FieldPath;
use owo_colors::{OwoColorize, Stream};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::utils::plural_count;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed TOML")]
    Syntax(#[from] toml::de::Error),

    #[error("`{}` does not exist", .0.display())]
    Missing(PathBuf),

    // No #[source]: the report already lists every problem
    #[error("{0}")]
    Invalid(ConfigDiagnostics),
}

/// One invalid value, pointing at its key.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    /// Attach a suggestion shown after the message.
    pub fn hint(&mut self, hint: impl Into<String>) -> &mut Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field.as_str();
        write!(
            f,
            "{}: {}",
            field.if_supports_color(Stream::Stderr, |s| s.cyan()),
            self.message
        )?;
        if let Some(hint) = &self.hint {
            write!(
                f,
                " ({} {hint})",
                "try".if_supports_color(Stream::Stderr, |s| s.yellow())
            )?;
        }
        Ok(())
    }
}

/// Problems gathered from every section, so one run reports all of them.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    problems: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a problem with `field`; chain [`ConfigDiagnostic::hint`] to add
    /// a suggestion.
    pub fn report(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
    ) -> &mut ConfigDiagnostic {
        self.problems.push(ConfigDiagnostic {
            field,
            message: message.into(),
            hint: None,
        });
        let last = self.problems.len() - 1;
        &mut self.problems[last]
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn problems(&self) -> &[ConfigDiagnostic] {
        &self.problems
    }

    /// `Err(self)` if anything was reported.
    pub fn into_result(self) -> Result<(), Self> {
        if self.problems.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heading = format!("{} in config", plural_count(self.problems.len(), "problem"));
        write!(f, "{}", heading.if_supports_color(Stream::Stderr, |s| s.red()))?;
        for problem in &self.problems {
            write!(f, "\n  - {problem}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
