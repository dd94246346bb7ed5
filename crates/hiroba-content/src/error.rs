//! Error types for content loading.

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;

/// A game document that cannot be part of the catalog.
#[derive(Debug, Error, Diagnostic)]
pub enum ContentError {
    /// A file or directory could not be read.
    #[error("cannot read {}: {source}", path.display())]
    #[diagnostic(code(hiroba::content::io))]
    Io {
        /// The path being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document does not start with a `+++` front matter block.
    #[error("{record}: missing front matter")]
    #[diagnostic(
        code(hiroba::content::front_matter),
        help("start the file with a `+++` line and close the TOML block with another `+++` line")
    )]
    MissingFrontMatter {
        /// Slug of the offending document.
        record: String,
    },

    /// The front matter is not valid TOML.
    #[error("{record}: invalid front matter: {message}")]
    #[diagnostic(code(hiroba::content::parse))]
    Parse {
        /// Slug of the offending document.
        record: String,
        /// The parser's description of the problem.
        message: String,
        /// The front matter text.
        #[source_code]
        src: NamedSource<String>,
        /// Where the parser gave up.
        #[label("here")]
        span: Option<SourceSpan>,
    },

    /// A `.md` file whose name cannot be used as a slug.
    #[error("{}: file name is not valid UTF-8", path.display())]
    #[diagnostic(code(hiroba::content::file_name))]
    InvalidFileName {
        /// The offending file.
        path: PathBuf,
    },

    /// A field parsed but breaks a schema rule.
    #[error("{record}: field `{field}` {reason}")]
    #[diagnostic(code(hiroba::content::invalid_field))]
    InvalidField {
        /// Slug of the offending document.
        record: String,
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl ContentError {
    /// Slug of the document that failed, if the error concerns one.
    pub fn record(&self) -> Option<&str> {
        match self {
            Self::Io { .. } | Self::InvalidFileName { .. } => None,
            Self::MissingFrontMatter { record }
            | Self::Parse { record, .. }
            | Self::InvalidField { record, .. } => Some(record),
        }
    }
}
