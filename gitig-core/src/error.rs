use std::{io, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for gitig operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("'{path}' does not exist")]
    #[diagnostic(code(gitig::file_not_found))]
    FileNotFound {
        path: PathBuf,
        #[help]
        hint: Option<String>,
    },

    #[error("failed to download template '{name}': {reason}")]
    #[diagnostic(
        code(gitig::network),
        help("check your connection, or use a built-in or local template instead")
    )]
    Network { name: String, reason: String },

    #[error("could not initialize the HTTP client: {reason}")]
    #[diagnostic(code(gitig::http_client))]
    HttpClient { reason: String },

    #[error("permission denied for '{path}'")]
    #[diagnostic(code(gitig::permission_denied))]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("template '{name}' not found")]
    #[diagnostic(
        code(gitig::invalid_template),
        help("run 'gitig list' to see the available templates")
    )]
    InvalidTemplate { name: String },

    #[error("{message}")]
    #[diagnostic(code(gitig::invalid_argument))]
    InvalidArgument { message: String },

    #[error("cache directory '{path}' is unusable")]
    #[diagnostic(
        code(gitig::cache),
        help("run 'gitig cache clear' or set cache_enabled=false in config.conf")
    )]
    Cache {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file")]
    #[diagnostic(
        code(gitig::config),
        help("config entries are key=value lines, e.g. auto_backup=true")
    )]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("i/o error on '{path}'")]
    #[diagnostic(code(gitig::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Classify an I/O failure on `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Box<Self> {
        let path = path.into();
        Box::new(match source.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound { path, hint: None },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied { path, source },
            _ => Error::Io { path, source },
        })
    }

    /// A missing file with a hint on how to create it.
    pub fn not_found(path: impl Into<PathBuf>, hint: impl Into<String>) -> Box<Self> {
        Box::new(Error::FileNotFound {
            path: path.into(),
            hint: Some(hint.into()),
        })
    }

    pub fn invalid_template(name: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidTemplate { name: name.into() })
    }

    pub fn invalid_argument(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidArgument {
            message: message.into(),
        })
    }

    pub fn network(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::Network {
            name: name.into(),
            reason: reason.into(),
        })
    }

    pub fn cache(path: impl Into<PathBuf>, source: io::Error) -> Box<Self> {
        Box::new(Error::Cache {
            path: path.into(),
            source,
        })
    }

    /// Create a config error from a toml error with source context
    pub fn config(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: source.message().to_string(),
        })
    }

    /// Stable numeric code shown alongside errors in verbose mode.
    pub fn code(&self) -> u8 {
        match self {
            Error::FileNotFound { .. } => 1,
            Error::Network { .. } => 2,
            Error::PermissionDenied { .. } => 3,
            Error::InvalidTemplate { .. } => 4,
            Error::HttpClient { .. } => 5,
            Error::InvalidArgument { .. } => 7,
            Error::Cache { .. } => 8,
            Error::Config { .. } => 9,
            Error::Io { .. } => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_classifies_not_found() {
        let err = Error::io("/nope", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(*err, Error::FileNotFound { .. }));
        assert_eq!(err.code(), 1);
    }

    #[test]
    fn test_io_classifies_permission_denied() {
        let err = Error::io(
            "/root/.gitignore",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(*err, Error::PermissionDenied { .. }));
        assert_eq!(err.code(), 3);
    }

    #[test]
    fn test_io_falls_back_to_generic() {
        let err = Error::io("x", io::Error::other("disk on fire"));
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_config_error_carries_span() {
        let src = "auto_backup = yes\n";
        let toml_err = toml::from_str::<toml::Table>(src).unwrap_err();
        let err = Error::config(toml_err, src, "config.conf");
        match *err {
            Error::Config { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::invalid_template("cobol").to_string(),
            "template 'cobol' not found"
        );
        assert_eq!(
            Error::network("Python", "HTTP 404").to_string(),
            "failed to download template 'Python': HTTP 404"
        );
    }
}
