use thiserror::Error;

use crate::TableVersion;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// # Error Categories
///
/// ## Lookup Errors
/// - [`Error::NameNotFound`] - Name is not defined in the active table version
/// - [`Error::CodeNotFound`] - Code is not defined in the active table version
/// - [`Error::UnknownVersion`] - Unrecognized table version tag
///
/// ## Wire Errors
/// - [`Error::Malformed`] - Payload has the wrong shape
/// - [`Error::Json`] - Payload is not valid JSON
///
/// A failed lookup means the caller and the native engine disagree on the table version.
/// It is a programming error, not a condition to retry.
///
/// # Examples
///
/// ```rust
/// use propkeys::{Error, PropertyKeyTable, TableVersion};
///
/// let table = PropertyKeyTable::new(TableVersion::Legacy);
/// match table.code_of("kPropertyParameters") {
///     Ok(code) => println!("code {code}"),
///     Err(Error::NameNotFound { name, version }) => {
///         eprintln!("{name} is not part of the {version} table");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The name is not defined in the given table version.
    ///
    /// Either the name is misspelled, or it belongs to a different version than the one the
    /// lookup was made against (e.g. `kPropertyParameters` against the legacy table).
    #[error("Property '{name}' is not defined in the {version} table")]
    NameNotFound {
        /// The name that was looked up
        name: String,
        /// The table version the lookup was made against
        version: TableVersion,
    },

    /// The code is not defined in the given table version.
    #[error("Property code {code} is not defined in the {version} table")]
    CodeNotFound {
        /// The code that was looked up
        code: u16,
        /// The table version the lookup was made against
        version: TableVersion,
    },

    /// The table version tag could not be recognized.
    #[error("Unknown table version '{0}'")]
    UnknownVersion(String),

    /// A wire payload has the wrong shape.
    ///
    /// The error includes the source location where the malformation was detected for
    /// debugging purposes.
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Error from `serde_json` while reading or writing a wire payload.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::NameNotFound {
            name: "kPropertyParameters".to_string(),
            version: TableVersion::Legacy,
        };
        assert_eq!(
            err.to_string(),
            "Property 'kPropertyParameters' is not defined in the legacy table"
        );

        let err = Error::CodeNotFound {
            code: 200,
            version: TableVersion::Current,
        };
        assert_eq!(
            err.to_string(),
            "Property code 200 is not defined in the current table"
        );
    }

    #[test]
    fn test_malformed_macro() {
        let err = malformed_error!("missing {}", "dirtyProperties");
        match err {
            Error::Malformed { message, file, .. } => {
                assert_eq!(message, "missing dirtyProperties");
                assert!(file.ends_with("error.rs"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
