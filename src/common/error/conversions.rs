//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from
//! third-party error types to the unified Error type.

use super::types::Error;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.into())
        } else {
            Error::Json(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_maps_to_json() {
        let err = serde_json::from_str::<serde_json::Value>("[{").unwrap_err();
        assert!(matches!(Error::from(err), Error::Json(_)));
    }

    #[test]
    fn test_io_error_maps_to_io() {
        struct Failing;
        impl std::io::Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("boom"))
            }
        }

        let err = serde_json::from_reader::<_, serde_json::Value>(Failing).unwrap_err();
        assert!(matches!(Error::from(err), Error::Io(_)));
    }
}
