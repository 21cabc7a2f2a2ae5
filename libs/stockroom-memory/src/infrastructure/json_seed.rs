//! JSON seed loader
//!
//! Reads a JSON array of products from disk so a repository can start
//! pre-populated. Loading happens once at startup; nothing is written back.

use std::fs;
use std::path::{Path, PathBuf};

use stockroom_domain::product::Product;
use thiserror::Error;
use tracing::{info, instrument};

/// Errors that can occur while loading seed products
#[derive(Error, Debug)]
pub enum SeedError {
    /// The seed file could not be read
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not a JSON array of products
    #[error("Failed to decode seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load every product listed in the JSON file at `path`
///
/// The file must hold an array of objects with the keys `id`, `name`,
/// `quantity`, `code_value`, `is_published`, `expiration` and `price`.
///
/// # Errors
///
/// - `SeedError::Io` if the file cannot be read
/// - `SeedError::Parse` if the content is not a valid product array
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_products(path: impl AsRef<Path>) -> Result<Vec<Product>, SeedError> {
    let path = path.as_ref();

    let raw = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let products: Vec<Product> = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(count = products.len(), "Loaded seed products");
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_seed(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_products_from_file() {
        let file = write_seed(
            r#"[
                {"id": 1, "name": "Oil - Margarine", "quantity": 439, "code_value": "S82254D",
                 "is_published": true, "expiration": "15/12/2021", "price": 71.42},
                {"id": 2, "name": "Pineapple - Canned, Rings", "quantity": 345, "code_value": "M4637HJ",
                 "is_published": true, "expiration": "20/08/2021", "price": 352.79}
            ]"#,
        );

        let products = load_products(file.path()).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id.get(), 1);
        assert_eq!(products[1].code_value, "M4637HJ");
        assert_eq!(products[1].price, 352.79);
    }

    #[test]
    fn test_empty_array_loads_nothing() {
        let file = write_seed("[]");
        assert!(load_products(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_products(dir.path().join("absent.json")).unwrap_err();

        assert!(matches!(err, SeedError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let file = write_seed(r#"{"not": "an array"}"#);
        let err = load_products(file.path()).unwrap_err();

        assert!(matches!(err, SeedError::Parse { .. }));
    }
}
