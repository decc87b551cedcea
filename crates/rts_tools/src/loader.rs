//! Data loading for designer RON files.
//!
//! Loads catalog fragments from disk, merges them, and validates the
//! result. All validation happens at load time.

use std::path::{Path, PathBuf};

use rts_core::data::DataCatalog;
use rts_core::error::DataError;
use thiserror::Error;

/// Errors that can occur during data loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse RON file.
    #[error("Failed to parse RON file '{path}': {source}")]
    ParseError {
        /// Path to the file.
        path: String,
        /// Underlying parse error.
        #[source]
        source: ron::error::SpannedError,
    },

    /// Two files define conflicting records.
    #[error("Failed to merge '{path}': {source}")]
    MergeError {
        /// File whose records conflicted.
        path: String,
        /// Underlying catalog error.
        #[source]
        source: DataError,
    },

    /// Catalog validation failed.
    #[error("Validation failed for '{path}': {source}")]
    ValidationError {
        /// File or directory that failed validation.
        path: String,
        /// [`DataError::ValidationFailed`] with the list of problems.
        #[source]
        source: DataError,
    },

    /// Data path does not exist.
    #[error("Data path not found: '{0}'")]
    NotFound(String),
}

/// Result type for data loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Parse a catalog from RON text without validating it.
///
/// # Errors
///
/// Returns an error if the text cannot be parsed.
pub fn load_catalog_from_str(source: &str, origin: &str) -> LoadResult<DataCatalog> {
    ron::from_str(source).map_err(|e| LoadError::ParseError {
        path: origin.to_string(),
        source: e,
    })
}

fn read_catalog(path: &Path) -> LoadResult<DataCatalog> {
    let path_str = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|e| LoadError::IoError {
        path: path_str.clone(),
        source: e,
    })?;
    load_catalog_from_str(&contents, &path_str)
}

fn check(catalog: DataCatalog, path: &Path) -> LoadResult<DataCatalog> {
    catalog
        .ensure_valid()
        .map_err(|source| LoadError::ValidationError {
            path: path.display().to_string(),
            source,
        })?;
    Ok(catalog)
}

/// Load and validate a catalog from a single RON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
pub fn load_catalog_from_file(path: &Path) -> LoadResult<DataCatalog> {
    let catalog = check(read_catalog(path)?, path)?;

    tracing::info!(
        "Loaded '{}' with {} units, {} weapons, {} buildings",
        path.display(),
        catalog.units.len(),
        catalog.weapons.len(),
        catalog.buildings.len()
    );

    Ok(catalog)
}

/// List the `.ron` files in a directory, sorted by file name.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn data_files(dir: &Path) -> LoadResult<Vec<PathBuf>> {
    let io_err = |e| LoadError::IoError {
        path: dir.display().to_string(),
        source: e,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "ron") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load all catalog fragments from a directory.
///
/// Every `.ron` file is parsed, fragments are merged in file-name order,
/// and the merged catalog is validated as a whole so records may
/// reference IDs defined in sibling files.
///
/// # Errors
///
/// Returns an error if any file fails to load, two files conflict, or
/// the merged catalog fails validation.
pub fn load_catalog_from_directory(dir: &Path) -> LoadResult<DataCatalog> {
    let mut catalog = DataCatalog::default();

    if !dir.exists() {
        tracing::warn!("Data directory does not exist: {}", dir.display());
        return Ok(catalog);
    }

    for path in data_files(dir)? {
        let fragment = read_catalog(&path)?;
        tracing::debug!(
            "Read {} records from {}",
            fragment.record_count(),
            path.display()
        );
        catalog.merge(fragment).map_err(|e| LoadError::MergeError {
            path: path.display().to_string(),
            source: e,
        })?;
    }

    let catalog = check(catalog, dir)?;

    tracing::info!(
        "Loaded {} records from {}",
        catalog.record_count(),
        dir.display()
    );

    Ok(catalog)
}
