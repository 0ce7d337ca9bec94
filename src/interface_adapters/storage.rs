use crate::domain::{StorageError, TokenStorage};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const TOKEN_KEY: &str = "token";

// Durable local storage backed by a small TOML key/value file.
// Only the `token` key is owned here; other keys are left as found.
#[derive(Clone, Debug)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<toml::Table, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            // Nothing persisted yet.
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(toml::Table::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_table(&self, table: &toml::Table) -> Result<(), StorageError> {
        if let Some(parent) = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string(table)?)?;
        Ok(())
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        let table = self.read_table()?;
        Ok(table
            .get(TOKEN_KEY)
            .and_then(toml::Value::as_str)
            .map(str::to_owned))
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        let mut table = self.read_table()?;
        table.insert(TOKEN_KEY.to_string(), toml::Value::String(token.to_string()));
        self.write_table(&table)
    }

    fn remove(&self) -> Result<(), StorageError> {
        let mut table = self.read_table()?;
        if table.remove(TOKEN_KEY).is_some() {
            self.write_table(&table)?;
        }
        Ok(())
    }
}
