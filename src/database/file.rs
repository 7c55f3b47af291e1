/*
 *     Copyright (C) 2023  Fritz Ochsmann
 *
 *     This program is free software: you can redistribute it and/or modify
 *     it under the terms of the GNU Affero General Public License as published
 *     by the Free Software Foundation, either version 3 of the License, or
 *     (at your option) any later version.
 *
 *     This program is distributed in the hope that it will be useful,
 *     but WITHOUT ANY WARRANTY; without even the implied warranty of
 *     MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *     GNU Affero General Public License for more details.
 *
 *     You should have received a copy of the GNU Affero General Public License
 *     along with this program.  If not, see <http://www.gnu.org/licenses/>.
 */

use crate::database::definitions::task::Task;
use crate::prelude::*;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const DOCUMENT: &str = "todos.json";

/// Keeps the task collection as a pretty printed json array in `<directory>/todos.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open the store inside the given directory, creating the directory and an empty
    /// document when they don't exist yet.
    #[instrument]
    pub async fn open(directory: &Path) -> Result<Self> {
        tokio::fs::create_dir_all(directory).await?;

        let path = directory.join(DOCUMENT);
        if !tokio::fs::try_exists(&path).await? {
            tokio::fs::write(&path, "[]").await?;
            info!("Created empty {}", path.display());
        }
        info!("Using task document {}", path.display());

        Ok(Self { path })
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Write `content` to a staging file of its own next to `path` and swap it in.
///
/// Readers never see a half written document and concurrent writers never share a staging file.
fn replace_document(path: &Path, content: &[u8]) -> std::result::Result<(), StorageError> {
    let write_error = |source: std::io::Error| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };
    let directory = path
        .parent()
        .filter(|directory| !directory.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut staging = NamedTempFile::new_in(directory).map_err(write_error)?;
    staging.write_all(content).map_err(write_error)?;
    staging
        .persist(path)
        .map_err(|error| write_error(error.error))?;

    Ok(())
}

#[async_trait]
impl TaskStore for FileStore {
    #[instrument(skip_all)]
    async fn load(&self) -> Result<Vec<Task>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StorageError::Read {
                path: self.path.clone(),
                source,
            })?;

        let tasks = serde_json::from_str(&content).map_err(|source| StorageError::Malformed {
            path: self.path.clone(),
            source,
        })?;

        Ok(tasks)
    }

    #[instrument(skip_all, fields(count = tasks.len()))]
    async fn save(&self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string_pretty(tasks).map_err(StorageError::Serialize)?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || replace_document(&path, content.as_bytes()))
            .await
            .map_err(StorageError::Interrupted)??;

        Ok(())
    }
}
