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
use std::path::PathBuf;

pub mod definitions;
pub mod file;
pub mod id;
#[cfg(test)]
pub mod memory;
pub mod query;
pub mod timestamp;

/// Durable holder of the whole task collection.
///
/// Every operation works on the full collection: callers `load` everything, mutate the
/// in-memory copy and `save` the result back. There is no locking between a load and the
/// following save, so two concurrent writers race and the last save wins.
#[async_trait]
pub trait TaskStore: Send + Sync + std::fmt::Debug {
    async fn load(&self) -> Result<Vec<Task>>;

    async fn save(&self, tasks: &[Task]) -> Result<()>;
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Unable to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a valid task document: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unable to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unable to serialize tasks: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Writing the task document was interrupted: {0}")]
    Interrupted(#[source] tokio::task::JoinError),
}
