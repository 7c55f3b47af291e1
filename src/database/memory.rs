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
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory stand-in for the file store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl MemoryStore {
    pub async fn snapshot(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Task>> {
        Ok(self.snapshot().await)
    }

    async fn save(&self, tasks: &[Task]) -> Result<()> {
        *self.tasks.write().await = tasks.to_vec();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::definitions::task::WriteTask;

    #[tokio::test]
    async fn test_save_replaces_collection() -> Result<()> {
        let store = MemoryStore::default();
        assert!(store.load().await?.is_empty());

        let task = WriteTask {
            title: Some("title".to_owned()),
            priority: Some("low".to_owned()),
            status: Some("open".to_owned()),
            ..Default::default()
        }
        .validate()?;
        store.save(&[task.clone(), task.clone()]).await?;
        assert_eq!(store.load().await?.len(), 2);

        store.save(&[task.clone()]).await?;
        assert_eq!(store.load().await?, vec![task]);

        Ok(())
    }
}
