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

use crate::database::TaskStore;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ApplicationState {
    store: Arc<dyn TaskStore>,
}

impl ApplicationState {
    pub fn new<S>(store: S) -> Self
    where
        S: TaskStore + 'static,
    {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &dyn TaskStore {
        self.store.as_ref()
    }
}
