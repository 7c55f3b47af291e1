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

use crate::database::file::FileStore;
use crate::database::memory::MemoryStore;
use crate::prelude::*;
use axum::BoxError;
use std::net::{SocketAddr, TcpListener};
use std::path::Path;
use std::result::Result;

/// Serves the full router on a random local port.
pub struct TestSuite {
    client: reqwest::Client,
    address: SocketAddr,
    state: ApplicationState,
}

impl TestSuite {
    pub async fn init() -> Result<Self, BoxError> {
        Self::serve(ApplicationState::new(MemoryStore::default()))
    }

    pub async fn with_file_store(directory: &Path) -> Result<Self, BoxError> {
        let store = FileStore::open(directory).await?;

        Self::serve(ApplicationState::new(store))
    }

    fn serve(state: ApplicationState) -> Result<Self, BoxError> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let address = listener.local_addr()?;
        let server = axum::Server::from_tcp(listener)?
            .serve(crate::routes::router(state.clone()).into_make_service());
        tokio::spawn(server);

        Ok(Self {
            client: reqwest::Client::new(),
            address,
            state,
        })
    }

    pub fn store(&self) -> &dyn TaskStore {
        self.state.store()
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.address, path)
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(self.url(path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.post(self.url(path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.put(self.url(path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.delete(self.url(path))
    }
}

pub mod prelude {
    pub use crate::tests::TestSuite;
    pub use axum::BoxError;
}
