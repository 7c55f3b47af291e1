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

#[macro_use]
extern crate serde;
#[macro_use]
extern crate thiserror;
#[macro_use]
extern crate getset;
#[macro_use]
extern crate tracing;
#[macro_use]
extern crate serde_json;
#[macro_use]
extern crate async_trait;

use crate::config::Config;
use crate::database::file::FileStore;
use crate::prelude::*;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod config;
mod database;
mod error;
mod routes;
mod state;
#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let store = FileStore::open(config.data_dir()).await?;
    let state = ApplicationState::new(store);

    let (sender, receiver) = kanal::unbounded_async::<()>();
    let addr = config.address();

    let server = axum::Server::try_bind(&addr)?
        .serve(routes::router(state).into_make_service())
        .with_graceful_shutdown(async move {
            receiver.recv().await.ok();
        });
    info!("Listening on {addr}");
    let server = tokio::spawn(server);

    match tokio::signal::ctrl_c().await {
        Ok(()) => {}
        Err(error) => error!("Unable to listen for shutdown signal: {}", error),
    }

    info!("Received shutdown signal... Shutting down...");
    sender.send(()).await?;
    server.await??;

    Ok(())
}

pub mod prelude {
    pub use crate::database::{StorageError, TaskStore};
    pub use crate::error::*;
    pub use crate::routes::extractor::Json;
    pub use crate::state::ApplicationState;
    pub use aide::OperationIo;
    pub use axum::extract::FromRequest;
    pub use schemars::JsonSchema;
}
