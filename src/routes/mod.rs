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

use crate::prelude::*;
use aide::axum::ApiRouter;
use aide::openapi::OpenApi;
use axum::{Extension, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod extractor;
pub mod openapi;
pub mod todo;

/// The complete application: the todo resource, its api documentation and the shared layers.
pub fn router(state: ApplicationState) -> Router {
    let mut api = OpenApi::default();

    ApiRouter::new()
        .nest_api_service("/api/todos", todo::router(state.clone()))
        .nest_api_service("/docs", openapi::router(state))
        .finish_api_with(&mut api, openapi::transform_api)
        .layer(Extension(Arc::new(api)))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new().gzip(true))
        .layer(TraceLayer::new_for_http())
}
