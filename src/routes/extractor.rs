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
use axum::extract::rejection::QueryRejection;
use axum::extract::FromRequestParts;
use axum::response::IntoResponse;
use axum_jsonschema::JsonSchemaRejection;
use serde::Serialize;

const INVALID_BODY: &str = "Invalid request body";
const INVALID_QUERY: &str = "Invalid query string";

/// Request body checked against the json schema of `T`, rejected with a json error body.
#[derive(FromRequest, OperationIo)]
#[from_request(via(axum_jsonschema::Json), rejection(ApplicationError))]
#[aide(
    input_with = "axum_jsonschema::Json<T>",
    output_with = "axum_jsonschema::Json<T>",
    json_schema
)]
pub struct Json<T>(pub T);

impl<T> IntoResponse for Json<T>
where
    T: Serialize,
{
    fn into_response(self) -> axum::response::Response {
        axum::Json(self.0).into_response()
    }
}

/// Query string parameters, rejected with a json error body like [`Json`].
#[derive(FromRequestParts, OperationIo)]
#[from_request(via(axum::extract::Query), rejection(ApplicationError))]
#[aide(input_with = "axum::extract::Query<T>", json_schema)]
pub struct Query<T>(pub T);

impl From<JsonSchemaRejection> for ApplicationError {
    fn from(rejection: JsonSchemaRejection) -> Self {
        match rejection {
            JsonSchemaRejection::Json(error) => debug!("Rejected body: {}", error),
            JsonSchemaRejection::Serde(error) => debug!("Rejected body: {}", error),
            JsonSchemaRejection::Schema(errors) => {
                debug!("Rejected body: {}", json!({ "schema": errors }))
            }
        }

        Self::BadRequest(INVALID_BODY.to_owned())
    }
}

impl From<QueryRejection> for ApplicationError {
    fn from(rejection: QueryRejection) -> Self {
        debug!("Rejected query: {}", rejection.body_text());

        Self::BadRequest(INVALID_QUERY.to_owned())
    }
}
