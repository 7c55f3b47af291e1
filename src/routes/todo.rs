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

use crate::database::definitions::task::{EditTask, Task, WriteTask};
use crate::database::query::TaskQuery;
use crate::prelude::*;
use crate::routes::extractor::Query;
use aide::axum::routing::get_with;
use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::{Path, State};
use axum::http::StatusCode;

pub fn router(state: ApplicationState) -> ApiRouter {
    ApiRouter::new()
        .api_route(
            "/",
            get_with(list_todos, list_todos_docs).post_with(create_todo, create_todo_docs),
        )
        .api_route(
            "/:id",
            get_with(get_todo, get_todo_docs)
                .put_with(update_todo, update_todo_docs)
                .delete_with(delete_todo, delete_todo_docs),
        )
        .with_state(state)
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
pub struct DeleteResponse {
    message: String,
}

#[instrument(skip(state))]
async fn list_todos(
    State(state): State<ApplicationState>,
    Query(query): Query<TaskQuery>,
) -> Result<Json<Vec<Task>>> {
    let tasks = state.store().load().await?;

    Ok(Json(query.execute(tasks)))
}

fn list_todos_docs(transform: TransformOperation) -> TransformOperation {
    transform
        .description("List all todos, optionally filtered by status and priority and sorted by due date or priority")
        .summary("List todos")
        .response::<200, Json<Vec<Task>>>()
        .response_with::<400, Json<ApplicationErrorResponse>, _>(|transform| {
            transform.description("Unreadable query string")
        })
}

#[instrument(skip(state))]
async fn get_todo(
    State(state): State<ApplicationState>,
    Path(id): Path<String>,
) -> Result<Json<Task>> {
    let task = state
        .store()
        .load()
        .await?
        .into_iter()
        .find(|task| task.id() == id.as_str())
        .ok_or(ApplicationError::NotFound)?;

    Ok(Json(task))
}

fn get_todo_docs(transform: TransformOperation) -> TransformOperation {
    transform
        .description("Obtain a single todo by its id")
        .summary("Get a todo")
        .response::<200, Json<Task>>()
        .response_with::<404, Json<ApplicationErrorResponse>, _>(|transform| {
            transform.description("No todo with the given id")
        })
}

#[instrument(skip_all)]
async fn create_todo(
    State(state): State<ApplicationState>,
    Json(data): Json<WriteTask>,
) -> Result<(StatusCode, Json<Task>)> {
    let task = data.validate()?;

    let store = state.store();
    let mut tasks = store.load().await?;
    tasks.push(task.clone());
    store.save(&tasks).await?;
    info!("Created todo {}", task.id());

    Ok((StatusCode::CREATED, Json(task)))
}

fn create_todo_docs(transform: TransformOperation) -> TransformOperation {
    transform
        .description("Create a new todo")
        .summary("Create a todo")
        .response::<201, Json<Task>>()
        .response_with::<400, Json<ApplicationErrorResponse>, _>(|transform| {
            transform.description("Missing title or invalid priority or status")
        })
}

#[instrument(skip(state, data))]
async fn update_todo(
    State(state): State<ApplicationState>,
    Path(id): Path<String>,
    Json(data): Json<EditTask>,
) -> Result<Json<Task>> {
    let store = state.store();
    let mut tasks = store.load().await?;
    let task = tasks
        .iter_mut()
        .find(|task| task.id() == id.as_str())
        .ok_or(ApplicationError::NotFound)?;

    *task = data.apply(task)?;
    let task = task.clone();
    store.save(&tasks).await?;

    Ok(Json(task))
}

fn update_todo_docs(transform: TransformOperation) -> TransformOperation {
    transform
        .description("Update the given fields of a todo, absent fields keep their value")
        .summary("Update a todo")
        .response::<200, Json<Task>>()
        .response_with::<400, Json<ApplicationErrorResponse>, _>(|transform| {
            transform.description("Invalid priority or status")
        })
        .response_with::<404, Json<ApplicationErrorResponse>, _>(|transform| {
            transform.description("No todo with the given id")
        })
}

#[instrument(skip(state))]
async fn delete_todo(
    State(state): State<ApplicationState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let store = state.store();
    let tasks = store.load().await?;
    let count = tasks.len();

    let tasks = tasks
        .into_iter()
        .filter(|task| task.id() != id.as_str())
        .collect::<Vec<_>>();
    if tasks.len() == count {
        return Err(ApplicationError::NotFound);
    }

    store.save(&tasks).await?;
    info!("Deleted todo {id}");

    Ok(Json(DeleteResponse {
        message: "Todo deleted successfully".to_owned(),
    }))
}

fn delete_todo_docs(transform: TransformOperation) -> TransformOperation {
    transform
        .description("Permanently remove a todo")
        .summary("Delete a todo")
        .response::<200, Json<DeleteResponse>>()
        .response_with::<404, Json<ApplicationErrorResponse>, _>(|transform| {
            transform.description("No todo with the given id")
        })
}
