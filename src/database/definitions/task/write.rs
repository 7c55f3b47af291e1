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

use super::{Task, TaskPriority, TaskStatus};
use crate::database::id::Id;
use crate::database::timestamp;
use crate::prelude::*;

const TITLE_REQUIRED: &str = "Title is required";
const INVALID_PRIORITY: &str = "Priority must be high, medium, or low";
const INVALID_STATUS: &str = "Status must be open or done";

/// Body of a create request.
#[derive(Deserialize, Debug, Clone, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WriteTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    /// one of `high`, `medium`, `low`
    pub priority: Option<String>,
    /// one of `open`, `done`
    pub status: Option<String>,
}

/// Body of an update request, every field is optional.
#[derive(Deserialize, Debug, Clone, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
}

/// Empty strings count as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

fn parse_priority(value: &str) -> Result<TaskPriority> {
    value
        .parse()
        .map_err(|_| ApplicationError::Validation(INVALID_PRIORITY))
}

fn parse_status(value: &str) -> Result<TaskStatus> {
    value
        .parse()
        .map_err(|_| ApplicationError::Validation(INVALID_STATUS))
}

impl WriteTask {
    /// Check the request and build the new task, assigning its id and creation time.
    pub fn validate(self) -> Result<Task> {
        let title = present(self.title).ok_or(ApplicationError::Validation(TITLE_REQUIRED))?;
        let priority = parse_priority(self.priority.as_deref().unwrap_or_default())?;
        let status = parse_status(self.status.as_deref().unwrap_or_default())?;

        Ok(Task {
            id: Id::generate(),
            title,
            description: self.description.unwrap_or_default(),
            due_date: self.due_date,
            priority,
            status,
            created_at: timestamp::now(),
            updated_at: None,
        })
    }
}

impl EditTask {
    /// Merge the request into `existing`.
    ///
    /// Title, due date, priority and status are only replaced by non-empty values, while a
    /// present description always replaces the old one, even when it is empty.
    pub fn apply(self, existing: &Task) -> Result<Task> {
        let priority = present(self.priority)
            .map(|priority| parse_priority(&priority))
            .transpose()?;
        let status = present(self.status)
            .map(|status| parse_status(&status))
            .transpose()?;

        Ok(Task {
            id: existing.id.clone(),
            title: present(self.title).unwrap_or_else(|| existing.title.clone()),
            description: self
                .description
                .unwrap_or_else(|| existing.description.clone()),
            due_date: present(self.due_date).or_else(|| existing.due_date.clone()),
            priority: priority.unwrap_or(existing.priority),
            status: status.unwrap_or(existing.status),
            created_at: existing.created_at,
            updated_at: Some(timestamp::now()),
        })
    }
}
