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

use crate::database::id::Id;
use crate::database::timestamp;
use crate::prelude::*;
use std::result::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use strum::{AsRefStr, Display, EnumString};

mod write;

pub use write::{EditTask, WriteTask};

#[derive(
    Deserialize,
    Serialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    JsonSchema,
    AsRefStr,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl TaskPriority {
    /// Sort rank, high comes first.
    pub fn rank(&self) -> u8 {
        match self {
            TaskPriority::High => 1,
            TaskPriority::Medium => 2,
            TaskPriority::Low => 3,
        }
    }
}

#[derive(
    Deserialize,
    Serialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    JsonSchema,
    AsRefStr,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskStatus {
    Open,
    Done,
}

#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq, Getters)]
#[serde(rename_all = "camelCase")]
#[get = "pub"]
pub struct Task {
    id: Id,
    title: String,
    #[serde(default)]
    description: String,
    /// kept exactly as submitted by the client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<String>,
    priority: TaskPriority,
    status: TaskStatus,
    #[serde(with = "timestamp")]
    #[schemars(with = "DateTime<Utc>")]
    created_at: DateTime<Utc>,
    /// unset until the first update
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    #[schemars(with = "Option<DateTime<Utc>>")]
    updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// The due date as a point in time, if it is set and readable.
    ///
    /// Accepts RFC 3339 timestamps as well as plain `YYYY-MM-DD` dates and naive date times,
    /// both read as UTC.
    pub fn due(&self) -> Option<DateTime<Utc>> {
        let value = self.due_date.as_deref()?.trim();

        if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
            return Some(datetime.with_timezone(&Utc));
        }
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(datetime.and_utc());
        }
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
            return Some(datetime.and_utc());
        }

        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|datetime| datetime.and_utc())
    }
}
