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
use strum::EnumString;

/// Query parameters accepted when listing tasks.
#[derive(Deserialize, JsonSchema, Debug, Clone, Default)]
pub struct TaskQuery {
    /// only return tasks with this status
    pub status: Option<String>,
    /// only return tasks with this priority
    pub priority: Option<String>,
    /// `dueDate` or `priority`
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum SortKey {
    DueDate,
    Priority,
}

/// Equality constraints on a task, absent fields don't constrain anything.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria<'a> {
    pub status: Option<&'a str>,
    pub priority: Option<&'a str>,
}

impl TaskQuery {
    pub fn criteria(&self) -> FilterCriteria<'_> {
        FilterCriteria {
            status: self.status.as_deref().filter(|value| !value.is_empty()),
            priority: self.priority.as_deref().filter(|value| !value.is_empty()),
        }
    }

    /// Unknown sort keys are ignored.
    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort.as_deref().and_then(|key| key.parse().ok())
    }

    #[instrument(skip(tasks), fields(count = tasks.len()))]
    pub fn execute(&self, tasks: Vec<Task>) -> Vec<Task> {
        let mut tasks = filter(tasks, &self.criteria());
        if let Some(key) = self.sort_key() {
            sort(&mut tasks, key);
        }

        tasks
    }
}

/// Keep the tasks matching every given criterion.
///
/// Criteria are compared with the serialized value, so a value outside the enumerations
/// matches nothing.
pub fn filter(tasks: Vec<Task>, criteria: &FilterCriteria<'_>) -> Vec<Task> {
    tasks
        .into_iter()
        .filter(|task| {
            let value: &str = task.status().as_ref();
            criteria.status.map_or(true, |status| value == status)
        })
        .filter(|task| {
            let value: &str = task.priority().as_ref();
            criteria.priority.map_or(true, |priority| value == priority)
        })
        .collect()
}

/// Stable sort. Tasks without a readable due date go last when sorting by due date.
pub fn sort(tasks: &mut [Task], key: SortKey) {
    match key {
        SortKey::DueDate => tasks.sort_by_key(|task| {
            let due = task.due();
            (due.is_none(), due)
        }),
        SortKey::Priority => tasks.sort_by_key(|task| task.priority().rank()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::definitions::task::WriteTask;

    fn task(title: &str, priority: &str, status: &str, due_date: Option<&str>) -> Task {
        WriteTask {
            title: Some(title.to_owned()),
            due_date: due_date.map(str::to_owned),
            priority: Some(priority.to_owned()),
            status: Some(status.to_owned()),
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|task| task.title().as_str()).collect()
    }

    fn fixture() -> Vec<Task> {
        vec![
            task("a", "low", "open", Some("2030-03-01")),
            task("b", "high", "done", None),
            task("c", "medium", "open", Some("2030-01-01")),
            task("d", "high", "open", Some("not a date")),
            task("e", "low", "done", Some("2030-02-01T12:00:00.000Z")),
            task("f", "high", "done", Some("2030-02-01")),
        ]
    }

    #[test]
    fn test_filter_conjunctive() {
        let criteria = FilterCriteria {
            status: Some("done"),
            priority: Some("high"),
        };

        assert_eq!(titles(&filter(fixture(), &criteria)), vec!["b", "f"]);
    }

    #[test]
    fn test_filter_single() {
        let criteria = FilterCriteria {
            status: Some("open"),
            ..Default::default()
        };
        assert_eq!(titles(&filter(fixture(), &criteria)), vec!["a", "c", "d"]);

        let criteria = FilterCriteria {
            priority: Some("low"),
            ..Default::default()
        };
        assert_eq!(titles(&filter(fixture(), &criteria)), vec!["a", "e"]);
    }

    #[test]
    fn test_filter_without_criteria() {
        assert_eq!(filter(fixture(), &FilterCriteria::default()).len(), 6);
    }

    #[test]
    fn test_filter_unknown_value() {
        let criteria = FilterCriteria {
            status: Some("archived"),
            ..Default::default()
        };

        assert!(filter(fixture(), &criteria).is_empty());
    }

    #[test]
    fn test_sort_priority_stable() {
        let mut tasks = fixture();
        sort(&mut tasks, SortKey::Priority);

        assert_eq!(titles(&tasks), vec!["b", "d", "f", "c", "a", "e"]);
    }

    #[test]
    fn test_sort_due_date() {
        let mut tasks = fixture();
        sort(&mut tasks, SortKey::DueDate);

        assert_eq!(titles(&tasks), vec!["c", "f", "e", "a", "b", "d"]);
    }

    #[test]
    fn test_execute() {
        let query = TaskQuery {
            status: Some("open".to_owned()),
            priority: Some(String::new()),
            sort: Some("priority".to_owned()),
        };

        assert_eq!(titles(&query.execute(fixture())), vec!["d", "c", "a"]);
    }

    #[test]
    fn test_unknown_sort_key() {
        let query = TaskQuery {
            sort: Some("title".to_owned()),
            ..Default::default()
        };

        assert_eq!(query.sort_key(), None);
        assert_eq!(
            titles(&query.execute(fixture())),
            vec!["a", "b", "c", "d", "e", "f"]
        );
    }
}
