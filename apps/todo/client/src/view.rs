//! Pure view derivation: filter, sort and render the in-memory task list.
//!
//! Nothing here touches state; the same inputs always render the same text.

use chrono::NaiveDate;
use domain_tasks::{Task, TaskPriority};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::str::FromStr;
use strum::{Display, EnumString};

use crate::error::ClientError;

/// Status part of the filter spec
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

/// Which tasks are visible. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub status: StatusFilter,
    pub priority: Option<TaskPriority>,
    pub category: Option<String>,
}

impl FilterSpec {
    /// Build from the raw selector values, where `"all"` lifts a restriction
    pub fn parse(status: &str, priority: &str, category: &str) -> Result<Self, ClientError> {
        let status = StatusFilter::from_str(status)
            .map_err(|_| ClientError::Validation(format!("Unknown status filter: {}", status)))?;

        let priority = match priority {
            "all" => None,
            other => Some(TaskPriority::from_str(other).map_err(|_| {
                ClientError::Validation(format!("Unknown priority filter: {}", other))
            })?),
        };

        let category = match category {
            "all" => None,
            other => Some(other.to_string()),
        };

        Ok(Self {
            status,
            priority,
            category,
        })
    }

    pub fn matches(&self, task: &Task) -> bool {
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Active => !task.completed,
            StatusFilter::Completed => task.completed,
        };

        status_ok
            && self.priority.is_none_or(|p| task.priority == p)
            && self.category.as_ref().is_none_or(|c| &task.category == c)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum SortKey {
    #[default]
    DateCreated,
    DueDate,
    Priority,
    Title,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    /// Same key flips the direction; a new key starts ascending
    pub fn select(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = match self.direction {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
        } else {
            self.key = key;
            self.direction = SortDirection::Asc;
        }
    }

    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self.key {
            // Missing due dates go last in both directions
            SortKey::DueDate => match (a.due_date, b.due_date) {
                (Some(a), Some(b)) => self.direction.apply(a.cmp(&b)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortKey::Priority => self.direction.apply(a.priority.rank().cmp(&b.priority.rank())),
            SortKey::Title => self
                .direction
                .apply(a.title.to_lowercase().cmp(&b.title.to_lowercase())),
            SortKey::DateCreated => self.direction.apply(a.date_created.cmp(&b.date_created)),
        }
    }
}

/// Filter then stable-sort
pub fn project<'a>(tasks: &'a [Task], filter: &FilterSpec, sort: &SortState) -> Vec<&'a Task> {
    let mut visible: Vec<&Task> = tasks.iter().filter(|task| filter.matches(task)).collect();
    visible.sort_by(|a, b| sort.compare(a, b));
    visible
}

pub const EMPTY_LIST_MESSAGE: &str = "No tasks found";

fn format_date(task: &Task) -> Option<String> {
    task.due_date
        .map(|due| due.date_naive().format("%Y-%m-%d").to_string())
}

fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    !task.completed && task.due_date.is_some_and(|due| due.date_naive() < today)
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One row per task:
///
/// ```text
/// [x] Pay bills | Due: 2025-06-01 (overdue) | high | Home | id: 0192...
/// ```
pub fn render_list(tasks: &[&Task], today: NaiveDate) -> String {
    if tasks.is_empty() {
        return EMPTY_LIST_MESSAGE.to_string();
    }

    tasks
        .iter()
        .map(|task| {
            let mut parts = vec![format!(
                "[{}] {}",
                if task.completed { "x" } else { " " },
                task.title
            )];

            if let Some(due) = format_date(task) {
                if is_overdue(task, today) {
                    parts.push(format!("Due: {} (overdue)", due));
                } else {
                    parts.push(format!("Due: {}", due));
                }
            }

            parts.push(task.priority.to_string());

            if !task.category.is_empty() {
                parts.push(task.category.clone());
            }

            parts.push(format!("id: {}", task.id));
            parts.join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_detail(task: &Task) -> String {
    let description = if task.description.is_empty() {
        "No description provided"
    } else {
        &task.description
    };
    let category = if task.category.is_empty() {
        "Not categorized"
    } else {
        &task.category
    };
    let due = format_date(task).unwrap_or_else(|| "Not set".to_string());
    let (status, toggle) = if task.completed {
        ("Completed", "Mark as Active")
    } else {
        ("Active", "Mark as Completed")
    };

    [
        task.title.clone(),
        format!("Description: {}", description),
        format!("Priority: {}", capitalize(&task.priority.to_string())),
        format!("Category: {}", category),
        format!("Due date: {}", due),
        format!("Status: {}", status),
        format!("[{}]", toggle),
    ]
    .join("\n")
}

/// Category selector line: `Categories: all, Home, Work`
pub fn render_categories(categories: &BTreeSet<String>) -> String {
    let options: Vec<&str> = std::iter::once("all")
        .chain(categories.iter().map(String::as_str))
        .collect();
    format!("Categories: {}", options.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use domain_tasks::TaskInput;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap()
    }

    fn task(id: &str, title: &str) -> Task {
        TaskInput {
            title: title.to_string(),
            ..Default::default()
        }
        .into_task(id.to_string(), at(1))
    }

    fn titles(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn test_sort_toggle_by_title() {
        let tasks = vec![task("1", "Banana"), task("2", "Apple")];
        let filter = FilterSpec::default();
        let mut sort = SortState::default();

        sort.select(SortKey::Title);
        assert_eq!(sort.direction, SortDirection::Asc);
        assert_eq!(titles(&project(&tasks, &filter, &sort)), ["Apple", "Banana"]);

        sort.select(SortKey::Title);
        assert_eq!(sort.direction, SortDirection::Desc);
        assert_eq!(titles(&project(&tasks, &filter, &sort)), ["Banana", "Apple"]);
    }

    #[test]
    fn test_new_key_resets_to_ascending() {
        let mut sort = SortState::default();
        sort.select(SortKey::Priority);
        sort.select(SortKey::Priority);
        assert_eq!(sort.direction, SortDirection::Desc);

        sort.select(SortKey::DueDate);
        assert_eq!(sort.key, SortKey::DueDate);
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_default_sort_is_date_created_ascending() {
        let mut older = task("1", "Older");
        older.date_created = at(1);
        let mut newer = task("2", "Newer");
        newer.date_created = at(2);
        let tasks = vec![newer, older];

        let visible = project(&tasks, &FilterSpec::default(), &SortState::default());
        assert_eq!(titles(&visible), ["Older", "Newer"]);
    }

    #[test]
    fn test_title_sort_is_case_insensitive() {
        let tasks = vec![task("1", "banana"), task("2", "Apple"), task("3", "cherry")];
        let sort = SortState {
            key: SortKey::Title,
            direction: SortDirection::Asc,
        };

        let visible = project(&tasks, &FilterSpec::default(), &sort);
        assert_eq!(titles(&visible), ["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_priority_sort_uses_rank() {
        let mut low = task("1", "Low");
        low.priority = TaskPriority::Low;
        let mut high = task("2", "High");
        high.priority = TaskPriority::High;
        let medium = task("3", "Medium");
        let tasks = vec![high, low, medium];

        let mut sort = SortState::default();
        sort.select(SortKey::Priority);
        assert_eq!(
            titles(&project(&tasks, &FilterSpec::default(), &sort)),
            ["Low", "Medium", "High"]
        );

        sort.select(SortKey::Priority);
        assert_eq!(
            titles(&project(&tasks, &FilterSpec::default(), &sort)),
            ["High", "Medium", "Low"]
        );
    }

    #[test]
    fn test_missing_due_dates_sort_last_both_directions() {
        let mut early = task("1", "Early");
        early.due_date = Some(at(2));
        let mut late = task("2", "Late");
        late.due_date = Some(at(9));
        let undated = task("3", "Undated");
        let tasks = vec![undated, late, early];

        let mut sort = SortState::default();
        sort.select(SortKey::DueDate);
        assert_eq!(
            titles(&project(&tasks, &FilterSpec::default(), &sort)),
            ["Early", "Late", "Undated"]
        );

        sort.select(SortKey::DueDate);
        assert_eq!(
            titles(&project(&tasks, &FilterSpec::default(), &sort)),
            ["Late", "Early", "Undated"]
        );
    }

    #[test]
    fn test_filters_combine() {
        let mut done_work = task("1", "Done work");
        done_work.completed = true;
        done_work.category = "Work".to_string();
        let mut open_work = task("2", "Open work");
        open_work.category = "Work".to_string();
        open_work.priority = TaskPriority::High;
        let mut open_home = task("3", "Open home");
        open_home.category = "Home".to_string();
        let tasks = vec![done_work, open_work, open_home];

        let active_work = FilterSpec::parse("active", "all", "Work").unwrap();
        assert_eq!(
            titles(&project(&tasks, &active_work, &SortState::default())),
            ["Open work"]
        );

        let completed = FilterSpec::parse("completed", "all", "all").unwrap();
        assert_eq!(
            titles(&project(&tasks, &completed, &SortState::default())),
            ["Done work"]
        );

        let high = FilterSpec::parse("all", "high", "all").unwrap();
        assert_eq!(
            titles(&project(&tasks, &high, &SortState::default())),
            ["Open work"]
        );
    }

    #[test]
    fn test_filter_parse_rejects_unknown_values() {
        assert!(FilterSpec::parse("done", "all", "all").is_err());
        assert!(FilterSpec::parse("all", "urgent", "all").is_err());
        assert_eq!(
            FilterSpec::parse("all", "all", "all").unwrap(),
            FilterSpec::default()
        );
    }

    #[test]
    fn test_projection_is_idempotent() {
        let tasks: Vec<Task> = ["b", "a", "c", "a"]
            .iter()
            .enumerate()
            .map(|(i, t)| task(&i.to_string(), t))
            .collect();
        let filter = FilterSpec::default();
        let sort = SortState {
            key: SortKey::Title,
            direction: SortDirection::Desc,
        };

        let first: Vec<&str> = project(&tasks, &filter, &sort)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        let second: Vec<&str> = project(&tasks, &filter, &sort)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(first, second);

        let today = at(5).date_naive();
        assert_eq!(
            render_list(&project(&tasks, &filter, &sort), today),
            render_list(&project(&tasks, &filter, &sort), today)
        );
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_list(&[], at(1).date_naive()), "No tasks found");
    }

    #[test]
    fn test_render_row_marks_overdue_only_when_open() {
        let mut overdue = task("a1", "Pay bills");
        overdue.due_date = Some(at(3));
        overdue.priority = TaskPriority::High;
        overdue.category = "Home".to_string();
        let mut finished = overdue.clone();
        finished.completed = true;

        let today = (at(3) + Duration::days(1)).date_naive();

        assert_eq!(
            render_list(&[&overdue], today),
            "[ ] Pay bills | Due: 2025-03-03 (overdue) | high | Home | id: a1"
        );
        assert_eq!(
            render_list(&[&finished], today),
            "[x] Pay bills | Due: 2025-03-03 | high | Home | id: a1"
        );
    }

    #[test]
    fn test_render_detail_defaults() {
        let detail = render_detail(&task("1", "Bare"));
        assert_eq!(
            detail,
            "Bare\n\
             Description: No description provided\n\
             Priority: Medium\n\
             Category: Not categorized\n\
             Due date: Not set\n\
             Status: Active\n\
             [Mark as Completed]"
        );
    }

    #[test]
    fn test_render_detail_completed() {
        let mut done = task("1", "Pay bills");
        done.completed = true;
        done.description = "Electricity and water".to_string();
        done.due_date = Some(at(3));

        let detail = render_detail(&done);
        assert!(detail.contains("Description: Electricity and water"));
        assert!(detail.contains("Due date: 2025-03-03"));
        assert!(detail.contains("Status: Completed"));
        assert!(detail.ends_with("[Mark as Active]"));
    }

    #[test]
    fn test_render_categories() {
        let categories = BTreeSet::from(["Work".to_string(), "Home".to_string()]);
        assert_eq!(render_categories(&categories), "Categories: all, Home, Work");
    }
}
