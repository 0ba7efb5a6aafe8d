//! Projects and project tasks shown as kanban cards.
//!
//! Stands in for the host's own item storage: it keeps just the fields card
//! decoration needs and implements [`ItemLookup`]. A project's planned
//! duration is the sum of its tasks' planned durations.

use crate::db::db::Db;
use crate::libs::card::{CardFields, CardItem, ItemType};
use crate::libs::lookup::ItemLookup;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

pub(crate) const SCHEMA_PROJECTS: &str = "CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    priority INTEGER NOT NULL DEFAULT 0
)";
pub(crate) const SCHEMA_PROJECT_TASKS: &str = "CREATE TABLE IF NOT EXISTS project_tasks (
    id INTEGER PRIMARY KEY,
    project_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    planned_duration INTEGER NOT NULL DEFAULT 0,
    FOREIGN KEY (project_id) REFERENCES projects(id) ON DELETE CASCADE
)";
pub(crate) const INDEX_TASKS_PROJECT: &str = "CREATE INDEX IF NOT EXISTS idx_project_tasks_project_id ON project_tasks(project_id)";
const INSERT_PROJECT: &str = "INSERT INTO projects (name, priority) VALUES (?1, ?2)";
const INSERT_TASK: &str = "INSERT INTO project_tasks (project_id, name, planned_duration) VALUES (?1, ?2, ?3)";
const SELECT_PROJECT: &str = "SELECT id, name, priority FROM projects WHERE id = ?1";
const SELECT_PROJECTS: &str = "
    SELECT p.id, p.name, p.priority, COUNT(t.id), COALESCE(SUM(t.planned_duration), 0)
    FROM projects p
    LEFT JOIN project_tasks t ON t.project_id = p.id
    GROUP BY p.id
    ORDER BY p.id
";
const SELECT_TASK_DURATION: &str = "SELECT planned_duration FROM project_tasks WHERE id = ?1";
const SUM_PROJECT_DURATION: &str = "SELECT COALESCE(SUM(planned_duration), 0) FROM project_tasks WHERE project_id = ?1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<i64>,
    pub name: String,
    pub priority: i32,
}

impl Project {
    pub fn new(name: &str, priority: i32) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            priority,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTask {
    pub id: Option<i64>,
    pub project_id: i64,
    pub name: String,
    pub planned_duration: i64,
}

impl ProjectTask {
    pub fn new(project_id: i64, name: &str, planned_duration: i64) -> Self {
        Self {
            id: None,
            project_id,
            name: name.to_string(),
            planned_duration,
        }
    }
}

/// A project with its task count and total planned duration, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub project: Project,
    pub task_count: i64,
    pub planned_duration: i64,
}

pub struct Items {
    conn: Connection,
}

impl Items {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Self::with_connection(db.conn)
    }

    pub fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute(SCHEMA_PROJECTS, [])?;
        conn.execute(SCHEMA_PROJECT_TASKS, [])?;
        Ok(Self { conn })
    }

    pub fn insert_project(&mut self, project: &Project) -> Result<i64> {
        self.conn.execute(INSERT_PROJECT, params![project.name, project.priority])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Adds a task to an existing project.
    pub fn insert_task(&mut self, task: &ProjectTask) -> Result<i64> {
        if self.get_project(task.project_id)?.is_none() {
            return Err(msg_error_anyhow!(Message::ProjectNotFound(task.project_id)));
        }
        self.conn.execute(INSERT_TASK, params![task.project_id, task.name, task.planned_duration])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_project(&mut self, id: i64) -> Result<Option<Project>> {
        self.conn
            .query_row(SELECT_PROJECT, params![id], |row| {
                Ok(Project {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    priority: row.get(2)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    pub fn list_projects(&mut self) -> Result<Vec<ProjectSummary>> {
        let mut stmt = self.conn.prepare(SELECT_PROJECTS)?;
        let summaries = stmt
            .query_map([], |row| {
                Ok(ProjectSummary {
                    project: Project {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        priority: row.get(2)?,
                    },
                    task_count: row.get(3)?,
                    planned_duration: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(summaries)
    }

    /// Total planned duration of a project's tasks, in seconds.
    pub fn project_planned_duration(&mut self, project_id: i64) -> Result<i64> {
        Ok(self.conn.query_row(SUM_PROJECT_DURATION, params![project_id], |row| row.get(0))?)
    }
}

impl ItemLookup for Items {
    fn load(&mut self, item_type: ItemType, item_id: i64) -> Result<Option<CardItem>> {
        let fields = match item_type {
            ItemType::Project => {
                let Some(project) = self.get_project(item_id)? else {
                    return Ok(None);
                };
                CardFields {
                    priority_level: project.priority,
                    priority_color: None,
                    planned_duration_seconds: Some(self.project_planned_duration(item_id)?),
                }
            }
            ItemType::ProjectTask => {
                let duration: Option<i64> = self
                    .conn
                    .query_row(SELECT_TASK_DURATION, params![item_id], |row| row.get(0))
                    .optional()?;
                let Some(duration) = duration else {
                    return Ok(None);
                };
                CardFields {
                    planned_duration_seconds: Some(duration),
                    ..Default::default()
                }
            }
        };

        Ok(Some(CardItem::new(item_type, item_id, fields)))
    }
}
