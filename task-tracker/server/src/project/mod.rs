use crate::entities::projects;

pub mod api;

pub use migration::DEFAULT_PROJECT_ID;

/// A grouping of tasks.
///
/// Projects are only ever created by the schema initializer, which seeds the
/// default project with id [`DEFAULT_PROJECT_ID`].
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub status: Option<String>,
}

impl Project {
    /// Returns true for the project tasks fall back to.
    pub fn is_default(&self) -> bool {
        self.id == DEFAULT_PROJECT_ID
    }
}

impl From<projects::Model> for Project {
    fn from(model: projects::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            start_date: model.start_date,
            status: model.status,
        }
    }
}
