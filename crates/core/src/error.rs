use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("A {entity} named '{name}' already exists")]
    DuplicateName { entity: &'static str, name: String },
}
