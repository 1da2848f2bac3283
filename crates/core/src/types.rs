/// All primary keys are PostgreSQL UUIDs generated with `gen_random_uuid()`.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
