//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::user_meta;

/// Database row for one user attribute.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = user_meta)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserMetaRow {
    pub user_id: i64,
    pub meta_key: String,
    pub meta_value: String,
    pub updated_at: String,
}
