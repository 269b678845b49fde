use fg_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated on '{field}' {location}")]
    Conflict {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Identity not found: {id} {location}")]
    NotFound { id: String, location: ErrorLocation },

    #[error("Points for identity {id} cannot go below zero {location}")]
    PointsUnderflow { id: String, location: ErrorLocation },

    #[error("Points for identity {id} would exceed the largest balance {location}")]
    PointsOverflow { id: String, location: ErrorLocation },

    #[error("Corrupt identity row: {message} {location}")]
    Corrupt {
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match unique_violation_field(&source) {
            Some(field) => Self::Conflict { field, location },
            None => Self::Sqlx { source, location },
        }
    }
}

/// Name the identity column a unique-constraint failure refers to.
///
/// SQLite reports these as `UNIQUE constraint failed: identities.<column>`.
fn unique_violation_field(error: &sqlx::Error) -> Option<&'static str> {
    let sqlx::Error::Database(db) = error else {
        return None;
    };
    if !db.is_unique_violation() {
        return None;
    }

    let message = db.message();
    if message.contains("identities.handle") {
        Some("handle")
    } else if message.contains("identities.email") {
        Some("email")
    } else {
        None
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
