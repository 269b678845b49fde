use crate::{DbError, Result as DbErrorResult};

use fg_core::{
    AdhdSubtype, AgeGroup, Descriptor, ErrorLocation, Identity, Profile, ProfilePatch,
};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const IDENTITY_COLUMNS: &str = "id, handle, email, descriptor, display_name, avatar, pronouns, \
     age_group, adhd_subtype, points, created_at, updated_at";

const F64_WIDTH: usize = std::mem::size_of::<f64>();

pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new identity. A handle or email collision surfaces as
    /// `DbError::Conflict` naming the column, even when two inserts race.
    pub async fn create(&self, identity: &Identity) -> DbErrorResult<()> {
        let id = identity.id.to_string();
        let descriptor = identity.descriptor.as_ref().map(encode_descriptor);
        let created_at = identity.created_at.timestamp();
        let updated_at = identity.updated_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO identities (
                  id, handle, email, descriptor,
                  display_name, avatar, pronouns, age_group, adhd_subtype,
                  points, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(&id)
        .bind(&identity.handle)
        .bind(&identity.email)
        .bind(descriptor)
        .bind(&identity.profile.display_name)
        .bind(&identity.profile.avatar)
        .bind(&identity.profile.pronouns)
        .bind(identity.profile.age_group.as_str())
        .bind(identity.profile.adhd_subtype.as_str())
        .bind(identity.points)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Identity>> {
        let sql = format!("SELECT {} FROM identities WHERE id = ?", IDENTITY_COLUMNS);

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(identity_from_row).transpose()
    }

    /// Report which unique field a prospective enrollment would collide on.
    /// Handle is checked before email.
    pub async fn find_conflict(
        &self,
        handle: &str,
        email: &str,
    ) -> DbErrorResult<Option<&'static str>> {
        let row = sqlx::query(
            r#"
              SELECT
                  EXISTS(SELECT 1 FROM identities WHERE handle = ?) AS handle_taken,
                  EXISTS(SELECT 1 FROM identities WHERE email = ?) AS email_taken
              "#,
        )
        .bind(handle)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        let handle_taken: bool = row.try_get("handle_taken")?;
        let email_taken: bool = row.try_get("email_taken")?;

        Ok(if handle_taken {
            Some("handle")
        } else if email_taken {
            Some("email")
        } else {
            None
        })
    }

    /// Every identity that has a stored descriptor, ordered by id.
    pub async fn find_enrolled(&self) -> DbErrorResult<Vec<Identity>> {
        let sql = format!(
            "SELECT {} FROM identities WHERE descriptor IS NOT NULL ORDER BY id ASC",
            IDENTITY_COLUMNS
        );

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(identity_from_row).collect()
    }

    /// Apply the provided fields of `patch` in a single statement and return
    /// the merged record.
    pub async fn merge_profile(&self, id: Uuid, patch: &ProfilePatch) -> DbErrorResult<Identity> {
        let sql = format!(
            r#"
              UPDATE identities SET
                  handle = COALESCE(?, handle),
                  email = COALESCE(?, email),
                  display_name = COALESCE(?, display_name),
                  avatar = COALESCE(?, avatar),
                  pronouns = COALESCE(?, pronouns),
                  age_group = COALESCE(?, age_group),
                  adhd_subtype = COALESCE(?, adhd_subtype),
                  updated_at = ?
              WHERE id = ?
              RETURNING {}
              "#,
            IDENTITY_COLUMNS
        );

        let row = sqlx::query(&sql)
            .bind(patch.handle.as_deref())
            .bind(patch.email.as_deref())
            .bind(patch.display_name.as_deref())
            .bind(patch.avatar.as_deref())
            .bind(patch.pronouns.as_deref())
            .bind(patch.age_group.map(|g| g.as_str()))
            .bind(patch.adhd_subtype.map(|s| s.as_str()))
            .bind(Utc::now().timestamp())
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => identity_from_row(&row),
            None => Err(not_found(id)),
        }
    }

    /// Overwrite the point balance. Negative balances are refused.
    pub async fn set_points(&self, id: Uuid, points: i64) -> DbErrorResult<i64> {
        if points < 0 {
            return Err(DbError::PointsUnderflow {
                id: id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let row = sqlx::query(
            r#"
              UPDATE identities SET points = ?, updated_at = ?
              WHERE id = ?
              RETURNING points
              "#,
        )
        .bind(points)
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(row.try_get("points")?),
            None => Err(not_found(id)),
        }
    }

    /// Atomically add `delta` (which may be negative) to the balance and
    /// return the new total. Concurrent adds never lose updates. A sum that
    /// would leave the i64 range is refused along with any negative result,
    /// so the stored balance is always a non-negative integer.
    pub async fn add_points(&self, id: Uuid, delta: i64) -> DbErrorResult<i64> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
              UPDATE identities SET points = points + ?, updated_at = ?
              WHERE id = ?
                AND typeof(points + ?) = 'integer'
                AND points + ? >= 0
              RETURNING points
              "#,
        )
        .bind(delta)
        .bind(Utc::now().timestamp())
        .bind(&id_str)
        .bind(delta)
        .bind(delta)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            return Ok(row.try_get("points")?);
        }

        let exists: bool = sqlx::query("SELECT EXISTS(SELECT 1 FROM identities WHERE id = ?)")
            .bind(&id_str)
            .fetch_one(&self.pool)
            .await?
            .try_get(0)?;

        let location = ErrorLocation::from(Location::caller());
        match (exists, delta > 0) {
            (false, _) => Err(not_found(id)),
            (true, true) => Err(DbError::PointsOverflow {
                id: id_str,
                location,
            }),
            (true, false) => Err(DbError::PointsUnderflow {
                id: id_str,
                location,
            }),
        }
    }
}

#[track_caller]
fn not_found(id: Uuid) -> DbError {
    DbError::NotFound {
        id: id.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn corrupt(message: String) -> DbError {
    DbError::Corrupt {
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Pack a descriptor as consecutive little-endian f64 values.
pub(crate) fn encode_descriptor(descriptor: &Descriptor) -> Vec<u8> {
    descriptor
        .as_slice()
        .iter()
        .flat_map(|v| v.to_le_bytes())
        .collect()
}

/// Inverse of `encode_descriptor`. A blob whose length is not a whole number
/// of f64 values decodes to an empty descriptor, which never matches.
pub(crate) fn decode_descriptor(bytes: &[u8]) -> Descriptor {
    if bytes.len() % F64_WIDTH != 0 {
        return Descriptor::from_stored(Vec::new());
    }

    let values = bytes
        .chunks_exact(F64_WIDTH)
        .map(|chunk| {
            let mut buf = [0u8; F64_WIDTH];
            buf.copy_from_slice(chunk);
            f64::from_le_bytes(buf)
        })
        .collect();

    Descriptor::from_stored(values)
}

fn identity_from_row(row: &SqliteRow) -> DbErrorResult<Identity> {
    let id: String = row.try_get("id")?;
    let descriptor: Option<Vec<u8>> = row.try_get("descriptor")?;
    let age_group: String = row.try_get("age_group")?;
    let adhd_subtype: String = row.try_get("adhd_subtype")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Identity {
        id: Uuid::parse_str(&id).map_err(|e| corrupt(format!("bad id '{}': {}", id, e)))?,
        handle: row.try_get("handle")?,
        email: row.try_get("email")?,
        descriptor: descriptor.as_deref().map(decode_descriptor),
        profile: Profile {
            display_name: row.try_get("display_name")?,
            avatar: row.try_get("avatar")?,
            pronouns: row.try_get("pronouns")?,
            age_group: AgeGroup::from_str(&age_group)
                .map_err(|e| corrupt(format!("identity {}: {}", id, e)))?,
            adhd_subtype: AdhdSubtype::from_str(&adhd_subtype)
                .map_err(|e| corrupt(format!("identity {}: {}", id, e)))?,
        },
        points: row.try_get("points")?,
        created_at: timestamp(created_at)?,
        updated_at: timestamp(updated_at)?,
    })
}

fn timestamp(seconds: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| corrupt(format!("timestamp {} out of range", seconds)))
}
