/**
 * Room Database Operations
 *
 * The room store: records keyed by the generated guid. The participant
 * roster is persisted as a JSON array in a TEXT column and decoded into the
 * typed `Roster` at this boundary, so handlers only ever see the entity
 * types.
 */

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::rooms::model::{Room, Roster};

const ROOM_COLUMNS: &str =
    "guid, name, host_name, participant_limit, num_participants, participants";

fn room_from_row(row: &SqliteRow) -> Result<Room, sqlx::Error> {
    let raw_roster: String = row.try_get("participants")?;
    let participants: Roster =
        serde_json::from_str(&raw_roster).map_err(|e| sqlx::Error::ColumnDecode {
            index: "participants".into(),
            source: Box::new(e),
        })?;

    Ok(Room {
        guid: row.try_get("guid")?,
        name: row.try_get("name")?,
        host_name: row.try_get("host_name")?,
        limit: row.try_get("participant_limit")?,
        num_participants: row.try_get("num_participants")?,
        participants,
    })
}

fn roster_json(roster: &Roster) -> Result<String, sqlx::Error> {
    serde_json::to_string(roster).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

/// Insert a freshly created room
pub async fn create_room(pool: &SqlitePool, room: &Room) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO rooms (guid, name, host_name, participant_limit, num_participants, participants)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&room.guid)
    .bind(&room.name)
    .bind(&room.host_name)
    .bind(room.limit)
    .bind(room.num_participants)
    .bind(roster_json(&room.participants)?)
    .execute(pool)
    .await?;

    Ok(())
}

/// List every room in creation order
pub async fn list_rooms(pool: &SqlitePool) -> Result<Vec<Room>, sqlx::Error> {
    let rows = sqlx::query(&format!("SELECT {ROOM_COLUMNS} FROM rooms ORDER BY rowid"))
        .fetch_all(pool)
        .await?;

    rows.iter().map(room_from_row).collect()
}

/// Get room by guid (exact match)
pub async fn get_room_by_guid(
    pool: &SqlitePool,
    guid: &str,
) -> Result<Option<Room>, sqlx::Error> {
    let row = sqlx::query(&format!("SELECT {ROOM_COLUMNS} FROM rooms WHERE guid = ?"))
        .bind(guid)
        .fetch_optional(pool)
        .await?;

    row.map(|r| room_from_row(&r)).transpose()
}

/// Get the first room whose current host is `host_name`
///
/// Host transfer operates on the room the caller hosts, so the store needs
/// this lookup alongside the guid one.
pub async fn get_room_by_host(
    pool: &SqlitePool,
    host_name: &str,
) -> Result<Option<Room>, sqlx::Error> {
    let row = sqlx::query(&format!(
        "SELECT {ROOM_COLUMNS} FROM rooms WHERE host_name = ? ORDER BY rowid LIMIT 1"
    ))
    .bind(host_name)
    .fetch_optional(pool)
    .await?;

    row.map(|r| room_from_row(&r)).transpose()
}

/// Every room whose roster contains `username`
///
/// The store contract is exact-match only, so the roster filter runs here
/// rather than in SQL.
pub async fn rooms_with_member(
    pool: &SqlitePool,
    username: &str,
) -> Result<Vec<Room>, sqlx::Error> {
    let rooms = list_rooms(pool).await?;
    Ok(rooms
        .into_iter()
        .filter(|room| room.participants.contains(username))
        .collect())
}

/// Persist a room's roster and participant count after a join/leave
pub async fn save_membership(pool: &SqlitePool, room: &Room) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE rooms
        SET num_participants = ?, participants = ?
        WHERE guid = ?
        "#,
    )
    .bind(room.num_participants)
    .bind(roster_json(&room.participants)?)
    .bind(&room.guid)
    .execute(pool)
    .await?;

    Ok(())
}

/// Persist a room's host after a host transfer
pub async fn save_host(pool: &SqlitePool, room: &Room) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE rooms SET host_name = ? WHERE guid = ?")
        .bind(&room.host_name)
        .bind(&room.guid)
        .execute(pool)
        .await?;

    Ok(())
}
