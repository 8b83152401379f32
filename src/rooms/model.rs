/**
 * Room Model
 *
 * The typed room entity and its membership state machine. All membership
 * transitions go through `Room::join` / `Room::leave`, which enforce the
 * invariants:
 *
 * - `0 <= num_participants <= limit`
 * - `num_participants == participants.len()`
 * - no duplicate entries in the roster
 *
 * The host is not required to be a participant, and the creator is not
 * auto-joined.
 */

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Capacity applied when a room is created without a usable limit.
pub const DEFAULT_ROOM_LIMIT: i64 = 5;

/// Ordered membership list: insertion order is join order, removal is
/// by-value and preserves the relative order of the remaining members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<String>);

impl Roster {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, username: &str) -> bool {
        self.0.iter().any(|member| member == username)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    fn push(&mut self, username: String) {
        self.0.push(username);
    }

    /// Remove the first matching entry; true if one was removed.
    fn remove(&mut self, username: &str) -> bool {
        match self.0.iter().position(|member| member == username) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }
}

/// A room record: named, capacity-bounded, with a designated host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    /// Opaque generated identifier, immutable after creation
    pub guid: String,
    /// Display name
    pub name: String,
    /// Username of the current host (mutable via host transfer)
    pub host_name: String,
    /// Capacity limit
    pub limit: i64,
    /// Mirrors `participants.len()`
    pub num_participants: i64,
    /// Ordered participant usernames
    pub participants: Roster,
}

impl Room {
    /// Build a fresh room: empty roster, count 0, the creator as host.
    ///
    /// A limit that is absent or non-positive falls back to
    /// [`DEFAULT_ROOM_LIMIT`] (the capacity is a positive integer by
    /// definition).
    pub fn new(guid: String, name: String, host_name: String, limit: Option<i64>) -> Self {
        let limit = match limit {
            Some(n) if n > 0 => n,
            _ => DEFAULT_ROOM_LIMIT,
        };

        Self {
            guid,
            name,
            host_name,
            limit,
            num_participants: 0,
            participants: Roster::new(),
        }
    }

    /// Add a participant.
    ///
    /// Fails with `AlreadyMember` if the username is present, with `RoomFull`
    /// at capacity; the room is unchanged on failure.
    pub fn join(&mut self, username: &str) -> Result<(), ApiError> {
        if self.participants.contains(username) {
            return Err(ApiError::AlreadyMember);
        }
        if self.num_participants >= self.limit {
            return Err(ApiError::RoomFull);
        }

        self.participants.push(username.to_owned());
        self.num_participants += 1;
        Ok(())
    }

    /// Remove a participant by value.
    ///
    /// Fails with `NotMember` if the username is absent; the room is
    /// unchanged on failure.
    pub fn leave(&mut self, username: &str) -> Result<(), ApiError> {
        if !self.participants.remove(username) {
            return Err(ApiError::NotMember);
        }

        self.num_participants -= 1;
        Ok(())
    }
}

/// Generate a fresh room identifier: 16 random bytes, hex-encoded.
///
/// Collision probability is treated as negligible; there is no uniqueness
/// retry loop.
pub fn generate_guid() -> String {
    let bytes: [u8; 16] = rand::random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
