use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::DeserializationError;

use super::{required_i64, required_str, JsonRecord, JsonSerialisable};

const KEY_TYPE: &str = "type";
const KEY_TURN: &str = "turn";
const KEY_TURN_NUMBER: &str = "turnNumber";
const KEY_GAMER: &str = "gamer";
const KEY_DATA: &str = "data";
const KEY_CREATED_AT: &str = "createdAt";

/// One turn of a multiplayer match as reported by the game service.
///
/// Fields are only set at construction, an updated turn is a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchTurn {
    /// Turn type, an open set of values owned by the game
    kind: String,

    /// Current turn number
    turn_number: i64,

    /// Name of gamer for this turn
    gamer: String,

    /// Data stored for this turn, never interpreted here
    data: String,

    /// When the turn was created, in epoch milliseconds assigned by the service
    created_at: i64,
}

impl MatchTurn {
    pub fn new(
        kind: impl Into<String>,
        turn_number: i64,
        gamer: impl Into<String>,
        data: impl Into<String>,
        created_at: i64,
    ) -> Self {
        MatchTurn {
            kind: kind.into(),
            turn_number,
            gamer: gamer.into(),
            data: data.into(),
            created_at,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn turn_number(&self) -> i64 {
        self.turn_number
    }

    pub fn gamer(&self) -> &str {
        &self.gamer
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }
}

impl JsonSerialisable for MatchTurn {
    fn from_json(record: &JsonRecord) -> Result<Self, DeserializationError> {
        // Older payloads spell the turn number out
        let turn_key = if !record.contains_key(KEY_TURN) && record.contains_key(KEY_TURN_NUMBER) {
            KEY_TURN_NUMBER
        } else {
            KEY_TURN
        };

        let turn = decode(record, turn_key);
        match &turn {
            Ok(turn) => trace!("Decoded match turn {} by {}", turn.turn_number, turn.gamer),
            Err(e) => debug!("Rejected match turn record: {}", e),
        }
        turn
    }

    fn to_json(&self) -> JsonRecord {
        let mut record = JsonRecord::new();
        record.insert(KEY_TYPE.into(), Value::from(self.kind.as_str()));
        record.insert(KEY_TURN.into(), Value::from(self.turn_number));
        record.insert(KEY_GAMER.into(), Value::from(self.gamer.as_str()));
        record.insert(KEY_DATA.into(), Value::from(self.data.as_str()));
        record.insert(KEY_CREATED_AT.into(), Value::from(self.created_at));
        record
    }
}

fn decode(record: &JsonRecord, turn_key: &'static str) -> Result<MatchTurn, DeserializationError> {
    Ok(MatchTurn {
        kind: required_str(record, KEY_TYPE)?,
        turn_number: required_i64(record, turn_key)?,
        gamer: required_str(record, KEY_GAMER)?,
        data: required_str(record, KEY_DATA)?,
        created_at: required_i64(record, KEY_CREATED_AT)?,
    })
}

impl Serialize for MatchTurn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MatchTurn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = JsonRecord::deserialize(deserializer)?;
        MatchTurn::from_json(&record).map_err(de::Error::custom)
    }
}
