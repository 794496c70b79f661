//! Table identity

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Token the special table is persisted under.
pub const SPECIAL_TABLE_TOKEN: &str = "IHLARA";

/// Table identity: 40 numbered floor tables plus the named IHLARA salon.
///
/// Persisted as the stored documents carry it: numbered tables as a JSON
/// number, the special table as the literal string `"IHLARA"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    Numbered(u8),
    Ihlara,
}

impl TableId {
    /// Whether this is the always-pinned special table.
    pub fn is_special(&self) -> bool {
        matches!(self, TableId::Ihlara)
    }

    /// Numeric value used by comparators; the special table counts as 0
    /// beyond the pin rule.
    pub fn numeric(&self) -> u8 {
        match self {
            TableId::Numbered(n) => *n,
            TableId::Ihlara => 0,
        }
    }

    /// Display label: `G-05` for numbered tables, `IHLARA` for the salon.
    pub fn label(&self) -> String {
        match self {
            TableId::Numbered(n) => format!("G-{n:02}"),
            TableId::Ihlara => SPECIAL_TABLE_TOKEN.to_string(),
        }
    }

    /// Parse the persisted form (`"IHLARA"` or a table number as text).
    pub fn parse(value: &str) -> Option<TableId> {
        if value == SPECIAL_TABLE_TOKEN {
            return Some(TableId::Ihlara);
        }
        value
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=40).contains(n))
            .map(TableId::Numbered)
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for TableId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TableId::Numbered(n) => serializer.serialize_u8(*n),
            TableId::Ihlara => serializer.serialize_str(SPECIAL_TABLE_TOKEN),
        }
    }
}

struct TableIdVisitor;

impl Visitor<'_> for TableIdVisitor {
    type Value = TableId;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a table number in 1..=40 or the string \"IHLARA\"")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<TableId, E> {
        if (1..=40).contains(&v) {
            Ok(TableId::Numbered(v as u8))
        } else {
            Err(E::custom(format!("table number out of range: {v}")))
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<TableId, E> {
        if (1..=40).contains(&v) {
            Ok(TableId::Numbered(v as u8))
        } else {
            Err(E::custom(format!("table number out of range: {v}")))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<TableId, E> {
        TableId::parse(v).ok_or_else(|| E::custom(format!("invalid table id: {v}")))
    }
}

impl<'de> Deserialize<'de> for TableId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<TableId, D::Error> {
        deserializer.deserialize_any(TableIdVisitor)
    }
}
