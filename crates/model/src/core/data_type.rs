use crate::core::error::ModelError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, str::FromStr};

/// SQLite storage class of a column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    Text,
    Integer,
    Real,
    Blob,
}

/// Conflict resolution algorithm attached to a column constraint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum OnConflict {
    Abort,
    Fail,
    Ignore,
    Replace,
    Rollback,
}

/// Referential action for `ON UPDATE` / `ON DELETE`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ForeignKeyAction {
    #[serde(rename = "NO ACTION")]
    NoAction,
    #[serde(rename = "RESTRICT")]
    Restrict,
    #[serde(rename = "SET NULL")]
    SetNull,
    #[serde(rename = "SET DEFAULT")]
    SetDefault,
    #[serde(rename = "CASCADE")]
    Cascade,
}

lazy_static! {
    static ref COLUMN_TYPE_MAP: HashMap<&'static str, ColumnType> = build_column_type_map();
    static ref ON_CONFLICT_MAP: HashMap<&'static str, OnConflict> = build_on_conflict_map();
    static ref FK_ACTION_MAP: HashMap<&'static str, ForeignKeyAction> = build_fk_action_map();
}

impl ColumnType {
    pub fn sqlite_name(&self) -> &'static str {
        match self {
            ColumnType::Text => "TEXT",
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Blob => "BLOB",
        }
    }
}

impl OnConflict {
    pub fn keyword(&self) -> &'static str {
        match self {
            OnConflict::Abort => "ABORT",
            OnConflict::Fail => "FAIL",
            OnConflict::Ignore => "IGNORE",
            OnConflict::Replace => "REPLACE",
            OnConflict::Rollback => "ROLLBACK",
        }
    }
}

impl ForeignKeyAction {
    pub fn keyword(&self) -> &'static str {
        match self {
            ForeignKeyAction::NoAction => "NO ACTION",
            ForeignKeyAction::Restrict => "RESTRICT",
            ForeignKeyAction::SetNull => "SET NULL",
            ForeignKeyAction::SetDefault => "SET DEFAULT",
            ForeignKeyAction::Cascade => "CASCADE",
        }
    }
}

/// Upper-cases and collapses inner whitespace, so `set   null` matches `SET NULL`.
fn normalize_keyword(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

impl FromStr for ColumnType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        COLUMN_TYPE_MAP
            .get(normalize_keyword(s).as_str())
            .copied()
            .ok_or_else(|| ModelError::UnknownColumnType(s.to_string()))
    }
}

impl FromStr for OnConflict {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ON_CONFLICT_MAP
            .get(normalize_keyword(s).as_str())
            .copied()
            .ok_or_else(|| ModelError::UnknownConflictAction(s.to_string()))
    }
}

impl FromStr for ForeignKeyAction {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FK_ACTION_MAP
            .get(normalize_keyword(s).as_str())
            .copied()
            .ok_or_else(|| ModelError::UnknownForeignKeyAction(s.to_string()))
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sqlite_name())
    }
}

impl fmt::Display for OnConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for ForeignKeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

fn build_column_type_map() -> HashMap<&'static str, ColumnType> {
    use ColumnType::*;

    [Text, Integer, Real, Blob]
        .into_iter()
        .map(|ty| (ty.sqlite_name(), ty))
        .collect()
}

fn build_on_conflict_map() -> HashMap<&'static str, OnConflict> {
    use OnConflict::*;

    [Abort, Fail, Ignore, Replace, Rollback]
        .into_iter()
        .map(|action| (action.keyword(), action))
        .collect()
}

fn build_fk_action_map() -> HashMap<&'static str, ForeignKeyAction> {
    use ForeignKeyAction::*;

    [NoAction, Restrict, SetNull, SetDefault, Cascade]
        .into_iter()
        .map(|action| (action.keyword(), action))
        .collect()
}
