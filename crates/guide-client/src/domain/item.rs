//! Item Entities
//!
//! Full records for comparison subjects and the categories holding them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Same content as plain text and as rendered HTML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub text: String,
    pub html: String,
}

/// A pro or con argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Valoration {
    pub uid: String,
    pub content: Description,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kind {
    pub tag: String,
    #[serde(rename = "hackageName")]
    pub hackage_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub text: String,
}

/// Item data structure (matches the API payload)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub ecosystem: Description,
    #[serde(rename = "group_")]
    pub group: String,
    pub kind: Kind,
    /// Creation timestamp, kept as sent
    pub created: String,
    pub link: String,
    pub uid: String,
    #[serde(rename = "consDeleted")]
    pub cons_deleted: BTreeSet<String>,
    pub name: String,
    #[serde(rename = "prosDeleted")]
    pub pros_deleted: BTreeSet<String>,
    pub notes: Note,
    pub description: Description,
    pub pros: Vec<Valoration>,
    pub cons: Vec<Valoration>,
}

/// Category with its full item list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat {
    pub uid: String,
    pub title: String,
    pub group: String,
    pub description: Description,
    pub items: Vec<Item>,
}
