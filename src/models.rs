//! Demo Models
//!
//! Plain data records shown by the demos.

use serde::{Deserialize, Serialize};

/// Person card in the persisted list demo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: u32,
    pub name: String,
}

impl Person {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// Record displayed by the object-cycling demo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub hobby: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, age: u32, hobby: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            hobby: hobby.into(),
        }
    }
}

/// User entry returned by the GitHub users endpoint (extra fields are ignored)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubUser {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}
