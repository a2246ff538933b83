//! Application Context
//!
//! Demo settings shared via Leptos Context API.

use std::time::Duration;

use leptos::prelude::*;

/// Settings read by the demos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// localStorage slot holding the people list
    pub people_slot: String,
    /// Endpoint returning a JSON array of GitHub users
    pub users_url: String,
    /// Max users kept from a response
    pub users_limit: usize,
    /// Interval of the lifecycle demo's ticker
    pub tick_period: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            people_slot: "peopleList".to_string(),
            users_url: "https://api.github.com/users".to_string(),
            users_limit: 30,
            tick_period: Duration::from_secs(1),
        }
    }
}

/// Get the config from context
pub fn use_config() -> AppConfig {
    expect_context::<AppConfig>()
}
