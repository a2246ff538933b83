//! Hooks Demos App
//!
//! Mounts every demo side by side.

use leptos::prelude::*;

use crate::components::{CounterDemo, GithubUsers, PeopleListDemo, ProfileCard, TimerDemo};
use crate::context::AppConfig;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::default());

    view! {
        <div class="app-container">
            <h1 class="title">"Hooks Demos"</h1>

            <h2 class="subtitle">"Local State"</h2>
            <CounterDemo />
            <PeopleListDemo />
            <ProfileCard />

            <h2 class="subtitle">"Side Effects"</h2>
            <GithubUsers />
            <TimerDemo />
        </div>
    }
}
