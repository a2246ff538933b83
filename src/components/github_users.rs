//! GitHub Users Component
//!
//! Side effect on mount: fetch users once and render the outcome.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_config;
use crate::models::GithubUser;
use crate::platform::BrowserHttp;
use crate::state::{load_users, FetchState};

#[component]
pub fn GithubUsers() -> impl IntoView {
    let config = use_config();
    let (state, set_state) = signal(FetchState::Loading);

    // Runs once per mount
    spawn_local(async move {
        load_users(&BrowserHttp, &config.users_url, config.users_limit, |next| {
            set_state.set(next)
        })
        .await;
    });

    let panel = move || match state.get() {
        FetchState::Loading => view! { <div class="loading">"Loading ..."</div> }.into_any(),
        FetchState::Failed(message) => {
            view! { <div class="error">"Error: " {message}</div> }.into_any()
        }
        FetchState::Ready(users) => view! {
            <section class="user-section">
                <h1 class="title">"Fetch GitHub Users"</h1>
                <ul class="user-list">
                    {users.into_iter().map(|user| view! { <UserItem user=user /> }).collect_view()}
                </ul>
            </section>
        }
        .into_any(),
    };

    view! {
        <div class="users-panel" aria-busy=move || state.with(FetchState::is_loading).to_string()>
            {panel}
        </div>
    }
}

#[component]
fn UserItem(user: GithubUser) -> impl IntoView {
    let GithubUser { login, avatar_url, html_url, .. } = user;
    let alt = login.clone();
    let link_text = html_url.clone();

    view! {
        <li class="user-item">
            <img src=avatar_url alt=alt loading="lazy" class="user-avatar" />
            <div class="user-info">
                <h5 class="user-name">{login}</h5>
                <a href=html_url target="_blank" rel="noopener noreferrer" class="user-link">
                    {link_text}
                </a>
            </div>
        </li>
    }
}
