//! People List Component
//!
//! Array state persisted to localStorage on every change.

use leptos::prelude::*;

use crate::context::use_config;
use crate::models::Person;
use crate::platform::BrowserStorage;
use crate::state::PeopleList;

#[component]
pub fn PeopleListDemo() -> impl IntoView {
    let config = use_config();
    let list = RwSignal::new(PeopleList::load(BrowserStorage, config.people_slot));

    let people = move || list.with(|l| l.people().to_vec());

    view! {
        <div class="container">
            <h2 class="title">"UseState with Array"</h2>
            <Show
                when=move || !list.with(PeopleList::is_empty)
                fallback=|| view! { <p class="empty-message">"No people left in the list."</p> }
            >
                <div class="people-list">
                    <For
                        each=people
                        key=|person| person.id
                        children=move |person: Person| {
                            let id = person.id;
                            view! {
                                <div class="person-card">
                                    <h4>{person.name}</h4>
                                    <button
                                        class="remove-btn"
                                        on:click=move |_| list.update(|l| l.remove(id))
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>

            <div class="button-group">
                <button class="clear-btn" on:click=move |_| list.update(PeopleList::clear)>
                    "Clear List"
                </button>
                <button class="reset-btn" on:click=move |_| list.update(PeopleList::reset_to_default)>
                    "Reset List"
                </button>
            </div>
        </div>
    }
}
