//! Profile Card Component
//!
//! Object state: cycles through profiles and edits the displayed one.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::state::{ProfileCycler, ProfileCyclerStoreFields};

#[component]
pub fn ProfileCard() -> impl IntoView {
    let cycler = Store::new(ProfileCycler::default());
    let current = cycler.current();

    view! {
        <div class="person-container">
            <h2>"UseState with objects"</h2>
            <h2>"🎉 Meet " {move || current.read().name.clone()} "!"</h2>
            <p><strong>"Age:"</strong> " " {move || current.read().age}</p>
            <p><strong>"Hobby:"</strong> " " {move || current.read().hobby.clone()}</p>
            <button class="next-btn" on:click=move |_| cycler.update(ProfileCycler::next)>
                "Next Person"
            </button>
            <button class="age-btn" on:click=move |_| cycler.update(ProfileCycler::increase_age)>
                "Increase Age"
            </button>
        </div>
    }
}
