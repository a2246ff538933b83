//! UI Components
//!
//! One Leptos component per demo.

mod counter_demo;
mod people_list;
mod profile_card;
mod github_users;
mod timer_demo;

pub use counter_demo::CounterDemo;
pub use people_list::PeopleListDemo;
pub use profile_card::ProfileCard;
pub use github_users::GithubUsers;
pub use timer_demo::TimerDemo;
