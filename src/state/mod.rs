//! Demo State
//!
//! Framework-free state transitions behind each demo. Components wrap these
//! in signals; tests drive them directly.

mod counter;
mod people;
mod profiles;
mod users;
mod lifecycle;

pub use counter::Counter;
pub use people::PeopleList;
pub use profiles::{ProfileCycler, ProfileCyclerStoreFields};
pub use users::{load_users, FetchState};
pub use lifecycle::{visibility_label, Ticker};
