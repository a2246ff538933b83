//! Profile Cycling State
//!
//! Steps through a fixed set of profiles; the displayed copy can be edited
//! without touching the source list.

use reactive_stores::Store;

use crate::models::Profile;

/// The three profiles the demo cycles through
pub fn default_profiles() -> Vec<Profile> {
    vec![
        Profile::new("Djomo Yves", 30, "Reading"),
        Profile::new("Belvinard", 25, "Painting"),
        Profile::new("Alex Yapo", 28, "Gaming"),
    ]
}

/// Cursor over `source` plus the record currently on screen
#[derive(Debug, Clone, Store)]
pub struct ProfileCycler {
    source: Vec<Profile>,
    index: usize,
    current: Profile,
}

impl ProfileCycler {
    /// Returns `None` for an empty source list
    #[cfg(test)]
    pub fn new(source: Vec<Profile>) -> Option<Self> {
        let current = source.first()?.clone();
        Some(Self {
            source,
            index: 0,
            current,
        })
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub fn current(&self) -> &Profile {
        &self.current
    }

    /// Show the next source profile, wrapping around and discarding edits
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.source.len();
        self.current = self.source[self.index].clone();
    }

    /// Age the displayed copy by one year
    pub fn increase_age(&mut self) {
        self.current = Profile {
            age: self.current.age + 1,
            ..self.current.clone()
        };
    }
}

impl Default for ProfileCycler {
    fn default() -> Self {
        let source = default_profiles();
        let current = source[0].clone();
        Self {
            source,
            index: 0,
            current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_source() {
        assert!(ProfileCycler::new(Vec::new()).is_none());
    }

    #[test]
    fn test_next_wraps_around() {
        let mut cycler = ProfileCycler::default();
        let start = cycler.current().clone();

        cycler.next();
        assert_eq!(cycler.index(), 1);
        assert_eq!(cycler.current().name, "Belvinard");

        cycler.next();
        cycler.next();
        assert_eq!(cycler.index(), 0);
        assert_eq!(cycler.current(), &start);
    }

    #[test]
    fn test_increase_age_only_touches_displayed_copy() {
        let mut cycler = ProfileCycler::default();
        cycler.increase_age();
        cycler.increase_age();
        assert_eq!(cycler.current().age, 32);
        assert_eq!(cycler.current().hobby, "Reading");

        // Edits are lost once the cursor moves on and comes back
        for _ in 0..default_profiles().len() {
            cycler.next();
        }
        assert_eq!(cycler.current().age, 30);
    }

    #[test]
    fn test_single_profile_source_stays_put() {
        let only = Profile::new("Solo", 40, "Chess");
        let mut cycler = ProfileCycler::new(vec![only.clone()]).unwrap();
        cycler.next();
        assert_eq!(cycler.current(), &only);
    }
}
