//! Counter State

/// Click counter that never drops below zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    value: u32,
}

impl Counter {
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    /// No-op at zero
    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    pub fn double_increment(&mut self) {
        self.value = self.value.saturating_add(2);
    }
}
