use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use super::{FeatureFlag, FlagSource};

/// In-process flag state, one atomic per flag. Reads never lock.
#[derive(Debug, Default)]
pub struct FlagStore {
    states: [AtomicBool; FeatureFlag::COUNT],
}

impl FlagStore {
    /// Every flag disabled.
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_flags(enabled: impl IntoIterator<Item = FeatureFlag>) -> Self {
        let store = Self::new();
        for flag in enabled {
            store.set(flag, true);
        }
        store
    }

    #[cfg(test)]
    pub fn all_enabled() -> Self {
        Self::with_flags(FeatureFlag::ALL)
    }

    /// Returns the previous state.
    pub fn set(&self, flag: FeatureFlag, enabled: bool) -> bool {
        self.states[flag.index()].swap(enabled, Ordering::Relaxed)
    }

    /// Applies a full snapshot, logging every flag that changes.
    pub fn apply(&self, snapshot: &[(FeatureFlag, bool)]) {
        for &(flag, enabled) in snapshot {
            let previous = self.set(flag, enabled);
            if previous != enabled {
                info!(flag = %flag, enabled, "Feature flag toggled");
            }
        }
    }

    pub fn snapshot(&self) -> Vec<(FeatureFlag, bool)> {
        FeatureFlag::ALL
            .into_iter()
            .map(|flag| (flag, self.is_enabled(flag)))
            .collect()
    }
}

impl FlagSource for FlagStore {
    fn is_enabled(&self, flag: FeatureFlag) -> bool {
        self.states[flag.index()].load(Ordering::Relaxed)
    }
}
