//! The user's profile: name, daily goal, active list and theme.

use crate::error::ValidationError;
use crate::model::DisplayMode;
use crate::store::WordStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    /// Correct answers to aim for each day. Always positive.
    pub daily_goal: u32,
    /// List studied by default; empty when none is selected.
    pub active_list: String,
    pub display_mode: DisplayMode,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, daily_goal: u32) -> Result<Self, ValidationError> {
        if daily_goal == 0 {
            return Err(ValidationError::InvalidGoal(daily_goal));
        }
        Ok(Self {
            name: name.into(),
            daily_goal,
            active_list: String::new(),
            display_mode: DisplayMode::default(),
        })
    }

    pub fn has_active_list(&self) -> bool {
        !self.active_list.is_empty()
    }

    pub fn set_daily_goal(&mut self, goal: u32) -> Result<(), ValidationError> {
        if goal == 0 {
            return Err(ValidationError::InvalidGoal(goal));
        }
        self.daily_goal = goal;
        Ok(())
    }

    /// Select the list to study. It must exist and have members.
    pub fn set_active_list(
        &mut self,
        store: &WordStore,
        name: &str,
    ) -> Result<(), ValidationError> {
        if !store.has_list(name) {
            return Err(ValidationError::NotFound(name.to_string()));
        }
        if store.member_count(name) == 0 {
            return Err(ValidationError::EmptyList(name.to_string()));
        }
        self.active_list = name.to_string();
        Ok(())
    }

    pub fn clear_active_list(&mut self) {
        self.active_list.clear();
    }

    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        self.display_mode = self.display_mode.toggled();
        self.display_mode
    }

    /// Clear the active list if it no longer has members.
    ///
    /// Returns `true` when the selection was reset.
    pub fn reconcile_active_list(&mut self, store: &WordStore) -> bool {
        if self.has_active_list() && store.member_count(&self.active_list) == 0 {
            tracing::warn!(
                list = %self.active_list,
                "active list is empty, clearing selection"
            );
            self.active_list.clear();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> WordStore {
        let mut store = WordStore::new();
        store.add_word("cat", ["feline"], "Animals").unwrap();
        store.create_list("Empty").unwrap();
        store
    }

    #[test]
    fn goal_must_be_positive() {
        assert_eq!(
            UserProfile::new("Ada", 0).unwrap_err(),
            ValidationError::InvalidGoal(0)
        );
        let mut profile = UserProfile::new("Ada", 10).unwrap();
        assert!(profile.set_daily_goal(0).is_err());
        assert_eq!(profile.daily_goal, 10);
        profile.set_daily_goal(25).unwrap();
        assert_eq!(profile.daily_goal, 25);
    }

    #[test]
    fn active_list_needs_members() {
        let store = store();
        let mut profile = UserProfile::new("Ada", 10).unwrap();
        assert_eq!(
            profile.set_active_list(&store, "Empty").unwrap_err(),
            ValidationError::EmptyList("Empty".into())
        );
        assert_eq!(
            profile.set_active_list(&store, "Nope").unwrap_err(),
            ValidationError::NotFound("Nope".into())
        );
        profile.set_active_list(&store, "Animals").unwrap();
        assert_eq!(profile.active_list, "Animals");
    }

    #[test]
    fn reconcile_clears_emptied_list() {
        let mut store = store();
        let mut profile = UserProfile::new("Ada", 10).unwrap();
        profile.set_active_list(&store, "Animals").unwrap();
        assert!(!profile.reconcile_active_list(&store));

        store.remove_word("cat").unwrap();
        assert!(profile.reconcile_active_list(&store));
        assert!(!profile.has_active_list());
    }

    #[test]
    fn toggle_flips_mode() {
        let mut profile = UserProfile::new("Ada", 10).unwrap();
        assert_eq!(profile.toggle_display_mode(), DisplayMode::Dark);
        assert_eq!(profile.toggle_display_mode(), DisplayMode::Light);
    }
}
