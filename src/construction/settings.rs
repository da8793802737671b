//! Per-path construction settings.
use std::collections::{HashMap, HashSet};

/// Settings passed down every recursive `instantiate` call.
///
/// Settings are never shared mutably: descending into a config produces an
/// extended copy, so the cycle guard only covers the current resolution path.
#[derive(Debug, Clone)]
pub struct ConstructionSettings<I> {
    /// Config ids under construction on the current path.
    pub in_progress: HashSet<String>,
    /// Values for variables, by name.
    pub variables: HashMap<String, I>,
    /// Caller options passed through untouched.
    pub options: serde_json::Map<String, serde_json::Value>,
}

// Manual impl: a derive would require `I: Default`.
impl<I> Default for ConstructionSettings<I> {
    fn default() -> Self {
        Self { in_progress: HashSet::new(), variables: HashMap::new(), options: serde_json::Map::new() }
    }
}

impl<I: Clone> ConstructionSettings<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: I) -> Self {
        self.variables.insert(name.into(), value);
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    pub fn is_in_progress(&self, id: &str) -> bool {
        self.in_progress.contains(id)
    }

    /// A copy of these settings with `id` added to the cycle guard.
    pub fn descend(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.in_progress.insert(id.to_string());
        next
    }

    pub fn variable(&self, name: &str) -> Option<&I> {
        self.variables.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descend_extends_a_copy() {
        let root: ConstructionSettings<i32> = ConstructionSettings::new().with_variable("x", 1);
        let child = root.descend("ex:a");
        let grandchild = child.descend("ex:b");

        assert!(!root.is_in_progress("ex:a"));
        assert!(child.is_in_progress("ex:a"));
        assert!(!child.is_in_progress("ex:b"));
        assert!(grandchild.is_in_progress("ex:a") && grandchild.is_in_progress("ex:b"));
        assert_eq!(grandchild.variable("x"), Some(&1));
    }

    #[test]
    fn test_options_pass_through() {
        let settings: ConstructionSettings<()> = ConstructionSettings::new().with_option("mode", json!("strict"));
        assert_eq!(settings.descend("ex:a").options.get("mode"), Some(&json!("strict")));
    }
}
