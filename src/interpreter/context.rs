use std::collections::HashMap;

use ordered_float::OrderedFloat;

/// The elements of one named map, keyed by value.
///
/// Keys compare by numeric value, so `zz[1]` and `zz[3-2]` are the same
/// element. `NaN` is a single valid key, and `0.0` and `-0.0` are the same
/// key.
pub type MapStore = HashMap<OrderedFloat<f64>, f64>;

/// The mutable environment of one evaluation session.
///
/// Holds scalar variables and named maps. A context is created empty, lives
/// across every statement of a session and is dropped with it; nothing is
/// shared between contexts.
///
/// A name may be used both as a scalar and as a map. The two stores are
/// independent and neither use blocks the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionContext {
    /// Scalar variables by name.
    pub scalars: HashMap<String, f64>,
    /// Maps by name.
    pub maps:    HashMap<String, MapStore>,
}

impl ExecutionContext {
    /// Creates a context with no variables and no maps.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a scalar variable.
    ///
    /// Reading a variable that was never assigned is allowed and yields NaN.
    ///
    /// # Example
    /// ```
    /// use gramcalc::interpreter::context::ExecutionContext;
    ///
    /// let mut context = ExecutionContext::new();
    /// assert!(context.scalar("a").is_nan());
    ///
    /// context.set_scalar("a", 44.0);
    /// assert_eq!(context.scalar("a"), 44.0);
    /// ```
    #[must_use]
    pub fn scalar(&self, name: &str) -> f64 {
        self.scalars.get(name).copied().unwrap_or(f64::NAN)
    }

    /// Stores a scalar variable, creating it if absent.
    pub fn set_scalar(&mut self, name: &str, value: f64) {
        self.scalars.insert(name.to_string(), value);
    }

    /// Declares an empty map, replacing any map of the same name.
    pub fn define_map(&mut self, name: &str) {
        self.maps.insert(name.to_string(), MapStore::new());
    }

    /// Looks up a declared map.
    #[must_use]
    pub fn map(&self, name: &str) -> Option<&MapStore> {
        self.maps.get(name)
    }

    /// Looks up a declared map for writing.
    pub fn map_mut(&mut self, name: &str) -> Option<&mut MapStore> {
        self.maps.get_mut(name)
    }
}

#[cfg(test)]
mod tests {
    use ordered_float::OrderedFloat;

    use super::ExecutionContext;

    #[test]
    fn redeclaring_a_map_empties_it() {
        let mut context = ExecutionContext::new();
        context.define_map("zz");
        context.map_mut("zz").unwrap().insert(OrderedFloat(1.0), 50.0);
        assert_eq!(context.map("zz").unwrap().len(), 1);

        context.define_map("zz");
        assert!(context.map("zz").unwrap().is_empty());
    }

    #[test]
    fn scalars_and_maps_are_independent() {
        let mut context = ExecutionContext::new();
        context.define_map("a");
        context.set_scalar("a", 3.0);
        assert_eq!(context.scalar("a"), 3.0);
        assert!(context.map("a").is_some());
        assert!(context.map("b").is_none());
    }

    #[test]
    fn signed_zeros_share_a_key() {
        let mut context = ExecutionContext::new();
        context.define_map("m");
        let store = context.map_mut("m").unwrap();
        store.insert(OrderedFloat(0.0), 3.0);
        store.insert(OrderedFloat(f64::NAN), 4.0);

        assert_eq!(store.get(&OrderedFloat(-0.0)), Some(&3.0));
        assert_eq!(store.get(&OrderedFloat(-f64::NAN)), Some(&4.0));
        assert_eq!(store.len(), 2);
    }
}
