//! A named collection of built parameters.

use legato_midi::{ControlParameter, MidiEvent};

use crate::error::PatchError;

/// Parameters built from a patch, in patch order.
///
/// Every parameter shares one update rate, so a single [`tick`](Self::tick)
/// per control period advances them all.
#[derive(Debug, Clone, Default)]
pub struct ParameterSet {
    entries: Vec<(String, ControlParameter)>,
}

impl ParameterSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::DuplicateName`] if `name` is already taken.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        parameter: ControlParameter,
    ) -> Result<(), PatchError> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(PatchError::DuplicateName(name));
        }
        self.entries.push((name, parameter));
        Ok(())
    }

    /// Offer an event to every parameter. Returns how many matched.
    pub fn notify(&mut self, event: &MidiEvent) -> usize {
        let mut matched = 0;
        for (_, parameter) in &mut self.entries {
            if parameter.notify(event) {
                matched += 1;
            }
        }
        matched
    }

    /// Advance every parameter by one control tick.
    pub fn tick(&mut self) {
        for (_, parameter) in &mut self.entries {
            parameter.advance();
        }
    }

    /// Jump every parameter to its default value.
    pub fn reset(&mut self) {
        for (_, parameter) in &mut self.entries {
            parameter.reset();
        }
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&ControlParameter> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }

    /// Look up a parameter by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ControlParameter> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }

    /// Latest smoothed value of a parameter, without advancing it.
    pub fn value(&self, name: &str) -> Option<f32> {
        self.get(name).map(ControlParameter::last_value)
    }

    /// Iterate over `(name, parameter)` pairs in patch order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ControlParameter)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), p))
    }

    /// Parameter names in patch order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
