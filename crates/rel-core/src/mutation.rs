mod assoc;
pub use assoc::AssocMutation;

mod mutate;
pub use mutate::Mutate;

use indexmap::IndexMap;
use std::fmt;

/// Field changes for one record, plus the changes of its associations.
///
/// Equality is structural and does not depend on the order mutates or
/// associations were added.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    mutates: IndexMap<String, Mutate>,
    assoc: IndexMap<String, AssocMutation>,
    cascade: bool,
}

impl Mutation {
    /// An empty, cascading mutation.
    pub fn new() -> Mutation {
        Mutation {
            mutates: IndexMap::new(),
            assoc: IndexMap::new(),
            cascade: true,
        }
    }

    /// Records a mutate, replacing any earlier one for the same key.
    pub fn add(&mut self, mutate: Mutate) {
        self.mutates.insert(mutate.field().to_string(), mutate);
    }

    pub fn get(&self, field: &str) -> Option<&Mutate> {
        self.mutates.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mutate> + '_ {
        self.mutates.values()
    }

    pub fn len(&self) -> usize {
        self.mutates.len()
    }

    /// Returns `true` when there are neither field nor association changes.
    pub fn is_empty(&self) -> bool {
        self.mutates.is_empty() && self.assoc.is_empty()
    }

    /// Attaches the changes of an association.
    pub fn set_assoc(&mut self, name: impl Into<String>, mutation: impl Into<AssocMutation>) {
        self.assoc.insert(name.into(), mutation.into());
    }

    pub fn assoc(&self, name: &str) -> Option<&AssocMutation> {
        self.assoc.get(name)
    }

    pub fn assoc_mut(&mut self, name: &str) -> Option<&mut AssocMutation> {
        self.assoc.get_mut(name)
    }

    pub fn assocs(&self) -> impl Iterator<Item = (&str, &AssocMutation)> + '_ {
        self.assoc.iter().map(|(name, mutation)| (name.as_str(), mutation))
    }

    /// Whether association changes are persisted together with this record.
    pub fn cascade(&self) -> bool {
        self.cascade
    }

    pub fn set_cascade(&mut self, cascade: bool) {
        self.cascade = cascade;
    }

    /// Folds `other` into `self`. Entries of `other` win on conflicting
    /// keys; the result cascades only if both sides do.
    pub fn merge(&mut self, other: Mutation) {
        self.mutates.extend(other.mutates);
        self.assoc.extend(other.assoc);
        self.cascade = self.cascade && other.cascade;
    }
}

impl Default for Mutation {
    fn default() -> Self {
        Mutation::new()
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Mutation{")?;

        let mut sep = "";
        for mutate in self.mutates.values() {
            write!(f, "{sep}{mutate}")?;
            sep = ", ";
        }

        for (name, assoc) in &self.assoc {
            write!(f, "{sep}{name}: {assoc}")?;
            sep = ", ";
        }

        if !self.cascade {
            write!(f, "{sep}cascade: false")?;
        }

        f.write_str("}")
    }
}

impl FromIterator<Mutate> for Mutation {
    fn from_iter<I: IntoIterator<Item = Mutate>>(iter: I) -> Self {
        let mut mutation = Mutation::new();
        for mutate in iter {
            mutation.add(mutate);
        }
        mutation
    }
}

impl Extend<Mutate> for Mutation {
    fn extend<I: IntoIterator<Item = Mutate>>(&mut self, iter: I) {
        for mutate in iter {
            self.add(mutate);
        }
    }
}
