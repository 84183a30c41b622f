//! Named, ordered groups of chains.

use crate::chain::Chain;

/// An immutable named list of chains, presented together as one practice set.
#[derive(Debug)]
pub struct ConfigurationSet {
    id: String,
    description: String,
    chains: Vec<Chain>,
}

impl ConfigurationSet {
    pub fn new(id: impl Into<String>, description: impl Into<String>, chains: Vec<Chain>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            chains,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub fn get(&self, index: usize) -> Option<&Chain> {
        self.chains.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chain> {
        self.chains.iter()
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

impl<'a> IntoIterator for &'a ConfigurationSet {
    type Item = &'a Chain;
    type IntoIter = std::slice::Iter<'a, Chain>;

    fn into_iter(self) -> Self::IntoIter {
        self.chains.iter()
    }
}

/// Ordered collection of configuration sets, looked up by id.
#[derive(Debug, Default)]
pub struct ConfigurationLibrary {
    sets: Vec<ConfigurationSet>,
}

impl ConfigurationLibrary {
    pub fn new(sets: Vec<ConfigurationSet>) -> Self {
        Self { sets }
    }

    /// First set with this id, if any.
    pub fn get_by_id(&self, id: &str) -> Option<&ConfigurationSet> {
        self.sets.iter().find(|set| set.id == id)
    }

    pub fn push(&mut self, set: ConfigurationSet) {
        self.sets.push(set);
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sets.iter().map(ConfigurationSet::id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfigurationSet> {
        self.sets.iter()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl FromIterator<ConfigurationSet> for ConfigurationLibrary {
    fn from_iter<I: IntoIterator<Item = ConfigurationSet>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Extend<ConfigurationSet> for ConfigurationLibrary {
    fn extend<I: IntoIterator<Item = ConfigurationSet>>(&mut self, iter: I) {
        self.sets.extend(iter);
    }
}

impl IntoIterator for ConfigurationLibrary {
    type Item = ConfigurationSet;
    type IntoIter = std::vec::IntoIter<ConfigurationSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConfigurationLibrary {
    type Item = &'a ConfigurationSet;
    type IntoIter = std::slice::Iter<'a, ConfigurationSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}
