//! Jar content kinds and their point values

use serde::{Deserialize, Serialize};

/// Index of a content kind within its catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KindId(pub usize);

/// What a jar can hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentKind {
    pub name: String,
    /// Points added to the score when opened (negative for hazards)
    pub points: i64,
}

impl ContentKind {
    pub fn new(name: impl Into<String>, points: i64) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    pub fn is_hazard(&self) -> bool {
        self.points < 0
    }
}

/// Ordered table of content kinds.
///
/// Order matters: it is the partition order for random distributions and the
/// range order when expanding a distribution into jars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    kinds: Vec<ContentKind>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            ContentKind::new("worms", -5),
            ContentKind::new("orange-marmalade", 3),
            ContentKind::new("lemon-marmalade", 2),
        ])
    }
}

impl Catalog {
    pub fn new(kinds: Vec<ContentKind>) -> Self {
        Self { kinds }
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn get(&self, id: KindId) -> Option<&ContentKind> {
        self.kinds.get(id.0)
    }

    /// Look up a kind by name
    pub fn find(&self, name: &str) -> Option<KindId> {
        self.kinds.iter().position(|k| k.name == name).map(KindId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (KindId, &ContentKind)> {
        self.kinds.iter().enumerate().map(|(i, k)| (KindId(i), k))
    }
}

impl std::ops::Index<KindId> for Catalog {
    type Output = ContentKind;

    fn index(&self, id: KindId) -> &ContentKind {
        &self.kinds[id.0]
    }
}
