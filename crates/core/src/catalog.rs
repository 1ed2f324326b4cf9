//! Bug catalog: the fixed set of clickable bugs.
//!
//! A catalog is built once at startup and never mutated. Entries keep their
//! insertion order, which is also the order the shell lays the bugs out in.

use crate::error::GameError;
use crate::types::MAX_CATALOG_BUGS;

/// Position of a bug inside its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BugSlot(pub u8);

impl BugSlot {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Static description of one bug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BugDescriptor {
    pub image_ref: String,
    pub is_friendly: bool,
}

impl BugDescriptor {
    pub fn friendly(image_ref: impl Into<String>) -> Self {
        Self {
            image_ref: image_ref.into(),
            is_friendly: true,
        }
    }

    pub fn hostile(image_ref: impl Into<String>) -> Self {
        Self {
            image_ref: image_ref.into(),
            is_friendly: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BugEntry {
    pub id: String,
    pub descriptor: BugDescriptor,
}

/// Immutable, ordered mapping from bug identifier to descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BugCatalog {
    entries: Vec<BugEntry>,
}

impl BugCatalog {
    /// Build a catalog from `(id, descriptor)` pairs.
    ///
    /// Fails on an empty catalog, empty or duplicate ids, or more than
    /// [`MAX_CATALOG_BUGS`] entries.
    pub fn new<I, S>(entries: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = (S, BugDescriptor)>,
        S: Into<String>,
    {
        let mut out: Vec<BugEntry> = Vec::new();
        for (id, descriptor) in entries {
            let id = id.into();
            if id.is_empty() {
                return Err(GameError::InvalidCatalog("empty bug identifier".into()));
            }
            if out.iter().any(|e| e.id == id) {
                return Err(GameError::InvalidCatalog(format!(
                    "duplicate bug identifier {:?}",
                    id
                )));
            }
            if out.len() == MAX_CATALOG_BUGS {
                return Err(GameError::InvalidCatalog(format!(
                    "more than {} bugs",
                    MAX_CATALOG_BUGS
                )));
            }
            out.push(BugEntry { id, descriptor });
        }
        if out.is_empty() {
            return Err(GameError::InvalidCatalog("no bugs".into()));
        }
        Ok(Self { entries: out })
    }

    /// The four-bug catalog of the reference game.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                BugEntry {
                    id: "LADY_BUG".into(),
                    descriptor: BugDescriptor::friendly("images/ladybug.png"),
                },
                BugEntry {
                    id: "BEE".into(),
                    descriptor: BugDescriptor::friendly("images/bee.png"),
                },
                BugEntry {
                    id: "MITE".into(),
                    descriptor: BugDescriptor::hostile("images/mite.png"),
                },
                BugEntry {
                    id: "SLUG".into(),
                    descriptor: BugDescriptor::hostile("images/slug.png"),
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a bug identifier to its slot.
    pub fn lookup(&self, bug_id: &str) -> Option<BugSlot> {
        self.entries
            .iter()
            .position(|e| e.id == bug_id)
            .map(|i| BugSlot(i as u8))
    }

    pub fn get(&self, slot: BugSlot) -> Option<&BugEntry> {
        self.entries.get(slot.index())
    }

    /// Iterate entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (BugSlot, &BugEntry)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (BugSlot(i as u8), e))
    }

    /// Number of non-friendly (target) bugs.
    pub fn hostile_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| !e.descriptor.is_friendly)
            .count()
    }
}

impl Default for BugCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_layout() {
        let catalog = BugCatalog::standard();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.hostile_count(), 2);

        let ids: Vec<&str> = catalog.iter().map(|(_, e)| e.id.as_str()).collect();
        assert_eq!(ids, ["LADY_BUG", "BEE", "MITE", "SLUG"]);

        let mite = catalog.lookup("MITE").unwrap();
        assert_eq!(mite, BugSlot(2));
        assert!(!catalog.get(mite).unwrap().descriptor.is_friendly);
        assert!(catalog.lookup("mite").is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = BugCatalog::new([
            ("ANT", BugDescriptor::hostile("a.png")),
            ("ANT", BugDescriptor::friendly("b.png")),
        ])
        .unwrap_err();
        assert!(matches!(err, GameError::InvalidCatalog(_)));
    }

    #[test]
    fn rejects_empty_catalog_and_empty_ids() {
        let none: [(&str, BugDescriptor); 0] = [];
        assert!(BugCatalog::new(none).is_err());
        assert!(BugCatalog::new([("", BugDescriptor::hostile("x.png"))]).is_err());
    }

    #[test]
    fn rejects_oversized_catalog() {
        let entries =
            (0..=MAX_CATALOG_BUGS).map(|i| (format!("BUG_{}", i), BugDescriptor::hostile("x.png")));
        assert!(BugCatalog::new(entries).is_err());

        let entries =
            (0..MAX_CATALOG_BUGS).map(|i| (format!("BUG_{}", i), BugDescriptor::hostile("x.png")));
        assert_eq!(BugCatalog::new(entries).unwrap().len(), MAX_CATALOG_BUGS);
    }
}
