//! The bond catalog: static display metadata for the six bonding types.
//!
//! The catalog is built once at startup and never mutated. Entries are kept
//! in insertion order (intramolecular bonds first), which defines the display
//! order of the navigation pane; an [`FxHashMap`] index backs string-id
//! lookups.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// The six bonding types known to the application.
///
/// This is a closed set: every UI surface dispatches over it with an
/// exhaustive match, so adding a variant is a compile-time checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondKind {
    Covalent,
    Metallic,
    Ionic,
    VanDerWaals,
    Dipole,
    Hydrogen,
}

impl BondKind {
    /// All kinds in display order (intramolecular bonds first).
    pub const ALL: [BondKind; 6] = [
        BondKind::Covalent,
        BondKind::Metallic,
        BondKind::Ionic,
        BondKind::VanDerWaals,
        BondKind::Dipole,
        BondKind::Hydrogen,
    ];

    /// Stable string id, used for lookups and logging.
    pub fn id(self) -> &'static str {
        match self {
            BondKind::Covalent => "covalent",
            BondKind::Metallic => "metallic",
            BondKind::Ionic => "ionic",
            BondKind::VanDerWaals => "vanderwaals",
            BondKind::Dipole => "dipole",
            BondKind::Hydrogen => "hydrogen",
        }
    }

    /// Resolve a string id. Returns `None` for ids outside the closed set.
    pub fn from_id(id: &str) -> Option<BondKind> {
        match id {
            "covalent" => Some(BondKind::Covalent),
            "metallic" => Some(BondKind::Metallic),
            "ionic" => Some(BondKind::Ionic),
            "vanderwaals" => Some(BondKind::VanDerWaals),
            "dipole" => Some(BondKind::Dipole),
            "hydrogen" => Some(BondKind::Hydrogen),
            _ => None,
        }
    }

    /// Position in display order (0-based).
    pub fn index(self) -> usize {
        match self {
            BondKind::Covalent => 0,
            BondKind::Metallic => 1,
            BondKind::Ionic => 2,
            BondKind::VanDerWaals => 3,
            BondKind::Dipole => 4,
            BondKind::Hydrogen => 5,
        }
    }

    /// Next kind in display order, wrapping at the end.
    pub fn next(self) -> Self {
        match self {
            BondKind::Covalent => BondKind::Metallic,
            BondKind::Metallic => BondKind::Ionic,
            BondKind::Ionic => BondKind::VanDerWaals,
            BondKind::VanDerWaals => BondKind::Dipole,
            BondKind::Dipole => BondKind::Hydrogen,
            BondKind::Hydrogen => BondKind::Covalent,
        }
    }

    /// Previous kind in display order, wrapping at the start.
    pub fn prev(self) -> Self {
        match self {
            BondKind::Covalent => BondKind::Hydrogen,
            BondKind::Metallic => BondKind::Covalent,
            BondKind::Ionic => BondKind::Metallic,
            BondKind::VanDerWaals => BondKind::Ionic,
            BondKind::Dipole => BondKind::VanDerWaals,
            BondKind::Hydrogen => BondKind::Dipole,
        }
    }
}

impl Default for BondKind {
    /// The entry shown on startup and the fail-safe fallback for unknown ids.
    fn default() -> Self {
        BondKind::Covalent
    }
}

impl fmt::Display for BondKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Whether a bond acts within a molecule or between molecules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondCategory {
    Intramolecular,
    Intermolecular,
}

impl BondCategory {
    /// Both categories in display order.
    pub const ALL: [BondCategory; 2] =
        [BondCategory::Intramolecular, BondCategory::Intermolecular];

    /// Badge label shown in the detail pane.
    pub fn badge(self) -> &'static str {
        match self {
            BondCategory::Intramolecular => "Intramolekulare Bindung",
            BondCategory::Intermolecular => "Zwischenmolekulare Bindung",
        }
    }

    /// Group heading shown in the navigation pane.
    pub fn heading(self) -> &'static str {
        match self {
            BondCategory::Intramolecular => "Intramolekulare Bindungen",
            BondCategory::Intermolecular => "Zwischenmolekulare Bindungen",
        }
    }
}

/// Display metadata for one bonding type.
#[derive(Debug, Clone)]
pub struct BondEntry {
    pub kind: BondKind,
    pub title: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub category: BondCategory,
}

/// Errors from string-id catalog lookups.
///
/// Unreachable through the UI itself, which only ever offers valid ids.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The id does not name any catalog entry.
    #[error("unknown bond id: {id}")]
    UnknownId { id: String },
}

/// The immutable bond catalog.
///
/// Invariants: exactly one entry per [`BondKind`], entries stored in
/// [`BondKind::ALL`] order, each entry in exactly one category.
pub struct BondCatalog {
    entries: Vec<BondEntry>,
    index: FxHashMap<&'static str, usize>,
}

impl BondCatalog {
    pub fn new() -> Self {
        let entries = vec![
            BondEntry {
                kind: BondKind::Covalent,
                title: "Elektronenpaarbindung (kovalente Bindung)",
                description: "Zwei Atome teilen sich ein oder mehrere Elektronenpaare, \
                              um stabile Elektronenanordnungen zu erreichen.",
                example: "Wassermolekül (H₂O)",
                category: BondCategory::Intramolecular,
            },
            BondEntry {
                kind: BondKind::Metallic,
                title: "Metallbindung",
                description: "Atome geben ihre Valenzelektronen in ein gemeinsames \
                              Elektronengas ab, was zu einer starken Anziehung zwischen \
                              den positiv geladenen Metallionen und den frei beweglichen \
                              Elektronen führt.",
                example: "Metallisches Kupfer (Cu)",
                category: BondCategory::Intramolecular,
            },
            BondEntry {
                kind: BondKind::Ionic,
                title: "Ionenbindung",
                description: "Elektrostatische Anziehung zwischen positiv geladenen \
                              Kationen und negativ geladenen Anionen.",
                example: "Natriumchlorid (NaCl)",
                category: BondCategory::Intramolecular,
            },
            BondEntry {
                kind: BondKind::VanDerWaals,
                title: "Van-der-Waals-Kräfte",
                description: "Schwache Anziehungskräfte, die durch temporäre Dipole in \
                              Molekülen entstehen.",
                example: "Wechselwirkungen zwischen Edelgasatomen",
                category: BondCategory::Intermolecular,
            },
            BondEntry {
                kind: BondKind::Dipole,
                title: "Dipol-Dipol-Wechselwirkungen",
                description: "Treten zwischen Molekülen mit permanenten Dipolen auf, bei \
                              denen positive und negative Teilladungen benachbarter \
                              Moleküle sich gegenseitig anziehen.",
                example: "Hydrogenchlorid (HCl)",
                category: BondCategory::Intermolecular,
            },
            BondEntry {
                kind: BondKind::Hydrogen,
                title: "Wasserstoffbrückenbindungen",
                description: "Eine spezielle Art der Dipol-Dipol-Wechselwirkung, die \
                              auftritt, wenn ein Wasserstoffatom kovalent an stark \
                              elektronegative Atome wie Sauerstoff, Stickstoff oder \
                              Fluor gebunden ist.",
                example: "Wassermoleküle untereinander",
                category: BondCategory::Intermolecular,
            },
        ];

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.kind.id(), i))
            .collect();

        BondCatalog { entries, index }
    }

    /// Look up an entry by string id.
    pub fn get(&self, id: &str) -> Result<&BondEntry, CatalogError> {
        self.index
            .get(id)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| CatalogError::UnknownId { id: id.to_string() })
    }

    /// Look up the entry for a kind. Infallible: the catalog covers the
    /// closed [`BondKind`] set by construction.
    pub fn entry(&self, kind: BondKind) -> &BondEntry {
        &self.entries[kind.index()]
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[BondEntry] {
        &self.entries
    }

    /// Entries of one category, in display order.
    pub fn by_category(
        &self,
        category: BondCategory,
    ) -> impl Iterator<Item = &BondEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.category == category)
    }
}

impl Default for BondCatalog {
    fn default() -> Self {
        BondCatalog::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_roundtrip() {
        for kind in BondKind::ALL {
            assert_eq!(BondKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(BondKind::from_id("plasma"), None);
        assert_eq!(BondKind::from_id(""), None);
    }

    #[test]
    fn test_display_order_cycle() {
        // next() walks ALL in order and wraps
        let mut kind = BondKind::Covalent;
        for expected in BondKind::ALL {
            assert_eq!(kind, expected);
            kind = kind.next();
        }
        assert_eq!(kind, BondKind::Covalent);

        for k in BondKind::ALL {
            assert_eq!(k.next().prev(), k);
        }
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, kind) in BondKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_category_partition() {
        let catalog = BondCatalog::new();
        let intra: Vec<_> = catalog
            .by_category(BondCategory::Intramolecular)
            .map(|e| e.kind)
            .collect();
        let inter: Vec<_> = catalog
            .by_category(BondCategory::Intermolecular)
            .map(|e| e.kind)
            .collect();

        assert_eq!(
            intra,
            vec![BondKind::Covalent, BondKind::Metallic, BondKind::Ionic]
        );
        assert_eq!(
            inter,
            vec![BondKind::VanDerWaals, BondKind::Dipole, BondKind::Hydrogen]
        );
        assert_eq!(intra.len() + inter.len(), catalog.entries().len());
    }

    #[test]
    fn test_badge_labels() {
        assert_eq!(
            BondCategory::Intramolecular.badge(),
            "Intramolekulare Bindung"
        );
        assert_eq!(
            BondCategory::Intermolecular.badge(),
            "Zwischenmolekulare Bindung"
        );
    }
}
