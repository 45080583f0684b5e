// Integration tests for the bond catalog

use bondtty::catalog::{BondCatalog, BondCategory, BondKind, CatalogError};

#[test]
fn test_catalog_covers_the_closed_kind_set() {
    let catalog = BondCatalog::new();
    assert_eq!(catalog.entries().len(), BondKind::ALL.len());

    for kind in BondKind::ALL {
        let entry = catalog.entry(kind);
        assert_eq!(entry.kind, kind);

        let by_id = catalog.get(kind.id()).expect("id lookup failed");
        assert_eq!(by_id.kind, kind);
        assert_eq!(by_id.title, entry.title);
    }
}

#[test]
fn test_unknown_id_is_an_error() {
    let catalog = BondCatalog::new();
    match catalog.get("plasma") {
        Err(CatalogError::UnknownId { id }) => assert_eq!(id, "plasma"),
        other => panic!("expected UnknownId, got {:?}", other.map(|e| e.kind)),
    }
}

#[test]
fn test_ids_are_unique() {
    let catalog = BondCatalog::new();
    let mut ids: Vec<&str> = catalog.entries().iter().map(|e| e.kind.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), catalog.entries().len());
}

#[test]
fn test_insertion_order_groups_categories() {
    let catalog = BondCatalog::new();
    let categories: Vec<BondCategory> =
        catalog.entries().iter().map(|e| e.category).collect();
    assert_eq!(
        categories,
        vec![
            BondCategory::Intramolecular,
            BondCategory::Intramolecular,
            BondCategory::Intramolecular,
            BondCategory::Intermolecular,
            BondCategory::Intermolecular,
            BondCategory::Intermolecular,
        ]
    );
}

#[test]
fn test_display_texts() {
    let catalog = BondCatalog::new();
    assert_eq!(
        catalog.entry(BondKind::Covalent).title,
        "Elektronenpaarbindung (kovalente Bindung)"
    );
    assert_eq!(catalog.entry(BondKind::Metallic).title, "Metallbindung");
    assert_eq!(
        catalog.entry(BondKind::Covalent).example,
        "Wassermolekül (H₂O)"
    );
    assert_eq!(
        catalog.entry(BondKind::Hydrogen).category.badge(),
        "Zwischenmolekulare Bindung"
    );
}
