// Integration tests for selection and widget toggle behavior

use bondtty::catalog::BondKind;
use bondtty::model::{BondModel, Reveal, ELECTRON_COUNT};
use bondtty::ui::panes::{nav_rows, NavRow};
use bondtty::ui::App;

#[test]
fn test_initial_load_shows_covalent_hidden() {
    let app = App::new();
    assert_eq!(app.selected, BondKind::Covalent);
    assert_eq!(
        app.catalog.entry(app.selected).title,
        "Elektronenpaarbindung (kovalente Bindung)"
    );
    assert_eq!(app.model.kind(), BondKind::Covalent);
    assert_eq!(app.model.reveal(), Reveal::Hidden);
}

#[test]
fn test_selecting_every_id_mounts_the_matching_widget() {
    let mut app = App::new();
    for kind in BondKind::ALL {
        app.select_id(kind.id());
        assert_eq!(app.selected, kind);

        // Detail projection shows exactly this entry
        let entry = app.catalog.entry(app.selected);
        assert_eq!(entry.kind, kind);
        assert!(!entry.title.is_empty());
        assert!(!entry.description.is_empty());
        assert!(!entry.example.is_empty());

        // Dispatcher mounted the matching widget, fresh and hidden
        assert_eq!(app.model.kind(), kind);
        assert_eq!(app.model.reveal(), Reveal::Hidden);
    }
}

#[test]
fn test_exactly_one_nav_row_active() {
    let mut app = App::new();
    for kind in BondKind::ALL {
        app.select(kind);
        let active: Vec<BondKind> = nav_rows(&app.catalog, app.selected)
            .iter()
            .filter_map(|row| match row {
                NavRow::Entry {
                    kind, active: true, ..
                } => Some(*kind),
                _ => None,
            })
            .collect();
        assert_eq!(active, vec![kind]);
    }
}

#[test]
fn test_toggle_is_a_two_cycle() {
    let mut app = App::new();
    assert_eq!(app.model.reveal(), Reveal::Hidden);
    app.toggle_model();
    assert_eq!(app.model.reveal(), Reveal::Revealed);
    app.toggle_model();
    assert_eq!(app.model.reveal(), Reveal::Hidden);
}

#[test]
fn test_remount_resets_reveal_state() {
    let mut app = App::new();
    app.select(BondKind::Ionic);
    app.toggle_model();
    assert_eq!(app.model.reveal(), Reveal::Revealed);

    // Switching away and back mounts a fresh widget
    app.select(BondKind::Covalent);
    app.select(BondKind::Ionic);
    assert_eq!(app.model.reveal(), Reveal::Hidden);
}

#[test]
fn test_metallic_scenario() {
    let mut app = App::new();
    app.select_id("metallic");
    assert_eq!(app.catalog.entry(app.selected).title, "Metallbindung");
    assert_eq!(app.model.reveal(), Reveal::Hidden);

    let BondModel::Metallic(ref inner) = app.model else {
        panic!("expected metallic model");
    };
    assert!(inner.electrons.is_empty());

    // Reveal spawns the electron gas within the widget bounds
    app.toggle_model();
    let BondModel::Metallic(ref inner) = app.model else {
        panic!("expected metallic model");
    };
    assert_eq!(inner.electrons.len(), ELECTRON_COUNT);
    for e in &inner.electrons {
        assert!((0.0..1.0).contains(&e.x));
        assert!((0.0..1.0).contains(&e.y));
    }

    // Hiding clears it again
    app.toggle_model();
    let BondModel::Metallic(ref inner) = app.model else {
        panic!("expected metallic model");
    };
    assert!(inner.electrons.is_empty());
}

#[test]
fn test_unknown_id_falls_back_to_default() {
    let mut app = App::new();
    app.select(BondKind::Ionic);
    app.select_id("plasma");
    assert_eq!(app.selected, BondKind::Covalent);
    assert_eq!(app.model.kind(), BondKind::Covalent);
    assert_eq!(app.model.reveal(), Reveal::Hidden);
}

#[test]
fn test_animation_tick_leaves_application_state_alone() {
    let mut app = App::new();
    app.select(BondKind::Metallic);
    app.toggle_model();

    let frame_before = app.anim_frame();
    for _ in 0..10 {
        app.tick();
    }

    assert_eq!(app.anim_frame(), frame_before + 10);
    assert_eq!(app.selected, BondKind::Metallic);
    assert_eq!(app.model.reveal(), Reveal::Revealed);
    let BondModel::Metallic(ref inner) = app.model else {
        panic!("expected metallic model");
    };
    assert_eq!(inner.electrons.len(), ELECTRON_COUNT);
}

#[test]
fn test_selection_cycle_wraps_in_display_order() {
    let mut app = App::new();
    for expected in BondKind::ALL.iter().skip(1) {
        app.select_next();
        assert_eq!(app.selected, *expected);
    }
    app.select_next();
    assert_eq!(app.selected, BondKind::Covalent);
    app.select_prev();
    assert_eq!(app.selected, BondKind::Hydrogen);
}
