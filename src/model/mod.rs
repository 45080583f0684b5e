//! Per-widget state machines for the six illustrative bond models.
//!
//! Every model is a two-state toggle ({Hidden, Revealed}, initial Hidden,
//! no terminal state) owned exclusively by the mounted instance. Switching
//! the selection mounts a fresh model, so reveal state never survives a
//! remount. The metallic model additionally owns its electron-gas
//! particles; everything else renders purely from `Reveal` plus the
//! application's animation frame.

use rand::Rng;

use crate::catalog::BondKind;

/// Number of electron-gas particles the metallic model spawns on reveal.
pub const ELECTRON_COUNT: usize = 20;

/// The two states of a widget's toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Hidden,
    Revealed,
}

impl Reveal {
    /// Flip Hidden -> Revealed -> Hidden.
    pub fn toggle(&mut self) {
        *self = match *self {
            Reveal::Hidden => Reveal::Revealed,
            Reveal::Revealed => Reveal::Hidden,
        };
    }

    pub fn is_revealed(self) -> bool {
        self == Reveal::Revealed
    }
}

/// One decorative electron-gas particle, in unit-square coordinates.
///
/// Positions are cosmetic only: seed-free randomness, re-rolled every time
/// the metallic model enters Revealed.
#[derive(Debug, Clone)]
pub struct Electron {
    pub x: f32,
    pub y: f32,
    dx: f32,
    dy: f32,
}

impl Electron {
    fn spawn<R: Rng>(rng: &mut R) -> Self {
        Electron {
            x: rng.random_range(0.0..1.0),
            y: rng.random_range(0.0..1.0),
            dx: rng.random_range(-0.03..0.03),
            dy: rng.random_range(-0.03..0.03),
        }
    }

    /// Drift one animation tick, wrapping at the unit-square edges.
    fn step(&mut self) {
        self.x = wrap_unit(self.x + self.dx);
        self.y = wrap_unit(self.y + self.dy);
    }
}

/// Wrap into [0, 1). rem_euclid alone can round up to exactly 1.0 for tiny
/// negative inputs.
fn wrap_unit(v: f32) -> f32 {
    let v = v.rem_euclid(1.0);
    if v >= 1.0 { 0.0 } else { v }
}

/// Shared electron pairs of a water molecule.
#[derive(Debug, Default)]
pub struct CovalentModel {
    pub reveal: Reveal,
}

/// Cu⁺ lattice in its electron gas.
#[derive(Debug, Default)]
pub struct MetallicModel {
    pub reveal: Reveal,
    pub electrons: Vec<Electron>,
}

impl MetallicModel {
    fn toggle(&mut self) {
        self.reveal.toggle();
        match self.reveal {
            Reveal::Revealed => {
                let mut rng = rand::rng();
                self.electrons = (0..ELECTRON_COUNT)
                    .map(|_| Electron::spawn(&mut rng))
                    .collect();
            }
            Reveal::Hidden => self.electrons.clear(),
        }
    }

    fn tick(&mut self) {
        if self.reveal.is_revealed() {
            for electron in &mut self.electrons {
                electron.step();
            }
        }
    }
}

/// Na⁺ and Cl⁻ ions attracting each other.
#[derive(Debug, Default)]
pub struct IonicModel {
    pub reveal: Reveal,
}

/// Two argon atoms with temporary induced dipoles.
#[derive(Debug, Default)]
pub struct VanDerWaalsModel {
    pub reveal: Reveal,
}

/// Two antiparallel HCl molecules with permanent dipoles.
#[derive(Debug, Default)]
pub struct DipoleModel {
    pub reveal: Reveal,
}

/// Two water molecules joined by a hydrogen bridge.
#[derive(Debug, Default)]
pub struct HydrogenModel {
    pub reveal: Reveal,
}

/// The mounted illustrative widget: a tagged union over the six models.
///
/// The dispatcher matches exhaustively everywhere, so the compiler tracks
/// the widget set; there is no dynamic dispatch.
#[derive(Debug)]
pub enum BondModel {
    Covalent(CovalentModel),
    Metallic(MetallicModel),
    Ionic(IonicModel),
    VanDerWaals(VanDerWaalsModel),
    Dipole(DipoleModel),
    Hydrogen(HydrogenModel),
}

impl BondModel {
    /// Mount a fresh model for the given kind, in Hidden state.
    pub fn mount(kind: BondKind) -> Self {
        match kind {
            BondKind::Covalent => BondModel::Covalent(CovalentModel::default()),
            BondKind::Metallic => BondModel::Metallic(MetallicModel::default()),
            BondKind::Ionic => BondModel::Ionic(IonicModel::default()),
            BondKind::VanDerWaals => {
                BondModel::VanDerWaals(VanDerWaalsModel::default())
            }
            BondKind::Dipole => BondModel::Dipole(DipoleModel::default()),
            BondKind::Hydrogen => BondModel::Hydrogen(HydrogenModel::default()),
        }
    }

    /// The kind this model was mounted for.
    pub fn kind(&self) -> BondKind {
        match self {
            BondModel::Covalent(_) => BondKind::Covalent,
            BondModel::Metallic(_) => BondKind::Metallic,
            BondModel::Ionic(_) => BondKind::Ionic,
            BondModel::VanDerWaals(_) => BondKind::VanDerWaals,
            BondModel::Dipole(_) => BondKind::Dipole,
            BondModel::Hydrogen(_) => BondKind::Hydrogen,
        }
    }

    pub fn reveal(&self) -> Reveal {
        match self {
            BondModel::Covalent(m) => m.reveal,
            BondModel::Metallic(m) => m.reveal,
            BondModel::Ionic(m) => m.reveal,
            BondModel::VanDerWaals(m) => m.reveal,
            BondModel::Dipole(m) => m.reveal,
            BondModel::Hydrogen(m) => m.reveal,
        }
    }

    /// Flip the reveal toggle. The metallic model also spawns or clears
    /// its electron gas here.
    pub fn toggle(&mut self) {
        match self {
            BondModel::Covalent(m) => m.reveal.toggle(),
            BondModel::Metallic(m) => m.toggle(),
            BondModel::Ionic(m) => m.reveal.toggle(),
            BondModel::VanDerWaals(m) => m.reveal.toggle(),
            BondModel::Dipole(m) => m.reveal.toggle(),
            BondModel::Hydrogen(m) => m.reveal.toggle(),
        }
    }

    /// Advance decorative motion one animation tick. Application state is
    /// untouched; only the metallic electron gas has per-tick motion.
    pub fn tick(&mut self) {
        if let BondModel::Metallic(m) = self {
            m.tick();
        }
    }

    /// Label of the toggle button for the current state.
    pub fn toggle_label(&self) -> &'static str {
        match (self, self.reveal()) {
            (BondModel::Covalent(_), Reveal::Hidden) => "Bindung aktivieren",
            (BondModel::Covalent(_), Reveal::Revealed) => "Stoppen",
            (BondModel::Metallic(_), Reveal::Hidden) => "Elektronengas anzeigen",
            (BondModel::Metallic(_), Reveal::Revealed) => "Elektronengas stoppen",
            (BondModel::Ionic(_), Reveal::Hidden) => "Anziehung zeigen",
            (BondModel::Ionic(_), Reveal::Revealed) => "Trennen",
            (BondModel::VanDerWaals(_), Reveal::Hidden) => "Temporäre Dipole zeigen",
            (BondModel::VanDerWaals(_), Reveal::Revealed) => "Kräfte ausblenden",
            (BondModel::Dipole(_), Reveal::Hidden) => "Dipole anzeigen",
            (BondModel::Dipole(_), Reveal::Revealed) => "Dipole ausblenden",
            (BondModel::Hydrogen(_), Reveal::Hidden) => "H-Brücken anzeigen",
            (BondModel::Hydrogen(_), Reveal::Revealed) => "Brücken ausblenden",
        }
    }

    /// One-line caption shown under the toggle button.
    pub fn caption(&self) -> &'static str {
        match self {
            BondModel::Covalent(_) => {
                "Elektronen werden zwischen Wasserstoff und Sauerstoff geteilt"
            }
            BondModel::Metallic(_) => {
                "Metallionen im \"Elektronengas\" der abgegebenen Valenzelektronen"
            }
            BondModel::Ionic(_) => {
                "Elektrostatische Anziehung zwischen Na⁺ und Cl⁻ Ionen"
            }
            BondModel::VanDerWaals(_) => {
                "Schwache Anziehungskräfte durch temporäre Ladungsverschiebungen"
            }
            BondModel::Dipole(_) => {
                "Ausrichtung von HCl-Molekülen aufgrund permanenter Dipole"
            }
            BondModel::Hydrogen(_) => {
                "Wasserstoffbrückenbindungen zwischen Wassermolekülen"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_two_cycle() {
        let mut reveal = Reveal::default();
        assert_eq!(reveal, Reveal::Hidden);
        reveal.toggle();
        assert_eq!(reveal, Reveal::Revealed);
        reveal.toggle();
        assert_eq!(reveal, Reveal::Hidden);
    }

    #[test]
    fn test_mount_starts_hidden() {
        for kind in BondKind::ALL {
            let model = BondModel::mount(kind);
            assert_eq!(model.kind(), kind);
            assert_eq!(model.reveal(), Reveal::Hidden);
        }
    }

    #[test]
    fn test_metallic_electron_gas() {
        let mut model = BondModel::mount(BondKind::Metallic);

        let BondModel::Metallic(ref inner) = model else {
            panic!("expected metallic model");
        };
        assert!(inner.electrons.is_empty());

        model.toggle();
        let BondModel::Metallic(ref inner) = model else {
            panic!("expected metallic model");
        };
        assert_eq!(inner.electrons.len(), ELECTRON_COUNT);
        for e in &inner.electrons {
            assert!((0.0..1.0).contains(&e.x));
            assert!((0.0..1.0).contains(&e.y));
        }

        model.toggle();
        let BondModel::Metallic(ref inner) = model else {
            panic!("expected metallic model");
        };
        assert!(inner.electrons.is_empty());
    }

    #[test]
    fn test_electron_drift_stays_in_bounds() {
        let mut model = MetallicModel::default();
        model.toggle();
        for _ in 0..200 {
            model.tick();
        }
        for e in &model.electrons {
            assert!((0.0..1.0).contains(&e.x));
            assert!((0.0..1.0).contains(&e.y));
        }
    }

    #[test]
    fn test_toggle_labels_follow_state() {
        let mut model = BondModel::mount(BondKind::Ionic);
        assert_eq!(model.toggle_label(), "Anziehung zeigen");
        model.toggle();
        assert_eq!(model.toggle_label(), "Trennen");
    }
}
