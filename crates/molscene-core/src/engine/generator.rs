use super::bonds::{Bond, infer_bonds};
use super::config::SceneConfig;
use crate::core::models::atom::Atom;
use crate::core::models::primitives::{Cylinder, Sphere};
use crate::core::models::scene::Scene;
use crate::core::utils::geometry::{midpoint, normalize};
use tracing::{debug, instrument};

/// Projects atoms and their inferred bonds into ball-and-stick primitives.
#[derive(Debug, Clone)]
pub struct SceneGenerator<'a> {
    config: &'a SceneConfig,
}

impl<'a> SceneGenerator<'a> {
    pub fn new(config: &'a SceneConfig) -> Self {
        Self { config }
    }

    pub fn sphere_for(&self, atom: &Atom) -> Sphere {
        let style = &self.config.style;
        Sphere {
            center: atom.position,
            radius: style.atom_radius(),
            color: style.palette.color_for_label(&atom.element),
        }
    }

    pub fn cylinder_for(&self, atoms: &[Atom], bond: &Bond) -> Cylinder {
        let style = &self.config.style;
        let start = &atoms[bond.first].position;
        let end = &atoms[bond.second].position;
        Cylinder {
            center: midpoint(start, end),
            axis: normalize(&(end - start)),
            radius: style.bond_radius(),
            length: bond.distance,
            color: style.bond_color,
        }
    }

    /// Builds the scene for `atoms`.
    ///
    /// The result holds one sphere per atom in input order and one cylinder per
    /// bonded pair in pair enumeration order. An empty atom list produces a scene
    /// with only the ambient light, camera and light source.
    #[instrument(skip_all, name = "scene_generation")]
    pub fn generate(&self, atoms: &[Atom]) -> Scene {
        let mut scene = Scene::new(self.config.ambient, self.config.camera, self.config.light);

        scene.spheres = atoms.iter().map(|atom| self.sphere_for(atom)).collect();

        let bonds = infer_bonds(atoms, &self.config.bonds);
        scene.cylinders = bonds
            .iter()
            .map(|bond| self.cylinder_for(atoms, bond))
            .collect();

        debug!(
            "Generated {} spheres and {} cylinders from {} candidate pairs.",
            scene.spheres.len(),
            scene.cylinders.len(),
            atoms.len() * atoms.len().saturating_sub(1) / 2
        );
        scene
    }
}
