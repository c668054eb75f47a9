//! The built-in atlas: the fixed set of categories and functors this tool renders.
//!
//! Everything here is hand-authored. Positions are manual layout constants;
//! there is no layout algorithm.

use crate::domain::{Category, Diagram};

/// The map of classical categories and the functors between them.
pub fn default_atlas() -> Diagram {
    let mut diagram = Diagram::new();

    diagram
        .add_category("Set", Category::new([0.0, 0.0, -1.0], "grey", "diamond"))
        .add_category("Top", Category::new([-2.0, 2.0, 1.0], "blue", "circle"))
        .add_category("Grp", Category::new([2.0, 2.0, 1.0], "red", "square"))
        .add_category("Ab", Category::new([2.0, 0.0, 1.0], "orange", "square"))
        .add_category("Vect_k", Category::new([2.0, -2.0, 1.0], "green", "cross"))
        .add_category("Ring", Category::new([0.0, 3.0, 1.0], "purple", "triangle-up"));

    diagram
        .add_functor("Top", "Set", "U (Forgetful)")
        .add_functor("Grp", "Set", "U (Forgetful)")
        .add_functor("Vect_k", "Set", "U (Forgetful)")
        .add_functor("Ring", "Set", "U (Forgetful)")
        .add_functor("Ab", "Grp", "Inclusion")
        .add_functor("Set", "Grp", "F (Free Group)")
        .add_functor("Set", "Vect_k", "F (Free Vector Space)")
        .add_functor("Top", "Grp", "π₁ (Fundamental Group)")
        .add_functor("Top", "Ab", "Hₙ (Homology)")
        .add_functor("Ring", "Grp", "Group of Units");

    diagram
}
