//! Noyau d'évaluation (f64)
//!
//! Organisation interne :
//! - operateurs.rs : table fixe précédence / associativité / arité
//! - jetons.rs     : tokenisation (moins unaire décidé ici)
//! - rpn.rs        : shunting-yard -> postfix
//! - eval.rs       : pile de valeurs + pipeline complet
//! - erreur.rs     : taxonomie des erreurs

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod operateurs;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{etapes, evaluate};
