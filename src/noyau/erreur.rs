// src/noyau/erreur.rs
//
// Taxonomie des erreurs du pipeline (jetons -> postfix -> valeur).
// Chaque étape renvoie la première erreur rencontrée, sans la ré-emballer.

use thiserror::Error;

use super::operateurs::Operator;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Tokenizer : caractère hors alphabet.
    #[error("caractère inattendu: '{character}'")]
    Lex { character: char },

    /// Tokenizer : littéral numérique illisible (ex: ".").
    #[error("nombre invalide: \"{literal}\"")]
    InvalidNumber { literal: String },

    /// Conversion postfix : parenthèse fermante orpheline ou '(' jamais fermée.
    #[error("parenthèses mal appariées")]
    MismatchedParentheses,

    /// Évaluation : opérateur sans assez d'opérandes sur la pile.
    #[error("opérandes insuffisants pour '{operator}'")]
    InsufficientOperands { operator: Operator },

    #[error("division par zéro")]
    DivideByZero,

    /// Évaluation : la pile finale ne contient pas exactement une valeur.
    #[error("expression mal formée ({remaining} valeurs restantes)")]
    MalformedExpression { remaining: usize },

    /// Puissance hors domaine réel (ex: base négative, exposant fractionnaire).
    #[error("puissance hors domaine: {base}^{exponent}")]
    Domain { base: f64, exponent: f64 },

    /// Puissance dont le résultat dépasse f64 (ex: 10^400).
    #[error("dépassement de capacité: {base}^{exponent}")]
    Overflow { base: f64, exponent: f64 },
}
