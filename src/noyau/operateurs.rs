// src/noyau/operateurs.rs
//
// Table fixe des opérateurs : précédence, associativité, arité.
// Non extensible : le converter et l'évaluateur font un `match` exhaustif dessus.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Binary(BinOp),
    /// Moins unaire (lexicalement '-', décidé au tokenize).
    Neg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Descripteur {
    pub precedence: u8,
    pub assoc: Assoc,
    pub arite: usize,
}

/// | op      | préc. | assoc | arité |
/// |---------|-------|-------|-------|
/// | + -     | 1     | G     | 2     |
/// | * /     | 2     | G     | 2     |
/// | ^       | 3     | D     | 2     |
/// | u-      | 4     | D     | 1     |
pub const fn descripteur(op: Operator) -> Descripteur {
    let (precedence, assoc, arite) = match op {
        Operator::Binary(BinOp::Add | BinOp::Sub) => (1, Assoc::Left, 2),
        Operator::Binary(BinOp::Mul | BinOp::Div) => (2, Assoc::Left, 2),
        Operator::Binary(BinOp::Pow) => (3, Assoc::Right, 2),
        Operator::Neg => (4, Assoc::Right, 1),
    };
    Descripteur {
        precedence,
        assoc,
        arite,
    }
}

impl Operator {
    pub const fn precedence(self) -> u8 {
        descripteur(self).precedence
    }

    pub const fn arite(self) -> usize {
        descripteur(self).arite
    }

    pub fn is_left_assoc(self) -> bool {
        descripteur(self).assoc == Assoc::Left
    }

    /// Symbole affiché (démarche / messages d'erreur).
    pub const fn symbole(self) -> &'static str {
        match self {
            Operator::Binary(BinOp::Add) => "+",
            Operator::Binary(BinOp::Sub) => "-",
            Operator::Binary(BinOp::Mul) => "*",
            Operator::Binary(BinOp::Div) => "/",
            Operator::Binary(BinOp::Pow) => "^",
            Operator::Neg => "u-",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}
