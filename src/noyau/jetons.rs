// src/noyau/jetons.rs

use tracing::trace;

use super::erreur::EvalError;
use super::operateurs::{BinOp, Operator};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Num(f64),
    Op(Operator),
    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5, 7.) : au plus un '.' par littéral
/// - opérateurs + - * / ^
/// - parenthèses ( )
///
/// Moins unaire : un '-' est `Neg` s'il arrive en tête, après '(' ou après
/// un autre opérateur (binaire ou unaire). Sinon c'est la soustraction.
pub fn tokenize(s: &str) -> Result<Vec<Token>, EvalError> {
    let mut out: Vec<Token> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre : chiffres + un seul point. Un second '.' démarre le jeton suivant.
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut point_vu = false;
            while i < chars.len() {
                let d = chars[i];
                if d == '.' {
                    if point_vu {
                        break;
                    }
                    point_vu = true;
                } else if !d.is_ascii_digit() {
                    break;
                }
                i += 1;
            }

            let literal: String = chars[start..i].iter().collect();
            let valeur = literal
                .parse::<f64>()
                .map_err(|_| EvalError::InvalidNumber { literal })?;
            out.push(Token::Num(valeur));
            continue;
        }

        let tok = match c {
            '(' => Token::LPar,
            ')' => Token::RPar,
            '+' => Token::Op(Operator::Binary(BinOp::Add)),
            '*' => Token::Op(Operator::Binary(BinOp::Mul)),
            '/' => Token::Op(Operator::Binary(BinOp::Div)),
            '^' => Token::Op(Operator::Binary(BinOp::Pow)),
            '-' => {
                // regard arrière sur le dernier jeton émis
                let unaire = matches!(out.last(), None | Some(Token::LPar | Token::Op(_)));
                if unaire {
                    Token::Op(Operator::Neg)
                } else {
                    Token::Op(Operator::Binary(BinOp::Sub))
                }
            }
            _ => return Err(EvalError::Lex { character: c }),
        };
        out.push(tok);
        i += 1;
    }

    trace!(nb = out.len(), "tokenize");
    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte, séparés par des espaces.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Token::Num(v) => format!("{v}"),
            Token::Op(op) => op.symbole().to_string(),
            Token::LPar => "(".to_string(),
            Token::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
