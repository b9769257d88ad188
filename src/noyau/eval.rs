//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> postfix -> pile de valeurs -> f64
//!
//! Chaque étape est pure : même entrée, même sortie (ou même erreur).
//! La première erreur court-circuite le reste, telle quelle.

use num_traits::Zero;
use tracing::debug;

use super::erreur::EvalError;
use super::jetons::{format_tokens, tokenize, Token};
use super::operateurs::{BinOp, Operator};
use super::rpn::to_postfix;

/// Démarche : jetons + postfix rendus en texte.
#[derive(Clone, Debug, PartialEq)]
pub struct Etapes {
    pub jetons: String,
    pub postfix: String,
}

/// API publique : évalue une expression infixe.
pub fn evaluate(expr_str: &str) -> Result<f64, EvalError> {
    let jetons = tokenize(expr_str)?;
    let postfix = to_postfix(&jetons)?;
    let valeur = eval_postfix(&postfix)?;
    debug!(nb_postfix = postfix.len(), valeur, "évalué");
    Ok(valeur)
}

/// Les deux premières étapes du pipeline, rendues pour affichage.
/// N'évalue pas : "5/0" donne ses étapes, l'erreur vient de `evaluate`.
pub fn etapes(expr_str: &str) -> Result<Etapes, EvalError> {
    let jetons = tokenize(expr_str)?;
    let postfix = to_postfix(&jetons)?;
    Ok(Etapes {
        jetons: format_tokens(&jetons),
        postfix: format_tokens(&postfix),
    })
}

/// Évalue une RPN avec une pile de valeurs.
///
/// Binaire : le sommet de pile est l'opérande DROITE.
/// Fin : la pile doit contenir exactement une valeur.
pub fn eval_postfix(rpn: &[Token]) -> Result<f64, EvalError> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn.iter().copied() {
        match tok {
            Token::Num(v) => st.push(v),

            Token::Op(op) => {
                if st.len() < op.arite() {
                    return Err(EvalError::InsufficientOperands { operator: op });
                }

                let v = match op {
                    Operator::Neg => -depile(&mut st, op)?,
                    Operator::Binary(bin) => {
                        let b = depile(&mut st, op)?;
                        let a = depile(&mut st, op)?;
                        applique_binaire(bin, a, b)?
                    }
                };
                st.push(v);
            }

            // to_postfix ne laisse jamais de parenthèse
            Token::LPar | Token::RPar => return Err(EvalError::MismatchedParentheses),
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvalError::MalformedExpression {
            remaining: st.len(),
        }),
    }
}

fn depile(st: &mut Vec<f64>, op: Operator) -> Result<f64, EvalError> {
    st.pop().ok_or(EvalError::InsufficientOperands { operator: op })
}

fn applique_binaire(op: BinOp, a: f64, b: f64) -> Result<f64, EvalError> {
    let v = match op {
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
        BinOp::Mul => a * b,
        BinOp::Div => {
            if b.is_zero() {
                return Err(EvalError::DivideByZero);
            }
            a / b
        }
        BinOp::Pow => {
            // 0 ^ (négatif) : 1/0 déguisé
            if a.is_zero() && b < 0.0 {
                return Err(EvalError::DivideByZero);
            }
            let v = a.powf(b);
            // NaN sans opérande NaN => hors domaine réel
            if v.is_nan() && !a.is_nan() && !b.is_nan() {
                return Err(EvalError::Domain {
                    base: a,
                    exponent: b,
                });
            }
            if v.is_infinite() && a.is_finite() && b.is_finite() {
                return Err(EvalError::Overflow {
                    base: a,
                    exponent: b,
                });
            }
            v
        }
    };
    Ok(v)
}
