// src/noyau/rpn.rs
//
// Shunting-yard : jetons infixes -> postfix (RPN).
//
// Règles de dépilement pour un opérateur entrant `op` face au sommet `top` :
// - préc(top) > préc(op)                      => on sort `top`
// - préc(top) == préc(op) et `op` associatif G => on sort `top`
// - sinon on empile. Ainsi `^` et le moins unaire se groupent de droite à gauche.
// Une '(' bloque toujours le dépilement.

use tracing::trace;

use super::erreur::EvalError;
use super::jetons::Token;
use super::operateurs::Operator;

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Op(Add), Num(3), Op(Mul), Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Op(Mul), Op(Add)]
///
/// La sortie ne contient que des `Num` et des `Op`.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, EvalError> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Token> = Vec::new();

    for tok in tokens.iter().copied() {
        match tok {
            Token::Num(_) => out.push(tok),

            Token::Op(op) => {
                while let Some(&Token::Op(top)) = ops.last() {
                    if !doit_sortir(top, op) {
                        break;
                    }
                    out.push(Token::Op(top));
                    ops.pop();
                }
                ops.push(tok);
            }

            Token::LPar => ops.push(tok),

            Token::RPar => loop {
                match ops.pop() {
                    Some(Token::LPar) => break,
                    Some(top) => out.push(top),
                    None => return Err(EvalError::MismatchedParentheses),
                }
            },
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if matches!(top, Token::LPar | Token::RPar) {
            return Err(EvalError::MismatchedParentheses);
        }
        out.push(top);
    }

    trace!(nb = out.len(), "postfix");
    Ok(out)
}

fn doit_sortir(top: Operator, op: Operator) -> bool {
    let p_top = top.precedence();
    let p_op = op.precedence();
    p_top > p_op || (p_top == p_op && op.is_left_assoc())
}
