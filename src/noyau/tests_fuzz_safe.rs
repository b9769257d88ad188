//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - toute erreur doit appartenir à la taxonomie attendue (jamais de panique)

use std::time::{Duration, Instant};

use super::erreur::EvalError;
use super::evaluate;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // 0 inclus : la division par zéro doit apparaître
    let n = rng.pick(10);
    if rng.pick(4) == 0 {
        format!("{n}.5")
    } else {
        format!("{n}")
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(8) {
        0 => gen_nombre(rng),
        1 => format!("{}+{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("{}-{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("{}*{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("{}/{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("({})", gen_expr(rng, depth - 1)),
        6 => format!("-{}", gen_expr(rng, depth - 1)),
        // exposant petit : pas d’explosion
        _ => format!("({})^{}", gen_expr(rng, depth - 1), rng.pick(3)),
    }
}

/// Bruit syntaxique : caractère parasite, parenthèse en trop, opérateur doublé...
fn abime(rng: &mut Rng, expr: &str) -> String {
    let mut s = expr.to_string();
    let pos = rng.pick(s.len() as u32 + 1) as usize;
    let parasite = match rng.pick(7) {
        0 => "(",
        1 => ")",
        2 => "*",
        3 => "+",
        4 => " ",
        5 => ".",
        _ => "x",
    };
    // expr est ASCII : toute position est une frontière de char
    s.insert_str(pos, parasite);
    s
}

/// Insère des espaces aléatoires entre caractères (hors littéraux numériques).
fn espace(rng: &mut Rng, expr: &str) -> String {
    let mut out = String::with_capacity(expr.len() * 2);
    let mut prev_chiffre = false;
    for c in expr.chars() {
        let chiffre = c.is_ascii_digit() || c == '.';
        if !(prev_chiffre && chiffre) && rng.coin() {
            out.push(' ');
        }
        out.push(c);
        prev_chiffre = chiffre;
    }
    out
}

fn meme_issue(a: &Result<f64, EvalError>, b: &Result<f64, EvalError>) -> bool {
    match (a, b) {
        (Ok(x), Ok(y)) => x.to_bits() == y.to_bits() || (x.is_nan() && y.is_nan()),
        (Err(e), Err(f)) => e == f,
        _ => false,
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_espaces() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let r1 = evaluate(&expr);
        let r2 = evaluate(&expr);
        assert!(meme_issue(&r1, &r2), "non déterministe: expr={expr:?}");

        let aere = espace(&mut rng, &expr);
        let r3 = evaluate(&aere);
        assert!(
            meme_issue(&r1, &r3),
            "espaces changent le résultat: {expr:?} => {r1:?} / {aere:?} => {r3:?}"
        );

        match r1 {
            Ok(_) => seen_ok += 1,
            Err(_) => seen_err += 1,
        }
    }

    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_precedence_vs_parentheses() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..200 {
        budget(t0, max);

        // chaîne plate a op b op c ... (pas de zéro : pas de division par zéro)
        let n = 2 + rng.pick(5) as usize;
        let nombres: Vec<u32> = (0..n).map(|_| 1 + rng.pick(9)).collect();
        let ops: Vec<char> = (1..n)
            .map(|_| match rng.pick(4) {
                0 => '+',
                1 => '-',
                2 => '*',
                _ => '/',
            })
            .collect();

        let mut plat = nombres[0].to_string();
        for (op, b) in ops.iter().zip(&nombres[1..]) {
            plat.push(*op);
            plat.push_str(&b.to_string());
        }

        // même chaîne, groupée explicitement : produits d’abord, puis sommes de gauche à droite
        let mut termes: Vec<String> = vec![nombres[0].to_string()];
        let mut signes: Vec<char> = Vec::new();
        for (op, b) in ops.iter().zip(&nombres[1..]) {
            match op {
                '*' | '/' => {
                    if let Some(t) = termes.last_mut() {
                        *t = format!("({t}{op}{b})");
                    }
                }
                _ => {
                    signes.push(*op);
                    termes.push(b.to_string());
                }
            }
        }
        let mut groupe = termes[0].clone();
        for (op, t) in signes.iter().zip(&termes[1..]) {
            groupe = format!("({groupe}{op}{t})");
        }

        let a = evaluate(&plat);
        let b = evaluate(&groupe);
        assert!(
            meme_issue(&a, &b),
            "précédence: {plat:?} => {a:?} / {groupe:?} => {b:?}"
        );
    }
}

#[test]
fn fuzz_safe_entrees_abimees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..300 {
        budget(t0, max);

        let base = gen_expr(&mut rng, 3);
        let expr = abime(&mut rng, &base);

        // jamais de panique ; l’erreur, si erreur, est déterministe
        let r1 = evaluate(&expr);
        let r2 = evaluate(&expr);
        assert!(meme_issue(&r1, &r2), "non déterministe: expr={expr:?}");

        if expr.contains('x') {
            assert_eq!(r1, Err(EvalError::Lex { character: 'x' }), "expr={expr:?}");
        }
    }
}

#[test]
fn fuzz_safe_longue_chaine() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 2000 termes : le pipeline est itératif, aucune récursion
    let expr = vec!["0.5"; 2000].join(" + ");
    let v = evaluate(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);
    assert_eq!(v, 1000.0);

    // imbrication profonde de parenthèses et de moins unaires
    let profond = format!("{}1{}", "(-".repeat(500), ")".repeat(500));
    assert_eq!(evaluate(&profond), Ok(1.0));
    budget(t0, max);
}
