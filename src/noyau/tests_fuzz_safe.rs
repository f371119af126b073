//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte les refus attendus (division par zéro, exposant, longueur…)
//! - invariant clé : même entrée => même sortie, jamais de panique

use std::time::{Duration, Instant};

use super::{evaluer, ErreurEval, Nombre, LONGUEUR_MAX};

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
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

/// Égalité d'issue tolérante à NaN (NaN != NaN en f64).
fn meme_issue(expr: &str) {
    let a = format!("{:?}", evaluer(expr));
    let b = format!("{:?}", evaluer(expr));
    assert_eq!(a, b, "non déterministe: {expr:?}");
}

fn is_erreur_attendue(e: &ErreurEval) -> bool {
    // Liste blanche : refus *normaux* pour des expressions bien formées.
    matches!(
        e,
        ErreurEval::DivisionParZero
            | ErreurEval::ExposantTropGrand(_)
            | ErreurEval::TropLong { .. }
            | ErreurEval::Calcul(_)
    )
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(10)),
        2 => format!("{}", rng.pick(1000)),
        3 => format!("{}.{}", rng.pick(10), rng.pick(100)),
        4 => format!("-{}", rng.pick(13)),
        _ => format!("(-{})", rng.pick(5)),
    }
}

fn gen_op(rng: &mut Rng) -> &'static str {
    match rng.pick(7) {
        0 => "+",
        1 => "-",
        2 => "*",
        3 => "/",
        4 => "//",
        5 => "%",
        _ => "**",
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 || rng.pick(4) == 0 {
        return gen_atom(rng);
    }
    let a = gen_expr(rng, depth - 1);
    let op = gen_op(rng);
    let b = gen_expr(rng, depth - 1);
    if rng.pick(2) == 0 {
        format!("({a} {op} {b})")
    } else {
        format!("{a}{op}{b}")
    }
}

/// Mutation : insère un caractère arbitraire (texte hostile).
fn muter(rng: &mut Rng, s: &str) -> String {
    const ALPHABET: &[char] = &[
        '(', ')', '+', '*', '/', '.', 'e', '_', 'x', '\'', '=', '<', '^', '~', ',', ' ', '9', 'j',
    ];
    let chars: Vec<char> = s.chars().collect();
    let pos = rng.pick(chars.len() as u32 + 1) as usize;
    let c = ALPHABET[rng.pick(ALPHABET.len() as u32) as usize];
    let mut out: String = chars[..pos].iter().collect();
    out.push(c);
    out.extend(chars[pos..].iter());
    out
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_refus_attendus() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        meme_issue(&expr);

        match evaluer(&expr) {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_mutations_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let base = gen_expr(&mut rng, 3);
        let expr = muter(&mut rng, &base);

        // toute issue est classée : une valeur ou une erreur, jamais une panique
        meme_issue(&expr);
    }
}

#[test]
fn fuzz_safe_imbrication_maximale() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 99 parenthèses ouvrantes + "1" + 99 fermantes = 199 caractères
    let profond = format!("{}1{}", "(".repeat(99), ")".repeat(99));
    assert!(profond.chars().count() <= LONGUEUR_MAX);
    assert_eq!(evaluer(&profond), Ok(Nombre::from(1_i64)));

    // chaîne de signes unaires
    let signes = format!("{}7", "-".repeat(198));
    assert_eq!(evaluer(&signes), Ok(Nombre::from(7_i64)));

    // tour de puissances : chaque exposant intermédiaire dépasse vite la garde
    let tour = vec!["2"; 60].join("**");
    assert!(matches!(
        evaluer(&tour),
        Err(ErreurEval::ExposantTropGrand(_))
    ));

    budget(t0, max);
}
