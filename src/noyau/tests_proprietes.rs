//! Propriétés du noyau, une par contrat public.

use super::{evaluer, format_nombre, ErreurEval, Nombre, LONGUEUR_MAX};

fn txt(s: &str) -> String {
    match evaluer(s) {
        Ok(n) => format_nombre(&n),
        Err(e) => panic!("evaluer({s:?}) erreur: {e}"),
    }
}

#[test]
fn valeurs_correctes() {
    assert_eq!(txt("(1 + 2) * (3 - 4)"), "-3");
    assert_eq!(txt("10 / 4"), "2.5");
    assert_eq!(txt("10 // 4"), "2");
    assert_eq!(txt("10 % 4"), "2");
    assert_eq!(txt("-10 % 4"), "2");
    assert_eq!(txt("10.5 // 4"), "2.0");
    assert_eq!(txt("2 ** 0.5"), "1.4142135623730951");
    assert_eq!(txt("(-2) ** 3"), "-8");
    assert_eq!(txt("(-2) ** -1"), "-0.5");
    assert_eq!(txt("1e3 + 1"), "1001.0");
    // division vraie entière : arrondi correct même au-delà de 2**53
    assert_eq!(txt("(2**12)**12 / 3"), "7.433581732843541e+42");
}

#[test]
fn entree_vide() {
    assert_eq!(evaluer(""), Err(ErreurEval::EntreeVide));
    assert_eq!(evaluer("   "), Err(ErreurEval::EntreeVide));
}

#[test]
fn trop_long() {
    let s = "1+".repeat(100) + "1";
    assert!(s.chars().count() > LONGUEUR_MAX);
    assert!(matches!(evaluer(&s), Err(ErreurEval::TropLong { .. })));

    // refusée même si le texte est du charabia : borne vérifiée avant lecture
    let charabia = "$".repeat(LONGUEUR_MAX + 1);
    assert!(matches!(
        evaluer(&charabia),
        Err(ErreurEval::TropLong { .. })
    ));
}

#[test]
fn divisions_par_zero() {
    for s in ["1/0", "1//0", "1%0"] {
        assert_eq!(evaluer(s), Err(ErreurEval::DivisionParZero), "{s:?}");
    }
}

#[test]
fn exposants() {
    assert!(matches!(
        evaluer("2**99999"),
        Err(ErreurEval::ExposantTropGrand(_))
    ));
    assert_eq!(evaluer("2**12"), Ok(Nombre::from(4096_i64)));
}

#[test]
fn exemple_documente() {
    assert_eq!(evaluer("(123 + 456) * 789 / 12"), Ok(Nombre::Reel(38077.25)));
}

#[test]
fn rien_ne_s_execute() {
    for s in [
        "1 + ",
        "(1+2",
        "__import__('os')",
        "a+1",
        "open('/etc/passwd').read()",
        "().__class__",
        "exec('1')",
        "[x for x in ()]",
        "2(3)",
    ] {
        match evaluer(s) {
            Err(ErreurEval::Syntaxe(_)) | Err(ErreurEval::SyntaxeNonSupportee(_)) => {}
            autre => panic!("{s:?} : attendu un refus de syntaxe, obtenu {autre:?}"),
        }
    }
}

#[test]
fn idempotence() {
    for s in ["(123 + 456) * 789 / 12", "2**12", "1/0", "a+1", "", "7 % -3"] {
        assert_eq!(evaluer(s), evaluer(s), "{s:?}");
    }
}

#[test]
fn glyphes_d_affichage() {
    assert_eq!(evaluer("2×3÷4"), evaluer("2*3/4"));
    assert_eq!(evaluer("2×3÷4"), Ok(Nombre::Reel(1.5)));
}
