//! Noyau — évaluation (pipeline réel)
//!
//! normalise -> jetons -> RPN -> arbre -> évaluation validée (liste blanche)
//!
//! La liste blanche est un seul `match` exhaustif par famille d'opérateurs :
//! un opérateur ajouté à l'arbre sans décision ici ne compile pas.

use serde::Serialize;
use tracing::debug;

use super::arbre::{Noeud, OpBinaire, OpUnaire};
use super::erreur::ErreurEval;
use super::format::format_nombre;
use super::jetons::{format_tokens, tokenize};
use super::nombre::Nombre;
use super::normalise::normaliser;
use super::rpn::{format_rpn, from_rpn, to_rpn};

/// |exposant| maximal accepté pour `**`.
pub const EXPOSANT_MAX: u32 = 12;

type FonctionUnaire = fn(Nombre) -> Result<Nombre, ErreurEval>;
type FonctionBinaire = fn(Nombre, Nombre) -> Result<Nombre, ErreurEval>;

#[derive(Default, Clone, Debug, PartialEq, Serialize)]
pub struct Demarche {
    pub normalisee: String,
    pub jetons: String,
    pub rpn: String,
    pub arbre: String,
    /// Nombre de noeuds de l'arbre évalué.
    pub noeuds: usize,
}

/// API publique : évalue une expression arithmétique.
pub fn evaluer(expression: &str) -> Result<Nombre, ErreurEval> {
    evaluer_avec_demarche(expression).map(|(n, _)| n)
}

/// Comme [`evaluer`], avec la démarche (jetons, RPN, arbre parenthésé).
pub fn evaluer_avec_demarche(expression: &str) -> Result<(Nombre, Demarche), ErreurEval> {
    let res = pipeline(expression);
    if let Err(e) = &res {
        debug!(genre = e.genre(), "expression refusée");
    }
    res
}

fn pipeline(expression: &str) -> Result<(Nombre, Demarche), ErreurEval> {
    // 1) Normalisation + bornes
    let s = normaliser(expression)?;

    // 2) Jetons
    let jetons = tokenize(&s)?;

    // 3) RPN
    let rpn = to_rpn(&jetons)?;

    // 4) Arbre
    let arbre = from_rpn(&rpn)?;

    // 5) Évaluation validée
    let valeur = evaluer_noeud(&arbre)?;

    let d = Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_rpn(&rpn),
        arbre: arbre.to_string(),
        noeuds: arbre.taille(),
        normalisee: s,
    };

    Ok((valeur, d))
}

/* ------------------------ Liste blanche ------------------------ */

fn plus(x: Nombre) -> Result<Nombre, ErreurEval> {
    Ok(x.positif())
}

fn moins(x: Nombre) -> Result<Nombre, ErreurEval> {
    Ok(x.negatif())
}

fn operation_unaire(op: OpUnaire) -> Option<FonctionUnaire> {
    match op {
        OpUnaire::Plus => Some(plus),
        OpUnaire::Moins => Some(moins),
        OpUnaire::Inverse => None,
    }
}

fn operation_binaire(op: OpBinaire) -> Option<FonctionBinaire> {
    match op {
        OpBinaire::Add => Some(Nombre::ajouter),
        OpBinaire::Sub => Some(Nombre::soustraire),
        OpBinaire::Mul => Some(Nombre::multiplier),
        OpBinaire::Div => Some(Nombre::diviser),
        OpBinaire::FloorDiv => Some(Nombre::diviser_entier),
        OpBinaire::Mod => Some(Nombre::modulo),
        OpBinaire::Pow => Some(Nombre::puissance),

        OpBinaire::MatMul
        | OpBinaire::BitAnd
        | OpBinaire::BitOr
        | OpBinaire::BitXor
        | OpBinaire::LShift
        | OpBinaire::RShift => None,
    }
}

/* ------------------------ Évaluateur ------------------------ */

fn evaluer_noeud(noeud: &Noeud) -> Result<Nombre, ErreurEval> {
    match noeud {
        Noeud::Litteral(n) => Ok(n.clone()),

        Noeud::Unaire(op, x) => {
            let f = operation_unaire(*op).ok_or_else(|| {
                ErreurEval::OperateurNonSupporte(format!("opérateur unaire « {} »", op.symbole()))
            })?;
            f(evaluer_noeud(x)?)
        }

        Noeud::Binaire(op, a, b) => {
            let f = operation_binaire(*op).ok_or_else(|| {
                ErreurEval::OperateurNonSupporte(format!(
                    "opérateur binaire « {} »",
                    op.symbole()
                ))
            })?;

            let gauche = evaluer_noeud(a)?;
            let droite = evaluer_noeud(b)?;

            // garde AVANT le calcul : 2**99999 ne démarre jamais
            if *op == OpBinaire::Pow && droite.abs_depasse(EXPOSANT_MAX) {
                return Err(ErreurEval::ExposantTropGrand(format_nombre(&droite)));
            }

            if matches!(op, OpBinaire::Div | OpBinaire::FloorDiv | OpBinaire::Mod)
                && droite.est_zero()
            {
                return Err(ErreurEval::DivisionParZero);
            }

            f(gauche, droite)
        }
    }
}
