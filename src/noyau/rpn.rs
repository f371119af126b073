// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant la syntaxe au passage
// - Puis reconstruire un Noeud
//
// Règles:
// - Priorités (basse -> haute) : |  ^  &  << >>  + -  * / // % @  unaire  **
// - ** est associatif à droite, et son opérande droite peut être signée : 2**-1
// - Unaire (+ - ~) : préfixe, n'empile rien en arrivant ; -2**2 = -(2**2)
// - `attend_valeur` suit l'état de la grammaire : tout jeton hors de sa place
//   est une erreur de syntaxe (1 2, 1 +, (), *3…)

use super::arbre::{Noeud, OpBinaire, OpUnaire};
use super::erreur::ErreurEval;
use super::format::format_nombre;
use super::jetons::Tok;
use super::nombre::Nombre;

const PRIORITE_UNAIRE: u8 = 7;

#[derive(Clone, Debug, PartialEq)]
pub enum ElementRpn {
    Valeur(Nombre),
    Unaire(OpUnaire),
    Binaire(OpBinaire),
}

/// Entrée de la pile d'opérateurs.
#[derive(Clone, Copy, Debug)]
enum Pile {
    ParG,
    Unaire(OpUnaire),
    Binaire(OpBinaire),
}

impl Pile {
    /// Opérateur à émettre en RPN ; `None` pour '('.
    fn vers_element(self) -> Option<ElementRpn> {
        match self {
            Pile::ParG => None,
            Pile::Unaire(u) => Some(ElementRpn::Unaire(u)),
            Pile::Binaire(b) => Some(ElementRpn::Binaire(b)),
        }
    }
}

fn priorite(op: OpBinaire) -> u8 {
    match op {
        OpBinaire::BitOr => 1,
        OpBinaire::BitXor => 2,
        OpBinaire::BitAnd => 3,
        OpBinaire::LShift | OpBinaire::RShift => 4,
        OpBinaire::Add | OpBinaire::Sub => 5,
        OpBinaire::Mul
        | OpBinaire::Div
        | OpBinaire::FloorDiv
        | OpBinaire::Mod
        | OpBinaire::MatMul => 6,
        OpBinaire::Pow => 8,
    }
}

fn est_associatif_droite(op: OpBinaire) -> bool {
    matches!(op, OpBinaire::Pow)
}

fn op_binaire(t: &Tok) -> Option<OpBinaire> {
    Some(match t {
        Tok::Plus => OpBinaire::Add,
        Tok::Moins => OpBinaire::Sub,
        Tok::Etoile => OpBinaire::Mul,
        Tok::Barre => OpBinaire::Div,
        Tok::DoubleBarre => OpBinaire::FloorDiv,
        Tok::Pourcent => OpBinaire::Mod,
        Tok::DoubleEtoile => OpBinaire::Pow,
        Tok::Arobase => OpBinaire::MatMul,
        Tok::Esperluette => OpBinaire::BitAnd,
        Tok::BarreVerticale => OpBinaire::BitOr,
        Tok::Chapeau => OpBinaire::BitXor,
        Tok::DecalageGauche => OpBinaire::LShift,
        Tok::DecalageDroite => OpBinaire::RShift,
        Tok::Num(_) | Tok::Tilde | Tok::ParG | Tok::ParD => return None,
    })
}

fn op_unaire(t: &Tok) -> Option<OpUnaire> {
    match t {
        Tok::Plus => Some(OpUnaire::Plus),
        Tok::Moins => Some(OpUnaire::Moins),
        Tok::Tilde => Some(OpUnaire::Inverse),
        _ => None,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), DoubleEtoile, Moins, Num(1)]
///   rpn:    [2, 1, u-, **]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<ElementRpn>, ErreurEval> {
    let mut out: Vec<ElementRpn> = Vec::new();
    let mut ops: Vec<Pile> = Vec::new();

    // vrai au début, après un opérateur ou '(' : il faut une valeur
    let mut attend_valeur = true;

    for tok in tokens {
        match tok {
            Tok::Num(n) => {
                if !attend_valeur {
                    return Err(ErreurEval::syntaxe(format!(
                        "nombre inattendu : {}",
                        format_nombre(n)
                    )));
                }
                out.push(ElementRpn::Valeur(n.clone()));
                attend_valeur = false;
            }

            Tok::ParG => {
                if !attend_valeur {
                    // 2(3) ou (1)(2) : forme d'appel
                    return Err(ErreurEval::non_supportee("appel de fonction"));
                }
                ops.push(Pile::ParG);
            }

            Tok::ParD => {
                if attend_valeur {
                    return Err(ErreurEval::syntaxe(
                        "sous-expression vide ou incomplète avant ')'",
                    ));
                }

                // dépile jusqu'à '('
                let mut fermee = false;
                while let Some(top) = ops.pop() {
                    match top.vers_element() {
                        Some(element) => out.push(element),
                        None => {
                            fermee = true;
                            break;
                        }
                    }
                }
                if !fermee {
                    return Err(ErreurEval::syntaxe("parenthèse fermante sans ouvrante"));
                }
            }

            _ if attend_valeur => {
                // seul un signe peut arriver à la place d'une valeur
                let op = op_unaire(tok).ok_or_else(|| {
                    ErreurEval::syntaxe(format!("opérateur inattendu : {}", tok.symbole()))
                })?;
                ops.push(Pile::Unaire(op));
            }

            _ => {
                let op = op_binaire(tok).ok_or_else(|| {
                    ErreurEval::syntaxe(format!("opérateur inattendu : {}", tok.symbole()))
                })?;
                let p_tok = priorite(op);

                // dépile tant que la précédence/associativité l'exige
                while let Some(&top) = ops.last() {
                    let p_top = match top {
                        Pile::ParG => break,
                        Pile::Unaire(_) => PRIORITE_UNAIRE,
                        Pile::Binaire(b) => priorite(b),
                    };

                    let doit_pop = if est_associatif_droite(op) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };
                    if !doit_pop {
                        break;
                    }

                    let Some(element) = top.vers_element() else {
                        break;
                    };
                    ops.pop();
                    out.push(element);
                }

                ops.push(Pile::Binaire(op));
                attend_valeur = true;
            }
        }
    }

    if attend_valeur {
        return Err(ErreurEval::syntaxe("expression incomplète"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        let element = op
            .vers_element()
            .ok_or_else(|| ErreurEval::syntaxe("parenthèses non fermées"))?;
        out.push(element);
    }

    Ok(out)
}

/// Construit l'arbre à partir d'une RPN.
pub fn from_rpn(rpn: &[ElementRpn]) -> Result<Noeud, ErreurEval> {
    let mut st: Vec<Noeud> = Vec::new();

    for el in rpn {
        match el {
            ElementRpn::Valeur(n) => st.push(Noeud::Litteral(n.clone())),
            ElementRpn::Unaire(op) => {
                let x = st
                    .pop()
                    .ok_or_else(|| ErreurEval::syntaxe("expression invalide"))?;
                st.push(Noeud::unaire(*op, x));
            }
            ElementRpn::Binaire(op) => {
                let b = st
                    .pop()
                    .ok_or_else(|| ErreurEval::syntaxe("expression invalide"))?;
                let a = st
                    .pop()
                    .ok_or_else(|| ErreurEval::syntaxe("expression invalide"))?;
                st.push(Noeud::binaire(*op, a, b));
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(racine), true) => Ok(racine),
        _ => Err(ErreurEval::syntaxe("expression invalide")),
    }
}

/// Format utilitaire (démarche) : RPN en texte, unaires marqués "u-".
pub fn format_rpn(rpn: &[ElementRpn]) -> String {
    rpn.iter()
        .map(|el| match el {
            ElementRpn::Valeur(n) => format_nombre(n),
            ElementRpn::Unaire(op) => format!("u{}", op.symbole()),
            ElementRpn::Binaire(op) => op.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
