// src/noyau/arbre.rs
//
// AST arithmétique (immuable, construit une fois, consommé une fois).
// - Litteral : nombre
// - Unaire   : signe (ou ~, reconnu mais jamais autorisé)
// - Binaire  : opérateur infixe
//
// IMPORTANT (SAFE):
// - Ensemble FERMÉ de noeuds : aucun nom, aucun appel, aucune chaîne.
// - Les opérateurs bit à bit / @ existent ici pour que la liste blanche de eval.rs
//   soit une vraie barrière (refus explicite), pas une absence silencieuse.

use std::fmt;

use super::format::format_nombre;
use super::nombre::Nombre;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpUnaire {
    Plus,
    Moins,
    Inverse, // ~
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Pow,

    MatMul,
    BitAnd,
    BitOr,
    BitXor,
    LShift,
    RShift,
}

impl OpUnaire {
    pub fn symbole(self) -> &'static str {
        match self {
            OpUnaire::Plus => "+",
            OpUnaire::Moins => "-",
            OpUnaire::Inverse => "~",
        }
    }
}

impl OpBinaire {
    pub fn symbole(self) -> &'static str {
        match self {
            OpBinaire::Add => "+",
            OpBinaire::Sub => "-",
            OpBinaire::Mul => "*",
            OpBinaire::Div => "/",
            OpBinaire::FloorDiv => "//",
            OpBinaire::Mod => "%",
            OpBinaire::Pow => "**",
            OpBinaire::MatMul => "@",
            OpBinaire::BitAnd => "&",
            OpBinaire::BitOr => "|",
            OpBinaire::BitXor => "^",
            OpBinaire::LShift => "<<",
            OpBinaire::RShift => ">>",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Noeud {
    Litteral(Nombre),
    Unaire(OpUnaire, Box<Noeud>),
    Binaire(OpBinaire, Box<Noeud>, Box<Noeud>),
}

impl Noeud {
    pub fn unaire(op: OpUnaire, x: Noeud) -> Noeud {
        Noeud::Unaire(op, Box::new(x))
    }

    pub fn binaire(op: OpBinaire, a: Noeud, b: Noeud) -> Noeud {
        Noeud::Binaire(op, Box::new(a), Box::new(b))
    }

    /// Nombre de noeuds (démarche / tests de forme).
    pub fn taille(&self) -> usize {
        match self {
            Noeud::Litteral(_) => 1,
            Noeud::Unaire(_, x) => 1 + x.taille(),
            Noeud::Binaire(_, a, b) => 1 + a.taille() + b.taille(),
        }
    }
}

/// Rendu entièrement parenthésé : la structure se lit sans règles de priorité.
impl fmt::Display for Noeud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Noeud::Litteral(n) => write!(f, "{}", format_nombre(n)),
            Noeud::Unaire(op, x) => write!(f, "({}{})", op.symbole(), x),
            Noeud::Binaire(op, a, b) => write!(f, "({} {} {})", a, op.symbole(), b),
        }
    }
}
