// src/app.rs
//
// Calculatrice sûre — module App (racine)
// ---------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + reglages.rs + vue.rs)
// - Ré-exporter Session / Reglages (pour main.rs)
// - Fournir la boucle ligne par ligne (entrée standard ou tout BufRead)
//
// Commandes de la boucle :
// - ligne vide           : ignorée
// - :q / quit / exit     : fin
// - :outils              : liste des outils
// - :outil <nom> <texte> : invoque un outil du registre
// - :ac                  : remise à zéro de la session
// - autre                : expression évaluée par le noyau

pub mod etat;
pub mod reglages;
pub mod vue;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use calculatrice_sure::outils::RegistreOutils;

pub use etat::Session;
pub use reglages::{FormatSortie, Reglages};

#[derive(Debug, PartialEq, Eq)]
enum Commande<'a> {
    Vide,
    Quitter,
    ListerOutils,
    Outil { nom: &'a str, entree: &'a str },
    RemiseAZero,
    Expression(&'a str),
}

fn lire_commande(ligne: &str) -> Commande<'_> {
    let l = ligne.trim();
    match l {
        "" => Commande::Vide,
        ":q" | "quit" | "exit" => Commande::Quitter,
        ":outils" => Commande::ListerOutils,
        ":ac" => Commande::RemiseAZero,
        _ => match l.strip_prefix(":outil ") {
            Some(reste) => {
                let reste = reste.trim_start();
                let (nom, entree) = reste.split_once(' ').unwrap_or((reste, ""));
                Commande::Outil {
                    nom,
                    entree: entree.trim(),
                }
            }
            None => Commande::Expression(l),
        },
    }
}

/// Boucle de lecture : une ligne = une commande ou une expression.
/// Retourne la session finale (compteurs).
pub fn boucle<R: BufRead, W: Write>(
    entree: R,
    sortie: &mut W,
    reglages: &Reglages,
    registre: &RegistreOutils,
    invite: bool,
) -> Result<Session> {
    let mut session = Session::default();

    if invite {
        write!(sortie, "> ").context("écriture de l'invite")?;
        sortie.flush().context("écriture de l'invite")?;
    }

    for ligne in entree.lines() {
        let ligne = ligne.context("lecture de l'entrée")?;

        match lire_commande(&ligne) {
            Commande::Vide => {}
            Commande::Quitter => break,
            Commande::ListerOutils => {
                writeln!(sortie, "{}", registre.descriptions())?;
            }
            Commande::RemiseAZero => {
                session.reset_total();
                debug!("session remise à zéro");
            }
            Commande::Outil { nom, entree } => match registre.invoquer(nom, entree) {
                Ok(texte) => writeln!(sortie, "{texte}")?,
                Err(e) => writeln!(sortie, "Erreur : {e}")?,
            },
            Commande::Expression(expr) => {
                session.clear_resultats();
                session.entree = expr.to_string();
                session.eval_via_noyau();
                let rendu = session.rendu(reglages).context("sérialisation du résultat")?;
                writeln!(sortie, "{rendu}")?;
            }
        }

        if invite {
            write!(sortie, "> ")?;
            sortie.flush()?;
        }
    }

    Ok(session)
}
