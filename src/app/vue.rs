// src/app/vue.rs
//
// Vue (terminal) : évaluation via le noyau + rendu texte / JSON.
//
// Note :
// - Texte : la valeur seule sur une ligne (facile à enchaîner dans un script),
//   la démarche en lignes "Titre : contenu" si demandée.
// - JSON  : un objet par évaluation, une ligne.

use serde::Serialize;

use calculatrice_sure::noyau::{evaluer_avec_demarche, format_nombre, Demarche};

use super::etat::Session;
use super::reglages::{FormatSortie, Reglages};

#[derive(Serialize)]
struct ErreurJson<'a> {
    genre: &'static str,
    message: &'a str,
}

#[derive(Serialize)]
struct SortieJson<'a> {
    expression: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    resultat: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    erreur: Option<ErreurJson<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    demarche: Option<&'a Demarche>,
}

impl Session {
    /// Évalue `entree` et dépose le résultat (ou l'erreur) dans l'état.
    pub fn eval_via_noyau(&mut self) {
        match evaluer_avec_demarche(&self.entree) {
            Ok((valeur, demarche)) => self.set_resultats(format_nombre(&valeur), demarche),
            Err(e) => self.set_erreur(e),
        }
    }

    /// Rendu de la dernière évaluation.
    pub fn rendu(&self, reglages: &Reglages) -> serde_json::Result<String> {
        match reglages.format {
            FormatSortie::Texte => Ok(self.rendu_texte(reglages.demarche)),
            FormatSortie::Json => self.rendu_json(reglages.demarche),
        }
    }

    fn rendu_texte(&self, avec_demarche: bool) -> String {
        if let Some(e) = &self.erreur {
            return format!("Erreur : {e}");
        }

        let mut out = self.resultat.clone();
        if let (true, Some(d)) = (avec_demarche, &self.demarche) {
            for (titre, contenu) in [
                ("Entrée", &d.normalisee),
                ("Jetons", &d.jetons),
                ("RPN", &d.rpn),
                ("Arbre", &d.arbre),
            ] {
                out.push('\n');
                out.push_str(&format!("  {titre} : {contenu}"));
            }
            out.push_str(&format!("\n  Noeuds : {}", d.noeuds));
        }
        out
    }

    fn rendu_json(&self, avec_demarche: bool) -> serde_json::Result<String> {
        let message = self.erreur.as_ref().map(|e| e.to_string());
        let sortie = SortieJson {
            expression: &self.entree,
            resultat: (!self.en_erreur()).then_some(self.resultat.as_str()),
            erreur: self.erreur.as_ref().zip(message.as_deref()).map(|(e, m)| ErreurJson {
                genre: e.genre(),
                message: m,
            }),
            demarche: if avec_demarche {
                self.demarche.as_ref()
            } else {
                None
            },
        };
        serde_json::to_string(&sortie)
    }
}
