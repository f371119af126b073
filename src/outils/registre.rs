// src/outils/registre.rs
//
// Registre d'outils : table nom -> outil.
// - enregistrer : remplace un outil de même nom (avertissement journalisé)
// - invoquer    : délègue à l'outil, erreur typée si le nom est inconnu
// - ordre d'enregistrement conservé (affichage stable)

use std::collections::HashMap;

use thiserror::Error;
use tracing::{info, warn};

use super::calculatrice::Calculatrice;

/// Capacité invocable par nom.
pub trait Outil: Send + Sync {
    fn nom(&self) -> &str;

    /// Description lisible (affichée à l'appelant).
    fn description(&self) -> &str;

    /// Exécute l'outil ; la sortie est toujours un texte rendu (résultat ou erreur).
    fn invoquer(&self, entree: &str) -> String;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurOutil {
    #[error("outil '{0}' introuvable")]
    Introuvable(String),
}

#[derive(Default)]
pub struct RegistreOutils {
    outils: HashMap<String, Box<dyn Outil>>,
    ordre: Vec<String>,
}

impl RegistreOutils {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registre avec les outils fournis par défaut (calculatrice).
    pub fn avec_outils_par_defaut() -> Self {
        let mut registre = Self::new();
        registre.enregistrer(Box::new(Calculatrice));
        registre
    }

    pub fn enregistrer(&mut self, outil: Box<dyn Outil>) {
        let nom = outil.nom().to_string();
        if self.outils.insert(nom.clone(), outil).is_some() {
            warn!(outil = %nom, "outil déjà présent, remplacé");
        } else {
            self.ordre.push(nom.clone());
            info!(outil = %nom, "outil enregistré");
        }
    }

    pub fn obtenir(&self, nom: &str) -> Option<&dyn Outil> {
        self.outils.get(nom).map(|b| b.as_ref())
    }

    pub fn invoquer(&self, nom: &str, entree: &str) -> Result<String, ErreurOutil> {
        let outil = self
            .obtenir(nom)
            .ok_or_else(|| ErreurOutil::Introuvable(nom.to_string()))?;
        Ok(outil.invoquer(entree))
    }

    /// Noms, dans l'ordre d'enregistrement.
    pub fn noms(&self) -> Vec<String> {
        self.ordre.clone()
    }

    /// "- nom: description", une ligne par outil.
    pub fn descriptions(&self) -> String {
        if self.is_empty() {
            return "(aucun outil)".to_string();
        }
        self.ordre
            .iter()
            .filter_map(|nom| self.outils.get(nom))
            .map(|o| format!("- {}: {}", o.nom(), o.description()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.outils.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outils.is_empty()
    }
}
