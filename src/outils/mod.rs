//! Outils exposés à un appelant (agent, interface)
//!
//! - registre.rs     : nom -> outil { description, invoquer }
//! - calculatrice.rs : outil de calcul adossé au noyau sûr

pub mod calculatrice;
pub mod registre;

pub use calculatrice::Calculatrice;
pub use registre::{ErreurOutil, Outil, RegistreOutils};
