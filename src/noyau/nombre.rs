// src/noyau/nombre.rs
//
// Nombre = entier exact (BigInt, sans borne) ou réel (f64).
//
// Règles (celles de l'hôte d'origine) :
// - entier ⊕ entier reste entier pour + - * // % et ** (exposant >= 0)
// - '/' est TOUJOURS une division vraie -> réel (arrondi correct pour deux entiers)
// - // et % : sémantique plancher, le reste prend le signe du diviseur
// - mélange entier/réel : l'entier est converti en réel (refus s'il déborde)
//
// Aucune opération ne panique : toute faute arithmétique devient une ErreurEval.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Nombre {
    Entier(BigInt),
    Reel(f64),
}

impl From<i64> for Nombre {
    fn from(n: i64) -> Self {
        Nombre::Entier(BigInt::from(n))
    }
}

impl From<f64> for Nombre {
    fn from(x: f64) -> Self {
        Nombre::Reel(x)
    }
}

/// Conversion entier -> réel, refusée si l'entier ne tient pas dans un f64.
fn entier_vers_reel(n: &BigInt) -> Result<f64, ErreurEval> {
    match n.to_f64() {
        Some(x) if x.is_finite() => Ok(x),
        _ => Err(ErreurEval::Calcul(
            "entier trop grand pour être converti en réel".into(),
        )),
    }
}

/// divmod réel (fmod + correction de signe), comme l'hôte d'origine.
fn divmod_reel(a: f64, b: f64) -> (f64, f64) {
    let mut reste = a % b;
    let mut div = (a - reste) / b;

    if reste != 0.0 {
        if (b < 0.0) != (reste < 0.0) {
            reste += b;
            div -= 1.0;
        }
    } else {
        reste = 0.0_f64.copysign(b);
    }

    let quotient = if div != 0.0 {
        let mut q = div.floor();
        if div - q > 0.5 {
            q += 1.0;
        }
        q
    } else {
        0.0_f64.copysign(a / b)
    };

    (quotient, reste)
}

/// Puissance réelle avec les refus de l'hôte d'origine.
fn puissance_reelle(base: f64, exposant: f64) -> Result<f64, ErreurEval> {
    if exposant == 0.0 || base == 1.0 {
        return Ok(1.0);
    }
    if base == 0.0 && exposant < 0.0 {
        return Err(ErreurEval::DivisionParZero);
    }
    if base < 0.0 && base.is_finite() && exposant.is_finite() && exposant.fract() != 0.0 {
        return Err(ErreurEval::Calcul(
            "résultat complexe (base négative, exposant fractionnaire)".into(),
        ));
    }

    let r = base.powf(exposant);
    if r.is_infinite() && base.is_finite() && exposant.is_finite() {
        return Err(ErreurEval::Calcul("résultat numérique hors limites".into()));
    }
    Ok(r)
}

impl Nombre {
    pub fn est_zero(&self) -> bool {
        match self {
            Nombre::Entier(n) => n.is_zero(),
            Nombre::Reel(x) => *x == 0.0,
        }
    }

    /// |x| > borne ? (NaN ne dépasse jamais)
    pub fn abs_depasse(&self, borne: u32) -> bool {
        match self {
            Nombre::Entier(n) => n.abs() > BigInt::from(borne),
            Nombre::Reel(x) => x.abs() > f64::from(borne),
        }
    }

    pub fn vers_reel(&self) -> Result<f64, ErreurEval> {
        match self {
            Nombre::Entier(n) => entier_vers_reel(n),
            Nombre::Reel(x) => Ok(*x),
        }
    }

    pub fn positif(self) -> Nombre {
        self
    }

    pub fn negatif(self) -> Nombre {
        match self {
            Nombre::Entier(n) => Nombre::Entier(-n),
            Nombre::Reel(x) => Nombre::Reel(-x),
        }
    }

    /* ------------------------ Opérations binaires ------------------------ */

    pub fn ajouter(self, autre: Nombre) -> Result<Nombre, ErreurEval> {
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => Ok(Nombre::Entier(a + b)),
            (a, b) => Ok(Nombre::Reel(a.vers_reel()? + b.vers_reel()?)),
        }
    }

    pub fn soustraire(self, autre: Nombre) -> Result<Nombre, ErreurEval> {
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => Ok(Nombre::Entier(a - b)),
            (a, b) => Ok(Nombre::Reel(a.vers_reel()? - b.vers_reel()?)),
        }
    }

    pub fn multiplier(self, autre: Nombre) -> Result<Nombre, ErreurEval> {
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => Ok(Nombre::Entier(a * b)),
            (a, b) => Ok(Nombre::Reel(a.vers_reel()? * b.vers_reel()?)),
        }
    }

    /// Division vraie : toujours un réel.
    pub fn diviser(self, autre: Nombre) -> Result<Nombre, ErreurEval> {
        if autre.est_zero() {
            return Err(ErreurEval::DivisionParZero);
        }
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => {
                // quotient exact puis arrondi au plus proche (sans réduction : pas de pgcd)
                let (a, b) = if b.is_negative() { (-a, -b) } else { (a, b) };
                let q = BigRational::new_raw(a, b);
                match q.to_f64() {
                    Some(x) if x.is_finite() => Ok(Nombre::Reel(x)),
                    _ => Err(ErreurEval::Calcul(
                        "quotient entier trop grand pour un réel".into(),
                    )),
                }
            }
            (a, b) => Ok(Nombre::Reel(a.vers_reel()? / b.vers_reel()?)),
        }
    }

    /// Division plancher (//).
    pub fn diviser_entier(self, autre: Nombre) -> Result<Nombre, ErreurEval> {
        if autre.est_zero() {
            return Err(ErreurEval::DivisionParZero);
        }
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => Ok(Nombre::Entier(a.div_floor(&b))),
            (a, b) => {
                let (q, _) = divmod_reel(a.vers_reel()?, b.vers_reel()?);
                Ok(Nombre::Reel(q))
            }
        }
    }

    /// Modulo (%), signe du diviseur.
    pub fn modulo(self, autre: Nombre) -> Result<Nombre, ErreurEval> {
        if autre.est_zero() {
            return Err(ErreurEval::DivisionParZero);
        }
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => Ok(Nombre::Entier(a.mod_floor(&b))),
            (a, b) => {
                let (_, r) = divmod_reel(a.vers_reel()?, b.vers_reel()?);
                Ok(Nombre::Reel(r))
            }
        }
    }

    /// Puissance (**). La garde sur l'exposant est posée par l'évaluateur.
    pub fn puissance(self, autre: Nombre) -> Result<Nombre, ErreurEval> {
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) if !b.is_negative() => {
                let e = b
                    .to_u32()
                    .ok_or_else(|| ErreurEval::Calcul("exposant entier hors limites".into()))?;
                Ok(Nombre::Entier(a.pow(e)))
            }
            (a, b) => Ok(Nombre::Reel(puissance_reelle(
                a.vers_reel()?,
                b.vers_reel()?,
            )?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(n: i64) -> Nombre {
        Nombre::from(n)
    }

    fn r(x: f64) -> Nombre {
        Nombre::from(x)
    }

    #[test]
    fn entiers_restent_exacts() {
        assert_eq!(e(2).ajouter(e(3)), Ok(e(5)));
        assert_eq!(e(2).multiplier(e(-3)), Ok(e(-6)));
        let grand = e(99_999_999).puissance(e(12)).unwrap();
        assert_eq!(
            grand,
            Nombre::Entier(BigInt::from(99_999_999_i64).pow(12u32))
        );
    }

    #[test]
    fn division_vraie_toujours_reelle() {
        assert_eq!(e(4).diviser(e(2)), Ok(r(2.0)));
        assert_eq!(e(1).diviser(e(3)), Ok(r(1.0 / 3.0)));
        assert_eq!(e(1).diviser(e(0)), Err(ErreurEval::DivisionParZero));
        assert_eq!(r(1.0).diviser(r(-0.0)), Err(ErreurEval::DivisionParZero));
    }

    #[test]
    fn plancher_signe_du_diviseur() {
        assert_eq!(e(7).diviser_entier(e(2)), Ok(e(3)));
        assert_eq!(e(-7).diviser_entier(e(2)), Ok(e(-4)));
        assert_eq!(e(-7).modulo(e(3)), Ok(e(2)));
        assert_eq!(e(7).modulo(e(-3)), Ok(e(-2)));
        assert_eq!(r(-7.5).diviser_entier(e(2)), Ok(r(-4.0)));
        assert_eq!(r(7.5).modulo(e(-2)), Ok(r(-0.5)));
        assert_eq!(r(-7.5).modulo(e(2)), Ok(r(0.5)));
    }

    #[test]
    fn puissances() {
        assert_eq!(e(2).puissance(e(-1)), Ok(r(0.5)));
        assert_eq!(e(4).puissance(r(0.5)), Ok(r(2.0)));
        assert_eq!(e(0).puissance(e(-1)), Err(ErreurEval::DivisionParZero));
        assert!(matches!(
            e(-8).puissance(r(0.5)),
            Err(ErreurEval::Calcul(_))
        ));
        assert!(matches!(
            r(1e300).puissance(e(12)),
            Err(ErreurEval::Calcul(_))
        ));
    }

    #[test]
    fn entier_trop_grand_pour_reel() {
        let enorme = Nombre::Entier(BigInt::from(10).pow(400u32));
        assert!(matches!(enorme.ajouter(r(1.0)), Err(ErreurEval::Calcul(_))));
    }

    #[test]
    fn garde_exposant() {
        assert!(e(13).abs_depasse(12));
        assert!(e(-13).abs_depasse(12));
        assert!(!e(12).abs_depasse(12));
        assert!(r(12.5).abs_depasse(12));
        assert!(!r(f64::NAN).abs_depasse(12));
    }
}
