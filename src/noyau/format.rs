// src/noyau/format.rs
//
// Affichage des nombres (côté appelant : le noyau ne formate rien lui-même).
// - Entier : tous les chiffres
// - Réel   : plus courte forme relisible, ".0" si entier,
//            notation scientifique hors [1e-4, 1e16) : 1e+16, 1.5e-05

use super::nombre::Nombre;

pub fn format_nombre(n: &Nombre) -> String {
    match n {
        Nombre::Entier(i) => i.to_string(),
        Nombre::Reel(x) => format_reel(*x),
    }
}

pub fn format_reel(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // "{:e}" donne la plus courte mantisse relisible + l'exposant décimal
    let sci = format!("{x:e}");
    let Some((mantisse, exp)) = sci.split_once('e') else {
        return x.to_string();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return x.to_string();
    };

    if (-4..16).contains(&exp) {
        let s = x.to_string();
        if s.contains('.') {
            s
        } else {
            format!("{s}.0")
        }
    } else {
        let signe = if exp < 0 { '-' } else { '+' };
        format!("{mantisse}e{signe}{:02}", exp.abs())
    }
}
