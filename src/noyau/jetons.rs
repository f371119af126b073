// src/noyau/jetons.rs
//
// Tokenisation STRICTE : seuls nombres, opérateurs et parenthèses produisent un jeton.
//
// Deux familles de refus :
// - Syntaxe            : texte mal formé (caractère inconnu, littéral invalide, '=')
// - SyntaxeNonSupportee: construction bien formée d'un langage général
//                        (nom, chaîne, comparaison, virgule, crochets, imaginaire…)
//
// Aucun nom n'est jamais résolu : un identifiant est refusé dès la lecture.

use num_bigint::BigInt;

use super::erreur::ErreurEval;
use super::format::format_nombre;
use super::nombre::Nombre;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(Nombre),

    Plus,
    Moins,
    Etoile,       // *
    DoubleEtoile, // **
    Barre,        // /
    DoubleBarre,  // //
    Pourcent,     // %

    // reconnus pour être refusés par la liste blanche
    Arobase,        // @
    Esperluette,    // &
    BarreVerticale, // |
    Chapeau,        // ^
    DecalageGauche, // <<
    DecalageDroite, // >>
    Tilde,          // ~

    ParG,
    ParD,
}

impl Tok {
    pub fn symbole(&self) -> String {
        match self {
            Tok::Num(n) => format_nombre(n),
            Tok::Plus => "+".into(),
            Tok::Moins => "-".into(),
            Tok::Etoile => "*".into(),
            Tok::DoubleEtoile => "**".into(),
            Tok::Barre => "/".into(),
            Tok::DoubleBarre => "//".into(),
            Tok::Pourcent => "%".into(),
            Tok::Arobase => "@".into(),
            Tok::Esperluette => "&".into(),
            Tok::BarreVerticale => "|".into(),
            Tok::Chapeau => "^".into(),
            Tok::DecalageGauche => "<<".into(),
            Tok::DecalageDroite => ">>".into(),
            Tok::Tilde => "~".into(),
            Tok::ParG => "(".into(),
            Tok::ParD => ")".into(),
        }
    }
}

fn est_debut_ident(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn est_suite_ident(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Lit `chiffre (['_'] chiffre)*` dans la base donnée.
/// Retourne les chiffres sans '_' ; un '_' final n'est pas consommé.
fn lire_chiffres(chars: &[char], i: &mut usize, base: u32) -> String {
    let mut out = String::new();
    while *i < chars.len() {
        let c = chars[*i];
        if c.is_digit(base) {
            out.push(c);
            *i += 1;
        } else if c == '_'
            && !out.is_empty()
            && *i + 1 < chars.len()
            && chars[*i + 1].is_digit(base)
        {
            *i += 1;
        } else {
            break;
        }
    }
    out
}

/// Littéral numérique : 42, 1_000, 0x1F, 0o17, 0b101, 1.5, .5, 5., 1e3, 2.5E-3
fn lire_nombre(chars: &[char], i: &mut usize) -> Result<Nombre, ErreurEval> {
    let start = *i;

    // Préfixes 0x / 0o / 0b
    if chars[*i] == '0' && *i + 1 < chars.len() {
        let base = match chars[*i + 1] {
            'x' | 'X' => Some(16),
            'o' | 'O' => Some(8),
            'b' | 'B' => Some(2),
            _ => None,
        };
        if let Some(base) = base {
            *i += 2;
            // '_' permis juste après le préfixe
            if *i + 1 < chars.len() && chars[*i] == '_' && chars[*i + 1].is_digit(base) {
                *i += 1;
            }
            let chiffres = lire_chiffres(chars, i, base);
            if chiffres.is_empty() {
                return Err(ErreurEval::syntaxe("littéral numérique invalide"));
            }
            let n = BigInt::parse_bytes(chiffres.as_bytes(), base)
                .ok_or_else(|| ErreurEval::syntaxe("littéral numérique invalide"))?;
            return Ok(Nombre::Entier(n));
        }
    }

    let entier = lire_chiffres(chars, i, 10);
    let mut texte = entier.clone();
    let mut est_reel = false;

    if *i < chars.len() && chars[*i] == '.' {
        est_reel = true;
        *i += 1;
        texte.push('.');
        texte.push_str(&lire_chiffres(chars, i, 10));
    }

    if *i < chars.len() && (chars[*i] == 'e' || chars[*i] == 'E') {
        let mut j = *i + 1;
        let mut signe = String::new();
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            signe.push(chars[j]);
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            *i = j;
            let exp = lire_chiffres(chars, i, 10);
            texte.push('e');
            texte.push_str(&signe);
            texte.push_str(&exp);
            est_reel = true;
        }
    }

    if texte == "." || texte.is_empty() {
        return Err(ErreurEval::syntaxe(format!(
            "littéral numérique invalide près de la position {start}"
        )));
    }

    if est_reel {
        let x = texte
            .parse::<f64>()
            .map_err(|e| ErreurEval::syntaxe(format!("littéral réel invalide ({e})")))?;
        return Ok(Nombre::Reel(x));
    }

    // 007 interdit, 000 permis
    if entier.len() > 1 && entier.starts_with('0') && entier.chars().any(|c| c != '0') {
        return Err(ErreurEval::syntaxe(
            "zéros non significatifs interdits dans un entier décimal",
        ));
    }

    let n = BigInt::parse_bytes(entier.as_bytes(), 10)
        .ok_or_else(|| ErreurEval::syntaxe("littéral entier invalide"))?;
    Ok(Nombre::Entier(n))
}

/// Tokenize une chaîne normalisée en jetons.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    let suivant = |i: usize| chars.get(i + 1).copied();

    while i < chars.len() {
        let c = chars[i];

        // séparateurs d'une ligne logique seulement
        if matches!(c, ' ' | '\t' | '\x0c') {
            i += 1;
            continue;
        }
        if c.is_whitespace() {
            return Err(ErreurEval::syntaxe(format!(
                "espacement interdit (U+{:04X})",
                c as u32
            )));
        }

        // Nombres (y compris ".5")
        if c.is_ascii_digit() || (c == '.' && suivant(i).is_some_and(|d| d.is_ascii_digit())) {
            let n = lire_nombre(&chars, &mut i)?;

            // suffixe collé : 1j (imaginaire) ou 12abc / 1_ (invalide)
            if let Some(&d) = chars.get(i) {
                if d == 'j' || d == 'J' {
                    return Err(ErreurEval::non_supportee("nombre imaginaire"));
                }
                if est_suite_ident(d) || d == '.' {
                    return Err(ErreurEval::syntaxe("littéral numérique invalide"));
                }
            }

            out.push(Tok::Num(n));
            continue;
        }

        // Noms : jamais résolus
        if est_debut_ident(c) {
            let start = i;
            while i < chars.len() && est_suite_ident(chars[i]) {
                i += 1;
            }
            let nom: String = chars[start..i].iter().collect();
            return Err(ErreurEval::non_supportee(format!(
                "nom « {nom} » (seuls nombres et opérateurs sont permis)"
            )));
        }

        let tok = match c {
            '(' => Tok::ParG,
            ')' => Tok::ParD,
            '+' => Tok::Plus,
            '-' => Tok::Moins,
            '%' => Tok::Pourcent,
            '@' => Tok::Arobase,
            '&' => Tok::Esperluette,
            '|' => Tok::BarreVerticale,
            '^' => Tok::Chapeau,
            '~' => Tok::Tilde,
            '*' if suivant(i) == Some('*') => {
                i += 1;
                Tok::DoubleEtoile
            }
            '*' => Tok::Etoile,
            '/' if suivant(i) == Some('/') => {
                i += 1;
                Tok::DoubleBarre
            }
            '/' => Tok::Barre,
            '<' if suivant(i) == Some('<') => {
                i += 1;
                Tok::DecalageGauche
            }
            '>' if suivant(i) == Some('>') => {
                i += 1;
                Tok::DecalageDroite
            }
            '<' | '>' => return Err(ErreurEval::non_supportee("comparaison")),
            '=' | '!' if suivant(i) == Some('=') => {
                return Err(ErreurEval::non_supportee("comparaison"))
            }
            ',' => return Err(ErreurEval::non_supportee("tuple (virgule)")),
            '[' | ']' | '{' | '}' => {
                return Err(ErreurEval::non_supportee("liste, ensemble ou indice"))
            }
            '\'' | '"' => return Err(ErreurEval::non_supportee("chaîne de caractères")),
            '.' => return Err(ErreurEval::non_supportee("accès d’attribut")),
            _ => {
                return Err(ErreurEval::syntaxe(format!(
                    "caractère inattendu : '{c}'"
                )))
            }
        };

        // op= : affectation augmentée, ou '=' isolé
        i += 1;
        if chars.get(i) == Some(&'=') && !matches!(tok, Tok::ParG | Tok::ParD) {
            return Err(ErreurEval::syntaxe("affectation interdite"));
        }

        out.push(tok);
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::symbole)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: i64) -> Tok {
        Tok::Num(Nombre::from(n))
    }

    #[test]
    fn operateurs_doubles() {
        let t = tokenize("2**3//4").unwrap();
        assert_eq!(
            t,
            vec![num(2), Tok::DoubleEtoile, num(3), Tok::DoubleBarre, num(4)]
        );
    }

    #[test]
    fn litteraux() {
        assert_eq!(tokenize("1_000").unwrap(), vec![num(1000)]);
        assert_eq!(tokenize("0x1F").unwrap(), vec![num(31)]);
        assert_eq!(tokenize("0b101").unwrap(), vec![num(5)]);
        assert_eq!(tokenize("000").unwrap(), vec![num(0)]);
        assert_eq!(tokenize(".5").unwrap(), vec![Tok::Num(Nombre::from(0.5))]);
        assert_eq!(tokenize("5.").unwrap(), vec![Tok::Num(Nombre::from(5.0))]);
        assert_eq!(
            tokenize("2.5E-3").unwrap(),
            vec![Tok::Num(Nombre::from(0.0025))]
        );
    }

    #[test]
    fn litteraux_invalides() {
        for s in [
            "07", "1_", "1e", "12abc", "0x", "1__0", "1.2.3", "1\n+2", "1\r+2", "1\u{a0}+2",
        ] {
            assert!(
                matches!(tokenize(s), Err(ErreurEval::Syntaxe(_))),
                "attendu Syntaxe pour {s:?}"
            );
        }
    }

    #[test]
    fn noms_refuses_avant_toute_resolution() {
        for s in ["a+1", "__import__('os')", "pi", "lambda: 1", "1 + x"] {
            assert!(
                matches!(tokenize(s), Err(ErreurEval::SyntaxeNonSupportee(_))),
                "attendu SyntaxeNonSupportee pour {s:?}"
            );
        }
    }

    #[test]
    fn constructions_non_arithmetiques() {
        for s in ["1 < 2", "1 == 1", "1 != 2", "1, 2", "[1]", "'a'", "2j"] {
            assert!(
                matches!(tokenize(s), Err(ErreurEval::SyntaxeNonSupportee(_))),
                "attendu SyntaxeNonSupportee pour {s:?}"
            );
        }
    }

    #[test]
    fn affectations_et_inconnus() {
        for s in ["x = 1", "1 += 2", "1 $ 2", "1 ; 2", "1 ? 2"] {
            assert!(tokenize(s).is_err(), "attendu erreur pour {s:?}");
        }
        assert!(matches!(tokenize("1 += 2"), Err(ErreurEval::Syntaxe(_))));
        assert!(matches!(tokenize("1 $ 2"), Err(ErreurEval::Syntaxe(_))));
    }

    #[test]
    fn format_demarche() {
        let t = tokenize("(1 + 2) * -3").unwrap();
        assert_eq!(format_tokens(&t), "( 1 + 2 ) * - 3");
    }
}
