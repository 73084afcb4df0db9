// src/noyau/jetons.rs

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Plus,
    Minus,
    Star,
    Slash,
}

impl Tok {
    fn est_operateur(&self) -> bool {
        !matches!(self, Tok::Num(_))
    }
}

/// Tokenize une expression infixe déjà normalisée (`*` et `/`).
/// Supporte:
/// - nombres décimaux (ex: 12, 1.5, .5, 5.)
/// - exposant issu d’un résultat affiché (ex: 1.5e-7, 1e20)
/// - signe collé au nombre quand on attend une opérande (ex: -5*2, 3*-2)
/// - opérateurs + - * /
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // opérande attendue : début, ou juste après un opérateur
        let attend_operande = out.last().is_none_or(Tok::est_operateur);
        let signe_colle = (c == '-' || c == '+')
            && attend_operande
            && chars
                .get(i + 1)
                .is_some_and(|n| n.is_ascii_digit() || *n == '.');

        if c.is_ascii_digit() || c == '.' || signe_colle {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }

            // exposant : e[+-]chiffres (seulement si suivi d’un chiffre)
            if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                let mut j = i + 1;
                if j < chars.len() && (chars[j] == '-' || chars[j] == '+') {
                    j += 1;
                }
                if j < chars.len() && chars[j].is_ascii_digit() {
                    while j < chars.len() && chars[j].is_ascii_digit() {
                        j += 1;
                    }
                    i = j;
                }
            }

            let txt: String = chars[start..i].iter().collect();
            let v = txt
                .parse::<f64>()
                .map_err(|_| ErreurEval::NombreInvalide(txt.clone()))?;
            out.push(Tok::Num(v));
            continue;
        }

        let tok = match c {
            '+' => Tok::Plus,
            '-' => Tok::Minus,
            '*' => Tok::Star,
            '/' => Tok::Slash,
            _ => return Err(ErreurEval::CaractereInattendu(c)),
        };
        out.push(tok);
        i += 1;
    }

    Ok(out)
}
