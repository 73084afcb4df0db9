// src/noyau/touche.rs
//
// Touches (jetons d’entrée) + ensemble des opérateurs.
// Une touche = un bouton du pavé (20 boutons) ou son équivalent clavier.

/// Glyphes d’opérateurs tels qu’ils apparaissent dans le tampon d’affichage.
pub const OPERATEURS: [char; 5] = ['+', '-', 'x', '÷', '%'];

/// Vrai si `c` est un glyphe d’opérateur reconnu.
pub fn est_operateur(c: char) -> bool {
    OPERATEURS.contains(&c)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Modulo,
}

impl Operateur {
    pub const TOUS: [Operateur; 5] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Modulo,
    ];

    /// Glyphe écrit dans le tampon.
    pub fn glyphe(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => 'x',
            Operateur::Divise => '÷',
            Operateur::Modulo => '%',
        }
    }

    pub fn depuis_glyphe(c: char) -> Option<Operateur> {
        Operateur::TOUS.into_iter().find(|op| op.glyphe() == c)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// 0..=9
    Chiffre(u8),
    Point,
    Operateur(Operateur),
    /// AC
    Effacer,
    /// ⏎
    Retour,
    /// +/-
    Signe,
    Egal,
}

const LIBELLES_CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Touche {
    /// Libellé du bouton (identique au texte reconnu par `depuis_libelle`).
    pub fn libelle(self) -> &'static str {
        match self {
            Touche::Chiffre(d) => LIBELLES_CHIFFRES[usize::from(d.min(9))],
            Touche::Point => ".",
            Touche::Operateur(Operateur::Plus) => "+",
            Touche::Operateur(Operateur::Moins) => "-",
            Touche::Operateur(Operateur::Fois) => "x",
            Touche::Operateur(Operateur::Divise) => "÷",
            Touche::Operateur(Operateur::Modulo) => "%",
            Touche::Effacer => "AC",
            Touche::Retour => "⏎",
            Touche::Signe => "+/-",
            Touche::Egal => "=",
        }
    }

    /// Libellé de bouton -> touche. `None` pour tout texte inconnu.
    pub fn depuis_libelle(s: &str) -> Option<Touche> {
        match s {
            "AC" => Some(Touche::Effacer),
            "⏎" => Some(Touche::Retour),
            "+/-" => Some(Touche::Signe),
            "=" => Some(Touche::Egal),
            "." => Some(Touche::Point),
            _ => {
                let mut it = s.chars();
                let c = it.next()?;
                if it.next().is_some() {
                    return None;
                }
                if let Some(d) = c.to_digit(10) {
                    return Some(Touche::Chiffre(d as u8));
                }
                Operateur::depuis_glyphe(c).map(Touche::Operateur)
            }
        }
    }

    /// Saisie clavier (caractère tapé) -> touche.
    /// Un caractère identique à un libellé de bouton donne ce bouton ;
    /// on accepte en plus quelques variantes usuelles : `*`, `×`, `X`, `/`, `,`.
    pub fn depuis_clavier(c: char) -> Option<Touche> {
        match c {
            ',' => Some(Touche::Point),
            '*' | 'X' | '×' => Some(Touche::Operateur(Operateur::Fois)),
            '/' => Some(Touche::Operateur(Operateur::Divise)),
            _ => {
                let mut buf = [0u8; 4];
                Touche::depuis_libelle(c.encode_utf8(&mut buf))
            }
        }
    }

    pub fn est_operateur(self) -> bool {
        matches!(self, Touche::Operateur(_))
    }
}
