//! Locale-aware string comparison
//!
//! A small approximation of root-locale collation, enough for country names:
//!
//! 1. primary: base letters, case-folded and with Latin diacritics removed,
//!    where whitespace/punctuation < digits < letters;
//! 2. secondary: unaccented before accented;
//! 3. tertiary: lower case before upper case;
//! 4. finally plain byte order, so distinct strings never compare equal.

/// Character classes in primary order.
const CLASS_OTHER: u8 = 0;
const CLASS_DIGIT: u8 = 1;
const CLASS_LETTER: u8 = 2;

/// Sort key for one string. Field order is comparison order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct CollationKey {
    primary: Vec<(u8, char)>,
    secondary: Vec<bool>,
    tertiary: Vec<bool>,
    raw: String,
}

impl CollationKey {
    pub(crate) fn new(s: &str) -> Self {
        let mut primary = Vec::with_capacity(s.len());
        let mut secondary = Vec::with_capacity(s.len());
        let mut tertiary = Vec::with_capacity(s.len());

        for ch in s.chars() {
            let lower = ch.to_lowercase().next().unwrap_or(ch);
            let (base, accented) = match fold_diacritic(lower) {
                Some(base) => (base, true),
                None => (Base::One(lower), false),
            };
            for b in base.chars() {
                primary.push((class_of(b), b));
            }
            secondary.push(accented);
            tertiary.push(ch.is_uppercase());
        }

        Self {
            primary,
            secondary,
            tertiary,
            raw: s.to_string(),
        }
    }
}

fn class_of(c: char) -> u8 {
    if c.is_alphabetic() {
        CLASS_LETTER
    } else if c.is_numeric() {
        CLASS_DIGIT
    } else {
        CLASS_OTHER
    }
}

/// Base form of a folded character: one char or a ligature expansion.
#[derive(Debug, Clone, Copy)]
enum Base {
    One(char),
    Two(char, char),
}

impl Base {
    fn chars(self) -> impl Iterator<Item = char> {
        let (first, second) = match self {
            Self::One(a) => (a, None),
            Self::Two(a, b) => (a, Some(b)),
        };
        std::iter::once(first).chain(second)
    }
}

/// Strip the diacritic from a lower-case Latin letter.
fn fold_diacritic(c: char) -> Option<Base> {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' | 'ș' => 's',
        'ţ' | 'ť' | 'ŧ' | 'ț' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        'æ' => return Some(Base::Two('a', 'e')),
        'œ' => return Some(Base::Two('o', 'e')),
        'ß' => return Some(Base::Two('s', 's')),
        _ => return None,
    };
    Some(Base::One(base))
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    fn collate(a: &str, b: &str) -> Ordering {
        CollationKey::new(a).cmp(&CollationKey::new(b))
    }

    #[test]
    fn accented_letters_sort_with_their_base() {
        assert_eq!(collate("Åland Islands", "Afghanistan"), Ordering::Greater);
        assert_eq!(collate("Åland Islands", "Albania"), Ordering::Less);
        assert_eq!(collate("Åland Islands", "Zimbabwe"), Ordering::Less);
        assert_eq!(collate("Côte d'Ivoire", "Croatia"), Ordering::Less);
        assert_eq!(collate("Curaçao", "Cyprus"), Ordering::Less);
    }

    #[test]
    fn case_does_not_dominate() {
        // byte order would put every upper-case letter first
        assert_eq!(collate("bahamas", "Belgium"), Ordering::Less);
        assert_eq!(collate("a", "B"), Ordering::Less);
    }

    #[test]
    fn lower_case_before_upper_case_on_tie() {
        assert_eq!(collate("republic", "Republic"), Ordering::Less);
    }

    #[test]
    fn unaccented_before_accented_on_tie() {
        assert_eq!(collate("Aland", "Åland"), Ordering::Less);
    }

    #[test]
    fn punctuation_and_digits_before_letters() {
        assert_eq!(collate("Country 01", "Country A"), Ordering::Less);
        assert_eq!(collate("Guinea-Bissau", "Guinea Bissau"), Ordering::Greater);
        assert_eq!(collate("Guinea Bissau", "GuineaBissau"), Ordering::Less);
    }

    #[test]
    fn ligatures_expand() {
        assert_eq!(collate("Straße", "Strasse"), Ordering::Greater);
        assert_eq!(collate("Straße", "Strasso"), Ordering::Less);
    }

    #[test]
    fn equal_only_when_identical() {
        assert_eq!(collate("Chad", "Chad"), Ordering::Equal);
        assert_ne!(collate("Chad", "chad"), Ordering::Equal);
    }

    #[test]
    fn zero_padded_numbers_keep_order() {
        let mut names: Vec<String> = (1..=30).rev().map(|i| format!("Country {i:02}")).collect();
        names.sort_by(|a, b| collate(a, b));
        assert_eq!(names.first().map(String::as_str), Some("Country 01"));
        assert_eq!(names.last().map(String::as_str), Some("Country 30"));
    }
}
