//! Grammatical number agreement for counted nouns in languages with a three-way
//! one/few/many split (Russian, Ukrainian, Serbian and the like).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    One,
    Few,
    Many,
}
impl PluralCategory {
    /// Selects the category for a count `n`:
    ///
    /// * `One` when `n mod 10 == 1` and `n mod 100 != 11`;
    /// * `Few` when `n mod 10` is 2, 3 or 4 and `n mod 100` is not 12, 13 or 14;
    /// * `Many` otherwise.
    pub fn of(n: u64) -> Self {
        let (units, hundreds) = (n % 10, n % 100);
        if units == 1 && hundreds != 11 {
            PluralCategory::One
        } else if (2..=4).contains(&units) && !(12..=14).contains(&hundreds) {
            PluralCategory::Few
        } else {
            PluralCategory::Many
        }
    }
}

/// The three inflected forms of a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forms<'a> {
    pub one: &'a str,
    pub few: &'a str,
    pub many: &'a str,
}
impl<'a> Forms<'a> {
    pub const fn new(one: &'a str, few: &'a str, many: &'a str) -> Self {
        Self { one, few, many }
    }

    pub fn select(&self, n: u64) -> &'a str {
        match PluralCategory::of(n) {
            PluralCategory::One => self.one,
            PluralCategory::Few => self.few,
            PluralCategory::Many => self.many,
        }
    }

    /// Renders `"{n} {form}"`.
    pub fn count(&self, n: u64) -> String {
        format!("{n} {}", self.select(n))
    }
}
