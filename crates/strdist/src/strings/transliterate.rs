//! Projection of arbitrary text into the 7-bit alphabet.

use std::borrow::Cow;

/// Maps arbitrary text to a best-effort representation in the alphabet.
///
/// Implementations must be total. They are allowed to lose information, e.g.
/// by stripping diacritics.
pub trait Transliterate {
    /// Returns `text` rewritten into the alphabet.
    fn transliterate<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// The default transliterator, backed by the `deunicode` crate.
///
/// Characters with no known ASCII representation become `?`.
///
/// # Examples
///
/// ```
/// use strdist::strings::{Deunicode, Transliterate};
///
/// assert_eq!(Deunicode.transliterate("curaçao"), "curacao");
/// assert_eq!(Deunicode.transliterate("plain"), "plain");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Deunicode;

impl Transliterate for Deunicode {
    fn transliterate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        deunicode::deunicode_with_tofu_cow(text, "?")
    }
}

impl<T: Fn(&str) -> String> Transliterate for T {
    fn transliterate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Owned(self(text))
    }
}

/// Text projected into the alphabet, with a record of how much was rewritten.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transliterated<'a> {
    /// The projected text.
    pub text: Cow<'a, str>,
    /// The number of input characters that were outside the alphabet.
    pub lossy_chars: usize,
}

impl Transliterated<'_> {
    /// Whether the projection was exact, i.e. the input was already in the
    /// alphabet.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.lossy_chars == 0
    }
}

/// Transliterates `text` and reports how many characters had to be rewritten.
///
/// # Examples
///
/// ```
/// use strdist::strings::{transliterate_report, Deunicode};
///
/// let report = transliterate_report("crème brûlée", &Deunicode);
/// assert_eq!(report.text, "creme brulee");
/// assert_eq!(report.lossy_chars, 3);
/// assert!(!report.is_exact());
/// ```
pub fn transliterate_report<'a, T: Transliterate + ?Sized>(text: &'a str, transliterator: &T) -> Transliterated<'a> {
    let lossy_chars = text.chars().filter(|c| !c.is_ascii()).count();
    if lossy_chars > 0 {
        ftlog::trace!("Transliterating {lossy_chars} characters outside the alphabet in {text:?}");
    }
    Transliterated {
        text: transliterator.transliterate(text),
        lossy_chars,
    }
}

/// Bytes of `text` with anything still outside the alphabet replaced by `?`.
///
/// A well-behaved transliterator never leaves such characters behind, but the
/// tolerant path must not fail on one that does.
pub(crate) fn ascii_bytes(text: Cow<'_, str>) -> Cow<'_, [u8]> {
    if text.is_ascii() {
        match text {
            Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
            Cow::Owned(s) => Cow::Owned(s.into_bytes()),
        }
    } else {
        Cow::Owned(
            text.chars()
                .map(|c| u8::try_from(c).ok().filter(u8::is_ascii).unwrap_or(b'?'))
                .collect(),
        )
    }
}
