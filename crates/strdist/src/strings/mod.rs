//! Weighted Levenshtein distance between strings.
//!
//! There are two ways in:
//!
//! * [`levenshtein`] is the strict path. Both strings must already be in the
//!   7-bit alphabet and any other character is an error.
//! * [`levenshtein_safe`] and [`levenshtein_transliterated`] are the tolerant
//!   path. The strings are first projected into the alphabet, which never
//!   fails but may lose information.
//!
//! Both paths end in [`distance`], which works on validated [`Sequence`]s.

mod matrix;
mod transliterate;

use std::borrow::Cow;

pub use transliterate::{transliterate_report, Deunicode, Transliterate, Transliterated};

use matrix::DistanceMatrix;

use crate::{
    costs::{check_symbol, CostModel},
    number::{max2, min3, Cost},
    StrDistError,
};

/// A sequence of symbols, every one of which is known to be in the alphabet.
///
/// # Examples
///
/// ```
/// use strdist::strings::Sequence;
///
/// let seq = Sequence::new("hello")?;
/// assert_eq!(seq.len(), 5);
///
/// assert!(Sequence::new("curaçao").is_err());
/// assert!(Sequence::from_bytes(&[0x41, 0x80]).is_err());
/// # Ok::<(), strdist::StrDistError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sequence<'a> {
    /// The symbols.
    symbols: &'a [u8],
}

impl<'a> Sequence<'a> {
    /// Validates `text` as a sequence of symbols.
    ///
    /// # Errors
    ///
    /// If `text` contains a character outside the alphabet. The error names
    /// the first such character and its byte offset.
    pub fn new(text: &'a str) -> Result<Self, StrDistError> {
        if let Some((position, c)) = text.char_indices().find(|(_, c)| !c.is_ascii()) {
            return Err(StrDistError::SymbolOutOfRange {
                symbol: u32::from(c),
                position,
            });
        }
        Ok(Self::new_unchecked(text.as_bytes()))
    }

    /// Validates `bytes` as a sequence of symbols.
    ///
    /// # Errors
    ///
    /// If any byte is outside the alphabet.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, StrDistError> {
        for (position, &b) in bytes.iter().enumerate() {
            check_symbol(u32::from(b), position)?;
        }
        Ok(Self::new_unchecked(bytes))
    }

    /// Wraps bytes the caller has already checked.
    pub(crate) const fn new_unchecked(symbols: &'a [u8]) -> Self {
        Self { symbols }
    }

    /// The number of symbols.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether there are no symbols.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols as bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.symbols
    }
}

impl<'a> TryFrom<&'a str> for Sequence<'a> {
    type Error = StrDistError;

    fn try_from(text: &'a str) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

/// The result of a distance computation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Distances<F: Cost = f64> {
    /// The weighted edit distance.
    pub distance: F,
    /// The larger of the cost of deleting all of the first sequence and the
    /// cost of inserting all of the second.
    pub max_weighted: F,
}

impl<F: Cost> Distances<F> {
    /// The distance divided by `max_weighted`, or zero if `max_weighted` is
    /// zero.
    ///
    /// The distance can exceed `max_weighted` when a substitution costs more
    /// than deleting and inserting, so the ratio is clamped to at most one.
    /// With non-negative costs the result is in `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use strdist::{costs::CostModel, strings::levenshtein};
    ///
    /// let costs = CostModel::<f64>::default().with_substitute_cost(b'a', b'b', 100.0)?;
    /// let d = levenshtein("a", "b", &costs)?;
    /// assert_eq!(d.as_tuple(), (2.0, 1.0));
    /// assert_eq!(d.normalized(), 1.0);
    /// # Ok::<(), strdist::StrDistError>(())
    /// ```
    #[must_use]
    pub fn normalized(&self) -> F {
        if self.max_weighted == F::ZERO {
            F::ZERO
        } else {
            let ratio = self.distance / self.max_weighted;
            if ratio > F::ONE {
                F::ONE
            } else {
                ratio
            }
        }
    }

    /// One minus the normalized distance.
    #[must_use]
    pub fn similarity(&self) -> F {
        F::ONE - self.normalized()
    }

    /// The pair `(distance, max_weighted)`.
    #[must_use]
    pub const fn as_tuple(&self) -> (F, F) {
        (self.distance, self.max_weighted)
    }
}

/// Computes the weighted Levenshtein distance between two sequences.
///
/// The distance is the smallest total cost of insertions, deletions and
/// substitutions that turn `x` into `y`, with each edit charged per `costs`.
/// Equal symbols always match for free; the substitution table is only read
/// for distinct symbols.
///
/// We use the Wagner-Fischer algorithm, filling a `(|x| + 1) x (|y| + 1)`
/// table where cell `(i, j)` holds the distance between the first `i`
/// symbols of `x` and the first `j` symbols of `y`.
///
/// The costs need not be symmetric, and so neither is the distance.
///
/// # Arguments
///
/// * `x` - The source sequence.
/// * `y` - The target sequence.
/// * `costs` - The insertion, deletion and substitution costs.
///
/// # Returns
///
/// The distance, along with the larger of the cost of deleting all of `x` and
/// the cost of inserting all of `y`.
///
/// # Examples
///
/// ```
/// use strdist::{costs::CostModel, strings::{distance, Sequence}};
///
/// let x = Sequence::new("1234")?;
/// let y = Sequence::new("12")?;
///
/// let d = distance(x, y, CostModel::unit());
/// assert_eq!(d.distance, 2.0);
/// assert_eq!(d.max_weighted, 4.0);
/// # Ok::<(), strdist::StrDistError>(())
/// ```
///
/// # References
///
/// * [Levenshtein distance](https://en.wikipedia.org/wiki/Levenshtein_distance)
/// * [Wagner-Fischer algorithm](https://en.wikipedia.org/wiki/Wagner%E2%80%93Fischer_algorithm)
#[must_use]
pub fn distance<F: Cost>(x: Sequence<'_>, y: Sequence<'_>, costs: &CostModel<F>) -> Distances<F> {
    let (x, y) = (x.as_bytes(), y.as_bytes());
    let mut d = DistanceMatrix::<F>::new(x.len() + 1, y.len() + 1);
    debug_assert_eq!((d.rows(), d.cols()), (x.len() + 1, y.len() + 1));

    // d[(0, 0)] is zero
    for (i, &a) in x.iter().enumerate() {
        d[(i + 1, 0)] = d[(i, 0)] + costs.del(a);
    }
    for (j, &b) in y.iter().enumerate() {
        d[(0, j + 1)] = d[(0, j)] + costs.ins(b);
    }

    for (i, &a) in x.iter().enumerate() {
        let del = costs.del(a);
        for (j, &b) in y.iter().enumerate() {
            d[(i + 1, j + 1)] = if a == b {
                d[(i, j)]
            } else {
                min3(
                    d[(i, j + 1)] + del,
                    d[(i + 1, j)] + costs.ins(b),
                    d[(i, j)] + costs.sub(a, b),
                )
            };
        }
    }

    Distances {
        distance: d[(x.len(), y.len())],
        max_weighted: max2(d[(x.len(), 0)], d[(0, y.len())]),
    }
}

/// Computes the weighted Levenshtein distance between two strings that are
/// expected to be in the alphabet.
///
/// This is the strict path: no transliteration is performed.
///
/// # Errors
///
/// If either string contains a character outside the alphabet (anything
/// that is not 7-bit ASCII). No distance is computed in that case; callers can
/// fall back to [`levenshtein_safe`].
///
/// # Examples
///
/// ```
/// use strdist::{costs::CostModel, strings::levenshtein};
///
/// let costs = CostModel::<f64>::default().with_delete_cost(b'z', 7.5)?;
///
/// assert_eq!(levenshtein("z", "", &costs)?.distance, 7.5);
/// assert_eq!(levenshtein("", "z", &costs)?.distance, 1.0);
/// assert!(levenshtein("curaçao", "", &costs).is_err());
/// # Ok::<(), strdist::StrDistError>(())
/// ```
pub fn levenshtein<F: Cost>(x: &str, y: &str, costs: &CostModel<F>) -> Result<Distances<F>, StrDistError> {
    Ok(distance(Sequence::new(x)?, Sequence::new(y)?, costs))
}

/// Computes the weighted Levenshtein distance between two arbitrary strings,
/// transliterating them into the alphabet with `transliterator` first.
///
/// This never fails. Anything the transliterator leaves outside the alphabet
/// is treated as `?`.
pub fn levenshtein_transliterated<F: Cost, T: Transliterate + ?Sized>(
    x: &str,
    y: &str,
    costs: &CostModel<F>,
    transliterator: &T,
) -> Distances<F> {
    let x = transliterate::ascii_bytes(transliterator.transliterate(x));
    let y = transliterate::ascii_bytes(transliterator.transliterate(y));
    distance(Sequence::new_unchecked(&x), Sequence::new_unchecked(&y), costs)
}

/// Like [`levenshtein_transliterated`], but also returns the transliteration
/// of each input along with how many of its characters were rewritten.
///
/// Each input is transliterated once.
///
/// # Examples
///
/// ```
/// use strdist::{costs::CostModel, strings::{levenshtein_reported, Deunicode}};
///
/// let (d, [x, y]) = levenshtein_reported("curaçao", "curacao", CostModel::unit(), &Deunicode);
/// assert_eq!(d.distance, 0.0);
/// assert_eq!((x.lossy_chars, y.lossy_chars), (1, 0));
/// assert_eq!(x.text, "curacao");
/// ```
#[must_use]
pub fn levenshtein_reported<'a, F: Cost, T: Transliterate + ?Sized>(
    x: &'a str,
    y: &'a str,
    costs: &CostModel<F>,
    transliterator: &T,
) -> (Distances<F>, [Transliterated<'a>; 2]) {
    let x = transliterate_report(x, transliterator);
    let y = transliterate_report(y, transliterator);
    let d = {
        let xb = transliterate::ascii_bytes(Cow::Borrowed(&*x.text));
        let yb = transliterate::ascii_bytes(Cow::Borrowed(&*y.text));
        distance(Sequence::new_unchecked(&xb), Sequence::new_unchecked(&yb), costs)
    };
    (d, [x, y])
}

/// Computes the weighted Levenshtein distance between two arbitrary strings,
/// transliterating them with [`Deunicode`] first.
///
/// This pays for the transliteration of both strings on every call.
///
/// # Examples
///
/// ```
/// use strdist::{costs::CostModel, strings::levenshtein_safe};
///
/// let d = levenshtein_safe("curaçao", "", CostModel::unit());
/// assert_eq!(d.distance, 7.0);
/// assert_eq!(d.max_weighted, 7.0);
/// ```
#[must_use]
pub fn levenshtein_safe<F: Cost>(x: &str, y: &str, costs: &CostModel<F>) -> Distances<F> {
    levenshtein_transliterated(x, y, costs, &Deunicode)
}

/// Computes the unweighted Levenshtein distance between two arbitrary
/// strings, using the shared unit cost model.
///
/// # Examples
///
/// ```
/// use strdist::strings::default_levenshtein;
///
/// let d = default_levenshtein("NAJIBEATSPEPPERS", "NAJIBPEPPERSEATS");
/// assert_eq!(d.distance, 8.0);
/// assert_eq!(d.max_weighted, 16.0);
/// ```
#[must_use]
pub fn default_levenshtein(x: &str, y: &str) -> Distances<f64> {
    levenshtein_safe(x, y, CostModel::unit())
}
