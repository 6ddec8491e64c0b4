//! Cost tables for the weighted Levenshtein distance.
//!
//! A `CostModel` holds three tables over the 7-bit alphabet:
//!
//! * the cost of inserting each symbol into the target,
//! * the cost of deleting each symbol from the source,
//! * the cost of substituting one symbol for another, per ordered pair.
//!
//! Every table is total over the alphabet. The tables are statically sized so
//! a partially populated model cannot be built.

mod config;

pub use config::{CostConfig, SubstituteOverride};

use lazy_static::lazy_static;

use crate::{number::Cost, StrDistError};

/// The number of symbols in the alphabet, i.e. the 7-bit ASCII range.
pub const ALPHABET_SIZE: usize = 128;

/// A symbol of the alphabet. Only values in `[0, ALPHABET_SIZE)` are valid.
pub type Symbol = u8;

/// A per-symbol cost table, used for insertions and deletions.
pub type CostTable<F> = [F; ALPHABET_SIZE];

/// A per-ordered-pair cost table, used for substitutions.
pub type SubstitutionTable<F> = [[F; ALPHABET_SIZE]; ALPHABET_SIZE];

lazy_static! {
    /// The unit cost model, shared by all unweighted computations.
    static ref UNIT: CostModel<f64> = CostModel::uniform(1.0, 1.0, 1.0);
}

/// Returns an insertion table where every symbol costs `value`.
#[must_use]
pub fn uniform_insert_costs<F: Cost>(value: F) -> CostTable<F> {
    [value; ALPHABET_SIZE]
}

/// Returns a deletion table where every symbol costs `value`.
#[must_use]
pub fn uniform_delete_costs<F: Cost>(value: F) -> CostTable<F> {
    [value; ALPHABET_SIZE]
}

/// Returns a substitution table where every ordered pair costs `value`.
///
/// This includes the pair of a symbol with itself, though those entries are
/// never read: equal symbols always cost nothing.
#[must_use]
pub fn uniform_substitute_costs<F: Cost>(value: F) -> Box<SubstitutionTable<F>> {
    // Built on the heap; the table is too large to comfortably live on the stack.
    vec![[value; ALPHABET_SIZE]; ALPHABET_SIZE]
        .into_boxed_slice()
        .try_into()
        .unwrap_or_else(|_| unreachable!("We know the table has `ALPHABET_SIZE` rows."))
}

/// Checks that `symbol`, found at `position`, is inside the alphabet.
pub(crate) fn check_symbol(symbol: u32, position: usize) -> Result<usize, StrDistError> {
    let index = symbol as usize;
    if index < ALPHABET_SIZE {
        Ok(index)
    } else {
        Err(StrDistError::SymbolOutOfRange { symbol, position })
    }
}

/// The insertion, deletion and substitution costs of a weighted edit distance.
///
/// Models are meant to be built once and reused across many distance
/// computations. They are never mutated by the distance computation.
///
/// # Examples
///
/// ```
/// use strdist::costs::CostModel;
///
/// let costs = CostModel::<f64>::default()
///     .with_insert_cost(b'a', 5.0)?
///     .with_substitute_cost(b'a', b'z', 1.2)?;
///
/// assert_eq!(costs.insert_cost(b'a'), Some(5.0));
/// assert_eq!(costs.delete_cost(b'a'), Some(1.0));
/// assert_eq!(costs.substitute_cost(b'a', b'z'), Some(1.2));
/// assert_eq!(costs.insert_cost(200), None);
/// # Ok::<(), strdist::StrDistError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CostModel<F: Cost = f64> {
    /// Cost of inserting each symbol.
    insert: CostTable<F>,
    /// Cost of deleting each symbol.
    delete: CostTable<F>,
    /// Cost of replacing the row symbol with the column symbol.
    substitute: Box<SubstitutionTable<F>>,
}

impl<F: Cost> Default for CostModel<F> {
    fn default() -> Self {
        Self::uniform(F::ONE, F::ONE, F::ONE)
    }
}

impl CostModel<f64> {
    /// Returns the shared unit cost model, where every edit costs `1`.
    ///
    /// The model is created on first use and is read-only for the rest of the
    /// process.
    #[must_use]
    pub fn unit() -> &'static Self {
        &UNIT
    }
}

impl<F: Cost> CostModel<F> {
    /// Creates a new `CostModel` from fully populated tables.
    #[must_use]
    pub const fn new(insert: CostTable<F>, delete: CostTable<F>, substitute: Box<SubstitutionTable<F>>) -> Self {
        Self {
            insert,
            delete,
            substitute,
        }
    }

    /// Creates a `CostModel` where every insertion, deletion and substitution
    /// has the same respective cost.
    #[must_use]
    pub fn uniform(insert: F, delete: F, substitute: F) -> Self {
        Self::new(
            uniform_insert_costs(insert),
            uniform_delete_costs(delete),
            uniform_substitute_costs(substitute),
        )
    }

    /// Creates a `CostModel` from dynamically sized tables.
    ///
    /// # Errors
    ///
    /// * If `insert` or `delete` does not have exactly `ALPHABET_SIZE` entries.
    /// * If `substitute` does not have exactly `ALPHABET_SIZE` rows of
    ///   `ALPHABET_SIZE` entries each.
    pub fn try_from_tables(insert: &[F], delete: &[F], substitute: &[Vec<F>]) -> Result<Self, StrDistError> {
        let insert = fixed_table("insert", insert)?;
        let delete = fixed_table("delete", delete)?;

        if substitute.len() != ALPHABET_SIZE {
            return Err(StrDistError::TableSize {
                table: "substitute",
                expected: ALPHABET_SIZE,
                actual: substitute.len(),
            });
        }
        let mut table = uniform_substitute_costs(F::ZERO);
        for (row, costs) in table.iter_mut().zip(substitute) {
            *row = fixed_table("substitute row", costs)?;
        }

        Ok(Self::new(insert, delete, table))
    }

    /// Returns the cost of inserting `symbol`, or `None` if it is outside the
    /// alphabet.
    #[must_use]
    pub fn insert_cost(&self, symbol: Symbol) -> Option<F> {
        self.insert.get(usize::from(symbol)).copied()
    }

    /// Returns the cost of deleting `symbol`, or `None` if it is outside the
    /// alphabet.
    #[must_use]
    pub fn delete_cost(&self, symbol: Symbol) -> Option<F> {
        self.delete.get(usize::from(symbol)).copied()
    }

    /// Returns the cost of replacing `from` with `to`, or `None` if either is
    /// outside the alphabet.
    ///
    /// This is the raw table entry. The distance computation never reads it
    /// when `from == to`.
    #[must_use]
    pub fn substitute_cost(&self, from: Symbol, to: Symbol) -> Option<F> {
        self.substitute
            .get(usize::from(from))
            .and_then(|row| row.get(usize::from(to)))
            .copied()
    }

    /// Returns the insertion table.
    #[must_use]
    pub const fn insert_table(&self) -> &CostTable<F> {
        &self.insert
    }

    /// Returns the deletion table.
    #[must_use]
    pub const fn delete_table(&self) -> &CostTable<F> {
        &self.delete
    }

    /// Returns the substitution table.
    #[must_use]
    pub fn substitute_table(&self) -> &SubstitutionTable<F> {
        &self.substitute
    }

    /// Sets the cost of inserting `symbol`.
    ///
    /// # Errors
    ///
    /// If `symbol` is outside the alphabet.
    pub fn set_insert_cost(&mut self, symbol: Symbol, cost: F) -> Result<(), StrDistError> {
        let i = check_symbol(u32::from(symbol), 0)?;
        self.insert[i] = cost;
        Ok(())
    }

    /// Sets the cost of deleting `symbol`.
    ///
    /// # Errors
    ///
    /// If `symbol` is outside the alphabet.
    pub fn set_delete_cost(&mut self, symbol: Symbol, cost: F) -> Result<(), StrDistError> {
        let i = check_symbol(u32::from(symbol), 0)?;
        self.delete[i] = cost;
        Ok(())
    }

    /// Sets the cost of replacing `from` with `to`.
    ///
    /// # Errors
    ///
    /// If either symbol is outside the alphabet.
    pub fn set_substitute_cost(&mut self, from: Symbol, to: Symbol, cost: F) -> Result<(), StrDistError> {
        let i = check_symbol(u32::from(from), 0)?;
        let j = check_symbol(u32::from(to), 1)?;
        self.substitute[i][j] = cost;
        Ok(())
    }

    /// Builder form of `set_insert_cost`.
    ///
    /// # Errors
    ///
    /// See `set_insert_cost`.
    pub fn with_insert_cost(mut self, symbol: Symbol, cost: F) -> Result<Self, StrDistError> {
        self.set_insert_cost(symbol, cost)?;
        Ok(self)
    }

    /// Builder form of `set_delete_cost`.
    ///
    /// # Errors
    ///
    /// See `set_delete_cost`.
    pub fn with_delete_cost(mut self, symbol: Symbol, cost: F) -> Result<Self, StrDistError> {
        self.set_delete_cost(symbol, cost)?;
        Ok(self)
    }

    /// Builder form of `set_substitute_cost`.
    ///
    /// # Errors
    ///
    /// See `set_substitute_cost`.
    pub fn with_substitute_cost(mut self, from: Symbol, to: Symbol, cost: F) -> Result<Self, StrDistError> {
        self.set_substitute_cost(from, to, cost)?;
        Ok(self)
    }

    /// Cost of inserting a symbol already known to be in the alphabet.
    #[inline(always)]
    pub(crate) fn ins(&self, symbol: Symbol) -> F {
        self.insert[usize::from(symbol)]
    }

    /// Cost of deleting a symbol already known to be in the alphabet.
    #[inline(always)]
    pub(crate) fn del(&self, symbol: Symbol) -> F {
        self.delete[usize::from(symbol)]
    }

    /// Cost of substituting symbols already known to be in the alphabet.
    #[inline(always)]
    pub(crate) fn sub(&self, from: Symbol, to: Symbol) -> F {
        self.substitute[usize::from(from)][usize::from(to)]
    }
}

/// Converts a slice into a fixed-size table, naming the table on failure.
fn fixed_table<F: Cost>(table: &'static str, costs: &[F]) -> Result<CostTable<F>, StrDistError> {
    costs.try_into().map_err(|_| StrDistError::TableSize {
        table,
        expected: ALPHABET_SIZE,
        actual: costs.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_tables() {
        let ins = uniform_insert_costs(2.5_f32);
        let del = uniform_delete_costs(0.5_f32);
        let sub = uniform_substitute_costs(3.0_f32);

        assert!(ins.iter().all(|&c| c == 2.5));
        assert!(del.iter().all(|&c| c == 0.5));
        assert_eq!(sub.len(), ALPHABET_SIZE);
        assert!(sub.iter().flatten().all(|&c| c == 3.0));
        assert_eq!(sub[7][7], 3.0);
    }

    #[test]
    fn unit_is_shared() {
        let a = CostModel::unit();
        let b = CostModel::unit();
        assert!(core::ptr::eq(a, b));
        assert_eq!(a, &CostModel::<f64>::default());
        assert_eq!(a.substitute_cost(b'x', b'y'), Some(1.0));
    }

    #[test]
    fn setters_reject_out_of_range() {
        let mut costs = CostModel::<f64>::default();
        assert!(costs.set_insert_cost(b'a', 5.0).is_ok());
        assert_eq!(costs.insert_cost(b'a'), Some(5.0));
        assert_eq!(costs.insert_cost(b'b'), Some(1.0));

        let err = costs.set_delete_cost(200, 1.0);
        assert_eq!(
            err,
            Err(StrDistError::SymbolOutOfRange {
                symbol: 200,
                position: 0
            })
        );

        let err = costs.set_substitute_cost(b'a', 128, 1.0);
        assert!(matches!(err, Err(StrDistError::SymbolOutOfRange { symbol: 128, .. })));
    }

    #[test]
    fn dynamic_tables() -> Result<(), StrDistError> {
        let ins = vec![1.0; ALPHABET_SIZE];
        let mut del = vec![2.0; ALPHABET_SIZE];
        let sub = vec![vec![3.0; ALPHABET_SIZE]; ALPHABET_SIZE];

        let costs = CostModel::try_from_tables(&ins, &del, &sub)?;
        assert_eq!(costs, CostModel::uniform(1.0, 2.0, 3.0));

        del.pop();
        let err = CostModel::try_from_tables(&ins, &del, &sub);
        assert_eq!(
            err,
            Err(StrDistError::TableSize {
                table: "delete",
                expected: ALPHABET_SIZE,
                actual: ALPHABET_SIZE - 1
            })
        );

        let mut sub = sub;
        sub[3].push(0.0);
        let err = CostModel::try_from_tables(&ins, &ins, &sub);
        assert!(matches!(err, Err(StrDistError::TableSize { table: "substitute row", .. })));

        let err = CostModel::try_from_tables(&ins, &ins, &sub[..10]);
        assert!(matches!(err, Err(StrDistError::TableSize { table: "substitute", actual: 10, .. })));

        Ok(())
    }
}
