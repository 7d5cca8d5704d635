// Assessment - explicit taxable/deductible totals
//
// Standalone utility, unrelated to the registries. A record type opts in by
// enumerating its taxable and deductible amounts; the totals are derived
// from those two lists alone, resolved at compile time through ordinary
// trait dispatch.

/// A record whose monetary total can be assessed.
///
/// Implementors list the amounts that count toward the total and the
/// amounts deducted from it; `sum`, `subtract` and `total` come for free.
pub trait Assessable {
    /// Amounts that add to the total
    fn taxable_amounts(&self) -> Vec<f64>;

    /// Amounts deducted from the total
    fn deductible_amounts(&self) -> Vec<f64>;

    /// Sum of the taxable amounts
    fn sum(&self) -> f64 {
        self.taxable_amounts().iter().sum()
    }

    /// Sum of the deductible amounts
    fn subtract(&self) -> f64 {
        self.deductible_amounts().iter().sum()
    }

    /// Taxable total minus deductible total
    fn total(&self) -> f64 {
        self.sum() - self.subtract()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Payslip {
        base: f64,
        bonus: f64,
        tax: f64,
        union_dues: f64,
    }

    impl Assessable for Payslip {
        fn taxable_amounts(&self) -> Vec<f64> {
            vec![self.base, self.bonus]
        }

        fn deductible_amounts(&self) -> Vec<f64> {
            vec![self.tax, self.union_dues]
        }
    }

    struct Blank;

    impl Assessable for Blank {
        fn taxable_amounts(&self) -> Vec<f64> {
            Vec::new()
        }

        fn deductible_amounts(&self) -> Vec<f64> {
            Vec::new()
        }
    }

    #[test]
    fn test_sum_subtract_total() {
        let slip = Payslip {
            base: 3000.0,
            bonus: 500.0,
            tax: 700.0,
            union_dues: 50.0,
        };

        assert_eq!(slip.sum(), 3500.0);
        assert_eq!(slip.subtract(), 750.0);
        assert_eq!(slip.total(), 2750.0);
    }

    #[test]
    fn test_record_with_no_amounts_totals_zero() {
        assert_eq!(Blank.sum(), 0.0);
        assert_eq!(Blank.subtract(), 0.0);
        assert_eq!(Blank.total(), 0.0);
    }
}
