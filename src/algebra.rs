//! Example algebraic-structure records.
//!
//! Plain records of operations a caller can plug into generic
//! algorithms as capabilities. The tree modules do not consume them.

/// Boolean algebra operations over `A`.
pub struct BooleanAlgebra<A> {
    pub meet: fn(A, A) -> A,
    pub join: fn(A, A) -> A,
    pub zero: A,
    pub one: A,
    pub implies: fn(A, A) -> A,
    pub not: fn(A) -> A,
}

pub fn bool_algebra() -> BooleanAlgebra<bool> {
    BooleanAlgebra {
        meet: |x, y| x && y,
        join: |x, y| x || y,
        zero: false,
        one: true,
        implies: |x, y| !x || y,
        not: |x| !x,
    }
}

/// Field operations over `A`. `rem` is the `%` operation (`mod` in
/// mathematical notation).
pub struct Field<A> {
    pub add: fn(A, A) -> A,
    pub zero: A,
    pub mul: fn(A, A) -> A,
    pub one: A,
    pub sub: fn(A, A) -> A,
    pub degree: fn(&A) -> u32,
    pub div: fn(A, A) -> A,
    pub rem: fn(A, A) -> A,
}

/// Field over `f64`. Division and remainder by zero follow IEEE-754
/// (non-finite results, no panic).
pub fn f64_field() -> Field<f64> {
    Field {
        add: |x, y| x + y,
        zero: 0.0,
        mul: |x, y| x * y,
        one: 1.0,
        sub: |x, y| x - y,
        degree: |_| 1,
        div: |x, y| x / y,
        rem: |x, y| x % y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_algebra_tables() {
        let algebra = bool_algebra();
        assert!((algebra.meet)(true, true));
        assert!(!(algebra.meet)(true, false));
        assert!((algebra.join)(false, true));
        assert!((algebra.implies)(false, false));
        assert!(!(algebra.implies)(true, false));
        assert!((algebra.not)(algebra.zero));
        assert!(!(algebra.not)(algebra.one));
    }

    #[test]
    fn test_f64_field_division_by_zero_is_non_finite() {
        let field = f64_field();
        assert!((field.div)(1.0, field.zero).is_infinite());
        assert!((field.rem)(1.0, field.zero).is_nan());
        assert_eq!((field.degree)(&42.0), 1);
    }
}
