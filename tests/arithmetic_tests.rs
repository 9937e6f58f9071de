// tests/arithmetic_tests.rs

#[cfg(test)]
mod tests {
    use num_traits::ToPrimitive;
    use ratio_core::{Rational, RationalError};

    fn rat(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    // === 公開 API を通した基本シナリオ ===

    #[test]
    fn test_canonical_equivalence() {
        // 1/2 と 2/4 は同じ値であり、同じ表示を持つ
        assert_eq!(rat(1, 2), rat(2, 4));
        assert_eq!(rat(2, 4).to_string(), "1/2");
    }

    #[test]
    fn test_documented_addition_example() {
        let sum = rat(1, 2) + rat(3, 4);
        assert_eq!(sum, rat(5, 4));
        assert_eq!(sum.to_string(), "5/4");
    }

    #[test]
    fn test_whole_number_round_trip() {
        let five = rat(5, 1);
        assert_eq!(five.to_string(), "5");
        assert_eq!(five.to_integer(), 5);
    }

    #[test]
    fn test_float_conversion_is_exact_for_dyadic() {
        // 3/4 は二進小数で正確に表現できるため等値比較が成立する
        assert_eq!(rat(3, 4).to_f64(), Some(0.75));
    }

    #[test]
    fn test_division_by_zero_paths() {
        assert_eq!(Rational::new(1, 0), Err(RationalError::DivisionByZero));
        assert_eq!(
            rat(1, 2).checked_div(rat(0, 5)),
            Err(RationalError::DivisionByZero)
        );
    }

    #[test]
    fn test_error_is_reportable() {
        let e = Rational::new(1, 0).unwrap_err();
        assert_eq!(e.to_string(), "Division by zero");
    }

    #[test]
    fn test_mixed_expression() {
        // (1/2 + 1/3) * 6/5 - 1 = 5/6 * 6/5 - 1 = 0
        let result = (rat(1, 2) + rat(1, 3)) * rat(6, 5) - 1;
        assert_eq!(result, rat(0, 1));
        assert_eq!(result.to_string(), "0");
    }

    #[test]
    fn test_scalar_operands_agree_on_both_sides() {
        assert_eq!(rat(1, 2) + 1, 1 + rat(1, 2));
        assert_eq!(rat(1, 2) * 3, 3 * rat(1, 2));
        // 除算のみ順序依存
        assert_ne!(rat(1, 2) / 2, 2 / rat(1, 2));
    }

    #[test]
    fn test_negative_arguments_normalize() {
        assert_eq!(rat(-1, 2).to_string(), "-1/2");
        assert_eq!(rat(1, -2).to_string(), "-1/2");
        assert_eq!(rat(-1, -2).to_string(), "1/2");
        assert_eq!(rat(-1, 2), rat(1, -2));
    }

    #[test]
    fn test_values_are_independent() {
        // 演算は被演算子を変更しない
        let a = rat(1, 2);
        let b = rat(3, 4);
        let _ = a + b;
        let _ = a * b;
        assert_eq!(a, rat(1, 2));
        assert_eq!(b, rat(3, 4));
    }
}
