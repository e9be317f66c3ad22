/// Shorthand for creating a fraction in tests.
#[macro_export]
macro_rules! F {
    ($value:expr) => {
        $crate::number::Fraction::from($value as i64)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::number::Fraction::new($numerator, $denominator).unwrap()
    };
}
