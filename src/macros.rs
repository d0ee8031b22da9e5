/// Builds a `Vec<FormatValue>` from integers, big integers and strings.
///
/// Each element goes through `FormatValue::from`, so integer literals become
/// `FormatValue::Integer`, oversized unsigned values become `FormatValue::BigInt`, and
/// string expressions become `FormatValue::Text`.
///
/// # Examples
///
/// ```rust
/// use xsl_numbering::{format_sequence, numbers, FormatValue};
///
/// assert_eq!(numbers![1, 2], vec![FormatValue::Integer(1), FormatValue::Integer(2)]);
/// assert_eq!(format_sequence(&numbers![3, "b", 5], "1.1"), "3.b.5");
/// assert!(numbers![].is_empty());
/// ```
#[macro_export]
macro_rules! numbers {
    () => {
        ::std::vec::Vec::<$crate::FormatValue>::new()
    };

    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::FormatValue::from($value)),+]
    };
}
