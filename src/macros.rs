/// Builds a [`Record`](crate::Record) from `key => value` pairs.
///
/// Values go through [`Value::from`](crate::Value), so strings, numbers,
/// booleans, and `Option`s all work directly.
///
/// # Examples
///
/// ```
/// use checkrail::{record, Value};
///
/// let record = record! {
///     "name" => "ada",
///     "age" => 36,
///     "admin" => true,
///     "nickname" => None::<&str>,
/// };
/// assert_eq!(record["name"], Value::Str("ada".to_string()));
/// assert_eq!(record["nickname"], Value::Absent);
///
/// let empty = record! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        record
    }};
}
