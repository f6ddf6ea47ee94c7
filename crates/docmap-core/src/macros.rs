/// Builds a [`Document`](crate::Document) from `key => value` pairs,
/// preserving the order the pairs are written in.
///
/// ```
/// use docmap_core::{doc, Value};
///
/// let document = doc! {
///     "_id" => "u1",
///     "first_name" => "Ada",
///     "address" => doc! { "city" => "London" },
/// };
///
/// assert_eq!(document.keys().next(), Some("_id"));
/// assert_eq!(document.get("first_name"), Some(&Value::from("Ada")));
/// ```
#[macro_export]
macro_rules! doc {
    () => {
        $crate::Document::new()
    };
    (
        $( $key:expr => $value:expr ),+ $(,)?
    ) => {{
        let mut document = $crate::Document::new();
        $(
            document.insert($key, $value);
        )+
        document
    }};
}
