//! The `set!` macro for building a [`Set`](super::Set) from literal values.

/// Creates a [`Set`](crate::collection::Set) holding the given values.
///
/// `set![]` creates an empty set; `set![a, b, c]` adds each value in turn,
/// so duplicates collapse.
///
/// # Syntax
///
/// - `set![]` - An empty set
/// - `set![a]` - A set holding `a`
/// - `set![a, b, ...]` - A set holding the distinct values among `a, b, ...`
///
/// # Examples
///
/// ```
/// use setkit::set;
///
/// let colors = set!["red", "blue", "green", "blue"];
/// assert_eq!(colors.size(), 3);
///
/// let empty: setkit::collection::Set<i32> = set![];
/// assert!(empty.is_empty());
/// ```
///
/// Mixed value kinds go through a caller-defined enum:
///
/// ```
/// use setkit::set;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// enum Item {
///     Text(&'static str),
///     Number(i64),
/// }
///
/// let items = set![Item::Text("one"), Item::Number(4), Item::Text("one")];
/// assert_eq!(items.size(), 2);
/// assert!(items.contains(&Item::Number(4)));
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::collection::Set::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut set = $crate::collection::Set::new();
        $(
            set.add($value);
        )+
        set
    }};
}
