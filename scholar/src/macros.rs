/// Creates a single [`Topic`](crate::Topic) from an id and display name.
///
/// ```rust
/// use scholar::sc_topic;
///
/// let topic = sc_topic!("math101" => "Mathematics 101");
/// assert_eq!(topic.id.as_str(), "math101");
/// assert_eq!(topic.greeting(), "Hi! I'm your Mathematics 101 assistant. How can I help you today?");
/// ```
#[macro_export]
macro_rules! sc_topic {
    ($id:expr => $display_name:expr $(,)?) => {
        $crate::Topic::new($id, $display_name)
    };
}

/// Creates a [`TopicCatalog`](crate::TopicCatalog) from id/name pairs, in order.
///
/// ```rust
/// use scholar::sc_catalog;
///
/// let catalog = sc_catalog![
///     "math101" => "Mathematics 101",
///     "physics201" => "Physics 201",
/// ];
///
/// assert_eq!(catalog.len(), 2);
/// assert!(catalog.contains("physics201"));
/// ```
#[macro_export]
macro_rules! sc_catalog {
    () => {
        $crate::TopicCatalog::default()
    };
    ($($id:expr => $display_name:expr),+ $(,)?) => {
        $crate::TopicCatalog::new(vec![$($crate::sc_topic!($id => $display_name)),+])
    };
}
