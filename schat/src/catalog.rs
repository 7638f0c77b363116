//! Static, ordered topic catalog.
//!
//! ```rust
//! use schat::TopicCatalog;
//!
//! let catalog = TopicCatalog::courses();
//! assert_eq!(catalog.len(), 6);
//! assert_eq!(catalog.get("math101").map(|t| t.display_name.as_str()), Some("Mathematics 101"));
//! ```

use crate::Topic;

const COURSES: [(&str, &str); 6] = [
    ("math101", "Mathematics 101"),
    ("physics201", "Physics 201"),
    ("chemistry150", "Chemistry 150"),
    ("biology110", "Biology 110"),
    ("english102", "English Literature 102"),
    ("history200", "World History 200"),
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TopicCatalog {
    topics: Vec<Topic>,
}

impl TopicCatalog {
    /// Builds a catalog in the given order. Later duplicates of an id are dropped.
    pub fn new(topics: impl IntoIterator<Item = Topic>) -> Self {
        let mut unique: Vec<Topic> = Vec::new();
        for topic in topics {
            if !unique.iter().any(|existing| existing.id == topic.id) {
                unique.push(topic);
            }
        }

        Self { topics: unique }
    }

    pub fn courses() -> Self {
        Self::new(COURSES.iter().map(|(id, name)| Topic::new(*id, *name)))
    }

    pub fn get(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.id.as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Topic> {
        self.topics.iter()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
