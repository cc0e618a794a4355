use std::collections::HashMap;

use super::Identity;

/// Lookup of known students by id.
pub trait Directory: Send + Sync {
    fn lookup(&self, id: &str) -> Option<Identity>;
}

/// Directory held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    records: HashMap<String, Identity>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// The students enrolled in the campus demo.
    pub fn campus() -> Self {
        Self::new()
            .with_record(Identity::new(
                "99220040182",
                "Rohan Sharma",
                "rohan.sharma@university.edu",
            ))
            .with_record(Identity::new(
                "99220040183",
                "Priya Patel",
                "priya.patel@university.edu",
            ))
            .with_record(Identity::new(
                "99220040184",
                "Amit Singh",
                "amit.singh@university.edu",
            ))
    }

    /// Adds or replaces a record.
    pub fn with_record(mut self, identity: Identity) -> Self {
        self.insert(identity);
        self
    }

    /// Adds or replaces a record.
    pub fn insert(&mut self, identity: Identity) {
        self.records.insert(identity.id.clone(), identity);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Directory for InMemoryDirectory {
    fn lookup(&self, id: &str) -> Option<Identity> {
        self.records.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campus_directory() {
        let directory = InMemoryDirectory::campus();
        assert_eq!(directory.len(), 3);

        let rohan = directory.lookup("99220040182").unwrap();
        assert_eq!(rohan.name, "Rohan Sharma");
        assert_eq!(rohan.contact, "rohan.sharma@university.edu");

        assert!(directory.lookup("99220099999").is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let mut directory = InMemoryDirectory::new();
        directory.insert(Identity::new("1", "Old", "old@x"));
        directory.insert(Identity::new("1", "New", "new@x"));

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.lookup("1").unwrap().name, "New");
    }
}
