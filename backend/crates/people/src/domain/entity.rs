//! Person Entity

use kernel::id::PersonId;

/// A listed person. Only the id is constrained (unique primary key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub email: String,
}

impl Person {
    /// New person without an id; the store assigns one on insert.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: PersonId::UNASSIGNED,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn with_id(mut self, id: PersonId) -> Self {
        self.id = id;
        self
    }

    /// Apply an edit the way partial updates behave: empty fields keep the
    /// stored value.
    pub fn merge_edit(&mut self, edit: &Person) {
        if !edit.name.is_empty() {
            self.name = edit.name.clone();
        }
        if !edit.email.is_empty() {
            self.email = edit.email.clone();
        }
    }
}
