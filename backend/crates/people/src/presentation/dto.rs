//! API DTOs (Data Transfer Objects)
//!
//! Missing request fields decode to their zero values, matching what
//! existing clients send.

use crate::domain::entity::Person;
use kernel::id::PersonId;
use serde::{Deserialize, Serialize};

/// Body of POST /person and PUT /person
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonRequest {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<PersonRequest> for Person {
    fn from(req: PersonRequest) -> Self {
        Person::new(req.name, req.email).with_id(PersonId::new(req.id))
    }
}

/// Person as returned by every person endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonResponse {
    pub id: PersonId,
    pub name: String,
    pub email: String,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            name: person.name,
            email: person.email,
        }
    }
}

/// Body of PUT /person/{id}/name
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateNameRequest {
    pub name: String,
}
