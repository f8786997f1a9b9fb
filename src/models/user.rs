use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The local user this gateway acts on behalf of.
///
/// There is no identity provider behind this service; the user is generated
/// once at startup and stays fixed for the lifetime of the process, so
/// `GET /me` and `GET /token` always refer to the same identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    pub fn generate() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        Self {
            id: Uuid::new_v4().to_string(),
            name: format!("guest-{:03}", rng.random_range(0..1000u16)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_user_has_uuid_id() {
        let user = User::generate();

        Uuid::parse_str(&user.id).expect("id should be a valid UUID");
        assert!(user.name.starts_with("guest-"));
    }
}
