use gloo_storage::{SessionStorage, Storage};
use serde::{Deserialize, Serialize};

pub trait SessionValue {
	fn id() -> &'static str;

	fn load() -> Option<Self>
	where
		Self: for<'de> Deserialize<'de>,
	{
		SessionStorage::get::<Self>(Self::id()).ok()
	}

	fn apply_to_session(&self)
	where
		Self: Serialize,
	{
		let _ = SessionStorage::set(Self::id(), self);
	}

	fn delete() {
		SessionStorage::delete(Self::id());
	}
}

/// The signed-in user as reported by the auth provider. Lifecycle of the
/// account itself is entirely the provider's business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
	pub id: String,
	pub email: String,
	pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
	pub access_token: String,
	pub user: AuthUser,
}
impl SessionValue for AuthSession {
	fn id() -> &'static str {
		"auth_session"
	}
}

/// Profile ids the user has already voted on during this browser session.
/// The vote store assumes at most one vote per (user, profile) pair; the deck
/// consults this record so a profile is never offered twice.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct VotedProfiles(Vec<String>);
impl VotedProfiles {
	pub fn contains(&self, profile_id: &str) -> bool {
		self.0.iter().any(|id| id == profile_id)
	}

	pub fn insert(&mut self, profile_id: String) {
		if !self.contains(&profile_id) {
			self.0.push(profile_id);
		}
	}
}
impl SessionValue for VotedProfiles {
	fn id() -> &'static str {
		"voted_profiles"
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn auth_session_round_trips_through_json() {
		let session = AuthSession {
			access_token: "token".into(),
			user: AuthUser {
				id: "user-1".into(),
				email: "someone@example.com".into(),
				username: "someone".into(),
			},
		};
		let encoded = serde_json::to_string(&session).unwrap();
		let decoded: AuthSession = serde_json::from_str(&encoded).unwrap();
		assert_eq!(session, decoded);
	}

	#[test]
	fn voted_profiles_ignores_duplicates() {
		let mut voted = VotedProfiles::default();
		voted.insert("a".into());
		voted.insert("b".into());
		voted.insert("a".into());
		assert!(voted.contains("a"));
		assert!(voted.contains("b"));
		assert!(!voted.contains("c"));
		assert_eq!(serde_json::to_string(&voted).unwrap(), r#"["a","b"]"#);
	}
}
