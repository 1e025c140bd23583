use crate::{
	config,
	response::InvalidJson,
	session::{AuthSession, AuthUser},
};
use serde::Deserialize;

/// The provider's human-readable refusal (wrong password, taken email, and
/// so on), surfaced to the user verbatim.
#[derive(thiserror::Error, Debug)]
#[error("{0}")]
pub struct AuthFailed(pub String);

#[derive(Deserialize)]
struct SessionBody {
	access_token: String,
	user: UserBody,
}
#[derive(Deserialize)]
struct UserBody {
	id: String,
	#[serde(default)]
	email: Option<String>,
	#[serde(default)]
	user_metadata: Metadata,
}
#[derive(Default, Deserialize)]
struct Metadata {
	#[serde(default)]
	username: Option<String>,
}

impl SessionBody {
	fn into_session(self, fallback_email: &str) -> AuthSession {
		AuthSession {
			access_token: self.access_token,
			user: AuthUser {
				id: self.user.id,
				email: self.user.email.unwrap_or_else(|| fallback_email.to_owned()),
				username: self.user.user_metadata.username.unwrap_or_default(),
			},
		}
	}
}

pub struct SignIn;
impl SignIn {
	pub async fn post(email: &str, password: &str) -> anyhow::Result<AuthSession> {
		let endpoint = format!("{}/auth/v1/token?grant_type=password", config::PROJECT_URL);
		let text = send(&endpoint, &serde_json::json!({ "email": email, "password": password })).await?;
		let body: SessionBody = serde_json::from_str(&text).map_err(|err| InvalidJson(text, err))?;
		Ok(body.into_session(email))
	}
}

pub struct SignUp;
impl SignUp {
	/// Registers the account. The provider only returns a usable session when
	/// it confirms addresses automatically; otherwise the user signs in after
	/// confirming their email.
	pub async fn post(email: &str, password: &str, username: &str) -> anyhow::Result<Option<AuthSession>> {
		let endpoint = format!("{}/auth/v1/signup", config::PROJECT_URL);
		let payload = serde_json::json!({
			"email": email,
			"password": password,
			"data": { "username": username },
		});
		let text = send(&endpoint, &payload).await?;
		match serde_json::from_str::<SessionBody>(&text) {
			Ok(body) => Ok(Some(body.into_session(email))),
			Err(_) => Ok(None),
		}
	}
}

async fn send(endpoint: &str, payload: &serde_json::Value) -> anyhow::Result<String> {
	let response = reqwest::Client::new()
		.post(endpoint)
		.header("apikey", config::ANON_KEY)
		.header("Content-Type", "application/json")
		.json(payload)
		.send()
		.await?;
	let status = response.status();
	let text = response.text().await?;
	if !status.is_success() {
		return Err(AuthFailed(provider_message(&text)))?;
	}
	Ok(text)
}

/// Digs the message out of whichever error envelope the provider used.
fn provider_message(text: &str) -> String {
	#[derive(Deserialize)]
	struct ErrorBody {
		#[serde(default)]
		error_description: Option<String>,
		#[serde(default)]
		msg: Option<String>,
		#[serde(default)]
		message: Option<String>,
	}
	let parsed = serde_json::from_str::<ErrorBody>(text).ok();
	parsed
		.and_then(|body| body.error_description.or(body.msg).or(body.message))
		.unwrap_or_else(|| "Authentication failed".to_owned())
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn provider_message_reads_known_envelopes() {
		assert_eq!(
			provider_message(r#"{"error_description":"Invalid login credentials"}"#),
			"Invalid login credentials"
		);
		assert_eq!(provider_message(r#"{"msg":"User already registered"}"#), "User already registered");
		assert_eq!(provider_message(r#"{"message":"over quota"}"#), "over quota");
		assert_eq!(provider_message("not even json"), "Authentication failed");
	}

	#[test]
	fn session_body_prefers_provider_fields() {
		let text = r#"{
			"access_token": "jwt",
			"user": {
				"id": "user-1",
				"email": "provider@example.com",
				"user_metadata": { "username": "cooluser123" }
			}
		}"#;
		let body: SessionBody = serde_json::from_str(text).unwrap();
		let session = body.into_session("typed@example.com");
		assert_eq!(session.access_token, "jwt");
		assert_eq!(session.user.email, "provider@example.com");
		assert_eq!(session.user.username, "cooluser123");
	}

	#[test]
	fn session_body_falls_back_to_typed_email() {
		let text = r#"{ "access_token": "jwt", "user": { "id": "user-1" } }"#;
		let body: SessionBody = serde_json::from_str(text).unwrap();
		let session = body.into_session("typed@example.com");
		assert_eq!(session.user.email, "typed@example.com");
		assert_eq!(session.user.username, "");
	}
}
