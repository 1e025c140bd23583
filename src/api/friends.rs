use crate::{
	api,
	data::{Profile, ProfileDraft, VoteKind},
};
use reqwest::Method;
use serde::Deserialize;

pub struct FetchFriends;
impl FetchFriends {
	/// The full swipe/browse deck, newest first.
	pub async fn get() -> anyhow::Result<Vec<Profile>> {
		api::rest::<Vec<Profile>>(Method::GET, "/friends")
			.with_query(&[("select", "*"), ("order", "created_at.desc")])
			.send()
			.await
	}

	pub async fn owned_by_any(user_ids: &[String]) -> anyhow::Result<Vec<Profile>> {
		api::rest::<Vec<Profile>>(Method::GET, "/friends")
			.with_query(&[
				("select", "*".to_owned()),
				("user_id", format!("in.({})", user_ids.join(","))),
			])
			.send()
			.await
	}
}

pub struct FetchFriendIds;
impl FetchFriendIds {
	pub async fn owned_by(user_id: &str) -> anyhow::Result<Vec<String>> {
		#[derive(Deserialize)]
		struct Row {
			id: String,
		}
		let rows = api::rest::<Vec<Row>>(Method::GET, "/friends")
			.with_query(&[("select", "id".to_owned()), ("user_id", format!("eq.{user_id}"))])
			.send()
			.await?;
		Ok(rows.into_iter().map(|row| row.id).collect())
	}
}

pub struct InsertFriend;
impl InsertFriend {
	pub async fn post(draft: &ProfileDraft) -> anyhow::Result<()> {
		api::rest::<()>(Method::POST, "/friends").with_json(draft).send_ok().await
	}
}

/// The remote vote procedure: appends the vote row and bumps the matching
/// aggregate counter in one server-side step.
pub struct VoteOnFriend;
impl VoteOnFriend {
	pub async fn post(profile_id: &str, kind: VoteKind) -> anyhow::Result<()> {
		api::rest::<()>(Method::POST, "/rpc/vote_on_friend")
			.with_json(&serde_json::json!({
				"friend_id": profile_id,
				"vote_type": kind.as_str(),
			}))
			.send_ok()
			.await
	}
}
