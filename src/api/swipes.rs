use crate::{api, data::KeepVote};
use reqwest::Method;

pub struct FetchKeepVotes;
impl FetchKeepVotes {
	/// Every `keep` vote targeting one of the given profiles.
	pub async fn on_profiles(profile_ids: &[String]) -> anyhow::Result<Vec<KeepVote>> {
		api::rest::<Vec<KeepVote>>(Method::GET, "/swipes")
			.with_query(&[
				("select", "user_id,friend_id".to_owned()),
				("friend_id", format!("in.({})", profile_ids.join(","))),
				("vote_type", "eq.keep".to_owned()),
			])
			.send()
			.await
	}

	/// Every `keep` vote the given user has cast.
	pub async fn by_user(user_id: &str) -> anyhow::Result<Vec<KeepVote>> {
		api::rest::<Vec<KeepVote>>(Method::GET, "/swipes")
			.with_query(&[
				("select", "user_id,friend_id".to_owned()),
				("user_id", format!("eq.{user_id}")),
				("vote_type", "eq.keep".to_owned()),
			])
			.send()
			.await
	}
}
