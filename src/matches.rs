//! Mutual-keep resolution: user A matches user B when A has kept some
//! profile B posted and B has kept some profile A posted.

use crate::data::{KeepVote, Profile};
use itertools::Itertools;
use std::collections::HashSet;

/// The lookups match resolution needs from the backing store. The remote
/// implementation issues one request per call; a store with join support
/// could satisfy the same contract in fewer round trips.
pub trait MatchStore {
	async fn profile_ids_owned_by(&self, user_id: &str) -> anyhow::Result<Vec<String>>;
	async fn keep_votes_on(&self, profile_ids: &[String]) -> anyhow::Result<Vec<KeepVote>>;
	async fn kept_profile_ids_by(&self, user_id: &str) -> anyhow::Result<Vec<String>>;
	async fn profiles_owned_by(&self, user_ids: &[String]) -> anyhow::Result<Vec<Profile>>;
}

/// Computes the profiles posted by every user with whom `user_id` has a
/// mutual keep. Computed fresh on every call; any failed lookup aborts the
/// whole computation and partial results are discarded. Result order is
/// whatever the store returns.
pub async fn resolve_matches<S: MatchStore>(store: &S, user_id: &str) -> anyhow::Result<Vec<Profile>> {
	let own_ids = store.profile_ids_owned_by(user_id).await?;
	if own_ids.is_empty() {
		return Ok(Vec::new());
	}

	let inbound_keeps = store.keep_votes_on(&own_ids).await?;
	if inbound_keeps.is_empty() {
		return Ok(Vec::new());
	}

	let kept_by_me: HashSet<String> = store.kept_profile_ids_by(user_id).await?.into_iter().collect();

	let mut matched_users = Vec::new();
	let distinct_voters = inbound_keeps.iter().map(|vote| vote.user_id.as_str()).unique();
	for voter in distinct_voters {
		// Keeping your own posts is not a relationship with anyone.
		if voter == user_id {
			continue;
		}
		let their_ids = store.profile_ids_owned_by(voter).await?;
		if their_ids.iter().any(|id| kept_by_me.contains(id)) {
			matched_users.push(voter.to_owned());
		}
	}

	if matched_users.is_empty() {
		return Ok(Vec::new());
	}
	store.profiles_owned_by(&matched_users).await
}

/// [MatchStore] over the hosted backend, one request per lookup.
pub struct RemoteStore;
impl MatchStore for RemoteStore {
	async fn profile_ids_owned_by(&self, user_id: &str) -> anyhow::Result<Vec<String>> {
		crate::api::friends::FetchFriendIds::owned_by(user_id).await
	}

	async fn keep_votes_on(&self, profile_ids: &[String]) -> anyhow::Result<Vec<KeepVote>> {
		crate::api::swipes::FetchKeepVotes::on_profiles(profile_ids).await
	}

	async fn kept_profile_ids_by(&self, user_id: &str) -> anyhow::Result<Vec<String>> {
		let votes = crate::api::swipes::FetchKeepVotes::by_user(user_id).await?;
		Ok(votes.into_iter().map(|vote| vote.friend_id).collect())
	}

	async fn profiles_owned_by(&self, user_ids: &[String]) -> anyhow::Result<Vec<Profile>> {
		crate::api::friends::FetchFriends::owned_by_any(user_ids).await
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use futures::executor::block_on;

	#[derive(Default)]
	struct InMemoryStore {
		profiles: Vec<Profile>,
		keeps: Vec<KeepVote>,
		fail_vote_lookup: bool,
	}
	impl InMemoryStore {
		fn with_profile(mut self, id: &str, owner: &str) -> Self {
			self.profiles.push(Profile {
				id: id.into(),
				user_id: owner.into(),
				..Default::default()
			});
			self
		}

		fn with_keep(mut self, voter: &str, profile: &str) -> Self {
			self.keeps.push(KeepVote {
				user_id: voter.into(),
				friend_id: profile.into(),
			});
			self
		}
	}
	impl MatchStore for InMemoryStore {
		async fn profile_ids_owned_by(&self, user_id: &str) -> anyhow::Result<Vec<String>> {
			Ok(self
				.profiles
				.iter()
				.filter(|profile| profile.user_id == user_id)
				.map(|profile| profile.id.clone())
				.collect())
		}

		async fn keep_votes_on(&self, profile_ids: &[String]) -> anyhow::Result<Vec<KeepVote>> {
			if self.fail_vote_lookup {
				return Err(anyhow::anyhow!("lookup refused"));
			}
			Ok(self
				.keeps
				.iter()
				.filter(|vote| profile_ids.contains(&vote.friend_id))
				.cloned()
				.collect())
		}

		async fn kept_profile_ids_by(&self, user_id: &str) -> anyhow::Result<Vec<String>> {
			Ok(self
				.keeps
				.iter()
				.filter(|vote| vote.user_id == user_id)
				.map(|vote| vote.friend_id.clone())
				.collect())
		}

		async fn profiles_owned_by(&self, user_ids: &[String]) -> anyhow::Result<Vec<Profile>> {
			Ok(self
				.profiles
				.iter()
				.filter(|profile| user_ids.contains(&profile.user_id))
				.cloned()
				.collect())
		}
	}

	#[test]
	fn mutual_keeps_match_both_directions() {
		let store = InMemoryStore::default()
			.with_profile("p1", "alice")
			.with_profile("p2", "bob")
			.with_keep("bob", "p1")
			.with_keep("alice", "p2");

		let for_alice = block_on(resolve_matches(&store, "alice")).unwrap();
		assert_eq!(for_alice.len(), 1);
		assert_eq!(for_alice[0].id, "p2");

		let for_bob = block_on(resolve_matches(&store, "bob")).unwrap();
		assert_eq!(for_bob.len(), 1);
		assert_eq!(for_bob[0].id, "p1");
	}

	#[test]
	fn one_sided_keep_matches_nobody() {
		let store = InMemoryStore::default()
			.with_profile("p1", "alice")
			.with_profile("p2", "bob")
			.with_keep("bob", "p1");

		assert!(block_on(resolve_matches(&store, "alice")).unwrap().is_empty());
		assert!(block_on(resolve_matches(&store, "bob")).unwrap().is_empty());
	}

	#[test]
	fn no_owned_profiles_short_circuits_empty() {
		let store = InMemoryStore::default()
			.with_profile("p2", "bob")
			.with_keep("alice", "p2");
		assert!(block_on(resolve_matches(&store, "alice")).unwrap().is_empty());
	}

	#[test]
	fn no_inbound_keeps_short_circuits_empty() {
		let store = InMemoryStore::default().with_profile("p1", "alice");
		assert!(block_on(resolve_matches(&store, "alice")).unwrap().is_empty());
	}

	#[test]
	fn cross_votes_do_not_count() {
		// Cross-offs never reach the store trait; only keeps are fetched.
		// A keep on an unrelated third profile must not bridge a match.
		let store = InMemoryStore::default()
			.with_profile("p1", "alice")
			.with_profile("p2", "bob")
			.with_profile("p3", "carol")
			.with_keep("bob", "p1")
			.with_keep("alice", "p3");
		assert!(block_on(resolve_matches(&store, "alice")).unwrap().is_empty());
	}

	#[test]
	fn duplicate_votes_yield_one_match() {
		let store = InMemoryStore::default()
			.with_profile("p1", "alice")
			.with_profile("p2", "bob")
			.with_keep("bob", "p1")
			.with_keep("bob", "p1")
			.with_keep("alice", "p2")
			.with_keep("alice", "p2");
		let matches = block_on(resolve_matches(&store, "alice")).unwrap();
		assert_eq!(matches.len(), 1);
	}

	#[test]
	fn keeping_your_own_profile_is_not_a_match() {
		let store = InMemoryStore::default()
			.with_profile("p1", "alice")
			.with_keep("alice", "p1");
		assert!(block_on(resolve_matches(&store, "alice")).unwrap().is_empty());
	}

	#[test]
	fn matched_user_contributes_all_their_profiles() {
		let store = InMemoryStore::default()
			.with_profile("p1", "alice")
			.with_profile("p2", "bob")
			.with_profile("p3", "bob")
			.with_keep("bob", "p1")
			.with_keep("alice", "p2");
		let matches = block_on(resolve_matches(&store, "alice")).unwrap();
		let ids: Vec<_> = matches.iter().map(|profile| profile.id.as_str()).collect();
		assert_eq!(ids, vec!["p2", "p3"]);
	}

	#[test]
	fn any_failed_lookup_aborts_the_whole_computation() {
		let mut store = InMemoryStore::default()
			.with_profile("p1", "alice")
			.with_profile("p2", "bob")
			.with_keep("bob", "p1")
			.with_keep("alice", "p2");
		store.fail_vote_lookup = true;
		assert!(block_on(resolve_matches(&store, "alice")).is_err());
	}
}
