use serde::{Deserialize, Serialize};

/// The two swipe outcomes. Wire names match the vote procedure's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
	Keep,
	Cross,
}
impl VoteKind {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Keep => "keep",
			Self::Cross => "cross",
		}
	}
}
impl std::fmt::Display for VoteKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// A `keep` row of the `swipes` table, as much of it as match resolution
/// needs: who voted, and on which profile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeepVote {
	pub user_id: String,
	pub friend_id: String,
}
