use serde::{Deserialize, Serialize};

/// One row of the `friends` table: a posted friend subject to voting. The
/// aggregate counters are maintained remotely by the vote procedure; the
/// client never recomputes them from raw votes.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
	pub id: String,
	pub user_id: String,
	pub nickname: String,
	pub useless_trait: String,
	pub tagline: String,
	#[serde(default)]
	pub keeps_count: u32,
	#[serde(default)]
	pub cross_offs_count: u32,
	#[serde(default)]
	pub photo_url: Option<String>,
	#[serde(default)]
	pub discord_username: Option<String>,
	#[serde(default)]
	pub interests: Option<String>,
	#[serde(default)]
	pub why_not_want: Option<String>,
	#[serde(default)]
	pub gender: Option<String>,
	#[serde(default)]
	pub created_at: Option<String>,
}

impl Profile {
	/// Keep-rate percentage, rounded to the nearest whole number. A profile
	/// nobody has voted on reads as 50%, a defined default rather than a
	/// division result.
	pub fn keep_rate(&self) -> u32 {
		// Widened so the scaled numerator cannot overflow at any counter value.
		let total = self.keeps_count as u64 + self.cross_offs_count as u64;
		if total == 0 {
			return 50;
		}
		((self.keeps_count as u64 * 100 + total / 2) / total) as u32
	}
}

/// Payload for posting a new friend. The owning user id is attached
/// server-side from the bearer token.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ProfileDraft {
	pub nickname: String,
	pub useless_trait: String,
	pub tagline: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub photo_url: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub discord_username: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub interests: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub why_not_want: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub gender: Option<String>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{0} is required")]
pub struct MissingField(pub &'static str);

impl ProfileDraft {
	/// Presence check only, performed before any network call.
	pub fn validate(&self) -> Result<(), MissingField> {
		if self.nickname.trim().is_empty() {
			return Err(MissingField("Nickname"));
		}
		if self.useless_trait.trim().is_empty() {
			return Err(MissingField("Useless trait"));
		}
		if self.tagline.trim().is_empty() {
			return Err(MissingField("Tagline"));
		}
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn keep_rate_rounds_to_nearest_percent() {
		let profile = Profile {
			keeps_count: 3,
			cross_offs_count: 1,
			..Default::default()
		};
		assert_eq!(profile.keep_rate(), 75);

		let profile = Profile {
			keeps_count: 1,
			cross_offs_count: 2,
			..Default::default()
		};
		assert_eq!(profile.keep_rate(), 33);

		let profile = Profile {
			keeps_count: 2,
			cross_offs_count: 1,
			..Default::default()
		};
		assert_eq!(profile.keep_rate(), 67);
	}

	#[test]
	fn keep_rate_defaults_to_half_without_votes() {
		assert_eq!(Profile::default().keep_rate(), 50);
	}

	#[test]
	fn keep_rate_holds_at_extreme_counter_values() {
		let profile = Profile {
			keeps_count: u32::MAX,
			cross_offs_count: 0,
			..Default::default()
		};
		assert_eq!(profile.keep_rate(), 100);

		let profile = Profile {
			keeps_count: u32::MAX,
			cross_offs_count: u32::MAX,
			..Default::default()
		};
		assert_eq!(profile.keep_rate(), 50);
	}

	#[test]
	fn draft_requires_all_mandatory_fields() {
		let mut draft = ProfileDraft {
			nickname: "Big Tony".into(),
			useless_trait: "Quotes every movie".into(),
			tagline: "A walking rerun".into(),
			..Default::default()
		};
		assert_eq!(draft.validate(), Ok(()));

		draft.tagline = "  ".into();
		assert_eq!(draft.validate(), Err(MissingField("Tagline")));

		draft.nickname.clear();
		assert_eq!(draft.validate(), Err(MissingField("Nickname")));
	}

	#[test]
	fn draft_omits_absent_optionals_from_json() {
		let draft = ProfileDraft {
			nickname: "Sleepy Steve".into(),
			useless_trait: "Naps anywhere".into(),
			tagline: "Horizontal by default".into(),
			..Default::default()
		};
		let encoded = serde_json::to_value(&draft).unwrap();
		let object = encoded.as_object().unwrap();
		assert!(!object.contains_key("photo_url"));
		assert!(!object.contains_key("gender"));
	}
}
