use super::Profile;

/// Narrows a locally held profile list. Gender compares exactly
/// (case-sensitive); interest tags match as case-insensitive substrings of
/// the profile's free-text interests field. Callers reset their browse
/// position to the first element whenever the filter changes.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BrowseFilter {
	pub gender: Option<String>,
	pub interests: Vec<String>,
}

impl BrowseFilter {
	pub fn is_empty(&self) -> bool {
		self.gender.is_none() && self.interests.is_empty()
	}

	pub fn matches(&self, profile: &Profile) -> bool {
		if let Some(gender) = &self.gender {
			if profile.gender.as_deref() != Some(gender.as_str()) {
				return false;
			}
		}
		if !self.interests.is_empty() {
			// A profile that never listed interests is excluded outright.
			let Some(interests) = &profile.interests else {
				return false;
			};
			let haystack = interests.to_lowercase();
			let any_hit = self
				.interests
				.iter()
				.any(|tag| haystack.contains(&tag.to_lowercase()));
			if !any_hit {
				return false;
			}
		}
		true
	}

	pub fn apply(&self, profiles: &[Profile]) -> Vec<Profile> {
		profiles
			.iter()
			.filter(|profile| self.matches(profile))
			.cloned()
			.collect()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn profile(gender: Option<&str>, interests: Option<&str>) -> Profile {
		Profile {
			gender: gender.map(str::to_owned),
			interests: interests.map(str::to_owned),
			..Default::default()
		}
	}

	#[test]
	fn gender_matches_exactly() {
		let profiles = vec![
			profile(Some("male"), None),
			profile(Some("female"), None),
			profile(Some("other"), None),
			profile(None, None),
		];
		let filter = BrowseFilter {
			gender: Some("female".into()),
			..Default::default()
		};
		let narrowed = filter.apply(&profiles);
		assert_eq!(narrowed.len(), 1);
		assert_eq!(narrowed[0].gender.as_deref(), Some("female"));
	}

	#[test]
	fn gender_is_case_sensitive() {
		let profiles = vec![profile(Some("Female"), None)];
		let filter = BrowseFilter {
			gender: Some("female".into()),
			..Default::default()
		};
		assert!(filter.apply(&profiles).is_empty());
	}

	#[test]
	fn interests_match_case_insensitive_substrings() {
		let profiles = vec![
			profile(None, Some("gaming, hiking")),
			profile(None, Some("Competitive GAMING")),
			profile(None, Some("board games")),
		];
		let filter = BrowseFilter {
			interests: vec!["Gaming".into()],
			..Default::default()
		};
		let narrowed = filter.apply(&profiles);
		assert_eq!(narrowed.len(), 2);
	}

	#[test]
	fn missing_interests_excludes_when_interest_filter_active() {
		let profiles = vec![profile(None, None)];
		let filter = BrowseFilter {
			interests: vec!["anything".into()],
			..Default::default()
		};
		assert!(filter.apply(&profiles).is_empty());
		assert_eq!(BrowseFilter::default().apply(&profiles).len(), 1);
	}

	#[test]
	fn any_requested_tag_suffices() {
		let profiles = vec![profile(None, Some("cooking"))];
		let filter = BrowseFilter {
			interests: vec!["gaming".into(), "cook".into()],
			..Default::default()
		};
		assert_eq!(filter.apply(&profiles).len(), 1);
	}
}
