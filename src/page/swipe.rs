use crate::{
	api,
	components::notice::use_notices,
	components::{FilterBar, SwipeCard},
	data::{BrowseFilter, Profile, VoteKind},
	index::Route,
	session::{SessionValue, VotedProfiles},
};
use gloo_timers::callback::Timeout;
use std::sync::Arc;
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};
use yew_router::prelude::Link;

/// How long the committed card lingers before the deck advances.
static ADVANCE_DELAY_MS: u32 = 500;

/// The deck the user can still act on: the filtered list minus every profile
/// already voted on this session.
fn visible_profiles(all: &[Profile], filter: &BrowseFilter, seen: &VotedProfiles) -> Vec<Profile> {
	filter
		.apply(all)
		.into_iter()
		.filter(|profile| !seen.contains(&profile.id))
		.collect()
}

#[function_component]
pub fn Swipe() -> Html {
	let notices = use_notices();
	let index = use_state(|| 0usize);
	let swiping = use_state(|| false);
	let filter = use_state(BrowseFilter::default);

	let deck = use_async_with_options(
		async move {
			match api::friends::FetchFriends::get().await {
				Ok(profiles) => Ok(profiles),
				Err(err) => {
					log::error!(target: "swipe", "failed to fetch friends: {err:?}");
					Err(Arc::new(err))
				}
			}
		},
		UseAsyncOptions { auto: true },
	);
	{
		let notices = notices.clone();
		use_effect_with(deck.error.is_some(), move |failed| {
			if *failed {
				notices.error("Couldn't load friends");
			}
		});
	}
	// Snapshot of already-voted profiles, refreshed when the deck reloads so
	// mid-deck votes advance the index instead of collapsing the list.
	let seen = use_state(|| VotedProfiles::load().unwrap_or_default());
	{
		let seen = seen.clone();
		use_effect_with(deck.data.clone(), move |_| {
			seen.set(VotedProfiles::load().unwrap_or_default());
		});
	}

	let on_filter_change = {
		let filter = filter.clone();
		let index = index.clone();
		let seen = seen.clone();
		Callback::from(move |changed: BrowseFilter| {
			filter.set(changed);
			// The position resets to the top of the filtered list, so the
			// snapshot must catch up with any votes cast since the last load.
			seen.set(VotedProfiles::load().unwrap_or_default());
			index.set(0);
		})
	};

	let on_swipe = {
		let notices = notices.clone();
		let index = index.clone();
		let swiping = swiping.clone();
		Callback::from(move |(profile_id, kind): (String, VoteKind)| {
			if *swiping {
				return;
			}
			// At most one vote per (user, profile); the session record is the
			// authority, not the rendered deck.
			if VotedProfiles::load().unwrap_or_default().contains(&profile_id) {
				return;
			}
			swiping.set(true);
			let notices = notices.clone();
			let index = index.clone();
			let swiping = swiping.clone();
			wasm_bindgen_futures::spawn_local(async move {
				match api::friends::VoteOnFriend::post(&profile_id, kind).await {
					Ok(()) => {
						notices.success(match kind {
							VoteKind::Keep => "Kept",
							VoteKind::Cross => "Crossed off",
						});
						let mut voted = VotedProfiles::load().unwrap_or_default();
						voted.insert(profile_id);
						voted.apply_to_session();
						Timeout::new(ADVANCE_DELAY_MS, move || {
							index.set(*index + 1);
							swiping.set(false);
						})
						.forget();
					}
					Err(err) => {
						// The current card stays put; the user may retry.
						log::error!(target: "swipe", "vote failed: {err:?}");
						notices.error("Vote failed");
						swiping.set(false);
					}
				}
			});
		})
	};

	let on_reset = {
		let deck = deck.clone();
		let index = index.clone();
		let notices = notices.clone();
		Callback::from(move |_: MouseEvent| {
			index.set(0);
			deck.run();
			notices.success("Stack refreshed");
		})
	};

	if deck.loading {
		return html! {
			<section class="section has-text-centered">
				<p class="title is-4">{"Loading friends..."}</p>
				<progress class="progress is-primary" max="100"></progress>
			</section>
		};
	}

	let all: &[Profile] = deck.data.as_deref().unwrap_or_default();
	let visible = visible_profiles(all, &filter, &seen);
	let current = visible.get(*index);

	html! {
		<section class="section swipe">
			<div class="container" style="max-width: 26rem;">
				<div class="level is-mobile">
					<div class="level-left">
						<Link<Route> classes="button is-ghost" to={Route::Home}>{"Home"}</Link<Route>>
					</div>
					<div class="level-item has-text-weight-bold">
						{format!("{} / {}", (*index + 1).min(visible.len().max(1)), visible.len())}
					</div>
					<div class="level-right">
						<button class="button is-ghost" onclick={on_reset.clone()}>{"Reset"}</button>
					</div>
				</div>

				<FilterBar filter={(*filter).clone()} on_change={on_filter_change} />

				if let Some(profile) = current {
					<SwipeCard
						profile={profile.clone()}
						on_swipe={on_swipe.clone()}
						disabled={*swiping}
					/>
					<div class="buttons is-centered mt-5">
						<button class="button is-danger is-large is-rounded"
							disabled={*swiping}
							onclick={{
								let on_swipe = on_swipe.clone();
								let profile_id = profile.id.clone();
								Callback::from(move |_: MouseEvent| on_swipe.emit((profile_id.clone(), VoteKind::Cross)))
							}}
						>{"Cross Off"}</button>
						<button class="button is-success is-large is-rounded"
							disabled={*swiping}
							onclick={{
								let on_swipe = on_swipe.clone();
								let profile_id = profile.id.clone();
								Callback::from(move |_: MouseEvent| on_swipe.emit((profile_id.clone(), VoteKind::Keep)))
							}}
						>{"Keep"}</button>
					</div>
				} else {
					<div class="has-text-centered mt-6">
						<p class="title is-3">{"That's Everyone"}</p>
						<p class="subtitle is-5">{"You've swiped through all the friends"}</p>
						<div class="buttons is-centered">
							<button class="button is-primary is-rounded" onclick={on_reset}>{"Start Over"}</button>
							<Link<Route> classes="button is-link is-rounded" to={Route::Post}>{"Post a Friend"}</Link<Route>>
						</div>
					</div>
				}
			</div>
		</section>
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn profile(id: &str, gender: &str) -> Profile {
		Profile {
			id: id.into(),
			gender: Some(gender.into()),
			..Default::default()
		}
	}

	#[test]
	fn voted_profile_stays_out_of_the_deck_after_a_filter_change() {
		let all = vec![profile("p1", "male"), profile("p2", "male")];
		let mut seen = VotedProfiles::default();
		assert_eq!(
			visible_profiles(&all, &BrowseFilter::default(), &seen).len(),
			2
		);

		// A vote lands on p1, then the filter changes and the position
		// resets to the top of the list. p1 must not be offered again.
		seen.insert("p1".into());
		let filter = BrowseFilter {
			gender: Some("male".into()),
			..Default::default()
		};
		let visible = visible_profiles(&all, &filter, &seen);
		assert_eq!(
			visible.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
			vec!["p2"]
		);
	}

	#[test]
	fn deck_empties_once_everything_has_been_voted_on() {
		let all = vec![profile("p1", "female")];
		let mut seen = VotedProfiles::default();
		seen.insert("p1".into());
		assert!(visible_profiles(&all, &BrowseFilter::default(), &seen).is_empty());
	}
}
