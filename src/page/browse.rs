use crate::{
	api,
	components::notice::use_notices,
	components::{FilterBar, ProfileCard},
	data::{BrowseFilter, Profile},
	index::Route,
};
use std::sync::Arc;
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};
use yew_router::prelude::Link;

#[function_component]
pub fn Browse() -> Html {
	let notices = use_notices();
	let filter = use_state(BrowseFilter::default);

	let friends = use_async_with_options(
		async move {
			match api::friends::FetchFriends::get().await {
				Ok(profiles) => Ok(profiles),
				Err(err) => {
					log::error!(target: "browse", "failed to fetch friends: {err:?}");
					Err(Arc::new(err))
				}
			}
		},
		UseAsyncOptions { auto: true },
	);
	{
		let notices = notices.clone();
		use_effect_with(friends.error.is_some(), move |failed| {
			if *failed {
				notices.error("Couldn't load friends");
			}
		});
	}

	let on_filter_change = {
		let filter = filter.clone();
		Callback::from(move |changed: BrowseFilter| filter.set(changed))
	};

	if friends.loading {
		return html! {
			<section class="section has-text-centered">
				<p class="title is-4">{"Loading friends..."}</p>
				<progress class="progress is-primary" max="100"></progress>
			</section>
		};
	}

	let all: &[Profile] = friends.data.as_deref().unwrap_or_default();
	let visible = filter.apply(all);

	html! {
		<section class="section">
			<div class="container">
				<div class="level">
					<div class="level-left">
						<Link<Route> classes="button is-ghost" to={Route::Home}>{"Back"}</Link<Route>>
					</div>
					<div class="level-item">
						<h1 class="title is-3">{"All Friends"}</h1>
					</div>
					<div class="level-right" />
				</div>

				<FilterBar filter={(*filter).clone()} on_change={on_filter_change} />

				if visible.is_empty() {
					<div class="has-text-centered mt-6">
						<p class="title is-4">{"No Friends Yet"}</p>
						<p class="subtitle is-6">{"Be the first to roast someone"}</p>
						<Link<Route> classes="button is-primary is-rounded" to={Route::Post}>
							{"Post a Friend"}
						</Link<Route>>
					</div>
				} else {
					<div class="columns is-multiline">
						{for visible.iter().map(|profile| html! {
							<div class="column is-one-third" key={profile.id.clone()}>
								<ProfileCard profile={profile.clone()} />
							</div>
						})}
					</div>
				}
			</div>
		</section>
	}
}
