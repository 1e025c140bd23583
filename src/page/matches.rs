use crate::{
	auth::use_auth,
	components::notice::use_notices,
	components::ProfileCard,
	index::Route,
	matches::{resolve_matches, RemoteStore},
};
use std::sync::Arc;
use yew::prelude::*;
use yew_hooks::{use_async_with_options, UseAsyncOptions};
use yew_router::prelude::Link;

#[function_component]
pub fn Matches() -> Html {
	let auth = use_auth();
	let notices = use_notices();
	let user_id = auth.user().map(|user| user.id);

	let resolved = use_async_with_options(
		{
			let user_id = user_id.clone();
			async move {
				let Some(user_id) = user_id else {
					return Ok(Vec::new());
				};
				match resolve_matches(&RemoteStore, &user_id).await {
					Ok(profiles) => Ok(profiles),
					Err(err) => {
						log::error!(target: "matches", "resolution failed: {err:?}");
						Err(Arc::new(err))
					}
				}
			}
		},
		UseAsyncOptions { auto: true },
	);
	{
		let notices = notices.clone();
		use_effect_with(resolved.error.is_some(), move |failed| {
			if *failed {
				notices.error("Couldn't load matches");
			}
		});
	}

	if user_id.is_none() {
		return html! {
			<section class="section has-text-centered">
				<p class="title is-4">{"Sign in to see your matches"}</p>
				<Link<Route> classes="button is-primary is-rounded" to={Route::Auth}>{"Sign In"}</Link<Route>>
			</section>
		};
	}
	if resolved.loading {
		return html! {
			<section class="section has-text-centered">
				<p class="title is-4">{"Loading matches..."}</p>
				<progress class="progress is-primary" max="100"></progress>
			</section>
		};
	}

	// A failed resolution renders the same as having no matches; the notice
	// above is the only signal. Partial results are never shown.
	let matches = resolved.data.clone().unwrap_or_default();

	html! {
		<section class="section">
			<div class="container">
				<div class="level">
					<div class="level-left">
						<Link<Route> classes="button is-ghost" to={Route::Home}>{"Back"}</Link<Route>>
					</div>
					<div class="level-item">
						<h1 class="title is-3">{"Your Matches"}</h1>
					</div>
					<div class="level-right" />
				</div>

				if matches.is_empty() {
					<div class="has-text-centered mt-6">
						<p class="title is-4">{"No Matches Yet"}</p>
						<p class="subtitle is-6">{"Start swiping to find mutual connections"}</p>
						<Link<Route> classes="button is-primary is-rounded" to={Route::Swipe}>
							{"Start Swiping"}
						</Link<Route>>
					</div>
				} else {
					<div class="columns is-multiline">
						{for matches.iter().map(|profile| html! {
							<div class="column is-one-third" key={profile.id.clone()}>
								<ProfileCard profile={profile.clone()} show_contact=true />
							</div>
						})}
					</div>
				}
			</div>
		</section>
	}
}
