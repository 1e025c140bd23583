use crate::index::Route;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component]
pub fn Home() -> Html {
	html! {
		<section class="section home">
			<div class="container has-text-centered" style="max-width: 42rem;">
				<h1 class="title is-1">{"Friendder"}</h1>
				<p class="subtitle is-4">{"Like Tinder, but for roasting your friends"}</p>

				<div class="box has-text-left">
					<h2 class="title is-4 has-text-centered">{"How it works (it's dumb)"}</h2>
					<div class="content">
						<p>{"1. Post your friend's most useless trait and a roast-worthy tagline"}</p>
						<p>{"2. Others swipe right to \"keep\" them or left to \"cross them off\""}</p>
						<p>{"3. Watch the votes roll in and see who's loved (or not)"}</p>
					</div>
					<div class="notification is-warning is-light">
						<p class="is-size-7 has-text-weight-semibold">
							{"Disclaimer: this is all for laughs. Don't be a jerk."}
						</p>
					</div>
				</div>

				<div class="buttons is-centered">
					<Link<Route> classes="button is-primary is-large is-rounded" to={Route::Swipe}>
						{"Start Swiping"}
					</Link<Route>>
					<Link<Route> classes="button is-link is-large is-rounded" to={Route::Post}>
						{"Roast a Friend"}
					</Link<Route>>
				</div>
				<div class="mt-4">
					<Link<Route> classes="button is-ghost" to={Route::Browse}>
						{"Browse All Friends"}
					</Link<Route>>
					<Link<Route> classes="button is-ghost" to={Route::Matches}>
						{"Your Matches"}
					</Link<Route>>
				</div>
			</div>
		</section>
	}
}
