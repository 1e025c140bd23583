use crate::{
	auth::{self, use_auth},
	components::{notice, AuthSwitch},
	page,
};
use yew::prelude::*;
use yew_router::{
	prelude::{use_navigator, BrowserRouter, Link, Switch},
	Routable,
};

#[function_component]
pub fn App() -> Html {
	use_effect_with((), |_| {
		gloo_utils::document().set_title("Friendder");
	});
	html! {
		<BrowserRouter>
			<auth::Provider>
				<notice::Provider>
					<Navbar />
					<Switch<Route> render={Route::html} />
				</notice::Provider>
			</auth::Provider>
		</BrowserRouter>
	}
}

#[function_component]
fn Navbar() -> Html {
	let navigator = use_navigator().unwrap();
	let auth = use_auth();
	let sign_in = {
		let navigator = navigator.clone();
		Callback::from(move |_: MouseEvent| {
			navigator.push(&Route::Auth);
		})
	};
	let sign_out = {
		let auth = auth.clone();
		let navigator = navigator.clone();
		Callback::from(move |_: MouseEvent| {
			auth.sign_out();
			navigator.push(&Route::Home);
		})
	};
	let username = auth.user().map(|user| user.username);
	html! {
		<nav class="navbar is-dark" role="navigation">
			<div class="navbar-brand">
				<Link<Route> classes="navbar-item has-text-weight-bold" to={Route::Home}>
					{"Friendder"}
				</Link<Route>>
			</div>
			<div class="navbar-menu is-active">
				<div class="navbar-start">
					<Link<Route> classes="navbar-item" to={Route::Swipe}>{"Swipe"}</Link<Route>>
					<Link<Route> classes="navbar-item" to={Route::Browse}>{"Browse"}</Link<Route>>
					<Link<Route> classes="navbar-item" to={Route::Matches}>{"Matches"}</Link<Route>>
					<Link<Route> classes="navbar-item" to={Route::Post}>{"Post"}</Link<Route>>
				</div>
				<div class="navbar-end">
					<AuthSwitch
						identified={html! {
							<div class="navbar-item">
								if let Some(username) = username {
									<span class="mr-3">{username}</span>
								}
								<button class="button is-dark" onclick={sign_out}>{"Sign Out"}</button>
							</div>
						}}
						anonymous={html! {
							<div class="navbar-item">
								<button class="button is-primary" onclick={sign_in}>{"Sign In"}</button>
							</div>
						}}
					/>
				</div>
			</div>
		</nav>
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Home,
	#[at("/auth")]
	Auth,
	#[at("/swipe")]
	Swipe,
	#[at("/browse")]
	Browse,
	#[at("/matches")]
	Matches,
	#[at("/post")]
	Post,
	#[not_found]
	#[at("/404")]
	NotFound,
}

impl Route {
	fn html(self) -> Html {
		match self {
			Self::Home => html! { <page::home::Home /> },
			Self::Auth => html! { <page::auth::Auth /> },
			Self::Swipe => html! { <page::swipe::Swipe /> },
			Self::Browse => html! { <page::browse::Browse /> },
			Self::Matches => html! { <page::matches::Matches /> },
			Self::Post => html! { <page::post::Post /> },
			Self::NotFound => html! { <h1 class="title">{"404: Page not found"}</h1> },
		}
	}
}
