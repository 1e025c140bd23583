use crate::{api, auth::use_auth, components::notice::use_notices, index::Route};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Redirect};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tab {
	Login,
	Signup,
}

#[function_component]
pub fn Auth() -> Html {
	let navigator = use_navigator().unwrap();
	let auth = use_auth();
	let notices = use_notices();
	let tab = use_state(|| Tab::Login);
	let busy = use_state(|| false);

	let email = use_state(String::new);
	let username = use_state(String::new);
	let password = use_state(String::new);

	let on_email = {
		let email = email.clone();
		Callback::from(move |e: InputEvent| {
			email.set(e.target_unchecked_into::<HtmlInputElement>().value());
		})
	};
	let on_username = {
		let username = username.clone();
		Callback::from(move |e: InputEvent| {
			username.set(e.target_unchecked_into::<HtmlInputElement>().value());
		})
	};
	let on_password = {
		let password = password.clone();
		Callback::from(move |e: InputEvent| {
			password.set(e.target_unchecked_into::<HtmlInputElement>().value());
		})
	};

	let on_login = {
		let email = email.clone();
		let password = password.clone();
		let auth = auth.clone();
		let notices = notices.clone();
		let navigator = navigator.clone();
		let busy = busy.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			if email.is_empty() || password.is_empty() {
				notices.error("Fill in all fields");
				return;
			}
			busy.set(true);
			let email = (*email).clone();
			let password = (*password).clone();
			let auth = auth.clone();
			let notices = notices.clone();
			let navigator = navigator.clone();
			let busy = busy.clone();
			wasm_bindgen_futures::spawn_local(async move {
				match api::auth::SignIn::post(&email, &password).await {
					Ok(session) => {
						auth.sign_in(session);
						notices.success("Welcome back");
						navigator.push(&Route::Home);
					}
					Err(err) => {
						log::error!(target: "auth", "sign-in failed: {err:?}");
						notices.error(err.to_string());
					}
				}
				busy.set(false);
			});
		})
	};

	let on_signup = {
		let email = email.clone();
		let username = username.clone();
		let password = password.clone();
		let auth = auth.clone();
		let notices = notices.clone();
		let navigator = navigator.clone();
		let busy = busy.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			if email.is_empty() || username.is_empty() || password.is_empty() {
				notices.error("Fill in all fields");
				return;
			}
			busy.set(true);
			let email = (*email).clone();
			let username = (*username).clone();
			let password = (*password).clone();
			let auth = auth.clone();
			let notices = notices.clone();
			let navigator = navigator.clone();
			let busy = busy.clone();
			wasm_bindgen_futures::spawn_local(async move {
				match api::auth::SignUp::post(&email, &password, &username).await {
					Ok(session) => {
						if let Some(session) = session {
							auth.sign_in(session);
						}
						notices.success("Account created");
						navigator.push(&Route::Home);
					}
					Err(err) => {
						log::error!(target: "auth", "sign-up failed: {err:?}");
						notices.error(err.to_string());
					}
				}
				busy.set(false);
			});
		})
	};

	// Already signed in; nothing to do here.
	if auth.is_authenticated() {
		return html! { <Redirect<Route> to={Route::Home} /> };
	}

	let select_tab = |target: Tab| {
		let tab = tab.clone();
		Callback::from(move |_: MouseEvent| tab.set(target))
	};
	html! {
		<section class="section">
			<div class="container" style="max-width: 28rem;">
				<div class="card">
					<div class="card-content">
						<p class="title is-3 has-text-centered">{"Friendder"}</p>
						<p class="subtitle is-6 has-text-centered">{"Login or create an account"}</p>

						<div class="tabs is-fullwidth is-toggle">
							<ul>
								<li class={classes!((*tab == Tab::Login).then_some("is-active"))}>
									<a onclick={select_tab(Tab::Login)}>{"Login"}</a>
								</li>
								<li class={classes!((*tab == Tab::Signup).then_some("is-active"))}>
									<a onclick={select_tab(Tab::Signup)}>{"Sign Up"}</a>
								</li>
							</ul>
						</div>

						<form onsubmit={match *tab {
							Tab::Login => on_login,
							Tab::Signup => on_signup,
						}}>
							<div class="field">
								<label class="label">{"Email"}</label>
								<div class="control">
									<input class="input" type="email" placeholder="your@email.com"
										value={(*email).clone()} oninput={on_email} />
								</div>
							</div>
							if *tab == Tab::Signup {
								<div class="field">
									<label class="label">{"Username"}</label>
									<div class="control">
										<input class="input" type="text" placeholder="cooluser123"
											maxlength="30" value={(*username).clone()} oninput={on_username} />
									</div>
								</div>
							}
							<div class="field">
								<label class="label">{"Password"}</label>
								<div class="control">
									<input class="input" type="password" placeholder="password"
										value={(*password).clone()} oninput={on_password} />
								</div>
							</div>
							<button class="button is-primary is-fullwidth is-rounded" type="submit" disabled={*busy}>
								{match (*busy, *tab) {
									(true, Tab::Login) => "Loading...",
									(false, Tab::Login) => "Login",
									(true, Tab::Signup) => "Creating...",
									(false, Tab::Signup) => "Create Account",
								}}
							</button>
						</form>
					</div>
				</div>
			</div>
		</section>
	}
}
