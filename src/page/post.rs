use crate::{
	api,
	auth::use_auth,
	components::notice::use_notices,
	data::ProfileDraft,
	index::Route,
};
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};

static NAVIGATE_DELAY_MS: u32 = 1500;

#[function_component]
pub fn Post() -> Html {
	let navigator = use_navigator().unwrap();
	let auth = use_auth();
	let notices = use_notices();
	let busy = use_state(|| false);

	let nickname = use_state(String::new);
	let useless_trait = use_state(String::new);
	let tagline = use_state(String::new);
	let discord_username = use_state(String::new);
	let interests = use_state(String::new);
	let why_not_want = use_state(String::new);
	let gender = use_state(String::new);
	let photo_input = use_node_ref();

	let text_input = |state: &UseStateHandle<String>| {
		let state = state.clone();
		Callback::from(move |e: InputEvent| {
			state.set(e.target_unchecked_into::<HtmlInputElement>().value());
		})
	};
	let on_nickname = text_input(&nickname);
	let on_useless_trait = text_input(&useless_trait);
	let on_discord = text_input(&discord_username);
	let on_interests = text_input(&interests);
	let on_tagline = {
		let tagline = tagline.clone();
		Callback::from(move |e: InputEvent| {
			tagline.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
		})
	};
	let on_why = {
		let why_not_want = why_not_want.clone();
		Callback::from(move |e: InputEvent| {
			why_not_want.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
		})
	};
	let on_gender = {
		let gender = gender.clone();
		Callback::from(move |e: Event| {
			gender.set(e.target_unchecked_into::<HtmlSelectElement>().value());
		})
	};

	let on_submit = {
		let nickname = nickname.clone();
		let useless_trait = useless_trait.clone();
		let tagline = tagline.clone();
		let discord_username = discord_username.clone();
		let interests = interests.clone();
		let why_not_want = why_not_want.clone();
		let gender = gender.clone();
		let photo_input = photo_input.clone();
		let notices = notices.clone();
		let navigator = navigator.clone();
		let busy = busy.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			let optional = |value: &str| (!value.trim().is_empty()).then(|| value.trim().to_owned());
			let draft = ProfileDraft {
				nickname: (*nickname).clone(),
				useless_trait: (*useless_trait).clone(),
				tagline: (*tagline).clone(),
				photo_url: None,
				discord_username: optional(&discord_username),
				interests: optional(&interests),
				why_not_want: optional(&why_not_want),
				gender: optional(&gender),
			};
			if let Err(missing) = draft.validate() {
				notices.error(missing.to_string());
				return;
			}
			let photo = photo_input
				.cast::<HtmlInputElement>()
				.and_then(|input| input.files())
				.and_then(|files| files.get(0));
			busy.set(true);
			let notices = notices.clone();
			let navigator = navigator.clone();
			let busy = busy.clone();
			wasm_bindgen_futures::spawn_local(async move {
				let mut draft = draft;
				if let Some(file) = photo {
					match api::storage::UploadPhoto::put(&file).await {
						Ok(url) => draft.photo_url = Some(url),
						Err(err) => {
							log::error!(target: "post", "photo upload failed: {err:?}");
							notices.error("Oops! Something went wrong");
							busy.set(false);
							return;
						}
					}
				}
				match api::friends::InsertFriend::post(&draft).await {
					Ok(()) => {
						notices.success("Friend posted!");
						let navigator = navigator.clone();
						Timeout::new(NAVIGATE_DELAY_MS, move || {
							navigator.push(&Route::Swipe);
						})
						.forget();
					}
					Err(err) => {
						log::error!(target: "post", "insert failed: {err:?}");
						notices.error("Oops! Something went wrong");
					}
				}
				busy.set(false);
			});
		})
	};

	if !auth.is_authenticated() {
		return html! {
			<section class="section has-text-centered">
				<p class="title is-4">{"Sign in to post a friend"}</p>
				<Link<Route> classes="button is-primary is-rounded" to={Route::Auth}>{"Sign In"}</Link<Route>>
			</section>
		};
	}

	html! {
		<section class="section">
			<div class="container" style="max-width: 40rem;">
				<div class="card">
					<div class="card-content">
						<p class="title is-3 has-text-centered">{"Roast a Friend"}</p>
						<p class="subtitle is-6 has-text-centered">
							{"Time to expose your friend's most useless qualities"}
						</p>
						<form onsubmit={on_submit}>
							<div class="field">
								<label class="label">{"Friend's Nickname"}</label>
								<div class="control">
									<input class="input" type="text" maxlength="50"
										placeholder="e.g., Big Tony, Sleepy Steve..."
										value={(*nickname).clone()} oninput={on_nickname} />
								</div>
							</div>
							<div class="field">
								<label class="label">{"Their Most Useless Trait"}</label>
								<div class="control">
									<input class="input" type="text" maxlength="100"
										placeholder="e.g., Can recite every Star Wars quote"
										value={(*useless_trait).clone()} oninput={on_useless_trait} />
								</div>
							</div>
							<div class="field">
								<label class="label">{"Funny Tagline / About Them"}</label>
								<div class="control">
									<textarea class="textarea" maxlength="200"
										placeholder="Roast them in one sentence..."
										value={(*tagline).clone()} oninput={on_tagline} />
								</div>
								<p class="help has-text-right">{format!("{}/200", tagline.len())}</p>
							</div>
							<div class="field">
								<label class="label">{"Gender (optional)"}</label>
								<div class="control">
									<div class="select is-fullwidth">
										<select onchange={on_gender}>
											<option value="" selected={gender.is_empty()}>{"Prefer not to say"}</option>
											<option value="male">{"Male"}</option>
											<option value="female">{"Female"}</option>
											<option value="other">{"Other"}</option>
										</select>
									</div>
								</div>
							</div>
							<div class="field">
								<label class="label">{"Interests (optional)"}</label>
								<div class="control">
									<input class="input" type="text"
										placeholder="e.g., gaming, hiking, conspiracy theories"
										value={(*interests).clone()} oninput={on_interests} />
								</div>
							</div>
							<div class="field">
								<label class="label">{"Discord (optional)"}</label>
								<div class="control">
									<input class="input" type="text" placeholder="username#0000"
										value={(*discord_username).clone()} oninput={on_discord} />
								</div>
							</div>
							<div class="field">
								<label class="label">{"Why don't you want them? (optional)"}</label>
								<div class="control">
									<textarea class="textarea" placeholder="Go on, vent a little..."
										value={(*why_not_want).clone()} oninput={on_why} />
								</div>
							</div>
							<div class="field">
								<label class="label">{"Photo (optional)"}</label>
								<div class="control">
									<input class="input" type="file" accept="image/*" ref={photo_input} />
								</div>
							</div>
							<button class="button is-primary is-fullwidth is-rounded" type="submit" disabled={*busy}>
								{match *busy {
									true => "Posting...",
									false => "Post This Friend",
								}}
							</button>
						</form>
					</div>
				</div>
				<p class="has-text-centered is-size-7 mt-4">
					{"Pro tip: the funnier the roast, the more swipes they'll get!"}
				</p>
			</div>
		</section>
	}
}
