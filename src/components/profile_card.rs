use crate::data::Profile;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct ProfileCardProps {
	pub profile: Profile,
	/// Matches reveal the contact handle and interests; the public browse
	/// grid does not.
	#[prop_or_default]
	pub show_contact: bool,
}

#[function_component]
pub fn ProfileCard(props: &ProfileCardProps) -> Html {
	let profile = &props.profile;
	html! {
		<div class="card profile-card">
			<div class="card-content">
				if let Some(url) = &profile.photo_url {
					<figure class="image mb-4">
						<img src={url.clone()} alt={profile.nickname.clone()} />
					</figure>
				}
				<p class="title is-3 has-text-centered">{&profile.nickname}</p>
				<div class="block">
					<p class="heading">{"Useless Trait"}</p>
					<p class="is-size-5">{&profile.useless_trait}</p>
				</div>
				<div class="block">
					<p class="heading">{"About"}</p>
					<p class="is-italic">{format!("\u{201c}{}\u{201d}", profile.tagline)}</p>
				</div>
				if props.show_contact {
					if let Some(handle) = &profile.discord_username {
						<div class="block">
							<p class="heading">{"Discord"}</p>
							<p class="has-text-weight-semibold">{handle}</p>
						</div>
					}
					if let Some(interests) = &profile.interests {
						<div class="block">
							<p class="heading">{"Interests"}</p>
							<p>{interests}</p>
						</div>
					}
					<p class="has-text-centered has-text-success has-text-weight-bold">{"Mutual Match"}</p>
				} else {
					<div class="level is-mobile">
						<div class="level-left">
							<span class="heading">{"Keep Rate"}</span>
						</div>
						<div class="level-right">
							<span class="has-text-weight-bold">{format!("{}%", profile.keep_rate())}</span>
						</div>
					</div>
					<div class="columns is-mobile has-text-centered">
						<div class="column">
							<p class="title is-5 has-text-success">{profile.keeps_count}</p>
							<p class="heading">{"Keeps"}</p>
						</div>
						<div class="column">
							<p class="title is-5 has-text-danger">{profile.cross_offs_count}</p>
							<p class="heading">{"Cross Offs"}</p>
						</div>
					</div>
				}
			</div>
		</div>
	}
}
