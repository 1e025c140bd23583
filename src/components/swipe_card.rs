use crate::{
	data::{Profile, VoteKind},
	util::swipe::SwipeGesture,
};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct SwipeCardProps {
	pub profile: Profile,
	pub on_swipe: Callback<(String, VoteKind)>,
	/// Set while a committed vote is still being persisted so a second
	/// gesture cannot start in the meantime.
	#[prop_or_default]
	pub disabled: bool,
}

/// The draggable card. Mouse and touch drags feed the same gesture engine;
/// the engine's derived transform drives the card's inline style, and a
/// committed release emits exactly one `on_swipe`.
#[function_component]
pub fn SwipeCard(props: &SwipeCardProps) -> Html {
	let gesture = use_state(SwipeGesture::default);
	{
		let gesture = gesture.clone();
		use_effect_with(props.disabled, move |disabled| {
			let mut engine = *gesture;
			engine.set_disabled(*disabled);
			gesture.set(engine);
		});
	}

	let begin = {
		let gesture = gesture.clone();
		Callback::from(move |(x, y): (f64, f64)| {
			let mut engine = *gesture;
			engine.begin(x, y);
			gesture.set(engine);
		})
	};
	let update = {
		let gesture = gesture.clone();
		Callback::from(move |(x, y): (f64, f64)| {
			let mut engine = *gesture;
			engine.update(x, y);
			gesture.set(engine);
		})
	};
	let finish = {
		let gesture = gesture.clone();
		let on_swipe = props.on_swipe.clone();
		let profile_id = props.profile.id.clone();
		Callback::from(move |_: ()| {
			let mut engine = *gesture;
			let decision = engine.end();
			gesture.set(engine);
			if let Some(kind) = decision {
				on_swipe.emit((profile_id.clone(), kind));
			}
		})
	};

	let onmousedown = begin.reform(|e: MouseEvent| (e.client_x() as f64, e.client_y() as f64));
	let onmousemove = update.reform(|e: MouseEvent| (e.client_x() as f64, e.client_y() as f64));
	let onmouseup = finish.reform(|_: MouseEvent| ());
	let onmouseleave = finish.reform(|_: MouseEvent| ());
	let ontouchstart = {
		let begin = begin.clone();
		Callback::from(move |e: TouchEvent| {
			if let Some(touch) = e.touches().get(0) {
				begin.emit((touch.client_x() as f64, touch.client_y() as f64));
			}
		})
	};
	let ontouchmove = {
		let update = update.clone();
		Callback::from(move |e: TouchEvent| {
			if let Some(touch) = e.touches().get(0) {
				update.emit((touch.client_x() as f64, touch.client_y() as f64));
			}
		})
	};
	let ontouchend = finish.reform(|_: TouchEvent| ());

	let engine = *gesture;
	let (x, y) = engine.offset();
	let style = format!(
		"transform: translate({x}px, {y}px) rotate({rotation}deg); opacity: {opacity}; transition: {transition};",
		rotation = engine.rotation(),
		opacity = engine.opacity(),
		transition = match engine.is_active() {
			true => "none",
			false => "transform 0.3s ease-out, opacity 0.3s ease-out",
		},
	);

	let profile = &props.profile;
	html! {
		<div class="card swipe-card" {style}
			{onmousedown} {onmousemove} {onmouseup} {onmouseleave}
			{ontouchstart} {ontouchmove} {ontouchend}
		>
			if engine.is_active() {
				<div class="swipe-badge badge-keep" style={format!("opacity: {};", engine.keep_badge_opacity())}>
					{"KEEP"}
				</div>
				<div class="swipe-badge badge-cross" style={format!("opacity: {};", engine.cross_badge_opacity())}>
					{"NOPE"}
				</div>
			}
			<div class="card-content">
				<p class="title is-2 has-text-centered">{&profile.nickname}</p>
				if let Some(url) = &profile.photo_url {
					<figure class="image mb-4">
						<img src={url.clone()} alt={profile.nickname.clone()} draggable="false" />
					</figure>
				}
				<div class="block">
					<p class="heading">{"Useless Trait"}</p>
					<p class="subtitle is-4">{&profile.useless_trait}</p>
				</div>
				<div class="block">
					<p class="heading">{"About Them"}</p>
					<p class="is-italic is-size-5">{format!("\u{201c}{}\u{201d}", profile.tagline)}</p>
				</div>
				<div class="level is-mobile">
					<div class="level-left">
						<span class="heading">{"Popularity Score"}</span>
					</div>
					<div class="level-right">
						<span class="has-text-weight-bold">{format!("{}% Keep Rate", profile.keep_rate())}</span>
					</div>
				</div>
				<div class="columns is-mobile has-text-centered">
					<div class="column">
						<p class="title is-4 has-text-success">{profile.keeps_count}</p>
						<p class="heading">{"Keeps"}</p>
					</div>
					<div class="column">
						<p class="title is-4 has-text-danger">{profile.cross_offs_count}</p>
						<p class="heading">{"Cross Offs"}</p>
					</div>
				</div>
			</div>
		</div>
	}
}
