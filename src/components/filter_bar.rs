use crate::data::BrowseFilter;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct FilterBarProps {
	pub filter: BrowseFilter,
	pub on_change: Callback<BrowseFilter>,
}

/// Gender select plus a comma-separated interest tag input. Emits a fresh
/// [BrowseFilter] on every edit; the owning page resets its position.
#[function_component]
pub fn FilterBar(props: &FilterBarProps) -> Html {
	let on_gender = {
		let filter = props.filter.clone();
		let on_change = props.on_change.clone();
		Callback::from(move |e: Event| {
			let value = e.target_unchecked_into::<HtmlSelectElement>().value();
			let mut filter = filter.clone();
			filter.gender = (!value.is_empty()).then_some(value);
			on_change.emit(filter);
		})
	};
	let on_interests = {
		let filter = props.filter.clone();
		let on_change = props.on_change.clone();
		Callback::from(move |e: InputEvent| {
			let value = e.target_unchecked_into::<HtmlInputElement>().value();
			let mut filter = filter.clone();
			filter.interests = value
				.split(',')
				.map(str::trim)
				.filter(|tag| !tag.is_empty())
				.map(str::to_owned)
				.collect();
			on_change.emit(filter);
		})
	};
	html! {
		<div class="field is-grouped filter-bar">
			<div class="control">
				<div class="select">
					<select onchange={on_gender}>
						<option value="" selected={props.filter.gender.is_none()}>{"Any"}</option>
						<option value="male" selected={props.filter.gender.as_deref() == Some("male")}>{"Male"}</option>
						<option value="female" selected={props.filter.gender.as_deref() == Some("female")}>{"Female"}</option>
						<option value="other" selected={props.filter.gender.as_deref() == Some("other")}>{"Other"}</option>
					</select>
				</div>
			</div>
			<div class="control is-expanded">
				// Uncontrolled on purpose: normalizing the text on every
				// keystroke would eat in-progress separators.
				<input class="input" type="text"
					placeholder="Interests, comma separated"
					oninput={on_interests}
				/>
			</div>
		</div>
	}
}
