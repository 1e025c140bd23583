use crate::auth::use_auth;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct AuthSwitchProps {
	#[prop_or_default]
	pub identified: Option<Html>,
	#[prop_or_default]
	pub anonymous: Option<Html>,
}

/// Renders one of two subtrees depending on whether a user is signed in.
#[function_component]
pub fn AuthSwitch(props: &AuthSwitchProps) -> Html {
	let auth = use_auth();
	let empty = Html::default;
	match auth.is_authenticated() {
		true => props.identified.clone().unwrap_or_else(empty),
		false => props.anonymous.clone().unwrap_or_else(empty),
	}
}
