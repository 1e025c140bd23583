use crate::session::{AuthSession, AuthUser, SessionValue};
use yew::prelude::*;

/// Handle to the current sign-in state. Provided via context from the root of
/// the app rather than read from a global, so pages and components declare
/// their dependency on it explicitly.
#[derive(Clone, PartialEq)]
pub struct Auth {
	session: UseStateHandle<Option<AuthSession>>,
}
impl Auth {
	pub fn is_authenticated(&self) -> bool {
		self.session.is_some()
	}

	pub fn user(&self) -> Option<AuthUser> {
		self.session.as_ref().map(|session| session.user.clone())
	}

	pub fn sign_in(&self, session: AuthSession) {
		session.apply_to_session();
		self.session.set(Some(session));
	}

	pub fn sign_out(&self) {
		AuthSession::delete();
		self.session.set(None);
	}
}

#[function_component]
pub fn Provider(props: &html::ChildrenProps) -> Html {
	// Loads whatever session the browser still holds when the app mounts;
	// dropping the provider tears the state down with it.
	let session = use_state(AuthSession::load);
	let auth = Auth { session };
	html! {
		<ContextProvider<Auth> context={auth}>
			{props.children.clone()}
		</ContextProvider<Auth>>
	}
}

#[hook]
pub fn use_auth() -> Auth {
	use_context::<Auth>().unwrap()
}
