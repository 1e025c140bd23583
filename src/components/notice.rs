use gloo_timers::callback::Timeout;
use yew::prelude::*;

static DISMISS_AFTER_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
	Success(String),
	Error(String),
}

/// Transient notice area. One notice at a time; a new one replaces whatever
/// is showing. Every failed remote operation funnels into `error` with a
/// single generic message, per the app's no-retry error policy.
#[derive(Clone, PartialEq)]
pub struct Notices {
	current: UseStateHandle<Option<Notice>>,
}
impl Notices {
	pub fn success(&self, message: impl Into<String>) {
		self.show(Notice::Success(message.into()));
	}

	pub fn error(&self, message: impl Into<String>) {
		self.show(Notice::Error(message.into()));
	}

	pub fn clear(&self) {
		self.current.set(None);
	}

	fn show(&self, notice: Notice) {
		self.current.set(Some(notice));
		let current = self.current.clone();
		Timeout::new(DISMISS_AFTER_MS, move || {
			current.set(None);
		})
		.forget();
	}
}

#[function_component]
pub fn Provider(props: &html::ChildrenProps) -> Html {
	let current = use_state(|| None::<Notice>);
	let notices = Notices { current: current.clone() };
	let dismiss = {
		let notices = notices.clone();
		Callback::from(move |_: MouseEvent| notices.clear())
	};
	html! {
		<ContextProvider<Notices> context={notices}>
			{props.children.clone()}
			if let Some(notice) = &*current {
				<div class="notice-area">
					{match notice {
						Notice::Success(message) => html! {
							<div class="notification is-success">
								<button class="delete" onclick={dismiss}></button>
								{message}
							</div>
						},
						Notice::Error(message) => html! {
							<div class="notification is-danger">
								<button class="delete" onclick={dismiss}></button>
								{message}
							</div>
						},
					}}
				</div>
			}
		</ContextProvider<Notices>>
	}
}

#[hook]
pub fn use_notices() -> Notices {
	use_context::<Notices>().unwrap()
}
