mod api;
mod auth;
mod components;
mod config;
mod data;
mod index;
mod matches;
mod page;
mod response;
mod session;
mod util;

#[cfg(target_family = "wasm")]
fn main() {
	wasm_logger::init(wasm_logger::Config::default());
	yew::Renderer::<index::App>::new().render();
}

// The crate only renders on wasm; a host build exists so the logic tests can
// run under plain `cargo test`.
#[cfg(not(target_family = "wasm"))]
fn main() {}
