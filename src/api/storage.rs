use crate::{api, config, response::Response};
use reqwest::Method;
use wasm_bindgen_futures::JsFuture;

pub fn public_url(path: &str) -> String {
	format!("{}/storage/v1/object/public/{}/{path}", config::PROJECT_URL, config::PHOTO_BUCKET)
}

pub struct UploadPhoto;
impl UploadPhoto {
	/// Uploads the picked file under a fresh object path and returns the
	/// public url to store on the profile row.
	pub async fn put(file: &web_sys::File) -> anyhow::Result<String> {
		let bytes = read_bytes(file).await?;
		let path = format!("{}.{}", uuid::Uuid::new_v4(), extension(&file.name()));
		let endpoint = format!("{}/storage/v1/object/{}/{path}", config::PROJECT_URL, config::PHOTO_BUCKET);
		Response::<()>::from(api::authorized(Method::POST, &endpoint))
			.with_bytes(bytes, &file.type_())
			.send_ok()
			.await?;
		Ok(public_url(&path))
	}
}

async fn read_bytes(file: &web_sys::File) -> anyhow::Result<Vec<u8>> {
	let buffer = JsFuture::from(file.array_buffer())
		.await
		.map_err(|err| anyhow::anyhow!("failed to read file: {err:?}"))?;
	Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

fn extension(file_name: &str) -> &str {
	file_name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("bin")
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn extension_falls_back_when_absent() {
		assert_eq!(extension("photo.png"), "png");
		assert_eq!(extension("archive.tar.gz"), "gz");
		assert_eq!(extension("noext"), "bin");
	}

	#[test]
	fn public_url_targets_the_public_namespace() {
		let url = public_url("abc.png");
		assert!(url.ends_with("/storage/v1/object/public/friend-photos/abc.png"));
	}
}
