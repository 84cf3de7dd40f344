//! Image demo: generation with default and custom parameters, then an edit
//! of a local PNG.
//!
//! Needs `OPENAI_API_KEY` in the environment or a `.env` file, and a square
//! PNG with transparency at `assets/images/square_with_transparency.png` for
//! the edit step.
//!
//! Run with: `cargo run --example image`

use openai_client::models::images::{ImageEditRequest, ImageGenerationRequest};
use openai_client::models::{ImageResponseFormat, ImageSize};
use openai_client::Client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    openai_client::util::init_tracing();

    let client = Client::from_env()?;

    // Generate an image with the defaults (one 1024x1024 URL).
    let request = ImageGenerationRequest::new("a white siamese cat");
    let response = client.generate_image(&request).await?;
    if let Some(url) = response.data.first().and_then(|image| image.url.as_deref()) {
        println!("{url}");
    }

    // Generate two smaller images returned as inline base64.
    let mut request = ImageGenerationRequest::new("a white siamese cat");
    request.size = ImageSize::Size512;
    request.n = 2;
    request.response_format = ImageResponseFormat::B64Json;
    let response = client.generate_image(&request).await?;
    for image in &response.data {
        if let Some(b64) = image.b64_json.as_deref() {
            println!("{} base64 bytes", b64.len());
        }
    }

    // Edit a local image. The transparent areas mark where to paint.
    let image_data = std::fs::read("assets/images/square_with_transparency.png")?;
    let edit = ImageEditRequest::new("Add a cat with a hat", image_data);
    let response = client.edit_image(edit).await?;
    if let Some(url) = response.data.first().and_then(|image| image.url.as_deref()) {
        println!("{url}");
    }

    Ok(())
}
