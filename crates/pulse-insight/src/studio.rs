//! Studio image operations: asset generation, virtual try-on, measurement.
//!
//! All three talk to the image-capable model and degrade to a neutral value
//! on any failure: `None` for image results, a fixed fallback string for the
//! measurement text. Input images arrive already base64-encoded (the capture
//! surface owns encoding); results are returned as `data:` URIs ready for
//! display.

use pulse_genai::{GenAiClient, GenerateRequest, Part};

/// What kind of business asset to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Logo,
    Card,
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Logo => write!(f, "logo"),
            AssetKind::Card => write!(f, "card"),
        }
    }
}

/// Whether the try-on composites onto a person or into a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryOnMode {
    Personal,
    Space,
}

impl std::fmt::Display for TryOnMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TryOnMode::Personal => write!(f, "personal"),
            TryOnMode::Space => write!(f, "space"),
        }
    }
}

fn data_uri(mime_type: &str, data: &str) -> String {
    format!("data:{mime_type};base64,{data}")
}

/// Generate a professional business asset (logo or card) as a data URI.
///
/// Returns `None` on any failure or when the model produces no image part.
pub async fn generate_business_asset(
    client: &GenAiClient,
    model: &str,
    prompt: &str,
    kind: AssetKind,
) -> Option<String> {
    let request = GenerateRequest::text(format!("Generate a professional {kind}: {prompt}"));

    let response = match client.generate(model, &request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, %kind, "asset generation failed");
            return None;
        }
    };

    response
        .inline_data()
        .map(|image| data_uri(&image.mime_type, &image.data))
}

/// Composite the product described by `prompt` onto the captured photo.
///
/// `image_b64` is a base64-encoded JPEG from the capture surface. Returns a
/// data URI, or `None` on any failure so the caller can prompt a retake.
pub async fn virtual_try_on(
    client: &GenAiClient,
    model: &str,
    image_b64: &str,
    prompt: &str,
    mode: TryOnMode,
) -> Option<String> {
    let request = GenerateRequest::parts(vec![
        Part::inline_data("image/jpeg", image_b64),
        Part::text(format!("Virtual try-on for: {prompt}. Mode: {mode}.")),
    ]);

    let response = match client.generate(model, &request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, %mode, "virtual try-on failed");
            return None;
        }
    };

    response
        .inline_data()
        .map(|image| data_uri(&image.mime_type, &image.data))
}

/// Estimate real-world dimensions for `target` from a captured photo.
///
/// Always returns display-ready text: the model's answer,
/// `"Analysis inconclusive."` when the model produced no text, or
/// `"Scan failed."` on transport failure.
pub async fn estimate_measurement(
    client: &GenAiClient,
    model: &str,
    image_b64: &str,
    target: &str,
) -> String {
    let request = GenerateRequest::parts(vec![
        Part::inline_data("image/jpeg", image_b64),
        Part::text(format!("Estimate dimensions for {target}.")),
    ]);

    match client.generate(model, &request).await {
        Ok(response) => response
            .text()
            .map_or_else(|| "Analysis inconclusive.".to_owned(), ToOwned::to_owned),
        Err(e) => {
            tracing::warn!(error = %e, target, "measurement estimation failed");
            "Scan failed.".to_owned()
        }
    }
}
