use async_trait::async_trait;
use aws_sdk_rekognition::Client as RekognitionClient;
use aws_sdk_rekognition::error::DisplayErrorContext;
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::Image;

use super::{ImageLabel, ImageLabeler};
use crate::errors::HandlerError;

/// Amazon Rekognition backed [`ImageLabeler`]. Images are sent inline as bytes.
#[derive(Debug, Clone)]
pub struct AwsImageLabeler {
    client: RekognitionClient,
}

impl AwsImageLabeler {
    #[must_use]
    pub fn new(shared_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: RekognitionClient::new(shared_config),
        }
    }
}

#[async_trait]
impl ImageLabeler for AwsImageLabeler {
    async fn detect_labels(
        &self,
        image: &[u8],
        max_labels: i32,
        min_confidence: f32,
    ) -> Result<Vec<ImageLabel>, HandlerError> {
        let output = self
            .client
            .detect_labels()
            .image(Image::builder().bytes(Blob::new(image)).build())
            .max_labels(max_labels)
            .min_confidence(min_confidence)
            .send()
            .await
            .map_err(|e| HandlerError::LabelError(DisplayErrorContext(&e).to_string()))?;

        Ok(output
            .labels()
            .iter()
            .filter_map(|label| {
                label.name().map(|name| ImageLabel {
                    name: name.to_string(),
                    confidence: label.confidence().unwrap_or_default(),
                })
            })
            .collect())
    }
}
