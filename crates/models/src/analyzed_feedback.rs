//! Sentiment-annotated feedback documents.
//!
//! Label and score arrive from the client already computed; nothing here
//! derives or checks them.

use serde::{Deserialize, Deserializer, Serialize};

/// Name of the document collection backing the analytics service.
pub const COLLECTION: &str = "analyzed_feedback";

/// Absent and `null` scores both read as `0.0`.
fn null_as_zero<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(d)?.unwrap_or(0.0))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedFeedback {
    pub id: String,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub sentiment_label: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub sentiment_score: f64,
    pub source: Option<String>,
    pub created_at: Option<String>,
}

/// Client payload for `POST /api/analytics`. A client-sent `id` is ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnalyzedFeedback {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub sentiment_label: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub sentiment_score: f64,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl NewAnalyzedFeedback {
    pub fn into_document(self, id: String) -> AnalyzedFeedback {
        AnalyzedFeedback {
            id,
            user_name: self.user_name,
            email: self.email,
            message: self.message,
            sentiment_label: self.sentiment_label,
            sentiment_score: self.sentiment_score,
            source: self.source,
            created_at: self.created_at,
        }
    }
}
