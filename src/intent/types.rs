use serde::{Deserialize, Serialize};

/// Closed set of conversation intents. The classifier must always resolve
/// to one of these; output it cannot place collapses to `GeneralInterest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    GeneralInterest,
    ProductInfo,
    PurchaseIntent,
    RecommendationRequest,
}

impl Intent {
    pub const ALL: [Intent; 4] = [
        Intent::GeneralInterest,
        Intent::ProductInfo,
        Intent::PurchaseIntent,
        Intent::RecommendationRequest,
    ];

    /// Wire label, exactly as the classifier prompt asks for it back.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::GeneralInterest => "general_interest",
            Intent::ProductInfo => "product_info",
            Intent::PurchaseIntent => "purchase_intent",
            Intent::RecommendationRequest => "recommendation_request",
        }
    }

    /// Case-insensitive match against the exact label strings.
    pub fn from_label(raw: &str) -> Option<Intent> {
        let wanted = raw.trim().to_ascii_lowercase();
        Intent::ALL.into_iter().find(|i| i.label() == wanted)
    }

    /// Category description embedded in the classifier instructions.
    pub fn description(&self) -> &'static str {
        match self {
            Intent::GeneralInterest => {
                "The user is in the early stages of inquiry, seeking general \
                 information, or engaging in friendly conversation about life insurance."
            }
            Intent::ProductInfo => {
                "The user is asking about specific insurance products, policy types, \
                 or requesting detailed information about coverage options."
            }
            Intent::PurchaseIntent => {
                "The user is expressing a clear intent to buy insurance, is ready for \
                 a needs assessment, or is asking about the process of buying an \
                 insurance product."
            }
            Intent::RecommendationRequest => {
                "The user wants personalized product recommendations or is following \
                 up on previous recommendations."
            }
        }
    }
}
