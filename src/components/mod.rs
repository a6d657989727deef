//! UI Components
//!
//! Feature cards and the lists that hold them.

mod add_feature_button;
mod feature_card;
mod feature_list;

pub use add_feature_button::AddFeatureButton;
pub use feature_card::FeatureCard;
pub use feature_list::{BasicFeatureList, LinkFeatureList};
