// Independent factor scorers, one sub-score each
pub mod budget;
pub mod cultural;
pub mod experience;
pub mod location;
pub mod reputation;

pub use budget::{budget_score, BUDGET_MAX};
pub use cultural::{cultural_score, tier_max, CULTURAL_MAX};
pub use experience::{experience_score, EXPERIENCE_MAX};
pub use location::{location_score, LOCATION_MAX};
pub use reputation::{reputation_score, REPUTATION_MAX};
