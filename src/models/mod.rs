// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Budget, CandidateSummary, CultureId, ExpertiseLevel, FactorScores, Flexibility, GeoPoint,
    Importance, Location, PriceRange, ProviderCulture, RankedMatch, Requirement, ScoreBreakdown,
    ServiceArea,
};
pub use requests::RankRequest;
pub use responses::{ErrorResponse, RankResponse};
