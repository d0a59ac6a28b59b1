//! Video-only queries

use crate::ranking::top_by;
use crate::shelf::Shelf;
use crate::views::parse_view_count;
use jaigurudev_core::Video;

/// Trending score: parsed view count × rating
pub fn trending_score(video: &Video) -> f64 {
    parse_view_count(&video.views) as f64 * f64::from(video.rating)
}

impl Shelf<Video> {
    /// Live streams in catalog order
    pub fn live(&self) -> Vec<&Video> {
        self.iter().filter(|video| video.is_live).collect()
    }

    /// Recorded videos ordered by [`trending_score`]
    ///
    /// Live streams never trend. Videos whose view count does not parse
    /// score zero and sink to the bottom.
    pub fn trending(&self, limit: usize) -> Vec<&Video> {
        top_by(
            self.iter().filter(|video| !video.is_live),
            limit,
            trending_score,
        )
    }
}
