//! Hero slides.

use serde::{Deserialize, Serialize};

/// One hero image with its overlay copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: u32,
    pub image: String,
    pub headline: String,
    pub subheadline: String,
}

impl Slide {
    fn new(id: u32, image: &str, headline: &str, subheadline: &str) -> Self {
        Self {
            id,
            image: image.to_owned(),
            headline: headline.to_owned(),
            subheadline: subheadline.to_owned(),
        }
    }
}

/// The home page hero rotation.
#[must_use]
pub fn hero_slides() -> Vec<Slide> {
    vec![
        Slide::new(
            1,
            "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=1920&q=80",
            "Summer Collection",
            "Discover the latest trends in fashion",
        ),
        Slide::new(
            2,
            "https://images.unsplash.com/photo-1490481651871-ab68de25d43d?w=1920&q=80",
            "New Arrivals",
            "Fresh styles for every occasion",
        ),
        Slide::new(
            3,
            "https://images.unsplash.com/photo-1469334031218-e382a71b716b?w=1920&q=80",
            "Premium Essentials",
            "Quality meets elegance",
        ),
        Slide::new(
            4,
            "https://images.unsplash.com/photo-1483985988355-763728e1935b?w=1920&q=80",
            "Limited Edition",
            "Exclusive pieces for the discerning",
        ),
    ]
}
