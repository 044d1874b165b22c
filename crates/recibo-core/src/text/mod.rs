//! Text preparation for noisy OCR output: canonical normalization and
//! line segmentation.

mod normalize;
mod segment;

pub use normalize::normalize;
pub use segment::segment;
