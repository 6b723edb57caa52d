//! Developer module - profiles used to personalize story point estimates.

mod profile;

pub use profile::{DeveloperProfile, DeveloperProfileData};
