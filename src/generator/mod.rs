pub mod compose;
pub mod manifest;
mod text;

pub use compose::{ComposeOptions, QuotingProfile, render_compose};
pub use manifest::{ManifestOptions, render_manifest};
