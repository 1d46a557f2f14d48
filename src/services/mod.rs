pub mod recolor;

pub use recolor::{RecolorJob, RecolorReport, RecolorService};
