pub mod experiments;
pub mod hero;
pub mod interactive;
pub mod skills;

pub use experiments::{ExperimentsConfig, ExperimentsSketch};
pub use hero::{HeroConfig, HeroSketch, Wave};
pub use interactive::{InteractiveConfig, InteractiveSketch, Trail, TrailSegment};
pub use skills::{SkillsConfig, SkillsSketch};
