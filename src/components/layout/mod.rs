pub mod footer;
pub mod hero;
pub mod interactive_hero;

pub use footer::FooterSection;
pub use hero::HeroSection;
pub use interactive_hero::{ChapterPanel, InteractiveHero, InteractiveHeroSection};
