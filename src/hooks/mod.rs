pub mod use_disclosure;

pub use use_disclosure::{use_disclosure, Disclosure, DisclosureState};
