pub mod newsletter;

pub use newsletter::{Event, NewsletterData};
