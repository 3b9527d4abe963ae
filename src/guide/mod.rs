// ABOUTME: Step catalog, progress tracking, and resource links for the deployment guide

pub mod progress;
pub mod resources;
pub mod steps;

pub use progress::{Progress, StepStatus};
pub use resources::{ResourceTopic, FOOTER_LINKS, RESOURCE_TOPICS};
pub use steps::{steps, ContentBlock, Link, ListEntry, Snippet, Step, StepId, Tab};
