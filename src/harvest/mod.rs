pub mod orchestrator;
pub mod session;
pub mod walker;

#[cfg(test)]
mod tests;

pub use orchestrator::Harvester;
pub use session::{BrowserSession, Renderer, RenderSession, WebDriverRenderer};
pub use walker::{walk, WalkReport};
