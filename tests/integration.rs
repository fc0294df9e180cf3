#[path = "integration/pipeline.rs"]
mod pipeline;
#[path = "integration/scenarios.rs"]
mod scenarios;
