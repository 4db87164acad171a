// Domain layer: models, compiled-in page content and ports (interfaces).

pub mod content;
pub mod model;
pub mod ports;
