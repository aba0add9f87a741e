// Domain layer: booking models, selection state, presentation values and ports.

pub mod model;
pub mod ports;
pub mod state;
pub mod view;
