//! Diagram helpers shared by the decks: anchor points on shape bounds and
//! connector routing between shapes.

pub mod connector;
pub mod geometry;

pub use connector::{
    add_arrow, connect_lr, elbow_feedback, ArrowStyle, Connector, ElbowArrowheads,
};
pub use geometry::{Anchor, Bounds, Point};
