//! Orthogonal connector routing between two rectangles.
//!
//! A connection leaves each rectangle at a [`ConnectionPoint`] on its border,
//! travels outward for a fixed margin, and is joined by an axis-aligned
//! polyline that never crosses either rectangle.
//!
//! ```
//! use rectlink::{ConnectionPoint, Point, Rect, RoutingConfig, Size, compute_connection_path};
//!
//! let rect1 = Rect::new(Point::new(100.0, 100.0), Size::new(50.0, 50.0));
//! let rect2 = Rect::new(Point::new(300.0, 100.0), Size::new(50.0, 50.0));
//! let cp1 = ConnectionPoint::new(Point::new(125.0, 100.0), 0.0);
//! let cp2 = ConnectionPoint::new(Point::new(275.0, 100.0), 180.0);
//!
//! let path = compute_connection_path(&rect1, &rect2, &cp1, &cp2, &RoutingConfig::default())?;
//! assert_eq!(path.first(), Some(&cp1.point));
//! assert_eq!(path.last(), Some(&cp2.point));
//! # Ok::<(), rectlink::RoutingError>(())
//! ```

pub mod geometry;
pub mod routing;
pub mod scene;
pub mod validation;

pub use geometry::{
    Border, ConnectionPoint, Edge, Point, Rect, Size, border, border_with_margin,
    is_angle_valid_for_point, is_on_border, normalize_angle, snap_to_border, vector_for_angle,
};
pub use routing::compute_connection_path;
pub use routing::optimize::optimize_path;
pub use routing::types::{RoutingConfig, RoutingError};
pub use scene::{Endpoint, Scene, SceneError};
pub use validation::{ValidationError, validate_connection, validate_connection_with};
