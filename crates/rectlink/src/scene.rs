use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{ConnectionPoint, Point, Rect};
use crate::routing::compute_connection_path;
use crate::routing::types::{RoutingConfig, RoutingError};
use crate::validation::{ValidationError, validate_connection_with};

/// Which end of the connection a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    First,
    Second,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::First => f.write_str("first"),
            Endpoint::Second => f.write_str("second"),
        }
    }
}

/// Errors from validating and routing a whole scene.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("{endpoint} connection point is invalid: {source}")]
    InvalidConnection {
        endpoint: Endpoint,
        #[source]
        source: ValidationError,
    },

    #[error(transparent)]
    Routing(#[from] RoutingError),
}

/// Two rectangles and the connection point on each.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub rect1: Rect,
    pub rect2: Rect,
    pub cpoint1: ConnectionPoint,
    pub cpoint2: ConnectionPoint,
}

impl Scene {
    /// Validate the first connection point, then the second.
    pub fn validate(&self, config: &RoutingConfig) -> Result<(), SceneError> {
        let pairs = [
            (Endpoint::First, &self.rect1, &self.cpoint1),
            (Endpoint::Second, &self.rect2, &self.cpoint2),
        ];
        for (endpoint, rect, cpoint) in pairs {
            validate_connection_with(rect, cpoint, config.border_epsilon, config.angle_epsilon)
                .map_err(|source| SceneError::InvalidConnection { endpoint, source })?;
        }
        Ok(())
    }

    /// Validate both connection points and route between them.
    pub fn connect(&self, config: &RoutingConfig) -> Result<Vec<Point>, SceneError> {
        self.validate(config)?;
        let path = compute_connection_path(
            &self.rect1,
            &self.rect2,
            &self.cpoint1,
            &self.cpoint2,
            config,
        )?;
        Ok(path)
    }

    /// Move the first rectangle; its connection point follows by the same delta.
    pub fn move_rect1(&mut self, position: Point) {
        translate(&mut self.rect1, &mut self.cpoint1, position);
    }

    /// Move the second rectangle; its connection point follows by the same delta.
    pub fn move_rect2(&mut self, position: Point) {
        translate(&mut self.rect2, &mut self.cpoint2, position);
    }
}

fn translate(rect: &mut Rect, cpoint: &mut ConnectionPoint, position: Point) {
    let dx = position.x - rect.position.x;
    let dy = position.y - rect.position.y;
    rect.position = position;
    cpoint.point = Point::new(cpoint.point.x + dx, cpoint.point.y + dy);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    fn scene() -> Scene {
        Scene {
            rect1: Rect::new(Point::new(100.0, 100.0), Size::new(50.0, 50.0)),
            rect2: Rect::new(Point::new(300.0, 100.0), Size::new(50.0, 50.0)),
            cpoint1: ConnectionPoint::new(Point::new(125.0, 100.0), 0.0),
            cpoint2: ConnectionPoint::new(Point::new(275.0, 100.0), 180.0),
        }
    }

    #[test]
    fn connect_routes_valid_scene() {
        let path = scene().connect(&RoutingConfig::default()).unwrap();
        assert_eq!(path[0], Point::new(125.0, 100.0));
        assert_eq!(*path.last().unwrap(), Point::new(275.0, 100.0));
    }

    #[test]
    fn invalid_second_point_is_reported_as_second() {
        let mut s = scene();
        s.cpoint2.angle = 90.0;
        let err = s.connect(&RoutingConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            SceneError::InvalidConnection {
                endpoint: Endpoint::Second,
                source: ValidationError::AngleNotOutwardPerpendicular { .. },
            }
        ));
    }

    #[test]
    fn first_point_is_checked_first() {
        let mut s = scene();
        s.cpoint1.point = Point::new(110.0, 110.0);
        s.cpoint2.point = Point::new(0.0, 0.0);
        let err = s.validate(&RoutingConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            SceneError::InvalidConnection {
                endpoint: Endpoint::First,
                source: ValidationError::PointNotOnBorder { .. },
            }
        ));
    }

    #[test]
    fn overlap_surfaces_as_routing_error() {
        let mut s = scene();
        s.move_rect2(Point::new(110.0, 100.0));
        let err = s.connect(&RoutingConfig::default()).unwrap_err();
        assert_eq!(err, SceneError::Routing(RoutingError::RectanglesOverlap));
    }

    #[test]
    fn moving_rect_drags_its_connection_point() {
        let mut s = scene();
        s.move_rect1(Point::new(90.0, 130.0));
        assert_eq!(s.rect1.position, Point::new(90.0, 130.0));
        assert_eq!(s.cpoint1.point, Point::new(115.0, 130.0));
        assert_eq!(s.cpoint1.angle, 0.0);
        assert!(s.validate(&RoutingConfig::default()).is_ok());
    }

    #[test]
    fn scene_loads_from_yaml() {
        let yaml = "
rect1: { position: { x: 100, y: 100 }, size: { width: 50, height: 50 } }
rect2: { position: { x: 300, y: 100 }, size: { width: 50, height: 50 } }
cpoint1: { point: { x: 125, y: 100 }, angle: 0 }
cpoint2: { point: { x: 275, y: 100 }, angle: 180 }
";
        let parsed: Scene = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed, scene());
    }
}
