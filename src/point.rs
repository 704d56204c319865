use serde::{Deserialize, Serialize};

/// A labeled location in the plane.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    id: i32,
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(id: i32, x: f64, y: f64) -> Point {
        Point { id, x, y }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Points in input order. The first one is where every tour starts.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Points {
    pub points: Vec<Point>,
}

impl Points {
    pub fn new(points: Vec<Point>) -> Points {
        Points { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl From<Vec<Point>> for Points {
    fn from(points: Vec<Point>) -> Self {
        Points::new(points)
    }
}

impl std::ops::Index<usize> for Points {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let points = Points::new(vec![
            Point::new(7, 5.0, 5.0),
            Point::new(3, 0.0, 0.0),
        ]);
        assert_eq!(points.len(), 2);
        assert_eq!(points.first().map(Point::id), Some(7));
        assert_eq!(points[1].id(), 3);
    }

    #[test]
    fn json_shape() {
        let points: Points =
            serde_json::from_str(r#"{"points": [{"x": 1.5, "y": -2.0, "id": 4}]}"#).unwrap();
        assert_eq!(points.points, vec![Point::new(4, 1.5, -2.0)]);
    }
}
