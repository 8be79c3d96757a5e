/*!

  Wire-geometry intersection: axis-aligned wires traced out on a grid from a
  shared central port, and the crossings between two of them. A leaf
  computation independent of the virtual machine.

  A wire is a chain of horizontal and vertical segments built from a
  comma-separated path such as `R8,U5,L5,D3`. Two segments cross only where a
  horizontal one passes strictly through the interior of a vertical one;
  touching endpoints and collinear overlap do not count, which also keeps the
  shared origin out of the crossing set.

*/

use std::fmt::{Display, Formatter};

use crate::error::IntcodeError;

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Point {
  pub x: i64,
  pub y: i64
}

impl Point {
  /// Manhattan distance from the central port.
  pub fn manhattan_distance(self) -> i64 {
    self.x.abs() + self.y.abs()
  }
}

impl Display for Point {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
enum Orientation {
  Horizontal,
  Vertical
}

/// One straight stretch of wire. Endpoints are ordered by the direction the
/// wire was traced, so `start` is where the wire enters the segment.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Segment {
  start : Point,
  end   : Point
}

impl Segment {

  /// Builds the segment reached by walking `vector` from `origin`, where a
  /// vector is a `U`/`D`/`L`/`R` direction followed by a magnitude.
  fn from_manhattan_vector(origin: Point, vector: &str) -> Result<Segment, IntcodeError> {
    let mut chars = vector.chars();
    let (dx, dy) = match chars.next() {
      Some('U') => (0, 1),
      Some('D') => (0, -1),
      Some('R') => (1, 0),
      Some('L') => (-1, 0),
      _ => {
        return Err(IntcodeError::InvalidFormat(
          format!("{} is not a direction vector", vector)
        ));
      }
    };
    let magnitude = chars.as_str().parse::<i64>().map_err(
      |_error| IntcodeError::InvalidFormat(format!("{} is not a direction vector", vector))
    )?;
    Ok(Segment {
      start : origin,
      end   : Point { x: origin.x + dx * magnitude, y: origin.y + dy * magnitude }
    })
  }

  fn orientation(&self) -> Orientation {
    match self.start.x == self.end.x {
      true  => Orientation::Vertical,
      false => Orientation::Horizontal
    }
  }

  fn length(&self) -> i64 {
    (self.end.x - self.start.x).abs() + (self.end.y - self.start.y).abs()
  }

  /// The point where this segment crosses `other`, strictly interior to
  /// both. Parallel and collinear segments never cross.
  fn crossing(&self, other: &Segment) -> Option<Point> {
    match (self.orientation(), other.orientation()) {

      (Orientation::Horizontal, Orientation::Vertical) => {
        if strictly_between(self.start.x, other.start.x, self.end.x)
          && strictly_between(other.start.y, self.start.y, other.end.y)
        {
          Some(Point { x: other.start.x, y: self.start.y })
        } else {
          None
        }
      }

      (Orientation::Vertical, Orientation::Horizontal) => other.crossing(self),

      _parallel => None

    }
  }

  /// Steps from the segment's start to `point`, if the point lies on the
  /// segment.
  fn steps_to(&self, point: Point) -> Option<i64> {
    let on_segment = match self.orientation() {
      Orientation::Horizontal =>
        point.y == self.start.y && between(self.start.x, point.x, self.end.x),
      Orientation::Vertical =>
        point.x == self.start.x && between(self.start.y, point.y, self.end.y)
    };
    match on_segment {
      true  => Some((point.x - self.start.x).abs() + (point.y - self.start.y).abs()),
      false => None
    }
  }

}

fn between(a: i64, mid: i64, b: i64) -> bool {
  (a <= mid && mid <= b) || (b <= mid && mid <= a)
}

fn strictly_between(a: i64, mid: i64, b: i64) -> bool {
  (a < mid && mid < b) || (b < mid && mid < a)
}

pub struct Wire {
  segments: Vec<Segment>
}

impl Wire {

  /// Traces a wire from the central port along a comma-separated path.
  pub fn from_path(path: &str) -> Result<Wire, IntcodeError> {
    let mut segments = Vec::new();
    let mut cursor = Point { x: 0, y: 0 };
    for vector in path.trim().split(',') {
      let segment = Segment::from_manhattan_vector(cursor, vector.trim())?;
      cursor = segment.end;
      segments.push(segment);
    }
    Ok(Wire { segments })
  }

  /// Every point where this wire crosses `other`.
  pub fn crossings(&self, other: &Wire) -> Vec<Point> {
    let mut points = Vec::new();
    for segment in &self.segments {
      for other_segment in &other.segments {
        if let Some(point) = segment.crossing(other_segment) {
          points.push(point);
        }
      }
    }
    points
  }

  /// Steps along the wire, from the central port, to the first time the
  /// wire passes through `point`.
  pub fn steps_to(&self, point: Point) -> Option<i64> {
    let mut steps = 0;
    for segment in &self.segments {
      if let Some(partial) = segment.steps_to(point) {
        return Some(steps + partial);
      }
      steps += segment.length();
    }
    None
  }

}

/// Manhattan distance from the central port to the closest crossing of the
/// two wires.
pub fn closest_crossing_distance(a: &Wire, b: &Wire) -> Option<i64> {
  a.crossings(b).into_iter().map(Point::manhattan_distance).min()
}

/// Fewest combined steps along both wires to reach one of their crossings.
pub fn fewest_combined_steps(a: &Wire, b: &Wire) -> Option<i64> {
  a.crossings(b)
    .into_iter()
    .filter_map(|point| match (a.steps_to(point), b.steps_to(point)) {
      (Some(on_a), Some(on_b)) => Some(on_a + on_b),
      _ => None
    })
    .min()
}
