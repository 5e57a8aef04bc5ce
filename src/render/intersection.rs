use crate::{
    error::{Error, Result},
    math::{approx_eq::ApproxEq, transform::Transform},
    render::ray::Ray,
    scene::object::Shape,
};

/// A ray crossing the surface of `object` at `time`.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    time: f64,
    object: &'a Shape,
}

impl<'a> Intersection<'a> {
    pub fn new(time: f64, object: &'a Shape) -> Self {
        Self { time, object }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn object(&self) -> &'a Shape {
        self.object
    }
}

impl PartialEq for Intersection<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.time.approx_eq(&other.time) && self.object == other.object
    }
}

/// Outcome of intersecting one ray with one shape: either no crossing at
/// all or exactly two, ordered by time. A tangent ray yields two equal times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionResult<'a> {
    intersections: Option<[Intersection<'a>; 2]>,
}

impl<'a> IntersectionResult<'a> {
    pub fn empty() -> Self {
        Self {
            intersections: None,
        }
    }

    pub fn pair(first: Intersection<'a>, second: Intersection<'a>) -> Self {
        let intersections = if second.time() < first.time() {
            [second, first]
        } else {
            [first, second]
        };
        Self {
            intersections: Some(intersections),
        }
    }

    pub fn count(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.intersections.is_none()
    }

    pub fn get(&self, index: usize) -> Result<&Intersection<'a>> {
        self.as_slice()
            .get(index)
            .ok_or(Error::IntersectionIndexOutOfBounds {
                index,
                count: self.count(),
            })
    }

    pub fn as_slice(&self) -> &[Intersection<'a>] {
        match &self.intersections {
            Some(pair) => pair,
            None => &[],
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Intersection<'a>> {
        self.as_slice().iter()
    }

    pub fn hit(&self) -> Option<Intersection<'a>> {
        hit(self.as_slice())
    }
}

impl<'a> IntoIterator for IntersectionResult<'a> {
    type Item = Intersection<'a>;
    type IntoIter = std::iter::Flatten<std::option::IntoIter<[Intersection<'a>; 2]>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intersections.into_iter().flatten()
    }
}

/// Moves the ray into the shape's object space and intersects it there.
pub fn intersect<'a>(object: &'a Shape, ray: &Ray) -> IntersectionResult<'a> {
    let object_ray = ray.transform_new(object.transformation_inverse());
    match object.local_intersect(&object_ray) {
        Some([t1, t2]) => {
            IntersectionResult::pair(Intersection::new(t1, object), Intersection::new(t2, object))
        }
        None => IntersectionResult::empty(),
    }
}

/// Intersections of a ray with every object, sorted by time.
/// Equal times keep the order of `objects`.
pub fn intersect_all<'a>(objects: &'a [Shape], ray: &Ray) -> Vec<Intersection<'a>> {
    let mut intersections: Vec<Intersection<'a>> = objects
        .iter()
        .flat_map(|object| intersect(object, ray))
        .collect();
    intersections.sort_by(|i1, i2| i1.time().total_cmp(&i2.time()));
    intersections
}

/// The visible intersection: smallest non-negative time.
/// On equal times the one listed first wins.
pub fn hit<'a>(intersections: &[Intersection<'a>]) -> Option<Intersection<'a>> {
    intersections
        .iter()
        .filter(|i| i.time() >= 0.)
        .fold(None, |best: Option<Intersection<'a>>, i| match best {
            Some(best) if best.time() <= i.time() => Some(best),
            _ => Some(*i),
        })
}
