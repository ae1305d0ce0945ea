use crate::*;

fn merge_options<T, F: Fn(T, T) -> T>(x: Option<T>, y: Option<T>, merge: F) -> Option<T> {
    if let Some(x) = x {
        if let Some(y) = y {
            Some(merge(x, y))
        } else {
            Some(x)
        }
    } else {
        y
    }
}

#[derive(Clone, Debug)]
pub struct ObjectHit {
    pub hit: shape::Hit,
    pub obj_ix: usize,
}

impl ObjectHit {
    // ties keep `x`, the earlier object
    fn nearer_option(x: Option<Self>, y: Option<Self>) -> Option<Self> {
        merge_options(x, y, |x, y| if y.hit.dist < x.hit.dist { y } else { x })
    }
}

#[derive(Clone, Debug, Default)]
pub struct ObjectList {
    objects: Vec<Sphere>,
}

impl ObjectList {
    pub fn new(objects: Vec<Sphere>) -> Self {
        ObjectList { objects }
    }

    pub fn objects(&self) -> &[Sphere] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Nearest hit along `ray`, skipping the object at index `exclude`.
    pub fn test_hit(&self, ray: &Ray, exclude: Option<usize>) -> Option<ObjectHit> {
        let mut hit = None::<ObjectHit>;
        for (obj_ix, o) in self.objects.iter().enumerate() {
            if exclude == Some(obj_ix) {
                continue;
            }
            let new_hit = o
                .intersect(&ray.origin, &ray.dir)
                .map(|hit| ObjectHit { hit, obj_ix });
            hit = ObjectHit::nearer_option(hit, new_hit);
        }
        hit
    }
}
