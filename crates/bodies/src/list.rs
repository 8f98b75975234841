//! Owned, ordered chains of bodies and their teardown.

use std::fmt;
use std::ops::Index;

use crate::body::CelestialBody;
use crate::release::ReleaseReport;

/// An owned innermost-to-outermost chain of bodies.
///
/// The list is the only owner of its bodies. Moving from one body to the next
/// is done by position (see [`BodyList::next_after`]) and never transfers
/// ownership.
///
/// Cloning, comparing and dropping walk nested moons with an explicit stack,
/// so any nesting depth is safe. `Debug` prints a summary rather than the tree.
#[derive(Default)]
pub struct BodyList {
    bodies: Vec<CelestialBody>,
}

impl BodyList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, body: CelestialBody) {
        self.bodies.push(body);
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn first(&self) -> Option<&CelestialBody> {
        self.bodies.first()
    }

    pub fn get(&self, index: usize) -> Option<&CelestialBody> {
        self.bodies.get(index)
    }

    /// Sibling following `index`, if any.
    pub fn next_after(&self, index: usize) -> Option<&CelestialBody> {
        self.bodies.get(index.checked_add(1)?)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CelestialBody> {
        self.bodies.iter()
    }

    /// Number of bodies in this list and every nested moon list.
    pub fn total_bodies(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<&BodyList> = vec![self];
        while let Some(list) = pending.pop() {
            count += list.len();
            pending.extend(list.iter().map(|body| &body.moons));
        }
        count
    }

    /// Release every body in the list together with its atmosphere and moons.
    ///
    /// Nested moon lists are walked with an explicit stack, so nesting depth
    /// is bounded by heap rather than call stack. The list is empty afterwards
    /// and a second call releases nothing.
    pub fn release(&mut self) -> ReleaseReport {
        let mut report = ReleaseReport::default();
        if self.bodies.is_empty() {
            return report;
        }
        report.lists = 1;

        let mut pending: Vec<CelestialBody> = std::mem::take(&mut self.bodies);
        pending.reverse();
        while let Some(mut body) = pending.pop() {
            if body.atmosphere.take().is_some() {
                report.atmospheres += 1;
            }
            let moons = std::mem::take(&mut body.moons.bodies);
            pending.extend(moons.into_iter().rev());
            report.bodies += 1;
        }
        report
    }
}

impl Drop for BodyList {
    fn drop(&mut self) {
        self.release();
    }
}

impl Clone for BodyList {
    fn clone(&self) -> Self {
        // Copy in pre-order with parent links, then hang each copy on its
        // parent from the last one back. Children always follow their parent.
        let mut copies: Vec<(Option<usize>, CelestialBody)> = Vec::new();
        let mut pending: Vec<(Option<usize>, &CelestialBody)> =
            self.bodies.iter().rev().map(|body| (None, body)).collect();
        while let Some((parent, body)) = pending.pop() {
            let index = copies.len();
            copies.push((parent, body.without_moons()));
            pending.extend(body.moons.iter().rev().map(|moon| (Some(index), moon)));
        }

        let mut bodies = Vec::with_capacity(self.bodies.len());
        while let Some((parent, mut body)) = copies.pop() {
            body.moons.bodies.reverse();
            match parent {
                Some(parent) => copies[parent].1.moons.bodies.push(body),
                None => bodies.push(body),
            }
        }
        bodies.reverse();
        Self { bodies }
    }
}

impl PartialEq for BodyList {
    fn eq(&self, other: &Self) -> bool {
        let mut pending: Vec<(&BodyList, &BodyList)> = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.len() != b.len() {
                return false;
            }
            for (x, y) in a.iter().zip(b.iter()) {
                if !x.same_fields(y) {
                    return false;
                }
                pending.push((&x.moons, &y.moons));
            }
        }
        true
    }
}

impl fmt::Debug for BodyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodyList")
            .field("len", &self.len())
            .field("total_bodies", &self.total_bodies())
            .finish()
    }
}

impl Index<usize> for BodyList {
    type Output = CelestialBody;

    fn index(&self, index: usize) -> &CelestialBody {
        &self.bodies[index]
    }
}

impl From<Vec<CelestialBody>> for BodyList {
    fn from(bodies: Vec<CelestialBody>) -> Self {
        Self { bodies }
    }
}

impl FromIterator<CelestialBody> for BodyList {
    fn from_iter<I: IntoIterator<Item = CelestialBody>>(iter: I) -> Self {
        Self {
            bodies: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BodyList {
    type Item = &'a CelestialBody;
    type IntoIter = std::slice::Iter<'a, CelestialBody>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atmosphere::Atmosphere;

    fn planet_with(moons: usize) -> CelestialBody {
        let mut planet = CelestialBody::new()
            .with_orbit(1.0, 0.01)
            .with_atmosphere(Atmosphere::new().with_gas(7, 780.0));
        for i in 0..moons {
            planet = planet.with_moon(CelestialBody::new().with_orbit(0.001 * (i + 1) as f64, 0.0));
        }
        planet
    }

    #[test]
    fn release_counts_every_owned_record_once() {
        let (n, m) = (4, 3);
        let mut list: BodyList = (0..n).map(|_| planet_with(m)).collect();
        assert_eq!(list.total_bodies(), n * (m + 1));

        let report = list.release();
        assert_eq!(report.bodies, n * (m + 1));
        assert_eq!(report.atmospheres, n);
        assert_eq!(report.lists, 1);
        assert_eq!(report.allocations(), n * (m + 2) + 1);
        assert!(list.is_empty());
    }

    #[test]
    fn second_release_is_a_no_op() {
        let mut list: BodyList = vec![planet_with(2)].into();
        assert!(!list.release().is_empty());
        assert!(list.release().is_empty());
    }

    #[test]
    fn empty_list_releases_nothing() {
        let mut list = BodyList::new();
        assert_eq!(list.release(), ReleaseReport::default());
    }

    #[test]
    fn next_after_walks_siblings_without_owning_them() {
        let list: BodyList = (1..=3)
            .map(|a| CelestialBody::new().with_orbit(a as f64, 0.0))
            .collect();
        assert_eq!(list.next_after(0).map(|b| b.semi_major_axis_au), Some(2.0));
        assert!(list.next_after(2).is_none());
        assert!(list.next_after(usize::MAX).is_none());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn deep_moon_nesting_releases_without_recursion() {
        let depth = 100_000;
        let mut innermost = CelestialBody::new().with_atmosphere(Atmosphere::new());
        for _ in 0..depth {
            innermost = CelestialBody::new().with_moon(innermost);
        }
        let mut list: BodyList = vec![innermost].into();

        let report = list.release();
        assert_eq!(report.bodies, depth + 1);
        assert_eq!(report.atmospheres, 1);
    }

    fn nested(depth: usize) -> BodyList {
        let mut body = CelestialBody::new().with_atmosphere(Atmosphere::new().with_gas(1, 10.0));
        for level in 0..depth {
            body = CelestialBody::new()
                .with_orbit(level as f64, 0.0)
                .with_moon(body);
        }
        vec![body, planet_with(2)].into()
    }

    #[test]
    fn clone_and_compare_deep_trees() {
        let list = nested(100_000);
        let copy = list.clone();
        assert_eq!(copy.total_bodies(), list.total_bodies());
        assert!(copy == list);

        let mut changed = nested(100_000);
        changed.bodies[0].moons.bodies[0].semi_major_axis_au = -1.0;
        assert!(changed != list);
    }

    #[test]
    fn clone_keeps_sibling_order() {
        let list = nested(3);
        let copy = list.clone();
        let orbits = |l: &BodyList| -> Vec<f64> {
            l[1].moons.iter().map(|m| m.semi_major_axis_au).collect()
        };
        assert_eq!(orbits(&copy), vec![0.001, 0.002]);
        assert_eq!(copy[0].moons[0].semi_major_axis_au, 1.0);
        assert!(copy[0].moons[0].moons[0].moons[0].has_atmosphere());
    }

    #[test]
    fn debug_of_a_deep_tree_is_a_summary() {
        let list = nested(100_000);
        let text = format!("{list:?}");
        assert_eq!(text, "BodyList { len: 2, total_bodies: 100004 }");
    }

    #[test]
    fn dropping_a_deep_tree_does_not_overflow() {
        let mut body = CelestialBody::new();
        for _ in 0..100_000 {
            body = CelestialBody::new().with_moon(body);
        }
        drop(BodyList::from(vec![body]));
    }
}
