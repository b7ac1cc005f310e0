use derive_new::new;
use std::fmt::Display;
use std::ops::{Index, IndexMut, Range};

/// A single step of an edit script turning the old sequence into the new one.
///
/// `Equal` values come from both sides, `Delete` only from the old side and
/// `Insert` only from the new side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

impl<T> Display for Edit<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edit::Delete { value } => write!(f, "-{value}"),
            Edit::Insert { value } => write!(f, "+{value}"),
            Edit::Equal { value } => write!(f, " {value}"),
        }
    }
}

pub trait DiffAlgorithm<T> {
    type EditScript;

    fn diff(&self) -> Self::EditScript;
}

/// Furthest-reaching `x` per diagonal `k = x - y`, addressable with negative `k`.
#[derive(Debug)]
struct Frontier {
    reach: Vec<isize>,
    offset: isize,
}

impl Frontier {
    fn new(max_d: usize) -> Self {
        Frontier {
            reach: vec![0; 2 * max_d + 3],
            offset: max_d as isize + 1,
        }
    }
}

impl Index<isize> for Frontier {
    type Output = isize;

    fn index(&self, k: isize) -> &isize {
        &self.reach[(self.offset + k) as usize]
    }
}

impl IndexMut<isize> for Frontier {
    fn index_mut(&mut self, k: isize) -> &mut isize {
        &mut self.reach[(self.offset + k) as usize]
    }
}

/// Myers' diff in linear space.
///
/// Each step strips the common prefix and suffix, then searches forward from
/// the top-left and backward from the bottom-right corner at once until the
/// two searches overlap in a middle snake, and recurses on both halves. Only
/// two frontiers sized to the inputs are ever allocated.
///
/// Within every run of changes between two equal lines, deletions are
/// emitted before insertions.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T: Eq + Clone> MyersDiff<'_, T> {
    fn conquer(
        &self,
        mut a_range: Range<usize>,
        mut b_range: Range<usize>,
        forward: &mut Frontier,
        backward: &mut Frontier,
        edits: &mut Vec<Edit<T>>,
    ) {
        let prefix = self.a[a_range.clone()]
            .iter()
            .zip(&self.b[b_range.clone()])
            .take_while(|(a, b)| a == b)
            .count();
        self.push_equal(a_range.start..a_range.start + prefix, edits);
        a_range.start += prefix;
        b_range.start += prefix;

        let suffix = self.a[a_range.clone()]
            .iter()
            .rev()
            .zip(self.b[b_range.clone()].iter().rev())
            .take_while(|(a, b)| a == b)
            .count();
        let suffix_range = a_range.end - suffix..a_range.end;
        a_range.end -= suffix;
        b_range.end -= suffix;

        if a_range.is_empty() || b_range.is_empty() {
            self.push_changes(a_range, b_range, edits);
        } else if let Some((x, y)) =
            self.middle_snake(a_range.clone(), b_range.clone(), forward, backward)
        {
            self.conquer(a_range.start..x, b_range.start..y, forward, backward, edits);
            self.conquer(x..a_range.end, y..b_range.end, forward, backward, edits);
        } else {
            self.push_changes(a_range, b_range, edits);
        }

        self.push_equal(suffix_range, edits);
    }

    /// Returns a point on a shortest edit path through the given box, with
    /// both ranges non-empty and differing at their first and last elements.
    fn middle_snake(
        &self,
        a_range: Range<usize>,
        b_range: Range<usize>,
        forward: &mut Frontier,
        backward: &mut Frontier,
    ) -> Option<(usize, usize)> {
        let a = &self.a[a_range.clone()];
        let b = &self.b[b_range.clone()];
        let (n, m) = (a.len() as isize, b.len() as isize);
        let delta = n - m;
        let odd = delta % 2 != 0;

        forward[1] = 0;
        backward[1] = 0;

        for d in 0..=(n + m + 1) / 2 {
            for k in (-d..=d).rev().step_by(2) {
                let mut x = if k == -d || (k != d && forward[k - 1] < forward[k + 1]) {
                    forward[k + 1]
                } else {
                    forward[k - 1] + 1
                };
                let mut y = x - k;
                let (x0, y0) = (x, y);

                while x < n && y < m && a[x as usize] == b[y as usize] {
                    x += 1;
                    y += 1;
                }
                forward[k] = x;

                if odd && (k - delta).abs() < d && forward[k] + backward[delta - k] >= n {
                    return Some((
                        a_range.start + x0 as usize,
                        b_range.start + y0 as usize,
                    ));
                }
            }

            for k in (-d..=d).rev().step_by(2) {
                let mut x = if k == -d || (k != d && backward[k - 1] < backward[k + 1]) {
                    backward[k + 1]
                } else {
                    backward[k - 1] + 1
                };
                let mut y = x - k;

                // same walk, mirrored from the bottom-right corner
                while x < n && y < m && a[(n - x - 1) as usize] == b[(m - y - 1) as usize] {
                    x += 1;
                    y += 1;
                }
                backward[k] = x;

                if !odd && (k - delta).abs() <= d && backward[k] + forward[delta - k] >= n {
                    return Some((
                        a_range.start + (n - x) as usize,
                        b_range.start + (m - y) as usize,
                    ));
                }
            }
        }

        None
    }

    fn push_equal(&self, a_range: Range<usize>, edits: &mut Vec<Edit<T>>) {
        edits.extend(self.a[a_range].iter().map(|value| Edit::Equal {
            value: value.clone(),
        }));
    }

    fn push_changes(&self, a_range: Range<usize>, b_range: Range<usize>, edits: &mut Vec<Edit<T>>) {
        edits.extend(self.a[a_range].iter().map(|value| Edit::Delete {
            value: value.clone(),
        }));
        edits.extend(self.b[b_range].iter().map(|value| Edit::Insert {
            value: value.clone(),
        }));
    }
}

/// Reorders every run of changes so that its deletions precede its insertions.
fn deletions_first<T>(edits: Vec<Edit<T>>) -> Vec<Edit<T>> {
    let mut ordered = Vec::with_capacity(edits.len());
    let mut pending_inserts = Vec::new();

    for edit in edits {
        match edit {
            Edit::Delete { .. } => ordered.push(edit),
            Edit::Insert { .. } => pending_inserts.push(edit),
            Edit::Equal { .. } => {
                ordered.append(&mut pending_inserts);
                ordered.push(edit);
            }
        }
    }
    ordered.append(&mut pending_inserts);

    ordered
}

impl<T: Eq + Clone> DiffAlgorithm<T> for MyersDiff<'_, T> {
    type EditScript = Vec<Edit<T>>;

    fn diff(&self) -> Self::EditScript {
        let max_d = (self.a.len() + self.b.len()).div_ceil(2);
        let mut forward = Frontier::new(max_d);
        let mut backward = Frontier::new(max_d);
        let mut edits = Vec::with_capacity(self.a.len().max(self.b.len()));

        self.conquer(
            0..self.a.len(),
            0..self.b.len(),
            &mut forward,
            &mut backward,
            &mut edits,
        );

        deletions_first(edits)
    }
}
