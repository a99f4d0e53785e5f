use serde::Serialize;
use std::fmt;

/// Numeric edge weight shared by every algorithm.
///
/// Integers use `MAX` as infinity, floats use `INFINITY`. `path_sum`
/// saturates so that an unreachable distance stays unreachable no matter
/// what is added to it.
pub trait Weight: Copy + PartialOrd + fmt::Debug + fmt::Display + 'static {
    const ZERO: Self;
    const INFINITY: Self;

    /// Sum of two path segments; infinity absorbs everything
    fn path_sum(self, other: Self) -> Self;

    fn to_f64(self) -> f64;

    fn is_infinite(self) -> bool {
        self == Self::INFINITY
    }

    fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

macro_rules! impl_int_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0;
                const INFINITY: Self = <$t>::MAX;

                fn path_sum(self, other: Self) -> Self {
                    if self == <$t>::MAX || other == <$t>::MAX {
                        <$t>::MAX
                    } else {
                        self.saturating_add(other)
                    }
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0.0;
                const INFINITY: Self = <$t>::INFINITY;

                fn path_sum(self, other: Self) -> Self {
                    self + other
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_int_weight!(i32, i64, u32, u64);
impl_float_weight!(f32, f64);

/// A node of the graph, carrying an immutable payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node<T> {
    pub value: T,
}

/// A directed weighted edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

impl<W: Weight> Edge<W> {
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        Edge { from, to, weight }
    }

    /// The same edge pointing the other way
    pub fn reversed(&self) -> Self {
        Edge {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --{}--> {}", self.from, self.weight, self.to)
    }
}

/// Outgoing adjacency entry: target node and edge weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Adjacent<W> {
    pub to: usize,
    pub weight: W,
}
