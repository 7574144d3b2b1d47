/*!
# Representations

Graphs in this crate are stored as dense, symmetric adjacency matrices: see [`AdjMatrix`].
The matrix implements all traits of [`ops`](crate::ops) and is the input and output type of
every algorithm in [`algo`](crate::algo).
*/

use crate::{ops::*, *};

mod matrix;

pub use matrix::*;
