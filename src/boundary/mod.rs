pub mod classifier_trait;
pub mod clip;
pub mod epochs;
pub mod factory;
pub mod lda;
pub mod linear;
pub mod logistic;
pub mod quadratic;
pub mod softmax;
pub mod table;

pub use classifier_trait::Classifier;
pub use linear::{LinearBoundary, Segment};

/// How a solved boundary is drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryRepr {
    /// A single line `w0 + w1*x + w2*y = 0`.
    Line(LinearBoundary),
    /// Pairwise segments between competing classes.
    Segments(Vec<Segment>),
    /// No closed-form line; regions come from dense grid evaluation of the
    /// classify function.
    Discriminant,
}
