/// A small trait abstraction for the point-classification functions the
/// solvers produce. The renderer evaluates it over a dense grid to fill
/// decision regions, so implementations must be pure and cheap.
pub trait Classifier {
    /// Predicted class label for a point in diagram coordinates.
    fn classify(&self, x: f64, y: f64) -> usize;

    /// Optional human readable name for the classifier
    fn name(&self) -> &str {
        "classifier"
    }
}
