use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::boundary::linear::LinearBoundary;
use crate::boundary::quadratic::ClassStats;
use crate::data::Domain;

/// Central canvas/axis configuration a diagram is drawn against.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DiagramConfig {
    pub width: u32,
    pub height: u32,
    pub domain: Domain,
    pub accent_color: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        DiagramConfig {
            width: 800,
            height: 400,
            domain: Domain::default(),
            accent_color: "#58a6ff".to_string(),
            x_label: "Feature x\u{2081}".to_string(),
            y_label: "Feature x\u{2082}".to_string(),
        }
    }
}

/// The six models the zoo draws.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Lda,
    Qda,
    Logistic,
    Multinomial,
    Perceptron,
    Ridge,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelKind::Lda => "lda",
            ModelKind::Qda => "qda",
            ModelKind::Logistic => "logistic",
            ModelKind::Multinomial => "multinomial",
            ModelKind::Perceptron => "perceptron",
            ModelKind::Ridge => "ridge",
        };
        f.write_str(name)
    }
}

impl FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lda" => Ok(ModelKind::Lda),
            "qda" => Ok(ModelKind::Qda),
            "logistic" => Ok(ModelKind::Logistic),
            "multinomial" => Ok(ModelKind::Multinomial),
            "perceptron" => Ok(ModelKind::Perceptron),
            "ridge" => Ok(ModelKind::Ridge),
            _ => Err(format!(
                "Unknown model kind: {}. Expected one of lda, qda, logistic, multinomial, perceptron, ridge",
                s
            )),
        }
    }
}

/// Declarative solver configuration: one tagged variant per solver family.
/// The boundary factory turns one of these (plus the sampled points) into a
/// solved boundary and a boxed classifier.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "solver", rename_all = "snake_case")]
pub enum SolverSpec {
    /// A fixed, precomputed line.
    Linear {
        boundary: LinearBoundary,
    },
    /// Fit a linear discriminant from the sampled points (class means and
    /// pooled within-class scatter).
    FitLda,
    /// Quadratic discriminant over fixed per-class statistics; optionally
    /// also builds the shared-covariance comparison classifier.
    Quadratic {
        classes: Vec<ClassStats>,
        shared_comparison: bool,
    },
    Softmax {
        weights: Vec<[f64; 3]>,
        center: (f64, f64),
    },
    /// Discrete hyperparameter lookup; `key` selects the entry, unknown
    /// keys resolve to `fallback`.
    Table {
        entries: Vec<(String, LinearBoundary)>,
        fallback: String,
        key: String,
    },
    /// Epoch-stepped snapshots; out-of-range epochs clamp to the last.
    Epoch {
        snapshots: Vec<LinearBoundary>,
        epoch: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_the_zoo_canvas() {
        let cfg = DiagramConfig::default();
        assert_eq!(cfg.width, 800);
        assert_eq!(cfg.height, 400);
        assert_eq!(cfg.domain, Domain::new(0.0, 10.0, 0.0, 10.0));
        assert_eq!(cfg.accent_color, "#58a6ff");
    }

    #[test]
    fn model_kind_parses_case_insensitively() {
        assert_eq!("LDA".parse::<ModelKind>().unwrap(), ModelKind::Lda);
        assert_eq!("ridge".parse::<ModelKind>().unwrap(), ModelKind::Ridge);
        assert!("forest".parse::<ModelKind>().is_err());
    }

    #[test]
    fn solver_spec_roundtrips_through_serde() {
        let spec = SolverSpec::Linear {
            boundary: LinearBoundary::new(-5.0, 1.0, -0.5),
        };
        let json = serde_json::to_string(&spec).unwrap();
        let back: SolverSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, back);

        let fit: SolverSpec = serde_json::from_str(r#"{"solver": "fit_lda"}"#).unwrap();
        assert_eq!(fit, SolverSpec::FitLda);
    }

    #[test]
    fn model_kind_display_matches_from_str() {
        for kind in [
            ModelKind::Lda,
            ModelKind::Qda,
            ModelKind::Logistic,
            ModelKind::Multinomial,
            ModelKind::Perceptron,
            ModelKind::Ridge,
        ] {
            assert_eq!(kind.to_string().parse::<ModelKind>().unwrap(), kind);
        }
    }
}
