use mlzoo_boundaries::config::ModelKind;
use mlzoo_boundaries::scene::{BoundaryRepr, Scene};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let kinds = [
        ModelKind::Logistic,
        ModelKind::Multinomial,
        ModelKind::Lda,
        ModelKind::Qda,
        ModelKind::Perceptron,
        ModelKind::Ridge,
    ];

    for kind in kinds {
        let scene = Scene::build(kind)?;
        println!("----- {:?} -----", kind);
        println!("{} points", scene.points.len());
        match &scene.repr {
            BoundaryRepr::Line(b) => {
                println!("boundary: {:.3} + {:.3}x + {:.3}y = 0", b.w0, b.w1, b.w2);
            }
            BoundaryRepr::Segments(segs) => {
                for s in segs {
                    println!(
                        "boundary {}|{}: ({:.2}, {:.2}) -> ({:.2}, {:.2})",
                        s.classes.0, s.classes.1, s.x1, s.y1, s.x2, s.y2
                    );
                }
            }
            BoundaryRepr::Discriminant => {
                println!("curved discriminant boundary (grid-evaluated)");
            }
        }
        if let Some(dir) = scene.direction {
            println!("projection direction: ({:.3}, {:.3})", dir.x, dir.y);
        }
        println!("classify(5, 5) = {}", scene.classifier.classify(5.0, 5.0));
    }

    Ok(())
}
