use std::str::FromStr;

use anyhow::Context;
use mlzoo_boundaries::config::ModelKind;
use mlzoo_boundaries::report::plots::{plot_scene, plot_sigmoid};
use mlzoo_boundaries::scene::Scene;

/// Build one preset scene by name and write it out as a standalone plotly
/// HTML page. Usage: `cargo run --example plot_scene -- qda`
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "lda".to_string());
    let kind = ModelKind::from_str(&name)
        .map_err(anyhow::Error::msg)
        .context("parsing model kind")?;

    let scene = Scene::build(kind)?;
    let plot = plot_scene(&scene, &format!("{:?} decision boundary", kind))
        .map_err(anyhow::Error::msg)?;

    let out = format!("{}.html", name.to_lowercase());
    plot.write_html(&out);
    println!("wrote {}", out);

    if kind == ModelKind::Logistic {
        let sigmoid = plot_sigmoid("Logistic sigmoid");
        sigmoid.write_html("sigmoid.html");
        println!("wrote sigmoid.html");
    }

    Ok(())
}
