/// Plot a sampled sine and save a PostScript copy of it.

use std::error::Error;
use gnuplot_pipes as gp;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let mut s = gp::Session::builder().persist().spawn()?;
    let x: Vec<_> = (0 .. 1000).map(|i| i as f64 / 10.).collect();
    let y: Vec<_> = x.iter().map(|x| x.sin()).collect();
    s.set_style(gp::Style::Points).append_style("pt 7 ps 0.3 lc rgb \"red\"");
    s.xy(&x, &y).title("sin").plot()?;
    s.hardcopy("target/a_simple_example.ps", gp::PsColor::Color)?;
    s.close()?;
    Ok(())
}
