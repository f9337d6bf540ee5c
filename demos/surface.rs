// Surfaces, contours and callbacks.

use std::{error::Error, f64::consts::PI, thread, time::Duration};
use gnuplot_pipes as gp;
use ndarray::Array2;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let mut s = gp::Session::new()?;
    s.set_style(gp::Style::Lines);
    let z = Array2::from_shape_fn((30, 30), |(i, j)| {
        let (x, y) = (i as f64 / 5. - 3., j as f64 / 5. - 3.);
        (-(x * x + y * y) / 2.).exp() });
    s.grid(&z).title("gaussian").plot()?;
    thread::sleep(Duration::from_secs(3));

    s.reset_plot();
    let x = Array2::from_shape_fn((40, 40), |(i, _)| i as f64 / 20. - 1.);
    let y = Array2::from_shape_fn((40, 40), |(_, j)| j as f64 / 20. - 1.);
    let z = &x * &x - &y * &y;
    s.contour(&x, &y, &z).title("saddle").plot()?;
    thread::sleep(Duration::from_secs(3));

    s.cmd("set surface")?;
    s.cmd("unset contour")?;
    s.cmd("set view 60,30")?;
    s.reset_plot();
    s.obj_xyz(200, |i, n| {
        let t = 6. * PI * i as f64 / n as f64;
        gp::Point { x: t.cos(), y: t.sin(), z: t }
    }).title("helix").plot()?;
    thread::sleep(Duration::from_secs(3));
    s.close()?;
    Ok(())
}
