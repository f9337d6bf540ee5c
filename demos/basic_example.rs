// Example for the README

use gnuplot_pipes as gp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let s = gp::plot_once(None, Some("t"), Some("v"),
                          Some(&[1., 2., 3., 4.]), &[1., 4., 2., 3.],
                          Some("basic"))?;
    std::thread::sleep(std::time::Duration::from_secs(3));
    s.close()?;
    Ok(())
}
