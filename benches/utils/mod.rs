use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use geom_kernel::Coordinate;

//// Utility functions

/// Closed, counter-clockwise polygon shells with `n_vertices` vertices on a
/// jittered circle, scattered over a 1000x1000 square.
pub(crate) fn get_random_shells(n: usize, n_vertices: usize, seed: u64) -> Vec<Vec<Coordinate>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        let center_x = rng.gen_range(0., 1000.);
        let center_y = rng.gen_range(0., 1000.);
        let radius = rng.gen_range(1., 20.);
        let mut shell: Vec<Coordinate> = (0..n_vertices)
            .map(|i| {
                let angle = 2. * std::f64::consts::PI * (i as f64) / (n_vertices as f64);
                let r = radius * rng.gen_range(0.8, 1.);
                Coordinate::new(center_x + r * angle.cos(), center_y + r * angle.sin())
            })
            .collect();
        shell.push(shell[0]);
        results.push(shell);
    }
    results
}

pub(crate) fn get_random_lines(n: usize, n_vertices: usize, seed: u64) -> Vec<Vec<Coordinate>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        let mut x = rng.gen_range(0., 1000.);
        let mut y = rng.gen_range(0., 1000.);
        let mut line = Vec::with_capacity(n_vertices);
        for _j in 0..n_vertices {
            line.push(Coordinate::new(x, y));
            x += rng.gen_range(1., 10.);
            y += rng.gen_range(-5., 5.);
        }
        results.push(line);
    }
    results
}
