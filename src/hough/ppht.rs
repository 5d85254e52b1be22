//! Progressive probabilistic Hough transform over a binary edge map.

use super::{HoughParams, Segment};
use crate::image::GrayFrame;
use log::debug;
use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Detect line segments in a binary edge map.
///
/// Zero or more segments; an empty vector is a valid outcome. Deterministic
/// for a fixed `params.seed` and input frame.
pub fn detect_segments(edges: &GrayFrame, params: &HoughParams) -> Vec<Segment> {
    Ppht::new(edges, params).run()
}

struct Ppht<'a> {
    params: &'a HoughParams,
    w: usize,
    h: usize,
    numangle: usize,
    numrho: usize,
    cos_table: Vec<f32>,
    sin_table: Vec<f32>,
    accum: Vec<i32>,
    /// Remaining edge pixels; cleared as segments consume them.
    mask: Vec<bool>,
    /// Pixels that have voted and must be un-voted when consumed.
    voted: Vec<bool>,
    segments: Vec<Segment>,
}

impl<'a> Ppht<'a> {
    fn new(edges: &'a GrayFrame, params: &'a HoughParams) -> Self {
        let w = edges.w;
        let h = edges.h;
        let numangle = ((std::f32::consts::PI / params.theta).round() as usize).max(1);
        let numrho = ((((w + h) * 2 + 1) as f32) / params.rho).round() as usize;
        let mut cos_table = Vec::with_capacity(numangle);
        let mut sin_table = Vec::with_capacity(numangle);
        for n in 0..numangle {
            let ang = n as f32 * params.theta;
            cos_table.push(ang.cos() / params.rho);
            sin_table.push(ang.sin() / params.rho);
        }
        Self {
            params,
            w,
            h,
            numangle,
            numrho,
            cos_table,
            sin_table,
            accum: vec![0i32; numangle * numrho],
            mask: edges.data.iter().map(|&v| v != 0).collect(),
            voted: vec![false; w * h],
            segments: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Segment> {
        let mut points: Vec<(usize, usize)> = Vec::new();
        for y in 0..self.h {
            for x in 0..self.w {
                if self.mask[y * self.w + x] {
                    points.push((x, y));
                }
            }
        }

        let mut rng = StdRng::seed_from_u64(self.params.seed);
        let mut remaining = points.len();
        while remaining > 0 {
            let pick = rng.gen_range(0..remaining);
            let (x, y) = points[pick];
            points.swap(pick, remaining - 1);
            remaining -= 1;

            // Consumed by an earlier segment walk.
            if !self.mask[y * self.w + x] {
                continue;
            }

            if let Some(best_angle) = self.vote(x, y) {
                self.trace_segment(x, y, best_angle);
            }
        }

        debug!(
            "detect_segments: {} segments from {} edge pixels",
            self.segments.len(),
            points.len()
        );
        self.segments
    }

    /// Vote the pixel into every angle bin; return the winning angle when the
    /// vote threshold is reached.
    fn vote(&mut self, x: usize, y: usize) -> Option<usize> {
        self.voted[y * self.w + x] = true;
        let mut max_votes = self.params.threshold as i32 - 1;
        let mut best = None;
        for n in 0..self.numangle {
            let r = self.rho_index(x as f32, y as f32, n);
            let votes = {
                let bin = &mut self.accum[n * self.numrho + r];
                *bin += 1;
                *bin
            };
            if votes > max_votes {
                max_votes = votes;
                best = Some(n);
            }
        }
        best
    }

    #[inline]
    fn rho_index(&self, x: f32, y: f32, n: usize) -> usize {
        let r = (x * self.cos_table[n] + y * self.sin_table[n]).round() as isize
            + (self.numrho as isize - 1) / 2;
        r.clamp(0, self.numrho as isize - 1) as usize
    }

    /// Walk the edge map along `angle` from the seed in both directions to
    /// find the endpoints, then consume the pixels (and their votes) so the
    /// same evidence cannot spawn another segment.
    fn trace_segment(&mut self, x: usize, y: usize, angle: usize) {
        let cos_t = self.cos_table[angle] * self.params.rho;
        let sin_t = self.sin_table[angle] * self.params.rho;
        // Direction along the line x·cosθ + y·sinθ = ρ.
        let (dir_x, dir_y) = (-sin_t, cos_t);
        let inv = 1.0 / dir_x.abs().max(dir_y.abs());
        let step = (dir_x * inv, dir_y * inv);

        let ends = [
            self.walk(x, y, step, 1.0),
            self.walk(x, y, step, -1.0),
        ];
        let dx = ends[0].0 as f32 - ends[1].0 as f32;
        let dy = ends[0].1 as f32 - ends[1].1 as f32;
        let good = (dx * dx + dy * dy).sqrt() >= self.params.min_length;

        self.consume(x, y, step, 1.0, ends[0], good);
        self.consume(x, y, step, -1.0, ends[1], good);

        if good {
            self.segments.push(Segment::new(
                Point2::new(ends[1].0 as f32, ends[1].1 as f32),
                Point2::new(ends[0].0 as f32, ends[0].1 as f32),
            ));
        }
    }

    /// Follow the line from the seed, bridging gaps up to `max_gap`, and
    /// return the last on-pixel reached.
    fn walk(&self, x: usize, y: usize, step: (f32, f32), sign: f32) -> (usize, usize) {
        let max_gap = self.params.max_gap.max(0.0) as usize;
        let mut fx = x as f32;
        let mut fy = y as f32;
        let mut last = (x, y);
        let mut gap = 0usize;
        loop {
            fx += step.0 * sign;
            fy += step.1 * sign;
            let xi = fx.round();
            let yi = fy.round();
            if xi < 0.0 || yi < 0.0 || xi >= self.w as f32 || yi >= self.h as f32 {
                break;
            }
            let (xi, yi) = (xi as usize, yi as usize);
            if self.mask[yi * self.w + xi] {
                last = (xi, yi);
                gap = 0;
            } else {
                gap += 1;
                if gap > max_gap {
                    break;
                }
            }
        }
        last
    }

    /// Re-walk from the seed to the recorded endpoint, clearing pixels and
    /// (for accepted segments) taking back their votes.
    fn consume(&mut self, x: usize, y: usize, step: (f32, f32), sign: f32, end: (usize, usize), unvote: bool) {
        let mut fx = x as f32;
        let mut fy = y as f32;
        loop {
            let xr = fx.round();
            let yr = fy.round();
            if xr < 0.0 || yr < 0.0 || xr >= self.w as f32 || yr >= self.h as f32 {
                break;
            }
            let (xi, yi) = (xr as usize, yr as usize);
            let idx = yi * self.w + xi;
            if self.mask[idx] {
                self.mask[idx] = false;
                if unvote && self.voted[idx] {
                    self.voted[idx] = false;
                    for n in 0..self.numangle {
                        let r = self.rho_index(xi as f32, yi as f32, n);
                        self.accum[n * self.numrho + r] -= 1;
                    }
                }
            }
            if (xi, yi) == end {
                break;
            }
            fx += step.0 * sign;
            fy += step.1 * sign;
        }
    }
}
