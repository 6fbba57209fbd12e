use std::cmp::Ordering;
use std::f32::consts::PI;

use crate::config::PackerConfig;

use super::error::LayoutError;

/// One record to be packed: a stable identity plus a positive magnitude.
#[derive(Debug, Clone)]
pub struct PackInput {
    pub id: String,
    pub value: f32,
}

impl PackInput {
    pub fn new(id: impl Into<String>, value: f32) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }
}

/// The rectangular area circles are placed into. `top_margin` is a band at
/// the top of the region (titles, legends) that no circle may enter.
#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub width: f32,
    pub height: f32,
    pub top_margin: f32,
}

impl Region {
    pub fn new(width: f32, height: f32, top_margin: f32) -> Self {
        Self {
            width,
            height,
            top_margin,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    fn validate(&self) -> Result<(), LayoutError> {
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(LayoutError::InvalidRegion {
                width: self.width,
                height: self.height,
            });
        }
        if self.top_margin < 0.0 || self.top_margin >= self.height {
            return Err(LayoutError::MarginTooLarge {
                margin: self.top_margin,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Final position of one circle, in region-local coordinates.
#[derive(Debug, Clone)]
pub struct Placement {
    pub id: String,
    pub value: f32,
    pub radius: f32,
    pub x: f32,
    pub y: f32,
}

struct Circle {
    /// Position in the filtered input, used to restore output order.
    order: usize,
    id: String,
    value: f32,
    radius: f32,
    x: f32,
    y: f32,
    pinned: bool,
}

/// Computes a circular layout for `items` inside `region`.
///
/// Radii follow a square-root scale so that circle *area* is proportional
/// to value, the total area is capped at a fraction of the region, and a
/// fixed number of relaxation passes spreads the circles out. Items with
/// `value <= 0` are dropped; the returned placements keep the relative
/// order of the surviving inputs. A modest amount of mutual overlap is
/// allowed (`collision_slack`); containment in the region and in the band
/// below `top_margin` is strict.
pub fn pack_circles(
    items: &[PackInput],
    region: Region,
    cfg: &PackerConfig,
) -> Result<Vec<Placement>, LayoutError> {
    region.validate()?;

    let mut circles: Vec<Circle> = items
        .iter()
        .filter(|item| item.value > 0.0)
        .enumerate()
        .map(|(order, item)| Circle {
            order,
            id: item.id.clone(),
            value: item.value,
            radius: 0.0,
            x: 0.0,
            y: 0.0,
            pinned: false,
        })
        .collect();
    if circles.is_empty() {
        return Ok(Vec::new());
    }

    size_circles(&mut circles, region, cfg);
    circles.sort_by(|a, b| {
        b.radius
            .partial_cmp(&a.radius)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.order.cmp(&b.order))
    });
    enforce_area_budget(&mut circles, region, cfg);
    seed_positions(&mut circles, region, cfg);
    if circles.len() > 1 {
        relax(&mut circles, region, cfg);
    }

    circles.sort_by_key(|c| c.order);
    Ok(circles
        .into_iter()
        .map(|c| Placement {
            id: c.id,
            value: c.value,
            radius: c.radius,
            x: c.x,
            y: c.y,
        })
        .collect())
}

/// Square-root scale: radius grows with sqrt(value), so area tracks value.
fn size_circles(circles: &mut [Circle], region: Region, cfg: &PackerConfig) {
    let mut max_value = 0.0_f32;
    for circle in circles.iter() {
        max_value = max_value.max(circle.value);
    }
    // All inputs are positive here, but guard the divisor anyway.
    if max_value <= 0.0 {
        max_value = 1.0;
    }

    // The fractional cap alone is not enough: the diameter must also fit
    // inside the band below the protected margin and across the width, or
    // containment clamping would have no valid interval.
    let radius_cap = (region.height * cfg.max_radius_fraction)
        .min((region.height - region.top_margin) / 2.0)
        .min(region.width / 2.0);
    let seed_max = radius_cap * cfg.initial_radius_scale;
    let span = (seed_max - cfg.min_radius).max(0.0);
    for circle in circles.iter_mut() {
        let t = (circle.value / max_value).sqrt();
        circle.radius = (cfg.min_radius + span * t).min(radius_cap);
    }
}

/// Single global correction: if the summed circle area exceeds the budget,
/// shrink every radius by one common factor so the budget holds exactly.
fn enforce_area_budget(circles: &mut [Circle], region: Region, cfg: &PackerConfig) {
    let budget = cfg.area_budget_fraction * region.width * region.height;
    let total: f32 = circles.iter().map(|c| PI * c.radius * c.radius).sum();
    if total > budget && total > 0.0 {
        let scale = (budget / total).sqrt();
        for circle in circles.iter_mut() {
            circle.radius *= scale;
        }
    }
}

/// Largest circle is pinned at the region center (nudged into the allowed
/// band once); the rest start on an outward spiral that relaxation refines.
fn seed_positions(circles: &mut [Circle], region: Region, cfg: &PackerConfig) {
    let (cx, cy) = region.center();

    let largest = &mut circles[0];
    largest.x = clamp_axis(cx, largest.radius, region.width - largest.radius);
    largest.y = clamp_axis(
        cy,
        region.top_margin + largest.radius,
        region.height - largest.radius,
    );
    largest.pinned = true;

    let rest = circles.len() - 1;
    if rest == 0 {
        return;
    }
    let angle_step = 2.0 * PI / rest as f32;
    let radius_step = cfg.spiral_step_fraction * region.width.min(region.height);
    for (k, circle) in circles.iter_mut().skip(1).enumerate() {
        let ring = 1 + k / cfg.spiral_band.max(1);
        let spiral_radius = radius_step * ring as f32;
        let angle = k as f32 * angle_step;
        circle.x = cx + spiral_radius * angle.cos();
        circle.y = cy + spiral_radius * angle.sin();
        clamp_into_region(circle, region);
    }
}

/// Fixed-iteration force relaxation: weak pull to the center, generic
/// pairwise repulsion, and a collision push that uses radii minus the
/// configured slack, followed by a containment clamp each pass. Bounded
/// cost by construction; there is no convergence check.
fn relax(circles: &mut [Circle], region: Region, cfg: &PackerConfig) {
    let (cx, cy) = region.center();
    let n = circles.len();

    for _ in 0..cfg.iterations {
        for circle in circles.iter_mut() {
            if circle.pinned {
                continue;
            }
            circle.x += (cx - circle.x) * cfg.center_pull;
            circle.y += (cy - circle.y) * cfg.center_pull;
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let dx = circles[j].x - circles[i].x;
                let dy = circles[j].y - circles[i].y;
                let dist = (dx * dx + dy * dy).sqrt();
                // Coincident centers get a deterministic separation axis so
                // two identical runs stay bit-identical.
                let (ux, uy, dist) = if dist < 1e-3 {
                    let angle = (i * 7 + j * 13) as f32;
                    (angle.cos(), angle.sin(), 1e-3)
                } else {
                    (dx / dist, dy / dist, dist)
                };

                let mut push = cfg.repulsion / dist.max(1.0);
                let min_dist = circles[i].radius + circles[j].radius - cfg.collision_slack;
                if dist < min_dist {
                    push += (min_dist - dist) * cfg.collision_strength;
                }
                if push <= 0.0 {
                    continue;
                }

                match (circles[i].pinned, circles[j].pinned) {
                    (false, false) => {
                        let half = push / 2.0;
                        circles[i].x -= ux * half;
                        circles[i].y -= uy * half;
                        circles[j].x += ux * half;
                        circles[j].y += uy * half;
                    }
                    (true, false) => {
                        circles[j].x += ux * push;
                        circles[j].y += uy * push;
                    }
                    (false, true) => {
                        circles[i].x -= ux * push;
                        circles[i].y -= uy * push;
                    }
                    (true, true) => {}
                }
            }
        }

        for circle in circles.iter_mut() {
            if !circle.pinned {
                clamp_into_region(circle, region);
            }
        }
    }
}

fn clamp_into_region(circle: &mut Circle, region: Region) {
    circle.x = clamp_axis(circle.x, circle.radius, region.width - circle.radius);
    circle.y = clamp_axis(
        circle.y,
        region.top_margin + circle.radius,
        region.height - circle.radius,
    );
}

/// Clamp that degrades to the interval midpoint when a circle is wider
/// than the available span (pathologically skinny regions).
fn clamp_axis(v: f32, lo: f32, hi: f32) -> f32 {
    if lo > hi { (lo + hi) / 2.0 } else { v.clamp(lo, hi) }
}
