#![warn(missing_docs)]

//! Optical materials and interaction laws for the beamtrace kernel.
//!
//! A [`Material`] describes how a shape's boundary transforms rays that
//! collide with it. Each interaction consumes one incoming ray and
//! produces zero, one or two outgoing rays:
//!
//! - [`Material::Beam`] - source marker; seeds rays, never interacts
//! - [`Material::Mirror`] - one specularly reflected ray
//! - [`Material::BeamDump`] - absorbs; no outgoing rays
//! - [`Material::BeamSplitter`] - one reflected plus one transmitted ray
//! - [`Material::Glass`] - one ray refracted by Snell's law, or mirror
//!   reflection past the critical angle

use beamtrace_geom::{Intersection, Ray};
use beamtrace_math::reflect;

/// The optical behavior assigned to a shape's boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Marks a shape as a beam source. Sources seed initial rays along
    /// their geometry and are never hit targets themselves.
    Beam,
    /// Reflects every incoming ray about the surface normal.
    Mirror,
    /// Absorbs every incoming ray.
    BeamDump,
    /// Splits every incoming ray into a reflected and a transmitted ray.
    BeamSplitter,
    /// Refractive medium with the given optical index; the shape must be
    /// closed for the inside of the medium to be defined.
    Glass {
        /// Refractive index of the medium (vacuum outside is 1.0).
        optical_index: f64,
    },
}

impl Material {
    /// Parse a single raw annotation directive into a material.
    ///
    /// Recognized directives are `beam`, `mirror`, `beam_dump`,
    /// `beam_splitter` and `glass:<index>`. Anything else, including a
    /// `glass` directive with a missing or non-positive index, yields
    /// `None`; the shape is then treated as having no material at all.
    pub fn from_tag(tag: &str) -> Option<Material> {
        let mut parts = tag.trim().splitn(2, ':');
        let name = parts.next()?.trim();
        let param = parts.next().map(str::trim);
        match (name, param) {
            ("beam", None) => Some(Material::Beam),
            ("mirror", None) => Some(Material::Mirror),
            ("beam_dump", None) => Some(Material::BeamDump),
            ("beam_splitter", None) => Some(Material::BeamSplitter),
            ("glass", Some(num)) => {
                let optical_index: f64 = num.parse().ok()?;
                if optical_index.is_finite() && optical_index > 0.0 {
                    Some(Material::Glass { optical_index })
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Compute the rays generated by an incoming ray colliding with a
    /// surface of this material.
    ///
    /// `hit` is the collision geometry and `inside` tells whether the
    /// incoming ray originated inside the shape (only meaningful for
    /// [`Material::Glass`]). Outgoing rays originate at the hit point;
    /// the caller is responsible for nudging them off the surface and
    /// for depth accounting.
    pub fn generated_rays(&self, incoming: &Ray, hit: &Intersection, inside: bool) -> Vec<Ray> {
        let d = incoming.direction.into_inner();
        let n = hit.normal_against(&d).into_inner();
        match self {
            Material::Beam | Material::BeamDump => Vec::new(),
            Material::Mirror => vec![Ray::new(hit.point, reflect(&d, &n))],
            Material::BeamSplitter => vec![
                Ray::new(hit.point, reflect(&d, &n)),
                Ray::new(hit.point, d),
            ],
            Material::Glass { optical_index } => {
                let (n1, n2) = if inside {
                    (*optical_index, 1.0)
                } else {
                    (1.0, *optical_index)
                };
                let r = n1 / n2;
                // cos of the incidence angle; n is oriented against d
                let c1 = -d.dot(&n);
                let u = 1.0 - r * r * (1.0 - c1 * c1);
                if u < 0.0 {
                    // Total internal reflection
                    vec![Ray::new(hit.point, reflect(&d, &n))]
                } else {
                    let c2 = u.sqrt();
                    vec![Ray::new(hit.point, r * d + (r * c1 - c2) * n)]
                }
            }
        }
    }
}
