//! Anchor renderer: a [`Style`](crate::Style) drawn as a 6 px SVG strip.
//!
//! Each [`Family`] has a drawing routine that tiles a small glyph along the
//! strip; the [`Variant`] tunes size, spacing, fill, or orientation. The
//! routines produce [`Primitive`]s, which [`to_svg`] serializes. Glyphs
//! near the right edge may overhang the strip; the `viewBox` clips them so
//! output never exceeds the requested width.
//!
//! Output is a pure function of `(pattern, color, width)`: coordinates are
//! rounded to two decimals before formatting, so the same inputs always
//! produce byte-identical markup.

use std::f64::consts::PI;
use std::fmt;

use crate::palette::Rgb;
use crate::pattern::{AnchorPattern, Family, Variant};

/// Height of every anchor strip, in pixels.
pub const ANCHOR_HEIGHT: f64 = 6.0;

const MID: f64 = ANCHOR_HEIGHT / 2.0;

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

/// How a primitive is filled and stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    /// Fill color, or `None` for `fill="none"`.
    pub fill: Option<Rgb>,
    /// Stroke color and width.
    pub stroke: Option<(Rgb, f64)>,
    /// Round line caps and joins.
    pub round: bool,
}

impl Paint {
    const fn fill(color: Rgb) -> Self {
        Self { fill: Some(color), stroke: None, round: false }
    }

    const fn stroke(color: Rgb, width: f64) -> Self {
        Self { fill: None, stroke: Some((color, width)), round: false }
    }

    const fn fill_and_stroke(fill: Option<Rgb>, color: Rgb, width: f64) -> Self {
        Self { fill, stroke: Some((color, width)), round: false }
    }

    const fn rounded(self) -> Self {
        Self { round: true, ..self }
    }
}

/// One SVG shape element.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Circle { cx: f64, cy: f64, r: f64, paint: Paint },
    Rect { x: f64, y: f64, width: f64, height: f64, rx: Option<f64>, paint: Paint },
    Polygon { points: Vec<(f64, f64)>, paint: Paint },
    Polyline { points: Vec<(f64, f64)>, paint: Paint },
    Line { x1: f64, y1: f64, x2: f64, y2: f64, paint: Paint },
    /// `dy` translates the path down, used for doubled strokes.
    Path { d: String, dy: Option<f64>, paint: Paint },
}

/// Round to two decimals and format without a trailing `.0`.
fn num(v: f64) -> String {
    let r = (v * 100.0).round() / 100.0;
    // Avoid "-0".
    if r == 0.0 { "0".to_string() } else { r.to_string() }
}

fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|&(x, y)| format!("{},{}", num(x), num(y)))
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fill {
            Some(c) => write!(f, " fill=\"{c}\"")?,
            None => f.write_str(" fill=\"none\"")?,
        }
        if let Some((c, w)) = self.stroke {
            write!(f, " stroke=\"{c}\" stroke-width=\"{}\"", num(w))?;
        }
        if self.round {
            f.write_str(" stroke-linecap=\"round\" stroke-linejoin=\"round\"")?;
        }
        Ok(())
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle { cx, cy, r, paint } => {
                write!(f, "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{paint}/>", num(*cx), num(*cy), num(*r))
            }
            Self::Rect { x, y, width, height, rx, paint } => {
                write!(
                    f,
                    "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                    num(*x),
                    num(*y),
                    num(*width),
                    num(*height)
                )?;
                if let Some(rx) = rx {
                    write!(f, " rx=\"{}\"", num(*rx))?;
                }
                write!(f, "{paint}/>")
            }
            Self::Polygon { points, paint } => {
                write!(f, "<polygon points=\"{}\"{paint}/>", points_attr(points))
            }
            Self::Polyline { points, paint } => {
                write!(f, "<polyline points=\"{}\"{paint}/>", points_attr(points))
            }
            Self::Line { x1, y1, x2, y2, paint } => write!(
                f,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{paint}/>",
                num(*x1),
                num(*y1),
                num(*x2),
                num(*y2)
            ),
            Self::Path { d, dy, paint } => {
                write!(f, "<path d=\"{d}\"")?;
                if let Some(dy) = dy {
                    write!(f, " transform=\"translate(0, {})\"", num(*dy))?;
                }
                write!(f, "{paint}/>")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Draw `pattern` in `color` across a strip `width` pixels wide.
///
/// A non-positive or non-finite width yields no primitives.
#[must_use]
pub fn primitives(pattern: AnchorPattern, color: Rgb, width: f64) -> Vec<Primitive> {
    if !width.is_finite() || width <= 0.0 {
        return Vec::new();
    }
    let v = pattern.variant();
    let mut out = Vec::new();
    match pattern.family() {
        Family::Dots => dots(&mut out, color, width, v),
        Family::Dashes => dashes(&mut out, color, width, v),
        Family::Triangles => triangles(&mut out, color, width, v),
        Family::Waves => waves(&mut out, color, width, v),
        Family::Squares => squares(&mut out, color, width, v),
        Family::Diamonds => diamonds(&mut out, color, width, v),
        Family::Crosses => crosses(&mut out, color, width),
        Family::PlusSigns => plus_signs(&mut out, color, width),
        Family::Stars => stars(&mut out, color, width),
        Family::Hearts => hearts(&mut out, color, width),
        Family::Chevrons => chevrons(&mut out, color, width, v),
        Family::Brackets => brackets(&mut out, color, width),
        Family::Slashes => slashes(&mut out, color, width, false),
        Family::Backslashes => slashes(&mut out, color, width, true),
        Family::Pipes => pipes(&mut out, color, width),
        Family::Tildes => tildes(&mut out, color, width),
        Family::Carets => carets(&mut out, color, width),
    }
    out
}

/// Serialize the anchor as a standalone `<svg>` element.
#[must_use]
pub fn to_svg(pattern: AnchorPattern, color: Rgb, width: f64) -> String {
    let w = num(width.max(0.0));
    let h = num(ANCHOR_HEIGHT);
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
         viewBox=\"0 0 {w} {h}\" style=\"display:block;pointer-events:none\">"
    );
    for prim in primitives(pattern, color, width) {
        svg.push_str(&prim.to_string());
    }
    svg.push_str("</svg>");
    svg
}

/// A smooth wave along the strip's midline: one crest of height
/// `amplitude` and one trough every `wavelength` pixels, until `width` is
/// covered. `wave_path(8.0, 3.0, 8.0)` is `M 0 3 Q 2 0, 4 3 Q 6 6, 8 3`.
#[must_use]
pub fn wave_path(width: f64, amplitude: f64, wavelength: f64) -> String {
    let mut d = format!("M 0 {}", num(MID));
    if wavelength <= 0.0 {
        return d;
    }
    for x in steps(0.0, wavelength, width) {
        d.push_str(&format!(
            " Q {} {}, {} {} Q {} {}, {} {}",
            num(x + wavelength / 4.0),
            num(MID - amplitude),
            num(x + wavelength / 2.0),
            num(MID),
            num(x + wavelength * 3.0 / 4.0),
            num(MID + amplitude),
            num(x + wavelength),
            num(MID)
        ));
    }
    d
}

/// Zigzag counterpart of [`wave_path`]: straight segments between the
/// crest and trough heights.
fn zigzag_path(width: f64, amplitude: f64, wavelength: f64) -> String {
    let mut d = format!("M 0 {}", num(MID));
    for x in steps(0.0, wavelength, width) {
        d.push_str(&format!(
            " L {} {} L {} {}",
            num(x + wavelength / 2.0),
            num(MID - amplitude),
            num(x + wavelength),
            num(MID + amplitude)
        ));
    }
    d
}

// ---------------------------------------------------------------------------
// Family routines
// ---------------------------------------------------------------------------

/// Tile positions `start, start + step, …` below `width`.
fn steps(start: f64, step: f64, width: f64) -> impl Iterator<Item = f64> {
    std::iter::successors(Some(start), move |x| Some(x + step)).take_while(move |&x| x < width)
}

/// Whether the tile at `x` is an even one (for alternating variants).
fn is_even_tile(x: f64, spacing: f64) -> bool {
    (x / spacing).floor().rem_euclid(2.0) == 0.0
}

fn dots(out: &mut Vec<Primitive>, color: Rgb, width: f64, v: Option<Variant>) {
    let (radius, spacing) = match v {
        Some(Variant::Small) => (1.0, 6.0),
        Some(Variant::Large) => (2.5, 10.0),
        Some(Variant::Hollow | Variant::Gradient) => (2.0, 8.0),
        Some(Variant::Alternating) => (1.5, 6.0),
        Some(Variant::Spaced) => (1.5, 12.0),
        Some(Variant::Dense) => (1.0, 4.0),
        Some(Variant::Double) => (1.0, 10.0),
        Some(Variant::Triple) => (1.0, 12.0),
        _ => (1.5, 8.0),
    };
    for x in steps(spacing / 2.0, spacing, width) {
        let circle = |cx: f64, r: f64, paint: Paint| Primitive::Circle { cx, cy: MID, r, paint };
        match v {
            Some(Variant::Hollow) => out.push(circle(x, radius, Paint::stroke(color, 1.0))),
            Some(Variant::Alternating) => {
                let r = if is_even_tile(x, spacing) { radius } else { radius * 0.6 };
                out.push(circle(x, r, Paint::fill(color)));
            }
            Some(Variant::Double) => {
                out.push(circle(x + 3.0, radius, Paint::fill(color)));
                out.push(circle(x, radius, Paint::fill(color)));
            }
            Some(Variant::Triple) => {
                for i in 1..=2 {
                    out.push(circle(x + i as f64 * 2.5, radius, Paint::fill(color)));
                }
                out.push(circle(x, radius, Paint::fill(color)));
            }
            _ => out.push(circle(x, radius, Paint::fill(color))),
        }
    }
}

fn dashes(out: &mut Vec<Primitive>, color: Rgb, width: f64, v: Option<Variant>) {
    let (dash_w, dash_h, spacing) = match v {
        Some(Variant::Short) => (4.0, 2.0, 8.0),
        Some(Variant::Long) => (10.0, 2.0, 14.0),
        Some(Variant::Thick) => (6.0, 3.0, 10.0),
        Some(Variant::Thin) => (6.0, 1.0, 10.0),
        Some(Variant::Double) => (5.0, 1.0, 10.0),
        Some(Variant::Dotted) => (2.0, 2.0, 5.0),
        Some(Variant::Spaced) => (6.0, 2.0, 14.0),
        Some(Variant::Dense) => (4.0, 2.0, 6.0),
        Some(Variant::Tapered) => (8.0, 2.0, 12.0),
        _ => (6.0, 2.0, 10.0),
    };
    let rx = (v == Some(Variant::Tapered)).then_some(1.0);
    for x in steps(0.0, spacing, width) {
        let w = f64::min(dash_w, width - x);
        let y = (ANCHOR_HEIGHT - dash_h) / 2.0;
        out.push(Primitive::Rect { x, y, width: w, height: dash_h, rx, paint: Paint::fill(color) });
        if v == Some(Variant::Double) {
            out.push(Primitive::Rect {
                x,
                y: y + 2.0,
                width: w,
                height: dash_h,
                rx: None,
                paint: Paint::fill(color),
            });
        }
    }
}

fn triangles(out: &mut Vec<Primitive>, color: Rgb, width: f64, v: Option<Variant>) {
    let (size, spacing) = match v {
        Some(Variant::Small) => (4.0, 6.0),
        Some(Variant::Large) => (8.0, 12.0),
        _ => (6.0, 10.0),
    };
    let half = size / 2.0;
    let (top, bottom) = (1.0, ANCHOR_HEIGHT - 1.0);
    for x in steps(0.0, spacing, width) {
        let pointing_down = v == Some(Variant::Down)
            || (v == Some(Variant::Alternating) && !is_even_tile(x, spacing));
        let points = if pointing_down {
            vec![(x, top), (x + half, bottom), (x + size, top)]
        } else {
            vec![(x, bottom), (x + half, top), (x + size, bottom)]
        };
        let paint = if v == Some(Variant::Hollow) {
            Paint::stroke(color, 1.0)
        } else {
            Paint::fill(color)
        };
        out.push(Primitive::Polygon { points, paint });
    }
}

fn waves(out: &mut Vec<Primitive>, color: Rgb, width: f64, v: Option<Variant>) {
    let (amplitude, wavelength) = match v {
        Some(Variant::Gentle) => (1.5, 12.0),
        Some(Variant::Steep) => (2.5, 6.0),
        Some(Variant::Double) => (1.5, 8.0),
        Some(Variant::Sine) => (2.0, 10.0),
        _ => (2.0, 8.0),
    };
    let d = if v == Some(Variant::Zigzag) {
        zigzag_path(width, amplitude, wavelength)
    } else {
        wave_path(width, amplitude, wavelength)
    };
    let doubled = v == Some(Variant::Double);
    let paint = Paint::stroke(color, if doubled { 1.0 } else { 1.5 });
    if doubled {
        out.push(Primitive::Path { d: d.clone(), dy: None, paint });
        out.push(Primitive::Path { d, dy: Some(2.0), paint });
    } else {
        out.push(Primitive::Path { d, dy: None, paint });
    }
}

fn squares(out: &mut Vec<Primitive>, color: Rgb, width: f64, v: Option<Variant>) {
    let (size, spacing) = match v {
        Some(Variant::Small | Variant::Checkered) => (3.0, 6.0),
        Some(Variant::Large) => (5.0, 9.0),
        _ => (4.0, 8.0),
    };
    let half = size / 2.0;
    for x in steps(spacing / 2.0 - half, spacing, width) {
        if v == Some(Variant::Rotated) {
            let cx = x + half;
            out.push(Primitive::Polygon {
                points: vec![(cx, MID - half), (cx + half, MID), (cx, MID + half), (cx - half, MID)],
                paint: Paint::fill(color),
            });
            continue;
        }
        let paint = match v {
            Some(Variant::Hollow) => Paint::stroke(color, 1.0),
            Some(Variant::Alternating | Variant::Checkered) => {
                let fill = is_even_tile(x, spacing).then_some(color);
                Paint::fill_and_stroke(fill, color, 0.5)
            }
            _ => Paint::fill(color),
        };
        out.push(Primitive::Rect {
            x,
            y: (ANCHOR_HEIGHT - size) / 2.0,
            width: size,
            height: size,
            rx: None,
            paint,
        });
    }
}

fn diamonds(out: &mut Vec<Primitive>, color: Rgb, width: f64, v: Option<Variant>) {
    let (size_x, size_y, spacing) = match v {
        Some(Variant::Small) => (3.0, 4.0, 7.0),
        Some(Variant::Large) => (5.0, 6.0, 11.0),
        Some(Variant::Stretched) => (6.0, 4.0, 10.0),
        _ => (4.0, 5.0, 9.0),
    };
    for x in steps(spacing / 2.0, spacing, width) {
        let points = vec![
            (x, MID - size_y / 2.0),
            (x + size_x / 2.0, MID),
            (x, MID + size_y / 2.0),
            (x - size_x / 2.0, MID),
        ];
        let paint = match v {
            Some(Variant::Hollow) => Paint::stroke(color, 1.0),
            Some(Variant::Alternating) => {
                Paint::fill_and_stroke(is_even_tile(x, spacing).then_some(color), color, 1.0)
            }
            _ => Paint::fill(color),
        };
        out.push(Primitive::Polygon { points, paint });
    }
}

fn crosses(out: &mut Vec<Primitive>, color: Rgb, width: f64) {
    let paint = Paint::stroke(color, 1.5);
    let (top, bottom) = (1.0, ANCHOR_HEIGHT - 1.0);
    for x in steps(4.0, 10.0, width) {
        out.push(Primitive::Line { x1: x - 2.0, y1: top, x2: x + 2.0, y2: bottom, paint });
        out.push(Primitive::Line { x1: x - 2.0, y1: bottom, x2: x + 2.0, y2: top, paint });
    }
}

fn plus_signs(out: &mut Vec<Primitive>, color: Rgb, width: f64) {
    let paint = Paint::stroke(color, 1.5);
    for x in steps(4.0, 10.0, width) {
        out.push(Primitive::Line { x1: x - 2.0, y1: MID, x2: x + 2.0, y2: MID, paint });
        out.push(Primitive::Line { x1: x, y1: 1.0, x2: x, y2: ANCHOR_HEIGHT - 1.0, paint });
    }
}

fn stars(out: &mut Vec<Primitive>, color: Rgb, width: f64) {
    const OUTER: f64 = 2.5;
    const INNER: f64 = 1.0;
    for cx in steps(5.0, 12.0, width) {
        let mut points = Vec::with_capacity(10);
        for i in 0..5 {
            let outer = (i as f64 * 72.0 - 90.0) * PI / 180.0;
            let inner = (i as f64 * 72.0 + 36.0 - 90.0) * PI / 180.0;
            points.push((OUTER.mul_add(outer.cos(), cx), OUTER.mul_add(outer.sin(), MID)));
            points.push((INNER.mul_add(inner.cos(), cx), INNER.mul_add(inner.sin(), MID)));
        }
        out.push(Primitive::Polygon { points, paint: Paint::fill(color) });
    }
}

fn hearts(out: &mut Vec<Primitive>, color: Rgb, width: f64) {
    const SIZE: f64 = 2.0;
    for x in steps(5.0, 12.0, width) {
        let d = format!(
            "M {x0} {bottom} C {left} {shoulder} {x0} {lobe} {x0} {dip} C {x0} {lobe} {right} {shoulder} {x0} {bottom}",
            x0 = num(x),
            bottom = num(MID + SIZE),
            left = num(x - SIZE * 2.0),
            right = num(x + SIZE * 2.0),
            shoulder = num(MID - SIZE),
            lobe = num(MID - SIZE * 1.5),
            dip = num(MID - SIZE * 0.5),
        );
        out.push(Primitive::Path { d, dy: None, paint: Paint::fill(color) });
    }
}

fn chevrons(out: &mut Vec<Primitive>, color: Rgb, width: f64, v: Option<Variant>) {
    let dir = if v == Some(Variant::Left) { -1.0 } else { 1.0 };
    let paint = Paint::stroke(color, 1.5).rounded();
    for x in steps(5.0, 10.0, width) {
        out.push(Primitive::Polyline {
            points: vec![
                (x - dir * 2.0, 1.0),
                (x + dir * 2.0, MID),
                (x - dir * 2.0, ANCHOR_HEIGHT - 1.0),
            ],
            paint,
        });
    }
}

fn brackets(out: &mut Vec<Primitive>, color: Rgb, width: f64) {
    let paint = Paint::stroke(color, 1.0);
    let (top, bottom) = (1.0, ANCHOR_HEIGHT - 1.0);
    for x in steps(3.0, 14.0, width) {
        out.push(Primitive::Polyline {
            points: vec![(x + 2.0, top), (x, top), (x, bottom), (x + 2.0, bottom)],
            paint,
        });
        out.push(Primitive::Polyline {
            points: vec![(x + 5.0, top), (x + 7.0, top), (x + 7.0, bottom), (x + 5.0, bottom)],
            paint,
        });
    }
}

fn slashes(out: &mut Vec<Primitive>, color: Rgb, width: f64, backward: bool) {
    let paint = Paint::stroke(color, 1.5);
    let (top, bottom) = (1.0, ANCHOR_HEIGHT - 1.0);
    let (y1, y2) = if backward { (top, bottom) } else { (bottom, top) };
    for x in steps(2.0, 8.0, width) {
        out.push(Primitive::Line { x1: x, y1, x2: x + 4.0, y2, paint });
    }
}

fn pipes(out: &mut Vec<Primitive>, color: Rgb, width: f64) {
    let paint = Paint::stroke(color, 1.5);
    for x in steps(4.0, 8.0, width) {
        out.push(Primitive::Line { x1: x, y1: 1.0, x2: x, y2: ANCHOR_HEIGHT - 1.0, paint });
    }
}

fn tildes(out: &mut Vec<Primitive>, color: Rgb, width: f64) {
    let paint = Paint::stroke(color, 1.5);
    for x in steps(0.0, 12.0, width) {
        let d = format!(
            "M {} {m} Q {} {}, {} {m} Q {} {}, {} {m}",
            num(x),
            num(x + 3.0),
            num(MID - 2.0),
            num(x + 6.0),
            num(x + 9.0),
            num(MID + 2.0),
            num(x + 12.0),
            m = num(MID),
        );
        out.push(Primitive::Path { d, dy: None, paint });
    }
}

fn carets(out: &mut Vec<Primitive>, color: Rgb, width: f64) {
    let paint = Paint::stroke(color, 1.5).rounded();
    for x in steps(4.0, 10.0, width) {
        out.push(Primitive::Polyline {
            points: vec![(x - 3.0, ANCHOR_HEIGHT - 1.0), (x, 1.0), (x + 3.0, ANCHOR_HEIGHT - 1.0)],
            paint,
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
