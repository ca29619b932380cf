//! RewardSleuth application icon generator.
//!
//! Produces a procedural icon: a wrapped gift box with a ribbon cross
//! and a two-loop bow (the "reward" motif). The icon is rendered at an
//! arbitrary resolution as RGBA pixel data suitable for use as a window
//! icon.

/// Generate a RewardSleuth icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    let rgba = render_icon(size);
    egui::IconData {
        rgba,
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    // Box occupies the lower two-thirds; the bow sits on the lid.
    let box_left = s * 0.14;
    let box_right = s * 0.86;
    let box_top = s * 0.36;
    let box_bottom = s * 0.92;
    let corner = s * 0.05;

    // Lid band is slightly wider than the box body.
    let lid_left = s * 0.10;
    let lid_right = s * 0.90;
    let lid_top = s * 0.30;
    let lid_bottom = s * 0.46;

    // Vertical ribbon centred on the box.
    let ribbon_half_w = s * 0.055;
    let cx = s * 0.5;

    // Bow loops above the lid.
    let bow_y = s * 0.22;
    let bow_r = s * 0.105;
    let bow_dx = s * 0.10;

    // Palette.
    let body: [u8; 3] = [0xfa, 0xb3, 0x87]; // peach wrap
    let lid: [u8; 3] = [0xf3, 0x8b, 0xa8]; // pink lid
    let ribbon: [u8; 3] = [0x89, 0xb4, 0xfa]; // blue ribbon

    // ── Per-pixel rendering ─────────────────────────────────────
    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let mut cr: u8 = 0;
            let mut cg: u8 = 0;
            let mut cb: u8 = 0;
            let mut ca: f32 = 0.0;

            // 1. Box body (rounded rectangle). ───────────────────
            let body_d = rounded_rect_dist(px, py, box_left, box_top, box_right, box_bottom, corner);
            if body_d < 1.5 {
                let aa = smooth_edge(body_d, 0.0);
                // Vertical shading: darker toward the bottom.
                let shade = 1.0 - 0.18 * ((py - box_top) / (box_bottom - box_top)).clamp(0.0, 1.0);
                cr = (body[0] as f32 * shade) as u8;
                cg = (body[1] as f32 * shade) as u8;
                cb = (body[2] as f32 * shade) as u8;
                ca = aa;
            }

            // 2. Lid band. ───────────────────────────────────────
            let lid_d = rounded_rect_dist(px, py, lid_left, lid_top, lid_right, lid_bottom, corner);
            if lid_d < 1.5 {
                let aa = smooth_edge(lid_d, 0.0);
                cr = lerp_c(cr, lid[0], aa);
                cg = lerp_c(cg, lid[1], aa);
                cb = lerp_c(cb, lid[2], aa);
                ca = ca + (1.0 - ca) * aa;
            }

            // 3. Vertical ribbon over box and lid. ───────────────
            let on_box = body_d < 1.5 || lid_d < 1.5;
            if on_box {
                let rd = (px - cx).abs() - ribbon_half_w;
                if rd < 1.5 {
                    let aa = smooth_edge(rd, 0.0);
                    // Highlight down the ribbon centre.
                    let glow = 1.0 + 0.12 * (1.0 - ((px - cx).abs() / ribbon_half_w).min(1.0));
                    cr = lerp_c(cr, (ribbon[0] as f32 * glow).min(255.0) as u8, aa);
                    cg = lerp_c(cg, (ribbon[1] as f32 * glow).min(255.0) as u8, aa);
                    cb = lerp_c(cb, (ribbon[2] as f32 * glow).min(255.0) as u8, aa);
                    ca = ca + (1.0 - ca) * aa;
                }
            }

            // 4. Bow loops (two offset circles). ─────────────────
            for side in [-1.0f32, 1.0] {
                let bx = cx + side * bow_dx;
                let d = ((px - bx).powi(2) + (py - bow_y).powi(2)).sqrt() - bow_r;
                if d < 1.5 {
                    let aa = smooth_edge(d, 0.0);
                    // Hollow the loop centres slightly for a knot look.
                    let inner = ((px - bx).powi(2) + (py - bow_y).powi(2)).sqrt() - bow_r * 0.45;
                    let hollow = if inner < 0.0 { 0.75 } else { 1.0 };
                    cr = lerp_c(cr, (ribbon[0] as f32 * hollow) as u8, aa);
                    cg = lerp_c(cg, (ribbon[1] as f32 * hollow) as u8, aa);
                    cb = lerp_c(cb, (ribbon[2] as f32 * hollow) as u8, aa);
                    ca = ca + (1.0 - ca) * aa;
                }
            }

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx] = cr;
            pixels[idx + 1] = cg;
            pixels[idx + 2] = cb;
            pixels[idx + 3] = (ca * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Signed distance to a rounded rectangle (negative inside).
fn rounded_rect_dist(
    px: f32,
    py: f32,
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    radius: f32,
) -> f32 {
    let cx = px.clamp(left + radius, right - radius);
    let cy = py.clamp(top + radius, bottom - radius);
    let dx = px - cx;
    let dy = py - cy;
    (dx * dx + dy * dy).sqrt() - radius
}

/// Smooth anti-aliased edge (1 → 0 as `dist` crosses `edge`).
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -1.0 {
        1.0
    } else if d > 1.0 {
        0.0
    } else {
        0.5 - d * 0.5
    }
}

/// Linear interpolation for a single colour channel.
fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}
