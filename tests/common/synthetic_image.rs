use lane_detector::image::{ColorFrame, GrayFrame};

/// Rasterize a straight line into a binary edge map with the given
/// half-thickness.
pub fn draw_gray_line(map: &mut GrayFrame, x0: i32, y0: i32, x1: i32, y1: i32, radius: i32) {
    let (dx, dy) = (x1 - x0, y1 - y0);
    let steps = dx.abs().max(dy.abs()).max(1);
    for i in 0..=steps {
        let x = x0 + dx * i / steps;
        let y = y0 + dy * i / steps;
        for oy in -radius..=radius {
            for ox in -radius..=radius {
                let (px, py) = (x + ox, y + oy);
                if px >= 0 && py >= 0 && (px as usize) < map.w && (py as usize) < map.h {
                    map.set(px as usize, py as usize, 255);
                }
            }
        }
    }
}

/// Rasterize a bright stroke into a color frame, simulating a painted lane
/// marking on dark asphalt.
pub fn draw_color_line(
    frame: &mut ColorFrame,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
) {
    let (dx, dy) = (x1 - x0, y1 - y0);
    let steps = dx.abs().max(dy.abs()).max(1);
    for i in 0..=steps {
        let x = x0 + dx * i / steps;
        let y = y0 + dy * i / steps;
        for oy in -radius..=radius {
            for ox in -radius..=radius {
                let (px, py) = (x + ox, y + oy);
                if px >= 0 && py >= 0 && (px as usize) < frame.w && (py as usize) < frame.h {
                    frame.set_pixel(px as usize, py as usize, [255, 255, 255]);
                }
            }
        }
    }
}
