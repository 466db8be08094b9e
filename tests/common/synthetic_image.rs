/// Uniform image of one intensity.
pub fn uniform_u8(width: usize, height: usize, value: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![value; width * height]
}

/// High-contrast checkerboard with square cells.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            img[y * width + x] = if sum & 1 == 0 { 32 } else { 220 };
        }
    }
    img
}

/// `background` image with the half-open rectangle `[x0, x1) × [y0, y1)` set
/// to `value`.
pub fn filled_rect_u8(
    width: usize,
    height: usize,
    (x0, y0): (usize, usize),
    (x1, y1): (usize, usize),
    value: u8,
    background: u8,
) -> Vec<u8> {
    let mut img = uniform_u8(width, height, background);
    for y in y0..y1.min(height) {
        for x in x0..x1.min(width) {
            img[y * width + x] = value;
        }
    }
    img
}

/// Two-pixel-wide 45° stroke: pixels `(i, i)` and `(i + 1, i)` for `i` in
/// `start..end`.
pub fn diagonal_stroke_u8(
    width: usize,
    height: usize,
    start: usize,
    end: usize,
    value: u8,
    background: u8,
) -> Vec<u8> {
    let mut img = uniform_u8(width, height, background);
    for i in start..end {
        img[i * width + i] = value;
        img[i * width + i + 1] = value;
    }
    img
}

/// Deterministic speckle: pixel values from a linear congruential sequence,
/// strokes where the value exceeds `threshold`.
pub fn speckle_u8(width: usize, height: usize, seed: u32, threshold: u8) -> Vec<u8> {
    let mut state = seed;
    (0..width * height)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let v = (state >> 24) as u8;
            if v > threshold {
                v
            } else {
                0
            }
        })
        .collect()
}

/// Nearest-neighbour upscaling by an integer factor.
pub fn replicate_u8(img: &[u8], width: usize, height: usize, factor: usize) -> Vec<u8> {
    let out_w = width * factor;
    let mut out = vec![0u8; out_w * height * factor];
    for y in 0..height * factor {
        for x in 0..out_w {
            out[y * out_w + x] = img[(y / factor) * width + x / factor];
        }
    }
    out
}

/// Interleaved RGB with all three channels equal to `gray`.
pub fn gray_to_rgb(gray: &[u8]) -> Vec<u8> {
    gray.iter().flat_map(|&v| [v, v, v]).collect()
}
