/// Piecewise-linear color ramps sampled at t in [0, 1].
///
/// Control points follow the perceptually ordered ramps the result
/// views use: a viridis-like sequential ramp and a red-yellow-green
/// diverging ramp. Interpolators emit `#rrggbb` strings.
pub type Interpolator = fn(f64) -> String;

const VIRIDIS: &[[u8; 3]] = &[
    [68, 1, 84],
    [72, 40, 120],
    [62, 74, 137],
    [49, 104, 142],
    [38, 130, 142],
    [31, 158, 137],
    [53, 183, 121],
    [109, 205, 89],
    [180, 222, 44],
    [253, 231, 37],
];

const RED_YELLOW_GREEN: &[[u8; 3]] = &[
    [165, 0, 38],
    [215, 48, 39],
    [244, 109, 67],
    [253, 174, 97],
    [254, 224, 139],
    [255, 255, 191],
    [217, 239, 139],
    [166, 217, 106],
    [102, 189, 99],
    [26, 152, 80],
    [0, 104, 55],
];

fn sample(ramp: &[[u8; 3]], t: f64) -> [u8; 3] {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let span = (ramp.len() - 1) as f64;
    let position = t * span;
    let lower = position.floor() as usize;
    let upper = (lower + 1).min(ramp.len() - 1);
    let fraction = position - lower as f64;

    let mut channels = [0u8; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        let a = f64::from(ramp[lower][i]);
        let b = f64::from(ramp[upper][i]);
        *channel = (a + (b - a) * fraction).round() as u8;
    }
    channels
}

fn to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

pub fn viridis(t: f64) -> String {
    to_hex(sample(VIRIDIS, t))
}

pub fn red_yellow_green(t: f64) -> String {
    to_hex(sample(RED_YELLOW_GREEN, t))
}
