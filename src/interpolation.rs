use crate::model::Positioned;

pub trait Lerp: Copy {
    /// `self` at `t = 0`, `next` at `t = 1`.
    fn lerp(self, next: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, next: Self, t: f32) -> Self {
        next * t + self * (1.0 - t)
    }
}

impl<const N: usize> Lerp for [f32; N] {
    fn lerp(self, next: Self, t: f32) -> Self {
        std::array::from_fn(|i| self[i].lerp(next[i], t))
    }
}

/// Interpolated color channel value at some position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
    pub color: [f32; 3],
    pub intensity: f32,
}

impl ColorSample {
    pub const WHITE: ColorSample = ColorSample {
        color: [1.0, 1.0, 1.0],
        intensity: 1.0,
    };

    /// RGB scaled by intensity; may exceed 1.0.
    pub fn premultiplied(&self) -> [f32; 3] {
        self.color.map(|c| c * self.intensity)
    }
}

impl Lerp for ColorSample {
    fn lerp(self, next: Self, t: f32) -> Self {
        ColorSample {
            color: self.color.lerp(next.color, t),
            intensity: self.intensity.lerp(next.intensity, t),
        }
    }
}

impl From<ColorSample> for [f32; 4] {
    fn from(sample: ColorSample) -> Self {
        let [r, g, b] = sample.color;
        [r, g, b, sample.intensity]
    }
}

/// Piecewise-linear sample over markers sorted by position.
///
/// Flat outside the marker span: `x` before the first marker yields the first
/// value, `x` at or after the last yields the last. Inside, the half-open
/// interval `[p_i, p_i+1)` holding `x` is blended; with duplicate positions
/// the first such interval in array order is used. Returns `None` for an
/// empty slice or when no interval matches (NaN query).
pub fn sample<M, V>(markers: &[M], x: f32, value: impl Fn(&M) -> V) -> Option<V>
where
    M: Positioned,
    V: Lerp,
{
    let first = markers.first()?;
    let last = markers.last()?;

    if x < first.position() {
        return Some(value(first));
    }
    if last.position() <= x {
        return Some(value(last));
    }

    markers
        .windows(2)
        .find(|pair| pair[0].position() <= x && x < pair[1].position())
        .map(|pair| {
            let (start, end) = (pair[0].position(), pair[1].position());
            let t = (x - start) / (end - start);
            value(&pair[0]).lerp(value(&pair[1]), t)
        })
}
