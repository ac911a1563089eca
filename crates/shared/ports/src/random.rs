/// Port for the simulation's single source of randomness
///
/// Every random draw in the simulation goes through one injected
/// `RandomSource`, so a fixed seed (or a scripted sequence) reproduces the
/// exact same prices, series and orders.
pub trait RandomSource {
    /// Next uniform float in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// Fair coin: true when the draw lands above one half
    fn coin(&mut self) -> bool {
        self.next_f64() > 0.5
    }

    /// Uniform index into a collection of `len` items (`len` must be non-zero)
    fn index(&mut self, len: usize) -> usize {
        let i = (self.next_f64() * len as f64).floor() as usize;
        i.min(len.saturating_sub(1))
    }

    /// Uniform float in `[low, high)`
    fn between(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_f64() * (high - low)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}
