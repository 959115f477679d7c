use num::Float;

/// `n` evenly spaced values from `min` to `max` inclusive.
pub struct Linspace<F> {
    start: F,
    end: F,
    step: F,
    index: usize,
    len: usize,
}

impl<F: Float> Linspace<F> {
    pub fn new(min: F, max: F, n: usize) -> Self {
        let step = match F::from(n.saturating_sub(1)) {
            Some(num_steps) if n > 1 => (max - min) / num_steps,
            _ => F::zero(),
        };

        Linspace {
            start: min,
            end: max,
            step,
            index: 0,
            len: n,
        }
    }
}

impl<F: Float> Iterator for Linspace<F> {
    type Item = F;

    #[inline]
    fn next(&mut self) -> Option<F> {
        if self.index >= self.len {
            return None;
        }

        // Calculate the value just like numpy.linspace does, endpoint included verbatim
        let index = self.index;
        self.index += 1;

        if index > 0 && index + 1 == self.len {
            return Some(self.end);
        }

        Some(self.start + self.step * F::from(index)?)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl<F: Float> ExactSizeIterator for Linspace<F> {}

#[test]
fn test_linspace() {
    let values: Vec<f64> = Linspace::new(0., 1., 5).collect();

    assert_eq!(values, vec![0., 0.25, 0.5, 0.75, 1.]);
    assert_eq!(Linspace::new(2f32, 4., 1).collect::<Vec<_>>(), vec![2.]);
    assert_eq!(Linspace::new(0f64, 0.7, 8).last(), Some(0.7));
    assert_eq!(Linspace::new(2f64, 4., 0).count(), 0);

    let mut iter = Linspace::new(-20f64, 50., 701);
    assert_eq!(iter.len(), 701);
    iter.next();
    assert_eq!(iter.len(), 700);
}
