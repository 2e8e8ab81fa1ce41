//! Template selection strategies.
//!
//! Production code picks uniformly at random; tests swap in a fixed index so
//! composed replies are reproducible.

use rand::Rng;

/// Picks one index out of `len` options
pub trait ResponseSelector: Send + Sync {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&self, len: usize) -> usize;

    /// Pick one entry of `options`, `None` when empty
    fn choose<'a>(&self, options: &'a [String]) -> Option<&'a str> {
        if options.is_empty() {
            return None;
        }
        let index = self.pick(options.len()).min(options.len() - 1);
        options.get(index).map(String::as_str)
    }
}

/// Uniform selection over the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl ResponseSelector for RandomSelector {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always the first option
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstSelector;

impl ResponseSelector for FirstSelector {
    fn pick(&self, _len: usize) -> usize {
        0
    }
}

/// Always the given index, clamped to the last option
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector(pub usize);

impl ResponseSelector for FixedSelector {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    }

    #[test]
    fn test_random_stays_in_range() {
        let selector = RandomSelector;
        for _ in 0..200 {
            assert!(selector.pick(4) < 4);
        }
        assert_eq!(selector.pick(1), 0);
    }

    #[test]
    fn test_fixed_selectors() {
        assert_eq!(FirstSelector.choose(&options()), Some("a"));
        assert_eq!(FixedSelector(1).choose(&options()), Some("b"));
        assert_eq!(FixedSelector(99).choose(&options()), Some("c"));
    }

    #[test]
    fn test_empty_options() {
        assert_eq!(RandomSelector.choose(&[]), None);
        assert_eq!(FixedSelector(2).choose(&[]), None);
    }
}
