use crate::error::{BoardError, BoardResult};

/// Backgrounds shipped with the board, in cycling order
pub const DEFAULT_BACKGROUNDS: [&str; 5] = ["book", "gift-sweater", "house-cookie", "snowman", "tree"];

/// Picks the current background out of a fixed, ordered list of names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundSelector {
    names: Vec<String>,
    index: usize,
}

impl Default for BackgroundSelector {
    fn default() -> Self {
        Self {
            names: DEFAULT_BACKGROUNDS.iter().map(|name| name.to_string()).collect(),
            index: 0,
        }
    }
}

impl BackgroundSelector {
    /// Creates a selector positioned on `initial`, which must be one of `names`.
    pub fn new(names: Vec<String>, initial: &str) -> BoardResult<Self> {
        if names.is_empty() {
            return Err(BoardError::NoBackgrounds);
        }
        let index = names
            .iter()
            .position(|name| name == initial)
            .ok_or_else(|| BoardError::UnknownBackground(initial.to_string()))?;
        Ok(Self { names, index })
    }

    pub fn current(&self) -> &str {
        &self.names[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Advance to the next background, wrapping after the last one
    pub fn cycle(&mut self) -> &str {
        self.index = (self.index + 1) % self.names.len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        DEFAULT_BACKGROUNDS.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_cycle_wraps_to_first() {
        let mut selector = BackgroundSelector::new(names(), "tree").unwrap();
        assert_eq!(selector.cycle(), "book");
        assert_eq!(selector.cycle(), "gift-sweater");
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut selector = BackgroundSelector::new(names(), "house-cookie").unwrap();
        let start = selector.clone();
        for _ in 0..selector.len() {
            selector.cycle();
        }
        assert_eq!(selector, start);
    }

    #[test]
    fn test_unknown_initial_is_rejected() {
        let result = BackgroundSelector::new(names(), "fireplace");
        assert!(matches!(result, Err(BoardError::UnknownBackground(name)) if name == "fireplace"));
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let result = BackgroundSelector::new(Vec::new(), "book");
        assert!(matches!(result, Err(BoardError::NoBackgrounds)));
    }

    #[test]
    fn test_single_background_cycles_onto_itself() {
        let mut selector = BackgroundSelector::new(vec!["snow".to_string()], "snow").unwrap();
        assert_eq!(selector.cycle(), "snow");
        assert_eq!(selector.index(), 0);
    }
}
