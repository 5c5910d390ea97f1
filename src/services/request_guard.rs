/// Monotonic ticket counter for list fetches.
///
/// Each fetch takes a ticket; only the answer to the newest ticket may
/// replace what is on screen, so a slow older response cannot overwrite a
/// newer one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request and returns its ticket
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut seq = RequestSequence::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_nothing_current_before_first_request() {
        let seq = RequestSequence::new();
        assert!(!seq.is_current(1));
    }
}
